use crate::models::{InvalidRiskWeight, LocalizedTextMap, Symptom, SymptomsQuestionnaire, DEFAULT_LOCALE};
use reqwest::Method;
use serde::Deserialize;
use thiserror::Error;

/// Resource path of the questionnaire on the distribution server
pub const QUESTIONNAIRE_PATH: &str = "/distribution/symptomatic-questionnaire";

/// Errors that can occur when decoding a questionnaire payload
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("payload does not match questionnaire schema: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("symptom {index}: {source}")]
    InvalidSymptom {
        index: usize,
        #[source]
        source: InvalidRiskWeight,
    },

    #[error("symptom {index}: {field} has no text for default locale {locale}")]
    MissingDefaultLocale {
        index: usize,
        field: &'static str,
        locale: String,
    },
}

/// Outbound request description, handed to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointRequest {
    pub method: Method,
    pub path: &'static str,
}

#[derive(Debug, Deserialize)]
struct RawQuestionnaire {
    symptoms: Vec<RawSymptom>,
    #[serde(rename = "riskThreshold")]
    risk_threshold: f64,
    #[serde(rename = "symptomsOnsetWindowDays")]
    symptoms_onset_window_days: i64,
}

#[derive(Debug, Deserialize)]
struct RawSymptom {
    title: LocalizedTextMap,
    description: LocalizedTextMap,
    #[serde(rename = "riskWeight")]
    risk_weight: f64,
}

/// Symptomatic questionnaire endpoint
///
/// Knows the request shape and how to turn a response body into a
/// [`SymptomsQuestionnaire`]. Decoding is strict: any missing or mistyped
/// field rejects the whole payload, never a partial catalog.
#[derive(Debug, Clone)]
pub struct QuestionnaireEndpoint {
    default_locale: String,
}

impl QuestionnaireEndpoint {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// GET request for the questionnaire, no parameters and no body
    pub fn build_request(&self) -> EndpointRequest {
        EndpointRequest {
            method: Method::GET,
            path: QUESTIONNAIRE_PATH,
        }
    }

    /// Decode a raw response body
    pub fn decode(&self, body: &[u8]) -> Result<SymptomsQuestionnaire, DecodeError> {
        let raw: RawQuestionnaire = serde_json::from_slice(body)?;

        let symptoms = raw
            .symptoms
            .into_iter()
            .enumerate()
            .map(|(index, symptom)| self.decode_symptom(index, symptom))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SymptomsQuestionnaire::new(
            symptoms,
            raw.risk_threshold,
            raw.symptoms_onset_window_days,
        ))
    }

    /// Render a questionnaire back into the wire format
    pub fn encode(&self, questionnaire: &SymptomsQuestionnaire) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(questionnaire)
    }

    fn decode_symptom(&self, index: usize, raw: RawSymptom) -> Result<Symptom, DecodeError> {
        for (field, text) in [("title", &raw.title), ("description", &raw.description)] {
            if !text.contains_locale(&self.default_locale) {
                return Err(DecodeError::MissingDefaultLocale {
                    index,
                    field,
                    locale: self.default_locale.clone(),
                });
            }
        }

        Symptom::new(raw.title, raw.description, raw.risk_weight)
            .map_err(|source| DecodeError::InvalidSymptom { index, source })
    }
}

impl Default for QuestionnaireEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> QuestionnaireEndpoint {
        QuestionnaireEndpoint::default()
    }

    #[test]
    fn test_build_request() {
        let request = endpoint().build_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "/distribution/symptomatic-questionnaire");
    }

    #[test]
    fn test_decode_empty_list() {
        let body = br#"{"symptoms":[],"riskThreshold":0.5,"symptomsOnsetWindowDays":14}"#;
        let questionnaire = endpoint().decode(body).unwrap();

        assert!(questionnaire.symptoms().is_empty());
        assert_eq!(questionnaire.risk_threshold(), 0.5);
        assert_eq!(questionnaire.date_selection_window(), 14);
    }

    #[test]
    fn test_decode_symptom_list_keeps_order() {
        let body = br#"{
            "symptoms": [
                {"title": {"en-GB": "Fever", "de-DE": "Fieber"},
                 "description": {"en-GB": "High temperature", "de-DE": "Hohe Temperatur"},
                 "riskWeight": 1},
                {"title": {"en-GB": "Sneezing"},
                 "description": {"en-GB": "Frequent sneezing"},
                 "riskWeight": 0}
            ],
            "riskThreshold": 0.8,
            "symptomsOnsetWindowDays": 14
        }"#;

        let actual = endpoint().decode(body).unwrap();

        let expected = SymptomsQuestionnaire::new(
            vec![
                Symptom::new(
                    LocalizedTextMap::from_iter([("en-GB", "Fever"), ("de-DE", "Fieber")]),
                    LocalizedTextMap::from_iter([
                        ("en-GB", "High temperature"),
                        ("de-DE", "Hohe Temperatur"),
                    ]),
                    1.0,
                )
                .unwrap(),
                Symptom::new(
                    LocalizedTextMap::from_iter([("en-GB", "Sneezing")]),
                    LocalizedTextMap::from_iter([("en-GB", "Frequent sneezing")]),
                    0.0,
                )
                .unwrap(),
            ],
            0.8,
            14,
        );

        assert_eq!(actual, expected);
    }

    #[test]
    fn test_missing_risk_threshold_fails() {
        let body = br#"{"symptoms":[],"symptomsOnsetWindowDays":14}"#;
        let err = endpoint().decode(body).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(_)));
    }

    #[test]
    fn test_symptom_missing_weight_fails_whole_decode() {
        let body = br#"{
            "symptoms": [
                {"title": {"en-GB": "a"}, "description": {"en-GB": "a"}, "riskWeight": 1},
                {"title": {"en-GB": "b"}, "description": {"en-GB": "b"}}
            ],
            "riskThreshold": 0.5,
            "symptomsOnsetWindowDays": 14
        }"#;
        assert!(matches!(endpoint().decode(body), Err(DecodeError::Malformed(_))));
    }

    fn decode_single_symptom(symptom: &str) -> Result<SymptomsQuestionnaire, DecodeError> {
        let body = format!(
            r#"{{"symptoms":[{}],"riskThreshold":0.5,"symptomsOnsetWindowDays":14}}"#,
            symptom
        );
        endpoint().decode(body.as_bytes())
    }

    #[test]
    fn test_symptom_missing_title_fails() {
        let result = decode_single_symptom(r#"{"description": {"en-GB": "a"}, "riskWeight": 1}"#);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_symptom_missing_description_fails() {
        let result = decode_single_symptom(r#"{"title": {"en-GB": "a"}, "riskWeight": 1}"#);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_symptom_title_must_be_object() {
        let result = decode_single_symptom(r#"{"title": "x", "description": {"en-GB": "a"}, "riskWeight": 1}"#);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));

        let result = decode_single_symptom(r#"{"title": {"en-GB": 1}, "description": {"en-GB": "a"}, "riskWeight": 1}"#);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_symptom_weight_must_be_number() {
        let result = decode_single_symptom(r#"{"title": {"en-GB": "a"}, "description": {"en-GB": "a"}, "riskWeight": "1"}"#);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_fractional_window_is_mistyped() {
        let body = br#"{"symptoms":[],"riskThreshold":0.5,"symptomsOnsetWindowDays":14.5}"#;
        assert!(endpoint().decode(body).is_err());

        let body = br#"{"symptoms":[],"riskThreshold":0.5,"symptomsOnsetWindowDays":"14"}"#;
        assert!(endpoint().decode(body).is_err());
    }

    #[test]
    fn test_negative_weight_fails() {
        let body = br#"{
            "symptoms": [{"title": {"en-GB": "a"}, "description": {"en-GB": "a"}, "riskWeight": -1}],
            "riskThreshold": 0.5,
            "symptomsOnsetWindowDays": 14
        }"#;
        let err = endpoint().decode(body).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidSymptom { index: 0, .. }));
    }

    #[test]
    fn test_missing_default_locale_fails() {
        let body = br#"{
            "symptoms": [{"title": {"de-DE": "Husten"}, "description": {"en-GB": "Cough"}, "riskWeight": 1}],
            "riskThreshold": 0.5,
            "symptomsOnsetWindowDays": 14
        }"#;
        match endpoint().decode(body).unwrap_err() {
            DecodeError::MissingDefaultLocale { index, field, locale } => {
                assert_eq!(index, 0);
                assert_eq!(field, "title");
                assert_eq!(locale, "en-GB");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = br#"{"symptoms":[],"riskThreshold":0.5,"symptomsOnsetWindowDays":14,"version":3}"#;
        assert!(endpoint().decode(body).is_ok());
    }

    #[test]
    fn test_weights_preserved_exactly() {
        let body = br#"{
            "symptoms": [{"title": {"en-GB": "a"}, "description": {"en-GB": "a"}, "riskWeight": 0.1234567890123456789}],
            "riskThreshold": 0.30000000000000004,
            "symptomsOnsetWindowDays": 14
        }"#;
        let questionnaire = endpoint().decode(body).unwrap();
        assert_eq!(questionnaire.symptoms()[0].risk_weight(), 0.1234567890123456789_f64);
        assert_eq!(questionnaire.risk_threshold(), 0.1 + 0.2);
    }

    #[test]
    fn test_encode_round_trip() {
        let body = br#"{
            "symptoms": [{"title": {"en-GB": "a", "de-DE": "b"}, "description": {"en-GB": "c"}, "riskWeight": 0.75}],
            "riskThreshold": 0.5,
            "symptomsOnsetWindowDays": 10
        }"#;
        let endpoint = endpoint();
        let questionnaire = endpoint.decode(body).unwrap();
        let encoded = endpoint.encode(&questionnaire).unwrap();

        assert_eq!(endpoint.decode(&encoded).unwrap(), questionnaire);
    }
}
