use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to evaluate a symptom selection
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluateRequest {
    /// Catalog positions of the selected symptoms
    #[validate(length(max = 256))]
    #[serde(alias = "selected_symptoms", rename = "selectedSymptoms", default)]
    pub selected_symptoms: Vec<usize>,
    /// Date the isolation window starts from, defaults to today (UTC)
    #[serde(alias = "reference_date", rename = "referenceDate")]
    pub reference_date: Option<chrono::NaiveDate>,
}

/// Query parameters for the localized questionnaire listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionnaireQuery {
    /// Comma-separated locale tags in order of preference
    pub locales: Option<String>,
}

impl QuestionnaireQuery {
    pub fn preferred_locales(&self) -> Vec<String> {
        self.locales
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect()
    }
}
