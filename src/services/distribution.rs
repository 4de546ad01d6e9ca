use crate::core::{DecodeError, QuestionnaireEndpoint};
use crate::models::SymptomsQuestionnaire;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching from the distribution server
#[derive(Debug, Error)]
pub enum DistributionError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("distribution server returned {0}")]
    Status(StatusCode),

    #[error("invalid questionnaire: {0}")]
    Decode(#[from] DecodeError),
}

/// Distribution server client
///
/// Issues the request built by [`QuestionnaireEndpoint`] and decodes the
/// body. Timeouts come from the underlying HTTP client; nothing is retried.
pub struct DistributionClient {
    base_url: String,
    client: Client,
    endpoint: QuestionnaireEndpoint,
}

impl DistributionClient {
    /// Create a new distribution client
    pub fn new(
        base_url: String,
        timeout: Duration,
        endpoint: QuestionnaireEndpoint,
    ) -> Result<Self, DistributionError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &QuestionnaireEndpoint {
        &self.endpoint
    }

    /// Fetch and decode the symptom questionnaire
    pub async fn fetch_questionnaire(&self) -> Result<SymptomsQuestionnaire, DistributionError> {
        let request = self.endpoint.build_request();
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), request.path);

        tracing::debug!("Fetching questionnaire from: {}", url);

        let response = self.client.request(request.method, &url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DistributionError::Status(status));
        }

        let body = response.bytes().await?;
        let questionnaire = self.endpoint.decode(&body)?;

        tracing::debug!(
            "Decoded questionnaire: {} symptoms, threshold {}, window {} days",
            questionnaire.symptoms().len(),
            questionnaire.risk_threshold(),
            questionnaire.date_selection_window()
        );

        Ok(questionnaire)
    }
}
