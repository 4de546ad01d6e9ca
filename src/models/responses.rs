use serde::{Deserialize, Serialize};
use crate::models::domain::IsolationStatus;

/// A symptom with its text resolved for the caller's locales
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalizedSymptom {
    pub index: usize,
    pub title: String,
    pub description: String,
    #[serde(rename = "riskWeight")]
    pub risk_weight: f64,
}

/// Response for the questionnaire endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireResponse {
    pub symptoms: Vec<LocalizedSymptom>,
    #[serde(rename = "riskThreshold")]
    pub risk_threshold: f64,
    #[serde(rename = "dateSelectionWindow")]
    pub date_selection_window: i64,
}

/// Response for the evaluate endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateResponse {
    #[serde(rename = "isAtRisk")]
    pub is_at_risk: bool,
    #[serde(rename = "aggregateScore")]
    pub aggregate_score: f64,
    #[serde(rename = "isolationEndDate")]
    pub isolation_end_date: chrono::NaiveDate,
    #[serde(rename = "isolationStatus")]
    pub isolation_status: IsolationStatus,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}
