//! Self-Diagnosis - symptom questionnaire service
//!
//! This library decodes the localized, risk-weighted symptom questionnaire
//! published by the distribution server and evaluates symptom selections
//! against its risk threshold to decide whether an isolation period applies.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{DecodeError, EvaluationError, QuestionnaireEndpoint, RiskEvaluator};
pub use crate::models::{IsolationStatus, LocalizedTextMap, MissingLocalization, RiskEvaluation, Symptom, SymptomsQuestionnaire};
