// Model exports
pub mod domain;
pub mod localized;
pub mod requests;
pub mod responses;

pub use domain::{InvalidRiskWeight, IsolationStatus, RiskEvaluation, Symptom, SymptomsQuestionnaire};
pub use localized::{LocalizedTextMap, MissingLocalization, DEFAULT_LOCALE};
pub use requests::{EvaluateRequest, QuestionnaireQuery};
pub use responses::{ErrorResponse, EvaluateResponse, HealthResponse, LocalizedSymptom, QuestionnaireResponse};
