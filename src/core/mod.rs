// Core questionnaire and risk exports
pub mod endpoint;
pub mod evaluator;
pub mod isolation;

pub use endpoint::{DecodeError, EndpointRequest, QuestionnaireEndpoint, QUESTIONNAIRE_PATH};
pub use evaluator::{EvaluationError, RiskEvaluator};
pub use isolation::{isolation_end_date, isolation_status};
