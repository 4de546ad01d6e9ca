use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{isolation_status, RiskEvaluator};
use crate::models::{
    EvaluateRequest, EvaluateResponse, ErrorResponse, HealthResponse, LocalizedSymptom,
    MissingLocalization, QuestionnaireQuery, QuestionnaireResponse, SymptomsQuestionnaire,
};
use crate::services::{DistributionClient, DistributionError, QuestionnaireCache};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub distribution: Arc<DistributionClient>,
    pub cache: Arc<QuestionnaireCache>,
    pub evaluator: RiskEvaluator,
}

/// Configure all questionnaire-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/questionnaire", web::get().to(get_questionnaire))
        .route("/questionnaire/refresh", web::post().to(refresh_questionnaire))
        .route("/evaluate", web::post().to(evaluate));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.cache.get().await.is_some() {
        "healthy"
    } else {
        "cold"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

fn distribution_failure(e: &DistributionError) -> HttpResponse {
    tracing::error!("Failed to load questionnaire: {}", e);
    HttpResponse::BadGateway().json(ErrorResponse {
        error: "Failed to load questionnaire".to_string(),
        message: e.to_string(),
        status_code: 502,
    })
}

/// Resolve every symptom's text for the preferred locales
fn localize(
    questionnaire: &SymptomsQuestionnaire,
    preferred: &[String],
    default_locale: &str,
) -> Result<QuestionnaireResponse, MissingLocalization> {
    let symptoms = questionnaire
        .symptoms()
        .iter()
        .enumerate()
        .map(|(index, symptom)| {
            Ok::<_, MissingLocalization>(LocalizedSymptom {
                index,
                title: symptom.title().resolve_with_default(preferred, default_locale)?.to_string(),
                description: symptom
                    .description()
                    .resolve_with_default(preferred, default_locale)?
                    .to_string(),
                risk_weight: symptom.risk_weight(),
            })
        })
        .collect::<Result<Vec<_>, MissingLocalization>>()?;

    Ok(QuestionnaireResponse {
        symptoms,
        risk_threshold: questionnaire.risk_threshold(),
        date_selection_window: questionnaire.date_selection_window(),
    })
}

/// Localized questionnaire endpoint
///
/// GET /api/v1/questionnaire?locales=de-DE,en-GB
async fn get_questionnaire(
    state: web::Data<AppState>,
    query: web::Query<QuestionnaireQuery>,
) -> impl Responder {
    let preferred = query.preferred_locales();
    if preferred.len() > 16 {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "at most 16 locales may be requested".to_string(),
            status_code: 400,
        });
    }

    let questionnaire = match state.cache.get_or_fetch(&state.distribution).await {
        Ok(q) => q,
        Err(e) => return distribution_failure(&e),
    };

    let default_locale = state.distribution.endpoint().default_locale();

    match localize(&questionnaire, &preferred, default_locale) {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            tracing::error!("Questionnaire text missing for {:?}: {}", preferred, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Missing localization".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Drop the cached questionnaire
///
/// POST /api/v1/questionnaire/refresh
async fn refresh_questionnaire(state: web::Data<AppState>) -> impl Responder {
    state.cache.invalidate().await;
    tracing::info!("Questionnaire cache refreshed on request");
    HttpResponse::NoContent().finish()
}

/// Risk evaluation endpoint
///
/// POST /api/v1/evaluate
///
/// Request body:
/// ```json
/// {
///   "selectedSymptoms": [0, 2],
///   "referenceDate": "2020-01-01"
/// }
/// ```
async fn evaluate(
    state: web::Data<AppState>,
    req: web::Json<EvaluateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let questionnaire = match state.cache.get_or_fetch(&state.distribution).await {
        Ok(q) => q,
        Err(e) => return distribution_failure(&e),
    };

    let today = chrono::Utc::now().date_naive();
    let reference_date = req.reference_date.unwrap_or(today);

    let result = match state
        .evaluator
        .evaluate_indices(&questionnaire, &req.selected_symptoms, reference_date)
    {
        Some(result) => result,
        None => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Unknown symptom".to_string(),
                message: format!(
                    "selected symptoms must be indices below {}",
                    questionnaire.symptoms().len()
                ),
                status_code: 400,
            });
        }
    };

    match result {
        Ok(evaluation) => {
            tracing::info!(
                "Evaluated {} selected symptoms: score {}, at risk: {}",
                req.selected_symptoms.len(),
                evaluation.aggregate_score,
                evaluation.is_at_risk
            );

            HttpResponse::Ok().json(EvaluateResponse {
                is_at_risk: evaluation.is_at_risk,
                aggregate_score: evaluation.aggregate_score,
                isolation_end_date: evaluation.isolation_end_date,
                isolation_status: isolation_status(evaluation.isolation_end_date, today),
            })
        }
        Err(e) => {
            tracing::error!("Failed to evaluate symptoms: {}", e);
            HttpResponse::UnprocessableEntity().json(ErrorResponse {
                error: "Evaluation failed".to_string(),
                message: e.to_string(),
                status_code: 422,
            })
        }
    }
}
