use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use self_diagnosis::config::{LogFormat, Settings};
use self_diagnosis::core::{QuestionnaireEndpoint, RiskEvaluator};
use self_diagnosis::routes::{self, questionnaire::AppState};
use self_diagnosis::services::{DistributionClient, QuestionnaireCache};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, error};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging, RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Plain => subscriber.init(),
    }

    info!("Starting self-diagnosis questionnaire service...");

    let endpoint = QuestionnaireEndpoint::new(settings.localization.default_locale.clone());

    let distribution = match DistributionClient::new(
        settings.distribution.base_url.clone(),
        Duration::from_secs(settings.distribution.timeout_secs),
        endpoint,
    ) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to create distribution client: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    info!(
        "Distribution client initialized ({}, timeout {}s)",
        settings.distribution.base_url, settings.distribution.timeout_secs
    );

    let cache = Arc::new(QuestionnaireCache::new(settings.cache.ttl_secs));

    // Warm the cache; the service still starts if the distribution server is down
    match cache.get_or_fetch(&distribution).await {
        Ok(q) => info!("Questionnaire loaded: {} symptoms", q.symptoms().len()),
        Err(e) => error!("Initial questionnaire fetch failed, will retry on demand: {}", e),
    }

    let app_state = AppState {
        distribution,
        cache,
        evaluator: RiskEvaluator::new(),
    };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(routes::json_config())
            .app_data(routes::query_config())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
