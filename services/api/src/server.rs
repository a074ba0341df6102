use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_service_routes;
use applicant_screening::config::AppConfig;
use applicant_screening::error::AppError;
use applicant_screening::telemetry;
use applicant_screening::workflows::screening::ScreeningEngine;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let engine = Arc::new(ScreeningEngine::new(config.screening.screening_config()?));
    info!(
        questions = engine.questionnaire().len(),
        rules = ?config.screening.rules_path,
        "screening rules loaded"
    );

    let app = with_service_routes(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "applicant screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
