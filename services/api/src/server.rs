use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryLeadNotifier, InMemoryLeadRepository};
use crate::routes::with_studio_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use studio_core::config::AppConfig;
use studio_core::error::AppError;
use studio_core::quiz::{standard_funnel, standard_pricing_model, QuizLeadService};
use studio_core::telemetry;
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

    let repository = Arc::new(InMemoryLeadRepository::default());
    let notifier = Arc::new(InMemoryLeadNotifier::default());
    let lead_service = Arc::new(QuizLeadService::new(
        standard_funnel(),
        standard_pricing_model(),
        repository,
        notifier,
    ));

    let app = with_studio_routes(lead_service)
        .layer(Extension(app_state))
        .layer(Extension(config.quote.clone()))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "agency back-office service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
