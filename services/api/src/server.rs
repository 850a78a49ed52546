use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::onboarding_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use credit_onboarding::config::AppConfig;
use credit_onboarding::error::AppError;
use credit_onboarding::telemetry;
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
        engine: config.engine.clone(),
    };

    let app = onboarding_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.label(),
        %addr,
        reference_date = ?config.engine.reference_date,
        "credit onboarding service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
