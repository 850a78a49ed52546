use chrono::NaiveDate;
use credit_onboarding::config::EngineConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: EngineConfig,
}

/// Where the evaluation date of a report came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ReferenceDateSource {
    Request,
    Configuration,
    Clock,
}

/// Request override first, then `APP_REFERENCE_DATE`, then the wall clock.
pub(crate) fn resolve_today(
    requested: Option<NaiveDate>,
    engine: &EngineConfig,
) -> (NaiveDate, ReferenceDateSource) {
    match (requested, engine.reference_date) {
        (Some(today), _) => (today, ReferenceDateSource::Request),
        (None, Some(today)) => (today, ReferenceDateSource::Configuration),
        (None, None) => (engine.today(), ReferenceDateSource::Clock),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
