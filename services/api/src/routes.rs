use crate::infra::{parse_date, resolve_today, AppState, ReferenceDateSource};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use credit_onboarding::error::AppError;
use credit_onboarding::workflows::onboarding::{
    CompanyProfile, CompletionEngine, FinancialDocument, OnboardingReport,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OnboardingStatusRequest {
    #[serde(default)]
    pub(crate) profile: Option<CompanyProfile>,
    #[serde(default)]
    pub(crate) documents: Vec<FinancialDocument>,
    #[serde(default)]
    pub(crate) today: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct OnboardingStatusResponse {
    pub(crate) reference_date_source: ReferenceDateSource,
    #[serde(flatten)]
    pub(crate) report: OnboardingReport,
}

pub(crate) fn onboarding_routes() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/onboarding/status",
            axum::routing::post(onboarding_status_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn onboarding_status_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<OnboardingStatusRequest>,
) -> Result<Json<OnboardingStatusResponse>, AppError> {
    let OnboardingStatusRequest {
        profile,
        documents,
        today,
    } = payload;

    let requested = today
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(AppError::invalid_request)?;
    let (today, reference_date_source) = resolve_today(requested, &state.engine);

    let report = CompletionEngine::new(today).report(profile.as_ref(), &documents);
    tracing::info!(
        %today,
        summary = report.summary.label(),
        documents = documents.len(),
        "onboarding status evaluated"
    );

    Ok(Json(OnboardingStatusResponse {
        reference_date_source,
        report,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use chrono::NaiveDate;
    use credit_onboarding::config::EngineConfig;
    use credit_onboarding::workflows::onboarding::{OnboardingSection, StatusBucket, StepStatus};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn state(reference_date: Option<NaiveDate>, ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
            engine: EngineConfig { reference_date },
        }
    }

    fn request(raw: Value) -> OnboardingStatusRequest {
        serde_json::from_value(raw).expect("request decodes")
    }

    async fn read_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&body).expect("json payload")
    }

    #[tokio::test]
    async fn status_endpoint_reports_uploaded_interim_return() {
        let payload = request(json!({
            "profile": {
                "CompanyInformation": { "TradeName": "Anadolu Tekstil A.S." }
            },
            "documents": [
                { "Id": 12, "LabelId": 33, "PeriodYear": 2024, "PeriodQuarter": 1, "Status": 1 }
            ],
            "today": "2024-06-15"
        }));

        let Json(body) = onboarding_status_endpoint(Extension(state(None, true)), Json(payload))
            .await
            .expect("report builds");

        assert_eq!(body.reference_date_source, ReferenceDateSource::Request);
        let report = body.report;
        assert_eq!(
            report.section(OnboardingSection::CompanyInformation).map(|entry| entry.status),
            Some(Some(StepStatus::Started))
        );
        assert_eq!(report.statuses.get(OnboardingSection::Financial), Some(StepStatus::Started));

        let interim = report
            .documents
            .iter()
            .find(|row| row.key == "33-2024-1")
            .expect("interim slot");
        assert!(interim.is_uploaded);
        assert_eq!(interim.document_id, Some(12));
        assert_eq!(interim.status, Some(StatusBucket::Current));
    }

    #[tokio::test]
    async fn status_endpoint_falls_back_to_configured_date() {
        let configured = NaiveDate::from_ymd_opt(2024, 12, 5).expect("valid date");
        let Json(body) = onboarding_status_endpoint(
            Extension(state(Some(configured), true)),
            Json(OnboardingStatusRequest::default()),
        )
        .await
        .expect("report builds");

        assert_eq!(body.reference_date_source, ReferenceDateSource::Configuration);
        assert_eq!(body.report.today, configured);
        assert_eq!(body.report.periods.previous.year, 2024);
        assert_eq!(body.report.periods.previous.quarter, 3);
        assert_eq!(body.report.summary, StepStatus::NotStarted);
    }

    #[tokio::test]
    async fn status_endpoint_rejects_malformed_date() {
        let payload = request(json!({ "today": "June 15th" }));
        let err = onboarding_status_endpoint(Extension(state(None, true)), Json(payload))
            .await
            .expect_err("bad date rejected");

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn status_route_serializes_status_vector() {
        let router = onboarding_routes().layer(Extension(state(None, true)));

        let response = router
            .oneshot(
                Request::post("/api/v1/onboarding/status")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{ "documents": [], "today": "2024-06-15" }"#))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["reference_date_source"], "request");
        assert_eq!(
            payload["statuses"],
            json!([
                "not_started",
                "not_started",
                "not_started",
                "not_started",
                "not_started",
                "not_started",
                "not_started",
                "optional",
                null
            ])
        );
        assert_eq!(payload["documents"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn status_route_exposes_review_status_of_uploads() {
        let router = onboarding_routes().layer(Extension(state(None, true)));

        let response = router
            .oneshot(
                Request::post("/api/v1/onboarding/status")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{ "documents": [{ "LabelId": "33", "PeriodYear": 2024, "PeriodQuarter": 1, "Status": 6 }], "today": "2024-06-15" }"#,
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        let interim = payload["documents"]
            .as_array()
            .and_then(|rows| rows.iter().find(|row| row["key"] == "33-2024-1"))
            .expect("interim slot");
        assert_eq!(interim["status_code"], 6);
        assert_eq!(interim["review_status"], "confirmed_and_processed");
        assert_eq!(interim["status"], "current");
    }

    #[tokio::test]
    async fn readiness_reports_initializing_until_bound() {
        let router = onboarding_routes().layer(Extension(state(None, false)));

        let response = router
            .oneshot(
                Request::get("/ready")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let payload = read_json_body(response).await;
        assert_eq!(payload["status"], "initializing");
    }
}
