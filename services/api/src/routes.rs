use crate::infra::{catalog, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use studio_core::config::QuoteConfig;
use studio_core::error::AppError;
use studio_core::pages::{map_page_schema_to_configs, parse_page_schema, PageSectionConfig};
use studio_core::pricing::{compute_discounted_total, compute_totals, SelectedService};
use studio_core::quiz::{
    estimate_range, lead_router, standard_funnel, standard_pricing_model, EstimatedRange,
    LeadNotifier, LeadRepository, QuizLeadService,
};
use studio_core::quote::{render_quote_document_at, BriefData};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteTotalsRequest {
    #[serde(default)]
    pub(crate) selected_site_type: Option<String>,
    #[serde(default)]
    pub(crate) selected_services: Vec<SelectedService>,
    #[serde(default)]
    pub(crate) discount_percent: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteTotalsResponse {
    pub(crate) total: f64,
    pub(crate) recurring: f64,
    pub(crate) discounted_total: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuizEstimateRequest {
    #[serde(default)]
    pub(crate) answers: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageResolveResponse {
    pub(crate) slug: String,
    pub(crate) sections: Vec<PageSectionConfig>,
}

pub(crate) fn with_studio_routes<R, N>(service: Arc<QuizLeadService<R, N>>) -> axum::Router
where
    R: LeadRepository + 'static,
    N: LeadNotifier + 'static,
{
    lead_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/quote/totals",
            axum::routing::post(quote_totals_endpoint),
        )
        .route(
            "/api/v1/quote/document",
            axum::routing::post(quote_document_endpoint),
        )
        .route(
            "/api/v1/quiz/estimate",
            axum::routing::post(quiz_estimate_endpoint),
        )
        .route(
            "/api/v1/pages/resolve",
            axum::routing::post(page_resolve_endpoint),
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

pub(crate) async fn quote_totals_endpoint(
    Json(payload): Json<QuoteTotalsRequest>,
) -> Json<QuoteTotalsResponse> {
    let totals = compute_totals(
        catalog(),
        payload.selected_site_type.as_deref(),
        &payload.selected_services,
    );
    Json(QuoteTotalsResponse {
        total: totals.total,
        recurring: totals.recurring,
        discounted_total: compute_discounted_total(totals.total, payload.discount_percent),
    })
}

/// Briefs that omit `validityDays` take the configured default.
fn apply_quote_defaults(brief: &mut BriefData, quote: &QuoteConfig) {
    brief.validity_days.get_or_insert(quote.validity_days);
}

pub(crate) async fn quote_document_endpoint(
    Extension(quote): Extension<QuoteConfig>,
    Json(mut brief): Json<BriefData>,
) -> impl IntoResponse {
    apply_quote_defaults(&mut brief, &quote);
    brief.recompute(catalog());
    let html = render_quote_document_at(&brief, catalog(), Local::now().date_naive());
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}

pub(crate) async fn quiz_estimate_endpoint(
    Json(payload): Json<QuizEstimateRequest>,
) -> Json<EstimatedRange> {
    let steps = standard_funnel();
    let model = standard_pricing_model();
    Json(estimate_range(&steps, &payload.answers, &model))
}

pub(crate) async fn page_resolve_endpoint(
    Json(payload): Json<serde_json::Value>,
) -> Result<Json<PageResolveResponse>, AppError> {
    let page = parse_page_schema(payload)?;
    let sections = map_page_schema_to_configs(&page);
    Ok(Json(PageResolveResponse {
        slug: page.slug,
        sections,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn health_route_is_wired() {
        use crate::infra::{InMemoryLeadNotifier, InMemoryLeadRepository};
        use axum::body::Body;
        use axum::http::Request;
        use tower::ServiceExt;

        let service = Arc::new(QuizLeadService::new(
            standard_funnel(),
            standard_pricing_model(),
            Arc::new(InMemoryLeadRepository::default()),
            Arc::new(InMemoryLeadNotifier::default()),
        ));
        let router = with_studio_routes(service);
        let response = router
            .oneshot(
                Request::get("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn quote_totals_endpoint_splits_buckets() {
        let request = QuoteTotalsRequest {
            selected_site_type: Some("site-vetrina".to_string()),
            selected_services: vec![
                SelectedService::new("support-maintenance"),
                SelectedService {
                    quantity: 3,
                    ..SelectedService::new("content-copywriting")
                },
            ],
            discount_percent: 10.0,
        };

        let Json(body) = quote_totals_endpoint(Json(request)).await;
        assert_eq!(body.total, 1490.0 + 360.0);
        assert_eq!(body.recurring, 49.0);
        assert_eq!(body.discounted_total, (1490.0 + 360.0) * 0.9);
    }

    #[tokio::test]
    async fn quote_document_endpoint_returns_html() {
        let brief = BriefData {
            selected_site_type: Some("site-onepage".to_string()),
            ..BriefData::new()
        };
        let response = quote_document_endpoint(
            Extension(QuoteConfig { validity_days: 30 }),
            Json(brief),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .expect("content type set");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn configured_validity_fills_briefs_that_omit_it() {
        let quote = QuoteConfig { validity_days: 45 };

        let mut bare = BriefData::new();
        apply_quote_defaults(&mut bare, &quote);
        assert_eq!(bare.validity_days, Some(45));

        let mut explicit = BriefData {
            validity_days: Some(14),
            ..BriefData::new()
        };
        apply_quote_defaults(&mut explicit, &quote);
        assert_eq!(explicit.validity_days, Some(14));
    }

    #[tokio::test]
    async fn quiz_estimate_endpoint_scores_answers() {
        let mut answers = HashMap::new();
        answers.insert("project_type".to_string(), "ecommerce".to_string());
        let Json(body) = quiz_estimate_endpoint(Json(QuizEstimateRequest { answers })).await;
        assert_eq!(body.score, 40);
        assert_eq!(body.min % 50, 0);
        assert_eq!(body.max % 50, 0);
    }

    #[tokio::test]
    async fn page_resolve_endpoint_rejects_unknown_sections() {
        let payload = json!({
            "slug": "home",
            "sections": [ { "type": "marquee" } ]
        });
        let err = page_resolve_endpoint(Json(payload))
            .await
            .expect_err("unknown tag rejected");
        assert!(err.to_string().contains("marquee"));
    }

    #[tokio::test]
    async fn page_resolve_endpoint_maps_sections_in_order() {
        let payload = json!({
            "slug": "servizi",
            "sections": [
                { "type": "cover", "title": "Servizi" },
                { "type": "form-card" }
            ]
        });
        let Json(body) = page_resolve_endpoint(Json(payload))
            .await
            .expect("valid page resolves");
        assert_eq!(body.slug, "servizi");
        assert_eq!(body.sections.len(), 2);
        assert!(matches!(body.sections[0], PageSectionConfig::Cover(_)));
        assert!(matches!(body.sections[1], PageSectionConfig::FormCard(_)));
    }
}
