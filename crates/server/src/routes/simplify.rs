use actix_web::{http::StatusCode, post, web, HttpResponse};
use clarify_common::ClarifyError;
use tracing::{error, info};

use crate::state::AppState;
use crate::types::{ErrorResponse, SimplifyRequest, SimplifyResponse};

/// Fallback body for transformation failures in compatibility mode
pub const PROCESSING_ERROR_MESSAGE: &str = "Error processing text.";

#[post("/simplify")]
pub async fn simplify(
    req: web::Json<SimplifyRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> actix_web::Result<HttpResponse> {
    info!("Simplify request - Text length: {} chars", req.text.len());

    match state.simplifier.simplify(&req.text).await {
        Ok(simplified) => Ok(HttpResponse::Ok().json(SimplifyResponse { simplified })),
        Err(e) => Ok(error_response(&e, state.config.strict_errors)),
    }
}

/// Serialize a transformation failure.
///
/// Compatibility mode preserves the original contract: HTTP 200 with a
/// generic message in the `simplified` field. Strict mode maps the error
/// kind to a status code and a structured body.
fn error_response(e: &ClarifyError, strict: bool) -> HttpResponse {
    error!("Simplification failed: {}", e);

    if strict {
        let status = StatusCode::from_u16(e.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(ErrorResponse {
            error: e.kind().to_string(),
            message: e.to_string(),
        })
    } else {
        HttpResponse::Ok().json(SimplifyResponse {
            simplified: PROCESSING_ERROR_MESSAGE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use clarify_common::{AppConfig, Result};
    use clarify_llm::{LocalSimplifier, Simplifier, NO_TEXT_MESSAGE};
    use std::sync::Arc;

    struct FailingSimplifier;

    #[async_trait]
    impl Simplifier for FailingSimplifier {
        async fn simplify(&self, _text: &str) -> Result<String> {
            Err(ClarifyError::network("connection refused"))
        }
    }

    struct CannedSimplifier;

    #[async_trait]
    impl Simplifier for CannedSimplifier {
        async fn simplify(&self, text: &str) -> Result<String> {
            if text.is_empty() {
                return Ok(NO_TEXT_MESSAGE.to_string());
            }
            Ok("• canned".to_string())
        }
    }

    async fn post_simplify(
        state: Arc<AppState>,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(routes::simplify::simplify),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/simplify")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let json = test::read_body_json(resp).await;
        (status, json)
    }

    fn local_state() -> Arc<AppState> {
        Arc::new(AppState::with_simplifier(
            AppConfig::default(),
            Arc::new(LocalSimplifier),
        ))
    }

    #[actix_web::test]
    async fn test_local_scenario_pinned_output() {
        let (status, body) =
            post_simplify(local_state(), serde_json::json!({"text": "A. B. C. D."})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["simplified"], "• A.\n•  B.\n•  C");
    }

    #[actix_web::test]
    async fn test_missing_text_field_defaults_to_empty() {
        let (status, body) = post_simplify(local_state(), serde_json::json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["simplified"], "• ");
    }

    #[actix_web::test]
    async fn test_remote_empty_text_canned_message() {
        let state = Arc::new(AppState::with_simplifier(
            AppConfig::default(),
            Arc::new(CannedSimplifier),
        ));
        let (status, body) = post_simplify(state, serde_json::json!({"text": ""})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["simplified"], NO_TEXT_MESSAGE);
    }

    #[actix_web::test]
    async fn test_failure_returns_200_with_fallback_by_default() {
        let state = Arc::new(AppState::with_simplifier(
            AppConfig::default(),
            Arc::new(FailingSimplifier),
        ));
        let (status, body) = post_simplify(state, serde_json::json!({"text": "hi"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["simplified"], PROCESSING_ERROR_MESSAGE);
    }

    #[actix_web::test]
    async fn test_failure_maps_to_status_in_strict_mode() {
        let mut config = AppConfig::default();
        config.strict_errors = true;
        let state = Arc::new(AppState::with_simplifier(
            config,
            Arc::new(FailingSimplifier),
        ));
        let (status, body) = post_simplify(state, serde_json::json!({"text": "hi"})).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"], "upstream_unavailable");
    }
}
