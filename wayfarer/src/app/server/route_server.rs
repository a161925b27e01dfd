use std::sync::Arc;

use crate::app::journey::RoutingRequest;
use crate::app::server::ServerConfig;
use crate::app::service::RoutingService;
use crate::app::AppError;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

/// Runs the HTTP surface: `POST /route` with a JSON body answers a
/// routing query, `OPTIONS /route` answers the CORS preflight, and any
/// other method on the endpoint is refused with 405. The server drains
/// in-flight requests before exiting on SIGINT.
pub async fn serve(config: &ServerConfig, service: Arc<RoutingService>) -> Result<(), AppError> {
    let app = Router::new()
        .route("/route", post(plan_route).options(preflight))
        .with_state(service);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("wayfarer accepting requests on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("wayfarer shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for the shutdown signal: {}", e);
        return;
    }
    log::info!("shutdown signal received, finishing in-flight requests");
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers
}

async fn preflight() -> impl IntoResponse {
    let mut headers = cors_headers();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("content-type"),
    );
    (StatusCode::OK, headers)
}

async fn plan_route(
    State(service): State<Arc<RoutingService>>,
    request: Result<Json<RoutingRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                cors_headers(),
                Json(json!({"error": rejection.body_text()})),
            )
                .into_response();
        }
    };

    // the search is CPU-bound and non-suspending, so it runs off the
    // async worker threads
    let result = tokio::task::spawn_blocking(move || service.plan(&request)).await;
    match result {
        Ok(Ok(response)) => (StatusCode::OK, cors_headers(), Json(response)).into_response(),
        Ok(Err(e)) => {
            log::error!("routing request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({"error": "internal error"})),
            )
                .into_response()
        }
        Err(e) => {
            log::error!("routing worker did not complete: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                cors_headers(),
                Json(json!({"error": "internal error"})),
            )
                .into_response()
        }
    }
}
