//! REST API server for card validation.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardcheck-server
//!
//! # Custom bind address
//! cardcheck-server --host 127.0.0.1 --port 8080
//! CARDCHECK_PORT=8080 cardcheck-server
//!
//! # Validate a card
//! curl -X POST localhost:3000/api/cardvalidation \
//!   -H 'content-type: application/json' -d '"4532 0151 1283 0366"'
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use anyhow::Context;
use axum::{
    extract::rejection::JsonRejection,
    http::{header, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use cardcheck::batch::{validate_batch, BatchSummary};
use cardcheck::response::{respond, ValidationResponse};
use cardcheck::{validate, SupportedProvider};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "cardcheck-server", version, about = "Card validation REST API")]
struct Config {
    /// Address to bind
    #[arg(long, env = "CARDCHECK_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, env = "CARDCHECK_PORT", default_value_t = 3000)]
    port: u16,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "CARDCHECK_LOG_FILTER", default_value = "info,tower_http=debug")]
    log_filter: String,
}

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Validation API",
        description = "Validates payment card numbers: length, Luhn checksum, network classification and provider restriction. Only Visa, MasterCard and American Express are accepted.",
        license(name = "MIT")
    ),
    tags(
        (name = "Validation", description = "Card number validation endpoints"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(validate_card, validate_cards, health),
    components(schemas(
        ValidationResponse,
        SupportedProvider,
        BatchEntry,
        BatchResponse,
        BatchSummary,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize, ToSchema)]
struct BatchEntry {
    /// Status the single-card endpoint would have returned
    status: u16,
    /// Body the single-card endpoint would have returned
    body: ValidationResponse,
}

#[derive(Serialize, ToSchema)]
struct BatchResponse {
    /// One entry per submitted card, in request order
    results: Vec<BatchEntry>,
    /// Per-category counts
    summary: BatchSummary,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

type ApiResult<T> = (StatusCode, Json<T>);

fn bad_request(rejection: JsonRejection) -> ApiResult<ValidationResponse> {
    tracing::debug!(error = %rejection, "rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationResponse::error(rejection.body_text())),
    )
}

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

// ============================================================================
// Handlers
// ============================================================================

/// Validate a card number
///
/// The body is a JSON string. `null` is treated as an empty card number.
#[utoipa::path(
    post,
    path = "/api/cardvalidation",
    request_body(content = Option<String>, example = json!("4532 0151 1283 0366")),
    responses(
        (status = 200, description = "Card accepted", body = ValidationResponse,
            example = json!({"message": "Card validation successful", "cardType": "Visa"})),
        (status = 400, description = "Malformed, too short, failed checksum, or unreadable body", body = ValidationResponse),
        (status = 406, description = "Unknown or unsupported card network", body = ValidationResponse),
        (status = 414, description = "Card number too long", body = ValidationResponse)
    ),
    tag = "Validation"
)]
async fn validate_card(
    payload: Result<Json<Option<String>>, JsonRejection>,
) -> ApiResult<ValidationResponse> {
    let Json(card_number) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return bad_request(rejection),
    };

    let (code, body) = respond(&validate(card_number.as_deref()));
    (status(code), Json(body))
}

/// Validate multiple card numbers
///
/// Always answers 200 when the body parses; each entry carries the status the
/// single-card endpoint would have used.
#[utoipa::path(
    post,
    path = "/api/cardvalidation/batch",
    request_body(content = Vec<Option<String>>,
        example = json!(["4111111111111111", "30569309025904", null])),
    responses(
        (status = 200, description = "Batch validation results", body = BatchResponse),
        (status = 400, description = "Unreadable body", body = ValidationResponse)
    ),
    tag = "Validation"
)]
async fn validate_cards(
    payload: Result<Json<Vec<Option<String>>>, JsonRejection>,
) -> Result<Json<BatchResponse>, ApiResult<ValidationResponse>> {
    let Json(cards) = payload.map_err(bad_request)?;

    let cards: Vec<&str> = cards.iter().map(|c| c.as_deref().unwrap_or_default()).collect();
    let outcomes = validate_batch(&cards);
    let summary = BatchSummary::from_results(&outcomes);

    let results = outcomes
        .iter()
        .map(|outcome| {
            let (status, body) = respond(outcome);
            BatchEntry { status, body }
        })
        .collect();

    Ok(Json(BatchResponse { results, summary }))
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/cardvalidation", post(validate_card))
        .route("/api/cardvalidation/batch", post(validate_cards))
        .route("/health", get(health))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("received Ctrl-C, shutting down"),
        Err(e) => tracing::error!(error = %e, "failed to listen for Ctrl-C"),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    let addr = listener.local_addr().context("failed to read local address")?;

    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}
