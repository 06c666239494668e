use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use service_kit::bootstrap::{self, default_cors_layer, default_trace_layer};
use service_kit::openapi_utils::{openapi_json_router, to_pretty_json};
use std::sync::Arc;
use utoipa::OpenApi;

pub mod calculator;
pub mod config;
pub mod dtos;
pub mod error;
pub mod handlers;

use calculator::StandardCalculator;
use config::FunctionConfig;
use dtos::{CalculationRequest, CalculationResult, ErrorResponse};
use handlers::{AppState, FUNCTION_NAME, FUNCTION_PATH};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "calculator-function",
        description = "HTTP-triggered subtraction function"
    ),
    paths(handlers::fa_calculator),
    components(schemas(CalculationRequest, CalculationResult, ErrorResponse)),
    tags((name = "Calculator", description = "Arithmetic on two numbers"))
)]
pub struct ApiDoc;

/// Assembles the function route, the OpenAPI document route and the shared layers.
pub fn build_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route(FUNCTION_PATH, post(handlers::fa_calculator))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .merge(openapi_json_router(ApiDoc::openapi()))
        .layer(default_trace_layer())
        .layer(default_cors_layer())
}

/// Starts the web server.
pub async fn run_server() -> anyhow::Result<()> {
    bootstrap::load_dotenv();
    let config = FunctionConfig::from_env()?;

    if config.print_openapi {
        println!("{}", to_pretty_json(&ApiDoc::openapi())?);
        return Ok(());
    }

    bootstrap::init_tracing()?;

    let state = AppState::new(Arc::new(StandardCalculator))
        .with_missing_field_policy(config.missing_fields);
    let app = build_router(state, config.max_body_bytes);

    tracing::info!(
        function = FUNCTION_NAME,
        path = FUNCTION_PATH,
        missing_fields = %config.missing_fields,
        max_body_bytes = config.max_body_bytes,
        "function registered"
    );

    bootstrap::serve(app, &config.server).await?;
    Ok(())
}
