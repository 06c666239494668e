use crate::calculator::Calculator;
use crate::config::MissingFieldPolicy;
use crate::dtos::{CalculationPayload, CalculationRequest, CalculationResult, ErrorResponse};
use crate::error::ApiError;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

pub const FUNCTION_NAME: &str = "FACalculator";
pub const FUNCTION_PATH: &str = "/api/FACalculator";

/// Shared, read-only state handed to every invocation.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<dyn Calculator>,
    missing_fields: MissingFieldPolicy,
}

impl AppState {
    pub fn new(calculator: Arc<dyn Calculator>) -> Self {
        Self {
            calculator,
            missing_fields: MissingFieldPolicy::default(),
        }
    }

    pub fn with_missing_field_policy(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_fields = policy;
        self
    }
}

/// Subtract Number2 from Number1
///
/// Field names in the request body are matched case-insensitively.
#[utoipa::path(
    post,
    path = "/api/FACalculator",
    operation_id = "FACalculator",
    tag = "Calculator",
    request_body(content = CalculationRequest, description = "The two operands", content_type = "application/json"),
    responses(
        (status = 200, description = "Calculation Successful", body = CalculationResult),
        (status = 400, description = "Malformed JSON or invalid numbers", body = ErrorResponse),
        (status = 500, description = "The calculator failed", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "fa_calculator", skip_all, fields(body_len = body.len()))]
pub async fn fa_calculator(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculationResult>, ApiError> {
    tracing::info!("HTTP trigger function received a request");

    let payload = parse_body(&body)?;
    let request = validate(payload, state.missing_fields)?;
    let result = compute(state.calculator.as_ref(), &request)?;

    tracing::info!(
        number1 = request.number1,
        number2 = request.number2,
        result,
        "Calculation successful: {} - {} = {}",
        request.number1,
        request.number2,
        result
    );
    Ok(Json(CalculationResult::success(result)))
}

fn parse_body(body: &[u8]) -> Result<Option<CalculationPayload>, ApiError> {
    CalculationPayload::from_json(body).map_err(|e| {
        tracing::error!(error = %e, "Invalid JSON format");
        ApiError::MalformedInput(e.to_string())
    })
}

fn validate(
    payload: Option<CalculationPayload>,
    policy: MissingFieldPolicy,
) -> Result<CalculationRequest, ApiError> {
    let Some(payload) = payload else {
        tracing::warn!("Invalid numbers provided in the request: body is null");
        return Err(ApiError::InvalidArguments("request body is null".to_string()));
    };

    let Some(request) = payload.resolve(policy) else {
        tracing::warn!(%policy, "Invalid numbers provided in the request: operand missing");
        return Err(ApiError::InvalidArguments("operand missing".to_string()));
    };

    if !request.has_valid_numbers() {
        tracing::warn!("Invalid numbers provided in the request: NaN operand");
        return Err(ApiError::InvalidArguments("NaN operand".to_string()));
    }
    Ok(request)
}

/// Runs the subtraction, turning calculator errors, panics and non-finite
/// results into [`ApiError::ComputationError`].
fn compute(calculator: &dyn Calculator, request: &CalculationRequest) -> Result<f64, ApiError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        calculator.subtract(request.number1, request.number2)
    }));

    let detail = match outcome {
        Ok(Ok(result)) if result.is_finite() => return Ok(result),
        Ok(Ok(result)) => format!("result {} is not representable in JSON", result),
        Ok(Err(e)) => e.to_string(),
        Err(payload) => format!("calculator panicked: {}", panic_message(&*payload)),
    };

    tracing::error!(error = %detail, "Error during calculation");
    Err(ApiError::ComputationError(detail))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
