use crate::config::MissingFieldPolicy;
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use service_kit::api_dto;
use std::fmt;

pub const SUCCESS_MESSAGE: &str = "Calculation Successful";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Operands of a subtraction: `Result = Number1 - Number2`.
#[api_dto(rename_all = "PascalCase", serialize_only)]
#[derive(Copy)]
pub struct CalculationRequest {
    #[schema(example = 10.0)]
    pub number1: f64,
    #[schema(example = 3.0)]
    pub number2: f64,
}

impl CalculationRequest {
    pub fn new(number1: f64, number2: f64) -> Self {
        Self { number1, number2 }
    }

    /// Both operands are real numbers, i.e. neither is NaN.
    pub fn has_valid_numbers(&self) -> bool {
        !self.number1.is_nan() && !self.number2.is_nan()
    }
}

/// A request body as received, before missing operands are resolved.
///
/// Keys match `Number1`/`Number2` ignoring ASCII case, the last duplicate
/// wins, and any other key is skipped. Operand values must be JSON numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CalculationPayload {
    pub number1: Option<f64>,
    pub number2: Option<f64>,
}

impl CalculationPayload {
    /// Parses a request body. A literal `null` body yields `Ok(None)`.
    ///
    /// A leading UTF-8 byte order mark is skipped.
    pub fn from_json(body: &[u8]) -> serde_json::Result<Option<Self>> {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
        serde_json::from_slice(body)
    }

    /// Fills in missing operands according to `policy`.
    ///
    /// Returns `None` when an operand is missing and the policy rejects that.
    pub fn resolve(self, policy: MissingFieldPolicy) -> Option<CalculationRequest> {
        match policy {
            MissingFieldPolicy::Zero => Some(CalculationRequest::new(
                self.number1.unwrap_or(0.0),
                self.number2.unwrap_or(0.0),
            )),
            MissingFieldPolicy::Reject => Some(CalculationRequest::new(self.number1?, self.number2?)),
        }
    }
}

impl<'de> Deserialize<'de> for CalculationPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = CalculationPayload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with numeric Number1 and Number2 fields")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut payload = CalculationPayload::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("number1") {
                payload.number1 = Some(map.next_value()?);
            } else if key.eq_ignore_ascii_case("number2") {
                payload.number2 = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(payload)
    }
}

#[api_dto(rename_all = "PascalCase")]
pub struct CalculationResult {
    #[schema(example = "Calculation Successful")]
    pub message: String,
    #[schema(example = 7.0)]
    pub result: f64,
}

impl CalculationResult {
    pub fn success(result: f64) -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
            result,
        }
    }
}

/// Body of every non-2xx response.
#[api_dto(rename_all = "PascalCase")]
#[derive(Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
