use service_kit::server_config::parse_var;
use service_kit::{Error, Result, ServerConfig};
use std::fmt;
use std::str::FromStr;

pub const MISSING_FIELDS_VAR: &str = "CALCULATOR_MISSING_FIELDS";
pub const MAX_BODY_BYTES_VAR: &str = "CALCULATOR_MAX_BODY_BYTES";
pub const PRINT_OPENAPI_VAR: &str = "PRINT_OPENAPI";

/// axum's own default request body limit.
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// What to do when `Number1` or `Number2` is absent from the request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingFieldPolicy {
    /// Treat the missing operand as `0.0`.
    #[default]
    Zero,
    /// Answer with the invalid-numbers error.
    Reject,
}

impl FromStr for MissingFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" | "default" => Ok(Self::Zero),
            "reject" | "strict" => Ok(Self::Reject),
            other => Err(format!("expected `zero` or `reject`, got `{}`", other)),
        }
    }
}

impl fmt::Display for MissingFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => f.write_str("zero"),
            Self::Reject => f.write_str("reject"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionConfig {
    pub server: ServerConfig,
    pub missing_fields: MissingFieldPolicy,
    pub max_body_bytes: usize,
    pub print_openapi: bool,
}

impl Default for FunctionConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            missing_fields: MissingFieldPolicy::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            print_openapi: false,
        }
    }
}

impl FunctionConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server = ServerConfig::from_lookup(&lookup)?;
        let missing_fields: MissingFieldPolicy = parse_var(&lookup, MISSING_FIELDS_VAR)?.unwrap_or_default();
        let max_body_bytes: usize = parse_var(&lookup, MAX_BODY_BYTES_VAR)?.unwrap_or(DEFAULT_MAX_BODY_BYTES);
        if max_body_bytes == 0 {
            return Err(Error::Config(format!("{} must be greater than zero", MAX_BODY_BYTES_VAR)));
        }

        Ok(Self {
            server,
            missing_fields,
            max_body_bytes,
            print_openapi: lookup(PRINT_OPENAPI_VAR).is_some(),
        })
    }
}
