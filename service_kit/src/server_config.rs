use crate::error::{Error, Result};
use std::fmt::Display;
use std::str::FromStr;

/// Port variable set by an Azure-style Functions host for custom handlers.
pub const FUNCTIONS_PORT_VAR: &str = "FUNCTIONS_CUSTOMHANDLER_PORT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolves `HOST`, `PORT` and `FUNCTIONS_CUSTOMHANDLER_PORT` through `lookup`.
    ///
    /// The Functions host port wins over `PORT` when both are present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match parse_var::<u16, _>(&lookup, FUNCTIONS_PORT_VAR)? {
            Some(port) => port,
            None => parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT),
        };

        Ok(Self { host, port })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Looks up `key` and parses it, treating an unset or blank variable as `None`.
pub fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| Error::Config(format!("invalid value {:?} for {}: {}", raw, key, e))),
        _ => Ok(None),
    }
}
