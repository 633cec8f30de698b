//! Client configuration resolved at build time.
//!
//! The browser has no process environment, so overrides are read with
//! `option_env!` when the WASM bundle is compiled (e.g. `CVPRO_API_BASE=/v2/api
//! trunk build`). Missing, unparsable or out-of-range values fall back to the
//! defaults.

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_TOKEN_KEY: &str = "token";
/// Longest timeout browser timers accept (a `u32` millisecond count).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 4_294_967;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Relative base path prepended to every API request (no trailing `/`).
    pub api_base: String,
    /// Upper bound for a single request, enforced by the transport.
    pub request_timeout: Duration,
    /// Key under which the bearer token is persisted.
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from build-time variables.
    ///
    /// Optional:
    /// - `CVPRO_API_BASE`: default `/api`
    /// - `CVPRO_REQUEST_TIMEOUT_SECS`: default 15
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CVPRO_API_BASE"), option_env!("CVPRO_REQUEST_TIMEOUT_SECS"))
    }

    /// Build config from raw override values, falling back per field.
    #[must_use]
    pub fn from_values(api_base: Option<&str>, timeout_secs: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.api_base, normalize_base);
        let request_timeout = parse_timeout_secs(timeout_secs).unwrap_or(defaults.request_timeout);
        Self { api_base, request_timeout, token_key: defaults.token_key }
    }
}

fn normalize_base(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

fn parse_timeout_secs(raw: Option<&str>) -> Option<Duration> {
    raw.and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|secs| (1..=MAX_REQUEST_TIMEOUT_SECS).contains(secs))
        .map(Duration::from_secs)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
