//! Portal configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The portal talks to two origins: the Auth API origin used by the session
//! client (by default this server itself, whose `/api` proxy forwards on),
//! and the backend origin that `/api/*` is proxied to.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:4000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    pub port: u16,
    /// Base origin for session lookups (`/api/auth`, `/api/admin`, `/api/logout`).
    pub api_origin: String,
    /// Target origin for the `/api/*` proxy, without the `/api` prefix.
    pub backend_origin: String,
    pub cookie_secure: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_origin: local_origin(DEFAULT_PORT),
            backend_origin: DEFAULT_BACKEND_ORIGIN.to_owned(),
            cookie_secure: false,
        }
    }
}

impl PortalConfig {
    /// Build typed portal config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PORTAL_API_ORIGIN`: default `http://localhost:{PORT}`, this server
    /// - `PORTAL_BACKEND_ORIGIN`: default `http://localhost:4000`
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default off
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw.clone() })?,
            Err(_) => DEFAULT_PORT,
        };
        let api_origin =
            parse_origin("PORTAL_API_ORIGIN", std::env::var("PORTAL_API_ORIGIN").ok(), &local_origin(port))?;
        let backend_origin = parse_origin(
            "PORTAL_BACKEND_ORIGIN",
            std::env::var("PORTAL_BACKEND_ORIGIN").ok(),
            DEFAULT_BACKEND_ORIGIN,
        )?;
        let cookie_secure = match std::env::var("COOKIE_SECURE") {
            Ok(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw.clone() })?,
            Err(_) => false,
        };

        Ok(Self { port, api_origin, backend_origin, cookie_secure })
    }
}

/// This server's own origin, where its `/api` proxy listens.
fn local_origin(port: u16) -> String {
    format!("http://localhost:{port}")
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_origin(key: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default.to_owned());
    };
    let origin = raw.trim().trim_end_matches('/');
    if !(origin.starts_with("http://") || origin.starts_with("https://")) {
        return Err(ConfigError::Invalid { key, value: raw });
    }
    Ok(origin.to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
