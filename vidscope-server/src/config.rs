use std::env;

use url::Url;
use vidscope_core::DEFAULT_TOP_COMMENTS;
use vidscope_invidious::DEFAULT_BASE_URL;

use crate::error::ServerError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub http_host: String,
    pub http_port: u16,
    /// Invidious API root, e.g. `https://inv.perditum.com/api/v1`.
    pub upstream_url: String,
    /// Number of comments shown in the report.
    pub top_comments: usize,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_host: DEFAULT_HOST.to_string(),
            http_port: DEFAULT_PORT,
            upstream_url: DEFAULT_BASE_URL.to_string(),
            top_comments: DEFAULT_TOP_COMMENTS,
            json_logs: true,
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    /// `ServerError::Config` when a variable does not parse or fails validation.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    ///
    /// # Errors
    /// `ServerError::Config` when a variable does not parse or fails validation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let defaults = Self::default();

        let http_host = lookup("HTTP_HOST").unwrap_or(defaults.http_host);
        let http_port = match lookup("HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("HTTP_PORT={raw}: {e}")))?,
            None => defaults.http_port,
        };
        let upstream_url = lookup("VIDSCOPE_UPSTREAM_URL").unwrap_or(defaults.upstream_url);
        let top_comments = match lookup("VIDSCOPE_TOP_COMMENTS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| ServerError::Config(format!("VIDSCOPE_TOP_COMMENTS={raw}: {e}")))?,
            None => defaults.top_comments,
        };
        let json_logs = lookup("RUST_LOG_FORMAT").is_none_or(|v| v == "json");

        let settings = Self {
            http_host,
            http_port,
            upstream_url,
            top_comments,
            json_logs,
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Validates the settings and returns an error if invalid.
    ///
    /// # Errors
    /// `ServerError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<(), ServerError> {
        validate_host(&self.http_host)?;
        validate_port(self.http_port)?;
        validate_upstream(&self.upstream_url)?;
        if self.top_comments == 0 {
            return Err(ServerError::Config(
                "VIDSCOPE_TOP_COMMENTS must be positive".into(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn validate_host(host: &str) -> Result<(), ServerError> {
    if host.trim().is_empty() {
        return Err(ServerError::Config("Host cannot be empty".into()));
    }
    Ok(())
}

fn validate_port(port: u16) -> Result<(), ServerError> {
    if port == 0 {
        return Err(ServerError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_upstream(raw: &str) -> Result<(), ServerError> {
    let url = Url::parse(raw)
        .map_err(|e| ServerError::Config(format!("VIDSCOPE_UPSTREAM_URL={raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ServerError::Config(format!(
            "VIDSCOPE_UPSTREAM_URL must be http(s): {raw}"
        )));
    }
    Ok(())
}
