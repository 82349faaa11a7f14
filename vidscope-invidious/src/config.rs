use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;
use vidscope_core::VidscopeError;

/// Public Invidious instance used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://inv.perditum.com/api/v1";

/// Path suffix separating the instance origin from the API root.
const API_SUFFIX: &str = "/api/v1";

/// Connection settings for an Invidious instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvidiousConfig {
    /// API root, e.g. `https://inv.perditum.com/api/v1`.
    pub base_url: String,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// TCP connect timeout; `None` leaves the client default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout: Option<Duration>,
}

impl Default for InvidiousConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("vidscope/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: None,
        }
    }
}

impl InvidiousConfig {
    /// Config pointing at a different API root.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Parsed API root.
    ///
    /// # Errors
    /// `InvalidArg` if the URL does not parse or is not http(s).
    pub fn api_root(&self) -> Result<Url, VidscopeError> {
        let url = Url::parse(self.base_url.trim_end_matches('/'))
            .map_err(|e| VidscopeError::InvalidArg(format!("invalid base url: {e}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VidscopeError::InvalidArg(format!(
                "base url must be http(s): {}",
                self.base_url
            )));
        }
        Ok(url)
    }

    /// Instance origin that caption track paths are appended to: the base
    /// URL with everything from `/api/v1` on removed.
    #[must_use]
    pub fn origin(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        base.split_once(API_SUFFIX)
            .map_or(base, |(origin, _)| origin)
            .to_string()
    }
}
