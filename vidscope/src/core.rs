use std::sync::Arc;

use vidscope_core::{VideoConnector, VidscopeConfig, VidscopeError};

/// Orchestrator that plans, fans out, and merges upstream fetches.
pub struct Vidscope {
    pub(crate) connectors: Vec<Arc<dyn VideoConnector>>,
    pub(crate) cfg: VidscopeConfig,
}

/// Builder for constructing a `Vidscope` orchestrator.
pub struct VidscopeBuilder {
    connectors: Vec<Arc<dyn VideoConnector>>,
    cfg: VidscopeConfig,
}

impl Default for VidscopeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VidscopeBuilder {
    /// Create a new builder with default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: VidscopeConfig::default(),
        }
    }

    /// Register a connector.
    ///
    /// Behavior:
    /// - Each capability is served by the first registered connector that
    ///   advertises it. Registration order is the only routing rule.
    /// - A failing connector is not retried against later ones.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn VideoConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Number of comments quoted in a report's public-opinion section.
    #[must_use]
    pub const fn top_comments(mut self, n: usize) -> Self {
        self.cfg.top_comments = n;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: VidscopeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Vidscope` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors were registered or if
    /// `top_comments` is zero.
    pub fn build(self) -> Result<Vidscope, VidscopeError> {
        if self.connectors.is_empty() {
            return Err(VidscopeError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.top_comments == 0 {
            return Err(VidscopeError::InvalidArg(
                "top_comments must be at least 1".to_string(),
            ));
        }
        Ok(Vidscope {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute a raw provider error to the connector that produced it.
///
/// Errors that already carry their origin (`NotFound`, `Connector`) pass through.
pub(crate) fn tag_err(connector: &str, e: VidscopeError) -> VidscopeError {
    match e {
        e @ (VidscopeError::NotFound { .. } | VidscopeError::Connector { .. }) => e,
        other => VidscopeError::connector(connector, other.to_string()),
    }
}

impl Vidscope {
    /// Start building a new `Vidscope` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use vidscope_invidious::InvidiousConnector;
    ///
    /// let vs = vidscope::Vidscope::builder()
    ///     .with_connector(Arc::new(InvidiousConnector::new_default()?))
    ///     .top_comments(3)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> VidscopeBuilder {
        VidscopeBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &VidscopeConfig {
        &self.cfg
    }

    /// First registered connector advertising a capability, with its name.
    pub(crate) fn first_capable<'a, P: ?Sized + 'a>(
        &'a self,
        pick: impl Fn(&'a dyn VideoConnector) -> Option<&'a P>,
    ) -> Option<(&'static str, &'a P)> {
        self.connectors.iter().find_map(|c| {
            let name = c.name();
            pick(c.as_ref()).map(|p| (name, p))
        })
    }
}
