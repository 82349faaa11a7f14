use std::sync::Arc;

use vidscope::Vidscope;
use vidscope_invidious::{InvidiousConfig, InvidiousConnector};

use crate::config::Settings;
use crate::error::ServerError;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub vidscope: Arc<Vidscope>,
}

impl AppState {
    #[must_use]
    pub fn new(vidscope: Vidscope) -> Self {
        Self {
            vidscope: Arc::new(vidscope),
        }
    }

    /// Wire the Invidious connector into a fresh orchestrator.
    ///
    /// # Errors
    /// `ServerError::Engine` if the connector or orchestrator rejects the settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, ServerError> {
        let connector = InvidiousConnector::new(&InvidiousConfig::with_base_url(
            settings.upstream_url.clone(),
        ))?;
        let vidscope = Vidscope::builder()
            .with_connector(Arc::new(connector))
            .top_comments(settings.top_comments)
            .build()?;
        Ok(Self::new(vidscope))
    }
}
