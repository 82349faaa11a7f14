//! Configuration types shared across the orchestrator and the server.

use serde::{Deserialize, Serialize};

/// Default number of comments quoted in the public-opinion section.
pub const DEFAULT_TOP_COMMENTS: usize = 3;

/// Global configuration for the `Vidscope` orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VidscopeConfig {
    /// How many comments, ranked by like count, the report quotes.
    pub top_comments: usize,
}

impl Default for VidscopeConfig {
    fn default() -> Self {
        Self {
            top_comments: DEFAULT_TOP_COMMENTS,
        }
    }
}
