use async_trait::async_trait;

use crate::types::{
    ChannelDetails, CommentsPayload, ConnectorKey, SearchResults, TranscriptPayload, VideoDetails,
    VidscopeError,
};

/// Focused role trait for connectors that provide video metadata.
#[async_trait]
pub trait VideoDetailsProvider: Send + Sync {
    /// Fetch metadata for a single video.
    async fn video_details(&self, video_id: &str) -> Result<VideoDetails, VidscopeError>;
}

/// Focused role trait for connectors that provide video comments.
#[async_trait]
pub trait CommentsProvider: Send + Sync {
    /// Fetch the top-level comments of a video.
    async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError>;
}

/// Focused role trait for connectors that provide channel details.
#[async_trait]
pub trait ChannelProvider: Send + Sync {
    /// Fetch details for a channel (author) id.
    async fn channel(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError>;
}

/// Focused role trait for connectors that provide free-text video search.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a video search and return the upstream response untouched.
    async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError>;
}

/// Focused role trait for connectors that provide transcripts.
///
/// Transcript lookup is a two-step call (caption metadata, then the first
/// caption track). Implementations fold every failure along the way into
/// [`TranscriptPayload::Unavailable`] instead of returning an error.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the transcript of a video.
    async fn transcript(&self, video_id: &str) -> TranscriptPayload;
}

/// Primary interface for upstream video-platform connectors.
///
/// A connector advertises each capability by returning a trait object from
/// the matching `as_*_provider` accessor. The orchestrator routes every
/// planned fetch to the first registered connector that advertises it.
pub trait VideoConnector: Send + Sync {
    /// A stable identifier used in logs and errors (e.g. "vidscope-invidious").
    fn name(&self) -> &'static str;

    /// Typed key derived from [`name`](Self::name).
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// If implemented, returns a trait object for video metadata.
    fn as_video_details_provider(&self) -> Option<&dyn VideoDetailsProvider> {
        None
    }
    /// If implemented, returns a trait object for comments.
    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        None
    }
    /// If implemented, returns a trait object for channel details.
    fn as_channel_provider(&self) -> Option<&dyn ChannelProvider> {
        None
    }
    /// If implemented, returns a trait object for search.
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        None
    }
    /// If implemented, returns a trait object for transcripts.
    fn as_transcript_provider(&self) -> Option<&dyn TranscriptProvider> {
        None
    }
}
