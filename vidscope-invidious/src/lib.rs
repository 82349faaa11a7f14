//! vidscope-invidious
//!
//! Public connector that implements `VideoConnector` on top of the Invidious
//! REST API. Exposes video details, comments, channel details, search, and
//! transcripts (caption metadata, then the first caption track).
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `reqwest`.
pub mod adapter;
/// Instance configuration.
pub mod config;
mod vtt;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{InvCaptions, InvChannels, InvComments, InvSearch, InvVideos, RealAdapter};
use async_trait::async_trait;
use vidscope_core::connector::{
    ChannelProvider, CommentsProvider, SearchProvider, TranscriptProvider, VideoDetailsProvider,
};
use vidscope_core::{
    ChannelDetails, CommentsPayload, ConnectorKey, SearchResults, TranscriptPayload,
    VideoConnector, VideoDetails, VidscopeError,
};

pub use config::{DEFAULT_BASE_URL, InvidiousConfig};

/// Reason reported when a video advertises no caption tracks.
pub const NO_CAPTIONS: &str = "No captions available.";
/// Reason reported when any step of the caption lookup fails.
pub const TRANSCRIPT_FAILED: &str = "Failed to fetch transcript.";

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type VideosAdapter = Arc<dyn InvVideos>;
#[cfg(not(feature = "test-adapters"))]
type VideosAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type CommentsAdapter = Arc<dyn InvComments>;
#[cfg(not(feature = "test-adapters"))]
type CommentsAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type ChannelsAdapter = Arc<dyn InvChannels>;
#[cfg(not(feature = "test-adapters"))]
type ChannelsAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type SearchAdapter = Arc<dyn InvSearch>;
#[cfg(not(feature = "test-adapters"))]
type SearchAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type CaptionsAdapter = Arc<dyn InvCaptions>;
#[cfg(not(feature = "test-adapters"))]
type CaptionsAdapter = AdapterArc;

/// Public connector type. Production users construct it with
/// `InvidiousConnector::new_default()` or `InvidiousConnector::new(cfg)`.
pub struct InvidiousConnector {
    videos: VideosAdapter,
    comments: CommentsAdapter,
    channels: ChannelsAdapter,
    search: SearchAdapter,
    captions: CaptionsAdapter,
}

impl InvidiousConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("vidscope-invidious");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("video unavailable") || m.contains("does not exist")
    }

    fn normalize_error(e: VidscopeError, what: &str) -> VidscopeError {
        match e {
            VidscopeError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    VidscopeError::not_found(what.to_string())
                } else {
                    VidscopeError::connector(Self::KEY.as_str(), msg)
                }
            }
            VidscopeError::Other(msg) => VidscopeError::connector(Self::KEY.as_str(), msg),
            other => other,
        }
    }

    /// Build against the default public instance.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, VidscopeError> {
        Self::new(&InvidiousConfig::default())
    }

    /// Build from configuration.
    ///
    /// # Errors
    /// `InvalidArg` for a bad base URL; `Other` if the HTTP client cannot be built.
    pub fn new(cfg: &InvidiousConfig) -> Result<Self, VidscopeError> {
        Ok(Self::from_adapter(&RealAdapter::new(cfg)?))
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// # Errors
    /// `InvalidArg` for a bad base URL.
    pub fn try_new_with_reqwest_client(
        http: reqwest::Client,
        cfg: &InvidiousConfig,
    ) -> Result<Self, VidscopeError> {
        Ok(Self::from_adapter(&RealAdapter::with_client(http, cfg)?))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    ///
    /// Accepts a borrowed adapter to avoid unnecessary moves.
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            videos: adapter.clone_arc_videos(),
            comments: adapter.clone_arc_comments(),
            channels: adapter.clone_arc_channels(),
            search: adapter.clone_arc_search(),
            captions: adapter.clone_arc_captions(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            videos: Arc::clone(&shared),
            comments: Arc::clone(&shared),
            channels: Arc::clone(&shared),
            search: Arc::clone(&shared),
            captions: shared,
        }
    }
}

#[async_trait]
impl VideoDetailsProvider for InvidiousConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope_invidious::video_details", skip(self), err)
    )]
    async fn video_details(&self, video_id: &str) -> Result<VideoDetails, VidscopeError> {
        self.videos
            .video(video_id)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("video {video_id}")))
    }
}

#[async_trait]
impl CommentsProvider for InvidiousConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope_invidious::comments", skip(self), err)
    )]
    async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError> {
        self.comments
            .comments(video_id)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("comments for {video_id}")))
    }
}

#[async_trait]
impl ChannelProvider for InvidiousConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope_invidious::channel", skip(self), err)
    )]
    async fn channel(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError> {
        self.channels
            .author(channel_id)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("channel {channel_id}")))
    }
}

#[async_trait]
impl SearchProvider for InvidiousConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope_invidious::search", skip(self), err)
    )]
    async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError> {
        self.search
            .search(query)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("search for {query}")))
    }
}

#[async_trait]
impl TranscriptProvider for InvidiousConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope_invidious::transcript", skip(self))
    )]
    async fn transcript(&self, video_id: &str) -> TranscriptPayload {
        let tracks = match self.captions.tracks(video_id).await {
            Ok(t) => t,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, "caption metadata lookup failed");
                return TranscriptPayload::unavailable(TRANSCRIPT_FAILED);
            }
        };
        let Some(first) = tracks.first() else {
            return TranscriptPayload::unavailable(NO_CAPTIONS);
        };
        match self.captions.track(&first.url).await {
            Ok(t) => t,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_e, track = %first.url, "caption track fetch failed");
                TranscriptPayload::unavailable(TRANSCRIPT_FAILED)
            }
        }
    }
}

impl VideoConnector for InvidiousConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Invidious"
    }

    fn as_video_details_provider(&self) -> Option<&dyn VideoDetailsProvider> {
        Some(self as &dyn VideoDetailsProvider)
    }
    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        Some(self as &dyn CommentsProvider)
    }
    fn as_channel_provider(&self) -> Option<&dyn ChannelProvider> {
        Some(self as &dyn ChannelProvider)
    }
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        Some(self as &dyn SearchProvider)
    }
    fn as_transcript_provider(&self) -> Option<&dyn TranscriptProvider> {
        Some(self as &dyn TranscriptProvider)
    }
}
