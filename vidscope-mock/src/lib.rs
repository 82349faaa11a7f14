use async_trait::async_trait;
use vidscope_core::connector::{
    ChannelProvider, CommentsProvider, SearchProvider, TranscriptProvider, VideoDetailsProvider,
};
use vidscope_core::{
    ChannelDetails, CommentsPayload, SearchResults, TranscriptPayload, VideoConnector,
    VideoDetails, VidscopeError,
};

mod fixtures;

pub use fixtures::videos::{RICKROLL, ZOO};

/// Mock connector for CI-safe demos. Serves deterministic data from static fixtures.
///
/// Magic video ids alter behavior and otherwise alias the `RICKROLL` fixture:
/// - `FAIL`: every video capability fails.
/// - `FAILCOMMENTS`: only comments fail.
/// - `NOAUTHOR`: details without an author id.
/// - `NOCAPS`: transcript reports no captions.
/// - `SLOW`: every call sleeps for 200 ms first.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

const NAME: &str = "vidscope-mock";

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_delay(id: &str, capability: &'static str) -> Result<(), VidscopeError> {
        match (id, capability) {
            ("FAIL", _) | ("FAILCOMMENTS", "comments") => Err(VidscopeError::connector(
                NAME,
                format!("forced failure: {capability}"),
            )),
            ("SLOW", _) => {
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn fixture_id(id: &str) -> &str {
        match id {
            "FAILCOMMENTS" | "NOAUTHOR" | "NOCAPS" | "SLOW" => RICKROLL,
            other => other,
        }
    }
}

impl VideoConnector for MockConnector {
    fn name(&self) -> &'static str {
        NAME
    }
    fn vendor(&self) -> &'static str {
        "Mock"
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

#[async_trait]
impl VideoDetailsProvider for MockConnector {
    async fn video_details(&self, video_id: &str) -> Result<VideoDetails, VidscopeError> {
        Self::maybe_fail_or_delay(video_id, "details").await?;
        let raw = fixtures::videos::by_id(Self::fixture_id(video_id))
            .ok_or_else(|| VidscopeError::not_found(format!("video {video_id}")))?;
        let mut details: VideoDetails = fixtures::decode(raw)?;
        if video_id == "NOAUTHOR" {
            details.author_id = None;
        }
        Ok(details)
    }
}

#[async_trait]
impl CommentsProvider for MockConnector {
    async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError> {
        Self::maybe_fail_or_delay(video_id, "comments").await?;
        let raw = fixtures::comments::by_video(Self::fixture_id(video_id))
            .ok_or_else(|| VidscopeError::not_found(format!("comments for {video_id}")))?;
        fixtures::decode(raw)
    }
}

#[async_trait]
impl ChannelProvider for MockConnector {
    async fn channel(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError> {
        Self::maybe_fail_or_delay(channel_id, "channel").await?;
        let raw = fixtures::channels::by_id(channel_id)
            .ok_or_else(|| VidscopeError::not_found(format!("channel {channel_id}")))?;
        fixtures::decode(raw)
    }
}

#[async_trait]
impl SearchProvider for MockConnector {
    async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError> {
        Self::maybe_fail_or_delay(query, "search").await?;
        Ok(fixtures::search::search(query))
    }
}

#[async_trait]
impl TranscriptProvider for MockConnector {
    async fn transcript(&self, video_id: &str) -> TranscriptPayload {
        if Self::maybe_fail_or_delay(video_id, "transcript").await.is_err() {
            return TranscriptPayload::unavailable("Failed to fetch transcript.");
        }
        if video_id == "NOCAPS" {
            return TranscriptPayload::unavailable("No captions available.");
        }
        fixtures::transcripts::by_video(Self::fixture_id(video_id))
            .and_then(|raw| fixtures::decode(raw).ok())
            .unwrap_or_else(|| TranscriptPayload::unavailable("No captions available."))
    }
}
