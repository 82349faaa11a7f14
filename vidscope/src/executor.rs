//! Concurrent fetch executor.

use serde::Serialize;
use vidscope_core::{
    ChannelDetails, CommentsPayload, FetchKey, Outcome, SearchResults, TranscriptPayload,
    VideoDetails, VidscopeError,
};

use crate::Vidscope;
use crate::core::tag_err;
use crate::planner::{FetchOp, FetchTask};

/// Payload produced by one planned fetch.
///
/// Serializes as the bare upstream document so the aggregate JSON body is a
/// passthrough of what each connector returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FetchedValue {
    /// Opaque search response.
    SearchResults(SearchResults),
    /// Video metadata.
    Details(VideoDetails),
    /// Comments payload.
    Comments(CommentsPayload),
    /// Transcript or its unavailability reason.
    Transcript(TranscriptPayload),
    /// Channel details.
    Channel(ChannelDetails),
}

impl Vidscope {
    /// Fetch video metadata from the first connector that provides it.
    ///
    /// # Errors
    /// `Unsupported` when no connector provides details; otherwise the
    /// connector's error tagged with its name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::fetch::details", skip(self), err)
    )]
    pub async fn video_details(&self, video_id: &str) -> Result<VideoDetails, VidscopeError> {
        let (name, p) = self
            .first_capable(|c| c.as_video_details_provider())
            .ok_or_else(|| VidscopeError::unsupported(FetchKey::Details.as_str()))?;
        p.video_details(video_id)
            .await
            .map_err(|e| tag_err(name, e))
    }

    /// Fetch the comments of a video.
    ///
    /// # Errors
    /// `Unsupported` when no connector provides comments; otherwise the
    /// connector's error tagged with its name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::fetch::comments", skip(self), err)
    )]
    pub async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError> {
        let (name, p) = self
            .first_capable(|c| c.as_comments_provider())
            .ok_or_else(|| VidscopeError::unsupported(FetchKey::Comments.as_str()))?;
        p.comments(video_id).await.map_err(|e| tag_err(name, e))
    }

    /// Fetch channel details.
    ///
    /// # Errors
    /// `Unsupported` when no connector provides channels; otherwise the
    /// connector's error tagged with its name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::fetch::channel", skip(self), err)
    )]
    pub async fn channel(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError> {
        let (name, p) = self
            .first_capable(|c| c.as_channel_provider())
            .ok_or_else(|| VidscopeError::unsupported(FetchKey::Channel.as_str()))?;
        p.channel(channel_id).await.map_err(|e| tag_err(name, e))
    }

    /// Run a video search.
    ///
    /// # Errors
    /// `Unsupported` when no connector provides search; otherwise the
    /// connector's error tagged with its name.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::fetch::search", skip(self), err)
    )]
    pub async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError> {
        let (name, p) = self
            .first_capable(|c| c.as_search_provider())
            .ok_or_else(|| VidscopeError::unsupported(FetchKey::SearchResults.as_str()))?;
        p.search(query).await.map_err(|e| tag_err(name, e))
    }

    /// Fetch a transcript.
    ///
    /// Lookup problems are already folded into the payload by the connector;
    /// the only error left is a missing capability.
    ///
    /// # Errors
    /// `Unsupported` when no connector provides transcripts.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::fetch::transcript", skip(self), err)
    )]
    pub async fn transcript(&self, video_id: &str) -> Result<TranscriptPayload, VidscopeError> {
        let (_, p) = self
            .first_capable(|c| c.as_transcript_provider())
            .ok_or_else(|| VidscopeError::unsupported(FetchKey::Transcript.as_str()))?;
        Ok(p.transcript(video_id).await)
    }

    async fn run_task(&self, task: &FetchTask) -> (FetchKey, Outcome<FetchedValue>) {
        let outcome = match task.op() {
            FetchOp::Search(q) => self.search(q).await.map(FetchedValue::SearchResults),
            FetchOp::Details(id) => self.video_details(id).await.map(FetchedValue::Details),
            FetchOp::Comments(id) => self.comments(id).await.map(FetchedValue::Comments),
            FetchOp::Transcript(id) => self.transcript(id).await.map(FetchedValue::Transcript),
            FetchOp::Channel(id) => self.channel(id).await.map(FetchedValue::Channel),
        };
        (task.key(), outcome.into())
    }

    /// Run every task concurrently and wait for all of them.
    ///
    /// Behavior:
    /// - Exactly one outcome per task; a failure never cancels or short-circuits
    ///   a sibling.
    /// - Each outcome carries its output key, so callers associate results by
    ///   key rather than by completion order.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::execute", skip(self, tasks), fields(tasks = tasks.len()))
    )]
    pub async fn execute(&self, tasks: &[FetchTask]) -> Vec<(FetchKey, Outcome<FetchedValue>)> {
        let futs = tasks.iter().map(|t| self.run_task(t));
        futures::future::join_all(futs).await
    }
}
