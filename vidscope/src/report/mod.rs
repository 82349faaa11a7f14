//! Report synthesis for a single video.

mod document;
pub mod format;
mod rank;

use std::future::Future;

use vidscope_core::{Outcome, VidscopeError};

use crate::Vidscope;

pub use document::{ReportSources, render};
pub use rank::top_comments;

/// Await an optional fetch and record its result as an `Outcome`.
///
/// The failure is kept for the caller to substitute a placeholder; it is
/// logged at `warn` and never propagated.
pub async fn attempt<T, Fut>(label: &'static str, fut: Fut) -> Outcome<T>
where
    Fut: Future<Output = Result<T, VidscopeError>>,
{
    let res = fut.await;
    if let Err(e) = &res {
        #[cfg(feature = "tracing")]
        tracing::warn!(target: "vidscope::report", fetch = label, error = %e, "optional fetch degraded");
        #[cfg(not(feature = "tracing"))]
        let _ = (label, e);
    }
    res.into()
}

impl Vidscope {
    /// Gather every source a report needs.
    ///
    /// Details and comments are fetched concurrently and are mandatory. The
    /// channel (only when the video exposes an author id) and the transcript
    /// are then fetched concurrently as optional sources.
    ///
    /// # Errors
    /// The details or comments failure, details first when both fail.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::report::sources", skip(self), err)
    )]
    pub async fn report_sources(&self, video_id: &str) -> Result<ReportSources, VidscopeError> {
        let (details, comments) = tokio::join!(self.video_details(video_id), self.comments(video_id));
        let details = details?;
        let comments = comments?;

        let channel_fut = async {
            match details.channel_id() {
                Some(id) => Some(attempt("channel", self.channel(id)).await),
                None => None,
            }
        };
        let transcript_fut = attempt("transcript", self.transcript(video_id));
        let (channel, transcript) = tokio::join!(channel_fut, transcript_fut);

        Ok(ReportSources {
            details,
            comments,
            channel,
            transcript,
        })
    }

    /// Build the report, surfacing mandatory-source failures as errors.
    ///
    /// # Errors
    /// See [`report_sources`](Self::report_sources).
    pub async fn try_report(&self, video_id: &str) -> Result<String, VidscopeError> {
        let sources = self.report_sources(video_id).await?;
        Ok(render(&sources, self.cfg.top_comments))
    }

    /// Build the report text for a video.
    ///
    /// Never fails: a mandatory-source failure yields the error line
    /// `Error: Failed to generate report for video ID <id>. Reason: <reason>`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "vidscope::report", skip(self))
    )]
    pub async fn generate_report(&self, video_id: &str) -> String {
        self.try_report(video_id).await.unwrap_or_else(|e| {
            format!("Error: Failed to generate report for video ID {video_id}. Reason: {e}")
        })
    }
}
