//! Fixed-section report assembly.

use vidscope_core::{ChannelDetails, CommentsPayload, Outcome, TranscriptPayload, VideoDetails};

use super::format::{NOT_AVAILABLE, format_count, format_date, transcript_text};
use super::rank::top_comments;

const NO_DESCRIPTION: &str = "No description.";
const NO_TRANSCRIPT: &str = "Transcript not available.";
const NO_COMMENTS: &str = "No comments available.";

/// Everything a report is rendered from.
///
/// `details` and `comments` are mandatory. `channel` is `None` when no
/// lookup was attempted (the video has no author id); a failed lookup and a
/// missing one render identically.
#[derive(Debug, Clone)]
pub struct ReportSources {
    /// Video metadata.
    pub details: VideoDetails,
    /// Comments payload.
    pub comments: CommentsPayload,
    /// Channel lookup outcome, if attempted.
    pub channel: Option<Outcome<ChannelDetails>>,
    /// Transcript lookup outcome.
    pub transcript: Outcome<TranscriptPayload>,
}

/// Empty values fall back; present values are kept verbatim.
fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|s| !s.is_empty()).unwrap_or(fallback)
}

fn trimmed_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(fallback)
}

fn comments_section(comments: &CommentsPayload, top_n: usize) -> String {
    let top = top_comments(&comments.comments, top_n);
    if top.is_empty() {
        return NO_COMMENTS.to_string();
    }
    top.iter()
        .map(|c| {
            let line = format!(
                "- Top Comment ({} likes): {}",
                format_count(c.like_count.as_ref()),
                c.content.as_deref().unwrap_or("").trim()
            );
            line.trim().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn transcript_section(transcript: &Outcome<TranscriptPayload>) -> String {
    transcript
        .success()
        .and_then(TranscriptPayload::usable_lines)
        .map_or_else(|| NO_TRANSCRIPT.to_string(), transcript_text)
}

/// Render the full report document.
#[must_use]
pub fn render(src: &ReportSources, top_n: usize) -> String {
    let d = &src.details;
    let subscribers = src
        .channel
        .as_ref()
        .and_then(Outcome::success)
        .and_then(|c| c.sub_count.as_ref());

    let doc = format!(
        "**YouTube Video Analysis Report**
**1. Basic Information:**
- Title: {title}
- Views: {views}
- Likes: {likes}
- Uploaded On: {uploaded}
**2. Channel Details:**
- Channel Name: {author}
- Subscribers: {subs}
- Channel ID: {channel_id}
**3. Video Description:**
{description}
**4. Video Transcript (What is being said):**
{transcript}
**5. Public Opinion (Top Comments Summary):**
{comments}
--- End of Report ---",
        title = text_or(d.title.as_deref(), NOT_AVAILABLE),
        views = format_count(d.view_count.as_ref()),
        likes = format_count(d.like_count.as_ref()),
        uploaded = format_date(d.published.as_ref()),
        author = text_or(d.author.as_deref(), NOT_AVAILABLE),
        subs = format_count(subscribers),
        channel_id = text_or(d.author_id.as_deref(), NOT_AVAILABLE),
        description = trimmed_or(d.description.as_deref(), NO_DESCRIPTION),
        transcript = transcript_section(&src.transcript),
        comments = comments_section(&src.comments, top_n),
    );
    doc.trim().to_string()
}
