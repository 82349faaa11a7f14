//! Minimal WebVTT reader for caption tracks.
//!
//! Invidious serves caption tracks as `text/vtt`. Only cue start times and
//! text are kept; cue settings, identifiers, and inline tags are dropped.

use vidscope_core::{TranscriptLine, VidscopeError};

#[allow(clippy::cast_precision_loss)]
fn parse_timestamp(ts: &str) -> Option<f64> {
    let (clock, millis) = ts.trim().split_once('.')?;
    let millis: u64 = millis.get(..3)?.parse().ok()?;
    let parts: Vec<u64> = clock
        .split(':')
        .map(str::parse::<u64>)
        .collect::<Result<_, _>>()
        .ok()?;
    let (h, m, s) = match parts.as_slice() {
        [m, s] => (0, *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return None,
    };
    let total_ms = h
        .checked_mul(3600)?
        .checked_add(m.checked_mul(60)?)?
        .checked_add(s)?
        .checked_mul(1000)?
        .checked_add(millis)?;
    Some(total_ms as f64)
}

fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_tag = false;
    for ch in text.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Parse a WebVTT document into transcript lines, in document order.
///
/// # Errors
/// `Data` if the body lacks the `WEBVTT` signature or a cue timing line is
/// malformed.
pub fn parse(body: &str) -> Result<Vec<TranscriptLine>, VidscopeError> {
    let body = body.trim_start_matches('\u{feff}');
    if !body.starts_with("WEBVTT") {
        return Err(VidscopeError::Data("caption track is not WebVTT".into()));
    }

    let normalized = body.replace("\r\n", "\n");
    let mut lines = Vec::new();
    for block in normalized.split("\n\n") {
        let mut rows = block.lines().skip_while(|l| !l.contains("-->"));
        let Some(timing) = rows.next() else {
            continue;
        };
        let start = timing
            .split("-->")
            .next()
            .and_then(parse_timestamp)
            .ok_or_else(|| VidscopeError::Data(format!("bad cue timing: {timing}")))?;
        let text = rows
            .map(|r| strip_tags(r).trim().to_string())
            .filter(|r| !r.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !text.is_empty() {
            lines.push(TranscriptLine { start, text });
        }
    }
    Ok(lines)
}
