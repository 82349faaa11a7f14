//! Field planner: request identifiers and field set to an ordered task list.

use vidscope_core::{FetchKey, FieldSet, VidscopeError};

/// What the client asked for.
///
/// Identifier setters ignore empty and whitespace-only values so that
/// `?id=&search=x` behaves like `?search=x`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    video_id: Option<String>,
    channel_id: Option<String>,
    search_query: Option<String>,
    fields: FieldSet,
}

/// Blank values count as absent; anything else is kept verbatim.
fn non_blank(s: Option<&str>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty()).map(ToString::to_string)
}

impl FetchRequest {
    /// An empty request; rejected by the planner until an identifier is set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from raw query parameters.
    #[must_use]
    pub fn from_params(
        id: Option<&str>,
        channel: Option<&str>,
        search: Option<&str>,
        fields: Option<&str>,
    ) -> Self {
        Self {
            video_id: non_blank(id),
            channel_id: non_blank(channel),
            search_query: non_blank(search),
            fields: fields.map(FieldSet::parse).unwrap_or_default(),
        }
    }

    /// Set the video id.
    #[must_use]
    pub fn video_id(mut self, id: &str) -> Self {
        self.video_id = non_blank(Some(id));
        self
    }

    /// Set the channel id.
    #[must_use]
    pub fn channel_id(mut self, id: &str) -> Self {
        self.channel_id = non_blank(Some(id));
        self
    }

    /// Set the search query.
    #[must_use]
    pub fn search(mut self, query: &str) -> Self {
        self.search_query = non_blank(Some(query));
        self
    }

    /// Replace the requested field set.
    #[must_use]
    pub fn fields(mut self, fields: FieldSet) -> Self {
        self.fields = fields;
        self
    }

    /// True if at least one identifier is present.
    #[must_use]
    pub const fn has_identifier(&self) -> bool {
        self.video_id.is_some() || self.channel_id.is_some() || self.search_query.is_some()
    }

    /// Requested field names.
    #[must_use]
    pub const fn requested_fields(&self) -> &FieldSet {
        &self.fields
    }
}

/// A single upstream call with its argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOp {
    /// Free-text video search.
    Search(String),
    /// Video metadata by video id.
    Details(String),
    /// Comments by video id.
    Comments(String),
    /// Transcript by video id.
    Transcript(String),
    /// Channel details by channel id.
    Channel(String),
}

impl FetchOp {
    /// The output key this operation populates.
    #[must_use]
    pub const fn key(&self) -> FetchKey {
        match self {
            Self::Search(_) => FetchKey::SearchResults,
            Self::Details(_) => FetchKey::Details,
            Self::Comments(_) => FetchKey::Comments,
            Self::Transcript(_) => FetchKey::Transcript,
            Self::Channel(_) => FetchKey::Channel,
        }
    }

    /// The identifier or query passed upstream.
    #[must_use]
    pub fn argument(&self) -> &str {
        match self {
            Self::Search(s)
            | Self::Details(s)
            | Self::Comments(s)
            | Self::Transcript(s)
            | Self::Channel(s) => s,
        }
    }
}

/// A planned fetch tagged with the output key it fills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTask {
    key: FetchKey,
    op: FetchOp,
}

impl FetchTask {
    /// Wrap an operation; the output key is derived from it.
    #[must_use]
    pub const fn new(op: FetchOp) -> Self {
        Self { key: op.key(), op }
    }

    /// Output key.
    #[must_use]
    pub const fn key(&self) -> FetchKey {
        self.key
    }

    /// Upstream operation.
    #[must_use]
    pub const fn op(&self) -> &FetchOp {
        &self.op
    }
}

/// Plan the minimal ordered list of fetches for a request.
///
/// Precedence: search, then `details`/`comments`/`transcript` for a video id,
/// then `channel` for a channel id. Unknown field names are ignored.
///
/// # Errors
/// - `MissingIdentifier` if the request carries no identifier.
/// - `NoTasksPlanned` if identifiers are present but nothing maps to a fetch.
pub fn plan(req: &FetchRequest) -> Result<Vec<FetchTask>, VidscopeError> {
    if !req.has_identifier() {
        return Err(VidscopeError::MissingIdentifier);
    }

    let mut tasks = Vec::new();
    if let Some(q) = &req.search_query {
        tasks.push(FetchTask::new(FetchOp::Search(q.clone())));
    }
    if let Some(id) = &req.video_id {
        let video_ops: [(FetchKey, fn(String) -> FetchOp); 3] = [
            (FetchKey::Details, FetchOp::Details),
            (FetchKey::Comments, FetchOp::Comments),
            (FetchKey::Transcript, FetchOp::Transcript),
        ];
        for (key, make) in video_ops {
            if req.fields.requests(key) {
                tasks.push(FetchTask::new(make(id.clone())));
            }
        }
    }
    if let Some(id) = &req.channel_id
        && req.fields.requests(FetchKey::Channel)
    {
        tasks.push(FetchTask::new(FetchOp::Channel(id.clone())));
    }

    if tasks.is_empty() {
        return Err(VidscopeError::NoTasksPlanned);
    }
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(tasks: &[FetchTask]) -> Vec<FetchKey> {
        tasks.iter().map(FetchTask::key).collect()
    }

    #[test]
    fn no_identifier_is_rejected() {
        let req = FetchRequest::from_params(None, Some("  "), Some(""), Some("details"));
        assert_eq!(plan(&req), Err(VidscopeError::MissingIdentifier));
    }

    #[test]
    fn identifier_without_matching_fields_plans_nothing() {
        let req = FetchRequest::new().video_id("abc").fields(FieldSet::parse("channel,bogus"));
        assert_eq!(plan(&req), Err(VidscopeError::NoTasksPlanned));
    }

    #[test]
    fn order_follows_precedence_not_field_order() {
        let req = FetchRequest::from_params(
            Some("vid"),
            Some("chan"),
            Some("rust"),
            Some("channel,transcript,comments,details"),
        );
        let tasks = plan(&req).unwrap();
        assert_eq!(
            keys(&tasks),
            vec![
                FetchKey::SearchResults,
                FetchKey::Details,
                FetchKey::Comments,
                FetchKey::Transcript,
                FetchKey::Channel,
            ]
        );
        assert_eq!(tasks[4].op(), &FetchOp::Channel("chan".into()));
        assert_eq!(tasks[1].op().argument(), "vid");
    }

    #[test]
    fn identifiers_are_passed_through_untrimmed() {
        let req = FetchRequest::from_params(Some(" vid"), None, Some(" lofi beats "), None)
            .fields(FieldSet::parse("details"));
        let tasks = plan(&req).unwrap();
        assert_eq!(tasks[0].op(), &FetchOp::Search(" lofi beats ".into()));
        assert_eq!(tasks[1].op().argument(), " vid");
    }

    #[test]
    fn search_needs_no_fields() {
        let req = FetchRequest::new().search("lofi");
        assert_eq!(keys(&plan(&req).unwrap()), vec![FetchKey::SearchResults]);
    }

    #[test]
    fn channel_field_without_channel_id_is_ignored() {
        let req = FetchRequest::new()
            .video_id("abc")
            .fields(FieldSet::parse("details,channel"));
        assert_eq!(keys(&plan(&req).unwrap()), vec![FetchKey::Details]);
    }
}
