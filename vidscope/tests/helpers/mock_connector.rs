#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::time::{Duration, sleep};
use vidscope_core::connector::{
    ChannelProvider, CommentsProvider, SearchProvider, TranscriptProvider, VideoDetailsProvider,
};
use vidscope_core::{
    ChannelDetails, CommentsPayload, FetchKey, SearchResults, TranscriptPayload, VideoConnector,
    VideoDetails, VidscopeError,
};

type Handler<T> = Arc<dyn Fn(&str) -> Result<T, VidscopeError> + Send + Sync>;

/// In-memory connector used by integration tests.
///
/// A capability is advertised only when its closure was configured. Every
/// call is recorded (key and argument) on entry, and completion order is
/// recorded after the optional per-capability delay.
pub struct MockConnector {
    pub name: &'static str,
    pub delays: HashMap<FetchKey, Duration>,
    pub details_fn: Option<Handler<VideoDetails>>,
    pub comments_fn: Option<Handler<CommentsPayload>>,
    pub channel_fn: Option<Handler<ChannelDetails>>,
    pub search_fn: Option<Handler<SearchResults>>,
    pub transcript_fn: Option<Arc<dyn Fn(&str) -> TranscriptPayload + Send + Sync>>,
    calls: Mutex<Vec<(FetchKey, String)>>,
    completed: Mutex<Vec<FetchKey>>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    /// Calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<(FetchKey, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Keys in the order their calls finished.
    pub fn completed(&self) -> Vec<FetchKey> {
        self.completed.lock().unwrap().clone()
    }

    pub fn was_called(&self, key: FetchKey) -> bool {
        self.calls().iter().any(|(k, _)| *k == key)
    }

    async fn enter(&self, key: FetchKey, arg: &str) {
        self.calls.lock().unwrap().push((key, arg.to_string()));
        if let Some(d) = self.delays.get(&key) {
            sleep(*d).await;
        }
    }

    fn leave(&self, key: FetchKey) {
        self.completed.lock().unwrap().push(key);
    }

    async fn run<T>(&self, key: FetchKey, arg: &str, f: Option<&Handler<T>>) -> Result<T, VidscopeError> {
        self.enter(key, arg).await;
        let out = match f {
            Some(f) => f(arg),
            None => Err(VidscopeError::unsupported(key.as_str())),
        };
        self.leave(key);
        out
    }
}

#[async_trait]
impl VideoDetailsProvider for MockConnector {
    async fn video_details(&self, video_id: &str) -> Result<VideoDetails, VidscopeError> {
        self.run(FetchKey::Details, video_id, self.details_fn.as_ref()).await
    }
}

#[async_trait]
impl CommentsProvider for MockConnector {
    async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError> {
        self.run(FetchKey::Comments, video_id, self.comments_fn.as_ref()).await
    }
}

#[async_trait]
impl ChannelProvider for MockConnector {
    async fn channel(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError> {
        self.run(FetchKey::Channel, channel_id, self.channel_fn.as_ref()).await
    }
}

#[async_trait]
impl SearchProvider for MockConnector {
    async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError> {
        self.run(FetchKey::SearchResults, query, self.search_fn.as_ref()).await
    }
}

#[async_trait]
impl TranscriptProvider for MockConnector {
    async fn transcript(&self, video_id: &str) -> TranscriptPayload {
        self.enter(FetchKey::Transcript, video_id).await;
        let out = self.transcript_fn.as_ref().map_or_else(
            || TranscriptPayload::unavailable("No captions available."),
            |f| f(video_id),
        );
        self.leave(FetchKey::Transcript);
        out
    }
}

impl VideoConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_video_details_provider(&self) -> Option<&dyn VideoDetailsProvider> {
        self.details_fn.as_ref().map(|_| self as &dyn VideoDetailsProvider)
    }
    fn as_comments_provider(&self) -> Option<&dyn CommentsProvider> {
        self.comments_fn.as_ref().map(|_| self as &dyn CommentsProvider)
    }
    fn as_channel_provider(&self) -> Option<&dyn ChannelProvider> {
        self.channel_fn.as_ref().map(|_| self as &dyn ChannelProvider)
    }
    fn as_search_provider(&self) -> Option<&dyn SearchProvider> {
        self.search_fn.as_ref().map(|_| self as &dyn SearchProvider)
    }
    fn as_transcript_provider(&self) -> Option<&dyn TranscriptProvider> {
        self.transcript_fn.as_ref().map(|_| self as &dyn TranscriptProvider)
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    delays: HashMap<FetchKey, Duration>,
    details_fn: Option<Handler<VideoDetails>>,
    comments_fn: Option<Handler<CommentsPayload>>,
    channel_fn: Option<Handler<ChannelDetails>>,
    search_fn: Option<Handler<SearchResults>>,
    transcript_fn: Option<Arc<dyn Fn(&str) -> TranscriptPayload + Send + Sync>>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delays: HashMap::new(),
            details_fn: None,
            comments_fn: None,
            channel_fn: None,
            search_fn: None,
            transcript_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Delay one capability before it answers.
    pub fn delay(mut self, key: FetchKey, d: Duration) -> Self {
        self.delays.insert(key, d);
        self
    }

    pub fn with_details_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<VideoDetails, VidscopeError> + Send + Sync + 'static,
    {
        self.details_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_details_ok(self, d: VideoDetails) -> Self {
        self.with_details_fn(move |_| Ok(d.clone()))
    }

    pub fn with_comments_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<CommentsPayload, VidscopeError> + Send + Sync + 'static,
    {
        self.comments_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_comments_ok(self, c: CommentsPayload) -> Self {
        self.with_comments_fn(move |_| Ok(c.clone()))
    }

    pub fn with_channel_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<ChannelDetails, VidscopeError> + Send + Sync + 'static,
    {
        self.channel_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_channel_ok(self, c: ChannelDetails) -> Self {
        self.with_channel_fn(move |_| Ok(c.clone()))
    }

    pub fn with_search_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Result<SearchResults, VidscopeError> + Send + Sync + 'static,
    {
        self.search_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_search_ok(self, v: SearchResults) -> Self {
        self.with_search_fn(move |_| Ok(v.clone()))
    }

    pub fn with_transcript_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> TranscriptPayload + Send + Sync + 'static,
    {
        self.transcript_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_transcript(self, t: TranscriptPayload) -> Self {
        self.with_transcript_fn(move |_| t.clone())
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delays: self.delays,
            details_fn: self.details_fn,
            comments_fn: self.comments_fn,
            channel_fn: self.channel_fn,
            search_fn: self.search_fn,
            transcript_fn: self.transcript_fn,
            calls: Mutex::new(Vec::new()),
            completed: Mutex::new(Vec::new()),
        })
    }
}
