#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;
use vidscope_core::{
    ChannelDetails, CommentsPayload, SearchResults, TranscriptPayload, VideoDetails,
    VidscopeError,
};

use crate::config::InvidiousConfig;
use crate::vtt;

const CONNECTOR: &str = "vidscope-invidious";

/// Video metadata abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait InvVideos: Send + Sync {
    /// Fetch `videos/{id}`.
    async fn video(&self, video_id: &str) -> Result<VideoDetails, VidscopeError>;
}

/// Comments abstraction.
#[async_trait]
pub trait InvComments: Send + Sync {
    /// Fetch `comments/{id}`.
    async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError>;
}

/// Channel abstraction.
#[async_trait]
pub trait InvChannels: Send + Sync {
    /// Fetch `authors/{id}`.
    async fn author(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError>;
}

/// Search abstraction; results are passed through untouched.
#[async_trait]
pub trait InvSearch: Send + Sync {
    /// Fetch `search?q=..&type=video`.
    async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError>;
}

/// One caption track advertised for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// Human-readable label, e.g. "English (auto-generated)".
    #[serde(default)]
    pub label: Option<String>,
    /// BCP-47 language code.
    #[serde(default)]
    pub language_code: Option<String>,
    /// Instance-relative path of the track resource.
    pub url: String,
}

#[derive(Deserialize)]
struct CaptionsEnvelope {
    #[serde(default)]
    captions: Vec<CaptionTrack>,
}

/// Caption abstraction: the two steps of a transcript lookup.
#[async_trait]
pub trait InvCaptions: Send + Sync {
    /// Fetch `videos/{id}?fields=captions` and return the advertised tracks.
    async fn tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, VidscopeError>;
    /// Fetch one track by the path from [`CaptionTrack::url`].
    async fn track(&self, path: &str) -> Result<TranscriptPayload, VidscopeError>;
}

/// Real adapter backed by a single `reqwest::Client`.
/// `reqwest::Client` is `Clone + Send + Sync` and pools connections internally.
#[derive(Clone)]
pub struct RealAdapter {
    client: reqwest::Client,
    api_root: Url,
    origin: String,
}

impl RealAdapter {
    /// Build an HTTP client from configuration.
    ///
    /// # Errors
    /// `InvalidArg` for a bad base URL; `Other` if the HTTP client cannot be built.
    pub fn new(cfg: &InvidiousConfig) -> Result<Self, VidscopeError> {
        let mut builder = reqwest::Client::builder().user_agent(cfg.user_agent.clone());
        if let Some(t) = cfg.connect_timeout {
            builder = builder.connect_timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| VidscopeError::Other(format!("failed to build http client: {e}")))?;
        Self::with_client(client, cfg)
    }

    /// Wrap an existing `reqwest::Client`.
    ///
    /// # Errors
    /// `InvalidArg` for a bad base URL.
    pub fn with_client(client: reqwest::Client, cfg: &InvidiousConfig) -> Result<Self, VidscopeError> {
        Ok(Self {
            client,
            api_root: cfg.api_root()?,
            origin: cfg.origin(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, VidscopeError> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|()| VidscopeError::InvalidArg("base url cannot carry a path".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Caption tracks are always fetched from the configured instance; only
    /// instance-relative paths are accepted.
    fn track_url(&self, path: &str) -> Result<Url, VidscopeError> {
        if !path.starts_with('/') || path.starts_with("//") {
            return Err(VidscopeError::Data(format!(
                "caption url is not instance-relative: {path}"
            )));
        }
        Url::parse(&format!("{}{}", self.origin, path))
            .map_err(|e| VidscopeError::Data(format!("bad caption url {path}: {e}")))
    }

    async fn get(&self, url: Url, context: &str) -> Result<reqwest::Response, VidscopeError> {
        self.client
            .get(url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| map_http_err(&e, context))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, VidscopeError> {
        self.get(url, context)
            .await?
            .json::<T>()
            .await
            .map_err(|e| map_http_err(&e, context))
    }
}

/// Normalize a transport or status failure into a `VidscopeError`.
pub(crate) fn map_http_err(e: &reqwest::Error, context: &str) -> VidscopeError {
    if let Some(status) = e.status() {
        if status == reqwest::StatusCode::NOT_FOUND {
            return VidscopeError::not_found(context.to_string());
        }
        return VidscopeError::connector(CONNECTOR, format!("status {}: {context}", status.as_u16()));
    }
    if e.is_timeout() {
        return VidscopeError::connector(CONNECTOR, format!("timeout: {context}"));
    }
    if e.is_decode() {
        return VidscopeError::connector(CONNECTOR, format!("invalid response body: {context}"));
    }
    VidscopeError::connector(CONNECTOR, format!("{context}: {e}"))
}

#[async_trait]
impl InvVideos for RealAdapter {
    async fn video(&self, video_id: &str) -> Result<VideoDetails, VidscopeError> {
        let url = self.endpoint(&["videos", video_id])?;
        self.get_json(url, &format!("video {video_id}")).await
    }
}

#[async_trait]
impl InvComments for RealAdapter {
    async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError> {
        let url = self.endpoint(&["comments", video_id])?;
        self.get_json(url, &format!("comments for {video_id}")).await
    }
}

#[async_trait]
impl InvChannels for RealAdapter {
    async fn author(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError> {
        let url = self.endpoint(&["authors", channel_id])?;
        self.get_json(url, &format!("channel {channel_id}")).await
    }
}

#[async_trait]
impl InvSearch for RealAdapter {
    async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("type", "video");
        self.get_json(url, "search").await
    }
}

#[async_trait]
impl InvCaptions for RealAdapter {
    async fn tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, VidscopeError> {
        let mut url = self.endpoint(&["videos", video_id])?;
        url.query_pairs_mut().append_pair("fields", "captions");
        let env: CaptionsEnvelope = self
            .get_json(url, &format!("captions for {video_id}"))
            .await?;
        Ok(env.captions)
    }

    async fn track(&self, path: &str) -> Result<TranscriptPayload, VidscopeError> {
        let url = self.track_url(path)?;
        let context = format!("caption track {path}");
        let body = self
            .get(url, &context)
            .await?
            .text()
            .await
            .map_err(|e| map_http_err(&e, &context))?;
        let trimmed = body.trim_start();
        if trimmed.starts_with('{') {
            serde_json::from_str(trimmed)
                .map_err(|e| VidscopeError::Data(format!("{context}: {e}")))
        } else {
            vtt::parse(&body).map(TranscriptPayload::from_lines)
        }
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn InvVideos {
    /// Build an `InvVideos` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn InvVideos>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<VideoDetails, VidscopeError>,
    {
        struct FnVideos<F>(F);
        #[async_trait]
        impl<F> InvVideos for FnVideos<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<VideoDetails, VidscopeError>,
        {
            async fn video(&self, video_id: &str) -> Result<VideoDetails, VidscopeError> {
                (self.0)(video_id)
            }
        }
        Arc::new(FnVideos(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn InvComments {
    /// Build an `InvComments` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn InvComments>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<CommentsPayload, VidscopeError>,
    {
        struct FnComments<F>(F);
        #[async_trait]
        impl<F> InvComments for FnComments<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<CommentsPayload, VidscopeError>,
        {
            async fn comments(&self, video_id: &str) -> Result<CommentsPayload, VidscopeError> {
                (self.0)(video_id)
            }
        }
        Arc::new(FnComments(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn InvChannels {
    /// Build an `InvChannels` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn InvChannels>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<ChannelDetails, VidscopeError>,
    {
        struct FnChannels<F>(F);
        #[async_trait]
        impl<F> InvChannels for FnChannels<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<ChannelDetails, VidscopeError>,
        {
            async fn author(&self, channel_id: &str) -> Result<ChannelDetails, VidscopeError> {
                (self.0)(channel_id)
            }
        }
        Arc::new(FnChannels(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn InvSearch {
    /// Build an `InvSearch` from a closure taking the raw query (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn InvSearch>
    where
        F: Send + Sync + 'static + Fn(&str) -> Result<SearchResults, VidscopeError>,
    {
        struct FnSearch<F>(F);
        #[async_trait]
        impl<F> InvSearch for FnSearch<F>
        where
            F: Send + Sync + 'static + Fn(&str) -> Result<SearchResults, VidscopeError>,
        {
            async fn search(&self, query: &str) -> Result<SearchResults, VidscopeError> {
                (self.0)(query)
            }
        }
        Arc::new(FnSearch(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn InvCaptions {
    /// Build an `InvCaptions` from one closure per lookup step (tests only).
    pub fn from_fns<T, K>(tracks: T, track: K) -> Arc<dyn InvCaptions>
    where
        T: Send + Sync + 'static + Fn(&str) -> Result<Vec<CaptionTrack>, VidscopeError>,
        K: Send + Sync + 'static + Fn(&str) -> Result<TranscriptPayload, VidscopeError>,
    {
        struct FnCaptions<T, K> {
            tracks: T,
            track: K,
        }
        #[async_trait]
        impl<T, K> InvCaptions for FnCaptions<T, K>
        where
            T: Send + Sync + 'static + Fn(&str) -> Result<Vec<CaptionTrack>, VidscopeError>,
            K: Send + Sync + 'static + Fn(&str) -> Result<TranscriptPayload, VidscopeError>,
        {
            async fn tracks(&self, video_id: &str) -> Result<Vec<CaptionTrack>, VidscopeError> {
                (self.tracks)(video_id)
            }
            async fn track(&self, path: &str) -> Result<TranscriptPayload, VidscopeError> {
                (self.track)(path)
            }
        }
        Arc::new(FnCaptions { tracks, track })
    }
}

/// Helper trait to clone an adapter into the individual trait objects the
/// connector stores. Defaults answer `Unsupported`, so tests override only
/// what they exercise.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn InvVideos>`.
    fn clone_arc_videos(&self) -> Arc<dyn InvVideos> {
        <dyn InvVideos>::from_fn(|_| Err(VidscopeError::unsupported("details")))
    }
    /// Clone as `Arc<dyn InvComments>`.
    fn clone_arc_comments(&self) -> Arc<dyn InvComments> {
        <dyn InvComments>::from_fn(|_| Err(VidscopeError::unsupported("comments")))
    }
    /// Clone as `Arc<dyn InvChannels>`.
    fn clone_arc_channels(&self) -> Arc<dyn InvChannels> {
        <dyn InvChannels>::from_fn(|_| Err(VidscopeError::unsupported("channel")))
    }
    /// Clone as `Arc<dyn InvSearch>`.
    fn clone_arc_search(&self) -> Arc<dyn InvSearch> {
        <dyn InvSearch>::from_fn(|_| Err(VidscopeError::unsupported("search")))
    }
    /// Clone as `Arc<dyn InvCaptions>`.
    fn clone_arc_captions(&self) -> Arc<dyn InvCaptions> {
        <dyn InvCaptions>::from_fns(
            |_| Err(VidscopeError::unsupported("transcript")),
            |_| Err(VidscopeError::unsupported("transcript")),
        )
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_videos(&self) -> Arc<dyn InvVideos> {
        Arc::new(self.clone()) as Arc<dyn InvVideos>
    }
    fn clone_arc_comments(&self) -> Arc<dyn InvComments> {
        Arc::new(self.clone()) as Arc<dyn InvComments>
    }
    fn clone_arc_channels(&self) -> Arc<dyn InvChannels> {
        Arc::new(self.clone()) as Arc<dyn InvChannels>
    }
    fn clone_arc_search(&self) -> Arc<dyn InvSearch> {
        Arc::new(self.clone()) as Arc<dyn InvSearch>
    }
    fn clone_arc_captions(&self) -> Arc<dyn InvCaptions> {
        Arc::new(self.clone()) as Arc<dyn InvCaptions>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(base: &str) -> RealAdapter {
        RealAdapter::with_client(reqwest::Client::new(), &InvidiousConfig::with_base_url(base))
            .unwrap()
    }

    #[test]
    fn track_paths_join_the_instance_origin() {
        let a = adapter("https://inv.example.org/api/v1");
        assert_eq!(
            a.track_url("/api/v1/captions/abc?label=English").unwrap().as_str(),
            "https://inv.example.org/api/v1/captions/abc?label=English"
        );
    }

    #[test]
    fn absolute_track_urls_are_rejected() {
        let a = adapter("https://inv.example.org/api/v1");
        for bad in [
            "https://elsewhere.example.com/captions/abc",
            "http://127.0.0.1:1/x",
            "//elsewhere.example.com/x",
            "captions/abc",
        ] {
            assert!(
                matches!(a.track_url(bad), Err(VidscopeError::Data(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn endpoint_appends_segments_to_the_api_root() {
        let a = adapter("http://localhost:3000/api/v1/");
        assert_eq!(
            a.endpoint(&["videos", "abc"]).unwrap().as_str(),
            "http://localhost:3000/api/v1/videos/abc"
        );
    }
}
