use httpmock::prelude::*;
use serde_json::json;
use vidscope_core::{TranscriptPayload, VideoConnector, VidscopeError};
use vidscope_invidious::{InvidiousConfig, InvidiousConnector};

fn connector(server: &MockServer) -> InvidiousConnector {
    let cfg = InvidiousConfig::with_base_url(format!("{}/api/v1", server.base_url()));
    InvidiousConnector::new(&cfg).expect("connector builds")
}

#[tokio::test]
async fn video_details_hits_videos_endpoint() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/videos/abc123");
            then.status(200).json_body(json!({
                "title": "A video",
                "viewCount": 1234,
                "authorId": "UCxyz",
                "lengthSeconds": 60
            }));
        })
        .await;

    let c = connector(&server);
    let d = c
        .as_video_details_provider()
        .unwrap()
        .video_details("abc123")
        .await
        .expect("details ok");
    m.assert_async().await;
    assert_eq!(d.title.as_deref(), Some("A video"));
    assert_eq!(d.channel_id(), Some("UCxyz"));
    assert_eq!(d.extra.get("lengthSeconds"), Some(&json!(60)));
}

#[tokio::test]
async fn upstream_404_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/authors/UCgone");
            then.status(404).json_body(json!({"error": "This channel does not exist."}));
        })
        .await;

    let err = connector(&server)
        .as_channel_provider()
        .unwrap()
        .channel("UCgone")
        .await
        .expect_err("404 is an error");
    assert_eq!(err, VidscopeError::not_found("channel UCgone"));
}

#[tokio::test]
async fn upstream_500_is_tagged_with_connector_name() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/comments/abc123");
            then.status(500).body("boom");
        })
        .await;

    let err = connector(&server)
        .as_comments_provider()
        .unwrap()
        .comments("abc123")
        .await
        .expect_err("500 is an error");
    assert_eq!(
        err,
        VidscopeError::connector("vidscope-invidious", "status 500: comments for abc123")
    );
}

#[tokio::test]
async fn search_sends_query_and_video_type() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/search")
                .query_param("q", "never gonna")
                .query_param("type", "video");
            then.status(200)
                .json_body(json!([{"type": "video", "videoId": "dQw4w9WgXcQ"}]));
        })
        .await;

    let hits = connector(&server)
        .as_search_provider()
        .unwrap()
        .search("never gonna")
        .await
        .expect("search ok");
    m.assert_async().await;
    assert_eq!(hits[0]["videoId"], "dQw4w9WgXcQ");
}

#[tokio::test]
async fn transcript_follows_first_caption_track_json() {
    let server = MockServer::start_async().await;
    let meta = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/videos/abc123")
                .query_param("fields", "captions");
            then.status(200).json_body(json!({
                "captions": [
                    {"label": "English", "languageCode": "en", "url": "/api/v1/captions/abc123?label=English"},
                    {"label": "Deutsch", "languageCode": "de", "url": "/api/v1/captions/abc123?label=Deutsch"}
                ]
            }));
        })
        .await;
    let track = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/api/v1/captions/abc123")
                .query_param("label", "English");
            then.status(200).json_body(json!({
                "lines": [{"start": 0, "text": "hello"}, {"start": 1500, "text": "world"}]
            }));
        })
        .await;

    let t = connector(&server)
        .as_transcript_provider()
        .unwrap()
        .transcript("abc123")
        .await;
    meta.assert_async().await;
    track.assert_async().await;
    let lines = t.usable_lines().expect("lines");
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1].text, "world");
}

#[tokio::test]
async fn transcript_parses_webvtt_tracks() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/videos/vtt1");
            then.status(200).json_body(json!({
                "captions": [{"label": "English", "url": "/api/v1/captions/vtt1?label=English"}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/captions/vtt1");
            then.status(200)
                .header("content-type", "text/vtt")
                .body("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\nfirst cue\n\n00:00:02.500 --> 00:00:03.000\nsecond cue\n");
        })
        .await;

    let t = connector(&server)
        .as_transcript_provider()
        .unwrap()
        .transcript("vtt1")
        .await;
    let lines = t.usable_lines().expect("lines");
    assert_eq!(lines.len(), 2);
    assert!((lines[0].start - 1000.0).abs() < f64::EPSILON);
    assert_eq!(lines[0].text, "first cue");
}

#[tokio::test]
async fn transcript_without_tracks_reports_no_captions() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/videos/nocaps");
            then.status(200).json_body(json!({"captions": []}));
        })
        .await;

    let t = connector(&server)
        .as_transcript_provider()
        .unwrap()
        .transcript("nocaps")
        .await;
    assert_eq!(t, TranscriptPayload::unavailable("No captions available."));
}

#[tokio::test]
async fn transcript_track_failure_is_reported_not_raised() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/videos/broken");
            then.status(200).json_body(json!({
                "captions": [{"url": "/api/v1/captions/broken?label=English"}]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/captions/broken");
            then.status(502);
        })
        .await;

    let t = connector(&server)
        .as_transcript_provider()
        .unwrap()
        .transcript("broken")
        .await;
    assert_eq!(t, TranscriptPayload::unavailable("Failed to fetch transcript."));
}

#[tokio::test]
async fn transcript_metadata_failure_is_reported_not_raised() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/videos/down");
            then.status(503);
        })
        .await;

    let t = connector(&server)
        .as_transcript_provider()
        .unwrap()
        .transcript("down")
        .await;
    assert_eq!(t, TranscriptPayload::unavailable("Failed to fetch transcript."));
}

#[test]
fn bad_base_url_is_rejected() {
    let cfg = InvidiousConfig::with_base_url("ftp://example.com/api/v1");
    assert!(matches!(
        InvidiousConnector::new(&cfg),
        Err(VidscopeError::InvalidArg(_))
    ));
}

#[tokio::test]
async fn comments_with_float_and_string_like_counts_decode() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/comments/v1");
            then.status(200).json_body(json!({
                "comments": [
                    {"content": "float", "likeCount": 5.0},
                    {"content": "numeric", "likeCount": "12"},
                    {"content": "abbreviated", "likeCount": "1.2K"}
                ]
            }));
        })
        .await;

    let payload = connector(&server)
        .as_comments_provider()
        .unwrap()
        .comments("v1")
        .await
        .expect("loosely typed counts decode");
    assert_eq!(payload.comments.len(), 3);
    assert_eq!(payload.comments[2].like_count, Some(json!("1.2K")));
    assert!((payload.comments[1].likes() - 12.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn absolute_caption_urls_are_not_followed() {
    let server = MockServer::start_async().await;
    let absolute = format!("{}/elsewhere/track.vtt", server.base_url());
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v1/videos/offsite");
            then.status(200)
                .json_body(json!({"captions": [{"label": "English", "url": absolute}]}));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/elsewhere/track.vtt");
            then.status(200)
                .body("WEBVTT\n\n00:00:01.000 --> 00:00:02.000\noffsite cue\n");
        })
        .await;

    let t = connector(&server)
        .as_transcript_provider()
        .unwrap()
        .transcript("offsite")
        .await;
    assert_eq!(t, TranscriptPayload::unavailable("Failed to fetch transcript."));
}
