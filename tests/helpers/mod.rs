//! Test helper utilities for driving the router in-process

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, Response};
use axum::Router;
use base64::Engine;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

use beverage_lens::app_state::AppState;
use beverage_lens::config::RuntimeMode;
use beverage_lens::models::request::ImagePayload;
use beverage_lens::routes::build_router;
use beverage_lens::services::vision::{VisionClient, VisionError};

pub const BODY_LIMIT: usize = 50 * 1024 * 1024;

/// What the stub model does when asked about an image.
#[derive(Clone)]
pub enum StubReply {
    Text(String),
    Fail(String),
    Panic,
}

/// Deterministic stand-in for the vision model.
#[derive(Clone)]
pub struct StubVision {
    reply: StubReply,
    calls: Arc<AtomicUsize>,
}

impl StubVision {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(StubReply::Text(text.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(StubReply::Fail(message.into()))
    }

    pub fn panicking() -> Self {
        Self::new(StubReply::Panic)
    }

    fn new(reply: StubReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisionClient for StubVision {
    async fn describe_image(
        &self,
        _prompt: &str,
        _image: &ImagePayload,
    ) -> Result<String, VisionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Fail(message) => Err(VisionError::Unavailable(message.clone())),
            StubReply::Panic => panic!("stub vision client panicked"),
        }
    }
}

pub fn app(vision: StubVision, mode: RuntimeMode) -> Router {
    app_with_limit(vision, mode, BODY_LIMIT)
}

pub fn app_with_limit(vision: StubVision, mode: RuntimeMode, body_limit: usize) -> Router {
    build_router(AppState::new(vision, mode), body_limit)
}

/// A small PNG-looking payload wrapped in a data URI.
pub fn data_uri() -> String {
    let bytes = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

pub fn json_request(body: &Value) -> Request<Body> {
    raw_request("application/json", body.to_string())
}

pub fn raw_request(content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/analyze-image")
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
