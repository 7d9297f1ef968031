// tests/test_helpers.rs
// Substitute template stores and gateways for router tests

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use csm_coach::llm::CompletionGateway;
use csm_coach::pipeline::Pipeline;
use csm_coach::templates::{TemplateName, TemplateStore};
use csm_coach::web::{self, AppState};
use csm_coach::{CoachError, Result};
use http_body_util::BodyExt;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

/// Template store with a fixed text per call, or "not found" when `None`
pub struct FakeTemplates {
    text: Option<String>,
    loads: AtomicUsize,
}

impl FakeTemplates {
    pub fn new(text: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            text: text.map(String::from),
            loads: AtomicUsize::new(0),
        })
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TemplateStore for FakeTemplates {
    async fn load(&self, name: TemplateName) -> Result<String> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.text.clone().ok_or_else(|| CoachError::TemplateNotFound {
            name: name.to_string(),
            path: PathBuf::from("/missing").join(name.relative_path()),
        })
    }
}

/// Gateway that counts calls, echoes a reply, or fails like a dropped connection
pub struct FakeGateway {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl FakeGateway {
    pub fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionGateway for FakeGateway {
    async fn complete(&self, _system: &str, _user: &str, _model: Option<&str>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone().ok_or_else(|| {
            CoachError::CompletionProvider("error sending request: connection reset by peer".into())
        })
    }
}

pub fn app(templates: Arc<FakeTemplates>, gateway: Arc<FakeGateway>) -> axum::Router {
    web::create_router(AppState::new(Pipeline::new(templates, gateway)))
}

pub async fn post_json(app: axum::Router, uri: &str, body: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST with an explicit (or absent) `Content-Type`
pub async fn post_with_content_type(
    app: axum::Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> Response<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    app.oneshot(builder.body(Body::from(body.to_string())).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: axum::Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
