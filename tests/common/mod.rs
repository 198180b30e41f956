#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use tower::ServiceExt;
use video_link_service::{
    config::{AppConfig, ProviderConfig},
    create_router,
    models::asset::{AssetMetadata, TransformationProfile},
    services::{
        cloudinary::transformation_string,
        provider::{MediaProvider, ProviderError},
    },
    AppState,
};

/// In-memory provider: builds URLs on a fake host and knows a fixed set of videos
pub struct StubProvider {
    videos: HashMap<String, String>,
    lookups: AtomicUsize,
}

impl StubProvider {
    pub fn with_videos(videos: &[(&str, &str)]) -> Self {
        Self {
            videos: videos
                .iter()
                .map(|(id, url)| (id.to_string(), url.to_string()))
                .collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaProvider for StubProvider {
    fn build_transformed_url(
        &self,
        public_id: &str,
        profile: &TransformationProfile,
    ) -> Result<String, ProviderError> {
        Ok(format!(
            "https://stub.test/demo/video/upload/{}/{}",
            transformation_string(profile),
            public_id
        ))
    }

    async fn fetch_asset_metadata(&self, public_id: &str) -> Result<AssetMetadata, ProviderError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match self.videos.get(public_id) {
            Some(url) => Ok(AssetMetadata {
                public_id: public_id.to_string(),
                secure_url: url.clone(),
                format: Some("mp4".to_string()),
                bytes: None,
                duration: None,
            }),
            None => Err(ProviderError::NotFound(format!(
                "Resource not found - {}",
                public_id
            ))),
        }
    }
}

pub fn configured_provider_config() -> ProviderConfig {
    ProviderConfig {
        cloud_name: Some("demo".to_string()),
        api_key: Some("key".to_string()),
        api_secret: Some("secret".to_string()),
        ..ProviderConfig::default()
    }
}

pub fn config_with(provider: ProviderConfig) -> Arc<AppConfig> {
    Arc::new(AppConfig {
        provider,
        ..AppConfig::default()
    })
}

pub fn setup_test_app() -> (Router, Arc<StubProvider>) {
    let stub = Arc::new(StubProvider::with_videos(&[(
        "sample_video_123",
        "https://res.cloudinary.com/demo/video/upload/v1/sample_video_123.mp4",
    )]));
    let state = AppState::new(
        config_with(configured_provider_config()),
        Some(stub.clone() as Arc<dyn MediaProvider>),
    );
    (create_router(state), stub)
}

pub fn app_from_config(provider: ProviderConfig) -> Router {
    let state = AppState::from_config(config_with(provider)).expect("failed to build state");
    create_router(state)
}

pub fn json_post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}
