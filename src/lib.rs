pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use error::AppError;
pub use services::provider::MediaProvider;

use crate::services::{cloudinary::CloudinaryProvider, provider::ProviderError};

#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Media provider, absent when credentials are incomplete
    pub provider: Option<Arc<dyn MediaProvider>>,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, provider: Option<Arc<dyn MediaProvider>>) -> Self {
        Self { config, provider }
    }

    /// Builds a Cloudinary provider when the configuration carries all credentials
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self, ProviderError> {
        let provider = match config.provider.credentials() {
            Ok(credentials) => Some(Arc::new(CloudinaryProvider::new(
                credentials,
                &config.provider,
            )?) as Arc<dyn MediaProvider>),
            Err(e) => {
                tracing::warn!("Media provider disabled: {}", e);
                None
            }
        };

        Ok(Self::new(config, provider))
    }

    pub fn provider(&self) -> Result<&dyn MediaProvider, AppError> {
        match &self.provider {
            Some(provider) => Ok(provider.as_ref()),
            None => Err(self.config.provider.credentials().err().unwrap_or_else(|| {
                AppError::Configuration("Could not initialize media provider.".to_string())
            })),
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::video::process_video,
        handlers::video::verify_video,
        handlers::health::health_check,
    ),
    components(schemas(
        dto::video::ProcessVideoRequest,
        dto::video::ProcessVideoResponse,
        dto::video::DerivedAssets,
        dto::video::VerifyVideoResponse,
        dto::video::HealthResponse,
        dto::video::ErrorResponse
    )),
    tags(
        (name = "video", description = "Delivery URL and embed code generation"),
        (name = "health", description = "Service status")
    ),
    info(
        title = "Video Asset Link Service",
        version = "0.1.0",
        description = "Builds optimized delivery URLs and embed snippets for uploaded videos"
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_routes: Router<AppState> = Router::new()
        .route("/api/process_video", post(handlers::video::process_video))
        .route("/api/verify_video", post(handlers::video::verify_video))
        .route("/api/health", get(handlers::health::health_check));

    let mut api_doc = ApiDoc::openapi();
    api_doc.info.version = state.config.app.version.clone();

    // API Documentation - Swagger UI
    let api_docs_routes: Router<AppState> = Router::new()
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", api_doc));

    Router::new()
        .merge(api_routes)
        .merge(api_docs_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
