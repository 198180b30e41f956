use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::{
    dto::video::{ErrorResponse, ProcessVideoRequest, ProcessVideoResponse, VerifyVideoResponse},
    error::AppError,
    models::asset::AssetReference,
    services::video::VideoService,
    AppState,
};

/// Parse and validate the request body into an [`AssetReference`]
///
/// Only a non-empty JSON object is a body; anything else counts as "no body".
pub fn parse_asset_reference(body: &[u8]) -> Result<AssetReference, AppError> {
    let no_body = || AppError::Validation("Invalid request: No JSON body provided.".to_string());

    let value = match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) if !map.is_empty() => Value::Object(map),
        _ => return Err(no_body()),
    };

    let request: ProcessVideoRequest = serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("Invalid request: {}", e)))?;

    match request.public_id {
        Some(public_id) if !public_id.trim().is_empty() => Ok(AssetReference::new(
            public_id,
            request.email,
            request.project_name,
        )),
        _ => Err(AppError::Validation(
            "Request body must include the 'publicId' of the uploaded video.".to_string(),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/process_video",
    tag = "video",
    request_body = ProcessVideoRequest,
    responses(
        (status = 200, description = "Delivery URLs and embed code generated", body = ProcessVideoResponse),
        (status = 400, description = "Missing body or publicId", body = ErrorResponse),
        (status = 500, description = "Server configuration or processing error", body = ErrorResponse)
    )
)]
pub async fn process_video(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessVideoResponse>, AppError> {
    let provider = state.provider()?;
    let asset = parse_asset_reference(&body)?;

    tracing::info!(
        public_id = %asset.public_id,
        project = asset.project_name.as_deref().unwrap_or("-"),
        "Processing video"
    );

    VideoService::process(provider, &asset).map(Json)
}

#[utoipa::path(
    post,
    path = "/api/verify_video",
    tag = "video",
    request_body = ProcessVideoRequest,
    responses(
        (status = 200, description = "Video exists on the media provider", body = VerifyVideoResponse),
        (status = 400, description = "Missing body or publicId", body = ErrorResponse),
        (status = 404, description = "Video not found or lookup failed", body = ErrorResponse),
        (status = 500, description = "Server configuration error", body = ErrorResponse)
    )
)]
pub async fn verify_video(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<VerifyVideoResponse>, AppError> {
    let provider = state.provider()?;
    let asset = parse_asset_reference(&body)?;

    tracing::info!(public_id = %asset.public_id, "Verifying video");

    VideoService::verify(provider, &asset).await.map(Json)
}
