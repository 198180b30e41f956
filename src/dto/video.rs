use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::asset::DerivedAssetSet;

/// Body of `POST /api/process_video` and `POST /api/verify_video`
///
/// `email` and `projectName` are accepted for the caller's bookkeeping only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessVideoRequest {
    #[serde(default, alias = "public_id")]
    pub public_id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "project_name")]
    pub project_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DerivedAssets {
    pub optimized_mp4_url: String,
    pub optimized_webm_url: String,
    pub poster_image_url: String,
}

impl From<DerivedAssetSet> for DerivedAssets {
    fn from(set: DerivedAssetSet) -> Self {
        Self {
            optimized_mp4_url: set.optimized_mp4_url,
            optimized_webm_url: set.optimized_webm_url,
            poster_image_url: set.poster_image_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessVideoResponse {
    pub message: String,
    pub assets: DerivedAssets,
    pub embed_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyVideoResponse {
    pub message: String,
    pub received_public_id: String,
    pub video_original_url: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
