use async_trait::async_trait;
use thiserror::Error;

use crate::models::asset::{AssetMetadata, TransformationProfile};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    NotFound(String),

    #[error("Invalid public_id: {0}")]
    InvalidPublicId(String),

    #[error("Request to media provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Media provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode media provider response: {0}")]
    Decode(String),
}

/// Media-hosting provider capabilities used by the service
///
/// URL building is local string assembly; only the metadata lookup talks to
/// the network.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// Build the delivery URL of `public_id` under the given profile
    fn build_transformed_url(
        &self,
        public_id: &str,
        profile: &TransformationProfile,
    ) -> Result<String, ProviderError>;

    /// Look up the uploaded video resource `public_id`
    async fn fetch_asset_metadata(&self, public_id: &str) -> Result<AssetMetadata, ProviderError>;
}
