use crate::{
    dto::video::{ProcessVideoResponse, VerifyVideoResponse},
    error::AppError,
    models::asset::{AssetReference, DerivedAssetSet, TransformationProfile},
    services::{
        embed::generate_embed_code,
        provider::{MediaProvider, ProviderError},
    },
};

pub struct VideoService;

impl VideoService {
    /// Build the MP4, WebM and poster URLs for one asset. No network access.
    pub fn derive_assets(
        provider: &dyn MediaProvider,
        public_id: &str,
    ) -> Result<DerivedAssetSet, ProviderError> {
        Ok(DerivedAssetSet {
            optimized_mp4_url: provider
                .build_transformed_url(public_id, &TransformationProfile::MP4)?,
            optimized_webm_url: provider
                .build_transformed_url(public_id, &TransformationProfile::WEBM)?,
            poster_image_url: provider
                .build_transformed_url(public_id, &TransformationProfile::POSTER)?,
        })
    }

    /// Derived URLs plus the embed snippet that references them
    pub fn process(
        provider: &dyn MediaProvider,
        asset: &AssetReference,
    ) -> Result<ProcessVideoResponse, AppError> {
        let assets = Self::derive_assets(provider, &asset.public_id)
            .map_err(|e| AppError::Unexpected(e.to_string()))?;
        let embed_code =
            generate_embed_code(&assets).map_err(|e| AppError::Unexpected(e.to_string()))?;

        tracing::info!("Generated delivery URLs for {}", asset.public_id);

        Ok(ProcessVideoResponse {
            message: "Video processed successfully!".to_string(),
            assets: assets.into(),
            embed_code,
        })
    }

    /// Confirm the asset exists on the provider and report its original URL
    pub async fn verify(
        provider: &dyn MediaProvider,
        asset: &AssetReference,
    ) -> Result<VerifyVideoResponse, AppError> {
        let metadata = provider
            .fetch_asset_metadata(&asset.public_id)
            .await
            .map_err(|e| AppError::AssetNotFound {
                public_id: asset.public_id.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!("Verified video {} at {}", asset.public_id, metadata.secure_url);

        Ok(VerifyVideoResponse {
            message: "Video found successfully!".to_string(),
            received_public_id: asset.public_id.clone(),
            video_original_url: metadata.secure_url,
            status: "verified".to_string(),
        })
    }
}
