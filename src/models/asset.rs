use serde::{Deserialize, Serialize};

/// A video previously uploaded to the media-hosting provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    pub public_id: String,
    pub email: Option<String>,
    pub project_name: Option<String>,
}

impl AssetReference {
    pub fn new(public_id: String, email: Option<String>, project_name: Option<String>) -> Self {
        Self {
            public_id,
            email,
            project_name,
        }
    }
}

/// Encoding parameters applied by the provider when delivering an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformationProfile {
    pub fetch_format: &'static str,
    pub video_codec: Option<&'static str>,
    pub quality: &'static str,
}

impl TransformationProfile {
    pub const MP4: TransformationProfile = TransformationProfile {
        fetch_format: "mp4",
        video_codec: Some("auto"),
        quality: "auto:good",
    };

    pub const WEBM: TransformationProfile = TransformationProfile {
        fetch_format: "webm",
        video_codec: Some("auto"),
        quality: "auto:good",
    };

    pub const POSTER: TransformationProfile = TransformationProfile {
        fetch_format: "jpg",
        video_codec: None,
        quality: "auto",
    };
}

/// The three delivery URLs derived from one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedAssetSet {
    pub optimized_mp4_url: String,
    pub optimized_webm_url: String,
    pub poster_image_url: String,
}

/// What the provider reports about an uploaded video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub public_id: String,
    pub secure_url: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub duration: Option<f64>,
}
