use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use crate::{
    config::{ProviderConfig, ProviderCredentials},
    models::asset::{AssetMetadata, TransformationProfile},
    services::provider::{MediaProvider, ProviderError},
};

/// Characters left as-is in a public id; everything else is percent-encoded
const PUBLIC_ID_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/')
    .remove(b':');

/// Cloudinary-style media provider
///
/// Delivery URLs follow `<scheme>://<host>/<cloud>/video/upload/<transformation>/<public_id>`.
/// Metadata comes from the admin API with basic auth.
#[derive(Clone)]
pub struct CloudinaryProvider {
    client: Client,
    credentials: ProviderCredentials,
    secure: bool,
    delivery_host: String,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl CloudinaryProvider {
    pub fn new(
        credentials: ProviderCredentials,
        config: &ProviderConfig,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            credentials,
            secure: config.secure,
            delivery_host: config.delivery_host.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn delivery_prefix(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!(
            "{}://{}/{}/video/upload",
            scheme, self.delivery_host, self.credentials.cloud_name
        )
    }

    fn metadata_url(&self, public_id: &str) -> String {
        format!(
            "{}/v1_1/{}/resources/video/upload/{}",
            self.api_base,
            self.credentials.cloud_name,
            utf8_percent_encode(public_id, PUBLIC_ID_SET)
        )
    }
}

/// Sorted `key_value` components joined with commas, e.g. `f_mp4,q_auto:good,vc_auto`
pub fn transformation_string(profile: &TransformationProfile) -> String {
    let mut components: Vec<String> = [
        Some(("f", profile.fetch_format)),
        Some(("q", profile.quality)),
        profile.video_codec.map(|codec| ("vc", codec)),
    ]
    .into_iter()
    .flatten()
    .filter(|(_, value)| !value.is_empty())
    .map(|(key, value)| format!("{}_{}", key, value))
    .collect();

    components.sort();
    components.join(",")
}

/// Escaped public id, prefixed with `v1/` when it sits in a folder and carries no version
pub fn delivery_source(public_id: &str) -> String {
    let escaped = utf8_percent_encode(public_id, PUBLIC_ID_SET).to_string();
    if needs_default_version(public_id) {
        format!("v1/{}", escaped)
    } else {
        escaped
    }
}

fn needs_default_version(public_id: &str) -> bool {
    let has_version = public_id
        .strip_prefix('v')
        .and_then(|rest| rest.chars().next())
        .map_or(false, |c| c.is_ascii_digit());
    let is_absolute = public_id.starts_with("http:/") || public_id.starts_with("https:/");

    public_id.contains('/') && !has_version && !is_absolute
}

#[async_trait]
impl MediaProvider for CloudinaryProvider {
    fn build_transformed_url(
        &self,
        public_id: &str,
        profile: &TransformationProfile,
    ) -> Result<String, ProviderError> {
        if public_id.trim().is_empty() {
            return Err(ProviderError::InvalidPublicId(
                "public_id must not be empty".to_string(),
            ));
        }

        let transformation = transformation_string(profile);
        let source = delivery_source(public_id);

        Ok(if transformation.is_empty() {
            format!("{}/{}", self.delivery_prefix(), source)
        } else {
            format!("{}/{}/{}", self.delivery_prefix(), transformation, source)
        })
    }

    async fn fetch_asset_metadata(&self, public_id: &str) -> Result<AssetMetadata, ProviderError> {
        let url = self.metadata_url(public_id);
        tracing::debug!("Looking up video resource: {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.api_key, Some(&self.credentials.api_secret))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Metadata request for {} failed: {}", public_id, e);
                ProviderError::Request(e)
            })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<AssetMetadata>()
                .await
                .map_err(|e| ProviderError::Decode(e.to_string()));
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        tracing::warn!("Metadata lookup for {} returned {}: {}", public_id, status, message);

        if status == StatusCode::NOT_FOUND {
            Err(ProviderError::NotFound(message))
        } else {
            Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
