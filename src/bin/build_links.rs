use anyhow::{Context, Result};

use video_link_service::{
    config::AppConfig,
    models::asset::AssetReference,
    services::{cloudinary::CloudinaryProvider, video::VideoService},
};

/// Prints the `/api/process_video` payload for one public id without starting the server.
fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let public_id = std::env::args()
        .nth(1)
        .filter(|id| !id.trim().is_empty())
        .context("usage: build_links <public_id>")?;

    let config = AppConfig::figment()
        .extract::<AppConfig>()
        .context("failed to load configuration")?;
    let credentials = config.provider.credentials()?;
    let provider = CloudinaryProvider::new(credentials, &config.provider)?;

    let asset = AssetReference::new(public_id, None, None);
    let response = VideoService::process(&provider, &asset)?;

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
