use askama::Template;

use crate::models::asset::DerivedAssetSet;

/// Full-viewport background video: fixed CSS followed by the `<video>` fragment.
/// URLs come from the provider's URL builder and are inserted unescaped.
#[derive(Template)]
#[template(path = "embed_snippet.html", escape = "none")]
struct EmbedSnippetTemplate<'a> {
    mp4_url: &'a str,
    webm_url: &'a str,
    poster_url: &'a str,
}

pub fn generate_embed_code(assets: &DerivedAssetSet) -> Result<String, askama::Error> {
    EmbedSnippetTemplate {
        mp4_url: &assets.optimized_mp4_url,
        webm_url: &assets.optimized_webm_url,
        poster_url: &assets.poster_image_url,
    }
    .render()
}
