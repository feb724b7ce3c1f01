//! Inline image embedding.
//!
//! Images are inlined as base64 `data:` URIs so the card renders without
//! the viewer fetching (or proxying) anything.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::warn;

use crate::fetch::Fetcher;

/// MIME type guessed from the URL suffix.
pub fn mime_for_url(url: &str) -> &'static str {
    if url.ends_with(".svg") {
        "image/svg+xml"
    } else {
        "image/png"
    }
}

pub fn data_uri(url: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for_url(url), STANDARD.encode(bytes))
}

/// Fetch `url` and return it as a `data:` URI, or an empty string if the URL
/// is empty or the fetch fails for any reason.
pub fn embed_image(fetcher: &Fetcher, url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    match fetcher.get_bytes(url) {
        Ok(bytes) => data_uri(url, &bytes),
        Err(e) => {
            warn!(url, error = %e, "image not embedded");
            println!("  [✗] Failed to fetch base64 image: {} → {}", url, e);
            String::new()
        }
    }
}
