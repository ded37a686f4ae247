//! Image URL resolution for Sanity assets.
//!
//! Catalog documents reach us in three states: a fully dereferenced asset
//! URL, a raw asset reference that must be expanded against the CDN, or a
//! legacy `image@`-prefixed literal URL from the pre-asset-pipeline import.
//! Resolution tries them in that order and returns `None` for anything
//! malformed rather than erroring.

use crystal_harmony_core::ImageRef;

const CDN_BASE: &str = "https://cdn.sanity.io/images";
const LEGACY_PREFIX: &str = "image@";

/// Resolve a usable image URL for a catalog image, if one exists.
#[must_use]
pub fn resolve_image_url(project_id: &str, dataset: &str, image: &ImageRef) -> Option<String> {
    if let Some(url) = &image.url {
        return Some(strip_legacy_prefix(url));
    }

    image
        .asset_ref
        .as_deref()
        .and_then(|asset_ref| expand_asset_ref(project_id, dataset, asset_ref))
}

/// Expand an asset reference like `image-abc123-2000x3000-jpg` into a CDN URL.
fn expand_asset_ref(project_id: &str, dataset: &str, asset_ref: &str) -> Option<String> {
    let rest = asset_ref.strip_prefix("image-")?;

    // The asset ID itself never contains dashes, so the reference splits
    // into exactly id, dimensions, and format from the right.
    let mut parts = rest.rsplitn(3, '-');
    let format = parts.next()?;
    let dimensions = parts.next()?;
    let id = parts.next()?;

    if id.is_empty() || format.is_empty() || !dimensions.contains('x') {
        return None;
    }

    Some(format!(
        "{CDN_BASE}/{project_id}/{dataset}/{id}-{dimensions}.{format}"
    ))
}

/// Strip the legacy `image@` marker some imported documents carry.
fn strip_legacy_prefix(url: &str) -> String {
    url.strip_prefix(LEGACY_PREFIX).unwrap_or(url).to_string()
}
