use std::collections::BTreeMap;

use crate::{
    foundation::error::MarqueeResult,
    media::model::{AssetId, MediaAsset, MediaMetadata, MediaText, PostId, SizeVariant},
};

/// Read access to a media backend.
///
/// Lookups return `Ok(None)` for ids the backend does not know; errors are
/// reserved for the backend itself failing. [`MediaStore::metadata`] is the
/// authoritative presence check: an id without metadata resolves to nothing
/// even when other lookups could produce partial values.
pub trait MediaStore {
    /// Stored metadata for an attachment.
    fn metadata(&self, id: AssetId) -> MarqueeResult<Option<MediaMetadata>>;

    /// URL of the original file.
    fn url(&self, id: AssetId) -> MarqueeResult<Option<String>>;

    /// URL of a named size variant.
    ///
    /// `"full"` is the original file. Implementations fall back to the
    /// original URL for a size the attachment has no variant of, the way the
    /// backing CMS does.
    fn size_url(&self, id: AssetId, size: &str) -> MarqueeResult<Option<String>>;

    /// Srcset candidate list for a named size, or `None` when fewer than two
    /// candidates exist.
    fn srcset(&self, id: AssetId, size: &str) -> MarqueeResult<Option<String>>;

    /// Editorial text for an attachment. Unknown ids yield empty fields.
    fn text(&self, id: AssetId) -> MarqueeResult<MediaText>;

    /// Featured-image attachment for a content entry.
    fn thumbnail_id(&self, post: PostId) -> MarqueeResult<Option<AssetId>>;
}

#[tracing::instrument(skip(store))]
/// Assemble the full ACF-style record for an attachment.
///
/// The "no attachment" sentinel and ids without stored metadata resolve to
/// `Ok(None)`; no partial record is ever produced. The result's size table
/// mirrors the metadata's size table name for name.
pub fn resolve_media(
    store: &impl MediaStore,
    id: AssetId,
) -> MarqueeResult<Option<MediaAsset>> {
    if id.is_none() {
        return Ok(None);
    }
    let Some(metadata) = store.metadata(id)? else {
        return Ok(None);
    };

    let url = store.url(id)?.unwrap_or_default();
    let text = store.text(id)?;

    let mut sizes = BTreeMap::new();
    for (name, info) in &metadata.sizes {
        let variant_url = store.size_url(id, name)?.unwrap_or_default();
        sizes.insert(
            name.clone(),
            SizeVariant {
                url: variant_url,
                width: info.width,
                height: info.height,
            },
        );
    }

    Ok(Some(MediaAsset {
        id,
        url,
        alt: text.alt,
        title: text.title,
        caption: text.caption,
        description: text.description,
        width: metadata.width,
        height: metadata.height,
        sizes,
    }))
}

#[tracing::instrument(skip(store))]
/// Resolve the featured image of a content entry.
///
/// Chains the post's thumbnail id into [`resolve_media`]; a post without a
/// thumbnail resolves to `Ok(None)`.
pub fn resolve_featured_media(
    store: &impl MediaStore,
    post: PostId,
) -> MarqueeResult<Option<MediaAsset>> {
    match store.thumbnail_id(post)? {
        Some(id) => resolve_media(store, id),
        None => Ok(None),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/media/resolver.rs"]
mod tests;
