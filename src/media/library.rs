use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use anyhow::Context;

use crate::{
    foundation::error::{MarqueeError, MarqueeResult},
    media::model::{AssetId, MediaMetadata, MediaText, PostId, SizeInfo},
    media::resolver::MediaStore,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Bounding box a registered size fits images into.
pub struct SizeBounds {
    /// Maximum width in pixels.
    pub max_width: u32,
    /// Maximum height in pixels.
    pub max_height: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Named size registrations, the library's counterpart of the CMS's
/// registered image sizes.
pub struct SizeRegistry {
    sizes: BTreeMap<String, SizeBounds>,
}

impl SizeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock registrations a fresh CMS install ships with.
    pub fn common_defaults() -> Self {
        let mut sizes = BTreeMap::new();
        sizes.insert(
            "thumbnail".to_string(),
            SizeBounds {
                max_width: 150,
                max_height: 150,
            },
        );
        sizes.insert(
            "medium".to_string(),
            SizeBounds {
                max_width: 300,
                max_height: 300,
            },
        );
        sizes.insert(
            "large".to_string(),
            SizeBounds {
                max_width: 1024,
                max_height: 1024,
            },
        );
        Self { sizes }
    }

    /// Register or replace a named size.
    ///
    /// The name `"full"` is reserved for the original file, and bounds must
    /// be non-zero.
    pub fn register(&mut self, name: impl Into<String>, bounds: SizeBounds) -> MarqueeResult<()> {
        let name = name.into();
        if name.is_empty() {
            return Err(MarqueeError::validation("size name must be non-empty"));
        }
        if name == "full" {
            return Err(MarqueeError::validation(
                "size name 'full' is reserved for the original file",
            ));
        }
        if bounds.max_width == 0 || bounds.max_height == 0 {
            return Err(MarqueeError::validation(format!(
                "size '{name}' bounds must be > 0"
            )));
        }
        self.sizes.insert(name, bounds);
        Ok(())
    }

    /// Load registrations from a JSON object of `name -> bounds`.
    pub fn from_json(text: &str) -> MarqueeResult<Self> {
        let raw: BTreeMap<String, SizeBounds> = serde_json::from_str(text)
            .map_err(|e| MarqueeError::serde(format!("parse size registry: {e}")))?;

        let mut registry = Self::default();
        for (name, bounds) in raw {
            registry.register(name, bounds)?;
        }
        Ok(registry)
    }

    /// Bounds for a registered size name.
    pub fn bounds(&self, name: &str) -> Option<SizeBounds> {
        self.sizes.get(name).copied()
    }

    /// Registered names and bounds in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SizeBounds)> {
        self.sizes.iter().map(|(name, bounds)| (name.as_str(), *bounds))
    }

    /// Number of registered sizes.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether no size is registered.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

#[derive(Clone, Debug)]
struct MediaEntry {
    rel_path: String,
    width: u32,
    height: u32,
    text: MediaText,
}

#[derive(Clone, Debug)]
/// Disk-layout-aware [`MediaStore`] serving a library of uploaded files.
///
/// Entries are registered up front ([`MediaLibrary::ingest`] reads intrinsic
/// dimensions from disk, [`MediaLibrary::insert`] takes them as given), so
/// every later lookup is pure and IO-free. Size variants are derived from the
/// registry by aspect-fitting into each bounding box; a variant is only
/// generated when the source is larger than the box, never by upscaling.
/// Variant files live next to the original under a `-{width}x{height}` name
/// suffix.
pub struct MediaLibrary {
    base_url: String,
    sizes: SizeRegistry,
    entries: HashMap<AssetId, MediaEntry>,
    thumbnails: HashMap<PostId, AssetId>,
}

impl MediaLibrary {
    /// Create an empty library serving files under `base_url`.
    pub fn new(base_url: impl Into<String>, sizes: SizeRegistry) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            sizes,
            entries: HashMap::new(),
            thumbnails: HashMap::new(),
        }
    }

    /// Base URL entries are served under.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The size registry this library derives variants from.
    pub fn sizes(&self) -> &SizeRegistry {
        &self.sizes
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[tracing::instrument(skip(self, root, text))]
    /// Register a file, reading its intrinsic dimensions from disk.
    ///
    /// `rel_path` is resolved against `root` for the read and against the
    /// base URL for serving.
    pub fn ingest(
        &mut self,
        id: AssetId,
        root: impl AsRef<Path>,
        rel_path: &str,
        text: MediaText,
    ) -> MarqueeResult<()> {
        if id.is_none() {
            return Err(MarqueeError::validation(
                "asset id 0 is reserved for 'no attachment'",
            ));
        }
        let rel_path = normalize_rel_path(rel_path)?;
        let path = root.as_ref().join(Path::new(&rel_path));
        let (width, height) = image::image_dimensions(&path)
            .with_context(|| format!("read image dimensions from '{}'", path.display()))?;

        self.entries.insert(
            id,
            MediaEntry {
                rel_path,
                width,
                height,
                text,
            },
        );
        Ok(())
    }

    /// Register an entry with known dimensions, without touching disk.
    pub fn insert(
        &mut self,
        id: AssetId,
        rel_path: &str,
        width: u32,
        height: u32,
        text: MediaText,
    ) -> MarqueeResult<()> {
        if id.is_none() {
            return Err(MarqueeError::validation(
                "asset id 0 is reserved for 'no attachment'",
            ));
        }
        if width == 0 || height == 0 {
            return Err(MarqueeError::validation(
                "image dimensions must be > 0",
            ));
        }
        let rel_path = normalize_rel_path(rel_path)?;

        self.entries.insert(
            id,
            MediaEntry {
                rel_path,
                width,
                height,
                text,
            },
        );
        Ok(())
    }

    /// Mark `id` as the featured image of `post`.
    ///
    /// The mapping is not checked against registered entries; resolution
    /// fails closed if the attachment is missing later.
    pub fn set_thumbnail(&mut self, post: PostId, id: AssetId) {
        self.thumbnails.insert(post, id);
    }

    fn full_url(&self, entry: &MediaEntry) -> String {
        format!("{}/{}", self.base_url, entry.rel_path)
    }

    fn variant_url(&self, entry: &MediaEntry, width: u32, height: u32) -> String {
        format!(
            "{}/{}",
            self.base_url,
            variant_rel_path(&entry.rel_path, width, height)
        )
    }

    fn variant_table(&self, entry: &MediaEntry) -> BTreeMap<String, SizeInfo> {
        let mut out = BTreeMap::new();
        for (name, bounds) in self.sizes.iter() {
            if let Some((width, height)) = fit_within(entry.width, entry.height, bounds) {
                out.insert(name.to_string(), SizeInfo { width, height });
            }
        }
        out
    }
}

impl MediaStore for MediaLibrary {
    fn metadata(&self, id: AssetId) -> MarqueeResult<Option<MediaMetadata>> {
        Ok(self.entries.get(&id).map(|entry| MediaMetadata {
            width: entry.width,
            height: entry.height,
            sizes: self.variant_table(entry),
        }))
    }

    fn url(&self, id: AssetId) -> MarqueeResult<Option<String>> {
        Ok(self.entries.get(&id).map(|entry| self.full_url(entry)))
    }

    fn size_url(&self, id: AssetId, size: &str) -> MarqueeResult<Option<String>> {
        let Some(entry) = self.entries.get(&id) else {
            return Ok(None);
        };
        if size == "full" {
            return Ok(Some(self.full_url(entry)));
        }

        let fitted = self
            .sizes
            .bounds(size)
            .and_then(|bounds| fit_within(entry.width, entry.height, bounds));
        Ok(Some(match fitted {
            Some((width, height)) => self.variant_url(entry, width, height),
            // No generated variant: the original serves this size.
            None => self.full_url(entry),
        }))
    }

    fn srcset(&self, id: AssetId, size: &str) -> MarqueeResult<Option<String>> {
        let Some(entry) = self.entries.get(&id) else {
            return Ok(None);
        };
        // Every variant keeps the original's aspect ratio, so the candidate
        // set does not depend on the requested size.
        let _ = size;

        let mut by_width = BTreeMap::new();
        for (_, bounds) in self.sizes.iter() {
            if let Some((width, height)) = fit_within(entry.width, entry.height, bounds) {
                by_width.insert(width, self.variant_url(entry, width, height));
            }
        }
        by_width.insert(entry.width, self.full_url(entry));

        if by_width.len() < 2 {
            return Ok(None);
        }
        Ok(Some(
            by_width
                .iter()
                .map(|(width, url)| format!("{url} {width}w"))
                .collect::<Vec<_>>()
                .join(", "),
        ))
    }

    fn text(&self, id: AssetId) -> MarqueeResult<MediaText> {
        Ok(self
            .entries
            .get(&id)
            .map(|entry| entry.text.clone())
            .unwrap_or_default())
    }

    fn thumbnail_id(&self, post: PostId) -> MarqueeResult<Option<AssetId>> {
        Ok(self.thumbnails.get(&post).copied())
    }
}

/// Normalize and validate library-relative media paths.
///
/// The normalized result uses `/` separators, removes `.` segments, and
/// rejects absolute paths or parent traversals (`..`).
pub fn normalize_rel_path(source: &str) -> MarqueeResult<String> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(MarqueeError::validation("media paths must be relative"));
    }
    if s.is_empty() {
        return Err(MarqueeError::validation("media path must be non-empty"));
    }

    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(MarqueeError::validation("media paths must not contain '..'"));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(MarqueeError::validation(
            "media path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

fn variant_rel_path(rel_path: &str, width: u32, height: u32) -> String {
    let (dir, file) = match rel_path.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, rel_path),
    };
    let renamed = match file.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}-{width}x{height}.{ext}"),
        None => format!("{file}-{width}x{height}"),
    };
    match dir {
        Some(dir) => format!("{dir}/{renamed}"),
        None => renamed,
    }
}

/// Dimensions after aspect-fitting `width x height` into `bounds`.
///
/// `None` when the source already fits: no variant is generated and the
/// original serves that size. Variants never upscale.
fn fit_within(width: u32, height: u32, bounds: SizeBounds) -> Option<(u32, u32)> {
    if width <= bounds.max_width && height <= bounds.max_height {
        return None;
    }
    let scale = (f64::from(bounds.max_width) / f64::from(width))
        .min(f64::from(bounds.max_height) / f64::from(height));
    let fitted_w = (f64::from(width) * scale).round().max(1.0) as u32;
    let fitted_h = (f64::from(height) * scale).round().max(1.0) as u32;
    Some((fitted_w, fitted_h))
}

#[cfg(test)]
#[path = "../../tests/unit/media/library.rs"]
mod tests;
