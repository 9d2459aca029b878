use std::collections::BTreeMap;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Identifier of a media attachment as assigned by the backing CMS.
pub struct AssetId(pub u64);

impl AssetId {
    /// The CMS "no attachment" sentinel.
    pub const NONE: Self = Self(0);

    /// Whether this is the "no attachment" sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Identifier of a content entry that may carry a featured image.
pub struct PostId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Pixel dimensions of one generated size variant.
pub struct SizeInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Stored metadata for an attachment: intrinsic dimensions plus the table of
/// generated size variants.
///
/// Absence of this record is the sole "no data" signal a store emits for an
/// id; there is no partially-present state.
pub struct MediaMetadata {
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    /// Generated size variants keyed by registered size name.
    pub sizes: BTreeMap<String, SizeInfo>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Editorial text attached to a media item.
///
/// The backing CMS reports missing values as empty strings, so every field
/// is a plain `String`.
pub struct MediaText {
    /// Alternative text.
    pub alt: String,
    /// Title.
    pub title: String,
    /// Caption.
    pub caption: String,
    /// Long-form description.
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One entry in a resolved asset's size table.
pub struct SizeVariant {
    /// URL of the variant file.
    pub url: String,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// A fully resolved media record, shaped like an ACF-style image field.
///
/// Built fresh on every resolution; nothing is cached. Serializes with the
/// ACF field names, `ID` included.
pub struct MediaAsset {
    /// Attachment identifier.
    #[serde(rename = "ID")]
    pub id: AssetId,
    /// URL of the original file.
    pub url: String,
    /// Alternative text.
    pub alt: String,
    /// Title.
    pub title: String,
    /// Caption.
    pub caption: String,
    /// Long-form description.
    pub description: String,
    /// Intrinsic width in pixels.
    pub width: u32,
    /// Intrinsic height in pixels.
    pub height: u32,
    /// Per-size URLs and dimensions, mirroring the metadata's size table.
    pub sizes: BTreeMap<String, SizeVariant>,
}

#[cfg(test)]
#[path = "../../tests/unit/media/model.rs"]
mod tests;
