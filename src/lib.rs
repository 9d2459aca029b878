//! Marquee is a presentation and media utility toolkit for CMS front-ends.
//!
//! It covers the glue a themed front-end keeps rewriting: taxonomy ancestry,
//! ACF-style media records, responsive image attributes, a CSS `matrix()`
//! codec, easing/interpolation math, and slide-open/slide-close transitions
//! with deferred cleanup.
//!
//! # Pipeline overview
//!
//! 1. **Register**: media files enter a [`MediaLibrary`] up front
//!    ([`MediaLibrary::ingest`] reads dimensions from disk)
//! 2. **Resolve**: [`resolve_media`] / [`highest_ancestor`] turn ids into full records
//! 3. **Render**: [`responsive_image_attrs`] / [`InlineStyles::to_css`] produce attribute strings
//! 4. **Animate**: a [`TransitionController`] drives slide transitions on the embedder's clock
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: resolvers are pure, and transitions settle
//!   on a caller-supplied clock.
//! - **No IO at lookup time**: external IO is front-loaded in [`MediaLibrary`].
//! - **Fail closed**: missing terms and attachments resolve to `None`, never to partial records.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod animation;
mod foundation;
mod media;
mod style;
mod taxonomy;
mod transform;

pub use animation::ease::Ease;
pub use animation::slide::{SlideHandle, TransitionController};
pub use foundation::error::{MarqueeError, MarqueeResult};
pub use foundation::math::{percent_between, random_between, value_between};
pub use media::library::{MediaLibrary, SizeBounds, SizeRegistry, normalize_rel_path};
pub use media::model::{
    AssetId, MediaAsset, MediaMetadata, MediaText, PostId, SizeInfo, SizeVariant,
};
pub use media::resolver::{MediaStore, resolve_featured_media, resolve_media};
pub use media::responsive::{ResponsiveImageOpts, responsive_image_attrs};
pub use style::inline::{BoxSizing, Display, HostKey, InlineStyles, Millis, Overflow, StyleHost};
pub use taxonomy::ancestry::{
    InMemoryTaxonomy, MAX_ANCESTOR_DEPTH, TaxonomyStore, highest_ancestor,
};
pub use taxonomy::term::{TaxonomyTerm, TermId, TermRef, slugify};
pub use transform::matrix::{TransformMatrix, decode_matrix, encode_matrix};
