use crate::{
    foundation::error::{MarqueeError, MarqueeResult},
    media::model::AssetId,
    media::resolver::MediaStore,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Options for [`responsive_image_attrs`].
pub struct ResponsiveImageOpts {
    /// Size name used for the `src` fallback and srcset lookup.
    pub size: String,
    /// Viewport width at which the image stops filling the viewport.
    ///
    /// Inserted verbatim into both the media query and the fallback slot of
    /// the `sizes` attribute, so a value without a unit produces a unitless
    /// fallback width.
    pub max_width: String,
}

impl Default for ResponsiveImageOpts {
    fn default() -> Self {
        Self {
            size: "medium".to_string(),
            max_width: "1600px".to_string(),
        }
    }
}

#[tracing::instrument(skip(store, opts))]
/// Render the `src`/`srcset`/`sizes` attribute string for an attachment.
///
/// The "no attachment" sentinel and ids without stored metadata yield
/// `Ok(None)` so templates can fall back to static markup. A size name that
/// is neither `"full"` nor present in the attachment's size table is a
/// [`MarqueeError::Validation`]. A store with no srcset candidates renders
/// an empty `srcset` attribute rather than dropping it.
pub fn responsive_image_attrs(
    store: &impl MediaStore,
    id: AssetId,
    opts: &ResponsiveImageOpts,
) -> MarqueeResult<Option<String>> {
    if id.is_none() {
        return Ok(None);
    }
    let Some(metadata) = store.metadata(id)? else {
        return Ok(None);
    };
    if opts.size != "full" && !metadata.sizes.contains_key(&opts.size) {
        return Err(MarqueeError::validation(format!(
            "unrecognized image size '{}'",
            opts.size
        )));
    }

    let src = store.size_url(id, &opts.size)?.unwrap_or_default();
    let srcset = store.srcset(id, &opts.size)?.unwrap_or_default();
    let max_width = &opts.max_width;

    Ok(Some(format!(
        r#"src="{src}" srcset="{srcset}" sizes="(max-width: {max_width}) 100vw, {max_width}""#
    )))
}

#[cfg(test)]
#[path = "../../tests/unit/media/responsive.rs"]
mod tests;
