use kurbo::Affine;

use crate::foundation::error::{MarqueeError, MarqueeResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// The six coefficients of a CSS `matrix(a, b, c, d, e, f)` transform.
///
/// Field order matches the CSS serialization: `a` scales x, `b` skews y,
/// `c` skews x, `d` scales y, `e` and `f` translate.
pub struct TransformMatrix {
    /// Horizontal scale (`a`).
    pub scale_x: f64,
    /// Vertical skew (`b`).
    pub skew_y: f64,
    /// Horizontal skew (`c`).
    pub skew_x: f64,
    /// Vertical scale (`d`).
    pub scale_y: f64,
    /// Horizontal translation (`e`).
    pub translate_x: f64,
    /// Vertical translation (`f`).
    pub translate_y: f64,
}

impl TransformMatrix {
    /// The identity transform, `matrix(1, 0, 0, 1, 0, 0)`.
    pub const IDENTITY: Self = Self {
        scale_x: 1.0,
        skew_y: 0.0,
        skew_x: 0.0,
        scale_y: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Convert into a [`kurbo::Affine`] with the same coefficients.
    pub fn to_affine(self) -> Affine {
        Affine::new([
            self.scale_x,
            self.skew_y,
            self.skew_x,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ])
    }

    /// Build from a [`kurbo::Affine`], reading its coefficients positionally.
    pub fn from_affine(affine: Affine) -> Self {
        let [a, b, c, d, e, f] = affine.as_coeffs();
        Self {
            scale_x: a,
            skew_y: b,
            skew_x: c,
            scale_y: d,
            translate_x: e,
            translate_y: f,
        }
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Parse a CSS `matrix(a, b, c, d, e, f)` string into a [`TransformMatrix`].
///
/// Internal whitespace is ignored. A missing `matrix(...)` wrapper, a
/// component count other than six, or a non-numeric component is a
/// [`MarqueeError::Parse`]; a partially filled record is never produced.
pub fn decode_matrix(text: &str) -> MarqueeResult<TransformMatrix> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix("matrix(")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            MarqueeError::parse(format!(
                "transform must have the form 'matrix(a, b, c, d, e, f)', got '{trimmed}'"
            ))
        })?;

    let parts: Vec<&str> = inner.split(',').collect();
    if parts.len() != 6 {
        return Err(MarqueeError::parse(format!(
            "matrix expects 6 components, got {}",
            parts.len()
        )));
    }

    let mut coeffs = [0.0f64; 6];
    for (slot, part) in coeffs.iter_mut().zip(&parts) {
        let component = part.trim();
        *slot = component.parse::<f64>().map_err(|_| {
            MarqueeError::parse(format!("invalid matrix component '{component}'"))
        })?;
    }

    let [a, b, c, d, e, f] = coeffs;
    Ok(TransformMatrix {
        scale_x: a,
        skew_y: b,
        skew_x: c,
        scale_y: d,
        translate_x: e,
        translate_y: f,
    })
}

/// Serialize a [`TransformMatrix`] back into its CSS `matrix(...)` form.
///
/// Exact inverse of [`decode_matrix`] for canonically formatted numbers.
pub fn encode_matrix(m: &TransformMatrix) -> String {
    format!(
        "matrix({}, {}, {}, {}, {}, {})",
        m.scale_x, m.skew_y, m.skew_x, m.scale_y, m.translate_x, m.translate_y
    )
}

#[cfg(test)]
#[path = "../../tests/unit/transform/matrix.rs"]
mod tests;
