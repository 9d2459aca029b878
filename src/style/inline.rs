#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
/// A duration or instant on the caller-driven millisecond clock.
pub struct Millis(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// CSS `display` values the toolkit needs to distinguish.
pub enum Display {
    /// `display: block`.
    #[default]
    Block,
    /// `display: inline`.
    Inline,
    /// `display: inline-block`.
    InlineBlock,
    /// `display: flex`.
    Flex,
    /// `display: grid`.
    Grid,
    /// `display: none` (element not rendered).
    None,
}

impl Display {
    /// The CSS keyword spelling.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::InlineBlock => "inline-block",
            Self::Flex => "flex",
            Self::Grid => "grid",
            Self::None => "none",
        }
    }

    /// Whether this value renders the element at all.
    pub fn is_visible(self) -> bool {
        self != Self::None
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_css())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// CSS `overflow` values.
pub enum Overflow {
    /// `overflow: visible`.
    #[default]
    Visible,
    /// `overflow: hidden`.
    Hidden,
}

impl Overflow {
    /// The CSS keyword spelling.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Hidden => "hidden",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// CSS `box-sizing` values.
pub enum BoxSizing {
    /// `box-sizing: content-box`.
    #[default]
    ContentBox,
    /// `box-sizing: border-box`.
    BorderBox,
}

impl BoxSizing {
    /// The CSS keyword spelling.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::ContentBox => "content-box",
            Self::BorderBox => "border-box",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// The inline style overrides a slide transition touches.
///
/// `None` means "no inline override"; the stylesheet value applies. Lengths
/// are px.
pub struct InlineStyles {
    /// `display` override.
    pub display: Option<Display>,
    /// `height` override in px.
    pub height: Option<f64>,
    /// `padding-top` override in px.
    pub padding_top: Option<f64>,
    /// `padding-bottom` override in px.
    pub padding_bottom: Option<f64>,
    /// `margin-top` override in px.
    pub margin_top: Option<f64>,
    /// `margin-bottom` override in px.
    pub margin_bottom: Option<f64>,
    /// `overflow` override.
    pub overflow: Option<Overflow>,
    /// `box-sizing` override.
    pub box_sizing: Option<BoxSizing>,
    /// `transition-property` override, e.g. `"height, margin, padding"`.
    pub transition_property: Option<String>,
    /// `transition-duration` override.
    pub transition_duration: Option<Millis>,
}

impl InlineStyles {
    /// Whether no override is set at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render the overrides as inline CSS declarations in a fixed order.
    pub fn to_css(&self) -> String {
        let mut decls = Vec::new();
        if let Some(display) = self.display {
            decls.push(format!("display: {};", display.as_css()));
        }
        if let Some(height) = self.height {
            decls.push(format!("height: {height}px;"));
        }
        if let Some(padding_top) = self.padding_top {
            decls.push(format!("padding-top: {padding_top}px;"));
        }
        if let Some(padding_bottom) = self.padding_bottom {
            decls.push(format!("padding-bottom: {padding_bottom}px;"));
        }
        if let Some(margin_top) = self.margin_top {
            decls.push(format!("margin-top: {margin_top}px;"));
        }
        if let Some(margin_bottom) = self.margin_bottom {
            decls.push(format!("margin-bottom: {margin_bottom}px;"));
        }
        if let Some(overflow) = self.overflow {
            decls.push(format!("overflow: {};", overflow.as_css()));
        }
        if let Some(box_sizing) = self.box_sizing {
            decls.push(format!("box-sizing: {};", box_sizing.as_css()));
        }
        if let Some(property) = &self.transition_property {
            decls.push(format!("transition-property: {property};"));
        }
        if let Some(duration) = self.transition_duration {
            decls.push(format!("transition-duration: {}ms;", duration.0));
        }
        decls.join(" ")
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Stable identity of a styled element, used to key in-flight transitions.
pub struct HostKey(pub u64);

/// The element surface a slide transition drives.
///
/// Implementations adapt whatever owns the real element: a DOM binding, a
/// server-side renderer, or a test double.
pub trait StyleHost {
    /// Stable identity for this element.
    fn key(&self) -> HostKey;

    /// Current inline overrides.
    fn inline(&self) -> &InlineStyles;

    /// Mutable inline overrides.
    fn inline_mut(&mut self) -> &mut InlineStyles;

    /// The `display` the stylesheet cascade yields when no inline override
    /// is set.
    fn computed_display(&self) -> Display;

    /// Current border-box height in px.
    ///
    /// Reading it forces pending style changes to take effect first, the
    /// way a layout read does in a browser.
    fn offset_height(&mut self) -> f64;
}

#[cfg(test)]
#[path = "../../tests/unit/style/inline.rs"]
mod tests;
