#![forbid(unsafe_code)]

//! Viewport-driven scaling presets.
//!
//! Three independent rules:
//!
//! - [`ScaleModel::factor`]: one uniform transform scale for the message
//!   containers, derived from how far the viewport is below the design size.
//! - [`mobile_root_font_rem`]: a root font size for narrow viewports.
//! - [`ResponsiveStyle`]: discrete button and decoration presets per
//!   [`Breakpoint`].

use serde::{Deserialize, Serialize};

use crate::{Breakpoint, Breakpoints, Responsive, Size};

/// Viewport width the mobile root font is computed against.
const MOBILE_REFERENCE_WIDTH_PX: f64 = 400.0;
/// Smallest root font size (rem) applied on narrow viewports.
const MOBILE_MIN_ROOT_REM: f64 = 0.8;

/// Uniform display scaling relative to a fixed design size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleModel {
    /// Width the page was designed at.
    pub base_width: f64,
    /// Height the page was designed at.
    pub base_height: f64,
    /// Multiplier applied after the axis minimum.
    pub safety: f64,
}

impl Default for ScaleModel {
    fn default() -> Self {
        Self {
            base_width: 1920.0,
            base_height: 1080.0,
            safety: 0.9,
        }
    }
}

impl ScaleModel {
    /// `min(min(w / base_w, 1), min(h / base_h, 1)) * safety`.
    ///
    /// Never upscales: a viewport larger than the design size yields
    /// `safety`. Degenerate inputs (zero base, negative viewport) yield `0`.
    #[must_use]
    pub fn factor(&self, viewport: Size) -> f64 {
        let axis = |extent: i32, base: f64| -> f64 {
            if base <= 0.0 || !base.is_finite() {
                return 0.0;
            }
            (f64::from(extent.max(0)) / base).min(1.0)
        };
        let scale_x = axis(viewport.width, self.base_width);
        let scale_y = axis(viewport.height, self.base_height);
        scale_x.min(scale_y) * self.safety
    }

    /// CSS `transform` value for a factor.
    #[must_use]
    pub fn transform_css(factor: f64) -> String {
        format!("scale({factor})")
    }
}

/// Root font size (rem) for viewports narrower than the `Md` breakpoint.
///
/// Returns `None` at `Md` and wider, where the stylesheet default applies.
#[must_use]
pub fn mobile_root_font_rem(width: i32, breakpoints: &Breakpoints) -> Option<f64> {
    if breakpoints.at_least(width, Breakpoint::Md) {
        return None;
    }
    let rem = f64::from(width.max(0)) / MOBILE_REFERENCE_WIDTH_PX;
    Some(rem.max(MOBILE_MIN_ROOT_REM))
}

/// Inline style preset for `.btn` elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonPreset {
    pub padding_y_px: u32,
    pub padding_x_px: u32,
    pub font_px: u32,
    pub min_width_px: u32,
}

impl ButtonPreset {
    #[must_use]
    pub const fn new(padding_y_px: u32, padding_x_px: u32, font_px: u32, min_width_px: u32) -> Self {
        Self {
            padding_y_px,
            padding_x_px,
            font_px,
            min_width_px,
        }
    }

    #[must_use]
    pub fn padding_css(&self) -> String {
        format!("{}px {}px", self.padding_y_px, self.padding_x_px)
    }

    #[must_use]
    pub fn font_size_css(&self) -> String {
        format!("{}px", self.font_px)
    }

    #[must_use]
    pub fn min_width_css(&self) -> String {
        format!("{}px", self.min_width_px)
    }
}

/// Breakpoint-keyed presets applied on page load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveStyle {
    pub button: Responsive<ButtonPreset>,
    /// Font size (px) of the floating decorations.
    pub decoration_font_px: Responsive<u32>,
}

impl Default for ResponsiveStyle {
    fn default() -> Self {
        Self {
            button: Responsive::new(ButtonPreset::new(12, 20, 14, 160))
                .at(Breakpoint::Sm, ButtonPreset::new(14, 25, 16, 180))
                .at(Breakpoint::Md, ButtonPreset::new(15, 30, 18, 200)),
            decoration_font_px: Responsive::new(16)
                .at(Breakpoint::Sm, 18)
                .at(Breakpoint::Md, 20)
                .at(Breakpoint::Lg, 22)
                .at(Breakpoint::Xl, 24),
        }
    }
}

impl ResponsiveStyle {
    #[must_use]
    pub fn button_for(&self, bp: Breakpoint) -> ButtonPreset {
        *self.button.resolve(bp)
    }

    #[must_use]
    pub fn decoration_font_for(&self, bp: Breakpoint) -> u32 {
        *self.decoration_font_px.resolve(bp)
    }
}
