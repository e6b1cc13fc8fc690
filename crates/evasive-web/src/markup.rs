#![forbid(unsafe_code)]

//! Selectors the page markup provides and the inline styles written to it.

use evasive_layout::{ButtonPreset, HeartPlacement, Point, ScaleModel};

/// `id` of the evasive ("No") control.
pub const EVADER_ID: &str = "noBtn";
/// The affirmative ("Yes") control the evader must avoid.
pub const PROTECTED_SELECTOR: &str = ".yes-btn";
/// Positioning context for the evader.
pub const CONTAINER_SELECTOR: &str = ".buttons-container";
/// Elements that receive the uniform display scale.
pub const SCALED_SELECTOR: &str = ".container, .message-box";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const HEART_SELECTOR: &str = ".heart";

/// One inline style property write.
pub type StyleWrite = (&'static str, String);

#[must_use]
pub fn px(value: impl std::fmt::Display) -> String {
    format!("{value}px")
}

#[must_use]
pub fn rem(value: f64) -> String {
    format!("{value}rem")
}

#[must_use]
pub fn seconds(value: f64) -> String {
    format!("{value}s")
}

#[must_use]
pub fn evader_style(position: Point) -> [StyleWrite; 3] {
    [
        ("position", "absolute".to_string()),
        ("left", px(position.x)),
        ("top", px(position.y)),
    ]
}

#[must_use]
pub fn container_scale_style(factor: f64) -> [StyleWrite; 2] {
    [
        ("transform", ScaleModel::transform_css(factor)),
        ("transform-origin", "center center".to_string()),
    ]
}

#[must_use]
pub fn button_style(preset: &ButtonPreset) -> [StyleWrite; 3] {
    [
        ("padding", preset.padding_css()),
        ("font-size", preset.font_size_css()),
        ("min-width", preset.min_width_css()),
    ]
}

#[must_use]
pub fn heart_style(heart: &HeartPlacement) -> [StyleWrite; 5] {
    [
        ("left", px(heart.left_px)),
        ("top", px(heart.top_px)),
        ("font-size", px(heart.font_px)),
        ("animation-delay", seconds(heart.delay_s)),
        ("animation-duration", seconds(heart.duration_s)),
    ]
}

/// Whether `document.readyState` says the markup is still being parsed.
#[must_use]
pub fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Coerce a JS number argument into a 1-based page number.
///
/// Non-finite, fractional, or non-positive values map to `None`, which the
/// caller treats as out of range.
#[must_use]
pub fn page_number_from_js(value: f64) -> Option<u32> {
    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

/// Pixel extent reported by the DOM as a float, floored to whole pixels.
#[must_use]
pub fn whole_px(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    value.floor().clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
