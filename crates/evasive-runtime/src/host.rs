#![forbid(unsafe_code)]

//! The DOM capability a [`crate::Site`] drives.
//!
//! Reads return fresh values on every call; nothing is cached on the site
//! side. Writes on elements that do not exist are silently ignored by the
//! implementation.

use evasive_layout::{ButtonPreset, EvasionGeometry, HeartPlacement, Point, Size};

pub trait PageHost {
    /// Inner size of the window.
    fn viewport(&self) -> Size;

    /// Container, affirmative control and evasive control geometry, or
    /// `None` when any of the three elements is missing.
    fn evasion_geometry(&self) -> Option<EvasionGeometry>;

    /// Absolutely position the evasive control within its container.
    fn move_evader(&mut self, position: Point);

    fn set_evader_label(&mut self, label: &str);

    /// Apply `scale(factor)` to every message container.
    fn scale_containers(&mut self, factor: f64);

    fn set_root_font_rem(&mut self, rem: f64);

    /// Apply padding, font size and minimum width to every button.
    fn style_buttons(&mut self, preset: &ButtonPreset);

    fn heart_count(&self) -> usize;

    fn place_heart(&mut self, index: usize, placement: &HeartPlacement);

    /// Pathname of the current location.
    fn location_path(&self) -> Option<String>;

    /// Navigate away to `url`.
    fn redirect(&mut self, url: &str);
}
