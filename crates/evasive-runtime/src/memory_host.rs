#![forbid(unsafe_code)]

//! In-memory [`PageHost`] for tests and headless harnesses.
//!
//! Geometry is set up front; every write is recorded so a test can assert on
//! the exact effects a sequence of events produced.

use evasive_layout::{ButtonPreset, EvasionGeometry, HeartPlacement, Point, Size};

use crate::host::PageHost;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryHost {
    pub viewport: Size,
    /// `None` models a page without the evasive control markup.
    pub geometry: Option<EvasionGeometry>,
    pub location_path: Option<String>,

    pub evader_position: Option<Point>,
    pub evader_label: Option<String>,
    pub container_scale: Option<f64>,
    pub root_font_rem: Option<f64>,
    pub button_preset: Option<ButtonPreset>,
    pub hearts: Vec<Option<HeartPlacement>>,
    pub redirects: Vec<String>,
}

impl MemoryHost {
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: EvasionGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Add `count` unplaced `.heart` elements.
    #[must_use]
    pub fn with_hearts(mut self, count: usize) -> Self {
        self.hearts = vec![None; count];
        self
    }

    #[must_use]
    pub fn at_path(mut self, path: impl Into<String>) -> Self {
        self.location_path = Some(path.into());
        self
    }

    /// Most recent redirect target.
    #[must_use]
    pub fn last_redirect(&self) -> Option<&str> {
        self.redirects.last().map(String::as_str)
    }
}

impl PageHost for MemoryHost {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn evasion_geometry(&self) -> Option<EvasionGeometry> {
        self.geometry
    }

    fn move_evader(&mut self, position: Point) {
        if self.geometry.is_some() {
            self.evader_position = Some(position);
        }
    }

    fn set_evader_label(&mut self, label: &str) {
        if self.geometry.is_some() {
            self.evader_label = Some(label.to_string());
        }
    }

    fn scale_containers(&mut self, factor: f64) {
        self.container_scale = Some(factor);
    }

    fn set_root_font_rem(&mut self, rem: f64) {
        self.root_font_rem = Some(rem);
    }

    fn style_buttons(&mut self, preset: &ButtonPreset) {
        self.button_preset = Some(*preset);
    }

    fn heart_count(&self) -> usize {
        self.hearts.len()
    }

    fn place_heart(&mut self, index: usize, placement: &HeartPlacement) {
        if let Some(slot) = self.hearts.get_mut(index) {
            *slot = Some(*placement);
        }
    }

    fn location_path(&self) -> Option<String> {
        self.location_path.clone()
    }

    fn redirect(&mut self, url: &str) {
        self.redirects.push(url.to_string());
    }
}
