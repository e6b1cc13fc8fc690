#![forbid(unsafe_code)]

//! Site configuration.
//!
//! Every field has a default matching the shipped page, so an empty JSON
//! object is a complete configuration. [`SiteConfig::parse_and_validate`] is
//! the only way untrusted input becomes a config.

use evasive_layout::{Breakpoints, PlacementPolicy, ResponsiveStyle, ScaleModel};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_MESSAGES: [&str; 8] = [
    "Are you sure? 🥺",
    "Pretty please? 💕",
    "I think you might want to say yes... 🌸",
    "Just a little game? 🎀",
    "You're breaking my heart 💔",
    "I made this just for you! ✨",
    "You mean so much to me 💫",
    "I'd do anything to see you smile 😊",
];

const DEFAULT_PAGES: [&str; 5] = [
    "index.html",
    "page2.html",
    "page3.html",
    "page4.html",
    "page5.html",
];

const DEFAULT_NEXT_PAGE: &str = "page2.html";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("messages must not be empty")]
    EmptyMessages,
    #[error("pages must not be empty")]
    EmptyPages,
    #[error("next_page '{0}' is not one of the configured pages")]
    UnknownNextPage(String),
    #[error("relocation_threshold must be at least 1")]
    ZeroThreshold,
    #[error("min_clearance_px must not be negative (got {0})")]
    NegativeClearance(i32),
    #[error("clearance_fraction must be within [0, 1] (got {0})")]
    ClearanceFraction(f64),
    #[error("breakpoints must be strictly increasing (got {sm}/{md}/{lg}/{xl})")]
    Breakpoints { sm: u32, md: u32, lg: u32, xl: u32 },
    #[error("scale.{field} must be finite and positive (got {value})")]
    Scale { field: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything a [`crate::Site`] needs besides its host, randomness and clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Labels cycled through by the evasive control.
    pub messages: Vec<String>,
    /// Cyclic page sequence, 1-based for navigation.
    pub pages: Vec<String>,
    /// Page the affirmative control leads to until the current page is known.
    pub next_page: String,
    pub placement: PlacementPolicy,
    pub scale: ScaleModel,
    pub breakpoints: Breakpoints,
    pub style: ResponsiveStyle,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            messages: DEFAULT_MESSAGES.iter().map(|m| (*m).to_string()).collect(),
            pages: DEFAULT_PAGES.iter().map(|p| (*p).to_string()).collect(),
            next_page: DEFAULT_NEXT_PAGE.to_string(),
            placement: PlacementPolicy::default(),
            scale: ScaleModel::default(),
            breakpoints: Breakpoints::default(),
            style: ResponsiveStyle::default(),
        }
    }
}

impl SiteConfig {
    pub fn parse_and_validate(raw_json: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(raw_json)?;
        parsed.validate()?;
        Ok(parsed)
    }

    pub fn validate(&self) -> Result<()> {
        if self.messages.is_empty() {
            return Err(ConfigError::EmptyMessages);
        }
        if self.pages.is_empty() {
            return Err(ConfigError::EmptyPages);
        }
        if !self.pages.iter().any(|p| *p == self.next_page) {
            return Err(ConfigError::UnknownNextPage(self.next_page.clone()));
        }

        let placement = &self.placement;
        if placement.relocation_threshold == 0 {
            return Err(ConfigError::ZeroThreshold);
        }
        if placement.min_clearance_px < 0 {
            return Err(ConfigError::NegativeClearance(placement.min_clearance_px));
        }
        if !(0.0..=1.0).contains(&placement.clearance_fraction) {
            return Err(ConfigError::ClearanceFraction(placement.clearance_fraction));
        }

        let bp = self.breakpoints;
        if !bp.is_strictly_increasing() {
            return Err(ConfigError::Breakpoints {
                sm: bp.sm,
                md: bp.md,
                lg: bp.lg,
                xl: bp.xl,
            });
        }

        for (field, value) in [
            ("base_width", self.scale.base_width),
            ("base_height", self.scale.base_height),
            ("safety", self.scale.safety),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Scale { field, value });
            }
        }
        Ok(())
    }
}
