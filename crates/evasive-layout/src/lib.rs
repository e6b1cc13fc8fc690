#![forbid(unsafe_code)]

//! Layout primitives and solvers for the evasive control.
//!
//! - [`zones`]: the four safe zones around the protected rectangle.
//! - [`placement`]: [`relocate`], the pure placement algorithm.
//! - [`evader`]: [`EvasiveControl`], which owns the message and click counters.
//! - [`responsive`] / [`scale`]: breakpoint-keyed presets and the uniform
//!   display scale factor.
//! - [`hearts`]: randomized placement for the floating decorations.

pub mod evader;
pub mod hearts;
pub mod placement;
pub mod responsive;
pub mod scale;
pub mod zones;

pub use evader::{EmptyMessageList, Evasion, EvasionGeometry, EvasiveControl, MessageCycle};
pub use evasive_core::geometry::{Point, Rect, Size};
pub use hearts::{HeartPlacement, scatter_hearts};
pub use placement::{PlacementPolicy, Relocation, relocate, relocate_detailed};
pub use responsive::Responsive;
pub use scale::{ButtonPreset, ResponsiveStyle, ScaleModel, mobile_root_font_rem};
pub use zones::{SafeZone, ZoneSide, safe_zones};

use serde::{Deserialize, Serialize};

/// Responsive breakpoint tiers.
///
/// Each breakpoint represents a viewport width range determined by
/// [`Breakpoints`].
///
/// | Breakpoint | Default Min Width | Typical Device   |
/// |-----------|-------------------|------------------|
/// | `Xs`      | < 480 px          | Phone            |
/// | `Sm`      | 480–767 px        | Small tablet     |
/// | `Md`      | 768–1023 px       | Tablet           |
/// | `Lg`      | 1024–1439 px      | Small desktop    |
/// | `Xl`      | 1440+ px          | Large desktop    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Breakpoint {
    /// Extra small: phones.
    Xs,
    /// Small: small tablets.
    Sm,
    /// Medium: tablets.
    Md,
    /// Large: small desktops.
    Lg,
    /// Extra large: large desktops.
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Ordinal index (0–4).
    #[inline]
    const fn index(self) -> u8 {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 1,
            Breakpoint::Md => 2,
            Breakpoint::Lg => 3,
            Breakpoint::Xl => 4,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Breakpoint thresholds for responsive presets.
///
/// Each field is the minimum viewport width (in CSS pixels) for that
/// breakpoint. Xs implicitly starts at width 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Minimum width for Sm.
    pub sm: u32,
    /// Minimum width for Md.
    pub md: u32,
    /// Minimum width for Lg.
    pub lg: u32,
    /// Minimum width for Xl.
    pub xl: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Breakpoints {
    /// Default breakpoints: 480 / 768 / 1024 / 1440 pixels.
    pub const DEFAULT: Self = Self {
        sm: 480,
        md: 768,
        lg: 1024,
        xl: 1440,
    };

    /// Create breakpoints with all four explicit thresholds.
    ///
    /// Values are sanitized to be monotonically non-decreasing.
    pub const fn new(sm: u32, md: u32, lg: u32, xl: u32) -> Self {
        let md = if md < sm { sm } else { md };
        let lg = if lg < md { md } else { lg };
        let xl = if xl < lg { lg } else { xl };
        Self { sm, md, lg, xl }
    }

    /// Whether every threshold is strictly greater than the one below it.
    #[must_use]
    pub const fn is_strictly_increasing(self) -> bool {
        self.sm > 0 && self.md > self.sm && self.lg > self.md && self.xl > self.lg
    }

    /// Classify a width into a breakpoint bucket.
    ///
    /// Negative widths (a detached layout) classify as `Xs`.
    #[inline]
    pub const fn classify_width(self, width: i32) -> Breakpoint {
        if width < 0 {
            return Breakpoint::Xs;
        }
        let width = width as u32;
        if width >= self.xl {
            Breakpoint::Xl
        } else if width >= self.lg {
            Breakpoint::Lg
        } else if width >= self.md {
            Breakpoint::Md
        } else if width >= self.sm {
            Breakpoint::Sm
        } else {
            Breakpoint::Xs
        }
    }

    /// Classify a Size (uses width).
    #[inline]
    pub const fn classify_size(self, size: Size) -> Breakpoint {
        self.classify_width(size.width)
    }

    /// Check if width is at least a given breakpoint.
    #[inline]
    pub const fn at_least(self, width: i32, min: Breakpoint) -> bool {
        self.classify_width(width).index() >= min.index()
    }

    /// Get the minimum width threshold for a given breakpoint.
    #[must_use]
    pub const fn threshold(self, bp: Breakpoint) -> u32 {
        match bp {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_classify_defaults() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.classify_width(320), Breakpoint::Xs);
        assert_eq!(bp.classify_width(479), Breakpoint::Xs);
        assert_eq!(bp.classify_width(480), Breakpoint::Sm);
        assert_eq!(bp.classify_width(767), Breakpoint::Sm);
        assert_eq!(bp.classify_width(768), Breakpoint::Md);
        assert_eq!(bp.classify_width(1023), Breakpoint::Md);
        assert_eq!(bp.classify_width(1024), Breakpoint::Lg);
        assert_eq!(bp.classify_width(1439), Breakpoint::Lg);
        assert_eq!(bp.classify_width(1440), Breakpoint::Xl);
        assert_eq!(bp.classify_width(3840), Breakpoint::Xl);
    }

    #[test]
    fn negative_width_is_xs() {
        assert_eq!(Breakpoints::DEFAULT.classify_width(-5), Breakpoint::Xs);
    }

    #[test]
    fn classification_is_monotonic() {
        let bp = Breakpoints::DEFAULT;
        let mut last = Breakpoint::Xs;
        for width in (0..2000).step_by(7) {
            let current = bp.classify_width(width);
            assert!(current >= last, "width {width} regressed to {current}");
            last = current;
        }
    }

    #[test]
    fn new_sanitizes_order() {
        let bp = Breakpoints::new(500, 400, 900, 800);
        assert_eq!(bp, Breakpoints::new(500, 500, 900, 900));
        assert!(!bp.is_strictly_increasing());
        assert!(Breakpoints::DEFAULT.is_strictly_increasing());
    }

    #[test]
    fn at_least_and_threshold() {
        let bp = Breakpoints::DEFAULT;
        assert!(bp.at_least(800, Breakpoint::Md));
        assert!(!bp.at_least(700, Breakpoint::Md));
        assert_eq!(bp.threshold(Breakpoint::Xs), 0);
        assert_eq!(bp.threshold(Breakpoint::Lg), 1024);
        assert_eq!(bp.classify_size(Size::new(1500, 10)), Breakpoint::Xl);
    }

    #[test]
    fn breakpoints_partial_json_uses_defaults() {
        let bp: Breakpoints = serde_json::from_str(r#"{"sm": 400}"#).expect("valid json");
        assert_eq!(bp.sm, 400);
        assert_eq!(bp.md, 768);
    }
}
