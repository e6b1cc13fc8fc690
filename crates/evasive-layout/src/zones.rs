#![forbid(unsafe_code)]

//! Safe zones around the protected rectangle.
//!
//! A safe zone is the set of top-left origins at which the movable element
//! fits inside the container without touching the protected rectangle. Each
//! of the four zones takes one full strip of the container on one side of the
//! protected rectangle, so origins are bounded by `[min, max]` on both axes.
//!
//! # Invariants
//!
//! 1. For a valid zone, every origin in `[min_x, max_x] × [min_y, max_y]`
//!    places the element fully inside the container's right/bottom edges.
//! 2. For a valid zone, the element rectangle at any such origin does not
//!    intersect the protected rectangle (a gap of at least `clearance`
//!    pixels separates them on the zone's axis).
//! 3. Upper bounds are clipped to the container, but nothing is clamped up
//!    to zero: an impossible strip shows up as inverted or negative bounds
//!    and is rejected by [`SafeZone::is_valid`].

use crate::{Rect, Size};

/// Which side of the protected rectangle a zone lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl ZoneSide {
    pub const ALL: [ZoneSide; 4] = [
        ZoneSide::Top,
        ZoneSide::Bottom,
        ZoneSide::Left,
        ZoneSide::Right,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ZoneSide::Top => "top",
            ZoneSide::Bottom => "bottom",
            ZoneSide::Left => "left",
            ZoneSide::Right => "right",
        }
    }
}

impl std::fmt::Display for ZoneSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive origin bounds for the movable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeZone {
    pub side: ZoneSide,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl SafeZone {
    /// Non-inverted on both axes with non-negative upper bounds.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y && self.max_x >= 0 && self.max_y >= 0
    }

    /// Horizontal span (`max_x - min_x`), zero when inverted.
    #[must_use]
    pub const fn span_x(&self) -> u32 {
        span(self.min_x, self.max_x)
    }

    /// Vertical span (`max_y - min_y`), zero when inverted.
    #[must_use]
    pub const fn span_y(&self) -> u32 {
        span(self.min_y, self.max_y)
    }
}

const fn span(min: i32, max: i32) -> u32 {
    if max <= min {
        0
    } else {
        max.abs_diff(min)
    }
}

/// Compute the four candidate zones, in `Top, Bottom, Left, Right` order.
///
/// `protected` is in container coordinates. `clearance` is the minimum gap
/// kept between the element and the protected rectangle; negative values are
/// treated as zero.
#[must_use]
pub fn safe_zones(container: Size, protected: Rect, element: Size, clearance: i32) -> [SafeZone; 4] {
    let clearance = clearance.max(0);
    let max_x = container.width.saturating_sub(element.width);
    let max_y = container.height.saturating_sub(element.height);

    [
        SafeZone {
            side: ZoneSide::Top,
            min_x: 0,
            max_x,
            min_y: 0,
            max_y: protected
                .top()
                .saturating_sub(element.height)
                .saturating_sub(clearance)
                .min(max_y),
        },
        SafeZone {
            side: ZoneSide::Bottom,
            min_x: 0,
            max_x,
            min_y: protected.bottom().saturating_add(clearance),
            max_y,
        },
        SafeZone {
            side: ZoneSide::Left,
            min_x: 0,
            max_x: protected
                .left()
                .saturating_sub(element.width)
                .saturating_sub(clearance)
                .min(max_x),
            min_y: 0,
            max_y,
        },
        SafeZone {
            side: ZoneSide::Right,
            min_x: protected.right().saturating_add(clearance),
            max_x,
            min_y: 0,
            max_y,
        },
    ]
}
