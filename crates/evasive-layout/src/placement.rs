#![forbid(unsafe_code)]

//! Evasive placement: pick a fresh origin for the movable element.
//!
//! [`relocate`] is pure apart from the injected [`RandomSource`]. It computes
//! the [`safe_zones`], keeps the valid ones, picks one uniformly, and then
//! picks a point uniformly inside it.
//!
//! Point sampling uses the half-open range `[min, max)` per axis, collapsing
//! to `min` for a single-row or single-column zone. The result is clamped to
//! non-negative coordinates.

use evasive_core::RandomSource;
use serde::{Deserialize, Serialize};

use crate::zones::{SafeZone, ZoneSide, safe_zones};
use crate::{Point, Rect, Size};

/// Tuning for [`relocate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementPolicy {
    /// Relocation stops once the click count reaches this value.
    pub relocation_threshold: u32,
    /// Smallest gap (px) kept between the element and the protected rect.
    pub min_clearance_px: i32,
    /// Gap as a fraction of container width; the larger gap wins.
    pub clearance_fraction: f64,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            relocation_threshold: 5,
            min_clearance_px: 20,
            clearance_fraction: 0.05,
        }
    }
}

impl PlacementPolicy {
    /// Policy with no gap around the protected rectangle.
    #[must_use]
    pub fn flush(relocation_threshold: u32) -> Self {
        Self {
            relocation_threshold,
            min_clearance_px: 0,
            clearance_fraction: 0.0,
        }
    }

    /// `max(min_clearance_px, ceil(clearance_fraction * container_width))`.
    #[must_use]
    pub fn clearance(&self, container: Size) -> i32 {
        let proportional = self.clearance_fraction * f64::from(container.width.max(0));
        let proportional = if proportional.is_finite() {
            proportional.ceil().clamp(0.0, f64::from(i32::MAX)) as i32
        } else {
            0
        };
        self.min_clearance_px.max(proportional).max(0)
    }

    /// Whether `click_count` still permits relocation.
    #[must_use]
    pub const fn allows(&self, click_count: u32) -> bool {
        click_count < self.relocation_threshold
    }
}

/// A successful relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Relocation {
    pub side: ZoneSide,
    pub position: Point,
    /// How many zones were valid when the choice was made.
    pub valid_zones: usize,
}

/// New origin for the movable element, or `None` to stay in place.
///
/// Returns `None` when `click_count` has reached the policy threshold or when
/// no safe zone is valid.
pub fn relocate<R: RandomSource + ?Sized>(
    container: Size,
    protected: Rect,
    element: Size,
    click_count: u32,
    policy: &PlacementPolicy,
    rng: &mut R,
) -> Option<Point> {
    relocate_detailed(container, protected, element, click_count, policy, rng)
        .map(|relocation| relocation.position)
}

/// [`relocate`], also reporting which zone was used.
pub fn relocate_detailed<R: RandomSource + ?Sized>(
    container: Size,
    protected: Rect,
    element: Size,
    click_count: u32,
    policy: &PlacementPolicy,
    rng: &mut R,
) -> Option<Relocation> {
    if !policy.allows(click_count) {
        return None;
    }

    let zones = safe_zones(container, protected, element, policy.clearance(container));
    let valid: Vec<SafeZone> = zones.into_iter().filter(SafeZone::is_valid).collect();
    if valid.is_empty() {
        return None;
    }

    let pick = rng.below(valid.len() as u32) as usize;
    let zone = valid[pick.min(valid.len() - 1)];
    let x = offset(zone.min_x, zone.max_x, rng.below(zone.span_x()));
    let y = offset(zone.min_y, zone.max_y, rng.below(zone.span_y()));

    Some(Relocation {
        side: zone.side,
        position: Point::new(x, y).clamp_non_negative(),
        valid_zones: valid.len(),
    })
}

/// `min + draw`, never past `max`.
fn offset(min: i32, max: i32, draw: u32) -> i32 {
    let value = (i64::from(min) + i64::from(draw)).min(i64::from(max));
    i32::try_from(value).unwrap_or(max)
}
