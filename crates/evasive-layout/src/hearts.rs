#![forbid(unsafe_code)]

//! Floating-heart decoration: scattered once per page load.

use evasive_core::RandomSource;

use crate::Size;

/// Footprint reserved for one heart so it stays on screen.
const HEART_FOOTPRINT_PX: f64 = 50.0;
const MAX_DELAY_S: f64 = 5.0;
const MIN_DURATION_S: f64 = 4.0;
const DURATION_JITTER_S: f64 = 4.0;

/// Inline style values for one `.heart` element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartPlacement {
    pub left_px: f64,
    pub top_px: f64,
    pub font_px: u32,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Place `count` hearts uniformly over the viewport.
///
/// Draw order per heart: left, top, delay, duration.
pub fn scatter_hearts<R: RandomSource + ?Sized>(
    count: usize,
    viewport: Size,
    font_px: u32,
    rng: &mut R,
) -> Vec<HeartPlacement> {
    let room_x = (f64::from(viewport.width) - HEART_FOOTPRINT_PX).max(0.0);
    let room_y = (f64::from(viewport.height) - HEART_FOOTPRINT_PX).max(0.0);
    (0..count)
        .map(|_| HeartPlacement {
            left_px: rng.unit() * room_x,
            top_px: rng.unit() * room_y,
            font_px,
            delay_s: rng.unit() * MAX_DELAY_S,
            duration_s: MIN_DURATION_S + rng.unit() * DURATION_JITTER_S,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use evasive_core::{RngSource, SequenceSource};

    #[test]
    fn draws_in_order() {
        let mut rng = SequenceSource::new([0.5, 0.25, 0.2, 0.75]);
        let hearts = scatter_hearts(1, Size::new(1050, 450), 22, &mut rng);
        assert_eq!(
            hearts,
            vec![HeartPlacement {
                left_px: 500.0,
                top_px: 100.0,
                font_px: 22,
                delay_s: 1.0,
                duration_s: 7.0,
            }]
        );
    }

    #[test]
    fn tiny_viewport_pins_to_origin() {
        let mut rng = SequenceSource::constant(0.9);
        let hearts = scatter_hearts(3, Size::new(30, 20), 16, &mut rng);
        assert_eq!(hearts.len(), 3);
        assert!(hearts.iter().all(|h| h.left_px == 0.0 && h.top_px == 0.0));
    }

    #[test]
    fn ranges_hold_for_random_draws() {
        let mut rng = RngSource::seeded(11);
        for heart in scatter_hearts(64, Size::new(1280, 720), 20, &mut rng) {
            assert!((0.0..1230.0).contains(&heart.left_px));
            assert!((0.0..670.0).contains(&heart.top_px));
            assert!((0.0..5.0).contains(&heart.delay_s));
            assert!((4.0..8.0).contains(&heart.duration_s));
        }
    }
}
