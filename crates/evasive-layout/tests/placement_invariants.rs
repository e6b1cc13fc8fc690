//! Property invariants for evasive placement.
//!
//! Random container/protected/element geometries are fed through
//! `relocate` and the evasive control, asserting non-overlap, containment,
//! the relocation threshold, and message cycling after every call.

use evasive_core::{RngSource, SequenceSource};
use evasive_layout::{
    EvasionGeometry, EvasiveControl, MessageCycle, PlacementPolicy, Point, Rect, Size, ZoneSide,
    relocate, relocate_detailed, safe_zones,
};
use proptest::prelude::*;

fn geometry_strategy() -> impl Strategy<Value = (Size, Rect, Size)> {
    (200i32..2000, 200i32..1400).prop_flat_map(|(cw, ch)| {
        (
            Just(Size::new(cw, ch)),
            // offsetLeft/offsetTop go negative when the control overflows
            // the container's start edge.
            (-300..cw, -300..ch, 20i32..400, 10i32..200)
                .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h)),
            (10i32..300, 10i32..120).prop_map(|(w, h)| Size::new(w, h)),
        )
    })
}

fn policy_strategy() -> impl Strategy<Value = PlacementPolicy> {
    (0i32..60, 0.0f64..0.1).prop_map(|(min_clearance_px, clearance_fraction)| PlacementPolicy {
        relocation_threshold: 5,
        min_clearance_px,
        clearance_fraction,
    })
}

proptest! {
    #[test]
    fn relocation_never_overlaps_protected(
        (container, protected, element) in geometry_strategy(),
        policy in policy_strategy(),
        clicks in 0u32..5,
        seed in any::<u64>(),
    ) {
        let mut rng = RngSource::seeded(seed);
        let any_valid = safe_zones(container, protected, element, policy.clearance(container))
            .iter()
            .any(|z| z.is_valid());
        let pos = relocate(container, protected, element, clicks, &policy, &mut rng);
        prop_assert_eq!(pos.is_some(), any_valid);
        if let Some(pos) = pos {
            let placed = Rect::at(pos, element);
            prop_assert!(!placed.intersects(&protected), "{placed:?} overlaps {protected:?}");
            prop_assert!(pos.x >= 0 && pos.y >= 0);
            prop_assert!(pos.x <= container.width - element.width);
            prop_assert!(pos.y <= container.height - element.height);
        }
    }

    #[test]
    fn threshold_reached_never_moves(
        (container, protected, element) in geometry_strategy(),
        clicks in 5u32..1000,
        seed in any::<u64>(),
    ) {
        let mut rng = RngSource::seeded(seed);
        let pos = relocate(
            container,
            protected,
            element,
            clicks,
            &PlacementPolicy::default(),
            &mut rng,
        );
        prop_assert_eq!(pos, None);
    }

    #[test]
    fn message_index_advances_once_per_call(
        (container, protected, element) in geometry_strategy(),
        calls in 1usize..40,
        seed in any::<u64>(),
    ) {
        let messages = ["a", "b", "c", "d", "e"];
        let cycle = MessageCycle::new(messages).expect("non-empty");
        let mut control = EvasiveControl::new(cycle, PlacementPolicy::default());
        let geometry = EvasionGeometry { container, protected, element };
        let mut rng = RngSource::seeded(seed);
        let mut moves = 0u32;
        for i in 0..calls {
            let before = control.message_index();
            let evasion = control.evade(&geometry, &mut rng);
            prop_assert_eq!(evasion.label, messages[i % messages.len()]);
            let moved = evasion.position.is_some();
            prop_assert_eq!(control.message_index(), before + 1);
            if moved {
                moves += 1;
            }
        }
        prop_assert_eq!(control.click_count(), moves);
        prop_assert!(moves <= 5);
    }
}

#[test]
fn scenario_bottom_protected_lands_at_or_above_450() {
    let container = Size::new(800, 600);
    let protected = Rect::new(300, 500, 200, 50);
    let element = Size::new(150, 50);
    let zones = safe_zones(container, protected, element, 0);
    assert!(zones[0].is_valid());
    assert_eq!(zones[0].max_y, 450);

    // Force the top zone: draw 0 picks the first valid zone.
    let mut rng = SequenceSource::new([0.0, 0.7, 0.999]);
    let pos = relocate(
        container,
        protected,
        element,
        0,
        &PlacementPolicy::default(),
        &mut rng,
    )
    .expect("top zone valid");
    assert!(pos.y <= 450, "y = {}", pos.y);
}

#[test]
fn scenario_fifth_click_stays_put_but_relabels() {
    let cycle = MessageCycle::new(["Are you sure?", "Pretty please?"]).expect("non-empty");
    let mut control = EvasiveControl::new(cycle, PlacementPolicy::default());
    let geometry = EvasionGeometry {
        container: Size::new(800, 600),
        protected: Rect::new(300, 500, 200, 50),
        element: Size::new(150, 50),
    };
    let mut rng = SequenceSource::constant(0.4);
    let mut last = None;
    for _ in 0..5 {
        last = control.evade(&geometry, &mut rng).position.or(last);
    }
    assert_eq!(control.click_count(), 5);
    assert!(last.is_some());

    let evasion = control.evade(&geometry, &mut rng);
    assert_eq!(evasion.position, None::<Point>);
    assert_eq!(evasion.label, "Pretty please?");
    assert_eq!(control.message_index(), 6);
}

#[test]
fn protected_left_of_container_clamps_right_zone_to_zero() {
    let container = Size::new(800, 600);
    let protected = Rect::new(-300, 200, 100, 50);
    let element = Size::new(150, 50);
    let policy = PlacementPolicy::default();
    let zones = safe_zones(container, protected, element, policy.clearance(container));
    let right = zones[3];
    assert_eq!(right.min_x, -160);
    assert!(right.is_valid());
    assert!(!zones[2].is_valid());

    // Valid zones are top, bottom, right: 0.99 picks right, 0.0 lands on min_x.
    let mut rng = SequenceSource::new([0.99, 0.0, 0.99]);
    let relocation = relocate_detailed(container, protected, element, 0, &policy, &mut rng)
        .expect("right zone valid");
    assert_eq!(relocation.side, ZoneSide::Right);
    assert_eq!(relocation.position, Point::new(0, 544));
    assert!(!Rect::at(relocation.position, element).intersects(&protected));
}
