#![forbid(unsafe_code)]

//! The evasive control: counters plus the message cycle.
//!
//! Every [`EvasiveControl::evade`] call advances the message index by one and
//! returns the label for the pre-increment index. The click count only moves
//! when the element actually relocated, so once it reaches the policy
//! threshold the element stays put and only the label keeps changing.

use evasive_core::RandomSource;

use crate::placement::{PlacementPolicy, relocate_detailed};
use crate::zones::ZoneSide;
use crate::{Point, Rect, Size};

/// Error returned when building a [`MessageCycle`] from no messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyMessageList;

impl std::fmt::Display for EmptyMessageList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("message list must not be empty")
    }
}

impl std::error::Error for EmptyMessageList {}

/// Fixed, non-empty list of labels read cyclically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCycle {
    messages: Vec<String>,
}

impl MessageCycle {
    pub fn new<I, S>(messages: I) -> Result<Self, EmptyMessageList>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            return Err(EmptyMessageList);
        }
        Ok(Self { messages })
    }

    /// `messages[index % len]`.
    #[must_use]
    pub fn at(&self, index: u64) -> &str {
        let len = self.messages.len() as u64;
        &self.messages[(index % len) as usize]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Geometry read fresh from the host for one evasion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvasionGeometry {
    /// Size of the layout container the element is positioned in.
    pub container: Size,
    /// Affirmative control, in container coordinates.
    pub protected: Rect,
    /// Current size of the movable element.
    pub element: Size,
}

/// Outcome of one [`EvasiveControl::evade`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evasion<'a> {
    /// Label to display from now on.
    pub label: &'a str,
    /// Message index the label was read from.
    pub message_index: u64,
    /// New origin, or `None` if the element stays in place.
    pub position: Option<Point>,
    /// Zone the new origin was drawn from.
    pub side: Option<ZoneSide>,
}

/// Mutable state of the single evasive control on a page.
#[derive(Debug, Clone)]
pub struct EvasiveControl {
    messages: MessageCycle,
    policy: PlacementPolicy,
    message_index: u64,
    click_count: u32,
}

impl EvasiveControl {
    #[must_use]
    pub fn new(messages: MessageCycle, policy: PlacementPolicy) -> Self {
        Self {
            messages,
            policy,
            message_index: 0,
            click_count: 0,
        }
    }

    /// Handle one pointer-down/tap on the control.
    pub fn evade<R: RandomSource + ?Sized>(
        &mut self,
        geometry: &EvasionGeometry,
        rng: &mut R,
    ) -> Evasion<'_> {
        let relocation = relocate_detailed(
            geometry.container,
            geometry.protected,
            geometry.element,
            self.click_count,
            &self.policy,
            rng,
        );
        if relocation.is_some() {
            self.click_count = self.click_count.saturating_add(1);
        }

        let message_index = self.message_index;
        self.message_index = self.message_index.wrapping_add(1);

        Evasion {
            label: self.messages.at(message_index),
            message_index,
            position: relocation.map(|r| r.position),
            side: relocation.map(|r| r.side),
        }
    }

    #[must_use]
    pub const fn message_index(&self) -> u64 {
        self.message_index
    }

    #[must_use]
    pub const fn click_count(&self) -> u32 {
        self.click_count
    }

    #[must_use]
    pub const fn policy(&self) -> &PlacementPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn messages(&self) -> &MessageCycle {
        &self.messages
    }

    /// Whether the control has stopped moving.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        !self.policy.allows(self.click_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evasive_core::SequenceSource;

    fn geometry() -> EvasionGeometry {
        EvasionGeometry {
            container: Size::new(800, 600),
            protected: Rect::new(300, 500, 200, 50),
            element: Size::new(150, 50),
        }
    }

    fn control() -> EvasiveControl {
        let messages = MessageCycle::new(["one", "two", "three"]).expect("non-empty");
        EvasiveControl::new(messages, PlacementPolicy::default())
    }

    #[test]
    fn empty_messages_rejected() {
        let err = MessageCycle::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err.to_string(), "message list must not be empty");
    }

    #[test]
    fn message_cycle_wraps() {
        let cycle = MessageCycle::new(["a", "b"]).expect("non-empty");
        assert_eq!(cycle.at(0), "a");
        assert_eq!(cycle.at(3), "b");
        assert_eq!(cycle.at(u64::MAX), "b");
        assert_eq!(cycle.len(), 2);
        assert!(!cycle.is_empty());
    }

    #[test]
    fn labels_advance_and_clicks_cap() {
        let mut control = control();
        let mut rng = SequenceSource::constant(0.5);
        let mut labels = Vec::new();
        for i in 0..7u64 {
            let evasion = control.evade(&geometry(), &mut rng);
            assert_eq!(evasion.message_index, i);
            assert_eq!(evasion.position.is_some(), i < 5);
            labels.push(evasion.label.to_string());
        }
        assert_eq!(labels, ["one", "two", "three", "one", "two", "three", "one"]);
        assert_eq!(control.message_index(), 7);
        assert_eq!(control.click_count(), 5);
        assert!(control.is_exhausted());
    }

    #[test]
    fn no_valid_zone_advances_label_only() {
        let mut control = control();
        let mut rng = SequenceSource::constant(0.5);
        let cramped = EvasionGeometry {
            container: Size::new(150, 50),
            protected: Rect::new(0, 0, 150, 50),
            element: Size::new(150, 50),
        };
        let evasion = control.evade(&cramped, &mut rng);
        assert_eq!(evasion.position, None);
        assert_eq!(evasion.side, None);
        assert_eq!(evasion.label, "one");
        assert_eq!(control.click_count(), 0);
        assert_eq!(control.message_index(), 1);
    }
}
