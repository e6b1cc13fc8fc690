#![forbid(unsafe_code)]

//! Responsive value mapping: pick a preset based on the viewport breakpoint.
//!
//! [`Responsive<T>`] maps [`Breakpoint`] tiers to values of any type, with
//! inheritance from smaller breakpoints. A tier without its own value uses the
//! value of the nearest smaller tier.
//!
//! ```ignore
//! use evasive_layout::{Breakpoint, Responsive};
//!
//! let heart_font = Responsive::new(16)
//!     .at(Breakpoint::Sm, 18)
//!     .at(Breakpoint::Md, 20);
//!
//! assert_eq!(heart_font.resolve(Breakpoint::Xl), &20);
//! ```
//!
//! # Invariants
//!
//! 1. `Xs` always has a value (the base passed to `new()`).
//! 2. A missing tier inherits from the nearest smaller tier with a value.
//! 3. `resolve()` never fails.

use serde::{Deserialize, Serialize};

use super::Breakpoint;

/// A breakpoint-aware value with inheritance from smaller tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responsive<T> {
    /// Value for `Xs`; everything inherits from here by default.
    base: T,
    /// Overrides for `Sm`, `Md`, `Lg`, `Xl` (in that order).
    overrides: [Option<T>; 4],
}

impl<T> Responsive<T> {
    /// Create a responsive value with a base value for `Xs`.
    #[must_use]
    pub fn new(base: T) -> Self {
        Self {
            base,
            overrides: [None, None, None, None],
        }
    }

    fn slot(bp: Breakpoint) -> Option<usize> {
        match bp {
            Breakpoint::Xs => None,
            Breakpoint::Sm => Some(0),
            Breakpoint::Md => Some(1),
            Breakpoint::Lg => Some(2),
            Breakpoint::Xl => Some(3),
        }
    }

    /// Set the value for a specific breakpoint (builder pattern).
    #[must_use]
    pub fn at(mut self, bp: Breakpoint, value: T) -> Self {
        self.set(bp, value);
        self
    }

    /// Set the value for a specific breakpoint. Setting `Xs` replaces the base.
    pub fn set(&mut self, bp: Breakpoint, value: T) {
        match Self::slot(bp) {
            Some(idx) => self.overrides[idx] = Some(value),
            None => self.base = value,
        }
    }

    /// Resolve the value for a given breakpoint.
    #[must_use]
    pub fn resolve(&self, bp: Breakpoint) -> &T {
        let Some(top) = Self::slot(bp) else {
            return &self.base;
        };
        self.overrides[..=top]
            .iter()
            .rev()
            .find_map(Option::as_ref)
            .unwrap_or(&self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_value_at_all_breakpoints() {
        let r = Responsive::new(42);
        for bp in Breakpoint::ALL {
            assert_eq!(r.resolve(bp), &42);
        }
    }

    #[test]
    fn override_single_breakpoint() {
        let r = Responsive::new(1).at(Breakpoint::Md, 2);

        assert_eq!(r.resolve(Breakpoint::Xs), &1);
        assert_eq!(r.resolve(Breakpoint::Sm), &1);
        assert_eq!(r.resolve(Breakpoint::Md), &2);
        assert_eq!(r.resolve(Breakpoint::Lg), &2);
        assert_eq!(r.resolve(Breakpoint::Xl), &2);
    }

    #[test]
    fn setting_xs_replaces_base() {
        let mut r = Responsive::new(1).at(Breakpoint::Lg, 3);
        r.set(Breakpoint::Xs, 0);
        assert_eq!(r.resolve(Breakpoint::Sm), &0);
        assert_eq!(r.resolve(Breakpoint::Xl), &3);
    }
}
