#![forbid(unsafe_code)]

//! Core: pixel geometry and the injectable seams the placement logic needs.
//!
//! # Role
//! `evasive-core` is the bottom of the stack. It owns the integer pixel
//! geometry shared by every other crate, plus the two capabilities that make
//! the evasive control non-deterministic in production:
//!
//! - **[`RandomSource`]**: zone and point selection, heart scattering.
//! - **[`Clock`]**: wall-clock milliseconds for cache-busting redirects.
//!
//! Both are traits so tests can drive the algorithms with fixed sequences.

pub mod clock;
pub mod geometry;
pub mod random;

pub use clock::{Clock, FixedClock, SystemClock};
pub use geometry::{Point, Rect, Size};
pub use random::{RandomSource, RngSource, SequenceSource};
