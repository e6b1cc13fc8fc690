#![forbid(unsafe_code)]

//! Runtime: drives the evasive control page from host events.
//!
//! # Role
//! The embedding environment (the browser, via `evasive-web`, or a test
//! harness) implements [`PageHost`] and forwards its events to a [`Site`].
//! The site owns all mutable state (message index, click count, next page)
//! and performs every DOM effect through the host, so the whole page can be
//! run deterministically with [`MemoryHost`], a seeded random source and a
//! fixed clock.
//!
//! # Modules
//! - [`config`]: [`SiteConfig`] and its validation errors.
//! - [`navigation`]: the cyclic page sequence and cache-busting URLs.
//! - [`host`]: the [`PageHost`] capability trait.
//! - [`memory_host`]: an in-memory [`PageHost`] that records effects.
//! - [`site`]: the [`Site`] event driver.

pub mod config;
pub mod host;
pub mod memory_host;
pub mod navigation;
pub mod site;

pub use config::{ConfigError, SiteConfig};
pub use host::PageHost;
pub use memory_host::MemoryHost;
pub use navigation::{Navigator, PageSequence, cache_busted, page_name_from_path};
pub use site::{EvadeOutcome, Site};
