#![forbid(unsafe_code)]

//! Browser front end for the evasive control page.
//!
//! On `wasm32` this crate installs a panic hook and a console tracing layer,
//! builds an `evasive_runtime::Site` over the live DOM, wires the page events,
//! and exports the global functions the markup calls:
//! `navigateToPage`, `handleYes`, `moveNoButtonSimple`, `updatePageConfig`
//! and `configureSite`.
//!
//! The DOM-independent pieces (selectors, inline style values, JS argument
//! coercion, log line formatting) live in [`markup`] and [`log_line`] so they
//! are testable natively.

pub mod log_line;
pub mod markup;

#[cfg(target_arch = "wasm32")]
mod console;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    configure_site, handle_yes, move_no_button_simple, navigate_to_page, start,
    update_page_config,
};
