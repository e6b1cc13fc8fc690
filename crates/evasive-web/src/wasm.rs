#![forbid(unsafe_code)]

//! `wasm-bindgen` exports and event wiring.
//!
//! The page owns exactly one [`Site`], kept in a thread-local so the event
//! closures and the exported globals share it. Only compiled on `wasm32`.

use std::cell::{Cell, RefCell};

use evasive_core::{RngSource, SystemClock};
use evasive_runtime::{Site, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Event, EventTarget, Window};

use crate::console::{install_panic_hook, install_tracing};
use crate::dom::DomHost;
use crate::markup::{self, EVADER_ID};

type WebSite = Site<DomHost, RngSource, SystemClock>;

thread_local! {
    static SITE: RefCell<Option<WebSite>> = const { RefCell::new(None) };
    static BOOTED: Cell<bool> = const { Cell::new(false) };
}

/// Run `f` against the page's site. `None` before boot or on re-entry.
fn with_site<T>(f: impl FnOnce(&mut WebSite) -> T) -> Option<T> {
    SITE.with(|cell| {
        let mut slot = cell.try_borrow_mut().ok()?;
        slot.as_mut().map(f)
    })
}

fn browser() -> Result<(Window, Document), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))?;
    Ok((window, document))
}

fn listen(
    target: &EventTarget,
    event: &str,
    passive: bool,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(passive);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

/// Build the site for the current document, replacing any previous one.
fn install_site(config: SiteConfig) -> Result<(), JsValue> {
    let (window, document) = browser()?;
    let host = DomHost::new(window, document);
    let site = Site::new(config, host, RngSource::from_os(), SystemClock)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    SITE.with(|cell| {
        if let Ok(mut slot) = cell.try_borrow_mut() {
            *slot = Some(site);
        }
    });
    // After load the replacement must find its page again.
    if BOOTED.with(Cell::get) {
        with_site(|site| site.enter_current_page());
    }
    Ok(())
}

fn boot() -> Result<(), JsValue> {
    let (window, document) = browser()?;
    with_site(|site| site.on_load());
    BOOTED.with(|booted| booted.set(true));

    let window_target: &EventTarget = window.as_ref();
    for event in ["resize", "orientationchange"] {
        listen(window_target, event, true, |_| {
            with_site(|site| site.on_resize());
        })?;
    }

    if let Some(evader) = document.get_element_by_id(EVADER_ID) {
        listen(evader.as_ref(), "pointerdown", false, |event: Event| {
            event.prevent_default();
            with_site(|site| site.on_evade());
        })?;
        // Keep touch from synthesizing clicks after the evader moved.
        listen(evader.as_ref(), "touchstart", false, |event: Event| {
            event.prevent_default();
        })?;
    }

    listen(document.as_ref(), "dblclick", false, |event: Event| {
        event.prevent_default();
    })?;
    Ok(())
}

/// Module entry point: logging, default site, and load wiring.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install_panic_hook();
    install_tracing();
    install_site(SiteConfig::default())?;

    let (_, document) = browser()?;
    if markup::still_loading(&document.ready_state()) {
        listen(document.as_ref(), "DOMContentLoaded", true, |_| {
            if let Err(err) = boot() {
                tracing::error!(message = "site.boot_failed", error = ?err);
            }
        })?;
        Ok(())
    } else {
        boot()
    }
}

/// Replace the site configuration from JSON.
///
/// Invalid JSON or values keep the built-in defaults and return `false`.
/// Counters restart; the current page is detected again once loaded.
#[wasm_bindgen(js_name = configureSite)]
pub fn configure_site(json: &str) -> bool {
    let (config, accepted) = match SiteConfig::parse_and_validate(json) {
        Ok(config) => (config, true),
        Err(err) => {
            tracing::warn!(message = "site.config_rejected", error = %err);
            (SiteConfig::default(), false)
        }
    };
    match install_site(config) {
        Ok(()) => accepted,
        Err(err) => {
            tracing::error!(message = "site.config_install_failed", error = ?err);
            false
        }
    }
}

#[wasm_bindgen(js_name = navigateToPage)]
pub fn navigate_to_page(page_number: f64) {
    let Some(page_number) = markup::page_number_from_js(page_number) else {
        tracing::debug!(message = "site.navigate.ignored", raw = page_number);
        return;
    };
    with_site(|site| site.navigate_to(page_number));
}

#[wasm_bindgen(js_name = handleYes)]
pub fn handle_yes() {
    with_site(|site| site.on_yes());
}

#[wasm_bindgen(js_name = moveNoButtonSimple)]
pub fn move_no_button_simple() {
    with_site(|site| site.on_evade());
}

#[wasm_bindgen(js_name = updatePageConfig)]
pub fn update_page_config(next_page: Option<String>, total_pages: Option<u32>) {
    let total_pages = total_pages.and_then(|t| usize::try_from(t).ok());
    with_site(|site| site.update_page_config(next_page.as_deref(), total_pages));
}
