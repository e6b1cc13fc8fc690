#![forbid(unsafe_code)]

//! Event driver for the evasive control page.
//!
//! A [`Site`] is created once per page and receives the host's events in
//! order: [`Site::on_load`] once, then any mix of [`Site::on_resize`],
//! [`Site::on_evade`], [`Site::on_yes`] and [`Site::navigate_to`]. Each
//! handler runs to completion and touches the page only through the host.

use evasive_core::{Clock, RandomSource};
use evasive_layout::{
    Breakpoints, EvasiveControl, MessageCycle, Point, ResponsiveStyle, ScaleModel,
    mobile_root_font_rem, scatter_hearts,
};

use crate::config::{ConfigError, SiteConfig};
use crate::host::PageHost;
use crate::navigation::{Navigator, PageSequence, cache_busted, page_name_from_path};

/// What one evasive interaction did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvadeOutcome {
    pub label: String,
    pub message_index: u64,
    pub position: Option<Point>,
}

pub struct Site<H, R, C> {
    host: H,
    rng: R,
    clock: C,
    control: EvasiveControl,
    navigator: Navigator,
    scale: ScaleModel,
    breakpoints: Breakpoints,
    style: ResponsiveStyle,
}

impl<H, R, C> std::fmt::Debug for Site<H, R, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("message_index", &self.control.message_index())
            .field("click_count", &self.control.click_count())
            .field("next_page", &self.navigator.next_page())
            .finish_non_exhaustive()
    }
}

impl<H: PageHost, R: RandomSource, C: Clock> Site<H, R, C> {
    /// Build a site from a validated-on-entry config.
    pub fn new(config: SiteConfig, host: H, rng: R, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;
        let messages =
            MessageCycle::new(config.messages).map_err(|_| ConfigError::EmptyMessages)?;
        let navigator = Navigator::new(PageSequence::new(config.pages), config.next_page);
        Ok(Self {
            host,
            rng,
            clock,
            control: EvasiveControl::new(messages, config.placement),
            navigator,
            scale: config.scale,
            breakpoints: config.breakpoints,
            style: config.style,
        })
    }

    /// Page load: scale, scatter decorations, style buttons, then work out
    /// where the affirmative control leads from this page.
    pub fn on_load(&mut self) {
        let viewport = self.host.viewport();
        let breakpoint = self.breakpoints.classify_size(viewport);
        tracing::info!(
            message = "site.init",
            width = viewport.width,
            height = viewport.height,
            breakpoint = %breakpoint,
        );

        self.apply_scale();

        let font_px = self.style.decoration_font_for(breakpoint);
        let hearts = scatter_hearts(self.host.heart_count(), viewport, font_px, &mut self.rng);
        for (index, heart) in hearts.iter().enumerate() {
            self.host.place_heart(index, heart);
        }

        let preset = self.style.button_for(breakpoint);
        self.host.style_buttons(&preset);

        self.enter_current_page();
    }

    /// Look up the host's location in the page sequence and aim the
    /// affirmative control at the page after it.
    ///
    /// A site rebuilt after load (new config) calls this to recover its
    /// place. Returns whether the location is a known page.
    pub fn enter_current_page(&mut self) -> bool {
        let Some(path) = self.host.location_path() else {
            return false;
        };
        let page = page_name_from_path(&path);
        let known = self.navigator.enter(page);
        if known {
            tracing::info!(
                message = "site.page",
                page,
                number = self.navigator.current(),
                next = self.navigator.next_page(),
            );
        } else {
            tracing::debug!(message = "site.page.unknown", page);
        }
        known
    }

    /// Resize or orientation change: rescale only.
    pub fn on_resize(&mut self) {
        self.apply_scale();
    }

    fn apply_scale(&mut self) {
        let viewport = self.host.viewport();
        let factor = self.scale.factor(viewport);
        self.host.scale_containers(factor);
        if let Some(rem) = mobile_root_font_rem(viewport.width, &self.breakpoints) {
            self.host.set_root_font_rem(rem);
        }
        tracing::debug!(
            message = "site.scale",
            width = viewport.width,
            height = viewport.height,
            factor,
        );
    }

    /// Pointer-down or tap on the evasive control.
    ///
    /// Returns `None` without touching the page when the control, the
    /// affirmative control or the container is missing.
    pub fn on_evade(&mut self) -> Option<EvadeOutcome> {
        let geometry = self.host.evasion_geometry()?;
        let evasion = self.control.evade(&geometry, &mut self.rng);

        if let Some(position) = evasion.position {
            self.host.move_evader(position);
        }
        self.host.set_evader_label(evasion.label);

        let outcome = EvadeOutcome {
            label: evasion.label.to_string(),
            message_index: evasion.message_index,
            position: evasion.position,
        };
        match (evasion.position, evasion.side) {
            (Some(position), Some(side)) => tracing::debug!(
                message = "evader.relocate",
                x = position.x,
                y = position.y,
                side = %side,
                clicks = self.control.click_count(),
            ),
            _ => tracing::debug!(
                message = "evader.stay",
                exhausted = self.control.is_exhausted(),
                index = outcome.message_index,
            ),
        }
        Some(outcome)
    }

    /// Affirmative click: go to the next page.
    pub fn on_yes(&mut self) -> String {
        let url = cache_busted(self.navigator.next_page(), self.clock.now_millis());
        tracing::info!(message = "site.navigate", url = %url, reason = "yes");
        self.host.redirect(&url);
        url
    }

    /// Jump to a 1-based page; out-of-range numbers do nothing.
    pub fn navigate_to(&mut self, page_number: u32) -> Option<String> {
        let Some(page) = self.navigator.target(page_number) else {
            tracing::debug!(message = "site.navigate.ignored", page_number);
            return None;
        };
        let url = cache_busted(page, self.clock.now_millis());
        tracing::info!(message = "site.navigate", url = %url, page_number);
        self.host.redirect(&url);
        Some(url)
    }

    /// Override the affirmative target and/or the announced page count.
    pub fn update_page_config(&mut self, next_page: Option<&str>, total_pages: Option<usize>) {
        self.navigator.update(next_page, total_pages);
        tracing::debug!(
            message = "site.page_config",
            next = self.navigator.next_page(),
            total = self.navigator.total_pages(),
        );
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn control(&self) -> &EvasiveControl {
        &self.control
    }

    #[must_use]
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }
}
