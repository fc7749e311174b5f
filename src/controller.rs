//! Page interaction controller: resolves config and the page handle once,
//! registers each behaviour on its own, and schedules the load-time work.

use crate::behaviors::map_loader::LocationLoader;
use crate::behaviors::{anchor_scroll, fade_in, header_bar, nav_toggle, reveal};
use crate::config::PageConfig;
use crate::error::{Result, WiringError};
use crate::leaflet::Leaflet;
use crate::page::PageHandle;
use crate::util::{after, clog, cwarn, listen};

/// Registration outcome of one behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wiring {
    Active,
    /// The markup lacks an element this behaviour needs.
    Skipped(String),
    Failed(String),
}

impl Wiring {
    pub fn from_result<T>(result: Result<T>) -> Self {
        match result {
            Ok(_) => Wiring::Active,
            Err(WiringError::MissingElement(what)) => Wiring::Skipped(what),
            Err(e) => Wiring::Failed(e.to_string()),
        }
    }
}

fn register<T>(name: &str, result: Result<T>) -> Wiring {
    let wiring = Wiring::from_result(result);
    match &wiring {
        Wiring::Active => clog(&format!("{}: active", name)),
        Wiring::Skipped(what) => cwarn(&format!("{}: skipped, {} not found", name, what)),
        Wiring::Failed(e) => cwarn(&format!("{}: failed to register: {}", name, e)),
    }
    wiring
}

pub fn start() -> Result<()> {
    let window = web_sys::window().ok_or_else(|| WiringError::MissingElement("window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| WiringError::MissingElement("document".into()))?;
    let cfg = PageConfig::load(&document);
    let page = PageHandle::new(window, document, cfg.selectors.clone());
    clog("storefront controller starting");

    let wired = [
        register("navigation toggle", nav_toggle::install(&page)),
        register(
            "anchor scroller",
            anchor_scroll::install(&page, cfg.scroll.header_offset),
        ),
        register(
            "header bar",
            header_bar::install(&page, cfg.scroll.elevate_after),
        ),
        register("reveal animator", reveal::install(&page, &cfg.reveal)),
    ];
    let active = wired.iter().filter(|w| **w == Wiring::Active).count();
    clog(&format!("{}/{} scroll and click behaviours active", active, wired.len()));

    // The wasm module may finish initializing after `load` has fired.
    if page.document.ready_state() == "complete" {
        on_load(&page, &cfg);
    } else {
        let load_page = page.clone();
        listen(&page.window, "load", move |_| on_load(&load_page, &cfg))?;
    }
    Ok(())
}

fn on_load(page: &PageHandle, cfg: &PageConfig) {
    register("page fade-in", fade_in_on_load(page, cfg));
    register("location map", map_on_load(page, cfg));
}

fn fade_in_on_load(page: &PageHandle, cfg: &PageConfig) -> Result<()> {
    let body = page.body()?;
    fade_in::begin(&body);
    after(&page.window, cfg.timing.fade_delay_ms, move || {
        fade_in::finish(&body);
    })
}

fn map_on_load(page: &PageHandle, cfg: &PageConfig) -> Result<()> {
    let loader = LocationLoader::new(
        Leaflet::detect(&page.window),
        &cfg.selectors.map_container_id,
        &cfg.location,
    );
    let container_page = page.clone();
    after(&page.window, cfg.timing.map_delay_ms, move || {
        let outcome = container_page
            .map_container()
            .and_then(|container| loader.load(&container));
        if let Err(e) = outcome {
            cwarn(&format!("location map: {}", e));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_is_a_skip() {
        let wiring = Wiring::from_result::<()>(Err(WiringError::MissingElement(".navbar".into())));
        assert_eq!(wiring, Wiring::Skipped(".navbar".into()));
    }

    #[test]
    fn other_errors_are_failures() {
        let wiring = Wiring::from_result::<()>(Err(WiringError::Js("SyntaxError".into())));
        assert_eq!(wiring, Wiring::Failed("javascript error: SyntaxError".into()));
    }

    #[test]
    fn ok_is_active_whatever_the_payload() {
        assert_eq!(Wiring::from_result(Ok(3usize)), Wiring::Active);
        assert_eq!(Wiring::from_result(Ok(())), Wiring::Active);
    }
}
