// Page configuration: compiled-in defaults, optionally overridden by an
// inline `<script type="application/json" id="page-config">` block.

use serde::{Deserialize, Serialize};
use web_sys::Document;

use crate::model::Location;
use crate::util::{clog, cwarn};

pub const CONFIG_ELEMENT_ID: &str = "page-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub nav_trigger: String,
    pub nav_menu: String,
    pub menu_links: String,
    pub fragment_links: String,
    pub header_bar: String,
    pub map_container_id: String,
    pub cards: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_trigger: ".hamburger".to_string(),
            nav_menu: ".nav-menu".to_string(),
            menu_links: ".nav-menu a".to_string(),
            fragment_links: "a[href^=\"#\"]".to_string(),
            header_bar: ".navbar".to_string(),
            map_container_id: "map".to_string(),
            cards: ".product-card".to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Delay between hiding the body on load and fading it back in.
    pub fade_delay_ms: u32,
    /// Delay after load before the map container is measured and filled.
    pub map_delay_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            fade_delay_ms: 100,
            map_delay_ms: 200,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollTuning {
    /// Height of the fixed header that anchor targets must clear.
    pub header_offset: f64,
    /// Offsets strictly above this elevate the header.
    pub elevate_after: f64,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            header_offset: 70.0,
            elevate_after: 100.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealTuning {
    pub threshold: f64,
    pub bottom_margin_px: u32,
}

impl Default for RevealTuning {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
        }
    }
}

impl RevealTuning {
    /// `rootMargin` string for the intersection observer.
    pub fn root_margin(&self) -> String {
        if self.bottom_margin_px == 0 {
            "0px 0px 0px 0px".to_string()
        } else {
            format!("0px 0px -{}px 0px", self.bottom_margin_px)
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub selectors: Selectors,
    pub timing: Timing,
    pub scroll: ScrollTuning,
    pub reveal: RevealTuning,
    pub location: Location,
}

impl PageConfig {
    /// Parse an override block. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Read the inline config block if the page has one, falling back to the
    /// defaults when it is absent or malformed.
    pub fn load(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match raw {
            None => Self::default(),
            Some(raw) => match Self::from_json(&raw) {
                Ok(cfg) => {
                    clog("page config: using inline overrides");
                    cfg
                }
                Err(e) => {
                    cwarn(&format!("page config ignored ({}), using defaults", e));
                    Self::default()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_page() {
        let cfg = PageConfig::default();
        assert_eq!(cfg.timing.fade_delay_ms, 100);
        assert_eq!(cfg.timing.map_delay_ms, 200);
        assert_eq!(cfg.scroll.header_offset, 70.0);
        assert_eq!(cfg.scroll.elevate_after, 100.0);
        assert_eq!(cfg.reveal.threshold, 0.1);
        assert_eq!(cfg.reveal.root_margin(), "0px 0px -50px 0px");
        assert_eq!(cfg.selectors.map_container_id, "map");
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = PageConfig::from_json(
            r#"{"timing": {"map_delay_ms": 350}, "location": {"name": "Branch Office"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.timing.map_delay_ms, 350);
        assert_eq!(cfg.timing.fade_delay_ms, 100);
        assert_eq!(cfg.location.name, "Branch Office");
        assert_eq!(cfg.location.lat, 16.620138);
        assert_eq!(cfg.selectors, Selectors::default());
    }

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn malformed_block_is_an_error() {
        assert!(PageConfig::from_json("{\"timing\": ").is_err());
        assert!(PageConfig::from_json(r#"{"timing": {"map_delay_ms": "soon"}}"#).is_err());
    }

    #[test]
    fn zero_margin_renders_plainly() {
        let tuning = RevealTuning {
            threshold: 0.25,
            bottom_margin_px: 0,
        };
        assert_eq!(tuning.root_margin(), "0px 0px 0px 0px");
    }
}
