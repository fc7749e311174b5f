//! Location widget: an interactive map when the mapping library is loaded,
//! otherwise a static card with the same information.

use web_sys::HtmlElement;

use crate::components::location_card::{LocationCard, LocationCardProps};
use crate::error::Result;
use crate::model::{CardContent, CardVariant, Location, MapPlan};
use crate::util::{clog, cwarn};

/// Something that can put an interactive map into the page.
pub trait MapBackend {
    fn mount(&self, plan: &MapPlan) -> Result<()>;
}

/// Where the static card goes when there is no interactive map.
pub trait FallbackHost {
    fn show_panel(&self, card: CardContent) -> Result<()>;
}

impl FallbackHost for HtmlElement {
    fn show_panel(&self, card: CardContent) -> Result<()> {
        self.set_inner_html("");
        let _ = yew::Renderer::<LocationCard>::with_root_and_props(
            (**self).clone(),
            LocationCardProps {
                card,
                on_rendered: None,
            },
        )
        .render();
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapOutcome {
    Interactive,
    Static,
}

pub struct LocationLoader<B> {
    backend: Option<B>,
    plan: MapPlan,
    panel: CardContent,
}

impl<B: MapBackend> LocationLoader<B> {
    pub fn new(backend: Option<B>, container_id: &str, location: &Location) -> Self {
        Self {
            backend,
            plan: MapPlan::new(container_id, location),
            panel: CardContent::for_location(location, CardVariant::Panel),
        }
    }

    pub fn load<H: FallbackHost + ?Sized>(&self, host: &H) -> Result<MapOutcome> {
        let Some(backend) = &self.backend else {
            clog("map: library not loaded, showing static location panel");
            host.show_panel(self.panel.clone())?;
            return Ok(MapOutcome::Static);
        };
        match backend.mount(&self.plan) {
            Ok(()) => {
                clog("map: interactive map ready");
                Ok(MapOutcome::Interactive)
            }
            Err(e) => {
                cwarn(&format!("map: construction failed ({}), showing static panel", e));
                host.show_panel(self.panel.clone())?;
                Ok(MapOutcome::Static)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WiringError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingBackend {
        mounted: RefCell<Vec<MapPlan>>,
        fail: bool,
    }

    impl MapBackend for &RecordingBackend {
        fn mount(&self, plan: &MapPlan) -> Result<()> {
            if self.fail {
                return Err(WiringError::Js("Map container not found.".into()));
            }
            self.mounted.borrow_mut().push(plan.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingHost {
        panels: RefCell<Vec<CardContent>>,
    }

    impl FallbackHost for RecordingHost {
        fn show_panel(&self, card: CardContent) -> Result<()> {
            self.panels.borrow_mut().push(card);
            Ok(())
        }
    }

    #[test]
    fn absent_library_shows_panel() {
        let host = RecordingHost::default();
        let loader: LocationLoader<&RecordingBackend> =
            LocationLoader::new(None, "map", &Location::default());
        assert_eq!(loader.load(&host).unwrap(), MapOutcome::Static);

        let panels = host.panels.borrow();
        assert_eq!(panels.len(), 1);
        let panel = &panels[0];
        assert_eq!(panel.variant, CardVariant::Panel);
        assert_eq!(panel.title, "Akash Computers");
        assert_eq!(
            panel.address,
            vec!["JGCV+3G2, Postoffice Road", "Kondapalli, Andhra Pradesh"]
        );
        assert_eq!(panel.decimal, "(16.620138, 80.543751)");
        assert_eq!(panel.owner, None);
    }

    #[test]
    fn present_library_mounts_one_map() {
        let backend = RecordingBackend::default();
        let host = RecordingHost::default();
        let loader = LocationLoader::new(Some(&backend), "map", &Location::default());
        assert_eq!(loader.load(&host).unwrap(), MapOutcome::Interactive);

        assert!(host.panels.borrow().is_empty());
        let mounted = backend.mounted.borrow();
        assert_eq!(mounted.len(), 1);
        let plan = &mounted[0];
        assert_eq!(plan.container_id, "map");
        assert_eq!(plan.zoom, 15);
        assert_eq!(plan.center, (16.620138, 80.543751));
        assert!(plan.open_popup);
        assert_eq!(plan.popup.owner.as_deref(), Some("Manubolu Ramana Rao"));
    }

    #[test]
    fn failed_construction_falls_back() {
        let backend = RecordingBackend {
            fail: true,
            ..Default::default()
        };
        let host = RecordingHost::default();
        let loader = LocationLoader::new(Some(&backend), "map", &Location::default());
        assert_eq!(loader.load(&host).unwrap(), MapOutcome::Static);
        assert_eq!(host.panels.borrow().len(), 1);
    }
}
