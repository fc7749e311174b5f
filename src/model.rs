//! Plain data for the storefront page: the shop's location record, the
//! information card shown for it, and the description of the map widget
//! built around it.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
    pub owner: String,
    /// Two display lines; more are rendered if configured.
    pub address: Vec<String>,
    /// Degrees/minutes/seconds form shown above the decimal pair.
    pub dms: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            lat: 16.620138,
            lng: 80.543751,
            name: "Akash Computers".to_string(),
            owner: "Manubolu Ramana Rao".to_string(),
            address: vec![
                "JGCV+3G2, Postoffice Road".to_string(),
                "Kondapalli, Andhra Pradesh".to_string(),
            ],
            dms: "16°37'12.5\"N, 80°32'37.5\"E".to_string(),
        }
    }
}

impl Location {
    /// `(16.620138, 80.543751)`
    pub fn decimal_pair(&self) -> String {
        format!("({}, {})", self.lat, self.lng)
    }

    pub fn maps_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardVariant {
    /// Inside the marker popup on the interactive map.
    Popup,
    /// Static replacement for the whole map container.
    Panel,
}

/// Everything the location card displays. Both variants come from the same
/// location so the popup and the fallback panel carry the same facts.
#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
    pub variant: CardVariant,
    pub title: String,
    pub owner: Option<String>,
    pub address: Vec<String>,
    pub dms: String,
    pub decimal: String,
    pub link: String,
}

impl CardContent {
    pub fn for_location(loc: &Location, variant: CardVariant) -> Self {
        Self {
            variant,
            title: loc.name.clone(),
            owner: match variant {
                CardVariant::Popup => Some(loc.owner.clone()),
                CardVariant::Panel => None,
            },
            address: loc.address.clone(),
            dms: loc.dms.clone(),
            decimal: loc.decimal_pair(),
            link: loc.maps_url(),
        }
    }
}

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const PIN_HTML: &str = concat!(
    "<div style=\"background-color: #2563eb; width: 30px; height: 30px; ",
    "border-radius: 50% 50% 50% 0; transform: rotate(-45deg); border: 3px solid white; ",
    "box-shadow: 0 2px 5px rgba(0,0,0,0.3);\"></div>",
    "<div style=\"position: absolute; top: 8px; left: 8px; transform: rotate(45deg); ",
    "color: white; font-weight: bold; font-size: 18px;\">📍</div>",
);

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions {
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IconOptions {
    pub class_name: String,
    pub html: String,
    pub icon_size: [u32; 2],
    pub icon_anchor: [u32; 2],
}

/// How the interactive map is put together.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPlan {
    pub container_id: String,
    pub center: (f64, f64),
    pub zoom: u8,
    pub tile_url: String,
    pub tiles: TileOptions,
    pub icon: IconOptions,
    pub popup: CardContent,
    pub open_popup: bool,
}

impl MapPlan {
    pub fn new(container_id: &str, loc: &Location) -> Self {
        Self {
            container_id: container_id.to_string(),
            center: (loc.lat, loc.lng),
            zoom: 15,
            tile_url: TILE_URL.to_string(),
            tiles: TileOptions {
                attribution: TILE_ATTRIBUTION.to_string(),
                max_zoom: 19,
            },
            icon: IconOptions {
                class_name: "custom-marker".to_string(),
                html: PIN_HTML.to_string(),
                icon_size: [30, 30],
                icon_anchor: [15, 30],
            },
            popup: CardContent::for_location(loc, CardVariant::Popup),
            open_popup: true,
        }
    }
}

/// Element id named by a same-page link, `None` for a bare `#` or any
/// href that is not a fragment.
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(id) if !id.is_empty() => Some(id),
        _ => None,
    }
}

/// Scroll offset that puts `target_top` just below the fixed header.
pub fn scroll_destination(target_top: f64, header_offset: f64) -> f64 {
    target_top - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_matches_the_shop() {
        let loc = Location::default();
        assert_eq!(loc.decimal_pair(), "(16.620138, 80.543751)");
        assert_eq!(
            loc.maps_url(),
            "https://www.google.com/maps?q=16.620138,80.543751"
        );
        assert_eq!(loc.address.len(), 2);
    }

    #[test]
    fn panel_drops_owner_but_keeps_everything_else() {
        let loc = Location::default();
        let popup = CardContent::for_location(&loc, CardVariant::Popup);
        let panel = CardContent::for_location(&loc, CardVariant::Panel);
        assert_eq!(popup.owner.as_deref(), Some("Manubolu Ramana Rao"));
        assert_eq!(panel.owner, None);
        assert_eq!(panel.title, "Akash Computers");
        assert_eq!(panel.address, popup.address);
        assert_eq!(panel.dms, popup.dms);
        assert_eq!(panel.decimal, "(16.620138, 80.543751)");
        assert_eq!(panel.link, popup.link);
    }

    #[test]
    fn plan_centers_on_shop_at_zoom_15() {
        let plan = MapPlan::new("map", &Location::default());
        assert_eq!(plan.center, (16.620138, 80.543751));
        assert_eq!(plan.zoom, 15);
        assert_eq!(plan.tiles.max_zoom, 19);
        assert!(plan.open_popup);
        assert_eq!(plan.popup.variant, CardVariant::Popup);
    }

    #[test]
    fn leaflet_options_use_camel_case_keys() {
        let plan = MapPlan::new("map", &Location::default());
        let tiles = serde_json::to_value(&plan.tiles).unwrap();
        assert_eq!(tiles["maxZoom"], 19);
        assert!(tiles["attribution"].as_str().unwrap().contains("OpenStreetMap"));

        let icon = serde_json::to_value(&plan.icon).unwrap();
        assert_eq!(icon["className"], "custom-marker");
        assert_eq!(icon["iconSize"], serde_json::json!([30, 30]));
        assert_eq!(icon["iconAnchor"], serde_json::json!([15, 30]));
    }

    #[test]
    fn fragment_ids() {
        assert_eq!(fragment_id("#contact"), Some("contact"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("products.html"), None);
    }

    #[test]
    fn destination_sits_below_header() {
        assert_eq!(scroll_destination(870.0, 70.0), 800.0);
        // near the top the browser clamps; we do not
        assert_eq!(scroll_destination(20.0, 70.0), -50.0);
    }
}
