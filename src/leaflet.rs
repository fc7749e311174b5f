// Leaflet bindings. Only the handful of calls the location map needs.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};
use yew::Callback;

use crate::behaviors::map_loader::MapBackend;
use crate::components::location_card::{LocationCard, LocationCardProps};
use crate::error::{Result, WiringError};
use crate::model::MapPlan;
use crate::util::to_js;

#[wasm_bindgen]
extern "C" {
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn new_map(container_id: &str) -> std::result::Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: u8) -> LeafletMap;
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> std::result::Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;
}

#[wasm_bindgen]
extern "C" {
    pub type DivIcon;

    #[wasm_bindgen(catch, js_namespace = L, js_name = divIcon)]
    fn div_icon(options: &JsValue) -> std::result::Result<DivIcon, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(latlng: &JsValue, options: &JsValue) -> std::result::Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &Element) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;
}

/// Proof that the Leaflet global was present when the page finished loading.
pub struct Leaflet {
    window: Window,
}

impl Leaflet {
    pub fn detect(window: &Window) -> Option<Self> {
        let Ok(global) = Reflect::get(window, &JsValue::from_str("L")) else {
            return None;
        };
        if global.is_undefined() || global.is_null() {
            return None;
        }
        Some(Self {
            window: window.clone(),
        })
    }
}

impl MapBackend for Leaflet {
    fn mount(&self, plan: &MapPlan) -> Result<()> {
        let center: JsValue = Array::of2(
            &JsValue::from_f64(plan.center.0),
            &JsValue::from_f64(plan.center.1),
        )
        .into();

        let map = new_map(&plan.container_id)?;
        map.set_view(&center, plan.zoom);

        tile_layer(&plan.tile_url, &to_js(&plan.tiles)?)?.add_to(&map);

        let icon = div_icon(&to_js(&plan.icon)?)?;
        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("icon"), &icon)?;
        let pin = marker(&center, &options)?;
        pin.add_to(&map);

        let document = self
            .window
            .document()
            .ok_or_else(|| WiringError::MissingElement("document".into()))?;
        let holder = document.create_element("div")?;
        pin.bind_popup(&holder);

        // Leaflet sizes the popup when it opens, so open it once the card
        // has actually rendered into the holder.
        let on_rendered = if plan.open_popup {
            let pin = pin.clone();
            Some(Callback::from(move |_: ()| {
                pin.open_popup();
            }))
        } else {
            None
        };
        let _ = yew::Renderer::<LocationCard>::with_root_and_props(
            holder,
            LocationCardProps {
                card: plan.popup.clone(),
                on_rendered,
            },
        )
        .render();
        Ok(())
    }
}
