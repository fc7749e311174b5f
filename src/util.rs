// Console logging plus the timer/listener glue shared by the behaviours

use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, Window};

use crate::error::Result;

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg; // no console under native tests
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Attach `f` to `event` on `target` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, f: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    // Listeners are never removed; the page owns them until navigation.
    cb.forget();
    Ok(())
}

/// One-shot timer. No handle is kept since nothing ever cancels these.
pub fn after<F>(window: &Window, delay_ms: u32, f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let cb = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        timeout_ms(delay_ms),
    )?;
    Ok(())
}

/// `setTimeout` takes a signed delay; saturate rather than wrap negative.
fn timeout_ms(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}

/// Build a plain JS object from a serde struct (round trip through JSON text).
pub fn to_js<T: Serialize>(value: &T) -> Result<JsValue> {
    let raw = serde_json::to_string(value)?;
    Ok(js_sys::JSON::parse(&raw)?)
}
