use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum WiringError {
    #[error("missing element: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<JsValue> for WiringError {
    fn from(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        WiringError::Js(msg)
    }
}

pub type Result<T> = std::result::Result<T, WiringError>;
