use crate::errors::GeometryError;
use wasm_bindgen::prelude::*;

pub mod configuration_js;
pub mod construction_js;
pub mod point_js;

fn to_js_error(err: GeometryError) -> JsValue {
    JsValue::from_str(&format!("{}: {}", err.kind(), err))
}
