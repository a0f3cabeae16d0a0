use crate::construction::{ConstructionPoints, compute};
use crate::wasm::{configuration_js::ConfigurationJs, point_js::Point2Js, to_js_error};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConstructionJs {
    pub(crate) inner: ConstructionPoints,
}

#[wasm_bindgen]
impl ConstructionJs {
    /// Compute the construction, throwing a string prefixed with the error kind
    /// (e.g. `"InvalidConfiguration: ..."`) when the configuration is rejected.
    #[wasm_bindgen(js_name = compute)]
    pub fn compute_js(config: &ConfigurationJs) -> Result<ConstructionJs, JsValue> {
        compute(&config.inner)
            .map(|inner| ConstructionJs { inner })
            .map_err(to_js_error)
    }

    #[wasm_bindgen(getter)]
    pub fn p(&self) -> Point2Js {
        self.inner.p.into()
    }

    #[wasm_bindgen(getter)]
    pub fn q(&self) -> Point2Js {
        self.inner.q.into()
    }

    #[wasm_bindgen(getter)]
    pub fn m(&self) -> Point2Js {
        self.inner.m.into()
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> Point2Js {
        self.inner.a.into()
    }

    #[wasm_bindgen(getter)]
    pub fn b(&self) -> Point2Js {
        self.inner.b.into()
    }

    #[wasm_bindgen(getter)]
    pub fn c(&self) -> Point2Js {
        self.inner.c.into()
    }

    #[wasm_bindgen(getter)]
    pub fn d(&self) -> Point2Js {
        self.inner.d.into()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> Point2Js {
        self.inner.x.into()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> Point2Js {
        self.inner.y.into()
    }

    #[wasm_bindgen(getter)]
    pub fn xm(&self) -> f64 {
        self.inner.xm() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn my(&self) -> f64 {
        self.inner.my() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn residual(&self) -> f64 {
        self.inner.invariant_residual() as f64
    }

    /// All points and readouts as a JSON string
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        let value = serde_json::json!({
            "points": self.inner,
            "readouts": self.inner.readouts(),
        });
        serde_json::to_string(&value).map_err(|e| {
            JsValue::from_str(&format!("Failed to stringify construction as JSON: {}", e))
        })
    }
}
