use crate::float_types::Real;
use crate::intersection::separation;
use nalgebra::Point2;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Point2Js {
    pub(crate) inner: Point2<Real>,
}

#[wasm_bindgen]
impl Point2Js {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> Point2Js {
        Point2Js {
            inner: Point2::new(x as Real, y as Real),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.inner.x as f64
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.inner.y as f64
    }

    /// Euclidean distance to another point
    #[wasm_bindgen(js_name = distanceTo)]
    pub fn distance_to(&self, other: &Point2Js) -> f64 {
        separation(&self.inner, &other.inner) as f64
    }
}

// Rust-only conversions (not visible to JS)
impl From<Point2<Real>> for Point2Js {
    fn from(p: Point2<Real>) -> Self {
        Point2Js { inner: p }
    }
}

impl From<&Point2Js> for Point2<Real> {
    fn from(p: &Point2Js) -> Self {
        p.inner
    }
}
