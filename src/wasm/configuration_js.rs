use crate::config::{Configuration, WingPairing};
use crate::float_types::Real;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct ConfigurationJs {
    pub(crate) inner: Configuration,
}

#[wasm_bindgen]
impl ConfigurationJs {
    /// Angles are in degrees.
    #[wasm_bindgen(constructor)]
    pub fn new(radius: f64, chord_offset: f64, angle_ab: f64, angle_cd: f64) -> Self {
        Self {
            inner: Configuration::new(
                radius as Real,
                chord_offset as Real,
                angle_ab as Real,
                angle_cd as Real,
            ),
        }
    }

    /// The configuration of the classic diagram
    #[wasm_bindgen(js_name = defaultConfiguration)]
    pub fn default_configuration() -> Self {
        Self {
            inner: Configuration::default(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn radius(&self) -> f64 {
        self.inner.radius as f64
    }

    #[wasm_bindgen(setter)]
    pub fn set_radius(&mut self, radius: f64) {
        self.inner.radius = radius as Real;
    }

    #[wasm_bindgen(getter = chordOffset)]
    pub fn chord_offset(&self) -> f64 {
        self.inner.chord_offset as f64
    }

    #[wasm_bindgen(setter = chordOffset)]
    pub fn set_chord_offset(&mut self, chord_offset: f64) {
        self.inner.chord_offset = chord_offset as Real;
    }

    #[wasm_bindgen(getter = angleAB)]
    pub fn angle_ab(&self) -> f64 {
        self.inner.angle_ab as f64
    }

    #[wasm_bindgen(setter = angleAB)]
    pub fn set_angle_ab(&mut self, angle: f64) {
        self.inner.angle_ab = angle as Real;
    }

    #[wasm_bindgen(getter = angleCD)]
    pub fn angle_cd(&self) -> f64 {
        self.inner.angle_cd as f64
    }

    #[wasm_bindgen(setter = angleCD)]
    pub fn set_angle_cd(&mut self, angle: f64) {
        self.inner.angle_cd = angle as Real;
    }

    /// Join A with C and B with D instead of the butterfly pairing
    #[wasm_bindgen(js_name = setCrossedPairing)]
    pub fn set_crossed_pairing(&mut self, crossed: bool) {
        self.inner.pairing = if crossed {
            WingPairing::Crossed
        } else {
            WingPairing::Butterfly
        };
    }
}
