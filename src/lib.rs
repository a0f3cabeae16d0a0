//! A small **chord intersection engine** for the
//! [Butterfly Theorem](https://en.wikipedia.org/wiki/Butterfly_theorem).
//!
//! Take a circle, a chord PQ with midpoint M, and two more chords AB and CD through M.
//! The wing lines AD and BC cut PQ at X and Y, and M is always the midpoint of XY.
//! [`compute`] derives all nine points from a [`Configuration`] and reports degenerate
//! inputs as [`GeometryError`] values.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for angle sweeps
//! - **serde**: `Serialize`/`Deserialize` for configurations and results
//! - **wasm**: `wasm-bindgen` bindings for browser front ends

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod circle;
pub mod config;
pub mod construction;
pub mod errors;
pub mod float_types;
pub mod intersection;
pub mod sweep;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use circle::Circle;
pub use config::{Configuration, WingPairing};
pub use construction::{ConstructionPoints, Readouts, compute};
pub use errors::{ConfigurationIssue, ErrorKind, GeometryError};
