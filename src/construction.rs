//! The butterfly construction.
//!
//! Given a [`Configuration`], [`compute`] derives the fixed chord PQ with midpoint M,
//! the two movable chords AB and CD through M, and the points X and Y where the
//! wing lines cross PQ. The theorem guarantees `|XM| == |MY|`.
//!
//! # Example
//! ```
//! use butterfly::float_types::INVARIANT_TOLERANCE;
//! use butterfly::{Configuration, compute};
//!
//! let points = compute(&Configuration::new(160.0, 50.0, 60.0, 120.0)).unwrap();
//! assert!(points.satisfies_invariant(INVARIANT_TOLERANCE));
//! ```

use crate::config::{Configuration, WingPairing};
use crate::errors::GeometryError;
use crate::float_types::{Real, tolerance};
use crate::intersection::{line_horizontal_intersection, separation};
use nalgebra::Point2;

/// All nine points of one construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructionPoints {
    pub p: Point2<Real>,
    pub q: Point2<Real>,
    pub m: Point2<Real>,
    pub a: Point2<Real>,
    pub b: Point2<Real>,
    pub c: Point2<Real>,
    pub d: Point2<Real>,
    pub x: Point2<Real>,
    pub y: Point2<Real>,
}

/// Scalar distances a caller displays next to the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Readouts {
    pub xm: Real,
    pub my: Real,
    pub residual: Real,
}

/// Compute the full construction for `config`.
pub fn compute(config: &Configuration) -> Result<ConstructionPoints, GeometryError> {
    let result = build(config);
    match &result {
        Ok(points) => log::trace!(
            "butterfly construction {:?}: XM = {}, MY = {}",
            config,
            points.xm(),
            points.my()
        ),
        Err(err) => log::debug!("butterfly construction {:?} rejected: {}", config, err),
    }
    result
}

fn build(config: &Configuration) -> Result<ConstructionPoints, GeometryError> {
    let circle = config.validate()?;
    let offset = config.chord_offset;

    let m = Point2::new(0.0, offset);
    let [p, q] = circle.horizontal_chord(offset)?;
    let [a, b] = circle.chord_through(offset, config.angle_ab_radians())?;
    let [c, d] = circle.chord_through(offset, config.angle_cd_radians())?;

    let (x, y) = match config.pairing {
        WingPairing::Butterfly => (
            line_horizontal_intersection(&a, &d, offset)?,
            line_horizontal_intersection(&b, &c, offset)?,
        ),
        WingPairing::Crossed => (
            line_horizontal_intersection(&a, &c, offset)?,
            line_horizontal_intersection(&b, &d, offset)?,
        ),
    };

    Ok(ConstructionPoints {
        p,
        q,
        m,
        a,
        b,
        c,
        d,
        x,
        y,
    })
}

impl ConstructionPoints {
    pub fn xm(&self) -> Real {
        separation(&self.x, &self.m)
    }

    pub fn my(&self) -> Real {
        separation(&self.m, &self.y)
    }

    pub fn chord_pq_length(&self) -> Real {
        separation(&self.p, &self.q)
    }

    /// `| |XM| - |MY| |` relative to the larger of the two.
    ///
    /// Zero when both distances are below `tolerance() · |PQ|`, where the ratio
    /// is rounding noise rather than geometry.
    pub fn invariant_residual(&self) -> Real {
        let (xm, my) = (self.xm(), self.my());
        let scale = xm.max(my);
        if scale <= tolerance() * self.chord_pq_length() {
            return 0.0;
        }
        (xm - my).abs() / scale
    }

    pub fn satisfies_invariant(&self, relative_tolerance: Real) -> bool {
        self.invariant_residual() <= relative_tolerance
    }

    pub fn readouts(&self) -> Readouts {
        Readouts {
            xm: self.xm(),
            my: self.my(),
            residual: self.invariant_residual(),
        }
    }

    /// The labelled points in drawing order.
    pub fn points(&self) -> [(char, Point2<Real>); 9] {
        [
            ('P', self.p),
            ('Q', self.q),
            ('M', self.m),
            ('A', self.a),
            ('B', self.b),
            ('C', self.c),
            ('D', self.d),
            ('X', self.x),
            ('Y', self.y),
        ]
    }
}
