//! Basic 2D types and tolerances shared by the hull and the triangulator.
//!
//! - `GeomCfg`: centralizes the hull-sort and cocircular tolerances.
//! - `PointId`: identity of a point inside one frame's point slice.
//! - `Line`: implicit line `a·x + b·y + c = 0`.
//! - `Circle`: center plus radius, with closed and open containment.
//!
//! Code cross-refs: `util::{cross, circumcircle}`, `crate::hull`, `crate::triangulate`

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Two hull-sort directions whose angles (radians) from the anchor differ
    /// by less than this are treated as the same direction.
    pub eps_angle: f64,
    /// Relative radius band within which a point counts as lying on a
    /// circumcircle, so cocircular points off by rounding are still seen as
    /// cocircular.
    pub eps_cocircular: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_angle: 1e-5,
            eps_cocircular: 1e-9,
        }
    }
}

/// Index of a point in the frame's point slice.
///
/// Two points with equal coordinates but different ids are different points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub usize);

impl PointId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Implicit line `a·x + b·y + c = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Line {
    /// Line through `p` running along `dir`.
    #[inline]
    pub fn from_point_and_direction(p: Vector2<f64>, dir: Vector2<f64>) -> Self {
        Self {
            a: dir.y,
            b: -dir.x,
            c: -p.x * dir.y + p.y * dir.x,
        }
    }

    #[inline]
    pub fn eval(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    /// Unique intersection point by Cramer's rule. `None` for parallel lines.
    pub fn intersect(&self, other: &Line) -> Option<Vector2<f64>> {
        let det = self.a * other.b - self.b * other.a;
        if det == 0.0 {
            return None;
        }
        let x = (other.c * self.b - self.c * other.b) / det;
        let y = (self.c * other.a - other.c * self.a) / det;
        let p = Vector2::new(x, y);
        if p.x.is_finite() && p.y.is_finite() {
            Some(p)
        } else {
            None
        }
    }
}

/// Circle given by center and radius (radius >= 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    /// Closed disk: boundary points are contained.
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm() <= self.radius
    }

    /// Open disk: boundary points are not contained.
    #[inline]
    pub fn contains_strictly(&self, p: Vector2<f64>) -> bool {
        (p - self.center).norm() < self.radius
    }

    /// Open disk shrunk by the relative tolerance `rel`.
    #[inline]
    pub fn contains_strictly_eps(&self, p: Vector2<f64>, rel: f64) -> bool {
        (p - self.center).norm() < self.radius * (1.0 - rel)
    }

    /// Closed disk grown by the relative tolerance `rel`.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, rel: f64) -> bool {
        (p - self.center).norm() <= self.radius * (1.0 + rel)
    }
}
