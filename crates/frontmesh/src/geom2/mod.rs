//! 2D geometry primitives for the frame triangulation.
//!
//! Purpose
//! - Points and vectors are `nalgebra::Vector2<f64>`; this module adds what
//!   nalgebra does not carry: the turn sign used by the hull and the
//!   triangulator, implicit lines, circumcircles, and closed/open disk tests.
//! - Degenerate inputs (parallel lines, collinear triples) come back as `None`
//!   rather than non-finite coordinates.
//!
//! Code cross-refs: `crate::hull::convex_hull`, `crate::triangulate::triangulate`

mod types;
mod util;

pub use types::{Circle, GeomCfg, Line, PointId};
pub use util::{circumcircle, cross, lerp, lerp_vec, signed_area};
