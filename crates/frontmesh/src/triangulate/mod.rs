//! Advancing-front triangulation inside a convex hull.
//!
//! Purpose
//! - Grow triangles from one hull edge across the point set, one frontier
//!   edge at a time, picking for each edge the first point on its interior
//!   side whose circumcircle through the edge holds no other such point.
//!
//! Model
//! - The frontier is a FIFO queue of directed edges. Each accepted triangle
//!   either closes an edge already waiting in reverse, or appends a new one.
//! - The apex is the candidate on the empty circle through the edge. When
//!   several candidates share that circle (a cocircular cell, such as a
//!   lattice square) the cell is split as a fan from its lowest point id.
//!   Every edge of the cell sees the same ring, so all of them pick triangles
//!   of the same fan and the result never overlaps. Which diagonals appear
//!   still depends on the input order of the points.
//!
//! Code cross-refs: `crate::hull::convex_hull`, `crate::geom2::circumcircle`,
//! `crate::edges::unique_edges`.

mod front;
mod types;

pub use front::{triangulate, triangulate_with_hull};
pub use types::{Edge, Triangle, Triangulation};
