//! One frame of geometry: hull, triangles and display edges of a point snapshot.

use nalgebra::Vector2;

use crate::edges::unique_edges;
use crate::geom2::GeomCfg;
use crate::hull::{convex_hull, HullError, Polygon};
use crate::triangulate::{triangulate_with_hull, Edge, Triangle};

/// Geometry derived from one snapshot of point positions.
#[derive(Clone, Debug)]
pub struct Frame {
    pub hull: Polygon,
    pub triangles: Vec<Triangle>,
    pub edges: Vec<Edge>,
}

/// Run hull → triangulation → edge extraction on `points`.
///
/// Nothing is kept between calls; the result depends only on the snapshot.
pub fn compute_frame(points: &[Vector2<f64>], cfg: GeomCfg) -> Result<Frame, HullError> {
    let hull = convex_hull(points, cfg)?;
    let tri = triangulate_with_hull(points, &hull, cfg);
    let edges = unique_edges(&tri.triangles);
    tracing::debug!(
        points = points.len(),
        hull = hull.len(),
        triangles = tri.triangles.len(),
        edges = edges.len(),
        discarded = tri.edges_discarded,
        ties = tri.cocircular_ties,
        "frame"
    );
    Ok(Frame {
        hull,
        triangles: tri.triangles,
        edges,
    })
}
