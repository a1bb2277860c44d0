//! Convex hull by anchor point, angular sort and a monotonic-turn scan.
//!
//! Model
//! - Anchor: the point with the largest `y` (ties: smallest `x`). It always
//!   lies on the hull.
//! - Sort the rest by descending cosine against `(1, 0)` as seen from the
//!   anchor. The sort key is the angle itself, since cosines bunch up near
//!   `-1`; directions within `GeomCfg::eps_angle` radians go nearest first.
//! - Scan with a stack, popping while the last three points fail to make a
//!   strict turn in `cross` sign convention.
//!
//! The resulting polygon is clockwise in a y-up frame, so the interior lies on
//! the positive-`cross` side of every directed hull edge.
//!
//! Points whose coordinates repeat those of a lower-index point are shadowed:
//! they keep their id but take no part in the hull or the triangulation.

use std::collections::HashMap;
use std::fmt;

use nalgebra::Vector2;

use crate::geom2::{cross, signed_area, GeomCfg, PointId};

/// Errors surfaced by the hull builder.
#[derive(Debug, Clone, PartialEq)]
pub enum HullError {
    /// Fewer than three points with distinct coordinates.
    NeedPoints { got: usize },
    /// A point has a NaN or infinite coordinate.
    NonFinite { id: PointId },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::NeedPoints { got } => {
                write!(f, "need at least 3 distinct points, got {got}")
            }
            HullError::NonFinite { id } => {
                write!(f, "point {} has a non-finite coordinate", id.0)
            }
        }
    }
}

impl std::error::Error for HullError {}

/// Closed polygon over point ids, in hull winding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<PointId>,
}

impl Polygon {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn positions(&self, points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        self.vertices.iter().map(|id| points[id.0]).collect()
    }

    /// Unsigned enclosed area.
    pub fn area(&self, points: &[Vector2<f64>]) -> f64 {
        signed_area(&self.positions(points)).abs()
    }

    /// True if `p` is inside or within `tol` of the boundary.
    pub fn contains(&self, points: &[Vector2<f64>], p: Vector2<f64>, tol: f64) -> bool {
        let n = self.len();
        if n < 3 {
            return false;
        }
        (0..n).all(|k| {
            let a = points[self.vertices[k].0];
            let b = points[self.vertices[(k + 1) % n].0];
            let edge = b - a;
            let len = edge.norm();
            len == 0.0 || cross(edge, p - a) / len >= -tol
        })
    }
}

/// Marks every point whose exact coordinates already occurred at a lower index.
pub fn shadowed(points: &[Vector2<f64>]) -> Vec<bool> {
    // -0.0 and 0.0 are the same coordinate.
    fn key(v: f64) -> u64 {
        if v == 0.0 {
            0
        } else {
            v.to_bits()
        }
    }
    let mut seen: HashMap<(u64, u64), usize> = HashMap::with_capacity(points.len());
    points
        .iter()
        .enumerate()
        .map(|(i, p)| *seen.entry((key(p.x), key(p.y))).or_insert(i) != i)
        .collect()
}

/// Build the convex hull of `points`.
pub fn convex_hull(points: &[Vector2<f64>], cfg: GeomCfg) -> Result<Polygon, HullError> {
    if let Some(i) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFinite { id: PointId(i) });
    }
    let shadow = shadowed(points);
    let distinct: Vec<PointId> = (0..points.len())
        .filter(|&i| !shadow[i])
        .map(PointId)
        .collect();
    if distinct.len() < 3 {
        return Err(HullError::NeedPoints {
            got: distinct.len(),
        });
    }

    let anchor = anchor_of(points, &distinct);
    let sorted = angular_order(points, &distinct, anchor, cfg.eps_angle);

    let mut stack: Vec<PointId> = Vec::with_capacity(sorted.len());
    stack.extend_from_slice(&sorted[..2]);
    for &id in &sorted[2..] {
        let p = points[id.0];
        while stack.len() > 1 {
            let top = points[stack[stack.len() - 1].0];
            let second = points[stack[stack.len() - 2].0];
            if cross(top - second, p - second) > 0.0 {
                break;
            }
            stack.pop();
        }
        stack.push(id);
    }

    Ok(Polygon { vertices: stack })
}

/// Largest `y`, ties by smallest `x`, then lowest id.
fn anchor_of(points: &[Vector2<f64>], ids: &[PointId]) -> PointId {
    let mut best = ids[0];
    for &id in &ids[1..] {
        let p = points[id.0];
        let b = points[best.0];
        if p.y > b.y || (p.y == b.y && p.x < b.x) {
            best = id;
        }
    }
    best
}

/// Anchor first, then by angle from the anchor, which is descending cosine
/// against `(1, 0)` since every point lies on or below the anchor. Points
/// within `eps` radians of the first point of their run go in ascending
/// distance.
fn angular_order(
    points: &[Vector2<f64>],
    ids: &[PointId],
    anchor: PointId,
    eps: f64,
) -> Vec<PointId> {
    let origin = points[anchor.0];
    let mut keyed: Vec<(PointId, f64, f64)> = ids
        .iter()
        .filter(|&&id| id != anchor)
        .map(|&id| {
            let v = points[id.0] - origin;
            (id, v.y.abs().atan2(v.x), v.norm())
        })
        .collect();
    keyed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut start = 0;
    while start < keyed.len() {
        let head = keyed[start].1;
        let mut end = start + 1;
        while end < keyed.len() && keyed[end].1 - head < eps {
            end += 1;
        }
        if end - start > 1 {
            keyed[start..end].sort_by(|a, b| a.2.total_cmp(&b.2));
        }
        start = end;
    }

    std::iter::once(anchor)
        .chain(keyed.into_iter().map(|(id, _, _)| id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use proptest::prelude::*;

    fn cfg() -> GeomCfg {
        GeomCfg::default()
    }

    #[test]
    fn unit_square_all_four_in_order() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        let hull = convex_hull(&pts, cfg()).unwrap();
        assert_eq!(
            hull.vertices,
            vec![PointId(3), PointId(2), PointId(1), PointId(0)]
        );
        // clockwise in y-up
        assert!(signed_area(&hull.positions(&pts)) < 0.0);
    }

    #[test]
    fn triangle_is_its_own_hull() {
        let pts = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 2.0]];
        let hull = convex_hull(&pts, cfg()).unwrap();
        assert_eq!(hull.vertices, vec![PointId(2), PointId(1), PointId(0)]);
    }

    #[test]
    fn interior_and_edge_points_are_dropped() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
            vector![2.0, 2.0],
            vector![2.0, 0.0],
            vector![4.0, 1.0],
        ];
        let hull = convex_hull(&pts, cfg()).unwrap();
        let mut ids = hull.vertices.clone();
        ids.sort();
        assert_eq!(ids, vec![PointId(0), PointId(1), PointId(2), PointId(3)]);
    }

    #[test]
    fn anchor_tie_prefers_smallest_x() {
        let pts = vec![
            vector![3.0, 5.0],
            vector![1.0, 5.0],
            vector![2.0, 0.0],
        ];
        assert_eq!(anchor_of(&pts, &[PointId(0), PointId(1), PointId(2)]), PointId(1));
    }

    #[test]
    fn duplicates_are_shadowed() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![-0.0, 0.0],
        ];
        assert_eq!(
            shadowed(&pts),
            vec![false, false, false, false, true, true]
        );
        let hull = convex_hull(&pts, cfg()).unwrap();
        assert_eq!(hull.len(), 4);
        assert!(!hull.vertices.contains(&PointId(4)));
        assert!(!hull.vertices.contains(&PointId(5)));
    }

    #[test]
    fn too_few_distinct_points() {
        let pts = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![1.0, 0.0]];
        assert_eq!(
            convex_hull(&pts, cfg()),
            Err(HullError::NeedPoints { got: 2 })
        );
        assert_eq!(
            convex_hull(&[], cfg()),
            Err(HullError::NeedPoints { got: 0 })
        );
    }

    #[test]
    fn non_finite_rejected() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![f64::NAN, 0.0],
            vector![1.0, 1.0],
        ];
        assert_eq!(
            convex_hull(&pts, cfg()),
            Err(HullError::NonFinite { id: PointId(1) })
        );
    }

    #[test]
    fn collinear_input_gives_segment() {
        let pts = vec![
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
            vector![3.0, 3.0],
        ];
        let hull = convex_hull(&pts, cfg()).unwrap();
        assert_eq!(hull.vertices, vec![PointId(3), PointId(0)]);
    }

    #[test]
    fn near_collinear_rays_keep_the_outer_point() {
        // Seen from the anchor, ids 3 and 4 point almost straight left. Their
        // cosines differ by less than 1e-5 while the angles differ by 3e-3,
        // and 3 lies above the segment from 4 back to the anchor.
        let pts = vec![
            vector![0.0, 0.0],
            vector![60.0, -40.0],
            vector![0.0, -60.0],
            vector![-50.0, -0.05],
            vector![-100.0, -0.4],
        ];
        let hull = convex_hull(&pts, cfg()).unwrap();
        assert_eq!(
            hull.vertices,
            vec![PointId(0), PointId(1), PointId(2), PointId(4), PointId(3)]
        );
        for p in &pts {
            assert!(hull.contains(&pts, *p, 1e-9));
        }
    }

    #[test]
    fn tie_runs_do_not_chain() {
        // 1 and 2 are 6e-6 rad apart, as are 2 and 3; 1 and 3 are not tied.
        let pts = vec![
            vector![0.0, 0.0],
            vector![500.0, 0.0],
            vector![1000.0, -0.006],
            vector![10.0, -0.00012],
        ];
        let ids: Vec<PointId> = (0..4).map(PointId).collect();
        assert_eq!(
            angular_order(&pts, &ids, PointId(0), cfg().eps_angle),
            vec![PointId(0), PointId(1), PointId(2), PointId(3)]
        );
    }

    #[test]
    fn scene_frames_stay_inside_hull() {
        use crate::scene::{Scene, SceneCfg};
        for seed in 0..30 {
            let mut scene = Scene::random(SceneCfg::default(), seed).unwrap();
            for frame in 0..20 {
                scene.step(1.0);
                let pts = scene.positions();
                let hull = convex_hull(&pts, cfg()).unwrap();
                for (i, p) in pts.iter().enumerate() {
                    assert!(
                        hull.contains(&pts, *p, 1e-7),
                        "seed {seed} frame {frame}: point {i} outside hull"
                    );
                }
            }
        }
    }

    /// Small integer grid: distinct directions from the anchor differ in
    /// angle by more than the tie tolerance, and duplicates do occur.
    fn cloud(max: usize) -> impl Strategy<Value = Vec<Vector2<f64>>> {
        prop::collection::vec((-15i32..=15, -15i32..=15), 3..max).prop_map(|v| {
            v.into_iter()
                .map(|(x, y)| Vector2::new(x as f64, y as f64))
                .collect()
        })
    }

    fn non_degenerate(pts: &[Vector2<f64>]) -> bool {
        pts.iter()
            .any(|p| pts.iter().any(|q| cross(q - pts[0], p - pts[0]) != 0.0))
    }

    proptest! {
        #[test]
        fn every_point_inside_hull(pts in cloud(60)) {
            prop_assume!(non_degenerate(&pts));
            let hull = convex_hull(&pts, cfg()).unwrap();
            prop_assert!(hull.len() >= 3);
            for p in &pts {
                prop_assert!(hull.contains(&pts, *p, 1e-9));
            }
        }

        #[test]
        fn hull_has_no_reflex_vertex(pts in cloud(60)) {
            prop_assume!(non_degenerate(&pts));
            let hull = convex_hull(&pts, cfg()).unwrap();
            let pos = hull.positions(&pts);
            let n = pos.len();
            for k in 0..n {
                let a = pos[k];
                let b = pos[(k + 1) % n];
                let c = pos[(k + 2) % n];
                prop_assert!(cross(b - a, c - a) >= 0.0);
            }
        }
    }
}
