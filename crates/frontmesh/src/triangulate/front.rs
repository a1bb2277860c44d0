use std::collections::VecDeque;

use nalgebra::Vector2;

use super::types::{Edge, Triangle, Triangulation};
use crate::geom2::{circumcircle, cross, GeomCfg, PointId};
use crate::hull::{convex_hull, shadowed, HullError, Polygon};

/// Hull plus triangulation of `points`.
pub fn triangulate(points: &[Vector2<f64>], cfg: GeomCfg) -> Result<Triangulation, HullError> {
    let hull = convex_hull(points, cfg)?;
    Ok(triangulate_with_hull(points, &hull, cfg))
}

/// Triangulate `points` inside an already built `hull` of the same points.
///
/// A hull with fewer than three vertices (collinear input) yields no triangles.
pub fn triangulate_with_hull(
    points: &[Vector2<f64>],
    hull: &Polygon,
    cfg: GeomCfg,
) -> Triangulation {
    let mut out = Triangulation::default();
    if hull.len() < 3 {
        return out;
    }
    let shadow = shadowed(points);

    let mut active: VecDeque<Edge> = VecDeque::new();
    active.push_back(seed_edge(points, &shadow, hull));

    let mut candidates: Vec<PointId> = Vec::with_capacity(points.len());
    while let Some(edge) = active.pop_front() {
        out.edges_processed += 1;
        interior_candidates(points, &shadow, edge, &mut candidates);

        let Some((apex, tie)) = select_apex(points, edge, &candidates, cfg) else {
            out.edges_discarded += 1;
            tracing::trace!(from = edge.from.0, to = edge.to.0, "frontier edge closed");
            continue;
        };
        if tie {
            out.cocircular_ties += 1;
        }

        for new_edge in [Edge::new(edge.from, apex), Edge::new(apex, edge.to)] {
            let reverse = new_edge.reversed();
            match active.iter().position(|e| *e == reverse) {
                Some(k) => {
                    active.remove(k);
                }
                None => active.push_back(new_edge),
            }
        }
        out.triangles.push(Triangle {
            p0: edge.from,
            p1: edge.to,
            p2: apex,
        });
    }
    out
}

/// First hull edge, shortened to the nearest point lying on it.
///
/// The hull scan drops points collinear with its first edge; none of them is
/// ever on the interior side of a frontier edge, so they would be lost.
fn seed_edge(points: &[Vector2<f64>], shadow: &[bool], hull: &Polygon) -> Edge {
    let start = hull.vertices[0];
    let mut end = hull.vertices[1];
    let a = points[start.0];
    let ab = points[end.0] - a;
    let len2 = ab.norm_squared();
    let mut best_t = 1.0;
    for (i, p) in points.iter().enumerate() {
        if shadow[i] || i == start.0 || i == end.0 {
            continue;
        }
        let ap = p - a;
        if cross(ab, ap) != 0.0 {
            continue;
        }
        let t = ab.dot(&ap) / len2;
        if t > 0.0 && t < best_t {
            best_t = t;
            end = PointId(i);
        }
    }
    Edge::new(start, end)
}

/// Points strictly on the interior side of `edge`, in input order.
fn interior_candidates(
    points: &[Vector2<f64>],
    shadow: &[bool],
    edge: Edge,
    out: &mut Vec<PointId>,
) {
    out.clear();
    let a = points[edge.from.0];
    let ab = points[edge.to.0] - a;
    out.extend(
        (0..points.len())
            .filter(|&i| !shadow[i] && i != edge.from.0 && i != edge.to.0)
            .filter(|&i| cross(ab, points[i] - a) > 0.0)
            .map(PointId),
    );
}

/// Apex of the triangle on the interior side of `edge`.
///
/// The empty circle through `edge` is the one through the first candidate
/// whose shrunk open disk holds no other candidate. If no other candidate lies
/// on that circle the apex is unique. Otherwise the candidates on the circle
/// and the edge endpoints form a cocircular ring, and the apex comes from
/// `fan_apex`; the flag is then set.
fn select_apex(
    points: &[Vector2<f64>],
    edge: Edge,
    candidates: &[PointId],
    cfg: GeomCfg,
) -> Option<(PointId, bool)> {
    let a = points[edge.from.0];
    let b = points[edge.to.0];
    let eps = cfg.eps_cocircular;

    let (first, circle) = candidates.iter().enumerate().find_map(|(k, &c)| {
        let circle = circumcircle(a, b, points[c.0])?;
        candidates
            .iter()
            .enumerate()
            .all(|(j, other)| j == k || !circle.contains_strictly_eps(points[other.0], eps))
            .then_some((c, circle))
    })?;

    let ring: Vec<PointId> = candidates
        .iter()
        .copied()
        .filter(|&c| c == first || circle.contains_eps(points[c.0], eps))
        .collect();
    if ring.len() == 1 {
        return Some((first, false));
    }
    Some((fan_apex(points, edge, &ring), true))
}

/// Apex for `edge` when the ring cell is split as a fan from its lowest id.
///
/// The hub depends only on the ring, so every frontier edge reaching the same
/// cell agrees on its triangles. An edge away from the hub closes at the hub.
/// An edge touching the hub closes at the ring point next to its other end,
/// which is the one seen under the smallest angle from the hub.
fn fan_apex(points: &[Vector2<f64>], edge: Edge, ring: &[PointId]) -> PointId {
    let hub = ring
        .iter()
        .copied()
        .fold(edge.from.min(edge.to), PointId::min);
    if hub != edge.from && hub != edge.to {
        return hub;
    }
    let far = if hub == edge.from { edge.to } else { edge.from };
    let o = points[hub.0];
    let d = points[far.0] - o;
    let angle = |id: PointId| {
        let v = points[id.0] - o;
        cross(d, v).abs().atan2(d.dot(&v))
    };
    ring[1..].iter().copied().fold(ring[0], |best, id| {
        if angle(id) < angle(best) {
            id
        } else {
            best
        }
    })
}
