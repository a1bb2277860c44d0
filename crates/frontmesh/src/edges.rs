//! Unique undirected edges of a triangle set, for display.

use std::collections::HashSet;

use crate::geom2::PointId;
use crate::triangulate::{Edge, Triangle};

/// Distinct edges across all triangles, in first-seen order.
///
/// Each triangle offers `(p1, p0)`, `(p2, p1)`, `(p0, p2)`; an edge is kept
/// only if no earlier edge has the same endpoint pair in either direction.
pub fn unique_edges(triangles: &[Triangle]) -> Vec<Edge> {
    let mut seen: HashSet<(PointId, PointId)> = HashSet::with_capacity(triangles.len() * 2);
    let mut out = Vec::with_capacity(triangles.len() * 2);
    for t in triangles {
        for e in [
            Edge::new(t.p1, t.p0),
            Edge::new(t.p2, t.p1),
            Edge::new(t.p0, t.p2),
        ] {
            if seen.insert(e.undirected_key()) {
                out.push(e);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::GeomCfg;
    use crate::triangulate::triangulate;
    use nalgebra::{vector, Vector2};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn tri(a: usize, b: usize, c: usize) -> Triangle {
        Triangle {
            p0: PointId(a),
            p1: PointId(b),
            p2: PointId(c),
        }
    }

    #[test]
    fn single_triangle_reversed_orientation() {
        let edges = unique_edges(&[tri(0, 1, 2)]);
        assert_eq!(
            edges,
            vec![
                Edge::new(PointId(1), PointId(0)),
                Edge::new(PointId(2), PointId(1)),
                Edge::new(PointId(0), PointId(2)),
            ]
        );
    }

    #[test]
    fn shared_edge_counted_once() {
        let edges = unique_edges(&[tri(3, 2, 0), tri(0, 2, 1)]);
        assert_eq!(edges.len(), 5);
        let diagonal = Edge::new(PointId(0), PointId(2));
        assert_eq!(edges.iter().filter(|e| e.same_undirected(&diagonal)).count(), 1);
    }

    #[test]
    fn square_and_triangle_scenarios() {
        let square = vec![
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 1.0],
        ];
        let t = triangulate(&square, GeomCfg::default()).unwrap();
        assert_eq!(unique_edges(&t.triangles).len(), 5);

        let three = vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![1.0, 2.0]];
        let t = triangulate(&three, GeomCfg::default()).unwrap();
        assert_eq!(unique_edges(&t.triangles).len(), 3);
    }

    #[test]
    fn extraction_is_idempotent_and_matches_euler() {
        let mut rng = StdRng::seed_from_u64(5);
        let pts: Vec<Vector2<f64>> = (0..50)
            .map(|_| vector![rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)])
            .collect();
        let t = triangulate(&pts, GeomCfg::default()).unwrap();
        let first = unique_edges(&t.triangles);
        let second = unique_edges(&t.triangles);
        assert_eq!(first.len(), second.len());
        let keys = |v: &[Edge]| -> HashSet<(PointId, PointId)> {
            v.iter().map(Edge::undirected_key).collect()
        };
        assert_eq!(keys(&first), keys(&second));
        // V - E + F = 2 with the outer face
        assert_eq!(pts.len() + t.triangles.len() + 1, first.len() + 2);
    }
}
