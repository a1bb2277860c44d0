//! Edges, triangles and the run result of the advancing front.

use nalgebra::Vector2;

use crate::geom2::{circumcircle, Circle, PointId};

/// Directed edge between two point ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: PointId,
    pub to: PointId,
}

impl Edge {
    #[inline]
    pub fn new(from: PointId, to: PointId) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Same endpoint set, either direction.
    #[inline]
    pub fn same_undirected(&self, other: &Edge) -> bool {
        (self.from == other.from && self.to == other.to)
            || (self.from == other.to && self.to == other.from)
    }

    /// Endpoint pair with the smaller id first.
    #[inline]
    pub fn undirected_key(&self) -> (PointId, PointId) {
        if self.from <= self.to {
            (self.from, self.to)
        } else {
            (self.to, self.from)
        }
    }

    pub fn length(&self, points: &[Vector2<f64>]) -> f64 {
        (points[self.to.0] - points[self.from.0]).norm()
    }
}

/// Triangle `(p0, p1, p2)`: `p0 → p1` is the frontier edge it was grown
/// from and `p2` the apex chosen for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub p0: PointId,
    pub p1: PointId,
    pub p2: PointId,
}

impl Triangle {
    #[inline]
    pub fn ids(&self) -> [PointId; 3] {
        [self.p0, self.p1, self.p2]
    }

    pub fn positions(&self, points: &[Vector2<f64>]) -> [Vector2<f64>; 3] {
        [points[self.p0.0], points[self.p1.0], points[self.p2.0]]
    }

    /// Unsigned area.
    pub fn area(&self, points: &[Vector2<f64>]) -> f64 {
        let [a, b, c] = self.positions(points);
        0.5 * crate::geom2::cross(b - a, c - a).abs()
    }

    pub fn circumcircle(&self, points: &[Vector2<f64>]) -> Option<Circle> {
        let [a, b, c] = self.positions(points);
        circumcircle(a, b, c)
    }
}

/// Triangles of one run plus frontier counters.
#[derive(Clone, Debug, Default)]
pub struct Triangulation {
    pub triangles: Vec<Triangle>,
    /// Frontier edges popped from the queue.
    pub edges_processed: usize,
    /// Popped edges that found no apex (boundary-closing edges).
    pub edges_discarded: usize,
    /// Accepted apexes chosen by the cocircular fan rule.
    pub cocircular_ties: usize,
}
