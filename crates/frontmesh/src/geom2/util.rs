use nalgebra::Vector2;

use super::types::{Circle, Line};

/// Signed turn from `a` to `b`: `a.y·b.x − a.x·b.y`.
///
/// Positive when `b` is clockwise from `a` in a y-up frame, which is the
/// interior side of the hull's winding.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.y * b.x - a.x * b.y
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_vec(a: Vector2<f64>, b: Vector2<f64>, t: f64) -> Vector2<f64> {
    Vector2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

/// Edge direction rotated by 90°: `(d.y, −d.x)`.
#[inline]
fn normal_of(d: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(d.y, -d.x)
}

/// Circle through three points, from the perpendicular bisectors of
/// `(p0, p1)` and `(p1, p2)`. `None` when the points are collinear.
pub fn circumcircle(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> Option<Circle> {
    let line0 = Line::from_point_and_direction(lerp_vec(p0, p1, 0.5), normal_of(p1 - p0));
    let line1 = Line::from_point_and_direction(lerp_vec(p2, p1, 0.5), normal_of(p2 - p1));
    let center = line0.intersect(&line1)?;
    Some(Circle {
        center,
        radius: (p0 - center).norm(),
    })
}

/// Signed area of a closed polygon (positive when counter-clockwise in a y-up frame).
pub fn signed_area(vertices: &[Vector2<f64>]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for k in 0..n {
        let p = vertices[k];
        let q = vertices[(k + 1) % n];
        twice += p.x * q.y - q.x * p.y;
    }
    0.5 * twice
}
