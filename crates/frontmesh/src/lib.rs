//! Per-frame Delaunay-style triangulation of a moving 2D point set.
//!
//! Pipeline
//! - `hull::convex_hull`: anchor, angular sort, monotonic-turn scan.
//! - `triangulate`: advancing front from one hull edge, empty-circumcircle
//!   apex selection.
//! - `edges::unique_edges`: undirected edges for display.
//! - `frame::compute_frame` runs all three on a snapshot of positions.
//!
//! Around it, `scene` moves the points and `render` draws a frame through the
//! `Canvas` trait. Points are identified by their index (`PointId`), never by
//! coordinates.

pub mod edges;
pub mod frame;
pub mod geom2;
pub mod hull;
pub mod render;
pub mod scene;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::edges::unique_edges;
    pub use crate::frame::{compute_frame, Frame};
    pub use crate::geom2::{circumcircle, cross, Circle, GeomCfg, Line, PointId};
    pub use crate::hull::{convex_hull, HullError, Polygon};
    pub use crate::render::{draw_frame, edge_grey, Canvas, DrawOpts, SvgCanvas};
    pub use crate::scene::{random_cloud, Body, Scene, SceneCfg, SceneError};
    pub use crate::triangulate::{triangulate, Edge, Triangle, Triangulation};
    pub use nalgebra::Vector2 as Vec2;
}
