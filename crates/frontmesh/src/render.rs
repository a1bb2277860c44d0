//! Drawing a frame: the canvas interface and an SVG implementation.
//!
//! The library never draws pixels itself. `draw_frame` turns a `Frame` into
//! calls on a `Canvas`; edge shading is a grey level derived from edge length.

use nalgebra::Vector2;
use svg::node::element::{Circle, Line, Polygon};
use svg::{Document, Node};

use crate::frame::Frame;
use crate::geom2::lerp;

/// Edges this long or longer are drawn at full grey (255).
pub const EDGE_GREY_THRESHOLD: f64 = 96.0;

/// The drawing primitives a frame needs.
pub trait Canvas {
    fn clear(&mut self);
    /// Closed outline through `vertices`.
    fn stroke_polygon(&mut self, vertices: &[Vector2<f64>], grey: u8, dashed: bool);
    fn stroke_segment(&mut self, a: Vector2<f64>, b: Vector2<f64>, grey: u8);
    /// Point marker centered at `center`.
    fn fill_marker(&mut self, center: Vector2<f64>);
}

/// Grey level `floor(lerp(0, 255, min(len / threshold, 1)))`.
pub fn edge_grey(len: f64, threshold: f64) -> u8 {
    let t = (len / threshold).min(1.0);
    lerp(0.0, 255.0, t).floor().clamp(0.0, 255.0) as u8
}

/// Drawing options.
#[derive(Clone, Copy, Debug)]
pub struct DrawOpts {
    /// Dashed hull outline under the edges.
    pub show_hull: bool,
    pub edge_threshold: f64,
}

impl Default for DrawOpts {
    fn default() -> Self {
        Self {
            show_hull: false,
            edge_threshold: EDGE_GREY_THRESHOLD,
        }
    }
}

/// Clear, (hull), edges, then one marker per point.
pub fn draw_frame<C: Canvas>(canvas: &mut C, points: &[Vector2<f64>], frame: &Frame, opts: DrawOpts) {
    canvas.clear();
    if opts.show_hull {
        canvas.stroke_polygon(&frame.hull.positions(points), 0x88, true);
    }
    for e in &frame.edges {
        let grey = edge_grey(e.length(points), opts.edge_threshold);
        canvas.stroke_segment(points[e.from.0], points[e.to.0], grey);
    }
    for p in points {
        canvas.fill_marker(*p);
    }
}

const MARKER_OUTER_RADIUS: f64 = 6.0;
const MARKER_INNER_RADIUS: f64 = 4.0;
const MARKER_COLOR: &str = "#666666";

/// Canvas that accumulates SVG elements.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    width: f64,
    height: f64,
    document: Document,
}

impl SvgCanvas {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            document: blank_document(width, height),
        }
    }

    /// Complete SVG document.
    pub fn finish(&self) -> String {
        self.document.to_string()
    }
}

fn blank_document(width: f64, height: f64) -> Document {
    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0.0, 0.0, width, height))
}

fn grey_hex(grey: u8) -> String {
    format!("#{grey:02x}{grey:02x}{grey:02x}")
}

impl Canvas for SvgCanvas {
    fn clear(&mut self) {
        self.document = blank_document(self.width, self.height);
    }

    fn stroke_polygon(&mut self, vertices: &[Vector2<f64>], grey: u8, dashed: bool) {
        if vertices.is_empty() {
            return;
        }
        let points: Vec<String> = vertices
            .iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect();
        let mut outline = Polygon::new()
            .set("points", points.join(" "))
            .set("fill", "none")
            .set("stroke", grey_hex(grey))
            .set("stroke-width", 1);
        if dashed {
            outline = outline.set("stroke-dasharray", "1 1");
        }
        self.document.append(outline);
    }

    fn stroke_segment(&mut self, a: Vector2<f64>, b: Vector2<f64>, grey: u8) {
        self.document.append(
            Line::new()
                .set("x1", a.x)
                .set("y1", a.y)
                .set("x2", b.x)
                .set("y2", b.y)
                .set("stroke", grey_hex(grey))
                .set("stroke-width", 1),
        );
    }

    fn fill_marker(&mut self, center: Vector2<f64>) {
        self.document.append(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", MARKER_OUTER_RADIUS)
                .set("fill", "#ffffff")
                .set("stroke", MARKER_COLOR)
                .set("stroke-width", 1),
        );
        self.document.append(
            Circle::new()
                .set("cx", center.x)
                .set("cy", center.y)
                .set("r", MARKER_INNER_RADIUS)
                .set("fill", MARKER_COLOR),
        );
    }
}
