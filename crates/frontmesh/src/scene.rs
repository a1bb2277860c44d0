//! Moving point bodies that feed the triangulation each frame.
//!
//! Model
//! - Bodies start uniformly on the canvas with a random heading and a speed
//!   in `[speed_min, speed_max)`.
//! - `Scene::step` integrates positions and wraps each axis once it leaves
//!   the canvas by more than `margin`.
//! - Determinism: `Scene::random` seeds a `StdRng` from a `u64`, so a seed
//!   reproduces the same scene.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom2::lerp;

/// Error type for scene construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    InvalidParams { reason: String },
}

impl SceneError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid scene params: {reason}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Canvas size, body count and motion parameters.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    pub width: f64,
    pub height: f64,
    pub bodies: usize,
    pub speed_min: f64,
    pub speed_max: f64,
    /// Distance past the canvas edge before a body wraps.
    pub margin: f64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            bodies: 128,
            speed_min: 4.0,
            speed_max: 16.0,
            margin: 64.0,
        }
    }
}

impl SceneCfg {
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(SceneError::invalid("canvas size must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(SceneError::invalid("canvas size must be > 0"));
        }
        if !(self.speed_min.is_finite() && self.speed_max.is_finite()) {
            return Err(SceneError::invalid("speed bounds must be finite"));
        }
        if self.speed_min < 0.0 || self.speed_min > self.speed_max {
            return Err(SceneError::invalid("0 <= speed_min <= speed_max required"));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(SceneError::invalid("margin must be finite and >= 0"));
        }
        Ok(())
    }
}

/// A moving point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
}

/// Bodies on a canvas; owns the positions between frames.
#[derive(Clone, Debug)]
pub struct Scene {
    cfg: SceneCfg,
    bodies: Vec<Body>,
}

impl Scene {
    /// Random scene of `cfg.bodies` bodies, reproducible from `seed`.
    pub fn random(cfg: SceneCfg, seed: u64) -> Result<Self, SceneError> {
        cfg.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let bodies = (0..cfg.bodies)
            .map(|_| {
                let position = Vector2::new(
                    lerp(0.0, cfg.width, rng.gen::<f64>()),
                    lerp(0.0, cfg.height, rng.gen::<f64>()),
                );
                let speed = lerp(cfg.speed_min, cfg.speed_max, rng.gen::<f64>());
                Body {
                    position,
                    velocity: unit_direction(&mut rng) * speed,
                }
            })
            .collect();
        Ok(Self { cfg, bodies })
    }

    pub fn from_bodies(cfg: SceneCfg, bodies: Vec<Body>) -> Result<Self, SceneError> {
        cfg.validate()?;
        Ok(Self { cfg, bodies })
    }

    #[inline]
    pub fn cfg(&self) -> &SceneCfg {
        &self.cfg
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Current positions, in body order; body `i` is `PointId(i)` downstream.
    pub fn positions(&self) -> Vec<Vector2<f64>> {
        self.bodies.iter().map(|b| b.position).collect()
    }

    /// Advance every body by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let (w, h, m) = (self.cfg.width, self.cfg.height, self.cfg.margin);
        for body in &mut self.bodies {
            body.position += body.velocity * dt;
            body.position.x = wrap(body.position.x, w, m);
            body.position.y = wrap(body.position.y, h, m);
        }
    }
}

/// One wrap per step: below `-margin` jumps forward by `extent + margin`,
/// at or past `extent + margin` jumps back by `extent - margin`.
fn wrap(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        v + extent + margin
    } else if v >= extent + margin {
        v - (extent - margin)
    } else {
        v
    }
}

/// Uniformly random unit vector.
pub fn unit_direction<R: Rng>(rng: &mut R) -> Vector2<f64> {
    let angle = rng.gen::<f64>() * std::f64::consts::TAU;
    Vector2::new(angle.cos(), angle.sin())
}

/// `count` static points uniform in the central 75 % of a `width × height` canvas.
pub fn random_cloud<R: Rng>(count: usize, width: f64, height: f64, rng: &mut R) -> Vec<Vector2<f64>> {
    (0..count)
        .map(|_| {
            Vector2::new(
                width * 0.125 + lerp(0.0, width * 0.75, rng.gen::<f64>()),
                height * 0.125 + lerp(0.0, height * 0.75, rng.gen::<f64>()),
            )
        })
        .collect()
}
