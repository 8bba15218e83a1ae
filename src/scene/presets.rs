//! Canned scenes for demos and manual testing.
//!
//! Randomized presets draw from a caller-supplied RNG so a seeded
//! generator reproduces the same scene.

use std::f64::consts::TAU;

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Body, BodyKind, Scene};
use crate::util::Vector3D;

const CENTER_MASS: f64 = 10_000_000.0;
const PARTICLE_MASS: f64 = 30.0;
const RING_RADIUS: f64 = 20.0;
const RING_PARTICLE_MASS: f64 = 3.0;
const CENTER_COLOR: [f32; 4] = [0.8, 0.3, 0.3, 1.0];
const STREAM_CUBE_COLOR: [f32; 4] = [0.8, 0.2, 0.2, 1.0];

/// Named startup scene.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ScenePreset {
    /// One heavy cube at the origin.
    CenterCube,
    /// One heavy sphere at the origin.
    CenterSphere,
    /// Three particles on a shared horizontal line.
    #[default]
    ParticleStream,
    /// Randomly placed light cubes.
    Debris,
    /// Randomly placed dust particles.
    Dust,
    /// Particles spaced evenly on a circle around the origin.
    Ring,
}

impl ScenePreset {
    /// Build the preset. `count` applies to `Debris`, `Dust`, and `Ring`.
    pub fn build<R: Rng + ?Sized>(self, count: usize, rng: &mut R) -> Scene {
        let scene: Scene = match self {
            Self::CenterCube => vec![center_body(BodyKind::Cube)].into(),
            Self::CenterSphere => vec![center_body(BodyKind::Sphere)].into(),
            Self::ParticleStream => particle_stream().into(),
            Self::Debris => (0..count).map(|_| debris_cube(rng)).collect(),
            Self::Dust => (0..count).map(|_| dust_particle(rng)).collect(),
            Self::Ring => ring(0.0, 0.0, count).into(),
        };
        log::info!("Built {self:?} scene with {} bodies", scene.len());
        scene
    }
}

fn center_body(kind: BodyKind) -> Body {
    Body::new(kind, Vector3D::ZERO, CENTER_MASS, CENTER_MASS / 250_000.0)
        .with_color(CENTER_COLOR)
}

fn particle_stream() -> Vec<Body> {
    vec![
        Body::new(
            BodyKind::Particle,
            Vector3D::new(0.0, 10.0, 0.0),
            PARTICLE_MASS,
            PARTICLE_MASS,
        ),
        Body::new(
            BodyKind::Particle,
            Vector3D::new(-300.0, -20.0, 0.0),
            PARTICLE_MASS,
            PARTICLE_MASS,
        ),
        Body::new(
            BodyKind::Cube,
            Vector3D::new(150.0, 10.0, 0.0),
            PARTICLE_MASS,
            10.0,
        )
        .with_color(STREAM_CUBE_COLOR),
    ]
}

fn debris_cube<R: Rng + ?Sized>(rng: &mut R) -> Body {
    let x = rng.random_range(-50.0..-40.0);
    let y = rng.random_range(-50.0..-40.0);
    let mass = rng.random_range(50.0..100.0);
    Body::new(BodyKind::Cube, Vector3D::new(x, y, 0.0), mass, mass / 20.0)
}

fn dust_particle<R: Rng + ?Sized>(rng: &mut R) -> Body {
    let x = rng.random_range(-200.0..-60.0);
    let y = rng.random_range(-100.0..-50.0);
    let mass = rng.random_range(1.0..5.0);
    Body::new(BodyKind::Particle, Vector3D::new(x, y, 0.0), mass, mass)
}

/// `count` particles evenly spaced on a circle centered at `(cx, cy, 0)`.
#[must_use]
pub fn ring(cx: f64, cy: f64, count: usize) -> Vec<Body> {
    (0..count)
        .map(|i| {
            let angle = TAU * i as f64 / count as f64;
            let (sin, cos) = angle.sin_cos();
            Body::new(
                BodyKind::Particle,
                Vector3D::new(
                    cx + RING_RADIUS * cos,
                    cy + RING_RADIUS * sin,
                    0.0,
                ),
                RING_PARTICLE_MASS,
                RING_PARTICLE_MASS,
            )
        })
        .collect()
}
