//! Bodies handed to the viewer by the simulation.
//!
//! The physics integrator owns body state; the viewer only reads each
//! body's position and radius once per frame through [`BodySource`].

pub mod presets;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use presets::ScenePreset;

use crate::util::Vector3D;

/// Shape used by the backend when drawing a body.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    /// Tessellated sphere mesh.
    Sphere,
    /// Cube mesh.
    Cube,
    /// Single point drawn as a sprite.
    Particle,
}

/// One simulated body as seen by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// World-space position.
    pub position: Vector3D,
    /// Radius used for sprite sizing.
    pub scale: f64,
    /// Mass (informational; the viewer does not integrate).
    pub mass: f64,
    /// Drawing shape.
    pub kind: BodyKind,
    /// Linear RGBA tint.
    #[serde(default = "default_color")]
    pub color: [f32; 4],
}

const fn default_color() -> [f32; 4] {
    Body::WHITE
}

impl Body {
    /// Opaque white, the tint of bodies created without one.
    pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

    /// Create a white body at `position`.
    #[must_use]
    pub const fn new(
        kind: BodyKind,
        position: Vector3D,
        mass: f64,
        scale: f64,
    ) -> Self {
        Self {
            position,
            scale,
            mass,
            kind,
            color: Self::WHITE,
        }
    }

    /// Replace the tint.
    #[must_use]
    pub const fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }
}

/// Read-only view of the bodies to draw this frame.
pub trait BodySource {
    /// Current bodies, in draw order.
    fn bodies(&self) -> &[Body];
}

/// Plain list of bodies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    bodies: Vec<Body>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one body.
    pub fn push(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Number of bodies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene holds no bodies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Mutable access for the simulation to update positions in place.
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl BodySource for Scene {
    fn bodies(&self) -> &[Body] {
        &self.bodies
    }
}

impl BodySource for [Body] {
    fn bodies(&self) -> &[Body] {
        self
    }
}

impl From<Vec<Body>> for Scene {
    fn from(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }
}

impl Extend<Body> for Scene {
    fn extend<T: IntoIterator<Item = Body>>(&mut self, iter: T) {
        self.bodies.extend(iter);
    }
}

impl FromIterator<Body> for Scene {
    fn from_iter<T: IntoIterator<Item = Body>>(iter: T) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}
