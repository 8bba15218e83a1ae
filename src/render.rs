//! Frame assembly for the drawing backend.
//!
//! The viewer does not rasterize anything. Each frame it turns bodies into
//! [`SpriteInstance`]s and hands them, together with the overlay text, to
//! a [`Canvas`] implemented by the host.

use crate::camera::projection::{project, project_depth_scale};
use crate::camera::Projection;
use crate::options::FontOptions;
use crate::scene::BodySource;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// Screen-space sprite ready for upload to an instance buffer.
pub struct SpriteInstance {
    /// Projected x/y.
    pub position: [f32; 2],
    /// Depth-interpolated radius.
    pub radius: f32,
    /// Projected z, for depth sorting.
    pub depth: f32,
    /// Linear RGBA tint copied from the body.
    pub color: [f32; 4],
}

/// Drawing backend the viewer renders into.
pub trait Canvas {
    /// Draw one body sprite.
    fn draw_sprite(&mut self, sprite: &SpriteInstance);

    /// Draw one line of overlay text anchored at `(x, y)`.
    fn draw_text(&mut self, x: f64, y: f64, text: &str, font: &FontOptions);
}

/// Project every body and keep the ones that survive depth culling.
///
/// Only strictly positive radii are drawn. The depth interpolation goes
/// negative when `z + near < 0 <= z + scale`, and such bodies are dropped
/// along with the culled ones.
#[must_use]
pub fn build_sprites(
    projection: &Projection,
    source: &(impl BodySource + ?Sized),
) -> Vec<SpriteInstance> {
    source
        .bodies()
        .iter()
        .filter_map(|body| {
            let radius =
                project_depth_scale(projection, body.position, body.scale);
            if radius.is_nan() || radius <= 0.0 {
                return None;
            }
            let screen = project(projection, body.position);
            Some(SpriteInstance {
                position: [screen.x as f32, screen.y as f32],
                radius: radius as f32,
                depth: screen.z as f32,
                color: body.color,
            })
        })
        .collect()
}
