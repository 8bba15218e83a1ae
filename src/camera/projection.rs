//! World-space to screen-space transform.
//!
//! Points are rotated by yaw (about Y), then pitch (about X), then
//! perspective-divided against the near/far planes. Every function reads
//! a [`Projection`] snapshot so a whole frame sees one camera state.

use super::core::Projection;
use crate::util::Vector3D;

/// Depth-attenuated sprite radius for a body of radius `scale`.
///
/// Bodies with `z + scale < 0` lie wholly behind the viewer and get `0`.
/// Otherwise the radius is interpolated linearly from the near/far
/// planes.
#[must_use]
pub fn project_depth_scale(
    projection: &Projection,
    position: Vector3D,
    scale: f64,
) -> f64 {
    let pz = position.z;
    let near_plane = projection.near_plane;
    let far_plane = projection.far_plane;

    if pz + scale < 0.0 {
        return 0.0;
    }

    let t = (pz + near_plane) / (far_plane - near_plane);
    (pz + scale) * t
}

/// Rotate about the Y axis by the snapshot's yaw.
#[must_use]
pub fn rotate_yaw(projection: &Projection, position: Vector3D) -> Vector3D {
    let (sin, cos) = projection.yaw.to_radians().sin_cos();
    Vector3D::new(
        position.x * cos - position.z * sin,
        position.y,
        position.x * sin + position.z * cos,
    )
}

/// Rotate about the X axis by the snapshot's pitch.
#[must_use]
pub fn rotate_pitch(projection: &Projection, position: Vector3D) -> Vector3D {
    let (sin, cos) = projection.pitch.to_radians().sin_cos();
    Vector3D::new(
        position.x,
        position.y * cos - position.z * sin,
        position.y * sin + position.z * cos,
    )
}

/// Apply the perspective matrix row by row to a camera-space point.
///
/// `w` is taken from the camera-space depth before the divide. A zero
/// depth produces non-finite output; [`project`] filters that case.
#[must_use]
pub fn perspective_divide(
    projection: &Projection,
    position: Vector3D,
) -> Vector3D {
    let near_plane = projection.near_plane;
    let far_plane = projection.far_plane;

    let x = (position.x * near_plane) / position.z;
    let y = (position.y * near_plane) / position.z;

    let z = (far_plane + near_plane) / (near_plane - far_plane);
    let w = -position.z / (far_plane - near_plane);

    Vector3D::new(x * w, y * w, z * w)
}

/// Full world-to-screen transform: yaw, pitch, then perspective divide.
///
/// If the rotated point sits at exactly zero depth it is returned
/// without the divide.
#[must_use]
pub fn project(projection: &Projection, position: Vector3D) -> Vector3D {
    let rotated = rotate_pitch(projection, rotate_yaw(projection, position));

    if rotated.z == 0.0 {
        return rotated;
    }

    perspective_divide(projection, rotated)
}
