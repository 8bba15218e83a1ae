//! Camera system for the scene viewer.
//!
//! Holds the mouse-look camera state, the controller operations that
//! mutate it, and the projection pipeline that maps world-space body
//! positions to screen space.

/// Pointer-look and plane-dolly operations.
pub mod controller;
/// Camera state, tunable constants, and per-frame projection snapshot.
pub mod core;
/// Yaw/pitch rotation, perspective divide, and depth-scale interpolation.
pub mod projection;

pub use controller::CameraCommand;
pub use self::core::{CameraState, Projection};
