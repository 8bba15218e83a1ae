// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Screen-space output is f32; body counts feed f64 layout math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
// The projection compares camera-space depth against exactly 0.0
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera and projection core for a minimal 3D particle/rigid-body viewer.
//!
//! Bodies from a simulation are placed in world space and mapped onto a 2D
//! viewport by a hand-rolled mouse-look camera: yaw and pitch rotation,
//! perspective division against near/far planes, and a depth-interpolated
//! sprite radius. Drawing itself is delegated to a host-supplied canvas.
//!
//! # Key entry points
//!
//! - [`viewer::Viewer`] - one viewer session (camera, input, overlay)
//! - [`camera::CameraState`] - yaw/pitch/plane state mutated by input
//! - [`camera::projection`] - the world-to-screen pipeline
//! - [`options::Options`] - TOML-backed session configuration
//!
//! # Frame flow
//!
//! Pointer and wheel events pass through [`input::InputProcessor`] into
//! [`camera::controller`]. At the start of each frame the viewer snapshots
//! the camera into a [`camera::Projection`] so every body in the frame is
//! projected against the same state, then hands the resulting
//! [`render::SpriteInstance`]s and overlay text to the [`render::Canvas`].

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod overlay;
pub mod render;
pub mod scene;
pub mod util;
pub mod viewer;

pub use error::ViewerError;
pub use util::Vector3D;
pub use viewer::{FrameStats, Viewer};
