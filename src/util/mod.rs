//! Shared math utilities.

pub mod vector;

pub use vector::Vector3D;
