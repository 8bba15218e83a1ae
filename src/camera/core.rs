use crate::error::ViewerError;
use crate::options::CameraOptions;
use crate::util::Vector3D;

/// Degrees of yaw/pitch per pixel of pointer movement.
pub const SENSITIVITY: f64 = 0.5;
/// Near plane distance at session start.
pub const DEFAULT_NEAR_PLANE: f64 = 100.0;
/// Far plane distance at session start.
pub const DEFAULT_FAR_PLANE: f64 = 200.0;

/// Mutable camera state for one viewer session.
///
/// Yaw and pitch are kept in degrees and accumulate without wrapping.
/// Only [`controller`](super::controller) functions mutate it; projection
/// reads a [`Projection`] snapshot instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraState {
    width: u32,
    height: u32,
    position: Vector3D,
    pub(crate) near_plane: f64,
    pub(crate) far_plane: f64,
    pub(crate) yaw: f64,
    pub(crate) pitch: f64,
    pub(crate) last_pointer: (f64, f64),
}

/// Frame-consistent copy of the values the projection math reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Rotation about the vertical axis, in degrees.
    pub yaw: f64,
    /// Rotation about the horizontal axis, in degrees.
    pub pitch: f64,
    /// Near clipping plane distance.
    pub near_plane: f64,
    /// Far clipping plane distance.
    pub far_plane: f64,
}

impl CameraState {
    /// Create a camera with the default planes, zero rotation, and the
    /// pointer resting at the viewport center.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            position: Vector3D::ZERO,
            near_plane: DEFAULT_NEAR_PLANE,
            far_plane: DEFAULT_FAR_PLANE,
            yaw: 0.0,
            pitch: 0.0,
            last_pointer: (f64::from(width) / 2.0, f64::from(height) / 2.0),
        }
    }

    /// Create a camera whose initial planes come from `options`.
    ///
    /// Also checks `options.dolly_step`, which the input layer scales
    /// wheel lines by.
    pub fn from_options(
        width: u32,
        height: u32,
        options: &CameraOptions,
    ) -> Result<Self, ViewerError> {
        if width == 0 || height == 0 {
            return Err(ViewerError::InvalidViewport { width, height });
        }
        let (near, far) = (options.near_plane, options.far_plane);
        if !near.is_finite() || !far.is_finite() || near < 0.0 || far <= near
        {
            return Err(ViewerError::InvalidPlanes { near, far });
        }
        let step = options.dolly_step;
        if !step.is_finite() || step <= 0.0 {
            return Err(ViewerError::InvalidDollyStep { step });
        }
        Ok(Self {
            near_plane: near,
            far_plane: far,
            ..Self::new(width, height)
        })
    }

    /// Snapshot the projection parameters for one frame.
    #[must_use]
    pub fn projection(&self) -> Projection {
        Projection {
            yaw: self.yaw,
            pitch: self.pitch,
            near_plane: self.near_plane,
            far_plane: self.far_plane,
        }
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Viewport height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Camera world position.
    ///
    /// Stored for future translation support; the projection does not
    /// read it.
    #[must_use]
    pub fn position(&self) -> Vector3D {
        self.position
    }

    /// Near clipping plane distance.
    #[must_use]
    pub fn near_plane(&self) -> f64 {
        self.near_plane
    }

    /// Far clipping plane distance.
    #[must_use]
    pub fn far_plane(&self) -> f64 {
        self.far_plane
    }

    /// Accumulated yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Accumulated pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Last observed pointer coordinate in viewport pixels.
    #[must_use]
    pub fn last_pointer(&self) -> (f64, f64) {
        self.last_pointer
    }
}
