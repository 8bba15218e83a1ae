use super::core::{CameraState, SENSITIVITY};

/// A camera mutation produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Pointer moved to an absolute viewport coordinate.
    Look {
        /// Horizontal position in viewport pixels.
        x: f64,
        /// Vertical position in viewport pixels.
        y: f64,
    },
    /// Shift both clipping planes by `delta`.
    Dolly {
        /// Plane shift in plane-distance units.
        delta: f64,
    },
}

/// Apply a command to the camera.
pub fn execute(camera: &mut CameraState, command: CameraCommand) {
    match command {
        CameraCommand::Look { x, y } => handle_pointer_movement(camera, x, y),
        CameraCommand::Dolly { delta } => {
            let _ = adjust_planes(camera, delta);
        }
    }
}

/// Turn pointer travel since the last observed coordinate into yaw and
/// pitch, then remember `(x, y)` as the new reference point.
pub fn handle_pointer_movement(camera: &mut CameraState, x: f64, y: f64) {
    let (px, py) = camera.last_pointer;
    let dx = x - px;
    let dy = y - py;

    camera.yaw += dx * SENSITIVITY;
    camera.pitch += dy * SENSITIVITY;
    camera.last_pointer = (x, y);
}

/// Shift both planes by `delta`, keeping the depth range width.
///
/// The shift is only applied when the near plane stays non-negative and
/// the shifted planes still satisfy `far > near` with finite values;
/// otherwise the camera is left untouched. Returns whether the shift was
/// applied.
pub fn adjust_planes(camera: &mut CameraState, delta: f64) -> bool {
    let near_plane = camera.near_plane + delta;
    let far_plane = camera.far_plane + delta;

    if near_plane < 0.0 {
        log::debug!(
            "dolly {delta} rejected: near plane would become {near_plane}"
        );
        return false;
    }
    if !near_plane.is_finite()
        || !far_plane.is_finite()
        || far_plane <= near_plane
    {
        log::debug!(
            "dolly {delta} rejected: planes {near_plane}..{far_plane} \
             would collapse"
        );
        return false;
    }

    camera.near_plane = near_plane.clamp(0.0, f64::INFINITY);
    camera.far_plane = far_plane.clamp(0.0, f64::INFINITY);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_movement_accumulates_yaw() {
        let mut camera = CameraState::new(800, 600);
        assert_eq!(camera.last_pointer(), (400.0, 300.0));

        handle_pointer_movement(&mut camera, 410.0, 300.0);
        assert_eq!(camera.yaw(), 5.0);
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.last_pointer(), (410.0, 300.0));
    }

    #[test]
    fn pointer_movement_is_path_relative() {
        let mut camera = CameraState::new(800, 600);
        handle_pointer_movement(&mut camera, 400.0, 320.0);
        handle_pointer_movement(&mut camera, 380.0, 310.0);
        assert_eq!(camera.yaw(), -10.0);
        assert_eq!(camera.pitch(), 5.0);
    }

    #[test]
    fn rotation_is_not_wrapped() {
        let mut camera = CameraState::new(800, 600);
        handle_pointer_movement(&mut camera, 400.0 + 1000.0, 300.0);
        assert_eq!(camera.yaw(), 500.0);
    }

    #[test]
    fn dolly_rejected_when_near_goes_negative() {
        let mut camera = CameraState::new(800, 600);
        assert!(!adjust_planes(&mut camera, -150.0));
        assert_eq!(camera.near_plane(), 100.0);
        assert_eq!(camera.far_plane(), 200.0);
    }

    #[test]
    fn dolly_shifts_both_planes() {
        let mut camera = CameraState::new(800, 600);
        assert!(adjust_planes(&mut camera, -50.0));
        assert_eq!(camera.near_plane(), 50.0);
        assert_eq!(camera.far_plane(), 150.0);

        assert!(adjust_planes(&mut camera, 25.0));
        assert_eq!(camera.near_plane(), 75.0);
        assert_eq!(camera.far_plane(), 175.0);
    }

    #[test]
    fn dolly_to_exactly_zero_is_accepted() {
        let mut camera = CameraState::new(800, 600);
        assert!(adjust_planes(&mut camera, -100.0));
        assert_eq!(camera.near_plane(), 0.0);
        assert_eq!(camera.far_plane(), 100.0);
    }

    #[test]
    fn dolly_rejected_when_planes_collapse() {
        let mut camera = CameraState::new(800, 600);
        // 100 + 1e20 and 200 + 1e20 round to the same value.
        assert!(!adjust_planes(&mut camera, 1e20));
        assert!(!adjust_planes(&mut camera, f64::INFINITY));
        assert!(!adjust_planes(&mut camera, f64::NAN));
        assert_eq!(camera.near_plane(), 100.0);
        assert_eq!(camera.far_plane(), 200.0);
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut camera = CameraState::new(800, 600);
        execute(&mut camera, CameraCommand::Look { x: 400.0, y: 310.0 });
        execute(&mut camera, CameraCommand::Dolly { delta: 10.0 });
        execute(&mut camera, CameraCommand::Dolly { delta: -500.0 });
        assert_eq!(camera.pitch(), 5.0);
        assert_eq!(camera.near_plane(), 110.0);
        assert_eq!(camera.far_plane(), 210.0);
    }
}
