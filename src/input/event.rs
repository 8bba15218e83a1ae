/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`CameraCommand`](crate::camera::CameraCommand)
/// values.
///
/// # Example
///
/// ```
/// use bodyview::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new(10.0);
/// let event = InputEvent::CursorMoved { x: 100.0, y: 200.0 };
/// let cmd = input.handle_event(event);
/// assert!(cmd.is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute viewport position.
    CursorMoved {
        /// Horizontal position in pixels.
        x: f64,
        /// Vertical position in pixels.
        y: f64,
    },
    /// Scroll wheel, in lines (positive = away from the user).
    Scroll {
        /// Scroll amount in lines.
        delta: f64,
    },
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Pixels of touchpad scroll that count as one wheel line.
    const PIXELS_PER_LINE: f64 = 100.0;

    /// Translate a winit window event, if it is one the viewer consumes.
    #[must_use]
    pub fn from_window_event(
        event: &winit::event::WindowEvent,
    ) -> Option<Self> {
        use winit::event::{MouseScrollDelta, WindowEvent};

        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(Self::CursorMoved {
                    x: position.x,
                    y: position.y,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                    MouseScrollDelta::PixelDelta(pos) => {
                        pos.y / Self::PIXELS_PER_LINE
                    }
                };
                Some(Self::Scroll { delta })
            }
            _ => None,
        }
    }
}
