//! Converts raw input events into camera commands.
//!
//! The `InputProcessor` is the only thing that sits between raw window
//! events and [`controller::execute`](crate::camera::controller::execute).

use super::event::InputEvent;
use crate::camera::CameraCommand;

/// Converts [`InputEvent`]s into [`CameraCommand`]s.
///
/// Cursor movement becomes mouse-look; scroll lines become a plane dolly
/// of `dolly_step` units per line.
#[derive(Debug, Clone, PartialEq)]
pub struct InputProcessor {
    /// Plane shift per scroll line.
    dolly_step: f64,
    /// Last cursor position seen, if any.
    cursor: Option<(f64, f64)>,
}

impl InputProcessor {
    /// Create a processor that dollies `dolly_step` units per scroll line.
    #[must_use]
    pub fn new(dolly_step: f64) -> Self {
        Self {
            dolly_step,
            cursor: None,
        }
    }

    /// Last cursor position seen, in viewport pixels.
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    /// Plane shift per scroll line.
    #[must_use]
    pub fn dolly_step(&self) -> f64 {
        self.dolly_step
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: InputEvent,
    ) -> Option<CameraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => {
                self.cursor = Some((x, y));
                Some(CameraCommand::Look { x, y })
            }
            InputEvent::Scroll { delta } => {
                if delta == 0.0 {
                    return None;
                }
                Some(CameraCommand::Dolly {
                    delta: delta * self.dolly_step,
                })
            }
        }
    }
}
