//! Session wiring: camera, input processing, and per-frame rendering.

use crate::camera::{controller, CameraState};
use crate::error::ViewerError;
use crate::input::{InputEvent, InputProcessor};
use crate::options::Options;
use crate::overlay::TextOverlay;
use crate::render::{build_sprites, Canvas};
use crate::scene::BodySource;

/// Per-frame body counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Bodies offered by the source.
    pub bodies: usize,
    /// Bodies drawn.
    pub visible: usize,
    /// Bodies dropped by depth culling.
    pub culled: usize,
}

/// One viewer session.
///
/// Input events mutate the camera between frames; each
/// [`render_frame`](Self::render_frame) projects every body against a
/// single snapshot of the camera.
#[derive(Debug, Clone)]
pub struct Viewer {
    camera: CameraState,
    input: InputProcessor,
    overlay: TextOverlay,
}

impl Viewer {
    /// Create a session from `options`.
    pub fn new(options: &Options) -> Result<Self, ViewerError> {
        let camera = CameraState::from_options(
            options.viewport.width,
            options.viewport.height,
            &options.camera,
        )?;
        log::info!(
            "Viewer {}x{}, planes {}..{}",
            camera.width(),
            camera.height(),
            camera.near_plane(),
            camera.far_plane()
        );

        Ok(Self {
            camera,
            input: InputProcessor::new(options.camera.dolly_step),
            overlay: TextOverlay::new(options.overlay.clone()),
        })
    }

    /// Current camera state.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Overlay queue, for callers adding their own status lines before
    /// the next frame.
    pub fn overlay_mut(&mut self) -> &mut TextOverlay {
        &mut self.overlay
    }

    /// Feed one input event through to the camera.
    pub fn handle_event(&mut self, event: InputEvent) {
        if let Some(command) = self.input.handle_event(event) {
            controller::execute(&mut self.camera, command);
        }
    }

    /// Draw one frame of `source` into `canvas`.
    pub fn render_frame(
        &mut self,
        source: &(impl BodySource + ?Sized),
        canvas: &mut impl Canvas,
    ) -> FrameStats {
        let projection = self.camera.projection();
        let sprites = build_sprites(&projection, source);

        for sprite in &sprites {
            canvas.draw_sprite(sprite);
        }

        let bodies = source.bodies().len();
        let stats = FrameStats {
            bodies,
            visible: sprites.len(),
            culled: bodies - sprites.len(),
        };

        self.overlay.push(format!(
            "yaw {:.1}  pitch {:.1}",
            projection.yaw, projection.pitch
        ));
        self.overlay.push(format!(
            "planes {:.1} .. {:.1}",
            projection.near_plane, projection.far_plane
        ));
        self.overlay.push(format!(
            "bodies {}  visible {}",
            stats.bodies, stats.visible
        ));

        let lines =
            self.overlay.drain(self.camera.width(), self.camera.height());
        for line in &lines {
            canvas.draw_text(line.x, line.y, &line.text, self.overlay.font());
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FontOptions;
    use crate::render::SpriteInstance;
    use crate::scene::{Body, BodyKind, Scene};
    use crate::util::Vector3D;

    #[derive(Default)]
    struct RecordingCanvas {
        sprites: Vec<SpriteInstance>,
        text: Vec<String>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_sprite(&mut self, sprite: &SpriteInstance) {
            self.sprites.push(*sprite);
        }

        fn draw_text(
            &mut self,
            _x: f64,
            _y: f64,
            text: &str,
            _font: &FontOptions,
        ) {
            self.text.push(text.to_owned());
        }
    }

    fn scene() -> Scene {
        [0.0, 20.0, -80.0]
            .into_iter()
            .map(|z| {
                Body::new(
                    BodyKind::Particle,
                    Vector3D::new(5.0, 5.0, z),
                    1.0,
                    10.0,
                )
            })
            .collect()
    }

    #[test]
    fn frame_counts_visible_and_culled() {
        let mut viewer = Viewer::new(&Options::default()).unwrap();
        let mut canvas = RecordingCanvas::default();

        let stats = viewer.render_frame(&scene(), &mut canvas);
        assert_eq!(
            stats,
            FrameStats {
                bodies: 3,
                visible: 2,
                culled: 1
            }
        );
        assert_eq!(canvas.sprites.len(), 2);
        assert_eq!(canvas.text.len(), 3);
        assert!(canvas.text[2].contains("visible 2"));
    }

    #[test]
    fn overlay_is_cleared_between_frames() {
        let mut viewer = Viewer::new(&Options::default()).unwrap();
        viewer.overlay_mut().push("custom");

        let mut first = RecordingCanvas::default();
        let _ = viewer.render_frame(&scene(), &mut first);
        assert_eq!(first.text[0], "custom");
        assert_eq!(first.text.len(), 4);

        let mut second = RecordingCanvas::default();
        let _ = viewer.render_frame(&scene(), &mut second);
        assert_eq!(second.text.len(), 3);
    }

    #[test]
    fn events_drive_camera() {
        let mut viewer = Viewer::new(&Options::default()).unwrap();
        viewer.handle_event(InputEvent::CursorMoved { x: 410.0, y: 300.0 });
        viewer.handle_event(InputEvent::Scroll { delta: -5.0 });
        viewer.handle_event(InputEvent::Scroll { delta: -20.0 });

        let camera = viewer.camera();
        assert_eq!(camera.yaw(), 5.0);
        assert_eq!(camera.pitch(), 0.0);
        assert_eq!(camera.near_plane(), 50.0);
        assert_eq!(camera.far_plane(), 150.0);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let mut options = Options::default();
        options.camera.far_plane = options.camera.near_plane;
        assert!(matches!(
            Viewer::new(&options),
            Err(ViewerError::InvalidPlanes { .. })
        ));

        let mut options = Options::default();
        options.camera.dolly_step = -1.0;
        assert!(matches!(
            Viewer::new(&options),
            Err(ViewerError::InvalidDollyStep { step }) if step == -1.0
        ));
    }
}
