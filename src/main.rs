//! Headless demo: replays scripted input against a preset scene and logs
//! every draw call.

use std::path::Path;

use bodyview::input::InputEvent;
use bodyview::options::{FontOptions, Options};
use bodyview::render::{Canvas, SpriteInstance};
use bodyview::Viewer;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Canvas that reports draw calls through the logger.
#[derive(Default)]
struct LogCanvas {
    sprites: usize,
}

impl Canvas for LogCanvas {
    fn draw_sprite(&mut self, sprite: &SpriteInstance) {
        self.sprites += 1;
        log::debug!(
            "sprite at ({:.2}, {:.2}) r={:.2} depth={:.3}",
            sprite.position[0],
            sprite.position[1],
            sprite.radius,
            sprite.depth
        );
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, _font: &FontOptions) {
        log::info!("[{x:.0}, {y:.0}] {text}");
    }
}

/// Short mouse-look and dolly sequence starting from the viewport center.
fn scripted_input(width: u32, height: u32) -> Vec<InputEvent> {
    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    vec![
        InputEvent::CursorMoved { x: cx + 20.0, y: cy },
        InputEvent::CursorMoved {
            x: cx + 40.0,
            y: cy + 10.0,
        },
        InputEvent::Scroll { delta: -2.0 },
        InputEvent::CursorMoved { x: cx, y: cy - 30.0 },
        InputEvent::Scroll { delta: 1.0 },
    ]
}

fn load_options() -> Options {
    let Some(arg) = std::env::args().nth(1) else {
        log::warn!("No options file given, using defaults");
        return Options::default();
    };
    match Options::load(Path::new(&arg)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("Failed to load options '{arg}': {e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::init();

    let options = load_options();
    let mut rng = match options.scene.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let scene = options.scene.preset.build(options.scene.count, &mut rng);

    let mut viewer = match Viewer::new(&options) {
        Ok(viewer) => viewer,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let events =
        scripted_input(options.viewport.width, options.viewport.height);
    for (frame, event) in events.into_iter().enumerate() {
        viewer.handle_event(event);

        let mut canvas = LogCanvas::default();
        let stats = viewer.render_frame(&scene, &mut canvas);
        log::info!(
            "frame {frame}: {} bodies, {} drawn, {} culled",
            stats.bodies,
            canvas.sprites,
            stats.culled
        );
    }
}
