//! Top-left text overlay layout.
//!
//! Lines are queued during a frame and laid out in a coordinate system
//! centered on the viewport (x to the right, y up). Drawing is left to the
//! [`Canvas`](crate::render::Canvas).

use crate::options::FontOptions;

/// One laid-out overlay line.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    /// Horizontal anchor, relative to the viewport center.
    pub x: f64,
    /// Vertical anchor, relative to the viewport center.
    pub y: f64,
    /// Text content.
    pub text: String,
}

/// Queue of status lines stacked from the top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct TextOverlay {
    font: FontOptions,
    lines: Vec<String>,
}

impl TextOverlay {
    /// Create an empty overlay using `font`.
    #[must_use]
    pub fn new(font: FontOptions) -> Self {
        Self {
            font,
            lines: Vec::new(),
        }
    }

    /// Font used for every line.
    #[must_use]
    pub fn font(&self) -> &FontOptions {
        &self.font
    }

    /// Queue a line below the ones already queued.
    pub fn push(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Number of queued lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Anchor of the `index`-th line (1-based) in a `width` x `height`
    /// viewport.
    #[must_use]
    pub fn line_anchor(
        &self,
        width: u32,
        height: u32,
        index: usize,
    ) -> (f64, f64) {
        let width = f64::from(width);
        let height = f64::from(height);
        let padding = f64::from(self.font.padding_percent) / 100.0;
        let padding_x = width * padding;
        let padding_y = height * padding;
        let line_height = self.font.line_height;

        let offset_y = f64::from(self.font.size) * line_height * index as f64
            + padding_y / line_height;

        (-width / 2.0 + padding_x, height / 2.0 - offset_y)
    }

    /// Lay out the queued lines without consuming them.
    #[must_use]
    pub fn layout(&self, width: u32, height: u32) -> Vec<TextLine> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let (x, y) = self.line_anchor(width, height, i + 1);
                TextLine {
                    x,
                    y,
                    text: text.clone(),
                }
            })
            .collect()
    }

    /// Lay out the queued lines and clear the queue for the next frame.
    pub fn drain(&mut self, width: u32, height: u32) -> Vec<TextLine> {
        let laid_out = self.layout(width, height);
        self.lines.clear();
        laid_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> TextOverlay {
        TextOverlay::new(FontOptions {
            size: 10,
            line_height: 2.0,
            padding_percent: 10,
            ..FontOptions::default()
        })
    }

    #[test]
    fn first_line_anchor() {
        // padding: 80 x 60; offset_y = 10*2*1 + 60/2 = 50
        let (x, y) = overlay().line_anchor(800, 600, 1);
        assert!((x - (-400.0 + 80.0)).abs() < 1e-9);
        assert!((y - (300.0 - 50.0)).abs() < 1e-9);
    }

    #[test]
    fn lines_stack_downward() {
        let mut overlay = overlay();
        overlay.push("fps");
        overlay.push(String::from("bodies"));

        let lines = overlay.layout(800, 600);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "fps");
        assert_eq!(lines[0].x, lines[1].x);
        assert!((lines[0].y - lines[1].y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn drain_clears_queue() {
        let mut overlay = overlay();
        overlay.push("a");
        assert_eq!(overlay.drain(800, 600).len(), 1);
        assert!(overlay.is_empty());
        assert!(overlay.drain(800, 600).is_empty());
    }
}
