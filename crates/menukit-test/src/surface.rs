//! A [`Surface`](menukit_core::Surface) that records draw calls and plays
//! back a scripted pointer.

use menukit_core::{
    Canvas, Color, Font, FontId, MouseButton, PixelPoint, Point, Pointer, Rect, TextMetrics,
    TextStyle,
};
use serde::Serialize;

/// Advance per character as a fraction of the character size.
pub const ADVANCE_RATIO: f32 = 0.5;
/// Glyph box height as a fraction of the character size.
pub const HEIGHT_RATIO: f32 = 0.75;
/// Gap between the draw origin and the top of the glyph box, as a fraction
/// of the character size.
pub const TOP_OFFSET_RATIO: f32 = 0.25;

/// A recorded paint operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    /// Filled rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Fill color
        color: Color,
    },
    /// Text run
    Text {
        /// Text content
        content: String,
        /// Draw origin
        position: Point,
        /// Font the text was drawn with
        #[serde(skip)]
        font: FontId,
        /// Text style
        style: TextStyle,
    },
}

/// Recording surface with deterministic text metrics.
///
/// Text is measured as if every character were `size * 0.5` wide and
/// `size * 0.75` tall, starting `size * 0.25` below the draw origin, which
/// mimics the top bearing real glyph boxes carry.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    pointer: PixelPoint,
    pixels_per_unit: f32,
    pressed: Vec<MouseButton>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self {
            commands: Vec::new(),
            pointer: PixelPoint::new(-1, -1),
            pixels_per_unit: 1.0,
            pressed: Vec::new(),
        }
    }
}

impl RecordingSurface {
    /// Create a surface with a 1:1 pixel mapping and the pointer parked
    /// outside the surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a pixel-to-logical scale other than 1.
    #[must_use]
    pub const fn with_pixels_per_unit(mut self, pixels_per_unit: f32) -> Self {
        self.pixels_per_unit = pixels_per_unit;
        self
    }

    /// Width the surface reports for `text` at `size`.
    #[must_use]
    pub fn text_width(text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * ADVANCE_RATIO
    }

    /// Height the surface reports for any non-empty text at `size`.
    #[must_use]
    pub fn text_height(size: f32) -> f32 {
        size * HEIGHT_RATIO
    }

    // === Pointer scripting ===

    /// Put the pointer at a device pixel.
    pub fn move_pointer_pixel(&mut self, x: i32, y: i32) -> &mut Self {
        self.pointer = PixelPoint::new(x, y);
        self
    }

    /// Put the pointer at a logical position, rounded to the nearest pixel.
    pub fn move_pointer_to(&mut self, position: Point) -> &mut Self {
        self.pointer = PixelPoint::new(
            (position.x * self.pixels_per_unit).round() as i32,
            (position.y * self.pixels_per_unit).round() as i32,
        );
        self
    }

    /// Put the pointer at the center of `rect`.
    pub fn move_pointer_into(&mut self, rect: Rect) -> &mut Self {
        self.move_pointer_to(Point::new(
            rect.x + rect.width / 2.0,
            rect.y + rect.height / 2.0,
        ))
    }

    /// Hold `button` down.
    pub fn press(&mut self, button: MouseButton) -> &mut Self {
        if !self.pressed.contains(&button) {
            self.pressed.push(button);
        }
        self
    }

    /// Let go of `button`.
    pub fn release(&mut self, button: MouseButton) -> &mut Self {
        self.pressed.retain(|b| *b != button);
        self
    }

    // === Recorded output ===

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the surface.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear recorded commands, keeping pointer state.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Filled rectangles in draw order.
    #[must_use]
    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { bounds, color } => Some((*bounds, *color)),
                DrawCommand::Text { .. } => None,
            })
            .collect()
    }

    /// Text runs in draw order as `(content, position)`.
    #[must_use]
    pub fn texts(&self) -> Vec<(&str, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text {
                    content, position, ..
                } => Some((content.as_str(), *position)),
                DrawCommand::Rect { .. } => None,
            })
            .collect()
    }
}

impl Canvas for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect {
            bounds: rect,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, font: &Font, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            font: font.id(),
            style: *style,
        });
    }
}

impl TextMetrics for RecordingSurface {
    fn text_bounds(&self, text: &str, _font: &Font, style: &TextStyle) -> Rect {
        if text.is_empty() {
            return Rect::default();
        }
        Rect::new(
            0.0,
            style.size * TOP_OFFSET_RATIO,
            Self::text_width(text, style.size),
            Self::text_height(style.size),
        )
    }
}

impl Pointer for RecordingSurface {
    fn pointer_pixel(&self) -> PixelPoint {
        self.pointer
    }

    fn map_pixel_to_coords(&self, pixel: PixelPoint) -> Point {
        Point::new(
            pixel.x as f32 / self.pixels_per_unit,
            pixel.y as f32 / self.pixels_per_unit,
        )
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed.contains(&button)
    }
}
