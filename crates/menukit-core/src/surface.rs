//! Rendering surface traits.
//!
//! Menus never own a window. Each frame they borrow something that can
//! paint rectangles and text ([`Canvas`]), measure text ([`TextMetrics`]) and
//! report the pointer ([`Pointer`]). A type providing all three is a
//! [`Surface`].

use crate::{Color, Font, MouseButton, PixelPoint, Point, Rect};
use serde::{Deserialize, Serialize};

/// Text style for rendering.
///
/// # Examples
///
/// ```
/// use menukit_core::{Color, TextStyle};
///
/// let style = TextStyle::default();
/// assert_eq!(style.size, 16.0);
///
/// let white = TextStyle::new(16.0, Color::WHITE);
/// assert_eq!(white.color, Color::WHITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Character size in logical units
    pub size: f32,
    /// Text color
    pub color: Color,
}

impl TextStyle {
    /// Create a text style.
    #[must_use]
    pub const fn new(size: f32, color: Color) -> Self {
        Self { size, color }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
        }
    }
}

/// Paint operations a menu issues.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw text with its origin at `position`.
    fn draw_text(&mut self, text: &str, position: Point, font: &Font, style: &TextStyle);
}

/// Text measurement.
pub trait TextMetrics {
    /// Local bounding box of `text` relative to its draw origin.
    ///
    /// The box may start at a non-zero offset (glyphs rarely touch the
    /// origin's top edge); widgets translate it by the draw position to get
    /// screen-space bounds.
    fn text_bounds(&self, text: &str, font: &Font, style: &TextStyle) -> Rect;
}

/// Pointer device state.
pub trait Pointer {
    /// Current pointer position in device pixels.
    fn pointer_pixel(&self) -> PixelPoint;

    /// Convert device pixels to the surface's logical coordinates.
    fn map_pixel_to_coords(&self, pixel: PixelPoint) -> Point;

    /// Instantaneous pressed state of `button`.
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// Current pointer position in logical coordinates.
    fn pointer_position(&self) -> Point {
        self.map_pixel_to_coords(self.pointer_pixel())
    }
}

/// Everything a menu needs from its host for one frame.
pub trait Surface: Canvas + TextMetrics + Pointer {}

impl<S: Canvas + TextMetrics + Pointer + ?Sized> Surface for S {}
