//! Top-to-bottom dropdown list.

use crate::base::{MenuBase, MenuItem, Panel};
use crate::style::MenuStyle;
use menukit_core::{Color, Font, FontLoader, MenuError, Point, Rect, Size, Surface};
use std::fmt::Display;

/// Upward shift applied to the vertical highlight.
pub const VERTICAL_HIGHLIGHT_LIFT: f32 = 12.5;

/// A menu that stacks its items in a column.
///
/// The panel is `style.width` wide and `2 * border + Σ(item_height + border)`
/// tall. Unlike [`HorizontalMenu`](crate::HorizontalMenu) the anchor is
/// passed to every [`display`](Self::display) call.
#[derive(Debug)]
pub struct VerticalMenu<T> {
    base: MenuBase<T>,
}

impl<T: Display> VerticalMenu<T> {
    /// Create a menu, loading the default font through `fonts`.
    ///
    /// # Errors
    ///
    /// Fails if the font cannot be loaded or the style is invalid: width
    /// and height must be positive, the border non-negative.
    pub fn new(
        width: f32,
        height: f32,
        border: f32,
        background: Color,
        text_color: Color,
        fonts: &mut dyn FontLoader,
    ) -> Result<Self, MenuError> {
        Self::with_style(
            MenuStyle::new(width, height, border, background, text_color),
            fonts,
        )
    }

    /// Create a menu from a full style.
    ///
    /// # Errors
    ///
    /// Fails if the style's font cannot be loaded or the style is invalid.
    pub fn with_style(style: MenuStyle, fonts: &mut dyn FontLoader) -> Result<Self, MenuError> {
        Ok(Self {
            base: MenuBase::new(style, fonts)?,
        })
    }

    /// Append an item.
    pub fn add_item(&mut self, item: T) {
        self.base.push(item);
    }
}

impl<T> VerticalMenu<T> {
    /// Lay out at `position` and draw the panel, the highlight and every
    /// item. The panel is sized before it is drawn.
    pub fn display(&mut self, surface: &mut dyn Surface, position: Point) {
        let border = self.base.style.border;
        let width = self.base.style.width;
        let locals = self.base.measure(surface);

        let total_height = locals
            .iter()
            .fold(2.0 * border, |acc, local| acc + local.height + border);
        self.base.begin_layout(position, Size::new(width, total_height));
        self.base.draw_panel(surface);

        let mut cursor = Point::new(position.x + border, position.y + border);
        for (i, local) in locals.iter().enumerate() {
            if self.base.hovered == Some(i) {
                let size = self.base.highlight_size(*local);
                let y = cursor.y + border / 2.0 - VERTICAL_HIGHLIGHT_LIFT;
                let rect = Rect::new(position.x + border, y, size.width, size.height);
                self.base.draw_highlight(surface, rect);
            }
            self.base.draw_item(surface, i, cursor);
            cursor.y += local.height + border;
        }
    }

    /// Anchor of the last display.
    pub const fn position(&self) -> Point {
        self.base.position
    }

    /// Park every item off-screen and collapse the panel. Draws nothing;
    /// calling it again changes nothing.
    pub fn hide(&mut self) {
        self.base.hide();
    }

    /// Whether the last layout call was [`hide`](Self::hide).
    pub const fn is_hidden(&self) -> bool {
        self.base.hidden
    }

    /// Update the hovered index from the pointer. Draws nothing.
    pub fn handle_input(&mut self, surface: &dyn Surface) {
        self.base.update_hover(surface);
    }

    /// Index of the item under the pointer at the last hover update.
    pub const fn selected_index(&self) -> Option<usize> {
        self.base.hovered
    }

    /// The panel as computed by the last display or hide.
    pub const fn background(&self) -> &Panel {
        &self.base.panel
    }

    /// The highlight drawn by the last display, if any.
    pub const fn highlight(&self) -> Option<Rect> {
        self.base.highlight
    }

    /// Screen-space bounds of every item at its current position.
    pub fn item_bounds(&self, surface: &dyn Surface) -> Vec<Rect> {
        self.base.all_bounds(surface)
    }

    /// Whether the pointer is over any item, regardless of button state.
    pub fn any_item_hovered(&self, surface: &dyn Surface) -> bool {
        self.base.pointer_over_any(surface)
    }

    /// True once per press of the primary button that lands on item
    /// `index`.
    pub fn item_clicked(&mut self, surface: &dyn Surface, index: usize) -> bool {
        self.base.item_clicked(surface, index)
    }

    /// Items in display order.
    pub fn items(&self) -> &[MenuItem<T>] {
        &self.base.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.base.items.len()
    }

    /// Check if the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.base.items.is_empty()
    }

    /// Style the menu was built with.
    pub const fn style(&self) -> &MenuStyle {
        &self.base.style
    }

    /// Font loaded at construction.
    pub const fn font(&self) -> &Font {
        &self.base.font
    }
}
