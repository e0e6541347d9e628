//! Left-to-right menu bar.

use crate::base::{MenuBase, MenuItem, Panel};
use crate::style::MenuStyle;
use menukit_core::{Color, Font, FontLoader, MenuError, Point, Rect, Size, Surface};
use std::fmt::Display;

/// Upward shift applied to the horizontal highlight.
pub const HORIZONTAL_HIGHLIGHT_LIFT: f32 = 15.0;

/// A menu that lays its items out in a row.
///
/// The panel grows with its content: `2 * border + Σ(item_width + border)`
/// wide and `style.height` tall. Call [`handle_hover`](Self::handle_hover)
/// once per frame before [`static_display`](Self::static_display) so the
/// highlight follows the pointer.
///
/// # Examples
///
/// ```
/// use menukit_core::Color;
/// use menukit_test::{RecordingSurface, StubFontLoader};
/// use menukit_widgets::HorizontalMenu;
///
/// let mut fonts = StubFontLoader::new();
/// let mut menu = HorizontalMenu::new(200.0, 40.0, 5.0, Color::WHITE, Color::BLACK, &mut fonts)
///     .expect("font loads");
/// menu.add_text_item("File");
/// menu.add_text_item("Edit");
///
/// let mut surface = RecordingSurface::new();
/// menu.handle_hover(&surface);
/// menu.static_display(&mut surface);
/// assert_eq!(surface.texts().len(), 2);
/// ```
#[derive(Debug)]
pub struct HorizontalMenu<T> {
    base: MenuBase<T>,
}

impl<T: Display> HorizontalMenu<T> {
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

    /// Append an item. Labels are not validated; duplicates are fine.
    pub fn add_text_item(&mut self, item: T) {
        self.base.push(item);
    }
}

impl<T> HorizontalMenu<T> {
    /// Set the anchor used by the next display. Items already laid out do
    /// not move until then.
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.base.position = Point::new(x, y);
    }

    /// Current anchor.
    pub const fn position(&self) -> Point {
        self.base.position
    }

    /// Lay out and draw the panel, the highlight and every item.
    pub fn static_display(&mut self, surface: &mut dyn Surface) {
        let border = self.base.style.border;
        let height = self.base.style.height;
        let anchor = self.base.position;
        let locals = self.base.measure(surface);

        let total_width = locals
            .iter()
            .fold(2.0 * border, |acc, local| acc + local.width + border);
        self.base.begin_layout(anchor, Size::new(total_width, height));
        self.base.draw_panel(surface);

        let mut cursor = Point::new(anchor.x + border, anchor.y + border);
        for (i, local) in locals.iter().enumerate() {
            if self.base.hovered == Some(i) {
                let size = self.base.highlight_size(*local);
                let y = anchor.y + border + (height - size.height) / 2.0
                    - HORIZONTAL_HIGHLIGHT_LIFT;
                let rect = Rect::new(cursor.x - border / 2.0, y, size.width, size.height);
                self.base.draw_highlight(surface, rect);
            }
            self.base.draw_item(surface, i, cursor);
            cursor.x += local.width + border;
        }
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

    /// Update the hovered index from the pointer. Draws nothing.
    pub fn handle_hover(&mut self, surface: &dyn Surface) {
        self.base.update_hover(surface);
    }

    /// Whether the pointer is over any item, regardless of button state.
    pub fn any_item_hovered(&self, surface: &dyn Surface) -> bool {
        self.base.pointer_over_any(surface)
    }

    /// True once per press of the primary button that lands on item
    /// `index`. Out-of-range indices return false without touching the
    /// press state.
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
