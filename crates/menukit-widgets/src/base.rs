//! State and hit testing shared by both menu orientations.

use crate::style::{MenuStyle, HIGHLIGHT_COLOR};
use menukit_core::{
    ButtonEdge, Color, Font, FontLoader, MenuError, MouseButton, Point, PressLatch, Rect, Size,
    Surface, TextStyle,
};
use std::fmt::Display;
use tracing::{debug, trace};

/// Where hidden items are parked, far outside any surface.
pub const OFFSCREEN: Point = Point::new(-10_000.0, -10_000.0);

/// A text item owned by a menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem<T> {
    label: T,
    text: String,
    position: Point,
}

impl<T: Display> MenuItem<T> {
    fn new(label: T) -> Self {
        let text = label.to_string();
        Self {
            label,
            text,
            position: Point::ORIGIN,
        }
    }
}

impl<T> MenuItem<T> {
    /// The label the item was added with.
    pub const fn label(&self) -> &T {
        &self.label
    }

    /// The label as drawn.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Draw origin from the most recent layout.
    pub const fn position(&self) -> Point {
        self.position
    }
}

/// The background panel as last laid out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Panel {
    /// Panel bounds
    pub bounds: Rect,
    /// Panel fill
    pub color: Color,
}

#[derive(Debug)]
pub(crate) struct MenuBase<T> {
    pub(crate) style: MenuStyle,
    pub(crate) font: Font,
    pub(crate) text_style: TextStyle,
    pub(crate) items: Vec<MenuItem<T>>,
    pub(crate) panel: Panel,
    pub(crate) highlight: Option<Rect>,
    pub(crate) position: Point,
    pub(crate) hovered: Option<usize>,
    pub(crate) hidden: bool,
    latch: PressLatch,
}

impl<T: Display> MenuBase<T> {
    pub(crate) fn new(style: MenuStyle, fonts: &mut dyn FontLoader) -> Result<Self, MenuError> {
        style.validate()?;
        let font = fonts.load_font(&style.font_path)?;
        debug!(font = font.family(), width = style.width, height = style.height, "menu created");

        let panel = Panel {
            bounds: Rect::new(0.0, 0.0, style.width, style.height),
            color: style.background,
        };
        Ok(Self {
            text_style: TextStyle::new(style.character_size, style.text_color),
            style,
            font,
            items: Vec::new(),
            panel,
            highlight: None,
            position: Point::ORIGIN,
            hovered: None,
            hidden: false,
            latch: PressLatch::new(),
        })
    }

    pub(crate) fn push(&mut self, label: T) {
        self.items.push(MenuItem::new(label));
    }
}

impl<T> MenuBase<T> {
    /// Local text bounds of every item, in insertion order.
    pub(crate) fn measure(&self, surface: &dyn Surface) -> Vec<Rect> {
        self.items
            .iter()
            .map(|item| surface.text_bounds(&item.text, &self.font, &self.text_style))
            .collect()
    }

    /// Screen-space bounds of item `index` at its current position.
    pub(crate) fn bounds_of(&self, index: usize, surface: &dyn Surface) -> Option<Rect> {
        let item = self.items.get(index)?;
        Some(
            surface
                .text_bounds(&item.text, &self.font, &self.text_style)
                .translate(item.position),
        )
    }

    pub(crate) fn all_bounds(&self, surface: &dyn Surface) -> Vec<Rect> {
        (0..self.items.len())
            .filter_map(|i| self.bounds_of(i, surface))
            .collect()
    }

    fn item_at(&self, pointer: Point, surface: &dyn Surface) -> Option<usize> {
        (0..self.items.len()).find(|&i| {
            self.bounds_of(i, surface)
                .is_some_and(|bounds| bounds.contains_point(&pointer))
        })
    }

    pub(crate) fn update_hover(&mut self, surface: &dyn Surface) {
        let hovered = self.item_at(surface.pointer_position(), surface);
        if hovered != self.hovered {
            trace!(from = ?self.hovered, to = ?hovered, "hover changed");
        }
        self.hovered = hovered;
    }

    pub(crate) fn pointer_over_any(&self, surface: &dyn Surface) -> bool {
        self.item_at(surface.pointer_position(), surface).is_some()
    }

    pub(crate) fn item_clicked(&mut self, surface: &dyn Surface, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }

        match self
            .latch
            .observe(surface.is_button_pressed(MouseButton::Left))
        {
            ButtonEdge::PressedEdge => {
                let pointer = surface.pointer_position();
                let hit = self
                    .bounds_of(index, surface)
                    .is_some_and(|bounds| bounds.contains_point(&pointer));
                if hit {
                    self.latch.fire();
                    debug!(index, "menu item clicked");
                }
                hit
            }
            ButtonEdge::Released | ButtonEdge::Held => false,
        }
    }

    /// Start a frame's layout: reset the highlight and mark visible.
    pub(crate) fn begin_layout(&mut self, anchor: Point, panel_size: Size) {
        self.position = anchor;
        self.highlight = None;
        self.hidden = false;
        self.panel = Panel {
            bounds: Rect::from_origin_size(anchor, panel_size),
            color: self.style.background,
        };
    }

    pub(crate) fn draw_panel(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.panel.bounds, self.panel.color);
    }

    pub(crate) fn draw_highlight(&mut self, surface: &mut dyn Surface, rect: Rect) {
        self.highlight = Some(rect);
        surface.fill_rect(rect, HIGHLIGHT_COLOR);
    }

    pub(crate) fn draw_item(&mut self, surface: &mut dyn Surface, index: usize, position: Point) {
        if let Some(item) = self.items.get_mut(index) {
            item.position = position;
            surface.draw_text(&item.text, position, &self.font, &self.text_style);
        }
    }

    /// Highlight extent shared by both orientations.
    pub(crate) fn highlight_size(&self, local: Rect) -> Size {
        let border = self.style.border;
        Size::new(
            (self.style.width - 2.0 * border).min(local.width + border),
            local.height + border,
        )
    }

    pub(crate) fn hide(&mut self) {
        if !self.hidden {
            debug!(items = self.items.len(), "menu hidden");
        }
        for item in &mut self.items {
            item.position = OFFSCREEN;
        }
        self.panel.bounds = Rect::from_origin_size(self.position, Size::ZERO);
        self.highlight = None;
        self.hovered = None;
        self.hidden = true;
    }
}
