//! menukit: menu bars and dropdown lists for frame-driven renderers.
//!
//! The host application owns the window. Each frame it hands the menus a
//! [`Surface`] and calls, in order: a hover update, a display, then any
//! click queries.
//!
//! ```
//! use menukit::prelude::*;
//! use menukit_test::{RecordingSurface, StubFontLoader};
//!
//! let mut fonts = StubFontLoader::new();
//! let mut bar = HorizontalMenu::new(200.0, 40.0, 5.0, Color::WHITE, Color::BLACK, &mut fonts)?;
//! bar.add_text_item("File");
//! bar.add_text_item("Edit");
//!
//! let mut surface = RecordingSurface::new();
//! bar.handle_hover(&surface);
//! bar.static_display(&mut surface);
//! if bar.item_clicked(&surface, 0) {
//!     // open the File dropdown
//! }
//! # Ok::<(), MenuError>(())
//! ```

pub use menukit_core::*;
pub use menukit_widgets as widgets;
pub use menukit_widgets::{HorizontalMenu, MenuItem, MenuStyle, Panel, VerticalMenu};

/// The types most applications need.
pub mod prelude {
    pub use menukit_core::{
        Color, Font, FontLoader, FsFontLoader, MenuError, MouseButton, Point, Rect, Surface,
    };
    pub use menukit_widgets::{HorizontalMenu, MenuStyle, VerticalMenu};
}
