//! Menu widgets for menukit.
//!
//! - [`HorizontalMenu`]: a menu bar laid out left to right.
//! - [`VerticalMenu`]: a dropdown list laid out top to bottom.
//!
//! Both are driven once per frame in the order hover update, display,
//! click query, against any [`Surface`](menukit_core::Surface).

mod base;
pub mod horizontal;
pub mod style;
pub mod vertical;

pub use base::{MenuItem, Panel, OFFSCREEN};
pub use horizontal::{HorizontalMenu, HORIZONTAL_HIGHLIGHT_LIFT};
pub use style::{MenuStyle, CHARACTER_SIZE, DEFAULT_FONT_PATH, HIGHLIGHT_COLOR};
pub use vertical::{VerticalMenu, VERTICAL_HIGHLIGHT_LIFT};
