//! Test support for menukit widgets.
//!
//! [`RecordingSurface`] stands in for a window: it records every paint call,
//! measures text with fixed metrics, and lets a test script where the
//! pointer is and which buttons are down. [`StubFontLoader`] satisfies menu
//! construction without font files on disk.

#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unwrap_used)]

mod fonts;
mod surface;

pub use fonts::StubFontLoader;
pub use surface::{
    DrawCommand, RecordingSurface, ADVANCE_RATIO, HEIGHT_RATIO, TOP_OFFSET_RATIO,
};
