//! Core types and traits for menukit.
//!
//! This crate provides the pieces shared by every menu widget:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`PixelPoint`]
//! - Color representation: [`Color`]
//! - Surface traits: [`Canvas`], [`TextMetrics`], [`Pointer`], [`Surface`]
//! - Fonts: [`Font`], [`FontLoader`], [`FsFontLoader`]
//! - Click edge detection: [`PressLatch`]
//! - Errors: [`MenuError`]

mod color;
mod error;
mod font;
mod geometry;
mod input;
pub mod surface;

pub use color::{Color, ColorParseError};
pub use error::MenuError;
pub use font::{Font, FontId, FontLoader, FsFontLoader};
pub use geometry::{PixelPoint, Point, Rect, Size};
pub use input::{ButtonEdge, MouseButton, PressLatch};
pub use surface::{Canvas, Pointer, Surface, TextMetrics, TextStyle};
