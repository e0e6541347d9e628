//! Menu box style and its YAML form.
//!
//! ```yaml
//! width: 200
//! height: 40
//! border: 5
//! # optional
//! background: "#ffffff"
//! text_color: "#000000"
//! character_size: 16
//! font_path: fonts/arial.ttf
//! ```

use menukit_core::{Color, MenuError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Font file loaded when a style does not name one.
pub const DEFAULT_FONT_PATH: &str = "arial.ttf";

/// Character size of menu item text.
pub const CHARACTER_SIZE: f32 = 16.0;

/// Fill of the hover highlight rectangle.
pub const HIGHLIGHT_COLOR: Color = Color::LIGHT_GRAY;

/// Visual style of a menu box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuStyle {
    /// Box width. Caps the highlight width; the vertical panel uses it as
    /// its width.
    pub width: f32,
    /// Box height. The horizontal panel uses it as its height.
    pub height: f32,
    /// Padding around and between items.
    pub border: f32,
    /// Panel fill.
    #[serde(with = "hex_color", default = "default_background")]
    pub background: Color,
    /// Item text color.
    #[serde(with = "hex_color", default = "default_text_color")]
    pub text_color: Color,
    /// Item text size.
    #[serde(default = "default_character_size")]
    pub character_size: f32,
    /// Font resource loaded at construction.
    #[serde(default = "default_font_path")]
    pub font_path: PathBuf,
}

const fn default_background() -> Color {
    Color::WHITE
}

const fn default_text_color() -> Color {
    Color::BLACK
}

fn default_character_size() -> f32 {
    CHARACTER_SIZE
}

fn default_font_path() -> PathBuf {
    PathBuf::from(DEFAULT_FONT_PATH)
}

impl MenuStyle {
    /// Create a style with the default font and character size.
    #[must_use]
    pub fn new(width: f32, height: f32, border: f32, background: Color, text_color: Color) -> Self {
        Self {
            width,
            height,
            border,
            background,
            text_color,
            character_size: CHARACTER_SIZE,
            font_path: default_font_path(),
        }
    }

    /// Set the font resource.
    #[must_use]
    pub fn font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    /// Set the item text size.
    #[must_use]
    pub const fn character_size(mut self, size: f32) -> Self {
        self.character_size = size;
        self
    }

    /// Parse and validate a YAML style document.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Config`] for malformed YAML and
    /// [`MenuError::InvalidStyle`] for out-of-range values.
    pub fn from_yaml(yaml: &str) -> Result<Self, MenuError> {
        let style: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| MenuError::Config(e.to_string()))?;
        style.validate()?;
        Ok(style)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::Config`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, MenuError> {
        serde_yaml_ng::to_string(self).map_err(|e| MenuError::Config(e.to_string()))
    }

    /// Check that the box is finite with a positive width and height, the
    /// border is non-negative and the character size is positive.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidStyle`] naming the first bad field.
    pub fn validate(&self) -> Result<(), MenuError> {
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(MenuError::InvalidStyle {
                    field,
                    message: format!("must be a finite value > 0, got {value}"),
                });
            }
        }
        if !self.border.is_finite() || self.border < 0.0 {
            return Err(MenuError::InvalidStyle {
                field: "border",
                message: format!("must be a finite value >= 0, got {}", self.border),
            });
        }
        if !self.character_size.is_finite() || self.character_size <= 0.0 {
            return Err(MenuError::InvalidStyle {
                field: "character_size",
                message: format!("must be > 0, got {}", self.character_size),
            });
        }
        Ok(())
    }
}

mod hex_color {
    use menukit_core::Color;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        if color.a < 1.0 {
            serializer.serialize_str(&color.to_hex_rgba())
        } else {
            serializer.serialize_str(&color.to_hex())
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(de::Error::custom)
    }
}
