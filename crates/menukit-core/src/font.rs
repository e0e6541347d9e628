//! Font handles and loaders.
//!
//! A [`Font`] is only a handle: the surface that draws and measures text
//! decides what the handle refers to. Loading goes through a [`FontLoader`]
//! so hosts can back it with their own asset system; [`FsFontLoader`] reads
//! TrueType/OpenType files from disk.

use crate::MenuError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

/// Identifier of a loaded font, unique within its loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontId(pub u32);

/// Handle to a loaded font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    id: FontId,
    family: String,
    path: PathBuf,
}

impl Font {
    /// Create a font handle.
    #[must_use]
    pub fn new(id: FontId, family: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id,
            family: family.into(),
            path: path.into(),
        }
    }

    /// Loader-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> FontId {
        self.id
    }

    /// Family name reported by the font.
    #[must_use]
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Path the font was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Source of fonts for menu construction.
pub trait FontLoader {
    /// Load the font at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::FontLoad`] if the resource cannot be read and
    /// [`MenuError::FontParse`] if it is not a usable font.
    fn load_font(&mut self, path: &Path) -> Result<Font, MenuError>;
}

#[derive(Debug)]
struct LoadedFace {
    font: Font,
    data: Arc<[u8]>,
}

/// Loads font files from the filesystem and validates them with
/// `ttf-parser`.
///
/// Loading the same path twice returns the same handle. The raw bytes stay
/// owned by the loader so a rasterizing surface can look them up by
/// [`FontId`].
#[derive(Debug, Default)]
pub struct FsFontLoader {
    faces: Vec<LoadedFace>,
}

impl FsFontLoader {
    /// Create an empty loader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw font bytes for a loaded font.
    #[must_use]
    pub fn font_data(&self, id: FontId) -> Option<Arc<[u8]>> {
        self.faces
            .iter()
            .find(|face| face.font.id == id)
            .map(|face| Arc::clone(&face.data))
    }

    /// Number of distinct fonts loaded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Check if nothing has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    fn family_name(face: &ttf_parser::Face<'_>) -> Option<String> {
        face.names()
            .into_iter()
            .filter(|name| name.name_id == ttf_parser::name_id::FAMILY)
            .find_map(|name| name.to_string())
    }
}

impl FontLoader for FsFontLoader {
    fn load_font(&mut self, path: &Path) -> Result<Font, MenuError> {
        if let Some(face) = self.faces.iter().find(|face| face.font.path == path) {
            return Ok(face.font.clone());
        }

        let data = std::fs::read(path).map_err(|source| MenuError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let family = match ttf_parser::Face::parse(&data, 0) {
            Ok(face) => Self::family_name(&face),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "font file is not a usable face");
                return Err(MenuError::FontParse {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        };
        let family = family.unwrap_or_else(|| {
            path.file_stem()
                .map_or_else(String::new, |stem| stem.to_string_lossy().into_owned())
        });

        let id = FontId(self.faces.len() as u32);
        let font = Font::new(id, family, path);
        debug!(path = %path.display(), family = font.family(), id = id.0, "loaded font");

        self.faces.push(LoadedFace {
            font: font.clone(),
            data: data.into(),
        });
        Ok(font)
    }
}
