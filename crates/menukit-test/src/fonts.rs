//! Font loader that never touches the filesystem.

use menukit_core::{Font, FontId, FontLoader, MenuError};
use std::io;
use std::path::{Path, PathBuf};

/// Hands out font handles for any path except those marked missing.
#[derive(Debug, Default)]
pub struct StubFontLoader {
    missing: Vec<PathBuf>,
    fail_all: bool,
    loaded: Vec<PathBuf>,
}

impl StubFontLoader {
    /// Create a loader that succeeds for every path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader for which every path is missing.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Report `path` as missing.
    #[must_use]
    pub fn without(mut self, path: impl Into<PathBuf>) -> Self {
        self.missing.push(path.into());
        self
    }

    /// Paths successfully loaded so far, in order.
    #[must_use]
    pub fn loaded(&self) -> &[PathBuf] {
        &self.loaded
    }
}

impl FontLoader for StubFontLoader {
    fn load_font(&mut self, path: &Path) -> Result<Font, MenuError> {
        if self.fail_all || self.missing.iter().any(|p| p == path) {
            return Err(MenuError::FontLoad {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "stub font missing"),
            });
        }
        let id = FontId(self.loaded.len() as u32);
        self.loaded.push(path.to_path_buf());
        let family = path
            .file_stem()
            .map_or_else(|| "Stub".to_string(), |s| s.to_string_lossy().into_owned());
        Ok(Font::new(id, family, path))
    }
}
