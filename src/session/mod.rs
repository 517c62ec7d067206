//! Named-image session store.
//!
//! The store maps image names to their pixel grid plus the whole-image
//! opacity scalar the grid data model deliberately leaves out (only some
//! file formats carry alpha). It is a plain value owned by whoever runs the
//! script; there is no process-wide state anywhere in the crate.

use std::collections::HashMap;

use crate::error::{ImgridError, Result};
use crate::grid::Grid;
use crate::parser::Operation;

/// A grid bound to a name, with its out-of-band opacity.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub grid: Grid,
    /// Uniform opacity, 255 = fully opaque.
    pub alpha: u8,
}

/// The set of named images in one scripting session.
#[derive(Debug, Default)]
pub struct Session {
    images: HashMap<String, StoredImage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a grid under a name, replacing any existing binding.
    pub fn insert(&mut self, name: impl Into<String>, grid: Grid, alpha: u8) {
        self.images.insert(name.into(), StoredImage { grid, alpha });
    }

    /// Look up a named image.
    pub fn get(&self, name: &str) -> Result<&StoredImage> {
        self.images.get(name).ok_or_else(|| ImgridError::InvalidArgument {
            message: format!("no image named `{}` has been loaded", name),
            help: Some("load an image first, or check the name for typos".to_string()),
        })
    }

    /// Whether an image is bound under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    /// Number of named images.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// All bound names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.images.keys().map(|s| s.as_str())
    }

    /// Apply one operation to `source` and bind the result as `dest`.
    ///
    /// The destination inherits the source's alpha; the source binding is
    /// left untouched (the engine never mutates a grid in place).
    pub fn apply(&mut self, op: &Operation, source: &str, dest: &str) -> Result<()> {
        let entry = self.get(source)?;
        let alpha = entry.alpha;
        let result = op.apply(&entry.grid)?;
        self.insert(dest, result, alpha);
        Ok(())
    }
}
