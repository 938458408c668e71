//! JSON-file-backed persistence for the palette list.

use std::fs;
use std::path::{Path, PathBuf};

use shade_generator::Palette;

use crate::{seed, Error, Result};

/// The stored palette list, written through to a single JSON file.
pub struct PaletteStore {
    path: PathBuf,
    palettes: Vec<Palette>,
}

impl PaletteStore {
    /// Opens the store at `path`.
    ///
    /// A missing file is not an error: the store starts from the built-in
    /// seed palettes, the same way a first visit starts from the defaults.
    /// A file that exists but does not parse IS an error, never a silent
    /// reset.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let palettes = if path.exists() {
            load(&fs::read_to_string(&path)?)?
        } else {
            seed::seed_palettes().to_vec()
        };

        Ok(PaletteStore { path, palettes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    pub fn find_palette(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Appends a palette and writes the store through to disk.
    pub fn save_palette(&mut self, palette: Palette) -> Result<()> {
        if self.find_palette(&palette.id).is_some() {
            return Err(Error::DuplicatePalette(palette.id));
        }

        self.palettes.push(palette);
        self.sync()
    }

    /// Removes the palette with the given id and writes through to disk.
    ///
    /// An unknown id is an error, so callers can tell the difference
    /// between "deleted" and "was never there".
    pub fn delete_palette(&mut self, id: &str) -> Result<()> {
        if self.find_palette(id).is_none() {
            return Err(Error::UnknownPalette(id.to_owned()));
        }

        self.palettes.retain(|p| p.id != id);
        self.sync()
    }

    /// Writes the current palette list to the store file.
    pub fn sync(&self) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(&self.palettes)?)?;

        Ok(())
    }
}

/// Parses a serialized palette list.
pub fn load(input: &str) -> Result<Vec<Palette>> {
    Ok(serde_json::from_str(input)?)
}
