//! The palette designer's supporting system: a JSON-backed palette store,
//! the palettes shipped as defaults, and the rules for building new
//! palettes. Shade expansion itself lives in the `shade-generator` crate
//! and is re-exported here.

#[macro_use]
extern crate lazy_static;

use thiserror::Error;

pub use serde_json;

pub mod seed;
pub mod store;
pub mod validate;

pub use shade_generator::{
    color_utils, generate, shade_ramp, slug, BaseColor, Error as ShadeError, ExpandedPalette,
    Palette, RampMode, ShadeEntry, BASE_LEVEL, DETAIL_LEVELS, OVERVIEW_LEVELS,
};

pub use store::PaletteStore;
pub use validate::{create_palette, ValidationError};

/// File name for the persisted palette list.
pub const STORE_FILE_NAME: &str = "swatchbook.json";

/// Upper bound on colors in a single palette.
pub const MAX_COLORS: usize = 20;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An IO error occurred: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed palette data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No palette with id `{0}`")]
    UnknownPalette(String),
    #[error("A palette with id `{0}` already exists")]
    DuplicatePalette(String),
    #[error(transparent)]
    Validation(#[from] validate::ValidationError),
    #[error(transparent)]
    Shades(#[from] shade_generator::Error),
}
