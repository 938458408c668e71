//! Rules for the palette-creation workflow.
//!
//! Every rule is a pure predicate over the current color or palette list,
//! so callers can run them one at a time (for per-field feedback) or all
//! at once through [`validate_new_palette`].

use shade_generator::{color_utils, slug, BaseColor, Palette};
use thiserror::Error;

use crate::MAX_COLORS;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Give the palette a name")]
    EmptyPaletteName,
    #[error("A palette named `{0}` already exists")]
    DuplicatePaletteName(String),
    #[error("Add at least one color before saving")]
    NoColors,
    #[error("A palette can hold at most {} colors", MAX_COLORS)]
    PaletteFull,
    #[error("Give the color a name")]
    EmptyColorName,
    #[error("The name `{0}` is already used in this palette")]
    DuplicateColorName(String),
    #[error("The color `{0}` is already in this palette")]
    DuplicateColor(String),
    #[error("Invalid color `{0}`. Expected a hex RGB value")]
    InvalidColor(String),
}

/// Color names are compared case-insensitively: `Teal` and `teal` collide.
pub fn color_name_is_unique(colors: &[BaseColor], name: &str) -> bool {
    colors.iter().all(|c| !c.name.eq_ignore_ascii_case(name))
}

/// Color values are compared by exact hex string.
pub fn color_is_unused(colors: &[BaseColor], color: &str) -> bool {
    colors.iter().all(|c| c.color != color)
}

pub fn palette_name_is_unique(palettes: &[Palette], name: &str) -> bool {
    palettes
        .iter()
        .all(|p| !p.palette_name.eq_ignore_ascii_case(name))
}

pub fn palette_has_room(colors: &[BaseColor]) -> bool {
    colors.len() < MAX_COLORS
}

/// Runs every per-color rule for a candidate against the current list.
pub fn validate_new_color(
    colors: &[BaseColor],
    candidate: &BaseColor,
) -> Result<(), ValidationError> {
    if candidate.name.trim().is_empty() {
        return Err(ValidationError::EmptyColorName);
    }

    if !palette_has_room(colors) {
        return Err(ValidationError::PaletteFull);
    }

    if color_utils::hex_to_hsla(&candidate.color).is_err() {
        return Err(ValidationError::InvalidColor(candidate.color.clone()));
    }

    if !color_name_is_unique(colors, &candidate.name) {
        return Err(ValidationError::DuplicateColorName(candidate.name.clone()));
    }

    if !color_is_unused(colors, &candidate.color) {
        return Err(ValidationError::DuplicateColor(candidate.color.clone()));
    }

    Ok(())
}

/// Runs every rule a new palette must satisfy before it can be saved.
pub fn validate_new_palette(
    palettes: &[Palette],
    name: &str,
    colors: &[BaseColor],
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyPaletteName);
    }

    if !palette_name_is_unique(palettes, name) {
        return Err(ValidationError::DuplicatePaletteName(name.to_owned()));
    }

    if colors.is_empty() {
        return Err(ValidationError::NoColors);
    }

    if colors.len() > MAX_COLORS {
        return Err(ValidationError::PaletteFull);
    }

    // Each color is checked against the ones before it, the same way the
    // list is built up one color at a time.
    for (i, color) in colors.iter().enumerate() {
        validate_new_color(&colors[..i], color)?;
    }

    Ok(())
}

/// Builds a palette record after running every creation rule.
///
/// The id is a slug of the palette name, so links to the palette stay
/// stable. Invalid input never constructs a record.
pub fn create_palette(
    palettes: &[Palette],
    name: &str,
    emoji: Option<String>,
    colors: Vec<BaseColor>,
) -> Result<Palette, ValidationError> {
    validate_new_palette(palettes, name, &colors)?;

    Ok(Palette {
        id: slug::slugify(name),
        palette_name: name.to_owned(),
        colors,
        emoji,
    })
}

/// Deterministic pick for "give me a color I have not used yet": the first
/// color across the stored palettes whose name and value are both free in
/// the current list.
pub fn next_unused_color(palettes: &[Palette], colors: &[BaseColor]) -> Option<BaseColor> {
    palettes
        .iter()
        .flat_map(|p| p.colors.iter())
        .find(|c| color_name_is_unique(colors, &c.name) && color_is_unused(colors, &c.color))
        .cloned()
}
