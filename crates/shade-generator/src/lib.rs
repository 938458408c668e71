//! Expands palettes of user-picked base colors into graded shade ramps.
//!
//! Expansion is a pure transform. The same palette always produces the
//! same ramps, including the derived shade ids, so callers can link to a
//! specific shade and trust the link to keep working.

use indexmap::IndexMap;
use palette::Hsla;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod color_utils;
pub mod slug;

mod ramp;

pub use ramp::{RampMode, BASE_LEVEL, DETAIL_LEVELS, OVERVIEW_LEVELS};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid color `{value}` for `{name}`. Expected a hex RGB value like `#1a936f`")]
    InvalidColorFormat { name: String, value: String },
    #[error("Palette `{0}` has no colors to expand")]
    EmptyPalette(String),
}

/// A user-picked named color, before shade expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseColor {
    pub name: String,
    pub color: String,
}

/// A named, ordered collection of base colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: String,
    pub palette_name: String,
    pub colors: Vec<BaseColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// One rung of a generated ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadeEntry {
    pub name: String,
    pub id: String,
    pub color: String,
}

/// A palette together with its generated ramps.
///
/// Computed on demand whenever a palette is read for display. Never
/// persisted; only the base [`Palette`] is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedPalette {
    pub id: String,
    pub palette_name: String,
    pub colors: Vec<BaseColor>,
    pub shades: IndexMap<String, Vec<ShadeEntry>>,
}

/// Expands every base color of a palette into its graded ramp.
///
/// The `shades` mapping is keyed by color name and preserves the
/// palette's color order; color names are expected to be unique within
/// the palette. Fails with [`Error::EmptyPalette`] when there is nothing
/// to expand, and with [`Error::InvalidColorFormat`] when a base color
/// does not parse; no partial result is ever returned.
pub fn generate(palette: &Palette, mode: RampMode) -> Result<ExpandedPalette> {
    if palette.colors.is_empty() {
        return Err(Error::EmptyPalette(palette.id.clone()));
    }

    let mut shades = IndexMap::with_capacity(palette.colors.len());

    for base in &palette.colors {
        shades.insert(base.name.clone(), shade_ramp(base, &palette.id, mode)?);
    }

    Ok(ExpandedPalette {
        id: palette.id.clone(),
        palette_name: palette.palette_name.clone(),
        colors: palette.colors.clone(),
        shades,
    })
}

/// Expands a single base color into its graded ramp.
///
/// The base color appears verbatim, normalized to lowercase `#rrggbb`, at
/// level [`BASE_LEVEL`]. Every other level keeps the base hue and
/// saturation and only moves along the lightness axis, lightest first.
/// Shade ids take the form `<palette id>-<color slug>-<level>`.
pub fn shade_ramp(base: &BaseColor, palette_id: &str, mode: RampMode) -> Result<Vec<ShadeEntry>> {
    let invalid = || Error::InvalidColorFormat {
        name: base.name.clone(),
        value: base.color.clone(),
    };

    let base_hex = color_utils::normalize_hex(&base.color).map_err(|_| invalid())?;
    let parsed = color_utils::hex_to_hsla(&base_hex).map_err(|_| invalid())?;

    let color_slug = slug::slugify(&base.name);

    let entries = mode
        .levels()
        .iter()
        .map(|&level| {
            let color = if level == BASE_LEVEL {
                base_hex.clone()
            } else {
                let lightness = ramp::lightness_for_level(parsed.lightness, level);

                color_utils::hsla_to_hex(Hsla::new(parsed.hue, parsed.saturation, lightness, 1.0))
            };

            ShadeEntry {
                name: format!("{} {}", base.name, level),
                id: format!("{}-{}-{}", palette_id, color_slug, level),
                color,
            }
        })
        .collect();

    Ok(entries)
}
