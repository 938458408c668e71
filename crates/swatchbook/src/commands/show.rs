use crate::render;
use crate::Result;
use libswatchbook::{generate, slug, ExpandedPalette, PaletteStore, RampMode, STORE_FILE_NAME};

use std::path::Path;

pub struct ShowArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub palette_id: &'a str,
    pub color_id: Option<&'a str>,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ShowArgs<W>) -> Result<()> {
    let store = PaletteStore::open(args.working_dir.join(STORE_FILE_NAME))?;

    let palette = store
        .find_palette(args.palette_id)
        .ok_or_else(|| libswatchbook::Error::UnknownPalette(args.palette_id.to_owned()))?;

    let expanded = generate(palette, RampMode::Detail)?;

    match args.color_id {
        Some(color_id) => show_color(&expanded, color_id, args.stdout),
        None => show_palette(&expanded, args.stdout),
    }
}

fn show_palette<W: std::io::Write>(expanded: &ExpandedPalette, stdout: &mut W) -> Result<()> {
    writeln!(stdout, "{} ({})", expanded.palette_name, expanded.id)?;

    for (name, ramp) in &expanded.shades {
        writeln!(stdout, "  {} {}", render::ramp_line(ramp), name)?;
    }

    Ok(())
}

fn show_color<W: std::io::Write>(
    expanded: &ExpandedPalette,
    color_id: &str,
    stdout: &mut W,
) -> Result<()> {
    // Color ids are slugs of the color name, the same slugs the shade ids
    // are built from.
    let ramp = expanded
        .shades
        .iter()
        .find(|(name, _)| slug::slugify(name) == color_id)
        .map(|(_, ramp)| ramp)
        .ok_or_else(|| {
            crate::Error::General(format!(
                "No color `{}` in palette `{}`",
                color_id, expanded.id
            ))
        })?;

    for entry in ramp {
        writeln!(
            stdout,
            "{} {}  {}  ({})",
            render::swatch(&entry.color),
            entry.color,
            entry.name,
            entry.id
        )?;
    }

    Ok(())
}
