use crate::render;
use crate::Result;
use libswatchbook::{generate, PaletteStore, RampMode, STORE_FILE_NAME};

use std::path::Path;

pub struct ListArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: ListArgs<W>) -> Result<()> {
    let store = PaletteStore::open(args.working_dir.join(STORE_FILE_NAME))?;

    for palette in store.palettes() {
        let expanded = generate(palette, RampMode::Overview)?;

        match &palette.emoji {
            Some(emoji) => writeln!(
                args.stdout,
                "{} {} ({})",
                emoji, palette.palette_name, palette.id
            )?,
            None => writeln!(args.stdout, "{} ({})", palette.palette_name, palette.id)?,
        }

        for (name, ramp) in &expanded.shades {
            writeln!(args.stdout, "  {} {}", render::ramp_line(ramp), name)?;
        }

        writeln!(args.stdout)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    #[test]
    fn lists_the_seed_palettes_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        let result = run(ListArgs {
            working_dir: temp_dir.path(),
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();

        assert!(output.contains("Material Design (material-design)"));
        assert!(output.contains("Flat UI Colors v1 (flat-ui-colors-v1)"));
        assert!(output.contains("Peter River"));
    }

    #[test]
    fn lists_whatever_the_store_holds() {
        let temp_dir = TempDir::new().unwrap();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        std::fs::write(
            temp_dir.path().join(STORE_FILE_NAME),
            r##"[{ "id": "mine", "paletteName": "Mine", "colors": [{ "name": "teal", "color": "#008080" }] }]"##,
        )
        .unwrap();

        let result = run(ListArgs {
            working_dir: temp_dir.path(),
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();

        assert!(output.contains("Mine (mine)"));
        assert!(!output.contains("Material Design"));
    }
}
