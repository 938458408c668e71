use crate::Result;
use libswatchbook::{create_palette, BaseColor, PaletteStore, STORE_FILE_NAME};
use owo_colors::{OwoColorize as _, Stream};

use std::path::Path;

pub struct NewArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub name: &'a str,
    pub emoji: Option<String>,
    pub colors: &'a [String],
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: NewArgs<W>) -> Result<()> {
    let mut store = PaletteStore::open(args.working_dir.join(STORE_FILE_NAME))?;

    let colors = args
        .colors
        .iter()
        .map(|pair| parse_color_pair(pair))
        .collect::<Result<Vec<_>>>()?;

    let palette = create_palette(store.palettes(), args.name, args.emoji.clone(), colors)
        .map_err(libswatchbook::Error::from)?;

    let id = palette.id.clone();
    store.save_palette(palette)?;

    writeln!(
        args.stdout,
        "Saved palette `{}` {}",
        id,
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )?;

    Ok(())
}

/// Colors arrive on the command line as `name=#hex` pairs.
fn parse_color_pair(pair: &str) -> Result<BaseColor> {
    match pair.split_once('=') {
        Some((name, color)) if !name.is_empty() && !color.is_empty() => Ok(BaseColor {
            name: name.to_owned(),
            color: color.to_owned(),
        }),
        _ => Err(crate::Error::General(format!(
            "Expected a `name=#hex` pair, got `{}`",
            pair
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use temp_dir::TempDir;

    fn new_palette(dir: &Path, name: &str, colors: &[&str]) -> Result<String> {
        let mut fake_stdout = std::io::Cursor::new(Vec::new());
        let colors: Vec<String> = colors.iter().map(|s| s.to_string()).collect();

        run(NewArgs {
            working_dir: dir,
            name,
            emoji: None,
            colors: &colors,
            stdout: &mut fake_stdout,
        })?;

        Ok(String::from_utf8(fake_stdout.into_inner()).unwrap())
    }

    #[test]
    fn saves_a_valid_palette() {
        let temp_dir = TempDir::new().unwrap();

        let output = new_palette(
            temp_dir.path(),
            "Harbor Lights",
            &["harbor=#1f6feb", "buoy=#e25822"],
        )
        .unwrap();

        assert!(output.contains("Saved palette `harbor-lights`"));

        let store = PaletteStore::open(temp_dir.path().join(STORE_FILE_NAME)).unwrap();
        let palette = store.find_palette("harbor-lights").unwrap();

        assert_eq!(palette.colors.len(), 2);
        assert_eq!(palette.colors[0].color, "#1f6feb");
    }

    #[test]
    fn rejects_a_malformed_color_pair() {
        let temp_dir = TempDir::new().unwrap();

        let result = new_palette(temp_dir.path(), "Broken", &["harbor"]);

        assert!(matches!(result, Err(crate::Error::General(_))));
    }

    #[test]
    fn rejects_an_invalid_hex_value() {
        let temp_dir = TempDir::new().unwrap();

        assert!(new_palette(temp_dir.path(), "Broken", &["harbor=blue-ish"]).is_err());
    }

    #[test]
    fn rejects_a_name_collision_with_the_seeds() {
        let temp_dir = TempDir::new().unwrap();

        assert!(new_palette(temp_dir.path(), "material design", &["teal=#008080"]).is_err());
    }
}
