use crate::Result;
use libswatchbook::{PaletteStore, STORE_FILE_NAME};
use owo_colors::{OwoColorize as _, Stream};

use indoc::formatdoc;

use std::path::Path;

pub struct InitArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: InitArgs<W>) -> Result<()> {
    let store_path = args.working_dir.join(STORE_FILE_NAME);

    write!(args.stdout, "Creating {}...", STORE_FILE_NAME)?;

    let store = PaletteStore::open(store_path)?;
    store.sync()?;

    writeln!(
        args.stdout,
        "{}",
        "✓".if_supports_color(Stream::Stdout, |s| s.green())
    )?;

    let intro = formatdoc!(
        r#"
        Done! You are starting off with {} palettes.

        Try:
          swatchbook list
          swatchbook show flat-ui-colors-v1
          swatchbook show flat-ui-colors-v1 peter-river
        "#,
        store.palettes().len()
    );

    write!(args.stdout, "{}", intro)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read_to_string;
    use temp_dir::TempDir;

    #[test]
    fn creates_a_store_file_with_the_seed_palettes() {
        let temp_dir = TempDir::new().unwrap();
        let working_dir = temp_dir.path();
        let mut fake_stdout = std::io::sink();

        let result = run(InitArgs {
            working_dir,
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let contents = read_to_string(working_dir.join(STORE_FILE_NAME)).unwrap();

        assert!(
            contents.contains("Material Design"),
            "seed palettes missing from the store file: {}",
            contents
        );
    }

    #[test]
    fn logs_out_progress_to_stdout() {
        let temp_dir = TempDir::new().unwrap();
        let working_dir = temp_dir.path();
        let mut fake_stdout = std::io::Cursor::new(Vec::new());

        let result = run(InitArgs {
            working_dir,
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let output = String::from_utf8(fake_stdout.into_inner()).unwrap();

        assert!(output.contains("Creating swatchbook.json"));
        assert!(output.contains("Done!"));
    }

    #[test]
    fn keeps_an_existing_store_intact() {
        let temp_dir = TempDir::new().unwrap();
        let working_dir = temp_dir.path();
        let mut fake_stdout = std::io::sink();

        std::fs::write(
            working_dir.join(STORE_FILE_NAME),
            r##"[{ "id": "mine", "paletteName": "Mine", "colors": [{ "name": "teal", "color": "#008080" }] }]"##,
        )
        .unwrap();

        let result = run(InitArgs {
            working_dir,
            stdout: &mut fake_stdout,
        });

        assert!(result.is_ok());

        let contents = read_to_string(working_dir.join(STORE_FILE_NAME)).unwrap();

        assert!(contents.contains("Mine"));
        assert!(!contents.contains("Material Design"));
    }
}
