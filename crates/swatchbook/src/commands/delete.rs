use crate::Result;
use libswatchbook::{PaletteStore, STORE_FILE_NAME};

use std::path::Path;

pub struct DeleteArgs<'a, W: std::io::Write> {
    pub working_dir: &'a Path,
    pub palette_id: &'a str,
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: DeleteArgs<W>) -> Result<()> {
    let mut store = PaletteStore::open(args.working_dir.join(STORE_FILE_NAME))?;

    store.delete_palette(args.palette_id)?;

    writeln!(args.stdout, "Deleted palette `{}`", args.palette_id)?;

    Ok(())
}
