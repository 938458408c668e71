//! Palettes that ship with the tool, used whenever no store exists yet.

use shade_generator::Palette;

lazy_static! {
    static ref SEED_PALETTES: Vec<Palette> = crate::store::load(include_str!("seed/palettes.json"))
        .expect("This is a bug: the bundled seed palettes do not parse");
}

pub fn seed_palettes() -> &'static [Palette] {
    &SEED_PALETTES
}
