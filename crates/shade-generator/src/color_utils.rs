use palette::{rgb::Rgba, Hsla};

/// Parses a hex RGB string into an HSL(A) representation.
///
/// Accepts `#rgb`, `#rrggbb` and `#rrggbbaa` forms. Anything that does not
/// start with `#` is rejected, including CSS color names.
pub fn hex_to_hsla(hex: &str) -> Result<Hsla, String> {
    let c = parse_hex(hex)?.to_hsla();

    Ok(Hsla::new(c.0 as f32, c.1 as f32, c.2 as f32, c.3 as f32))
}

pub fn hsla_to_hex(color: Hsla) -> String {
    let new_color = csscolorparser::Color::from_hsla(
        color.hue.into_inner().into(),
        color.saturation.into(),
        color.lightness.into(),
        color.alpha.into(),
    );

    new_color.to_hex_string()
}

/// Channel values scaled to 0-255, for terminal rendering.
pub fn hex_to_rgba(hex: &str) -> Result<Rgba, String> {
    let c = parse_hex(hex)?;

    Ok(Rgba::new(
        c.r as f32 * 255.,
        c.g as f32 * 255.,
        c.b as f32 * 255.,
        c.a as f32,
    ))
}

/// Reformats a hex color to its canonical lowercase `#rrggbb` form.
///
/// Shorthand is expanded and any alpha component is discarded. Shade ramps
/// are always opaque.
pub fn normalize_hex(hex: &str) -> Result<String, String> {
    let c = parse_hex(hex)?;

    Ok(csscolorparser::Color::new(c.r, c.g, c.b, 1.0).to_hex_string())
}

fn parse_hex(hex: &str) -> Result<csscolorparser::Color, String> {
    if !hex.starts_with('#') {
        return Err(format!("Invalid color `{}` found", hex));
    }

    csscolorparser::parse(hex).map_err(|_| format!("Invalid color `{}` found", hex))
}
