use libswatchbook::{color_utils, ShadeEntry};
use owo_colors::{OwoColorize as _, Stream};

/// One shade as a colored block when the terminal supports it. Falls back
/// to the raw hex value for anything that will not parse.
pub(crate) fn swatch(hex: &str) -> String {
    match color_utils::hex_to_rgba(hex) {
        Ok(rgba) => {
            let (r, g, b) = (rgba.red as u8, rgba.green as u8, rgba.blue as u8);

            format!(
                "{}",
                "██".if_supports_color(Stream::Stdout, move |s| s.truecolor(r, g, b))
            )
        }
        Err(_) => hex.to_owned(),
    }
}

pub(crate) fn ramp_line(entries: &[ShadeEntry]) -> String {
    entries
        .iter()
        .map(|entry| swatch(&entry.color))
        .collect::<String>()
}
