#![allow(dead_code)]

use libswatchbook::{slug, BaseColor, Palette};

pub struct PaletteBuilder {
    pub name: String,
    pub emoji: Option<String>,
    pub colors: Vec<BaseColor>,
}

impl PaletteBuilder {
    pub fn named(name: &str) -> Self {
        PaletteBuilder {
            name: name.to_owned(),
            emoji: None,
            colors: Vec::new(),
        }
    }

    pub fn emoji(mut self, emoji: &str) -> Self {
        self.emoji = Some(emoji.to_owned());
        self
    }

    pub fn color(mut self, name: &str, color: &str) -> Self {
        self.colors.push(BaseColor {
            name: name.to_owned(),
            color: color.to_owned(),
        });
        self
    }

    /// Builds the record directly, without the creation rules. Tests that
    /// exercise validation go through `create_palette` instead.
    pub fn build(self) -> Palette {
        Palette {
            id: slug::slugify(&self.name),
            palette_name: self.name,
            colors: self.colors,
            emoji: self.emoji,
        }
    }
}
