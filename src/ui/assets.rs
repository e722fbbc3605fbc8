//! Sprite sheet for the terminal renderer.
//!
//! The game core never looks inside these; they are only handed to the
//! renderer. A sheet that cannot be loaded is fatal at startup.

use crate::core::types::PipeKind;
use ratatui::style::{Color, Style};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;

const BUILTIN_SPRITES: &str = include_str!("../../assets/sprites.json");

/// One terminal cell's worth of sprite: a glyph and its colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sprite {
    pub glyph: char,
    pub fg: [u8; 3],
    #[serde(default)]
    pub bg: Option<[u8; 3]>,
}

impl Sprite {
    pub fn style(&self) -> Style {
        let [r, g, b] = self.fg;
        let style = Style::default().fg(Color::Rgb(r, g, b));
        match self.bg {
            Some([r, g, b]) => style.bg(Color::Rgb(r, g, b)),
            None => style,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Assets {
    pub background: Sprite,
    pub bird: Sprite,
    pub top_pipe: Sprite,
    pub bottom_pipe: Sprite,
}

impl Assets {
    /// The sheet compiled into the binary.
    pub fn builtin() -> io::Result<Self> {
        Self::parse(BUILTIN_SPRITES)
    }

    /// Load a sheet from disk.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })?;
        Self::parse(&json)
    }

    pub fn parse(json: &str) -> io::Result<Self> {
        let assets: Assets = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        for (name, sprite) in assets.named_sprites() {
            if sprite.glyph.is_control() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("sprite '{}' has a control character glyph", name),
                ));
            }
        }
        Ok(assets)
    }

    fn named_sprites(&self) -> [(&'static str, &Sprite); 4] {
        [
            ("background", &self.background),
            ("bird", &self.bird),
            ("top_pipe", &self.top_pipe),
            ("bottom_pipe", &self.bottom_pipe),
        ]
    }

    pub fn pipe(&self, kind: PipeKind) -> &Sprite {
        match kind {
            PipeKind::Top => &self.top_pipe,
            PipeKind::Bottom => &self.bottom_pipe,
        }
    }
}
