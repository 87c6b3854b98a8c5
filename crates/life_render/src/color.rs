//! Colors and the viewer palette

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 8-bit RGBA color, laid out as it is stored in a pixel buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::opaque(0xFF, 0xFF, 0xFF);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color '{0}', expected #RRGGBB or #RRGGBBAA")]
pub struct ColorParseError(pub String);

impl FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ColorParseError(text.to_string());
        let hex = text.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 0xFF };
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a,
        })
    }
}

impl TryFrom<String> for Rgba {
    type Error = ColorParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 0xFF {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// The three colors the renderer paints with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grid: Rgba,
    pub dead: Rgba,
    pub alive: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Rgba::opaque(0xCC, 0xCC, 0xCC),
            dead: Rgba::WHITE,
            alive: Rgba::BLACK,
        }
    }
}
