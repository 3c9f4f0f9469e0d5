//! ARGB colors as delivered by host styling systems.

use std::fmt;
use std::str::FromStr;

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid color: {0}")]
pub struct ParseColorError(pub String);

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const BLUE: Argb = Argb(0xFF00_00FF);
    pub const TRANSPARENT: Argb = Argb(0);

    /// Pack individual channels.
    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Channels in `(r, g, b, a)` order, unpremultiplied.
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }

    /// Convert to a renderer color.
    pub fn to_color(self) -> Color {
        Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Accepts `#RRGGBB`, `#AARRGGBB`, `0xAARRGGBB` or a decimal integer.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || ParseColorError(s.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            let value = u32::from_str_radix(hex, 16).map_err(|_| err())?;
            return match hex.len() {
                6 => Ok(Argb(0xFF00_0000 | value)),
                8 => Ok(Argb(value)),
                _ => Err(err()),
            };
        }

        if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return u32::from_str_radix(hex, 16).map(Argb).map_err(|_| err());
        }

        // Android hands colors out as signed ints.
        if let Ok(signed) = s.parse::<i32>() {
            return Ok(Argb(signed as u32));
        }
        s.parse::<u32>().map(Argb).map_err(|_| err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        let color = Argb(0x80112233);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x11);
        assert_eq!(color.green(), 0x22);
        assert_eq!(color.blue(), 0x33);
        assert_eq!(color.to_rgba8(), [0x11, 0x22, 0x33, 0x80]);
        assert_eq!(Argb::from_argb8(0x80, 0x11, 0x22, 0x33), color);
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!("#FF0000".parse::<Argb>().unwrap(), Argb::RED);
        assert_eq!("#7f0000ff".parse::<Argb>().unwrap(), Argb(0x7F0000FF));
        assert_eq!("0xFF000000".parse::<Argb>().unwrap(), Argb::BLACK);
    }

    #[test]
    fn test_parse_signed_int() {
        // Color.RED as an Android int.
        assert_eq!("-65536".parse::<Argb>().unwrap(), Argb::RED);
        assert_eq!("4278190335".parse::<Argb>().unwrap(), Argb::BLUE);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("#FFF".parse::<Argb>().is_err());
        assert!("red".parse::<Argb>().is_err());
        assert!("#GG0000".parse::<Argb>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Argb::RED.to_string(), "#FFFF0000");
    }
}
