//! ARGB colour type shared by paints, icons, dividers and shadows.
//!
//! Provides:
//! - Packed 0xAARRGGBB colour with per-channel access
//! - Hex parsing (#rgb, #rrggbb, #aarrggbb)
//! - Alpha compositing onto an opaque background for cell renderers

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Packed 32-bit ARGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
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

    /// Channels in A, R, G, B order
    pub const fn channels(self) -> [u8; 4] {
        [self.alpha(), self.red(), self.green(), self.blue()]
    }

    pub const fn from_channels(c: [u8; 4]) -> Self {
        Self::from_argb(c[0], c[1], c[2], c[3])
    }

    /// Same RGB with alpha cleared. Used as the target colour of a line being hidden.
    pub const fn transparent(self) -> Self {
        Argb(self.0 & 0x00FF_FFFF)
    }

    /// Composite over an opaque background, returning the visible RGB.
    pub fn over(self, background: Argb) -> (u8, u8, u8) {
        let a = self.alpha() as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a)) / 255) as u8;
        (
            mix(self.red(), background.red()),
            mix(self.green(), background.green()),
            mix(self.blue(), background.blue()),
        )
    }
}

/// Parse hex colour string
/// Supports: #rgb, #rrggbb, #aarrggbb (leading '#' optional)
pub fn parse_hex_color(s: &str) -> Result<Argb, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex(s.to_string()));
    }
    let byte = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex(s.to_string()))
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => {
            let r = byte(0..1)?;
            let g = byte(1..2)?;
            let b = byte(2..3)?;
            Ok(Argb::from_rgb(r * 17, g * 17, b * 17))
        }
        6 => Ok(Argb::from_rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        // alpha first, like the platform's colour resources
        8 => Ok(Argb::from_argb(byte(0..2)?, byte(2..4)?, byte(4..6)?, byte(6..8)?)),
        n => Err(ColorError::InvalidLength(n)),
    }
}

/// Colour parsing error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid color length {0} (expected 3, 6, or 8 hex chars)")]
    InvalidLength(usize),
    #[error("invalid hex character in {0:?}")]
    InvalidHex(String),
}

impl std::str::FromStr for Argb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl Serialize for Argb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Argb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_hex_color(&s).map_err(serde::de::Error::custom)
    }
}
