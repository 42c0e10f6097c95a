//! Text paints and typeface loading.
//!
//! A custom typeface is optional. When it cannot be loaded the paint keeps
//! the default face and the failure is only logged.

use std::path::{Path, PathBuf};

use crate::color::Argb;
use crate::geometry::Gravity;

/// Default text size in pixels
pub const DEFAULT_TEXT_SIZE: f32 = 28.0;

/// Font face used by a paint
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Typeface {
    #[default]
    Default,
    Custom { path: PathBuf },
}

/// Typeface loading error
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("failed to read font file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a TrueType/OpenType font")]
    NotAFont { path: PathBuf },
}

/// Leading tags of sfnt-based font files (TrueType, OpenType CFF, Apple, collections)
const FONT_MAGIC: [[u8; 4]; 4] = [*b"\x00\x01\x00\x00", *b"OTTO", *b"true", *b"ttcf"];

impl Typeface {
    /// Load a typeface from a font file
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let bytes = std::fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let is_font = bytes.len() >= 4 && FONT_MAGIC.iter().any(|magic| bytes[..4] == magic[..]);
        if !is_font {
            return Err(FontError::NotAFont { path: path.to_path_buf() });
        }
        Ok(Typeface::Custom { path: path.to_path_buf() })
    }
}

/// Alignment of drawn text relative to its anchor x
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Text starts at the anchor
    #[default]
    Left,
    /// Text is centred on the anchor
    Center,
    /// Text ends at the anchor
    Right,
}

impl From<Gravity> for TextAlign {
    fn from(gravity: Gravity) -> Self {
        match gravity {
            Gravity::Left => TextAlign::Left,
            Gravity::Center => TextAlign::Center,
            Gravity::Right => TextAlign::Right,
        }
    }
}

/// Everything needed to measure and draw a line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextPaint {
    pub color: Argb,
    pub size: f32,
    pub typeface: Typeface,
    pub align: TextAlign,
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            color: Argb::BLACK,
            size: DEFAULT_TEXT_SIZE,
            typeface: Typeface::Default,
            align: TextAlign::Left,
        }
    }
}

impl TextPaint {
    /// Build a paint, falling back to the default face if `typeface` fails to load
    pub fn new(label: &str, color: Argb, size: f32, typeface: Option<&Path>, gravity: Gravity) -> Self {
        let typeface = match typeface {
            Some(path) => Typeface::from_file(path).unwrap_or_else(|e| {
                tracing::info!("No special {} text typeface set: {}", label, e);
                Typeface::Default
            }),
            None => Typeface::Default,
        };
        Self {
            color,
            size: if size > 0.0 { size } else { DEFAULT_TEXT_SIZE },
            typeface,
            align: gravity.into(),
        }
    }
}
