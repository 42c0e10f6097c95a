use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::Argb;
use crate::geometry::{ChainStyle, Gravity, Insets};
use crate::paint::DEFAULT_TEXT_SIZE;
use crate::shadow::ShadowConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub appearance: AppearanceConfig,
    pub animation: AnimationConfig,
    pub rows: Vec<ItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub title: String,
    /// Colour transparent text is blended against
    pub background: Argb,
    pub selection_background: Argb,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Length of a timed enable/disable run
    pub duration_ms: u64,
    /// Progress change per scrub key press
    pub scrub_step: f32,
}

/// Configuration of one item row, read once when the row is built
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemConfig {
    pub brief_text: Option<String>,
    /// Used when `brief_text` is absent or empty
    pub brief_default_text: Option<String>,
    pub body_text: Option<String>,
    /// Used when `body_text` is absent or empty
    pub body_default_text: Option<String>,
    pub brief_gravity: Gravity,
    pub body_gravity: Gravity,
    pub chain_style: ChainStyle,
    pub brief_paint: PaintConfig,
    pub body_paint: PaintConfig,
    pub start_icon: Option<IconConfig>,
    pub end_icon: Option<IconConfig>,
    /// Gap between an icon and the text
    pub drawable_padding: i32,
    /// Gap between the brief and body lines
    pub text_interval: i32,
    pub padding: Insets,
    pub divider: Option<DividerConfig>,
    pub shadow: ShadowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    pub color: Argb,
    pub size: f32,
    /// Optional font file; failures fall back to the default face
    pub typeface: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// What a cell renderer draws for the icon
    pub glyph: String,
    pub width: i32,
    pub height: i32,
    pub color: Argb,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerConfig {
    pub height: f32,
    pub color: Argb,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            appearance: AppearanceConfig::default(),
            animation: AnimationConfig::default(),
            rows: sample_rows(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            title: " item-row ".to_string(),
            background: Argb::from_rgb(13, 17, 22),
            selection_background: Argb::from_rgb(20, 28, 42),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            scrub_step: 0.1,
        }
    }
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            brief_text: None,
            brief_default_text: None,
            body_text: None,
            body_default_text: None,
            brief_gravity: Gravity::Left,
            body_gravity: Gravity::Left,
            chain_style: ChainStyle::SpreadInside,
            brief_paint: PaintConfig::default(),
            body_paint: PaintConfig::default(),
            start_icon: None,
            end_icon: None,
            drawable_padding: 0,
            text_interval: 0,
            padding: Insets::ZERO,
            divider: None,
            shadow: ShadowConfig::default(),
        }
    }
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            color: Argb::BLACK,
            size: DEFAULT_TEXT_SIZE,
            typeface: None,
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            glyph: "●".to_string(),
            width: 1,
            height: 1,
            color: Argb::WHITE,
            visible: true,
        }
    }
}

impl Default for DividerConfig {
    fn default() -> Self {
        Self {
            height: 1.0,
            color: Argb::from_rgb(55, 65, 81),
        }
    }
}

fn non_empty(text: &Option<String>) -> Option<&str> {
    text.as_deref().filter(|t| !t.is_empty())
}

impl ItemConfig {
    /// Brief text after falling back to the default text
    pub fn initial_brief_text(&self) -> Option<String> {
        non_empty(&self.brief_text)
            .or_else(|| non_empty(&self.brief_default_text))
            .map(str::to_string)
    }

    /// Body text after falling back to the default text
    pub fn initial_body_text(&self) -> Option<String> {
        non_empty(&self.body_text)
            .or_else(|| non_empty(&self.body_default_text))
            .map(str::to_string)
    }
}

/// Rows shown when the config file defines none
fn sample_rows() -> Vec<ItemConfig> {
    let light = PaintConfig { color: Argb::from_rgb(229, 234, 241), ..PaintConfig::default() };
    let dim = PaintConfig { color: Argb::from_rgb(156, 163, 175), ..PaintConfig::default() };
    let icon = |glyph: &str, width| IconConfig {
        glyph: glyph.to_string(),
        width,
        color: Argb::from_rgb(180, 83, 9),
        ..IconConfig::default()
    };
    let base = ItemConfig {
        brief_paint: dim,
        body_paint: light,
        drawable_padding: 1,
        padding: Insets::uniform(1),
        divider: Some(DividerConfig::default()),
        ..ItemConfig::default()
    };

    vec![
        ItemConfig {
            brief_text: Some("Wi-Fi".to_string()),
            body_text: Some("Connected to darkwall-5G".to_string()),
            start_icon: Some(icon("▲", 2)),
            end_icon: Some(icon("›", 1)),
            ..base.clone()
        },
        ItemConfig {
            brief_text: Some("Storage".to_string()),
            body_text: Some("41 GB of 128 GB used".to_string()),
            brief_gravity: Gravity::Center,
            body_gravity: Gravity::Center,
            chain_style: ChainStyle::Packed,
            start_icon: Some(icon("■", 2)),
            end_icon: Some(icon("›", 1)),
            ..base.clone()
        },
        ItemConfig {
            brief_text: Some("Battery".to_string()),
            body_text: Some("87%, about 9 hours left".to_string()),
            brief_gravity: Gravity::Right,
            body_gravity: Gravity::Right,
            chain_style: ChainStyle::Packed,
            start_icon: Some(icon("◆", 2)),
            ..base.clone()
        },
        ItemConfig {
            body_text: Some("About this device".to_string()),
            end_icon: Some(icon("›", 1)),
            text_interval: 0,
            ..base
        },
    ]
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load `path`, or the file at [`AppConfig::default_path`] when none is given
    pub fn load_from(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::load(&Self::default_path().to_string_lossy()),
        }
    }

    /// `$XDG_CONFIG_HOME/item-row/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("item-row")
            .join("config.toml")
    }
}
