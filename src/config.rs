//! Renderer configuration, read from JSON

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::texture::BlockPalette;

/// Which render mode draws the map
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderModeKind {
    #[default]
    Plain,
    Daylight,
    Nightlight,
    Cave,
    Highlight,
}

impl RenderModeKind {
    /// Parse the lowercase name used in config files and on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self::Plain),
            "daylight" => Some(Self::Daylight),
            "nightlight" => Some(Self::Nightlight),
            "cave" => Some(Self::Cave),
            "highlight" => Some(Self::Highlight),
            _ => None,
        }
    }
}

/// Blocks to mark on the map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Block ids to highlight
    pub blocks: Vec<u16>,
    /// RGBA overlay; alpha is the blend weight
    pub color: [u8; 4],
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            blocks: Vec::new(),
            color: [255, 0, 0, 160],
        }
    }
}

/// Configuration for rendering top-down tiles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Pixels per block side
    pub texture_size: u32,
    /// Chunks per tile side
    pub tile_width: u32,
    /// Collapse deep water into one precomputed opaque layer
    pub water_preblit: bool,
    /// Active render mode
    pub render_mode: RenderModeKind,
    /// Strength of lighting modes (0.0-1.0)
    pub lighting_intensity: f32,
    /// Highlighted blocks, combined with any render mode
    pub highlight: HighlightConfig,
    /// Optional JSON palette replacing the built-in block colors
    pub palette: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            texture_size: 12,
            tile_width: 1,
            water_preblit: false,
            render_mode: RenderModeKind::Plain,
            lighting_intensity: 1.0,
            highlight: HighlightConfig::default(),
            palette: None,
        }
    }
}

impl RenderConfig {
    /// Read and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        log::debug!("Loaded render config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.texture_size == 0 {
            return Err(Error::InvalidConfig("texture_size must be at least 1".into()));
        }
        if self.tile_width == 0 {
            return Err(Error::InvalidConfig("tile_width must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.lighting_intensity) {
            return Err(Error::InvalidConfig(format!(
                "lighting_intensity {} outside 0.0-1.0",
                self.lighting_intensity
            )));
        }
        if self.render_mode == RenderModeKind::Highlight && self.highlight.blocks.is_empty() {
            log::warn!("highlight render mode without highlighted blocks draws a plain map");
        }
        Ok(())
    }

    /// Block palette: the configured file, or the built-in colors
    pub fn palette(&self) -> Result<BlockPalette> {
        match &self.palette {
            Some(path) => BlockPalette::load(path),
            None => Ok(BlockPalette::default()),
        }
    }

    /// Pixel size of one tile
    pub fn tile_size(&self) -> u32 {
        self.texture_size * 16 * self.tile_width
    }
}
