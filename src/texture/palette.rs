//! Block color palette, loadable from JSON

use std::path::Path;

use crate::core::Result;
use crate::world::ids;

/// Color for one block id, optionally restricted to a data value and extra data
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PaletteEntry {
    pub id: u16,
    #[serde(default)]
    pub data: Option<u16>,
    #[serde(default)]
    pub extra: Option<u16>,
    /// RGBA
    pub color: [u8; 4],
}

impl PaletteEntry {
    pub fn new(id: u16, color: [u8; 4]) -> Self {
        Self { id, data: None, extra: None, color }
    }

    pub fn with_data(mut self, data: u16) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_extra(mut self, extra: u16) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Block colors the texture builder paints from
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlockPalette {
    pub entries: Vec<PaletteEntry>,
}

impl BlockPalette {
    /// Read a palette from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Add or override entries
    pub fn extend(&mut self, entries: impl IntoIterator<Item = PaletteEntry>) {
        self.entries.extend(entries);
    }
}

impl Default for BlockPalette {
    /// Colors for the common terrain blocks. Biome-colored blocks are light
    /// gray so the biome tint dominates.
    fn default() -> Self {
        Self {
            entries: vec![
                PaletteEntry::new(ids::STONE, [125, 125, 125, 255]),
                PaletteEntry::new(ids::GRASS, [215, 215, 215, 255]),
                PaletteEntry::new(ids::DIRT, [134, 96, 67, 255]),
                PaletteEntry::new(ids::COBBLESTONE, [100, 100, 100, 255]),
                PaletteEntry::new(ids::PLANKS, [157, 128, 79, 255]),
                PaletteEntry::new(ids::PLANKS, [104, 78, 47, 255]).with_data(1),
                PaletteEntry::new(ids::FLOWING_WATER, [56, 98, 220, 150]),
                PaletteEntry::new(ids::WATER, [56, 98, 220, 150]),
                PaletteEntry::new(ids::FLOWING_LAVA, [207, 92, 20, 255]),
                PaletteEntry::new(ids::LAVA, [207, 92, 20, 255]),
                PaletteEntry::new(ids::SAND, [219, 207, 163, 255]),
                PaletteEntry::new(ids::SAND, [169, 88, 33, 255]).with_data(1),
                PaletteEntry::new(ids::GRAVEL, [136, 126, 126, 255]),
                PaletteEntry::new(ids::LOG, [102, 81, 51, 255]),
                PaletteEntry::new(ids::LEAVES, [190, 190, 190, 230]),
                PaletteEntry::new(ids::GLASS, [200, 230, 235, 70]),
                PaletteEntry::new(ids::TALL_GRASS, [200, 200, 200, 120]),
                PaletteEntry::new(ids::SNOW_LAYER, [240, 251, 251, 255]),
                PaletteEntry::new(ids::ICE, [160, 190, 250, 180]),
                PaletteEntry::new(ids::SNOW, [240, 251, 251, 255]),
                PaletteEntry::new(ids::VINE, [180, 180, 180, 100]),
                PaletteEntry::new(ids::LILY_PAD, [170, 170, 170, 200]),
                PaletteEntry::new(ids::LEAVES2, [190, 190, 190, 230]),
                PaletteEntry::new(ids::DOUBLE_PLANT, [200, 200, 200, 120]),
            ],
        }
    }
}
