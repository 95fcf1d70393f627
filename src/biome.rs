//! Biomes: per-column classification that tints grass, foliage and water

use noise::{NoiseFn, Perlin};

use crate::core::{BlockPos, LocalBlockPos};
use crate::world::{Chunk, ids};

/// Biome types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Biome {
    Ocean,
    Beach,
    Desert,
    #[default]
    Plains,
    Forest,
    Taiga,
    Tundra,
    Mountains,
    Snow,
}

impl Biome {
    pub const ALL: [Biome; 9] = [
        Biome::Ocean,
        Biome::Beach,
        Biome::Desert,
        Biome::Plains,
        Biome::Forest,
        Biome::Taiga,
        Biome::Tundra,
        Biome::Mountains,
        Biome::Snow,
    ];

    /// Numeric id stored per column in chunks
    pub fn to_id(&self) -> u8 {
        match self {
            Biome::Ocean => 0,
            Biome::Plains => 1,
            Biome::Desert => 2,
            Biome::Mountains => 3,
            Biome::Forest => 4,
            Biome::Taiga => 5,
            Biome::Tundra => 12,
            Biome::Beach => 16,
            Biome::Snow => 140,
        }
    }

    /// Convert a stored id back to a biome
    pub fn from_id(id: u8) -> Self {
        match id {
            0 => Biome::Ocean,
            2 => Biome::Desert,
            3 => Biome::Mountains,
            4 => Biome::Forest,
            5 => Biome::Taiga,
            12 => Biome::Tundra,
            16 => Biome::Beach,
            140 => Biome::Snow,
            _ => Biome::Plains, // Default/unknown → Plains
        }
    }

    /// Grass tint (RGB)
    pub fn grass_color(&self) -> [u8; 3] {
        match self {
            Biome::Ocean | Biome::Plains | Biome::Beach => [145, 189, 89],
            Biome::Desert => [191, 183, 85],
            Biome::Forest => [121, 192, 90],
            Biome::Taiga => [134, 183, 131],
            Biome::Mountains => [138, 182, 137],
            Biome::Tundra | Biome::Snow => [128, 180, 151],
        }
    }

    /// Leaves and vine tint (RGB)
    pub fn foliage_color(&self) -> [u8; 3] {
        match self {
            Biome::Ocean | Biome::Plains | Biome::Beach => [119, 171, 47],
            Biome::Desert => [174, 164, 42],
            Biome::Forest => [89, 174, 48],
            Biome::Taiga => [104, 164, 100],
            Biome::Mountains => [109, 163, 107],
            Biome::Tundra | Biome::Snow => [96, 161, 123],
        }
    }

    /// Water tint (RGB)
    pub fn water_color(&self) -> [u8; 3] {
        match self {
            Biome::Ocean => [48, 84, 200],
            Biome::Beach | Biome::Plains | Biome::Forest => [63, 118, 228],
            Biome::Desert => [50, 166, 200],
            Biome::Taiga | Biome::Mountains => [40, 112, 210],
            Biome::Tundra | Biome::Snow => [61, 87, 214],
        }
    }

    /// Tint applied to the given block in this biome, if any
    pub fn tint_for(&self, id: u16) -> Option<[u8; 3]> {
        match id {
            ids::GRASS | ids::TALL_GRASS | ids::DOUBLE_PLANT => Some(self.grass_color()),
            ids::LEAVES | ids::LEAVES2 | ids::VINE | ids::LILY_PAD => Some(self.foliage_color()),
            ids::FLOWING_WATER | ids::WATER => Some(self.water_color()),
            _ => None,
        }
    }
}

/// Decides which blocks are biome-colored and which biome a block is in
pub trait BiomeClassifier {
    fn is_biome_block(&self, id: u16, data: u16) -> bool;

    fn biome_of_block(&self, pos: BlockPos, chunk: &Chunk) -> Biome;
}

/// Biome classification from the per-column ids stored in chunks
#[derive(Clone, Copy, Debug, Default)]
pub struct ChunkBiomes;

impl BiomeClassifier for ChunkBiomes {
    fn is_biome_block(&self, id: u16, _data: u16) -> bool {
        matches!(
            id,
            ids::GRASS
                | ids::FLOWING_WATER
                | ids::WATER
                | ids::LEAVES
                | ids::TALL_GRASS
                | ids::VINE
                | ids::LILY_PAD
                | ids::LEAVES2
                | ids::DOUBLE_PLANT
        )
    }

    fn biome_of_block(&self, pos: BlockPos, chunk: &Chunk) -> Biome {
        match LocalBlockPos::from_global(pos) {
            Some(local) => Biome::from_id(chunk.biome_id(local.x, local.z)),
            None => Biome::default(),
        }
    }
}

/// Noise-driven biome layout used by the demo world generator
pub struct BiomeMap {
    temperature_noise: Perlin,
    moisture_noise: Perlin,
    temp_scale: f32,
    moisture_scale: f32,
}

impl BiomeMap {
    /// Create a new biome map with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            temperature_noise: Perlin::new(seed),
            moisture_noise: Perlin::new(seed.wrapping_add(1000)),
            temp_scale: 0.004,
            moisture_scale: 0.006,
        }
    }

    /// Get temperature at world position (-1 to 1, cold to hot)
    pub fn temperature_at(&self, x: f32, z: f32) -> f32 {
        self.temperature_noise.get([
            (x * self.temp_scale) as f64,
            (z * self.temp_scale) as f64,
        ]) as f32
    }

    /// Get moisture at world position (0 to 1, dry to wet)
    pub fn moisture_at(&self, x: f32, z: f32) -> f32 {
        let moisture = self.moisture_noise.get([
            (x * self.moisture_scale) as f64,
            (z * self.moisture_scale) as f64,
        ]) as f32;

        // Normalize from [-1, 1] to [0, 1]
        (moisture + 1.0) * 0.5
    }

    /// Get biome at world position based on temp, moisture, and height
    pub fn biome_at(&self, x: f32, z: f32, height: f32, sea_level: f32) -> Biome {
        if height < sea_level - 2.0 {
            return Biome::Ocean;
        }
        if height < sea_level + 2.0 {
            return Biome::Beach;
        }

        let altitude = height - sea_level;
        if altitude > 40.0 {
            return Biome::Snow;
        }
        if altitude > 28.0 {
            return Biome::Mountains;
        }

        let temp = self.temperature_at(x, z);
        let moisture = self.moisture_at(x, z);
        match (temp, moisture) {
            (t, m) if t < -0.3 => {
                if m > 0.5 { Biome::Taiga } else { Biome::Tundra }
            }
            (_, m) if m > 0.6 => Biome::Forest,
            (_, m) if m > 0.3 => Biome::Plains,
            _ => Biome::Desert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ChunkPos;
    use glam::IVec3;

    #[test]
    fn test_id_round_trip() {
        for biome in Biome::ALL {
            assert_eq!(Biome::from_id(biome.to_id()), biome);
        }
        assert_eq!(Biome::from_id(200), Biome::Plains);
    }

    #[test]
    fn test_tints() {
        let forest = Biome::Forest;
        assert_eq!(forest.tint_for(ids::GRASS), Some(forest.grass_color()));
        assert_eq!(forest.tint_for(ids::LEAVES), Some(forest.foliage_color()));
        assert_eq!(forest.tint_for(ids::WATER), Some(forest.water_color()));
        assert_eq!(forest.tint_for(ids::STONE), None);
    }

    #[test]
    fn test_biome_blocks() {
        let classifier = ChunkBiomes;
        assert!(classifier.is_biome_block(ids::GRASS, 0));
        assert!(classifier.is_biome_block(ids::WATER, 0));
        assert!(classifier.is_biome_block(ids::LEAVES2, 1));
        assert!(!classifier.is_biome_block(ids::STONE, 0));
        assert!(!classifier.is_biome_block(ids::SAND, 0));
    }

    #[test]
    fn test_biome_of_block_reads_column() {
        let mut chunk = Chunk::new(ChunkPos::new(-1, 0));
        chunk.set_biome(15, 2, Biome::Taiga.to_id());

        let classifier = ChunkBiomes;
        assert_eq!(classifier.biome_of_block(IVec3::new(-1, 64, 2), &chunk), Biome::Taiga);
        assert_eq!(classifier.biome_of_block(IVec3::new(-2, 64, 2), &chunk), Biome::Ocean);
    }

    #[test]
    fn test_moisture_range() {
        let biome_map = BiomeMap::new(12345);
        for x in [-1000.0, 0.0, 1000.0] {
            for z in [-1000.0, 0.0, 1000.0] {
                let moisture = biome_map.moisture_at(x, z);
                assert!((0.0..=1.0).contains(&moisture), "moisture {} out of range", moisture);
            }
        }
    }

    #[test]
    fn test_altitude_biomes() {
        let biome_map = BiomeMap::new(12345);
        let sea_level = 62.0;

        assert_eq!(biome_map.biome_at(0.0, 0.0, sea_level - 10.0, sea_level), Biome::Ocean);
        assert_eq!(biome_map.biome_at(0.0, 0.0, sea_level, sea_level), Biome::Beach);
        assert_eq!(biome_map.biome_at(0.0, 0.0, sea_level + 50.0, sea_level), Biome::Snow);
        assert_eq!(biome_map.biome_at(0.0, 0.0, sea_level + 30.0, sea_level), Biome::Mountains);
    }

    #[test]
    fn test_biome_determinism() {
        let biome_map = BiomeMap::new(12345);
        let a = biome_map.biome_at(100.0, 200.0, 72.0, 62.0);
        let b = biome_map.biome_at(100.0, 200.0, 72.0, 62.0);
        assert_eq!(a, b);
    }
}
