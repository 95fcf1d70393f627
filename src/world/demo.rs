//! Procedural demo terrain: noise heightmap, lakes, beaches, caves and trees

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

use crate::biome::{Biome, BiomeMap};
use crate::core::{ChunkPos, LocalBlockPos, CHUNK_HEIGHT, CHUNK_WIDTH};
use crate::world::chunk::MAX_LIGHT;
use crate::world::{Chunk, World, block, ids};

/// Horizontal blocks per unit of height noise
const TERRAIN_SCALE: f64 = 96.0;

/// Blocks of relief around sea level
const TERRAIN_RELIEF: f64 = 40.0;

/// Sky light lost per block of water it passes through
const WATER_LIGHT_FALLOFF: u8 = 2;

/// Seeded terrain generator for chunks around the origin
pub struct DemoWorldGenerator {
    seed: u32,
    height_noise: Fbm<Perlin>,
    cave_noise: Perlin,
    biome_map: BiomeMap,
    /// Water fills every column up to this height
    pub sea_level: i32,
}

impl DemoWorldGenerator {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            height_noise: Fbm::<Perlin>::new(seed)
                .set_octaves(4)
                .set_persistence(0.5)
                .set_lacunarity(2.0),
            cave_noise: Perlin::new(seed.wrapping_add(77)),
            biome_map: BiomeMap::new(seed),
            sea_level: 62,
        }
    }

    /// Terrain surface height at a world column
    pub fn height_at(&self, x: i32, z: i32) -> i32 {
        let value = self
            .height_noise
            .get([x as f64 / TERRAIN_SCALE, z as f64 / TERRAIN_SCALE]);
        let h = self.sea_level as f64 + 2.0 + value * TERRAIN_RELIEF;
        (h.round() as i32).clamp(4, CHUNK_HEIGHT as i32 - 16)
    }

    fn is_cave(&self, x: i32, y: i32, z: i32, surface: i32) -> bool {
        if y < 4 || y > surface - 6 {
            return false;
        }
        let n = self.cave_noise.get([x as f64 / 24.0, y as f64 / 12.0, z as f64 / 24.0]);
        n > 0.55
    }

    fn column_hash(&self, x: i32, z: i32) -> u32 {
        let mut h = (x as u32).wrapping_mul(0x9E37_79B1) ^ (z as u32).wrapping_mul(0x85EB_CA77);
        h ^= self.seed.wrapping_mul(0xC2B2_AE3D);
        h ^= h >> 15;
        h = h.wrapping_mul(0x2C1B_3C6D);
        h ^ (h >> 12)
    }

    /// Generate one chunk column
    pub fn generate_chunk(&self, pos: ChunkPos) -> Chunk {
        let mut chunk = Chunk::new(pos);
        let origin = pos.origin();

        for x in 0..CHUNK_WIDTH {
            for z in 0..CHUNK_WIDTH {
                let wx = origin.x + x as i32;
                let wz = origin.z + z as i32;
                let surface = self.height_at(wx, wz);
                let biome = self.biome_map.biome_at(
                    wx as f32,
                    wz as f32,
                    surface as f32,
                    self.sea_level as f32,
                );
                chunk.set_biome(x, z, biome.to_id());

                let underwater = surface < self.sea_level;
                for y in 0..=surface {
                    if self.is_cave(wx, y, wz, surface) {
                        continue;
                    }
                    let id = if y == surface {
                        surface_block(biome, underwater)
                    } else if y > surface - 4 {
                        subsurface_block(biome, underwater)
                    } else {
                        ids::STONE
                    };
                    chunk.set_block(LocalBlockPos::new(x, y as usize, z), id, 0);
                }

                for y in (surface + 1)..=self.sea_level {
                    chunk.set_block(LocalBlockPos::new(x, y as usize, z), ids::WATER, 0);
                }

                if !underwater && biome == Biome::Snow {
                    let above = LocalBlockPos::new(x, surface as usize + 1, z);
                    chunk.set_block(above, ids::SNOW_LAYER, 0);
                }
            }
        }

        self.plant_trees(&mut chunk);
        light_columns(&mut chunk);
        chunk
    }

    fn plant_trees(&self, chunk: &mut Chunk) {
        let origin = chunk.pos().origin();
        // Trees stay clear of the chunk border so their leaves never cross it
        for x in 2..CHUNK_WIDTH - 2 {
            for z in 2..CHUNK_WIDTH - 2 {
                let wx = origin.x + x as i32;
                let wz = origin.z + z as i32;
                let biome = Biome::from_id(chunk.biome_id(x, z));
                let density = match biome {
                    Biome::Forest => 24,
                    Biome::Taiga => 40,
                    Biome::Plains => 400,
                    _ => continue,
                };
                let hash = self.column_hash(wx, wz);
                if hash % density != 0 {
                    continue;
                }
                let surface = self.height_at(wx, wz);
                if surface < self.sea_level
                    || chunk.block_id(LocalBlockPos::new(x, surface as usize, z)) != ids::GRASS
                {
                    continue;
                }

                let trunk = 4 + (hash >> 8) % 3;
                let top = surface as usize + trunk as usize;
                for y in (surface as usize + 1)..=top {
                    chunk.set_block(LocalBlockPos::new(x, y, z), ids::LOG, 0);
                }
                for dy in 0..3usize {
                    let radius: i32 = if dy == 2 { 1 } else { 2 };
                    for dx in -radius..=radius {
                        for dz in -radius..=radius {
                            if dx == 0 && dz == 0 && dy < 2 {
                                continue;
                            }
                            let leaf = LocalBlockPos::new(
                                (x as i32 + dx) as usize,
                                top - 1 + dy,
                                (z as i32 + dz) as usize,
                            );
                            if chunk.block_id(leaf) == ids::AIR {
                                chunk.set_block(leaf, ids::LEAVES, 0);
                            }
                        }
                    }
                }
            }
        }
    }

    /// Generate every chunk in the inclusive range into `world`
    pub fn generate_region(&self, world: &mut World, min: ChunkPos, max: ChunkPos) {
        let mut count = 0;
        for cx in min.x..=max.x {
            for cz in min.z..=max.z {
                world.insert(self.generate_chunk(ChunkPos::new(cx, cz)));
                count += 1;
            }
        }
        log::debug!("Generated {} demo chunks from {:?} to {:?}", count, min, max);
    }
}

fn surface_block(biome: Biome, underwater: bool) -> u16 {
    if underwater {
        return match biome {
            Biome::Ocean => ids::GRAVEL,
            _ => ids::SAND,
        };
    }
    match biome {
        Biome::Beach | Biome::Desert => ids::SAND,
        Biome::Mountains => ids::STONE,
        _ => ids::GRASS,
    }
}

fn subsurface_block(biome: Biome, underwater: bool) -> u16 {
    match biome {
        Biome::Beach | Biome::Desert => ids::SAND,
        Biome::Ocean if underwater => ids::GRAVEL,
        Biome::Mountains => ids::STONE,
        _ => ids::DIRT,
    }
}

/// Straight-down sky light: full until the first opaque block, dimmed by
/// water and leaves, dark below
fn light_columns(chunk: &mut Chunk) {
    let Some(top) = chunk.top_y() else {
        return;
    };
    for x in 0..CHUNK_WIDTH {
        for z in 0..CHUNK_WIDTH {
            let mut light = MAX_LIGHT;
            for y in (0..=top).rev() {
                let pos = LocalBlockPos::new(x, y, z);
                let id = chunk.block_id(pos);
                if block::is_water(id) || id == ids::LEAVES {
                    light = light.saturating_sub(WATER_LIGHT_FALLOFF);
                } else if id != ids::AIR && id != ids::SNOW_LAYER {
                    light = 0;
                }
                chunk.set_light(pos, 0, light);
            }
        }
    }
}
