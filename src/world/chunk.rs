//! Chunk column storage: 16 stacked 16³ sections of block state and light

use std::collections::HashMap;

use crate::core::{ChunkPos, LocalBlockPos, CHUNK_SECTIONS, CHUNK_WIDTH};
use crate::world::block::ids;

/// Blocks per section
const SECTION_VOLUME: usize = CHUNK_WIDTH * CHUNK_WIDTH * CHUNK_WIDTH;

/// Sky light reported for blocks in sections that were never written
const OPEN_SKY_LIGHT: u8 = 15;

/// Light level cap
pub const MAX_LIGHT: u8 = 15;

#[derive(Clone)]
struct Section {
    ids: Vec<u16>,
    data: Vec<u16>,
    block_light: Vec<u8>,
    sky_light: Vec<u8>,
}

impl Section {
    fn new() -> Self {
        Self {
            ids: vec![ids::AIR; SECTION_VOLUME],
            data: vec![0; SECTION_VOLUME],
            block_light: vec![0; SECTION_VOLUME],
            sky_light: vec![OPEN_SKY_LIGHT; SECTION_VOLUME],
        }
    }

    #[inline]
    fn index(pos: LocalBlockPos) -> usize {
        ((pos.y % CHUNK_WIDTH) * CHUNK_WIDTH + pos.z) * CHUNK_WIDTH + pos.x
    }
}

/// A 16×256×16 column of blocks
///
/// Sections that were never written read as air with full sky light.
/// Extra data is stored sparsely since very few blocks carry any.
#[derive(Clone)]
pub struct Chunk {
    pos: ChunkPos,
    sections: Vec<Option<Section>>,
    extra_data: HashMap<LocalBlockPos, u16>,
    biomes: Vec<u8>,
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chunk")
            .field("pos", &self.pos)
            .field("sections", &self.sections.iter().filter(|s| s.is_some()).count())
            .finish()
    }
}

impl Chunk {
    /// Create an empty (all air) chunk at the given position
    pub fn new(pos: ChunkPos) -> Self {
        Self {
            pos,
            sections: vec![None; CHUNK_SECTIONS],
            extra_data: HashMap::new(),
            biomes: vec![0; CHUNK_WIDTH * CHUNK_WIDTH],
        }
    }

    /// Position of this chunk in the chunk grid
    pub fn pos(&self) -> ChunkPos {
        self.pos
    }

    fn section(&self, pos: LocalBlockPos) -> Option<&Section> {
        self.sections[pos.y / CHUNK_WIDTH].as_ref()
    }

    fn section_mut(&mut self, pos: LocalBlockPos) -> &mut Section {
        self.sections[pos.y / CHUNK_WIDTH].get_or_insert_with(Section::new)
    }

    pub fn block_id(&self, pos: LocalBlockPos) -> u16 {
        self.section(pos)
            .map_or(ids::AIR, |s| s.ids[Section::index(pos)])
    }

    pub fn block_data(&self, pos: LocalBlockPos) -> u16 {
        self.section(pos).map_or(0, |s| s.data[Section::index(pos)])
    }

    /// Auxiliary per-block value; air never carries any
    pub fn block_extra_data(&self, pos: LocalBlockPos, id: u16) -> u16 {
        if id == ids::AIR {
            return 0;
        }
        self.extra_data.get(&pos).copied().unwrap_or(0)
    }

    pub fn block_light(&self, pos: LocalBlockPos) -> u8 {
        self.section(pos)
            .map_or(0, |s| s.block_light[Section::index(pos)])
    }

    pub fn sky_light(&self, pos: LocalBlockPos) -> u8 {
        self.section(pos)
            .map_or(OPEN_SKY_LIGHT, |s| s.sky_light[Section::index(pos)])
    }

    /// Biome id of the column containing `(x, z)`
    pub fn biome_id(&self, x: usize, z: usize) -> u8 {
        self.biomes[z * CHUNK_WIDTH + x]
    }

    pub fn set_block(&mut self, pos: LocalBlockPos, id: u16, data: u16) {
        let section = self.section_mut(pos);
        let idx = Section::index(pos);
        section.ids[idx] = id;
        section.data[idx] = data;
    }

    pub fn set_extra_data(&mut self, pos: LocalBlockPos, extra: u16) {
        if extra == 0 {
            self.extra_data.remove(&pos);
        } else {
            self.extra_data.insert(pos, extra);
        }
    }

    pub fn set_light(&mut self, pos: LocalBlockPos, block_light: u8, sky_light: u8) {
        let section = self.section_mut(pos);
        let idx = Section::index(pos);
        section.block_light[idx] = block_light.min(MAX_LIGHT);
        section.sky_light[idx] = sky_light.min(MAX_LIGHT);
    }

    pub fn set_biome(&mut self, x: usize, z: usize, biome: u8) {
        self.biomes[z * CHUNK_WIDTH + x] = biome;
    }

    /// Highest y that may hold a non-air block: the top of the highest
    /// allocated section. Every block above it is air.
    pub fn top_y(&self) -> Option<usize> {
        self.sections
            .iter()
            .rposition(|s| s.is_some())
            .map(|i| (i + 1) * CHUNK_WIDTH - 1)
    }
}
