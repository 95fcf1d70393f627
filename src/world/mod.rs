//! World data: chunks, block ids, and the read-only chunk source the renderer walks

pub mod block;
pub mod chunk;
pub mod demo;

pub use block::{BlockState, ids};
pub use chunk::Chunk;
pub use demo::DemoWorldGenerator;

use std::collections::HashMap;

use crate::core::{BlockPos, ChunkPos, LocalBlockPos, CHUNK_HEIGHT};

/// Read access to loaded chunks
///
/// Rendering only ever reads through this trait, so one source can be shared
/// by any number of renderers.
pub trait ChunkSource {
    /// Chunk at the given position, `None` if it does not exist
    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk>;

    /// Block at a global position, `None` outside loaded chunks or the world height
    fn block_at(&self, pos: BlockPos) -> Option<BlockState> {
        let local = LocalBlockPos::from_global(pos)?;
        let chunk = self.chunk(ChunkPos::from_block(pos))?;
        Some(BlockState::new(chunk.block_id(local), chunk.block_data(local)))
    }

    /// Sky light at a global position; open sky above the world and in
    /// unloaded chunks, none below the world
    fn sky_light_at(&self, pos: BlockPos) -> u8 {
        if pos.y >= CHUNK_HEIGHT as i32 {
            return chunk::MAX_LIGHT;
        }
        let Some(local) = LocalBlockPos::from_global(pos) else {
            return 0;
        };
        self.chunk(ChunkPos::from_block(pos))
            .map_or(chunk::MAX_LIGHT, |c| c.sky_light(local))
    }

    /// Block light at a global position, 0 outside loaded chunks
    fn block_light_at(&self, pos: BlockPos) -> u8 {
        LocalBlockPos::from_global(pos)
            .and_then(|local| {
                self.chunk(ChunkPos::from_block(pos))
                    .map(|c| c.block_light(local))
            })
            .unwrap_or(0)
    }
}

/// In-memory world made of chunk columns
#[derive(Default)]
pub struct World {
    chunks: HashMap<ChunkPos, Chunk>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a chunk, replacing any chunk already at its position
    pub fn insert(&mut self, chunk: Chunk) -> Option<Chunk> {
        self.chunks.insert(chunk.pos(), chunk)
    }

    /// Get mutable reference to a chunk by position
    pub fn chunk_mut(&mut self, pos: ChunkPos) -> Option<&mut Chunk> {
        self.chunks.get_mut(&pos)
    }

    /// Get the number of loaded chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Set a block by global position, creating its chunk if needed.
    /// Positions above or below the world are ignored.
    pub fn set_block(&mut self, pos: BlockPos, id: u16, data: u16) {
        let Some(local) = LocalBlockPos::from_global(pos) else {
            return;
        };
        let chunk_pos = ChunkPos::from_block(pos);
        self.chunks
            .entry(chunk_pos)
            .or_insert_with(|| Chunk::new(chunk_pos))
            .set_block(local, id, data);
    }
}

impl ChunkSource for World {
    fn chunk(&self, pos: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    #[test]
    fn test_new_world() {
        let world = World::new();
        assert_eq!(world.chunk_count(), 0);
        assert!(world.chunk(ChunkPos::new(0, 0)).is_none());
    }

    #[test]
    fn test_insert_and_get_chunk() {
        let mut world = World::new();
        let pos = ChunkPos::new(1, -2);

        assert!(world.insert(Chunk::new(pos)).is_none());
        assert!(world.insert(Chunk::new(pos)).is_some());
        assert_eq!(world.chunk_count(), 1);
        assert_eq!(world.chunk(pos).map(|c| c.pos()), Some(pos));
    }

    #[test]
    fn test_set_block_creates_chunk() {
        let mut world = World::new();
        world.set_block(IVec3::new(-1, 10, 17), ids::SAND, 0);

        assert_eq!(world.chunk_count(), 1);
        assert!(world.chunk(ChunkPos::new(-1, 1)).is_some());
        assert_eq!(
            world.block_at(IVec3::new(-1, 10, 17)),
            Some(BlockState::new(ids::SAND, 0))
        );
        assert_eq!(world.block_at(IVec3::new(-2, 10, 17)), Some(BlockState::AIR));
        assert_eq!(world.block_at(IVec3::new(100, 10, 17)), None);
    }

    #[test]
    fn test_set_block_out_of_height_is_ignored() {
        let mut world = World::new();
        world.set_block(IVec3::new(0, -1, 0), ids::STONE, 0);
        world.set_block(IVec3::new(0, 256, 0), ids::STONE, 0);
        assert_eq!(world.chunk_count(), 0);
    }

    #[test]
    fn test_light_queries() {
        let mut world = World::new();
        let pos = IVec3::new(3, 20, 3);
        world.set_block(pos, ids::STONE, 0);
        if let Some(chunk) = world.chunk_mut(ChunkPos::new(0, 0)) {
            chunk.set_light(LocalBlockPos::new(3, 21, 3), 9, 4);
        }

        assert_eq!(world.sky_light_at(pos + IVec3::Y), 4);
        assert_eq!(world.block_light_at(pos + IVec3::Y), 9);
        assert_eq!(world.sky_light_at(IVec3::new(3, 300, 3)), 15);
        assert_eq!(world.sky_light_at(IVec3::new(3, -5, 3)), 0);
        assert_eq!(world.sky_light_at(IVec3::new(500, 20, 3)), 15);
        assert_eq!(world.block_light_at(IVec3::new(500, 20, 3)), 0);
    }
}
