//! Core type aliases and block coordinates

pub use glam::IVec3;

/// Standard Result type for the renderer
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;

/// Blocks per chunk side along x and z
pub const CHUNK_WIDTH: usize = 16;

/// Vertical 16³ sections per chunk
pub const CHUNK_SECTIONS: usize = 16;

/// Blocks per chunk along y
pub const CHUNK_HEIGHT: usize = CHUNK_WIDTH * CHUNK_SECTIONS;

/// Global block position (y up)
pub type BlockPos = IVec3;

/// Integer coordinate identifying a chunk column in the world grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkPos {
    pub x: i32,
    pub z: i32,
}

impl ChunkPos {
    /// Create a new chunk coordinate
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Chunk containing a global block position
    pub fn from_block(pos: BlockPos) -> Self {
        Self {
            x: pos.x.div_euclid(CHUNK_WIDTH as i32),
            z: pos.z.div_euclid(CHUNK_WIDTH as i32),
        }
    }

    /// Global position of the chunk's minimum corner at y = 0
    pub fn origin(&self) -> BlockPos {
        IVec3::new(
            self.x * CHUNK_WIDTH as i32,
            0,
            self.z * CHUNK_WIDTH as i32,
        )
    }
}

/// Block position relative to its chunk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LocalBlockPos {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl LocalBlockPos {
    pub fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Local part of a global position, `None` above or below the world
    pub fn from_global(pos: BlockPos) -> Option<Self> {
        if pos.y < 0 || pos.y >= CHUNK_HEIGHT as i32 {
            return None;
        }
        Some(Self {
            x: pos.x.rem_euclid(CHUNK_WIDTH as i32) as usize,
            y: pos.y as usize,
            z: pos.z.rem_euclid(CHUNK_WIDTH as i32) as usize,
        })
    }

    /// Global position inside the given chunk
    pub fn to_global(&self, chunk: ChunkPos) -> BlockPos {
        chunk.origin() + IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }
}

/// Coordinate of an output tile; tile `y` runs along world `z`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TilePos {
    pub x: i32,
    pub y: i32,
}

impl TilePos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
