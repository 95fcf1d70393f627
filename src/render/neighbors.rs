//! Block data adjustment from neighboring blocks

use glam::IVec3;

use crate::core::BlockPos;
use crate::texture::{DATA_EAST, DATA_NORTH, DATA_SOUTH, DATA_WEST};
use crate::world::{ChunkSource, block};

/// Rewrites a block's data before its texture is resolved, e.g. to mark
/// which sides connect to or border other blocks
pub trait VariantAdjuster {
    fn check_neighbors(&self, pos: BlockPos, id: u16, data: u16) -> u16;
}

/// Leaves data untouched
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAdjust;

impl VariantAdjuster for NoAdjust {
    fn check_neighbors(&self, _pos: BlockPos, _id: u16, data: u16) -> u16 {
        data
    }
}

/// Horizontal sides and the data flag each one sets
const SIDES: [(IVec3, u16); 4] = [
    (IVec3::NEG_Z, DATA_NORTH),
    (IVec3::X, DATA_EAST),
    (IVec3::Z, DATA_SOUTH),
    (IVec3::NEG_X, DATA_WEST),
];

/// Flags water sides that touch solid ground so shorelines get an outline
pub struct NeighborAdjuster<'w, W: ChunkSource + ?Sized> {
    world: &'w W,
}

impl<'w, W: ChunkSource + ?Sized> NeighborAdjuster<'w, W> {
    pub fn new(world: &'w W) -> Self {
        Self { world }
    }
}

impl<W: ChunkSource + ?Sized> VariantAdjuster for NeighborAdjuster<'_, W> {
    fn check_neighbors(&self, pos: BlockPos, id: u16, data: u16) -> u16 {
        if !block::is_water(id) {
            return data;
        }
        SIDES.iter().fold(data, |data, &(offset, flag)| {
            match self.world.block_at(pos + offset) {
                Some(state) if !state.is_air() && !block::is_water(state.id) => data | flag,
                _ => data,
            }
        })
    }
}
