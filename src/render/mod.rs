//! Top-down tile rendering
//!
//! A tile is drawn chunk by chunk. For every column the [`ColumnScanner`]
//! collects the blocks visible from above, then [`composite`] blends them
//! onto the tile from the deepest layer up.

pub mod column;
pub mod compositor;
pub mod neighbors;
pub mod tile;

pub use column::{ColumnScanner, Layer};
pub use compositor::composite;
pub use neighbors::{NeighborAdjuster, NoAdjust, VariantAdjuster};
pub use tile::TopdownTileRenderer;
