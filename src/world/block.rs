//! Block ids and per-position block state

/// Numeric block ids understood by the built-in palette and collaborators
pub mod ids {
    pub const AIR: u16 = 0;
    pub const STONE: u16 = 1;
    pub const GRASS: u16 = 2;
    pub const DIRT: u16 = 3;
    pub const COBBLESTONE: u16 = 4;
    pub const PLANKS: u16 = 5;
    pub const FLOWING_WATER: u16 = 8;
    pub const WATER: u16 = 9;
    pub const FLOWING_LAVA: u16 = 10;
    pub const LAVA: u16 = 11;
    pub const SAND: u16 = 12;
    pub const GRAVEL: u16 = 13;
    pub const LOG: u16 = 17;
    pub const LEAVES: u16 = 18;
    pub const GLASS: u16 = 20;
    pub const TALL_GRASS: u16 = 31;
    pub const SNOW_LAYER: u16 = 78;
    pub const ICE: u16 = 79;
    pub const SNOW: u16 = 80;
    pub const VINE: u16 = 106;
    pub const LILY_PAD: u16 = 111;
    pub const LEAVES2: u16 = 161;
    pub const DOUBLE_PLANT: u16 = 175;
}

/// Either water id, regardless of level
#[inline]
pub fn is_water(id: u16) -> bool {
    id == ids::FLOWING_WATER || id == ids::WATER
}

/// Full (source) water: a water id with level data 0
#[inline]
pub fn is_full_water(id: u16, data: u16) -> bool {
    is_water(id) && data == 0
}

/// Id and data of a single block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockState {
    pub id: u16,
    pub data: u16,
}

impl BlockState {
    pub const AIR: BlockState = BlockState { id: ids::AIR, data: 0 };

    pub fn new(id: u16, data: u16) -> Self {
        Self { id, data }
    }

    pub fn is_air(&self) -> bool {
        self.id == ids::AIR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_classification() {
        assert!(is_water(ids::WATER));
        assert!(is_water(ids::FLOWING_WATER));
        assert!(!is_water(ids::LAVA));

        assert!(is_full_water(ids::WATER, 0));
        assert!(is_full_water(ids::FLOWING_WATER, 0));
        assert!(!is_full_water(ids::FLOWING_WATER, 3));
        assert!(!is_full_water(ids::STONE, 0));
    }

    #[test]
    fn test_air_state() {
        assert!(BlockState::AIR.is_air());
        assert!(BlockState::default().is_air());
        assert!(!BlockState::new(ids::STONE, 0).is_air());
    }
}
