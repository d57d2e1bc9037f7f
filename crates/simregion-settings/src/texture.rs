//! Terrain texture slots and their well-known defaults.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default texture for terrain slot 1. Ships with the viewer.
pub const DEFAULT_TERRAIN_TEXTURE_1: Uuid = Uuid::from_u128(0xb8d3965a_ad78_bf43_699b_bff8eca6c975);
/// Default texture for terrain slot 2.
pub const DEFAULT_TERRAIN_TEXTURE_2: Uuid = Uuid::from_u128(0xabb783e6_3e93_26c0_248a_247666855da3);
/// Default texture for terrain slot 3.
pub const DEFAULT_TERRAIN_TEXTURE_3: Uuid = Uuid::from_u128(0x179cdabd_398a_9b6b_1391_4dc333ba321f);
/// Default texture for terrain slot 4.
pub const DEFAULT_TERRAIN_TEXTURE_4: Uuid = Uuid::from_u128(0xbeb169c7_11ea_fff2_efe5_0f24dc881df2);

/// One of the four terrain texture slots, lowest elevation band first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainTextureSlot {
    One,
    Two,
    Three,
    Four,
}

impl TerrainTextureSlot {
    /// All slots in order.
    pub const ALL: [TerrainTextureSlot; 4] = [Self::One, Self::Two, Self::Three, Self::Four];

    /// Slot for a 1-based index, as used by viewers and admin tools.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            4 => Some(Self::Four),
            _ => None,
        }
    }

    /// 1-based slot number.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
            Self::Three => 2,
            Self::Four => 3,
        }
    }

    /// Texture stored in place of the nil identifier.
    pub fn default_texture(self) -> Uuid {
        match self {
            Self::One => DEFAULT_TERRAIN_TEXTURE_1,
            Self::Two => DEFAULT_TERRAIN_TEXTURE_2,
            Self::Three => DEFAULT_TERRAIN_TEXTURE_3,
            Self::Four => DEFAULT_TERRAIN_TEXTURE_4,
        }
    }

    /// Resolve the value a slot stores when asked to hold `id`.
    pub fn substitute(self, id: Uuid) -> Uuid {
        if id.is_nil() { self.default_texture() } else { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_textures_match_viewer_ids() {
        assert_eq!(
            DEFAULT_TERRAIN_TEXTURE_1.to_string(),
            "b8d3965a-ad78-bf43-699b-bff8eca6c975"
        );
        assert_eq!(
            DEFAULT_TERRAIN_TEXTURE_2.to_string(),
            "abb783e6-3e93-26c0-248a-247666855da3"
        );
        assert_eq!(
            DEFAULT_TERRAIN_TEXTURE_3.to_string(),
            "179cdabd-398a-9b6b-1391-4dc333ba321f"
        );
        assert_eq!(
            DEFAULT_TERRAIN_TEXTURE_4.to_string(),
            "beb169c7-11ea-fff2-efe5-0f24dc881df2"
        );
    }

    #[test]
    fn test_slot_numbers() {
        for (i, slot) in TerrainTextureSlot::ALL.iter().enumerate() {
            assert_eq!(slot.number() as usize, i + 1);
            assert_eq!(TerrainTextureSlot::from_number(slot.number()), Some(*slot));
        }
        assert_eq!(TerrainTextureSlot::from_number(0), None);
        assert_eq!(TerrainTextureSlot::from_number(5), None);
    }

    #[test]
    fn test_substitute_nil() {
        let custom = Uuid::from_u128(42);
        for slot in TerrainTextureSlot::ALL {
            assert_eq!(slot.substitute(Uuid::nil()), slot.default_texture());
            assert_eq!(slot.substitute(custom), custom);
        }
    }
}
