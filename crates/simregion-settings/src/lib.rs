//! Persistent configuration of a single simulated region.
//!
//! [`RegionSettings`] holds terrain, access rules, environment and telehub
//! state for one region. Beyond plain field storage it substitutes default
//! terrain textures for unset slots, hides telehub fields while the region has
//! no telehub, keeps an ordered list of spawn points and notifies registered
//! observers when the record is committed with [`RegionSettings::save`].
//!
//! Storage is not handled here: persistence layers register a save observer
//! and choose their own format.

mod error;
mod observer;
mod provenance;
mod settings;
mod telehub;
mod texture;

pub use error::{BoxError, SettingsError};
pub use observer::{ObserverId, SaveObserver};
pub use provenance::{creation_timestamp, format_long_date, format_long_time};
pub use settings::RegionSettings;
pub use telehub::RotationFallback;
pub use texture::{
    DEFAULT_TERRAIN_TEXTURE_1, DEFAULT_TERRAIN_TEXTURE_2, DEFAULT_TERRAIN_TEXTURE_3,
    DEFAULT_TERRAIN_TEXTURE_4, TerrainTextureSlot,
};

// Value types stored by the record.
pub use glam::{Quat, Vec3};
pub use uuid::Uuid;
