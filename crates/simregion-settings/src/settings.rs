//! The region settings record.

use std::sync::Arc;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{BoxError, SettingsError};
use crate::observer::{ObserverId, SaveObservers};
use crate::provenance::{creation_timestamp, format_long_date, format_long_time};
use crate::telehub::{RotationFallback, TelehubState};
use crate::texture::TerrainTextureSlot;

/// Persistent configuration of one region.
///
/// Plain settings are public fields and accept any value; nothing here checks
/// ranges. Terrain textures and telehub state go through accessors because
/// they apply substitution and gating rules.
///
/// Equality compares stored settings only; `rotation_fallback` and the
/// observer list are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionSettings {
    pub region_uuid: Uuid,

    pub block_terraform: bool,
    pub block_fly: bool,
    pub allow_damage: bool,
    pub restrict_pushing: bool,
    pub allow_land_resell: bool,
    pub allow_land_join_divide: bool,
    pub block_show_in_search: bool,
    pub disable_scripts: bool,
    pub disable_collisions: bool,
    pub disable_physics: bool,
    pub use_estate_sun: bool,
    pub sandbox: bool,
    pub fixed_sun: bool,

    /// Maximum number of avatars in the region.
    pub agent_limit: i32,
    /// Prim limit multiplier.
    pub object_bonus: f64,
    /// Content rating.
    pub maturity: i32,

    /// Stored texture per slot. Nil until first written.
    terrain_textures: [Uuid; 4],

    /// Low and high texture-blend elevations per region corner.
    pub elevation_1_nw: f64,
    pub elevation_2_nw: f64,
    pub elevation_1_ne: f64,
    pub elevation_2_ne: f64,
    pub elevation_1_se: f64,
    pub elevation_2_se: f64,
    pub elevation_1_sw: f64,
    pub elevation_2_sw: f64,

    pub water_height: f64,
    pub terrain_raise_limit: f64,
    pub terrain_lower_limit: f64,

    pub sun_vector: Vec3,
    pub sun_position: f64,
    pub terrain_image_id: Uuid,
    pub covenant: Uuid,

    /// Creation time of the loaded region archive, POSIX seconds.
    pub loaded_creation_date_time: i32,
    /// Identifier of the loaded region archive.
    pub loaded_creation_id: String,

    telehub: TelehubState,

    /// Rotation reported while no telehub is set. Runtime policy, not stored.
    #[serde(skip)]
    pub rotation_fallback: RotationFallback,

    #[serde(skip)]
    observers: SaveObservers,
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self {
            region_uuid: Uuid::nil(),
            block_terraform: false,
            block_fly: false,
            allow_damage: false,
            restrict_pushing: false,
            allow_land_resell: true,
            allow_land_join_divide: true,
            block_show_in_search: false,
            disable_scripts: false,
            disable_collisions: false,
            disable_physics: false,
            use_estate_sun: true,
            sandbox: false,
            fixed_sun: false,
            agent_limit: 40,
            object_bonus: 1.0,
            maturity: 1,
            terrain_textures: [Uuid::nil(); 4],
            elevation_1_nw: 10.0,
            elevation_2_nw: 60.0,
            elevation_1_ne: 10.0,
            elevation_2_ne: 60.0,
            elevation_1_se: 10.0,
            elevation_2_se: 60.0,
            elevation_1_sw: 10.0,
            elevation_2_sw: 60.0,
            water_height: 20.0,
            terrain_raise_limit: 100.0,
            terrain_lower_limit: -100.0,
            sun_vector: Vec3::ZERO,
            sun_position: 0.0,
            terrain_image_id: Uuid::nil(),
            covenant: Uuid::nil(),
            loaded_creation_date_time: 0,
            loaded_creation_id: String::new(),
            telehub: TelehubState::default(),
            rotation_fallback: RotationFallback::default(),
            observers: SaveObservers::default(),
        }
    }
}

impl PartialEq for RegionSettings {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            region_uuid,
            block_terraform,
            block_fly,
            allow_damage,
            restrict_pushing,
            allow_land_resell,
            allow_land_join_divide,
            block_show_in_search,
            disable_scripts,
            disable_collisions,
            disable_physics,
            use_estate_sun,
            sandbox,
            fixed_sun,
            agent_limit,
            object_bonus,
            maturity,
            terrain_textures,
            elevation_1_nw,
            elevation_2_nw,
            elevation_1_ne,
            elevation_2_ne,
            elevation_1_se,
            elevation_2_se,
            elevation_1_sw,
            elevation_2_sw,
            water_height,
            terrain_raise_limit,
            terrain_lower_limit,
            sun_vector,
            sun_position,
            terrain_image_id,
            covenant,
            loaded_creation_date_time,
            loaded_creation_id,
            telehub,
            rotation_fallback: _,
            observers: _,
        } = self;
        *region_uuid == other.region_uuid
            && *block_terraform == other.block_terraform
            && *block_fly == other.block_fly
            && *allow_damage == other.allow_damage
            && *restrict_pushing == other.restrict_pushing
            && *allow_land_resell == other.allow_land_resell
            && *allow_land_join_divide == other.allow_land_join_divide
            && *block_show_in_search == other.block_show_in_search
            && *disable_scripts == other.disable_scripts
            && *disable_collisions == other.disable_collisions
            && *disable_physics == other.disable_physics
            && *use_estate_sun == other.use_estate_sun
            && *sandbox == other.sandbox
            && *fixed_sun == other.fixed_sun
            && *agent_limit == other.agent_limit
            && *object_bonus == other.object_bonus
            && *maturity == other.maturity
            && *terrain_textures == other.terrain_textures
            && *elevation_1_nw == other.elevation_1_nw
            && *elevation_2_nw == other.elevation_2_nw
            && *elevation_1_ne == other.elevation_1_ne
            && *elevation_2_ne == other.elevation_2_ne
            && *elevation_1_se == other.elevation_1_se
            && *elevation_2_se == other.elevation_2_se
            && *elevation_1_sw == other.elevation_1_sw
            && *elevation_2_sw == other.elevation_2_sw
            && *water_height == other.water_height
            && *terrain_raise_limit == other.terrain_raise_limit
            && *terrain_lower_limit == other.terrain_lower_limit
            && *sun_vector == other.sun_vector
            && *sun_position == other.sun_position
            && *terrain_image_id == other.terrain_image_id
            && *covenant == other.covenant
            && *loaded_creation_date_time == other.loaded_creation_date_time
            && *loaded_creation_id == other.loaded_creation_id
            && *telehub == other.telehub
    }
}

impl RegionSettings {
    /// Defaults for the given region.
    pub fn new(region_uuid: Uuid) -> Self {
        Self {
            region_uuid,
            ..Self::default()
        }
    }

    // --- Terrain textures ---

    /// Stored texture for `slot`. Nil only if the slot was never written.
    pub fn terrain_texture(&self, slot: TerrainTextureSlot) -> Uuid {
        self.terrain_textures[slot.index()]
    }

    /// Store `id` in `slot`, or the slot's default texture if `id` is nil.
    pub fn set_terrain_texture(&mut self, slot: TerrainTextureSlot, id: Uuid) {
        self.terrain_textures[slot.index()] = slot.substitute(id);
    }

    pub fn terrain_texture_1(&self) -> Uuid {
        self.terrain_texture(TerrainTextureSlot::One)
    }

    pub fn set_terrain_texture_1(&mut self, id: Uuid) {
        self.set_terrain_texture(TerrainTextureSlot::One, id);
    }

    pub fn terrain_texture_2(&self) -> Uuid {
        self.terrain_texture(TerrainTextureSlot::Two)
    }

    pub fn set_terrain_texture_2(&mut self, id: Uuid) {
        self.set_terrain_texture(TerrainTextureSlot::Two, id);
    }

    pub fn terrain_texture_3(&self) -> Uuid {
        self.terrain_texture(TerrainTextureSlot::Three)
    }

    pub fn set_terrain_texture_3(&mut self, id: Uuid) {
        self.set_terrain_texture(TerrainTextureSlot::Three, id);
    }

    pub fn terrain_texture_4(&self) -> Uuid {
        self.terrain_texture(TerrainTextureSlot::Four)
    }

    pub fn set_terrain_texture_4(&mut self, id: Uuid) {
        self.set_terrain_texture(TerrainTextureSlot::Four, id);
    }

    // --- Provenance ---

    /// Long date of `loaded_creation_date_time`, e.g. "Thursday, January 1, 1970".
    pub fn loaded_creation_date(&self) -> String {
        format_long_date(creation_timestamp(self.loaded_creation_date_time))
    }

    /// Long time of `loaded_creation_date_time`, e.g. "12:00:00 AM".
    pub fn loaded_creation_time(&self) -> String {
        format_long_time(creation_timestamp(self.loaded_creation_date_time))
    }

    // --- Telehub ---

    pub fn has_telehub(&self) -> bool {
        self.telehub.enabled
    }

    pub fn set_has_telehub(&mut self, enabled: bool) {
        self.telehub.enabled = enabled;
    }

    /// Telehub object, or nil while the region has no telehub.
    pub fn telehub_object(&self) -> Uuid {
        if self.telehub.enabled {
            self.telehub.object
        } else {
            Uuid::nil()
        }
    }

    pub fn set_telehub_object(&mut self, object: Uuid) {
        self.telehub.object = object;
    }

    /// Telehub name, or "" while the region has no telehub.
    pub fn telehub_name(&self) -> &str {
        if self.telehub.enabled {
            &self.telehub.name
        } else {
            ""
        }
    }

    pub fn set_telehub_name(&mut self, name: impl Into<String>) {
        self.telehub.name = name.into();
    }

    /// Telehub position, or zero while the region has no telehub.
    pub fn telehub_pos(&self) -> Vec3 {
        if self.telehub.enabled {
            self.telehub.position()
        } else {
            Vec3::ZERO
        }
    }

    pub fn set_telehub_pos(&mut self, pos: Vec3) {
        self.telehub.set_position(pos);
    }

    /// Telehub rotation. Without a telehub the result depends on
    /// [`rotation_fallback`](Self::rotation_fallback).
    pub fn telehub_rot(&self) -> Quat {
        if self.telehub.enabled {
            self.telehub.rotation()
        } else {
            self.telehub.fallback_rotation(self.rotation_fallback)
        }
    }

    pub fn set_telehub_rot(&mut self, rot: Quat) {
        self.telehub.set_rotation(rot);
    }

    // --- Spawn points ---

    /// Append a spawn point. Points are offsets from the telehub, not region
    /// coordinates.
    pub fn add_spawn_point(&mut self, point: Vec3) {
        self.telehub.spawn_points.push(point);
    }

    /// Remove and return the spawn point at `index`.
    pub fn remove_spawn_point(&mut self, index: usize) -> Result<Vec3, SettingsError> {
        self.telehub.remove_spawn_point(index)
    }

    /// Spawn points in insertion order.
    pub fn spawn_points(&self) -> &[Vec3] {
        &self.telehub.spawn_points
    }

    /// The live spawn point list.
    pub fn spawn_points_mut(&mut self) -> &mut Vec<Vec3> {
        &mut self.telehub.spawn_points
    }

    pub fn clear_spawn_points(&mut self) {
        self.telehub.spawn_points.clear();
    }

    // --- Save notification ---

    /// Register a callback run on every [`save`](Self::save).
    pub fn add_save_observer<F>(&mut self, observer: F) -> ObserverId
    where
        F: Fn(&RegionSettings) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        let id = self.observers.add(Arc::new(observer));
        debug!(region = %self.region_uuid, ?id, "registered save observer");
        id
    }

    /// Unregister an observer. Returns `false` if it was not registered.
    pub fn remove_save_observer(&mut self, id: ObserverId) -> bool {
        self.observers.remove(id)
    }

    /// Drop every registered observer.
    pub fn clear_save_observers(&mut self) {
        self.observers.clear();
    }

    pub fn save_observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Commit the record: notify every observer in registration order.
    ///
    /// Nothing is persisted here. The first failing observer aborts the
    /// notification and its error is returned.
    pub fn save(&self) -> Result<(), SettingsError> {
        debug!(
            region = %self.region_uuid,
            observers = self.observers.len(),
            "saving region settings"
        );
        self.observers.notify(self)
    }
}
