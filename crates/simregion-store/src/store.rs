//! RON file store keyed by region UUID.

use std::path::{Path, PathBuf};

use simregion_settings::{ObserverId, RegionSettings, TerrainTextureSlot, Uuid};
use tracing::{debug, info, warn};

use crate::error::StoreError;

const EXTENSION: &str = "ron";

/// Directory of region settings files.
#[derive(Debug, Clone)]
pub struct RegionStore {
    dir: PathBuf,
    pretty: bool,
}

impl RegionStore {
    pub fn new(dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            dir: dir.into(),
            pretty,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the settings of `region`.
    pub fn path_for(&self, region: Uuid) -> PathBuf {
        self.dir.join(format!("{region}.{EXTENSION}"))
    }

    /// Load a region's settings. A region with no file yet gets defaults.
    ///
    /// Terrain textures are written through the slot setters, so nil slots
    /// read as the slot defaults. The returned record has no observers
    /// attached.
    pub fn load(&self, region: Uuid) -> Result<RegionSettings, StoreError> {
        let mut settings = self.read(region)?;
        for slot in TerrainTextureSlot::ALL {
            settings.set_terrain_texture(slot, settings.terrain_texture(slot));
        }
        Ok(settings)
    }

    fn read(&self, region: Uuid) -> Result<RegionSettings, StoreError> {
        let path = self.path_for(region);
        if !path.exists() {
            debug!(%region, "no stored settings, using defaults");
            return Ok(RegionSettings::new(region));
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let mut settings: RegionSettings =
            ron::from_str(&contents).map_err(|source| StoreError::Parse { path, source })?;

        if settings.region_uuid != region {
            warn!(
                %region,
                stored = %settings.region_uuid,
                "region file names a different region, using the file name"
            );
            settings.region_uuid = region;
        }
        Ok(settings)
    }

    /// Load a region and attach this store as its save observer.
    pub fn open(&self, region: Uuid) -> Result<RegionSettings, StoreError> {
        let mut settings = self.load(region)?;
        self.attach(&mut settings);
        Ok(settings)
    }

    /// Write the raw stored values of `settings`, telehub state included even
    /// while the telehub is disabled.
    pub fn store(&self, settings: &RegionSettings) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let serialized = if self.pretty {
            ron::ser::to_string_pretty(settings, ron::ser::PrettyConfig::new().depth_limit(3))
        } else {
            ron::to_string(settings)
        }
        .map_err(StoreError::Serialize)?;

        // Write to a sibling and rename so readers never see a partial file.
        let path = self.path_for(settings.region_uuid);
        let tmp = path.with_extension("ron.tmp");
        std::fs::write(&tmp, serialized).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        std::fs::rename(&tmp, &path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        info!(region = %settings.region_uuid, path = %path.display(), "stored region settings");
        Ok(())
    }

    /// Register a write-through observer on `settings`.
    pub fn attach(&self, settings: &mut RegionSettings) -> ObserverId {
        let store = self.clone();
        settings.add_save_observer(move |s| store.store(s).map_err(Into::into))
    }

    /// Regions with a settings file, sorted.
    pub fn list(&self) -> Result<Vec<Uuid>, StoreError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut regions: Vec<Uuid> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == EXTENSION))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|stem| stem.to_str())
                    .and_then(|stem| Uuid::parse_str(stem).ok())
            })
            .collect();
        regions.sort();
        Ok(regions)
    }

    /// Delete a region's file. Returns `false` if there was none.
    pub fn delete(&self, region: Uuid) -> Result<bool, StoreError> {
        let path = self.path_for(region);
        match std::fs::remove_file(&path) {
            Ok(()) => {
                info!(%region, "deleted region settings");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simregion_settings::{
        DEFAULT_TERRAIN_TEXTURE_1, DEFAULT_TERRAIN_TEXTURE_2, DEFAULT_TERRAIN_TEXTURE_3,
        DEFAULT_TERRAIN_TEXTURE_4, SettingsError, Vec3,
    };

    fn region(n: u128) -> Uuid {
        Uuid::from_u128(n)
    }

    #[test]
    fn test_missing_region_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), true);
        let settings = store.load(region(1)).unwrap();
        assert_eq!(settings.region_uuid, region(1));
        assert_eq!(settings.agent_limit, 40);
        assert_eq!(settings.terrain_texture_1(), DEFAULT_TERRAIN_TEXTURE_1);
    }

    #[test]
    fn test_nil_textures_load_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), true);
        let nil = format!("\"{}\"", Uuid::nil());
        let contents = format!(
            "(region_uuid: \"{}\", terrain_textures: ({nil}, {nil}, {nil}, {nil}))",
            region(11)
        );
        std::fs::write(store.path_for(region(11)), contents).unwrap();

        let loaded = store.load(region(11)).unwrap();
        assert_eq!(loaded.terrain_texture_1(), DEFAULT_TERRAIN_TEXTURE_1);
        assert_eq!(loaded.terrain_texture_2(), DEFAULT_TERRAIN_TEXTURE_2);
        assert_eq!(loaded.terrain_texture_3(), DEFAULT_TERRAIN_TEXTURE_3);
        assert_eq!(loaded.terrain_texture_4(), DEFAULT_TERRAIN_TEXTURE_4);
    }

    #[test]
    fn test_fresh_record_reloads_with_default_textures() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), false);
        let custom = Uuid::from_u128(0xabc);

        let mut settings = RegionSettings::new(region(12));
        settings.set_terrain_texture_2(custom);
        store.store(&settings).unwrap();

        let loaded = store.load(region(12)).unwrap();
        assert_eq!(loaded.terrain_texture_1(), DEFAULT_TERRAIN_TEXTURE_1);
        assert_eq!(loaded.terrain_texture_2(), custom);
        assert_eq!(loaded.terrain_texture_4(), DEFAULT_TERRAIN_TEXTURE_4);
    }

    #[test]
    fn test_store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), false);

        let mut settings = RegionSettings::new(region(2));
        settings.agent_limit = 75;
        for slot in TerrainTextureSlot::ALL {
            settings.set_terrain_texture(slot, Uuid::nil());
        }
        settings.set_telehub_name("North");
        settings.add_spawn_point(Vec3::new(2.0, 0.0, 0.0));
        store.store(&settings).unwrap();

        let loaded = store.load(region(2)).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.terrain_texture_4(), DEFAULT_TERRAIN_TEXTURE_4);
        assert_eq!(loaded.telehub_name(), "");
        assert_eq!(loaded.spawn_points(), &[Vec3::new(2.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_attached_store_writes_on_save() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path().join("regions"), true);

        let mut settings = store.open(region(3)).unwrap();
        assert!(!store.path_for(region(3)).exists());

        settings.water_height = 42.0;
        settings.save().unwrap();

        assert_eq!(store.load(region(3)).unwrap().water_height, 42.0);
        assert_eq!(store.list().unwrap(), vec![region(3)]);
    }

    #[test]
    fn test_detached_store_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), true);

        let mut settings = store.load(region(4)).unwrap();
        let id = store.attach(&mut settings);
        assert!(settings.remove_save_observer(id));
        settings.save().unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_write_failure_surfaces_from_save() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let store = RegionStore::new(&blocker, true);

        let settings = store.open(region(5)).unwrap();
        let err = settings.save().unwrap_err();
        assert!(matches!(err, SettingsError::Observer { index: 0, .. }));
    }

    #[test]
    fn test_list_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), true);
        store.store(&RegionSettings::new(region(9))).unwrap();
        store.store(&RegionSettings::new(region(8))).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::write(dir.path().join("bogus.ron"), "()").unwrap();

        assert_eq!(store.list().unwrap(), vec![region(8), region(9)]);
    }

    #[test]
    fn test_list_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path().join("absent"), true);
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), true);
        store.store(&RegionSettings::new(region(6))).unwrap();
        assert!(store.delete(region(6)).unwrap());
        assert!(!store.delete(region(6)).unwrap());
    }

    #[test]
    fn test_file_region_mismatch_uses_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), true);
        store.store(&RegionSettings::new(region(7))).unwrap();
        std::fs::rename(store.path_for(region(7)), store.path_for(region(70))).unwrap();

        assert_eq!(store.load(region(70)).unwrap().region_uuid, region(70));
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = RegionStore::new(dir.path(), true);
        std::fs::write(store.path_for(region(10)), "{{not ron").unwrap();
        assert!(matches!(
            store.load(region(10)),
            Err(StoreError::Parse { .. })
        ));
    }
}
