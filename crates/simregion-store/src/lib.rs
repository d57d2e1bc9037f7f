//! File-backed persistence for region settings.
//!
//! Each region is stored as `<region-uuid>.ron` in one directory. A store can
//! be attached to a [`RegionSettings`](simregion_settings::RegionSettings) as
//! a save observer so every commit writes through to disk.

mod error;
mod store;

pub use error::StoreError;
pub use store::RegionStore;
