//! Save observers notified when a [`RegionSettings`] record is committed.

use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::error::{BoxError, SettingsError};
use crate::settings::RegionSettings;

/// Callback invoked by [`RegionSettings::save`] with the committed record.
pub type SaveObserver = Arc<dyn Fn(&RegionSettings) -> Result<(), BoxError> + Send + Sync>;

/// Handle returned on registration, used to remove the observer again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Ordered list of registered observers.
///
/// Cloning shares the callbacks.
#[derive(Clone, Default)]
pub(crate) struct SaveObservers {
    next_id: u64,
    entries: Vec<(ObserverId, SaveObserver)>,
}

impl SaveObservers {
    pub fn add(&mut self, observer: SaveObserver) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Notify observers in registration order, stopping at the first failure.
    pub fn notify(&self, settings: &RegionSettings) -> Result<(), SettingsError> {
        for (index, (_, observer)) in self.entries.iter().enumerate() {
            if let Err(source) = observer(settings) {
                warn!(
                    region = %settings.region_uuid,
                    observer = index,
                    error = %source,
                    "save observer failed, skipping remaining observers"
                );
                return Err(SettingsError::Observer { index, source });
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SaveObservers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaveObservers")
            .field("count", &self.entries.len())
            .finish()
    }
}
