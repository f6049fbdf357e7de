//! Main reading store implementation.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use fortuna_types::Reading;

use crate::blobs::BlobStore;
use crate::error::{Error, Result};
use crate::settings::SettingsStore;

/// Well-known settings key holding the serialized reading history.
pub const READINGS_KEY: &str = "readings";

const SETTINGS_FILE: &str = "settings.json";
const BLOBS_DIR: &str = "blobs";

/// Durable store for the reading history and its image blobs.
///
/// The history is held in memory most-recent-first and loaded exactly once
/// when the store opens; every mutation is persisted immediately. Mutating
/// methods take `&mut self`, which is the single-writer assumption expressed
/// in the type system.
#[derive(Debug)]
pub struct ReadingStore {
    settings: SettingsStore,
    blobs: BlobStore,
    readings: Vec<Reading>,
}

impl ReadingStore {
    /// Open or create a store rooted at the given data directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| Error::CreateDirectory {
                path: dir.to_path_buf(),
                source: e,
            })?;
        }

        let settings = SettingsStore::new(dir.join(SETTINGS_FILE));
        let blobs = BlobStore::new(dir.join(BLOBS_DIR));

        // Loaded once; stored order is most-recent-first already.
        let readings: Vec<Reading> = settings.get(READINGS_KEY)?.unwrap_or_default();
        info!(
            count = readings.len(),
            dir = %dir.display(),
            "opened reading store"
        );

        Ok(Self {
            settings,
            blobs,
            readings,
        })
    }

    /// Open the default platform data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(crate::default_data_dir())
    }

    /// Persist `image_bytes` as a new blob and record a new reading for it.
    ///
    /// The blob is written first; if that write fails no record is created
    /// (a partially-written blob file may remain and is acceptable garbage).
    /// The new reading is prepended, keeping the collection
    /// most-recent-first with insertion order breaking timestamp ties.
    pub fn save(&mut self, content: &str, image_bytes: &[u8]) -> Result<Reading> {
        let image_ref = Uuid::new_v4().to_string();
        self.blobs.write(&image_ref, image_bytes)?;

        let reading = Reading::new(content, image_ref);
        self.readings.insert(0, reading.clone());

        if let Err(e) = self.persist() {
            // Metadata write failed: drop the in-memory record so no
            // partial reading survives. The blob file stays as garbage.
            self.readings.remove(0);
            return Err(e);
        }

        debug!(id = %reading.id, "saved reading");
        Ok(reading)
    }

    /// Write the in-memory history through to the settings file.
    fn persist(&self) -> Result<()> {
        self.settings.set(READINGS_KEY, &self.readings)
    }

    /// The in-memory history, most recent first.
    pub fn list(&self) -> &[Reading] {
        &self.readings
    }

    /// Look up a reading by id.
    pub fn get(&self, id: Uuid) -> Option<&Reading> {
        self.readings.iter().find(|r| r.id == id)
    }

    /// Read the image bytes for a reading.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the blob is missing (e.g. externally
    /// deleted). This is recoverable; callers should show a placeholder
    /// rather than failing the whole listing.
    pub fn get_image(&self, reading: &Reading) -> Result<Vec<u8>> {
        self.blobs.read(&reading.image_ref)
    }

    /// Delete a reading and its blob.
    ///
    /// The record removal is persisted first; blob deletion is best-effort
    /// and a failure there leaves the metadata removal standing.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        let position = self
            .readings
            .iter()
            .position(|r| r.id == id)
            .ok_or(Error::ReadingNotFound(id))?;

        let reading = self.readings.remove(position);

        if let Err(e) = self.persist() {
            self.readings.insert(position, reading);
            return Err(e);
        }

        if let Err(e) = self.blobs.remove(&reading.image_ref) {
            warn!(id = %reading.id, image_ref = %reading.image_ref, error = %e,
                "could not delete image blob, continuing");
        }

        debug!(id = %id, "deleted reading");
        Ok(())
    }

    /// Remove blob files no reading references and return how many were
    /// removed. Never runs implicitly; a failed `save` may leave such a
    /// file behind and this is the explicit cleanup for it.
    pub fn sweep_orphans(&self) -> Result<usize> {
        let referenced: HashSet<&str> = self
            .readings
            .iter()
            .map(|r| r.image_ref.as_str())
            .collect();

        let mut removed = 0;
        for id in self.blobs.ids()? {
            if !referenced.contains(id.as_str()) {
                match self.blobs.remove(&id) {
                    Ok(()) => removed += 1,
                    Err(e) => warn!(blob = %id, error = %e, "could not remove orphaned blob"),
                }
            }
        }

        if removed > 0 {
            info!(removed, "swept orphaned blobs");
        }
        Ok(removed)
    }

    /// Path of the blob file for a reading (mainly for diagnostics).
    pub fn image_path(&self, reading: &Reading) -> PathBuf {
        self.blobs.path_for(&reading.image_ref)
    }
}
