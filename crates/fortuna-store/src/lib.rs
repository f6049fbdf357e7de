//! Local persistence for fortuna reading history and image blobs.
//!
//! This crate stores the reading history as a JSON array under one
//! well-known key in a small file-backed settings store, and each source
//! image as a separate blob file keyed by its generated identifier. The
//! whole collection is loaded once when the store opens and held in memory;
//! every mutation is written through immediately.
//!
//! Single-process, single-writer: there is no schema versioning, migration,
//! or concurrent-writer coordination.
//!
//! # Example
//!
//! ```no_run
//! use fortuna_store::ReadingStore;
//!
//! let mut store = ReadingStore::open_default()?;
//! let reading = store.save("Good fortune awaits.", &[0xFF, 0xD8])?;
//! assert_eq!(store.list()[0].id, reading.id);
//! # Ok::<(), fortuna_store::Error>(())
//! ```

mod blobs;
mod error;
mod settings;
mod store;

pub use blobs::BlobStore;
pub use error::{Error, Result};
pub use settings::SettingsStore;
pub use store::{ReadingStore, READINGS_KEY};

/// Default data directory following platform conventions.
///
/// - Linux: `~/.local/share/fortuna`
/// - macOS: `~/Library/Application Support/fortuna`
/// - Windows: `C:\Users\<user>\AppData\Local\fortuna`
pub fn default_data_dir() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("fortuna")
}
