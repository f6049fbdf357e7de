//! Reading service orchestrating image analysis and history persistence.
//!
//! This crate is the single public entry point of the system: it validates
//! the submitted image, asks the analysis client for an interpretation,
//! persists the result with its source image, and publishes
//! `Idle -> Loading -> (Result | Error) -> Idle` view state transitions on
//! a watch channel for the presentation layer.
//!
//! # Example
//!
//! ```no_run
//! use fortuna_client::GeminiClient;
//! use fortuna_service::{Config, ReadingService};
//! use fortuna_store::ReadingStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load_default()?;
//! let client = GeminiClient::new(config.api.client_config())?;
//! let store = ReadingStore::open(&config.storage.dir)?;
//!
//! let mut service = ReadingService::new(client, store);
//! let (fortune, reading) = service.submit(&std::fs::read("photo.jpg")?).await?;
//! println!("{fortune} (saved as {})", reading.id);
//! # Ok(())
//! # }
//! ```

pub mod config;
mod error;
mod service;
mod state;

pub use config::{ApiConfig, Config, ConfigError, StorageConfig, default_config_path};
pub use error::{Error, Result};
pub use service::ReadingService;
pub use state::ViewState;
