//! Shared types for the fortuna reading service.
//!
//! This crate provides the data model shared by the analysis client, the
//! persistence store, and the reading service:
//!
//! - [`Reading`] - one persisted fortune interpretation plus the reference
//!   to its source image blob
//!
//! # Example
//!
//! ```
//! use fortuna_types::Reading;
//!
//! let reading = Reading::new("Good fortune awaits.", "3f2a...");
//! assert!(!reading.content.is_empty());
//! ```

pub mod reading;

pub use reading::Reading;
