//! # collview - Terminal Viewer for Biological Collection Records
//!
//! Loads specimen records from a generated JavaScript bundle, a JSON array, or a CSV
//! export, and filters them by a free-text query into a bounded, ordered view.
//!
//! ## Features
//!
//! - **Incremental Filtering**: case-insensitive substring matching over every display
//!   field, recomputed on each query edit
//! - **Bounded Views**: at most [`MAX_ROWS`] records are shown, with the uncapped match
//!   count reported alongside
//! - **Several Data Sources**: JSON arrays, `COLLECTION_DATA` bundles, and CSV exports
//! - **Bundle Builder**: turns a CSV export into the bundle a static site loads
//! - **Terminal UI**: search box, record table with highlighted matches, and status line
//!
//! ## Architecture
//!
//! - [`error`] - Centralized error types and handling
//! - [`record`] - Record fields and normalization of raw rows
//! - [`collection`] - The immutable record set
//! - [`filter`] - Query normalization and the filter pass
//! - [`status`] - Load status and view summary text
//! - [`source`] - Data file loading and bundle generation
//! - [`config`] - Optional configuration file
//! - [`input`] - Terminal input to high-level actions
//! - [`render`] - Render loop state, terminal UI, and plain-text reports
//! - [`app`] - Application core and component coordination

// Core modules
pub mod collection;
pub mod error;
pub mod filter;
pub mod record;
pub mod status;

// Data sources and settings
pub mod config;
pub mod source;

// Interactive subsystems
pub mod input;
pub mod render;

pub mod app;

// Re-export commonly used types for convenience
pub use error::{CollviewError, Result};

// Public API surface for external usage
pub use app::Application;
pub use collection::RecordSet;
pub use filter::{FilterResult, Query, RecordFilter, MAX_ROWS};
pub use record::{Field, RawRecord, Record};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
