//! Rendering subsystem.
//!
//! `service` turns input actions into filter passes and viewport updates, `ui` draws the
//! result in the terminal, and `text` writes a plain report for non-interactive use.

pub mod highlight;
pub mod service;
pub mod table;
pub mod text;
pub mod ui;

pub use service::RenderLoopState;
