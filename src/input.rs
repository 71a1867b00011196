//! Terminal input: the query input channel and table navigation.
//!
//! `raw` reads crossterm events in bursts and merges wheel scrolls, `service` runs the key state
//! machine and forwards [`InputAction`]s from a dedicated thread.

pub mod raw;
pub mod service;

pub use raw::ScrollDirection;
pub use service::{
    spawn_input_thread, InputAction, InputService, InputState, InputStateMachine,
};
