//! Application orchestration layer
//!
//! Wires the record set, the render loop state, and a UI renderer together. Input arrives
//! as [`InputAction`]s on a channel fed by the blocking input thread; every action is
//! applied synchronously and followed by one render.

use crate::collection::RecordSet;
use crate::config::DEFAULT_POLL_INTERVAL_MS;
use crate::error::Result;
use crate::filter::RecordFilter;
use crate::input::{spawn_input_thread, InputAction};
use crate::render::ui::{UIRenderer, ViewState};
use crate::render::RenderLoopState;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Application orchestrator - coordinates components without duplicating their state
pub struct Application {
    render_state: RenderLoopState,
    view_state: ViewState,
    ui_renderer: Box<dyn UIRenderer>,
    poll_interval: Duration,
    initial_query: String,
}

impl Application {
    pub fn new(
        records: RecordSet,
        source_path: impl AsRef<Path>,
        ui_renderer: Box<dyn UIRenderer>,
    ) -> Result<Self> {
        let (width, height) = ui_renderer.terminal_size()?;

        Ok(Self {
            render_state: RenderLoopState::new(RecordFilter::new(records)),
            view_state: ViewState::new(source_path, width, height),
            ui_renderer,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            initial_query: String::new(),
        })
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Start with the search box already holding `query`.
    pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
        self.initial_query = query.into();
        self
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Run the interactive session until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        let (width, height) = self.ui_renderer.terminal_size()?;
        self.view_state.update_terminal_size(width, height);

        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_handle = spawn_input_thread(
            action_tx,
            Arc::clone(&shutdown),
            self.poll_interval,
            self.initial_query.clone(),
        );

        let result = self.drive(action_rx).await;

        shutdown.store(true, Ordering::SeqCst);
        if !matches!(
            tokio::task::spawn_blocking(move || input_handle.join()).await,
            Ok(Ok(()))
        ) {
            log::warn!("input thread did not shut down cleanly");
        }

        self.ui_renderer.cleanup()?;
        result
    }

    /// Apply actions from `actions` until `Quit` or the channel closes.
    pub async fn drive(&mut self, mut actions: UnboundedReceiver<InputAction>) -> Result<()> {
        let initial_query = self.initial_query.clone();
        self.render_state
            .apply_query(&initial_query, &mut self.view_state);
        self.ui_renderer.render(&self.view_state)?;

        while let Some(action) = actions.recv().await {
            log::debug!("input action: {:?}", action);
            if !self
                .render_state
                .process_action(action, &mut self.view_state)?
            {
                break;
            }
            self.ui_renderer.render(&self.view_state)?;
        }

        Ok(())
    }
}
