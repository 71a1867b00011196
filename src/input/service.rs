//! High-level input service.
//!
//! Reads input bursts, runs the key state machine, and yields the `InputAction`s the
//! render loop consumes. Every edit of the query text produces
//! exactly one [`InputAction::UpdateQuery`].

use crate::error::Result;
use crate::input::raw::{self, RawInputEvent, ScrollDirection};
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Current input mode: browsing the table or typing into the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Navigation,
    QueryInput,
}

/// High-level input actions emitted by the state machine/service.
#[derive(Debug, Clone, PartialEq)]
pub enum InputAction {
    Scroll {
        direction: ScrollDirection,
        rows: usize,
    },
    PageUp,
    PageDown,
    GoToStart,
    GoToEnd,
    Quit,
    /// Move focus into the search box.
    FocusQuery,
    /// The search box now holds this text.
    UpdateQuery(String),
    /// Empty the search box.
    ClearQuery,
    /// Move focus back to the table, keeping the query.
    LeaveQuery,
    Resize {
        width: u16,
        height: u16,
    },
    NoAction,
    InvalidInput,
}

fn plain(modifiers: KeyModifiers) -> bool {
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// State machine translating key presses into actions.
pub struct InputStateMachine {
    state: InputState,
    query: String,
}

impl InputStateMachine {
    pub fn new() -> Self {
        Self::with_query(String::new())
    }

    /// Start in navigation mode with the search box already holding `query`.
    pub fn with_query(query: String) -> Self {
        Self {
            state: InputState::Navigation,
            query,
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> InputAction {
        if key_event.kind != KeyEventKind::Press {
            return InputAction::NoAction;
        }

        match (self.state, key_event.code, key_event.modifiers) {
            (_, KeyCode::Char('c'), KeyModifiers::CONTROL) => InputAction::Quit,

            // Table movement works in both modes with non-character keys.
            (_, KeyCode::Down, _) => InputAction::Scroll {
                direction: ScrollDirection::Down,
                rows: 1,
            },
            (_, KeyCode::Up, _) => InputAction::Scroll {
                direction: ScrollDirection::Up,
                rows: 1,
            },
            (_, KeyCode::PageDown, _) => InputAction::PageDown,
            (_, KeyCode::PageUp, _) => InputAction::PageUp,

            (InputState::Navigation, KeyCode::Char('j'), m) if plain(m) => InputAction::Scroll {
                direction: ScrollDirection::Down,
                rows: 1,
            },
            (InputState::Navigation, KeyCode::Char('k'), m) if plain(m) => InputAction::Scroll {
                direction: ScrollDirection::Up,
                rows: 1,
            },
            (InputState::Navigation, KeyCode::Char(' ') | KeyCode::Char('f'), m) if plain(m) => {
                InputAction::PageDown
            }
            (InputState::Navigation, KeyCode::Char('b'), m) if plain(m) => InputAction::PageUp,
            (InputState::Navigation, KeyCode::Char('g'), m) if plain(m) => InputAction::GoToStart,
            (InputState::Navigation, KeyCode::Home, _) => InputAction::GoToStart,
            (InputState::Navigation, KeyCode::Char('G'), m) if plain(m) => InputAction::GoToEnd,
            (InputState::Navigation, KeyCode::End, _) => InputAction::GoToEnd,
            (InputState::Navigation, KeyCode::Char('q'), m) if plain(m) => InputAction::Quit,
            (InputState::Navigation, KeyCode::Char('/'), m) if plain(m) => {
                self.state = InputState::QueryInput;
                InputAction::FocusQuery
            }
            (InputState::Navigation, KeyCode::Esc, _) => {
                if self.query.is_empty() {
                    InputAction::NoAction
                } else {
                    self.query.clear();
                    InputAction::ClearQuery
                }
            }

            (InputState::QueryInput, KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.query.clear();
                InputAction::ClearQuery
            }
            (InputState::QueryInput, KeyCode::Char(ch), m) if plain(m) && !ch.is_control() => {
                self.query.push(ch);
                InputAction::UpdateQuery(self.query.clone())
            }
            (InputState::QueryInput, KeyCode::Backspace, _) => {
                if self.query.pop().is_some() {
                    InputAction::UpdateQuery(self.query.clone())
                } else {
                    InputAction::NoAction
                }
            }
            (InputState::QueryInput, KeyCode::Enter | KeyCode::Esc, _) => {
                self.state = InputState::Navigation;
                InputAction::LeaveQuery
            }

            _ => InputAction::InvalidInput,
        }
    }

    /// Current text of the search box.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> InputState {
        self.state
    }
}

impl Default for InputStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Turns terminal input into `InputAction`s for the render loop.
pub struct InputService {
    state_machine: InputStateMachine,
}

impl InputService {
    pub fn new() -> Self {
        Self::with_query(String::new())
    }

    pub fn with_query(query: String) -> Self {
        Self {
            state_machine: InputStateMachine::with_query(query),
        }
    }

    /// Wait up to `timeout` for the next burst of input.
    pub fn poll_actions(&mut self, timeout: Duration) -> Result<Vec<InputAction>> {
        let burst = raw::read_burst(timeout)?;
        Ok(self.actions_for(burst))
    }

    /// Translate events that arrived together, as one burst.
    pub fn process_burst<I>(&mut self, events: I) -> Vec<InputAction>
    where
        I: IntoIterator<Item = Event>,
    {
        self.actions_for(raw::collapse_burst(events))
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        self.process_burst([event])
    }

    fn actions_for(&mut self, burst: Vec<RawInputEvent>) -> Vec<InputAction> {
        burst
            .into_iter()
            .map(|event| match event {
                RawInputEvent::Key(key_event) => self.state_machine.handle_key_event(key_event),
                RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
                RawInputEvent::Scroll { direction, rows } => {
                    InputAction::Scroll { direction, rows }
                }
            })
            .filter(|action| !matches!(action, InputAction::NoAction | InputAction::InvalidInput))
            .collect()
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the render loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
    initial_query: String,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::with_query(initial_query);
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(poll_interval) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("input thread error: {}", err);
                    break;
                }
            }
        }
    })
}
