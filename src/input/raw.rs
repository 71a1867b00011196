//! Terminal event intake.
//!
//! Events are read in bursts: one blocking poll for the first event, then everything the
//! terminal has already queued. Within a burst, consecutive wheel ticks in one direction
//! merge into a single scroll so a fast wheel spin costs one viewport refresh. Keys are
//! passed through one by one; each query edit must reach the filter on its own.

use crate::error::Result;
use ratatui::crossterm::event::{self, Event, KeyEvent, MouseEventKind};
use std::time::Duration;

/// Table rows moved per wheel tick.
pub const WHEEL_ROWS: usize = 3;

/// Upper bound on events read in one burst, so a flood cannot starve rendering.
const MAX_BURST: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Terminal events the viewer reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize {
        width: u16,
        height: u16,
    },
    Scroll {
        direction: ScrollDirection,
        rows: usize,
    },
}

impl RawInputEvent {
    /// Map a crossterm event; focus, paste, clicks and drags are ignored.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(RawInputEvent::Key(key)),
            Event::Resize(width, height) => Some(RawInputEvent::Resize { width, height }),
            Event::Mouse(mouse) => {
                let direction = match mouse.kind {
                    MouseEventKind::ScrollUp => ScrollDirection::Up,
                    MouseEventKind::ScrollDown => ScrollDirection::Down,
                    _ => return None,
                };
                Some(RawInputEvent::Scroll {
                    direction,
                    rows: WHEEL_ROWS,
                })
            }
            _ => None,
        }
    }
}

/// Translate a burst of terminal events, merging adjacent same-direction scrolls.
pub fn collapse_burst<I>(events: I) -> Vec<RawInputEvent>
where
    I: IntoIterator<Item = Event>,
{
    let mut out: Vec<RawInputEvent> = Vec::new();

    for event in events.into_iter().filter_map(RawInputEvent::from_terminal) {
        if let (
            Some(RawInputEvent::Scroll { direction, rows }),
            RawInputEvent::Scroll {
                direction: next,
                rows: more,
            },
        ) = (out.last_mut(), &event)
        {
            if *direction == *next {
                *rows = rows.saturating_add(*more);
                continue;
            }
        }
        out.push(event);
    }

    out
}

/// Wait up to `timeout` for input and return the translated burst (empty on timeout).
pub fn read_burst(timeout: Duration) -> Result<Vec<RawInputEvent>> {
    if !event::poll(timeout)? {
        return Ok(Vec::new());
    }

    let mut burst = vec![event::read()?];
    while burst.len() < MAX_BURST && event::poll(Duration::ZERO)? {
        burst.push(event::read()?);
    }

    Ok(collapse_burst(burst))
}
