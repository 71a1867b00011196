//! Drawing seam between the render loop and the terminal.

use crate::error::Result;
use crate::render::ui::state::ViewState;

/// Something that can draw a [`ViewState`].
///
/// The render loop only talks to this trait, so the terminal can be swapped for a
/// recorder in tests.
pub trait UIRenderer {
    /// Take over the terminal. Called once, before the first frame.
    fn initialize(&mut self) -> Result<()>;

    /// Draw one frame: search box, visible rows, meta line, status line.
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Give the terminal back. Calling it twice is harmless.
    fn cleanup(&mut self) -> Result<()>;

    /// Columns and rows available for drawing.
    fn terminal_size(&self) -> Result<(u16, u16)>;
}
