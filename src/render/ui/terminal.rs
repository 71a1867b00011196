//! Terminal UI implementation using ratatui
//!
//! The screen is split into the search box, the record table, the meta line, and the
//! status line. All data comes from [`ViewState`]; this type only draws it.

use crate::error::{CollviewError, Result};
use crate::record::Field;
use crate::render::table;
use crate::render::ui::state::{ViewState, VisibleRow, SEARCH_BOX_HEIGHT};
use crate::render::ui::{ColorTheme, UIRenderer};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    pub fn new() -> Result<Self> {
        Self::with_theme(ColorTheme::default())
    }

    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Split the screen into search box, table, meta line, and status line
    fn layout(area: Rect) -> [Rect; 4] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(SEARCH_BOX_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2], chunks[3]]
    }

    fn render_search_box(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let border_style = if view_state.query_focused {
            theme.focused_border
        } else {
            theme.idle_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Search (/) ")
            .border_style(border_style);

        let paragraph = Paragraph::new(Line::from(view_state.query.as_str()))
            .style(theme.text())
            .block(block);
        frame.render_widget(paragraph, area);

        if view_state.query_focused && area.width > 2 && area.height > 2 {
            let typed = view_state.query.chars().count() as u16;
            let x = area.x + 1 + typed.min(area.width - 3);
            frame.set_cursor(x, area.y + 1);
        }
    }

    fn render_table(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let header = Row::new(table::headers().map(Cell::from)).style(theme.header);

        let rows: Vec<Row> = view_state
            .visible_rows
            .iter()
            .map(|row| Self::table_row(row, theme))
            .collect();

        let widths = [Constraint::Ratio(1, Field::COUNT as u32); Field::COUNT];
        let table = Table::new(rows, widths).header(header).column_spacing(1);
        frame.render_widget(table, area);
    }

    fn table_row<'a>(row: &'a VisibleRow, theme: &ColorTheme) -> Row<'a> {
        let cells: Vec<Cell> = (0..Field::COUNT)
            .map(|idx| Cell::from(Self::cell_line(row, idx, theme)))
            .collect();
        Row::new(cells).style(theme.text())
    }

    /// Placeholder cells are dimmed; everything else carries its match highlights.
    fn cell_line<'a>(row: &'a VisibleRow, idx: usize, theme: &ColorTheme) -> Line<'a> {
        let text = row.cells[idx].as_str();
        if row.empty[idx] {
            Line::from(Span::styled(text, theme.placeholder))
        } else {
            Self::highlighted_line(text, &row.highlights[idx], theme)
        }
    }

    /// Build a line with match highlights applied using theme colors
    fn highlighted_line<'a>(
        content: &'a str,
        highlights: &[(usize, usize)],
        theme: &ColorTheme,
    ) -> Line<'a> {
        if highlights.is_empty() {
            return Line::from(content);
        }

        let mut spans = Vec::new();
        let mut last_end = 0;

        for &(start, end) in highlights {
            if start < last_end || end > content.len() || start >= end {
                continue;
            }
            if start > last_end {
                spans.push(Span::raw(&content[last_end..start]));
            }
            spans.push(Span::styled(&content[start..end], theme.search_match));
            last_end = end;
        }

        if last_end < content.len() {
            spans.push(Span::raw(&content[last_end..]));
        }

        Line::from(spans)
    }

    fn render_meta(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let meta = Paragraph::new(view_state.format_meta_line()).style(theme.meta);
        frame.render_widget(meta, area);
    }

    fn render_status(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let mut status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        if view_state.status_line.load_notice.is_some() {
            status_style = status_style.fg(theme.error_text);
        }

        let status = Paragraph::new(view_state.format_status_line()).style(status_style);
        frame.render_widget(status, area);
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;

            terminal.draw(move |frame| {
                let [search, table, meta, status] = Self::layout(frame.size());
                Self::render_search_box(frame, search, view_state, theme);
                Self::render_table(frame, table, view_state, theme);
                Self::render_meta(frame, meta, view_state, theme);
                Self::render_status(frame, status, view_state, theme);
            })?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| CollviewError::ui(format!("failed to set up terminal: {}", e)))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
            terminal.show_cursor()?;
        }
        Ok(())
    }

    fn terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
