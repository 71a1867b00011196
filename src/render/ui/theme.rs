//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for terminal rendering using ratatui's
//! color system directly to avoid unnecessary abstractions.

use crate::error::CollviewError;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::str::FromStr;

/// Named theme selectable from configuration or the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

impl FromStr for ThemeName {
    type Err = CollviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(ThemeName::Default),
            "monochrome" => Ok(ThemeName::Monochrome),
            "high-contrast" | "high_contrast" => Ok(ThemeName::HighContrast),
            other => Err(CollviewError::invalid_argument(format!(
                "unknown theme '{}' (expected default, monochrome or high-contrast)",
                other
            ))),
        }
    }
}

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Normal text color (None uses terminal default)
    pub normal_text: Option<Color>,

    /// Query match highlighting inside cells
    pub search_match: Style,

    /// Table header row
    pub header: Style,

    /// Placeholder cells for empty fields
    pub placeholder: Style,

    /// Search box border when focused
    pub focused_border: Style,

    /// Search box border when not focused
    pub idle_border: Style,

    /// Meta line (view summary)
    pub meta: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Error/warning text
    pub error_text: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            normal_text: None,
            search_match: Style::default().fg(Color::Black).bg(Color::Yellow),
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Yellow),
            idle_border: Style::default().fg(Color::DarkGray),
            meta: Style::default().fg(Color::Gray),
            status_bg: Color::Blue,
            status_fg: Color::White,
            error_text: Color::Red,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            search_match: Style::default().add_modifier(Modifier::REVERSED),
            header: Style::default().add_modifier(Modifier::BOLD),
            placeholder: Style::default(),
            focused_border: Style::default().add_modifier(Modifier::BOLD),
            idle_border: Style::default(),
            meta: Style::default(),
            status_bg: Color::Black,
            status_fg: Color::White,
            error_text: Color::White,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            normal_text: Some(Color::White),
            search_match: Style::default().fg(Color::Black).bg(Color::LightYellow),
            header: Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            placeholder: Style::default().fg(Color::Gray),
            focused_border: Style::default().fg(Color::LightYellow),
            idle_border: Style::default().fg(Color::White),
            meta: Style::default().fg(Color::White),
            status_bg: Color::White,
            status_fg: Color::Black,
            error_text: Color::LightRed,
        }
    }

    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Base style for cell text
    pub fn text(&self) -> Style {
        match self.normal_text {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        }
    }
}
