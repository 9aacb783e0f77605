use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{prelude::Rect, Frame};

/// View contract for all TUI views (non-async for trait object compatibility).
/// Data loading is async and lives on the concrete view types.
pub trait View {
    /// Render the view
    fn render(&self, f: &mut Frame, area: Rect);

    /// Get the view title
    fn get_title(&self) -> String;

    /// Get the view status text
    fn get_status(&self) -> String;

    /// Whether the view is consuming raw keystrokes (e.g. typing a search)
    fn captures_input(&self) -> bool {
        false
    }

    /// Handle view-specific key events
    fn handle_key(&mut self, _key: KeyCode) -> Result<bool> {
        Ok(false) // Default: not handled
    }
}

/// Static view for modules that are not available yet
#[derive(Debug, Clone)]
pub struct PlaceholderView {
    pub title: String,
}

impl PlaceholderView {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl View for PlaceholderView {
    fn render(&self, f: &mut Frame, area: Rect) {
        super::components::render_notice(f, area, &self.title, "Módulo em desenvolvimento...");
    }

    fn get_title(&self) -> String {
        self.title.clone()
    }

    fn get_status(&self) -> String {
        "Em desenvolvimento".to_string()
    }
}
