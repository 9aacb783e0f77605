use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Centralized layout management: tab bar, view content, status bar
pub struct TuiLayout {
    pub tab_bar: Rect,
    pub content: Rect,
    pub status_bar: Rect,
}

impl TuiLayout {
    /// Create a new layout from the given area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tab bar
                Constraint::Min(0),    // Content
                Constraint::Length(4), // Status bar
            ])
            .split(area);

        Self {
            tab_bar: chunks[0],
            content: chunks[1],
            status_bar: chunks[2],
        }
    }

    /// Render the tab bar
    pub fn render_tab_bar(&self, f: &mut Frame, titles: Vec<&'static str>, selected_tab: usize) {
        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title("🧪 Quantika"))
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .select(selected_tab);

        f.render_widget(tabs, self.tab_bar);
    }

    /// Render the status bar with key hints and the current status text
    pub fn render_status_bar(&self, f: &mut Frame, status_text: &str, operator: &str) {
        let status_content = vec![
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled("Tab/1-6", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::styled(" to switch views • ", Style::default().fg(Color::Gray)),
                Span::styled("R", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::styled(" to refresh • ", Style::default().fg(Color::Gray)),
                Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
            Line::from(vec![
                Span::styled(status_text.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled("  |  ", Style::default().fg(Color::DarkGray)),
                Span::styled(operator.to_string(), Style::default().fg(Color::White)),
            ]),
        ];

        let paragraph = Paragraph::new(status_content)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White));

        f.render_widget(paragraph, self.status_bar);
    }
}

/// Standard split for list views: header, counters, filters, list
pub struct ViewLayout {
    pub header: Rect,
    pub cards: Rect,
    pub filters: Rect,
    pub main_content: Rect,
}

impl ViewLayout {
    pub fn new(content_area: Rect, with_cards: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                               // Header
                Constraint::Length(if with_cards { 4 } else { 0 }), // Counter cards
                Constraint::Length(3),                               // Filters
                Constraint::Min(0),                                  // List
            ])
            .split(content_area);

        Self {
            header: chunks[0],
            cards: chunks[1],
            filters: chunks[2],
            main_content: chunks[3],
        }
    }

    /// Split an area into `count` equal columns
    pub fn columns(area: Rect, count: usize) -> Vec<Rect> {
        let constraints = vec![Constraint::Ratio(1, count.max(1) as u32); count.max(1)];
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area)
            .to_vec()
    }
}

/// Title block with a subtitle line, used at the top of every view
pub fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", subtitle), Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}
