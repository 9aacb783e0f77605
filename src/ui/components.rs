/// UI components shared by the inventory views
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{MovementType, QualityStatus, StockStatus};
use crate::utils::{movement_type_label, quality_label, stock_status_label};

pub fn stock_status_color(status: StockStatus) -> Color {
    match status {
        StockStatus::Normal => Color::Green,
        StockStatus::Low => Color::Yellow,
        StockStatus::Critical => Color::Red,
    }
}

pub fn quality_color(quality: QualityStatus) -> Color {
    match quality {
        QualityStatus::Approved => Color::Green,
        QualityStatus::Pending => Color::Yellow,
        QualityStatus::Rejected => Color::Red,
    }
}

pub fn movement_type_color(kind: MovementType) -> Color {
    match kind {
        MovementType::Inbound => Color::Green,
        MovementType::Outbound => Color::Red,
    }
}

/// Coloured badge for a stock status
pub fn stock_status_badge(status: StockStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", stock_status_label(status)),
        Style::default().fg(stock_status_color(status)),
    )
}

/// Coloured badge for a quality status
pub fn quality_badge(quality: QualityStatus) -> Span<'static> {
    Span::styled(
        format!("[{}]", quality_label(quality)),
        Style::default().fg(quality_color(quality)),
    )
}

pub fn movement_type_badge(kind: MovementType) -> Span<'static> {
    Span::styled(
        format!("[{}]", movement_type_label(kind)),
        Style::default().fg(movement_type_color(kind)),
    )
}

/// Render a counter card: big number plus a caption
pub fn render_stat_card(f: &mut Frame, area: Rect, title: &str, value: usize, caption: &str, color: Color) {
    let text = vec![
        Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(caption.to_string(), Style::default().fg(Color::Gray))),
    ];

    let card = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(title.to_string()));
    f.render_widget(card, area);
}

/// Row of selector "buttons", the active one highlighted
pub fn selector_line(label: &str, options: &[(&str, bool)]) -> Line<'static> {
    let mut spans = vec![Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray))];
    for (name, active) in options {
        let style = if *active {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!(" {} ", name), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Centered message used for empty states and placeholders
pub fn render_notice(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_use_portuguese_labels() {
        assert_eq!(stock_status_badge(StockStatus::Low).content, "[Baixo]");
        assert_eq!(quality_badge(QualityStatus::Approved).content, "[Aprovado]");
        assert_eq!(movement_type_badge(MovementType::Inbound).content, "[Entrada]");
        assert_eq!(stock_status_badge(StockStatus::Critical).style.fg, Some(Color::Red));
    }

    #[test]
    fn test_selector_line_marks_active_option() {
        let line = selector_line("Filtro", &[("Todas", false), ("Entradas", true)]);
        let active: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(Color::Yellow))
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(active, vec![" Entradas "]);
    }
}
