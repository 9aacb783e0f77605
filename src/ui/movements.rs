use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use tracing::{error, info};

use super::components::{movement_type_badge, movement_type_color, render_notice, render_stat_card, selector_line};
use super::layout::{render_header, ViewLayout};
use super::view::View;
use crate::analysis::{join_movements, summarize_movements};
use crate::filters::{filter_movements, MovementTypeSelector, Selector};
use crate::models::{CompleteMovement, MovementType};
use crate::store::Stores;
use crate::utils::format_date;

/// Inbound/outbound history joined with product details
#[derive(Debug, Clone, Default)]
pub struct MovementsView {
    pub movements: Vec<CompleteMovement>,
    pub selector: MovementTypeSelector,
}

impl MovementsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch movements and products together, then join them.
    /// Either fetch failing leaves the current list untouched.
    pub async fn load(&mut self, stores: &Stores) {
        let fetched = tokio::try_join!(
            stores.movements.fetch_movements(),
            stores.products.fetch_products()
        );

        match fetched {
            Ok((movements, products)) => {
                self.movements = join_movements(&movements, &products);
                info!("Movements loaded: {}", self.movements.len());
            }
            Err(e) => error!("Failed to load movements: {}", e),
        }
    }

    pub fn visible(&self) -> Vec<&CompleteMovement> {
        filter_movements(&self.movements, &self.selector)
    }

    fn render_cards(&self, f: &mut Frame, area: Rect) {
        let summary = summarize_movements(self.movements.iter().map(|m| &m.movement));
        let columns = ViewLayout::columns(area, 3);
        render_stat_card(f, columns[0], "Total de Movimentações", summary.total, "Registros no sistema", Color::Blue);
        render_stat_card(f, columns[1], "Entradas", summary.inbound, "Reposições de estoque", Color::Green);
        render_stat_card(f, columns[2], "Saídas", summary.outbound, "Consumo de produtos", Color::Red);
    }

    fn render_filters(&self, f: &mut Frame, area: Rect) {
        let options = [
            ("Todas", self.selector == Selector::All),
            ("Entradas", self.selector == Selector::Only(MovementType::Inbound)),
            ("Saídas", self.selector == Selector::Only(MovementType::Outbound)),
        ];
        let line = selector_line("Filtro (f)", &options);
        f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
    }

    fn movement_item(complete: &CompleteMovement) -> ListItem<'static> {
        let movement = &complete.movement;
        let color = movement_type_color(movement.kind);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{:>6} {:<3}", complete.signed_quantity(), complete.unit_label()),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(complete.product_label(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                movement_type_badge(movement.kind),
            ]),
            Line::from(Span::styled(
                format!(
                    "           {} {} • {} • {}",
                    movement.quantity,
                    complete.unit_label(),
                    format_date(movement.date),
                    movement.user
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        if !movement.notes.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("           Observações: {}", movement.notes),
                Style::default().fg(Color::DarkGray),
            )));
        }

        ListItem::new(lines)
    }
}

impl View for MovementsView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let layout = ViewLayout::new(area, true);
        render_header(
            f,
            layout.header,
            "Movimentações",
            "Histórico completo de entradas e saídas do estoque",
        );
        self.render_cards(f, layout.cards);
        self.render_filters(f, layout.filters);

        let visible = self.visible();
        if visible.is_empty() {
            render_notice(
                f,
                layout.main_content,
                "Nenhuma movimentação encontrada",
                "Não há registros com o filtro selecionado.",
            );
            return;
        }

        let items: Vec<ListItem> = visible.into_iter().map(Self::movement_item).collect();
        let list = List::new(items).block(Block::default().borders(Borders::ALL).title("🔄 Histórico"));
        f.render_widget(list, layout.main_content);
    }

    fn get_title(&self) -> String {
        "Movimentações".to_string()
    }

    fn get_status(&self) -> String {
        format!("{} movimentações exibidas", self.visible().len())
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        match key {
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.selector = self.selector.cycle(&MovementType::ALL);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_joins_seed_data() {
        let mut view = MovementsView::new();
        view.load(&Stores::in_memory()).await;

        assert_eq!(view.movements.len(), 4);
        assert!(view.movements.iter().all(|m| m.product.is_some()));
        assert_eq!(view.movements[0].product_label(), "Ácido Sulfúrico");

        view.handle_key(KeyCode::Char('f')).unwrap();
        let ids: Vec<i64> = view.visible().iter().map(|m| m.movement.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
