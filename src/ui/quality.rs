use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tracing::{error, info};

use super::components::{quality_badge, render_notice, render_stat_card, selector_line};
use super::layout::{render_header, ViewLayout};
use super::view::View;
use crate::analysis::summarize_quality;
use crate::filters::{filter_by_quality, QualitySelector, Selector};
use crate::models::{Product, QualityStatus};
use crate::store::Stores;
use crate::utils::format_date;

/// Quality-control board filtered by approval status
#[derive(Debug, Clone, Default)]
pub struct QualityView {
    pub products: Vec<Product>,
    pub selector: QualitySelector,
}

impl QualityView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, stores: &Stores) {
        match stores.products.fetch_products().await {
            Ok(products) => {
                info!("Quality control data loaded: {} products", products.len());
                self.products = products;
            }
            Err(e) => error!("Failed to load quality data: {}", e),
        }
    }

    pub fn visible(&self) -> Vec<&Product> {
        filter_by_quality(&self.products, &self.selector)
    }

    fn render_cards(&self, f: &mut Frame, area: Rect) {
        let summary = summarize_quality(&self.products);
        let columns = ViewLayout::columns(area, 3);
        render_stat_card(f, columns[0], "Aprovados", summary.approved, "Liberados para uso", Color::Green);
        render_stat_card(f, columns[1], "Pendentes", summary.pending, "Aguardando análise", Color::Yellow);
        render_stat_card(f, columns[2], "Reprovados", summary.rejected, "Bloqueados", Color::Red);
    }

    fn render_filters(&self, f: &mut Frame, area: Rect) {
        let options = [
            ("Todos", self.selector == Selector::All),
            ("Pendentes", self.selector == Selector::Only(QualityStatus::Pending)),
            ("Aprovados", self.selector == Selector::Only(QualityStatus::Approved)),
            ("Reprovados", self.selector == Selector::Only(QualityStatus::Rejected)),
        ];
        let line = selector_line("Filtro (f)", &options);
        f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
    }

    fn render_table(&self, f: &mut Frame, area: Rect, products: &[&Product]) {
        let header = Row::new(vec!["Produto", "Lote", "Categoria", "Última análise", "Vencimento", "Qualidade"])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = products
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(p.name.clone()),
                    Cell::from(p.batch.clone()),
                    Cell::from(p.category.clone()),
                    Cell::from(format_date(p.last_analysis)),
                    Cell::from(format_date(p.expiration_date)),
                    Cell::from(quality_badge(p.quality)),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(26),
            Constraint::Length(14),
            Constraint::Length(14),
            Constraint::Length(16),
            Constraint::Length(12),
            Constraint::Min(12),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title("🧪 Análises"));
        f.render_widget(table, area);
    }
}

impl View for QualityView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let layout = ViewLayout::new(area, true);
        render_header(
            f,
            layout.header,
            "Controle de Qualidade",
            "Monitoramento e aprovação da qualidade dos produtos químicos",
        );
        self.render_cards(f, layout.cards);
        self.render_filters(f, layout.filters);

        let visible = self.visible();
        if visible.is_empty() {
            render_notice(
                f,
                layout.main_content,
                "Nenhum produto encontrado",
                "Não há produtos com o status selecionado.",
            );
        } else {
            self.render_table(f, layout.main_content, &visible);
        }
    }

    fn get_title(&self) -> String {
        "Qualidade".to_string()
    }

    fn get_status(&self) -> String {
        let pending = self
            .products
            .iter()
            .filter(|p| p.quality == QualityStatus::Pending)
            .count();
        format!("{} análises pendentes", pending)
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        match key {
            KeyCode::Char('f') | KeyCode::Char('F') => {
                self.selector = self.selector.cycle(&QualityStatus::ALL);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
