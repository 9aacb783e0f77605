use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use tracing::{error, info};

use super::components::{quality_badge, render_notice, stock_status_badge};
use super::layout::{render_header, ViewLayout};
use super::view::View;
use crate::filters::{categories, ProductFilter};
use crate::models::Product;
use crate::store::Stores;
use crate::utils::{format_date, format_price, format_quantity};

/// Product catalogue with text search and category selector
#[derive(Debug, Clone, Default)]
pub struct ProductsView {
    pub products: Vec<Product>,
    pub filter: ProductFilter,
    pub search_mode: bool,
}

impl ProductsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, stores: &Stores) {
        match stores.products.fetch_products().await {
            Ok(products) => {
                info!("Products loaded: {}", products.len());
                self.products = products;
            }
            Err(e) => error!("Failed to load products: {}", e),
        }
    }

    pub fn visible(&self) -> Vec<&Product> {
        self.filter.apply(&self.products)
    }

    pub fn cycle_category(&mut self) {
        let options = categories(&self.products);
        self.filter.category = self.filter.category.cycle(&options);
    }

    fn render_filters(&self, f: &mut Frame, area: Rect) {
        let search_style = if self.search_mode {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let cursor = if self.search_mode { "_" } else { "" };
        let search = if self.filter.search.is_empty() && !self.search_mode {
            "Buscar produtos...".to_string()
        } else {
            format!("{}{}", self.filter.search, cursor)
        };

        let line = Line::from(vec![
            Span::styled("Busca (/): ", Style::default().fg(Color::Gray)),
            Span::styled(search, search_style),
            Span::styled("   Categoria (c): ", Style::default().fg(Color::Gray)),
            Span::styled(self.filter.category.to_string(), Style::default().fg(Color::Cyan)),
        ]);

        f.render_widget(Paragraph::new(line).block(Block::default().borders(Borders::ALL)), area);
    }

    fn render_table(&self, f: &mut Frame, area: Rect, products: &[&Product]) {
        let header = Row::new(vec![
            "Nome", "Status", "Qualidade", "Categoria", "Conc.", "Estoque", "Mínimo", "Lote", "Local",
            "Vencimento", "Preço", "Fornecedor",
        ])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = products
            .iter()
            .map(|p| {
                Row::new(vec![
                    Cell::from(p.name.clone()),
                    Cell::from(stock_status_badge(p.status)),
                    Cell::from(quality_badge(p.quality)),
                    Cell::from(p.category.clone()),
                    Cell::from(p.concentration.clone()),
                    Cell::from(format_quantity(p.quantity, &p.unit)),
                    Cell::from(format_quantity(p.minimum_stock, &p.unit)),
                    Cell::from(p.batch.clone()),
                    Cell::from(p.location.clone()),
                    Cell::from(format_date(p.expiration_date)),
                    Cell::from(format_price(p.price)),
                    Cell::from(p.supplier.clone()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Length(24),
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(13),
            Constraint::Length(6),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(11),
            Constraint::Length(12),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("📦 {} de {} produtos", products.len(), self.products.len())),
        );
        f.render_widget(table, area);
    }
}

impl View for ProductsView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let layout = ViewLayout::new(area, false);
        render_header(
            f,
            layout.header,
            "Produtos",
            "Gerenciamento completo do estoque de produtos químicos",
        );
        self.render_filters(f, layout.filters);

        let visible = self.visible();
        if visible.is_empty() {
            render_notice(
                f,
                layout.main_content,
                "Nenhum produto encontrado",
                "Tente ajustar os filtros ou adicione um novo produto.",
            );
        } else {
            self.render_table(f, layout.main_content, &visible);
        }
    }

    fn get_title(&self) -> String {
        "Produtos".to_string()
    }

    fn get_status(&self) -> String {
        if self.search_mode {
            "Digitando busca (Enter/Esc para sair)".to_string()
        } else {
            format!("{} produtos exibidos", self.visible().len())
        }
    }

    fn captures_input(&self) -> bool {
        self.search_mode
    }

    fn handle_key(&mut self, key: KeyCode) -> Result<bool> {
        if self.search_mode {
            match key {
                KeyCode::Enter | KeyCode::Esc => self.search_mode = false,
                KeyCode::Backspace => {
                    self.filter.search.pop();
                }
                KeyCode::Char(c) => self.filter.search.push(c),
                _ => return Ok(false),
            }
            return Ok(true);
        }

        match key {
            KeyCode::Char('/') => {
                self.search_mode = true;
                Ok(true)
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.cycle_category();
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
