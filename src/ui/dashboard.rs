use chrono::{Local, NaiveDate};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use tracing::{error, info};

use super::components::{quality_badge, render_notice, render_stat_card, stock_status_badge};
use super::layout::{render_header, ViewLayout};
use super::view::View;
use crate::analysis::{build_dashboard_snapshot, DashboardSnapshot};
use crate::store::Stores;

/// Overview: four counters and the products that require attention
#[derive(Debug, Clone)]
pub struct DashboardView {
    pub snapshot: DashboardSnapshot,
    pub expiry_window_days: u32,
    pub loaded: bool,
}

impl DashboardView {
    pub fn new(expiry_window_days: u32) -> Self {
        Self {
            snapshot: DashboardSnapshot::default(),
            expiry_window_days,
            loaded: false,
        }
    }

    /// Fetch products and recompute counters relative to today
    pub async fn load(&mut self, stores: &Stores) {
        self.load_at(stores, Local::now().date_naive()).await
    }

    /// Fetch products and recompute counters relative to `today`; on failure
    /// the previous snapshot is kept
    pub async fn load_at(&mut self, stores: &Stores, today: NaiveDate) {
        match stores.products.fetch_products().await {
            Ok(products) => {
                self.snapshot = build_dashboard_snapshot(&products, today, self.expiry_window_days);
                self.loaded = true;
                info!("Dashboard stats updated: {:?}", self.snapshot.stats);
            }
            Err(e) => error!("Failed to load dashboard data: {}", e),
        }
    }

    fn render_cards(&self, f: &mut Frame, area: Rect) {
        let stats = &self.snapshot.stats;
        let columns = ViewLayout::columns(area, 4);
        let window = format!("Vencendo ({} dias)", self.expiry_window_days);

        render_stat_card(f, columns[0], "Total de Produtos", stats.total_products, "Produtos cadastrados", Color::White);
        render_stat_card(f, columns[1], "Baixo Estoque", stats.low_stock, "Requerem atenção", Color::Yellow);
        render_stat_card(f, columns[2], &window, stats.expiring_soon, "Verificar validade", Color::LightRed);
        render_stat_card(f, columns[3], "Qualidade Aprovada", stats.approved, "Liberados para uso", Color::Green);
    }

    fn render_critical(&self, f: &mut Frame, area: Rect) {
        if self.snapshot.critical.is_empty() {
            render_notice(f, area, "Produtos que Requerem Atenção", "Nenhum produto crítico no momento.");
            return;
        }

        let items: Vec<ListItem> = self
            .snapshot
            .critical
            .iter()
            .map(|product| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(product.name.clone(), Style::default().fg(Color::White)),
                        Span::raw("  "),
                        stock_status_badge(product.status),
                        Span::raw(" "),
                        quality_badge(product.quality),
                    ]),
                    Line::from(Span::styled(
                        format!("  Estoque: {} (mín: {})", product.quantity, product.minimum_stock),
                        Style::default().fg(Color::Gray),
                    )),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title("⚠ Produtos que Requerem Atenção"),
        );
        f.render_widget(list, area);
    }
}

impl View for DashboardView {
    fn render(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Counters
                Constraint::Min(0),    // Critical products
            ])
            .split(area);

        render_header(
            f,
            chunks[0],
            "Dashboard",
            "Visão geral do sistema de controle de estoque químico",
        );
        self.render_cards(f, chunks[1]);
        self.render_critical(f, chunks[2]);
    }

    fn get_title(&self) -> String {
        "Dashboard".to_string()
    }

    fn get_status(&self) -> String {
        if self.loaded {
            format!("{} produtos requerem atenção", self.snapshot.critical.len())
        } else {
            "Sem dados".to_string()
        }
    }
}
