//! Plain-text renditions of the dashboard views for the `report` command.

use chrono::NaiveDate;
use tracing::info;

use crate::analysis::{build_dashboard_snapshot, join_movements, summarize_movements, summarize_quality};
use crate::filters::{categories, filter_by_quality, filter_movements, MovementTypeSelector, ProductFilter, QualitySelector};
use crate::store::{StoreError, Stores};
use crate::utils::{
    format_date, format_price, format_quantity, movement_type_label, quality_label, stock_status_label,
};

/// Which view to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportKind {
    Dashboard,
    Produtos,
    Qualidade,
    Movimentacoes,
    Usuarios,
}

/// Filters and clock used when building a report
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub product_filter: ProductFilter,
    pub movement_type: MovementTypeSelector,
    pub quality: QualitySelector,
    pub today: NaiveDate,
    pub expiry_window_days: u32,
}

pub async fn build_report(kind: ReportKind, stores: &Stores, options: &ReportOptions) -> Result<Vec<String>, StoreError> {
    info!("Building {:?} report", kind);
    match kind {
        ReportKind::Dashboard => dashboard_report(stores, options).await,
        ReportKind::Produtos => products_report(stores, options).await,
        ReportKind::Qualidade => quality_report(stores, options).await,
        ReportKind::Movimentacoes => movements_report(stores, options).await,
        ReportKind::Usuarios => users_report(stores).await,
    }
}

async fn dashboard_report(stores: &Stores, options: &ReportOptions) -> Result<Vec<String>, StoreError> {
    let products = stores.products.fetch_products().await?;
    let snapshot = build_dashboard_snapshot(&products, options.today, options.expiry_window_days);
    let stats = &snapshot.stats;

    let mut lines = vec![
        format!("Dashboard ({})", format_date(options.today)),
        format!("  Total de Produtos:   {}", stats.total_products),
        format!("  Baixo Estoque:       {}", stats.low_stock),
        format!("  Vencendo ({} dias):  {}", options.expiry_window_days, stats.expiring_soon),
        format!("  Qualidade Aprovada:  {}", stats.approved),
        String::new(),
        "Produtos que Requerem Atenção".to_string(),
    ];

    if snapshot.critical.is_empty() {
        lines.push("  Nenhum produto crítico no momento.".to_string());
    }
    for product in &snapshot.critical {
        lines.push(format!(
            "  {} - Estoque: {} (mín: {}) [{}] [{}]",
            product.name,
            product.quantity,
            product.minimum_stock,
            stock_status_label(product.status),
            quality_label(product.quality)
        ));
    }
    Ok(lines)
}

async fn products_report(stores: &Stores, options: &ReportOptions) -> Result<Vec<String>, StoreError> {
    let products = stores.products.fetch_products().await?;
    let visible = options.product_filter.apply(&products);

    let mut lines = vec![
        format!("Produtos ({} de {})", visible.len(), products.len()),
        format!("  Categorias: {}", categories(&products).join(", ")),
    ];
    if visible.is_empty() {
        lines.push("  Nenhum produto encontrado".to_string());
    }
    for p in visible {
        lines.push(format!(
            "  #{} {} [{}] [{}] {} {} | estoque {} (mín {}) | lote {} | {} | vence {} | {} | {}",
            p.id,
            p.name,
            stock_status_label(p.status),
            quality_label(p.quality),
            p.category,
            p.concentration,
            format_quantity(p.quantity, &p.unit),
            format_quantity(p.minimum_stock, &p.unit),
            p.batch,
            p.location,
            format_date(p.expiration_date),
            format_price(p.price),
            p.supplier
        ));
    }
    Ok(lines)
}

async fn quality_report(stores: &Stores, options: &ReportOptions) -> Result<Vec<String>, StoreError> {
    let products = stores.products.fetch_products().await?;
    let summary = summarize_quality(&products);
    let visible = filter_by_quality(&products, &options.quality);

    let mut lines = vec![format!(
        "Controle de Qualidade: {} aprovados, {} pendentes, {} reprovados",
        summary.approved, summary.pending, summary.rejected
    )];
    if visible.is_empty() {
        lines.push("  Nenhum produto encontrado".to_string());
    }
    for p in visible {
        lines.push(format!(
            "  {} | lote {} | {} | última análise {} | vence {} [{}]",
            p.name,
            p.batch,
            p.category,
            format_date(p.last_analysis),
            format_date(p.expiration_date),
            quality_label(p.quality)
        ));
    }
    Ok(lines)
}

async fn movements_report(stores: &Stores, options: &ReportOptions) -> Result<Vec<String>, StoreError> {
    let (movements, products) = tokio::try_join!(
        stores.movements.fetch_movements(),
        stores.products.fetch_products()
    )?;
    let joined = join_movements(&movements, &products);
    let summary = summarize_movements(&movements);
    let visible = filter_movements(&joined, &options.movement_type);

    let mut lines = vec![format!(
        "Movimentações: {} total, {} entradas, {} saídas",
        summary.total, summary.inbound, summary.outbound
    )];
    if visible.is_empty() {
        lines.push("  Nenhuma movimentação encontrada".to_string());
    }
    for m in visible {
        lines.push(format!(
            "  {} {} {} [{}] {} • {}{}",
            m.signed_quantity(),
            m.unit_label(),
            m.product_label(),
            movement_type_label(m.movement.kind),
            format_date(m.movement.date),
            m.movement.user,
            if m.movement.notes.is_empty() {
                String::new()
            } else {
                format!(" • {}", m.movement.notes)
            }
        ));
    }
    Ok(lines)
}

async fn users_report(stores: &Stores) -> Result<Vec<String>, StoreError> {
    let users = stores.users.fetch_users().await?;
    let mut lines = vec![format!("Usuários ({})", users.len())];
    for user in users {
        lines.push(format!("  {} - {} <{}>", user.name, user.role, user.email));
    }
    Ok(lines)
}
