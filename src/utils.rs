use chrono::NaiveDate;

use crate::models::{MovementType, QualityStatus, StockStatus};

/// Format a date the Brazilian way (dd/mm/yyyy)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a value as Brazilian reais, e.g. `R$ 1.234,56`
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let integer = (cents / 100).to_string();
    let fraction = cents % 100;

    // Group the integer part in thousands with '.'
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, fraction)
}

/// Quantity with its unit, e.g. `150 L`
pub fn format_quantity(quantity: u32, unit: &str) -> String {
    format!("{} {}", quantity, unit)
}

pub fn stock_status_label(status: StockStatus) -> &'static str {
    match status {
        StockStatus::Normal => "Normal",
        StockStatus::Low => "Baixo",
        StockStatus::Critical => "Crítico",
    }
}

pub fn quality_label(quality: QualityStatus) -> &'static str {
    match quality {
        QualityStatus::Approved => "Aprovado",
        QualityStatus::Pending => "Pendente",
        QualityStatus::Rejected => "Reprovado",
    }
}

pub fn movement_type_label(kind: MovementType) -> &'static str {
    match kind {
        MovementType::Inbound => "Entrada",
        MovementType::Outbound => "Saída",
    }
}
