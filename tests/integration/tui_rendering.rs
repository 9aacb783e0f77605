//! Render the dashboard into an in-memory terminal and inspect the text

use crossterm::event::KeyCode;
use quantika::store::Stores;
use quantika::ui::InventoryApp;
use ratatui::{backend::TestBackend, Terminal};

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

async fn started_app() -> (InventoryApp, Terminal<TestBackend>) {
    let mut app = InventoryApp::new(Stores::in_memory(), 30);
    app.start().await;
    let terminal = Terminal::new(TestBackend::new(180, 48)).unwrap();
    (app, terminal)
}

#[test_log::test(tokio::test)]
async fn test_dashboard_screen_lists_critical_products() {
    let (app, mut terminal) = started_app().await;
    terminal.draw(|f| app.draw(f)).unwrap();
    let text = screen_text(&terminal);

    assert!(text.contains("Total de Produtos"));
    assert!(text.contains("Qualidade Aprovada"));
    assert!(text.contains("Hipoclorito de Sódio"));
    assert!(text.contains("Mireli Scarton"));
    // Normal stock and approved quality is not critical
    assert!(!text.contains("Álcool Etílico"));
}

#[test_log::test(tokio::test)]
async fn test_products_empty_state() {
    let (mut app, mut terminal) = started_app().await;
    app.handle_key_event(KeyCode::Char('2')).await.unwrap();
    app.handle_key_event(KeyCode::Char('/')).await.unwrap();
    for c in "xyz".chars() {
        app.handle_key_event(KeyCode::Char(c)).await.unwrap();
    }

    terminal.draw(|f| app.draw(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Nenhum produto encontrado"));
    assert!(text.contains("Tente ajustar os filtros"));
}

#[test_log::test(tokio::test)]
async fn test_movements_screen_shows_signed_quantities() {
    let (mut app, mut terminal) = started_app().await;
    app.handle_key_event(KeyCode::Char('4')).await.unwrap();

    terminal.draw(|f| app.draw(f)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("+50"));
    assert!(text.contains("-8"));
    assert!(text.contains("Hidróxido de Sódio"));
}

#[test_log::test(tokio::test)]
async fn test_placeholder_tab_renders_notice() {
    let (mut app, mut terminal) = started_app().await;
    app.handle_key_event(KeyCode::Char('5')).await.unwrap();

    terminal.draw(|f| app.draw(f)).unwrap();
    assert!(screen_text(&terminal).contains("Módulo em desenvolvimento"));
}
