use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::{debug, error, info};

use super::dashboard::DashboardView;
use super::layout::TuiLayout;
use super::movements::MovementsView;
use super::products::ProductsView;
use super::quality::QualityView;
use super::state::{NavigationShell, Tab};
use super::view::{PlaceholderView, View};
use crate::models::User;
use crate::store::Stores;

/// Composition root of the dashboard: owns the shell and every view
pub struct InventoryApp {
    stores: Stores,
    pub shell: NavigationShell,
    pub dashboard: DashboardView,
    pub products: ProductsView,
    pub quality: QualityView,
    pub movements: MovementsView,
    users: PlaceholderView,
    settings: PlaceholderView,
    pub operator: Option<User>,
    pub should_quit: bool,
    expiry_window_days: u32,
}

impl InventoryApp {
    pub fn new(stores: Stores, expiry_window_days: u32) -> Self {
        Self {
            stores,
            shell: NavigationShell::default(),
            dashboard: DashboardView::new(expiry_window_days),
            products: ProductsView::new(),
            quality: QualityView::new(),
            movements: MovementsView::new(),
            users: PlaceholderView::new("Usuários"),
            settings: PlaceholderView::new("Configurações"),
            operator: None,
            should_quit: false,
            expiry_window_days,
        }
    }

    /// Open on `tab` instead of the dashboard
    pub fn starting_at(mut self, tab: Tab) -> Self {
        self.shell = NavigationShell::new(tab);
        self
    }

    /// Load the operator shown in the status bar and mount the initial tab
    pub async fn start(&mut self) {
        match self.stores.users.fetch_users().await {
            Ok(users) => self.operator = users.into_iter().next(),
            Err(e) => error!("Failed to load users: {}", e),
        }
        self.mount(self.shell.active()).await;
    }

    /// Switch tabs. The target view starts from fresh state and fetches its data.
    pub async fn activate(&mut self, tab: Tab) {
        info!("Menu selected: {}", tab.id());
        self.shell.select(tab);
        self.mount(tab).await;
    }

    async fn mount(&mut self, tab: Tab) {
        match tab {
            Tab::Dashboard => self.dashboard = DashboardView::new(self.expiry_window_days),
            Tab::Products => self.products = ProductsView::new(),
            Tab::Quality => self.quality = QualityView::new(),
            Tab::Movements => self.movements = MovementsView::new(),
            Tab::Users | Tab::Settings => {}
        }
        self.load(tab).await;
    }

    /// Refetch the active view, keeping its filters and, on failure, its data
    pub async fn refresh(&mut self) {
        self.load(self.shell.active()).await;
    }

    async fn load(&mut self, tab: Tab) {
        debug!("Loading data for {}", tab.id());
        match tab {
            Tab::Dashboard => self.dashboard.load(&self.stores).await,
            Tab::Products => self.products.load(&self.stores).await,
            Tab::Quality => self.quality.load(&self.stores).await,
            Tab::Movements => self.movements.load(&self.stores).await,
            Tab::Users | Tab::Settings => {}
        }
    }

    pub fn active_view(&self) -> &dyn View {
        match self.shell.active() {
            Tab::Dashboard => &self.dashboard,
            Tab::Products => &self.products,
            Tab::Quality => &self.quality,
            Tab::Movements => &self.movements,
            Tab::Users => &self.users,
            Tab::Settings => &self.settings,
        }
    }

    fn active_view_mut(&mut self) -> &mut dyn View {
        match self.shell.active() {
            Tab::Dashboard => &mut self.dashboard,
            Tab::Products => &mut self.products,
            Tab::Quality => &mut self.quality,
            Tab::Movements => &mut self.movements,
            Tab::Users => &mut self.users,
            Tab::Settings => &mut self.settings,
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let layout = TuiLayout::new(f.area());
        layout.render_tab_bar(f, self.shell.titles(), self.shell.active().index());
        self.active_view().render(f, layout.content);

        let operator = self
            .operator
            .as_ref()
            .map(|u| format!("{} • {}", u.name, u.role))
            .unwrap_or_else(|| "Operador desconhecido".to_string());
        layout.render_status_bar(f, &self.active_view().get_status(), &operator);
    }

    pub async fn handle_key_event(&mut self, key: KeyCode) -> Result<()> {
        // A view that is capturing text gets every key first
        if self.active_view().captures_input() {
            self.active_view_mut().handle_key(key)?;
            return Ok(());
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                let tab = self.shell.next();
                self.activate(tab).await;
            }
            KeyCode::BackTab => {
                let tab = self.shell.previous();
                self.activate(tab).await;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.refresh().await;
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = self.shell.select_index(index) {
                    self.activate(tab).await;
                }
            }
            other => {
                self.active_view_mut().handle_key(other)?;
            }
        }
        Ok(())
    }
}

/// Run the dashboard in the terminal until the user quits
pub async fn run_app(mut app: InventoryApp) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut terminal = match enter_terminal() {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            return Err(e);
        }
    };

    app.start().await;

    // Main application loop
    let result: Result<()> = async {
        loop {
            terminal.draw(|f| app.draw(f))?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key_event(key.code).await?;
                    }
                }
            }

            if app.should_quit {
                break Ok(());
            }
        }
    }
    .await;

    restore_terminal();
    result
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    io::stdout().execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(io::stdout()))?)
}

/// Leave raw mode and the alternate screen; failures are only logged
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = io::stdout().execute(LeaveAlternateScreen) {
        error!("Failed to leave alternate screen: {}", e);
    }
}
