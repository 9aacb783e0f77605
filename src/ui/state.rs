/// Navigation tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Products,
    Quality,
    Movements,
    Users,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Products,
        Tab::Quality,
        Tab::Movements,
        Tab::Users,
        Tab::Settings,
    ];

    /// Stable identifier of the tab
    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Products => "produtos",
            Tab::Quality => "qualidade",
            Tab::Movements => "movimentacoes",
            Tab::Users => "usuarios",
            Tab::Settings => "configuracoes",
        }
    }

    /// Resolve an identifier; anything unknown lands on the dashboard
    pub fn from_id(id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == id)
            .unwrap_or(Tab::Dashboard)
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Products => "Produtos",
            Tab::Quality => "Qualidade",
            Tab::Movements => "Movimentações",
            Tab::Users => "Usuários",
            Tab::Settings => "Configurações",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Dashboard
    }
}

/// Holds the active tab; owned by the app and handed to the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationShell {
    active: Tab,
}

impl NavigationShell {
    pub fn new(active: Tab) -> Self {
        Self { active }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    /// Select by position; out-of-range indices are ignored
    pub fn select_index(&mut self, index: usize) -> Option<Tab> {
        let tab = *Tab::ALL.get(index)?;
        self.active = tab;
        Some(tab)
    }

    pub fn next(&mut self) -> Tab {
        let index = (self.active.index() + 1) % Tab::ALL.len();
        self.active = Tab::ALL[index];
        self.active
    }

    pub fn previous(&mut self) -> Tab {
        let index = if self.active.index() == 0 {
            Tab::ALL.len() - 1
        } else {
            self.active.index() - 1
        };
        self.active = Tab::ALL[index];
        self.active
    }

    pub fn titles(&self) -> Vec<&'static str> {
        Tab::ALL.iter().map(|t| t.label()).collect()
    }
}
