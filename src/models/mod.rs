use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Chemical product tracked by stock level, quality and expiration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "concentracao")]
    pub concentration: String,
    #[serde(rename = "lote")]
    pub batch: String,
    #[serde(rename = "fornecedor")]
    pub supplier: String,
    #[serde(rename = "dataVencimento")]
    pub expiration_date: NaiveDate,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "unidade")]
    pub unit: String,
    #[serde(rename = "estoqueMinimo")]
    pub minimum_stock: u32,
    pub status: StockStatus,
    #[serde(rename = "qualidade")]
    pub quality: QualityStatus,
    #[serde(rename = "ultimaAnalise")]
    pub last_analysis: NaiveDate,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "localizacao")]
    pub location: String,
}

/// Stock level classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StockStatus {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "baixo")]
    Low,
    #[serde(rename = "critico")]
    Critical,
}

impl StockStatus {
    /// Low and critical both need restocking
    pub fn needs_restock(self) -> bool {
        matches!(self, StockStatus::Low | StockStatus::Critical)
    }
}

/// Quality-control classification of a product batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum QualityStatus {
    #[serde(rename = "aprovado")]
    Approved,
    #[serde(rename = "pendente")]
    Pending,
    #[serde(rename = "reprovado")]
    Rejected,
}

impl QualityStatus {
    pub const ALL: [QualityStatus; 3] = [
        QualityStatus::Pending,
        QualityStatus::Approved,
        QualityStatus::Rejected,
    ];

    /// Wire identifier, as used by the API and the CLI
    pub fn as_id(self) -> &'static str {
        match self {
            QualityStatus::Approved => "aprovado",
            QualityStatus::Pending => "pendente",
            QualityStatus::Rejected => "reprovado",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_id() == id)
    }
}

/// Direction of a stock movement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum MovementType {
    #[serde(rename = "entrada")]
    Inbound,
    #[serde(rename = "saida")]
    Outbound,
}

impl MovementType {
    pub const ALL: [MovementType; 2] = [MovementType::Inbound, MovementType::Outbound];

    pub fn as_id(self) -> &'static str {
        match self {
            MovementType::Inbound => "entrada",
            MovementType::Outbound => "saida",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_id() == id)
    }
}

/// Recorded inbound or outbound change to a product's stock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub id: i64,
    #[serde(rename = "produtoId")]
    pub product_id: i64,
    #[serde(rename = "tipo")]
    pub kind: MovementType,
    #[serde(rename = "quantidade")]
    pub quantity: u32,
    #[serde(rename = "data")]
    pub date: NaiveDate,
    #[serde(rename = "usuario")]
    pub user: String,
    #[serde(rename = "observacoes", default)]
    pub notes: String,
}

/// Warehouse staff member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "cargo")]
    pub role: String,
    pub email: String,
}

/// Dashboard counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub expiring_soon: usize,
    pub approved: usize,
}

/// Quality view counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualitySummary {
    pub approved: usize,
    pub pending: usize,
    pub rejected: usize,
}

/// Movements view counters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovementSummary {
    pub total: usize,
    pub inbound: usize,
    pub outbound: usize,
}

/// Movement paired with the product it references, when that product exists
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteMovement {
    pub movement: Movement,
    pub product: Option<Product>,
}

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub api_url: String,
    pub expiry_window_days: u32,
    pub http_timeout_secs: u64,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            api_url: "http://127.0.0.1:3000".to_string(),
            expiry_window_days: crate::analysis::EXPIRY_WINDOW_DAYS,
            http_timeout_secs: 10,
            log_file: "quantika.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Ok(Config {
            bind_addr: lookup("QUANTIKA_BIND_ADDR").unwrap_or(defaults.bind_addr),
            api_url: lookup("QUANTIKA_API_URL").unwrap_or(defaults.api_url),
            expiry_window_days: parse_var(
                "QUANTIKA_EXPIRY_WINDOW_DAYS",
                lookup("QUANTIKA_EXPIRY_WINDOW_DAYS"),
                defaults.expiry_window_days,
            )?,
            http_timeout_secs: parse_var(
                "QUANTIKA_HTTP_TIMEOUT_SECS",
                lookup("QUANTIKA_HTTP_TIMEOUT_SECS"),
                defaults.http_timeout_secs,
            )?,
            log_file: lookup("QUANTIKA_LOG_FILE").unwrap_or(defaults.log_file),
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> anyhow::Result<T> {
    match value {
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} must be a non-negative integer, got '{}'", key, v)),
        None => Ok(default),
    }
}
