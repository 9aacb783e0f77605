use anyhow::Result;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use quantika::api::InventoryClient;
use quantika::filters::{CategorySelector, MovementTypeSelector, ProductFilter, QualitySelector};
use quantika::logging;
use quantika::models::Config;
use quantika::report::{build_report, ReportKind, ReportOptions};
use quantika::server;
use quantika::store::Stores;
use quantika::ui::{run_app, InventoryApp, Tab};

/// Chemical warehouse inventory and quality-control dashboard
#[derive(Parser)]
#[command(name = "quantika")]
#[command(version)]
#[command(about = "Inventory, quality control and stock movements for a chemical warehouse")]
#[command(long_about = "
Serves the inventory API and browses it from a terminal dashboard.

Examples:
  quantika serve                          # API on QUANTIKA_BIND_ADDR
  quantika tui                            # dashboard against QUANTIKA_API_URL
  quantika tui --offline                  # dashboard over the built-in records
  quantika report movimentacoes --tipo saida
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve /api/produtos, /api/movimentacoes and /api/usuarios
    Serve {
        /// Address to listen on (overrides QUANTIKA_BIND_ADDR)
        #[arg(long, short = 'b')]
        bind: Option<String>,
    },
    /// Open the terminal dashboard
    Tui {
        /// Tab to open first: dashboard, produtos, qualidade, movimentacoes, usuarios or configuracoes
        #[arg(long, default_value = "dashboard")]
        tab: String,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print one of the views as plain text
    Report {
        #[arg(value_enum)]
        kind: ReportKind,

        /// Text matched against name, category and supplier
        #[arg(long, short = 's', default_value = "")]
        search: String,

        /// Product category, or "all"
        #[arg(long, short = 'c', default_value = "all")]
        category: CategorySelector,

        /// Movement type: all, entrada or saida
        #[arg(long, short = 't', default_value = "all")]
        tipo: MovementTypeSelector,

        /// Quality status: all, pendente, aprovado or reprovado
        #[arg(long, default_value = "all")]
        status: QualitySelector,

        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Inventory API base URL (overrides QUANTIKA_API_URL)
    #[arg(long, short = 'u')]
    api_url: Option<String>,

    /// Use the built-in records instead of the HTTP API
    #[arg(long, conflicts_with = "api_url")]
    offline: bool,
}

impl SourceArgs {
    fn stores(&self, config: &Config) -> Result<Stores> {
        if self.offline {
            info!("Using built-in inventory records");
            return Ok(Stores::in_memory());
        }

        let mut config = config.clone();
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        let client = InventoryClient::from_config(&config)?;
        info!("Using inventory API at {}", client.base_url());
        Ok(Stores::from_source(client))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration Error: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Command::Serve { bind } => {
            logging::init_stderr()?;
            let addr = bind.unwrap_or_else(|| config.bind_addr.clone());
            server::start_server(&addr, Stores::in_memory()).await?;
        }
        Command::Tui { tab, source } => {
            logging::init_file(&config.log_file)?;
            let stores = source.stores(&config)?;
            let app = InventoryApp::new(stores, config.expiry_window_days).starting_at(Tab::from_id(&tab));
            if let Err(e) = run_app(app).await {
                error!("Dashboard exited with error: {}", e);
                return Err(e);
            }
        }
        Command::Report {
            kind,
            search,
            category,
            tipo,
            status,
            source,
        } => {
            logging::init_stderr()?;
            let stores = source.stores(&config)?;
            let options = ReportOptions {
                product_filter: ProductFilter { search, category },
                movement_type: tipo,
                quality: status,
                today: Local::now().date_naive(),
                expiry_window_days: config.expiry_window_days,
            };
            for line in build_report(kind, &stores, &options).await? {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
