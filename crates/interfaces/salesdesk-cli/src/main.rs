use clap::{Parser, Subcommand};
use salesdesk_app_core::{Console, FavoriteChannel, FilePersistence};
use salesdesk_cli::commands::{self, SaleInput};
use salesdesk_cli::render::NameStyle;
use salesdesk_cli::{parse_amount, parse_date};
use salesdesk_core::RecordId;
use salesdesk_infra::{Credential, CredentialSource, EnvCredentials, StaticCredentials};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[arg(long, global = true, help = "Record service address (overrides settings)")]
    base_url: Option<String>,
    #[arg(long, global = true, env = "SALESDESK_USERNAME")]
    username: Option<String>,
    #[arg(long, global = true, env = "SALESDESK_PASSWORD", hide_env_values = true)]
    password: Option<String>,
    #[arg(long, global = true, help = "Print names in alternating case")]
    alternate_case: bool,
    #[arg(long, global = true, requires = "alternate_case")]
    lower_first: bool,
    #[arg(long, global = true, help = "Directory holding settings.json")]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with sales records
    Sales {
        #[command(subcommand)]
        command: SalesCommands,
    },
    /// Work with salespeople records
    Salespeople {
        #[command(subcommand)]
        command: SalespeopleCommands,
    },
    /// Open a console path: `sales`, `salespeople` or `salesperson/{id}`
    Open { route: String },
    /// Offline walk-through with the built-in staff list
    Demo,
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Args)]
struct SaleArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long, value_parser = parse_date)]
    date: String,
    #[arg(long, value_parser = parse_amount)]
    total: f64,
    #[arg(long)]
    salesperson: RecordId,
}

impl From<SaleArgs> for SaleInput {
    fn from(args: SaleArgs) -> Self {
        SaleInput {
            customer_first_name: args.first_name,
            customer_last_name: args.last_name,
            date: args.date,
            total: args.total,
            salesperson_id: args.salesperson,
        }
    }
}

#[derive(Subcommand)]
enum SalesCommands {
    List {
        #[arg(long)]
        json: bool,
    },
    Add {
        #[command(flatten)]
        sale: SaleArgs,
    },
    Update {
        id: RecordId,
        #[command(flatten)]
        sale: SaleArgs,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Subcommand)]
enum SalespeopleCommands {
    List {
        #[arg(long)]
        json: bool,
    },
    Delete {
        id: RecordId,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    Show,
    /// Store `--base-url` and/or the request timeout
    Set {
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let persistence = match &cli.config_dir {
        Some(dir) => FilePersistence::in_dir(dir),
        None => FilePersistence::new(),
    };
    let style = NameStyle {
        alternate: cli.alternate_case,
        lower_first: cli.lower_first,
    };

    let credentials: Arc<dyn CredentialSource> = match (cli.username, cli.password) {
        (Some(username), Some(password)) => {
            Arc::new(StaticCredentials::new(Credential::new(username, password)))
        }
        (Some(_), None) => anyhow::bail!("--username needs --password"),
        (None, _) => Arc::new(EnvCredentials::default()),
    };

    let connect = || -> anyhow::Result<Console> {
        let settings = persistence.load_settings()?;
        let console = match &cli.base_url {
            Some(url) => Console::connect(url, settings.request_timeout(), credentials.clone())?,
            None => Console::from_settings(&settings, credentials.clone())?,
        };
        Ok(console)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sales { command } => {
            let console = connect()?;
            match command {
                SalesCommands::List { json } => {
                    commands::cmd_list_sales(&console, style, json, &mut out).await?
                }
                SalesCommands::Add { sale } => {
                    commands::cmd_add_sale(&console, sale.into(), style, &mut out).await?
                }
                SalesCommands::Update { id, sale } => {
                    commands::cmd_update_sale(&console, id, sale.into(), style, &mut out).await?
                }
                SalesCommands::Delete { id } => {
                    commands::cmd_delete_sale(&console, id, style, &mut out).await?
                }
            }
        }
        Commands::Salespeople { command } => {
            let console = connect()?;
            match command {
                SalespeopleCommands::List { json } => {
                    commands::cmd_list_salespeople(&console, style, json, &mut out).await?
                }
                SalespeopleCommands::Delete { id } => {
                    commands::cmd_delete_salesperson(&console, id, style, &mut out).await?
                }
            }
        }
        Commands::Open { route } => {
            let console = connect()?;
            commands::cmd_open(&console, &route, style, &mut out).await?;
        }
        Commands::Demo => {
            let favorites = FavoriteChannel::new();
            commands::cmd_demo(&favorites, style, &mut out).await?;
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::cmd_config_show(&persistence, &mut out)?,
            ConfigCommands::Set { timeout_secs } => {
                let settings =
                    commands::cmd_config_set(&persistence, cli.base_url.clone(), timeout_secs)?;
                writeln!(
                    out,
                    ":: Saved base URL {} with a {}s timeout",
                    settings.base_url, settings.request_timeout_secs
                )?;
            }
        },
    }

    Ok(())
}
