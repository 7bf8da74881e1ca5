//! CLI entry and dispatch.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing::debug;
use watertap_core::api::WaterTapClient;
use watertap_core::config::Config;
use watertap_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "watertap")]
#[command(version)]
#[command(about = "WaterTap water usage client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server base URL (overrides the config file)
    #[arg(long, global = true, env = "WATERTAP_BASE_URL", value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and report the session state
    Login {
        #[arg(long)]
        email: String,

        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Print the session token on success
        #[arg(long)]
        print_token: bool,
    },

    /// Create an account
    Signup {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in and show one day of water usage
    Usage {
        #[arg(long)]
        email: String,

        /// Password (read from stdin when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Day to show, YYYY-MM-DD (default: today)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Replay navigation steps (link1, link2, back) and print the stack
    Nav {
        #[arg(value_name = "STEP")]
        steps: Vec<String>,
    },

    /// Interactive line-driven session
    Shell,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a default config file
    Init,
    /// Store the server base URL
    SetBaseUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config maintenance must work even when the file is broken.
    if let Commands::Config { command } = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetBaseUrl { url } => commands::config::set_base_url(url),
        };
    }

    let config = Config::load().context("load config")?;
    let _log_guard = logging::init(&config).context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli, &config).await })
}

fn client(config: &Config, base_url: Option<&str>) -> Result<WaterTapClient> {
    let base_url = base_url.unwrap_or_else(|| config.effective_base_url());
    debug!(%base_url, "using server");
    WaterTapClient::new(base_url, config.request_timeout()).context("create API client")
}

async fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let Cli { command, base_url } = cli;

    match command {
        Commands::Login {
            email,
            password,
            print_token,
        } => {
            let client = client(config, base_url.as_deref())?;
            commands::auth::login(client, email, password, print_token).await
        }
        Commands::Signup {
            name,
            email,
            password,
        } => {
            let client = client(config, base_url.as_deref())?;
            commands::signup::run(client, name, email, password).await
        }
        Commands::Usage {
            email,
            password,
            date,
        } => {
            let client = client(config, base_url.as_deref())?;
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            commands::usage::run(client, email, password, date).await
        }
        Commands::Nav { steps } => commands::nav::run(&steps),
        Commands::Shell => {
            let client = client(config, base_url.as_deref())?;
            commands::shell::run(client).await
        }
        // handled in `run` before the config is loaded
        Commands::Config { .. } => Ok(()),
    }
}
