//! ⚽ kickoff CLI — run the standings tool from a terminal.
//!
//! Usage:
//!   kickoff standings "La Liga" 2024   — Fetch a league table
//!   kickoff leagues                    — List supported leagues
//!   kickoff tools                      — Print tool definitions (JSON)
//!   kickoff onboard                    — Create a default configuration
//!   kickoff status                     — Show current configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use kickoff_core::config::{Config, API_KEY_ENV};
use kickoff_core::tools::football_common::build_http_client;
use kickoff_core::tools::football_leagues::supported_leagues;
use kickoff_core::tools::{custom_tools, ToolRegistry};

const STANDINGS_TOOL: &str = "get_league_standings";

#[derive(Parser)]
#[command(
    name = "kickoff",
    version,
    about = "Football league standings for AI agents",
    long_about = "⚽ kickoff — league tables from API-Football, shaped for LLM tool calls."
)]
struct Cli {
    /// Config file (default: ~/.kickoff/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the standings for a league and season
    Standings {
        /// League name, e.g. "Premier League"
        league: String,
        /// Season year, e.g. 2024
        season: String,
    },

    /// List the leagues the standings tool understands
    Leagues,

    /// Print the tool definitions handed to the agent
    Tools,

    /// Create or reset the default configuration
    Onboard,

    /// Show configuration status
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);

    match cli.command {
        Commands::Standings { league, season } => {
            cmd_standings(cli.config.as_deref(), league, season).await?
        }
        Commands::Leagues => cmd_leagues(),
        Commands::Tools => cmd_tools(cli.config.as_deref())?,
        Commands::Onboard => cmd_onboard(&config_path)?,
        Commands::Status => cmd_status(cli.config.as_deref(), &config_path)?,
    }

    Ok(())
}

// ── Shared Setup ────────────────────────────────────────────────────

/// `--config` must point at an existing file; without it the default
/// location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn setup_tools(config: &Config) -> Result<ToolRegistry> {
    if !config.football.has_api_key() {
        warn!(
            "No API-Football key configured; set {} or football.apiKey in config.json",
            API_KEY_ENV
        );
    }

    let client = build_http_client(&config.football)?;
    Ok(custom_tools(&config.football, client))
}

// ── Commands ────────────────────────────────────────────────────────

async fn cmd_standings(config_path: Option<&Path>, league: String, season: String) -> Result<()> {
    let config = load_config(config_path)?;
    let tools = setup_tools(&config)?;
    let tool = tools
        .get(STANDINGS_TOOL)
        .ok_or_else(|| anyhow::anyhow!("Tool '{}' is not registered", STANDINGS_TOOL))?;

    let mut args = HashMap::new();
    args.insert("league_name".to_string(), serde_json::Value::String(league));
    args.insert("season".to_string(), serde_json::Value::String(season));

    let output = tool.execute(args).await;

    // Pretty-print when the tool handed back JSON.
    match serde_json::from_str::<serde_json::Value>(&output) {
        Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Err(_) => println!("{output}"),
    }
    Ok(())
}

fn cmd_leagues() {
    println!();
    println!("  ⚽ Supported leagues");
    println!("  ─────────────────────────────────────");
    for (name, id) in supported_leagues() {
        println!("  {:<20} {:>4}", name, id);
    }
    println!();
}

fn cmd_tools(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let tools = setup_tools(&config)?;
    println!("{}", serde_json::to_string_pretty(&tools.definitions())?);
    Ok(())
}

fn cmd_onboard(config_path: &Path) -> Result<()> {
    Config::write_default_template(config_path)?;
    println!();
    println!("  ✅ Wrote config template to {}", config_path.display());
    println!("  Edit football.apiKey, or export {}.", API_KEY_ENV);
    println!();
    Ok(())
}

fn cmd_status(config_override: Option<&Path>, config_path: &Path) -> Result<()> {
    let config = load_config(config_override)?;
    let key_state = if config.football.has_api_key() {
        "✅ set"
    } else {
        "❌ missing"
    };

    println!();
    println!("  ⚽ kickoff v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "  Config:   {} {}",
        config_path.display(),
        if config_path.exists() { "" } else { "(not found, using defaults)" }
    );
    println!("  API key:  {}", key_state);
    println!("  Base URL: {}", config.football.base_url);
    println!("  Timeout:  {}s", config.football.timeout_seconds);
    println!("  Leagues:  {}", supported_leagues().len());
    println!();
    Ok(())
}
