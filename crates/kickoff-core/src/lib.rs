//! ⚽ kickoff-core: football league standings as a callable agent tool.
//!
//! - [`config`] — Typed configuration loading from JSON plus `API_FOOTBALL_KEY`
//! - [`tools`] — Tool trait, registry, and the `get_league_standings` tool
//!
//! # Quick Start
//!
//! ```no_run
//! use kickoff_core::config::Config;
//! use kickoff_core::tools::custom_tools;
//! use kickoff_core::tools::football_common::build_http_client;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let client = build_http_client(&config.football)?;
//! let tools = custom_tools(&config.football, client);
//!
//! let args = serde_json::from_str(r#"{"league_name": "La Liga", "season": "2024"}"#)?;
//! let table = tools.execute("get_league_standings", args).await;
//! println!("{table}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod tools;
