//! League standings via API-Football.
//!
//! `StandingsClient` resolves the league, issues a single
//! `GET /standings?league=<id>&season=<season>` and flattens the first
//! standings group into [`TeamStanding`] records. `LeagueStandingsTool`
//! exposes it to the agent as `get_league_standings`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::{debug, error, warn};

use super::football_common::{endpoint_url, API_HOST_HEADER, API_KEY_HEADER, STANDINGS_PATH};
use super::football_leagues::{resolve_league_id, supported_leagues};
use super::Tool;
use crate::config::FootballConfig;

// ── Output Types ───────────────────────────────────────────────────

/// One team's row in a league table, as handed to the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub rank: u32,
    pub team: String,
    pub points: i32,
    pub games_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

/// Everything that can stop a standings lookup.
///
/// The `Display` text is what the agent sees in the `error` field.
#[derive(Debug, thiserror::Error)]
pub enum StandingsError {
    #[error("Could not find a league with the name '{0}'.")]
    UnknownLeague(String),

    #[error("'{0}' parameter is required")]
    MissingArgument(&'static str),

    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("No standings found for this league and season.")]
    NoStandings,

    #[error("Unexpected standings response: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),
}

/// Tool result: either the table or a single `{"error": ...}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StandingsOutcome {
    Standings(Vec<TeamStanding>),
    Error { error: String },
}

impl StandingsOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Serialize for the agent.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            error!(error = %e, "Failed to serialize standings outcome");
            json!({ "error": e.to_string() }).to_string()
        })
    }
}

impl From<StandingsError> for StandingsOutcome {
    fn from(e: StandingsError) -> Self {
        Self::Error {
            error: e.to_string(),
        }
    }
}

impl From<Result<Vec<TeamStanding>, StandingsError>> for StandingsOutcome {
    fn from(result: Result<Vec<TeamStanding>, StandingsError>) -> Self {
        match result {
            Ok(table) => Self::Standings(table),
            Err(e) => e.into(),
        }
    }
}

// ── Provider Payload ───────────────────────────────────────────────

/// Query string for `GET /standings`.
#[derive(Debug, Serialize)]
struct StandingsQuery<'a> {
    league: u32,
    season: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    /// `[]` when fine, an object of messages when the provider refuses.
    #[serde(default)]
    errors: Value,
    #[serde(default)]
    response: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct LeagueEntry {
    league: LeagueBlock,
}

#[derive(Debug, Deserialize)]
struct LeagueBlock {
    /// One group per table (overall, conference, cup group, ...).
    #[serde(default)]
    standings: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct ApiStanding {
    rank: u32,
    team: ApiTeam,
    points: i32,
    all: ApiRecord,
}

#[derive(Debug, Deserialize)]
struct ApiTeam {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiRecord {
    played: u32,
    win: u32,
    draw: u32,
    lose: u32,
}

impl From<ApiStanding> for TeamStanding {
    fn from(s: ApiStanding) -> Self {
        Self {
            rank: s.rank,
            team: s.team.name,
            points: s.points,
            games_played: s.all.played,
            wins: s.all.win,
            draws: s.all.draw,
            losses: s.all.lose,
        }
    }
}

fn has_provider_errors(errors: &Value) -> bool {
    match errors {
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Null => false,
        _ => true,
    }
}

/// Flatten a `/standings` response body into the first group's table.
///
/// Only `response[0].league.standings[0]` is used; further groups are
/// dropped.
pub fn parse_standings(body: &str) -> Result<Vec<TeamStanding>, StandingsError> {
    let envelope: ApiEnvelope = serde_json::from_str(body)?;

    if has_provider_errors(&envelope.errors) {
        warn!(errors = %envelope.errors, "Standings API reported errors");
    }

    let Some(first) = envelope.response.unwrap_or_default().into_iter().next() else {
        return Err(StandingsError::NoStandings);
    };

    let entry: LeagueEntry = serde_json::from_value(first)?;
    let Some(group) = entry.league.standings.unwrap_or_default().into_iter().next() else {
        return Err(StandingsError::NoStandings);
    };

    let rows: Vec<ApiStanding> = serde_json::from_value(group)?;
    if rows.is_empty() {
        return Err(StandingsError::NoStandings);
    }

    Ok(rows.into_iter().map(TeamStanding::from).collect())
}

// ── StandingsClient ────────────────────────────────────────────────

/// Fetches league tables from API-Football.
///
/// Holds its own copy of the provider settings; nothing is read from the
/// environment at call time.
#[derive(Clone)]
pub struct StandingsClient {
    client: Client,
    config: FootballConfig,
}

impl StandingsClient {
    pub fn new(client: Client, config: FootballConfig) -> Self {
        Self { client, config }
    }

    /// Fetch the table for `league_name` in `season`.
    ///
    /// Unknown leagues fail before any request is made. The request is
    /// attempted exactly once.
    pub async fn fetch(
        &self,
        league_name: &str,
        season: &str,
    ) -> Result<Vec<TeamStanding>, StandingsError> {
        let league_id = resolve_league_id(league_name)
            .ok_or_else(|| StandingsError::UnknownLeague(league_name.to_string()))?;

        let url = endpoint_url(&self.config.base_url, STANDINGS_PATH);
        debug!(league = league_name, league_id, season, %url, "Fetching league standings");

        let body = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(API_HOST_HEADER, &self.config.api_host)
            .query(&StandingsQuery {
                league: league_id,
                season,
            })
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| {
                warn!(league_id, season, error = %e, "Standings request failed");
                StandingsError::Request(e)
            })?
            .text()
            .await?;

        let table = parse_standings(&body)?;
        debug!(league_id, season, teams = table.len(), "Parsed league standings");
        Ok(table)
    }

    /// Same as [`fetch`](Self::fetch), folded into the tool's result value.
    pub async fn get_league_standings(&self, league_name: &str, season: &str) -> StandingsOutcome {
        self.fetch(league_name, season).await.into()
    }
}

// ── LeagueStandingsTool ────────────────────────────────────────────

const DESCRIPTION: &str = "Retrieves the current standings for a specified football league and season. \
     This is useful for getting the rank, team name, points, and other stats for all teams in a league. \
     Arguments: league_name is the name of the football league (e.g. \"Premier League\"); \
     season is the year of the season (e.g. \"2024\"). \
     Returns a list of team standings in rank order, each with rank, team, points, games_played, \
     wins, draws and losses, or an object with an 'error' field if the league is unknown, \
     the request fails, or no standings exist for that season.";

/// Agent tool wrapping [`StandingsClient`].
pub struct LeagueStandingsTool {
    client: StandingsClient,
}

impl LeagueStandingsTool {
    pub fn new(client: StandingsClient) -> Self {
        Self { client }
    }
}

/// Seasons arrive as strings or, from some models, as bare numbers.
fn season_arg(args: &HashMap<String, Value>) -> Option<String> {
    match args.get("season")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl Tool for LeagueStandingsTool {
    fn name(&self) -> &str {
        "get_league_standings"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters(&self) -> Value {
        let leagues = supported_leagues()
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");

        json!({
            "type": "object",
            "properties": {
                "league_name": {
                    "type": "string",
                    "description": format!(
                        "The name of the football league (e.g., \"Premier League\"). Supported: {leagues}"
                    )
                },
                "season": {
                    "type": "string",
                    "description": "The year of the season (e.g., \"2024\")"
                }
            },
            "required": ["league_name", "season"]
        })
    }

    async fn execute(&self, args: HashMap<String, Value>) -> String {
        let Some(league_name) = args.get("league_name").and_then(|v| v.as_str()) else {
            return StandingsOutcome::from(StandingsError::MissingArgument("league_name"))
                .to_json();
        };
        let Some(season) = season_arg(&args) else {
            return StandingsOutcome::from(StandingsError::MissingArgument("season"))
                .to_json();
        };

        self.client
            .get_league_standings(league_name, &season)
            .await
            .to_json()
    }
}
