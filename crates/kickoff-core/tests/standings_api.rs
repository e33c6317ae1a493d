//! End-to-end tests for `get_league_standings` against a mock API-Football.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use kickoff_core::config::FootballConfig;
use kickoff_core::tools::custom_tools;
use kickoff_core::tools::football_common::build_http_client;
use kickoff_core::tools::football_standings::{StandingsClient, StandingsOutcome, TeamStanding};
use kickoff_core::tools::ToolRegistry;

fn test_config(base_url: String) -> FootballConfig {
    FootballConfig {
        api_key: "test-key".into(),
        base_url,
        timeout_seconds: 5,
        ..Default::default()
    }
}

fn registry_for(server: &MockServer) -> ToolRegistry {
    let config = test_config(server.uri());
    custom_tools(&config, build_http_client(&config).unwrap())
}

fn args(league_name: &str, season: &str) -> HashMap<String, Value> {
    let mut args = HashMap::new();
    args.insert("league_name".to_string(), json!(league_name));
    args.insert("season".to_string(), json!(season));
    args
}

fn real_madrid_body() -> Value {
    json!({
        "get": "standings",
        "parameters": {"league": "140", "season": "2024"},
        "errors": [],
        "results": 1,
        "response": [{
            "league": {
                "id": 140,
                "name": "La Liga",
                "standings": [[{
                    "rank": 1,
                    "team": {"name": "Real Madrid"},
                    "points": 90,
                    "all": {"played": 38, "win": 29, "draw": 3, "lose": 6}
                }]]
            }
        }]
    })
}

#[tokio::test]
async fn test_la_liga_scenario() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("league", "140"))
        .and(query_param("season", "2024"))
        .and(header("x-rapidapi-key", "test-key"))
        .and(header("x-rapidapi-host", "v3.football.api-sports.io"))
        .respond_with(ResponseTemplate::new(200).set_body_json(real_madrid_body()))
        .expect(1)
        .mount(&server)
        .await;

    let result = registry_for(&server)
        .execute("get_league_standings", args("La Liga", "2024"))
        .await;

    let value: Value = serde_json::from_str(&result).unwrap();
    assert_eq!(
        value,
        json!([{
            "rank": 1,
            "team": "Real Madrid",
            "points": 90,
            "games_played": 38,
            "wins": 29,
            "draws": 3,
            "losses": 6
        }])
    );
}

#[tokio::test]
async fn test_unknown_league_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(real_madrid_body()))
        .expect(0)
        .mount(&server)
        .await;

    let result = registry_for(&server)
        .execute("get_league_standings", args("Unknown League", "2024"))
        .await;

    assert_eq!(
        result,
        r#"{"error":"Could not find a league with the name 'Unknown League'."}"#
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_league_name_is_case_insensitive() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("league", "39"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{"league": {"standings": [[{
                "rank": 1,
                "team": {"name": "Liverpool"},
                "points": 84,
                "all": {"played": 38, "win": 25, "draw": 9, "lose": 4}
            }]]}}]
        })))
        .expect(3)
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = StandingsClient::new(build_http_client(&config).unwrap(), config);
    for name in ["Premier League", "premier league", "PREMIER LEAGUE"] {
        let table = client.fetch(name, "2024").await.unwrap();
        assert_eq!(table[0].team, "Liverpool");
    }
}

#[tokio::test]
async fn test_returns_every_team_in_order() {
    let teams = ["Inter", "Napoli", "Atalanta", "Juventus", "Roma"];
    let rows: Vec<Value> = teams
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "rank": i + 1,
                "team": {"name": name},
                "points": 90 - (i as i32) * 5,
                "all": {"played": 38, "win": 28 - i, "draw": 6, "lose": 4 + i}
            })
        })
        .collect();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("league", "135"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{"league": {"standings": [rows]}}]
        })))
        .mount(&server)
        .await;

    let config = test_config(server.uri());
    let client = StandingsClient::new(build_http_client(&config).unwrap(), config);
    let outcome = client.get_league_standings("Serie A", "2023").await;

    let StandingsOutcome::Standings(table) = outcome else {
        panic!("expected standings, got {outcome:?}");
    };
    assert_eq!(table.len(), teams.len());
    assert_eq!(
        table.iter().map(|t| t.team.as_str()).collect::<Vec<_>>(),
        teams.to_vec()
    );
    assert_eq!(
        table[4],
        TeamStanding {
            rank: 5,
            team: "Roma".into(),
            points: 70,
            games_played: 38,
            wins: 24,
            draws: 6,
            losses: 8,
        }
    );
}

#[tokio::test]
async fn test_empty_response_reports_no_standings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "get": "standings",
            "errors": [],
            "results": 0,
            "response": []
        })))
        .mount(&server)
        .await;

    let result = registry_for(&server)
        .execute("get_league_standings", args("MLS", "1990"))
        .await;

    assert_eq!(
        result,
        r#"{"error":"No standings found for this league and season."}"#
    );
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = registry_for(&server)
        .execute("get_league_standings", args("Bundesliga", "2024"))
        .await;

    let value: Value = serde_json::from_str(&result).unwrap();
    let message = value["error"].as_str().unwrap();
    assert!(message.starts_with("API request failed"), "{message}");
    assert!(message.contains("500"), "{message}");
}

#[tokio::test]
async fn test_connection_refused_is_reported() {
    let config = test_config("http://127.0.0.1:1".into());
    let client = StandingsClient::new(build_http_client(&config).unwrap(), config);

    let outcome = client.get_league_standings("Ligue 1", "2024").await;
    let StandingsOutcome::Error { error } = outcome else {
        panic!("expected an error, got {outcome:?}");
    };
    assert!(error.contains("API request failed"), "{error}");
}

#[tokio::test]
async fn test_slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(real_madrid_body())
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = FootballConfig {
        timeout_seconds: 1,
        ..test_config(server.uri())
    };
    let client = StandingsClient::new(build_http_client(&config).unwrap(), config);

    let outcome = client.get_league_standings("La Liga", "2024").await;
    let StandingsOutcome::Error { error } = outcome else {
        panic!("expected an error, got {outcome:?}");
    };
    assert!(error.starts_with("API request failed"), "{error}");
}

#[tokio::test]
async fn test_malformed_body_does_not_panic() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": [{"league": {"standings": [[{"rank": 1, "points": 3}]]}}]
        })))
        .mount(&server)
        .await;

    let result = registry_for(&server)
        .execute("get_league_standings", args("Champions League", "2024"))
        .await;

    let value: Value = serde_json::from_str(&result).unwrap();
    assert!(value["error"]
        .as_str()
        .unwrap()
        .starts_with("Unexpected standings response"));
}

#[tokio::test]
async fn test_numeric_season_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("league", "2"))
        .and(query_param("season", "2022"))
        .respond_with(ResponseTemplate::new(200).set_body_json(real_madrid_body()))
        .expect(1)
        .mount(&server)
        .await;

    let mut call = HashMap::new();
    call.insert("league_name".to_string(), json!("champions league"));
    call.insert("season".to_string(), json!(2022));

    let result = registry_for(&server)
        .execute("get_league_standings", call)
        .await;
    assert!(result.starts_with('['), "{result}");
}

#[tokio::test]
async fn test_padded_league_name_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(real_madrid_body()))
        .expect(0)
        .mount(&server)
        .await;

    let result = registry_for(&server)
        .execute("get_league_standings", args(" premier league ", "2024"))
        .await;

    assert_eq!(
        result,
        r#"{"error":"Could not find a league with the name ' premier league '."}"#
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}
