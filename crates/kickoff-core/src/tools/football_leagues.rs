//! League name → API-Football league ID lookup.

/// Leagues the standings tool knows about, keyed by lowercase name.
const LEAGUES: &[(&str, u32)] = &[
    ("premier league", 39),
    ("la liga", 140),
    ("bundesliga", 78),
    ("serie a", 135),
    ("ligue 1", 61),
    ("mls", 253),
    ("champions league", 2),
];

/// Resolve a league name (case-insensitive) to its provider ID.
///
/// Returns `None` for unknown names; callers turn that into a user-facing
/// error.
pub fn resolve_league_id(league_name: &str) -> Option<u32> {
    let key = league_name.to_lowercase();
    LEAGUES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, id)| *id)
}

/// All supported leagues as `(name, id)` pairs, in registry order.
pub fn supported_leagues() -> &'static [(&'static str, u32)] {
    LEAGUES
}
