pub mod memory;
pub mod model;
pub mod store;

/// Table names used by the hosted datastore, shared here so trait
/// implementations and migrations agree on them.
pub mod table_name {
    pub const USERS: &str = "users";
    pub const MATCHES: &str = "matches";
    pub const GAMES: &str = "games";
    pub const PLAYER_MATCH_STATS: &str = "player_match_stats";
}
