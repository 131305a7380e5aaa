//! Paths of the Veikkaus API, relative to the configured base URL.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
}

impl Endpoint {
    fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The part of the url that comes after the base url.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path)
    }

    pub fn login() -> Self {
        Self::new("bff/v1/sessions")
    }

    pub fn account_info() -> Self {
        Self::new("v1/players/self/account")
    }

    pub fn account_transactions() -> Self {
        Self::new("v1/players/self/account/transactions")
    }

    pub fn draws() -> Self {
        Self::new("odj/v2/sport-games/draws")
    }

    pub fn single_draw(draw_id: &str) -> Self {
        Self::new(format!("odj/v2/sport-games/draws/{draw_id}"))
    }

    pub fn single_event(event_id: &str) -> Self {
        Self::new(format!("v1/sports/events/{event_id}"))
    }

    /// Validates a wager without placing it.
    pub fn wager_check() -> Self {
        Self::new("v1/sport-games/wagers/check")
    }

    pub fn wager() -> Self {
        Self::new("v1/sport-games/wagers")
    }

    pub fn sport_types() -> Self {
        Self::new("v1/sports")
    }

    pub fn sport_categories(sport_id: u32) -> Self {
        Self::new(format!("v1/sports/{sport_id}"))
    }

    pub fn sport_tournaments(sport_id: u32, category_id: u32) -> Self {
        Self::new(format!("v1/sports/{sport_id}/categories/{category_id}"))
    }

    pub fn sport_tournament_info(sport_id: u32, category_id: u32, tournament_id: u32) -> Self {
        Self::new(format!(
            "v1/sports/{sport_id}/categories/{category_id}/tournaments/{tournament_id}"
        ))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
