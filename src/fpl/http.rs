//! HTTP access to the FPL Draft API.
//!
//! Every endpoint is returned as raw JSON so the documents can be written to
//! the data directory exactly as the provider served them.

use reqwest::{header::ACCEPT, Client};
use serde_json::Value;
use tracing::debug;

use crate::{
    cli::types::{Gameweek, LeagueId, TeamId},
    Result,
};


/// Base path for the FPL Draft API.
pub const FPL_BASE_URL: &str = "https://draft.premierleague.com/api";

/// Thin client over the draft API endpoints the engine consumes.
#[derive(Debug, Clone)]
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl Default for FplClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FplClient {
    pub fn new() -> Self {
        Self::with_base_url(FPL_BASE_URL)
    }

    /// Point the client at another host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET `path` and decode the body as JSON.
    pub async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        debug!(%url, "fetching");

        let res = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(res)
    }

    pub async fn bootstrap_static(&self) -> Result<Value> {
        self.get_json("bootstrap-static").await
    }

    pub async fn game(&self) -> Result<Value> {
        self.get_json("game").await
    }

    pub async fn league_details(&self, league_id: LeagueId) -> Result<Value> {
        self.get_json(&format!("league/{}/details", league_id)).await
    }

    pub async fn live_gameweek(&self, gameweek: Gameweek) -> Result<Value> {
        self.get_json(&format!("event/{}/live", gameweek)).await
    }

    pub async fn entry_event(&self, team_id: TeamId, gameweek: Gameweek) -> Result<Value> {
        self.get_json(&format!("entry/{}/event/{}", team_id, gameweek))
            .await
    }
}
