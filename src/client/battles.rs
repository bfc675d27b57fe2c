//! Card battle lookups and voting.

use crate::error::Result;
use crate::models::{BattleVote, CardBattle, VoteOutcome};
use crate::query_params::QueryParams;

/// Query interface for community card battles.
pub struct BattleClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> BattleClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    /// Battles currently open for voting.
    pub fn active(&self) -> Result<Vec<CardBattle>> {
        self.conn.get("/battles/active", &QueryParams::new())
    }

    /// Expired battles with their final tallies.
    pub fn previous(&self) -> Result<Vec<CardBattle>> {
        self.conn.get("/battles/previous", &QueryParams::new())
    }

    /// Cast a vote, returning the updated tallies.
    pub fn vote(&self, vote: &BattleVote) -> Result<VoteOutcome> {
        self.conn.post("/battles/vote", vote)
    }
}
