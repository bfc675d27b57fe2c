use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BattleCard — Display fields for one side of a card battle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleCard {
    pub year: i32,
    pub set_name: String,
    pub card_number: String,
    pub driver_name: String,
    pub constructor_name: String,
    pub image_url: String,
}

// ---------------------------------------------------------------------------
// CardBattle — A head-to-head community vote between two cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardBattle {
    pub id: String,
    pub votes_card_one: u32,
    pub votes_card_two: u32,
    pub expires_at: DateTime<Utc>,
    pub is_expired: bool,
    pub card_one: BattleCard,
    pub card_two: BattleCard,
}

// ---------------------------------------------------------------------------
// VoteOutcome — Response to a submitted vote
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedVotes {
    pub votes_card_one: u32,
    pub votes_card_two: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteOutcome {
    pub message: String,
    pub updated_votes: UpdatedVotes,
}
