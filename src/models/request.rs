//! Request bodies for the mutating endpoints (ownership, grails, battles).
//!
//! The parallel field is omitted when the record refers to the base printing.
//! Update requests carry `old_parallel` so the server can re-key a record
//! when the user corrects which parallel they own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Ownership requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCollection {
    pub user_id: String,
    pub card_id: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    pub condition: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollection {
    pub user_id: String,
    pub card_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_parallel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCollection {
    pub user_id: String,
    pub card_id: String,
    pub quantity_to_subtract: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<String>,
    pub condition: String,
}

// ---------------------------------------------------------------------------
// Grail requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGrail {
    pub user_id: String,
    pub card_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<String>,
    pub notify_on_available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGrail {
    pub user_id: String,
    pub card_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_parallel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_on_available: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveGrail {
    pub user_id: String,
    pub card_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<String>,
}

// ---------------------------------------------------------------------------
// Battle requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleVote {
    pub battle_id: String,
    pub user_id: String,
    pub chosen_card_id: String,
}
