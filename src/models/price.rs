use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MarketPriceSnapshot — One observed price point for a (card, parallel)
// ---------------------------------------------------------------------------

/// A single aggregated market observation. Snapshots are append-only: the
/// service never mutates an existing point, only adds newer ones.
///
/// Invariant (owned by the service): `lowest_price <= average_price <=
/// highest_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPriceSnapshot {
    pub timestamp: DateTime<Utc>,
    pub lowest_price: f64,
    pub average_price: f64,
    pub highest_price: f64,
    pub source: String,
    /// Parallel this observation belongs to. `None` means the base printing.
    pub parallel: Option<String>,
}

// ---------------------------------------------------------------------------
// MarketPrice — Price history retrieved per card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub card_id: String,
    #[serde(default)]
    pub history: Vec<MarketPriceSnapshot>,
}
