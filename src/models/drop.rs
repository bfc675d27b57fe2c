use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardDrop — An upcoming product release on the drop calendar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDrop {
    pub id: String,
    pub product_name: String,
    pub release_date: DateTime<Utc>,
    pub description: String,
    pub manufacturer: String,
    pub image_url: String,
    pub preorder_url: Option<String>,
}
