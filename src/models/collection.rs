use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CollectionCard — Denormalized ownership line (card fields + ownership fields)
// ---------------------------------------------------------------------------

/// One line of a user's inventory: a card + parallel + condition combination.
///
/// The API flattens the card's display fields into the record, so no catalog
/// join is needed to render a collection row. `parallel` of `None` means the
/// base printing. At most one record exists per
/// `(user, card, parallel, condition)`; a quantity of zero means the record
/// should have been deleted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCard {
    pub id: String,
    pub year: i32,
    pub set_name: String,
    pub card_number: String,
    pub driver_name: String,
    pub constructor_name: String,
    pub rookie_card: bool,
    pub parallel: Option<String>,
    pub image_url: String,

    pub quantity: u32,
    pub condition: String,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// GrailCard — Denormalized grail-list (wishlist) line
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrailCard {
    pub id: String,
    pub year: i32,
    pub set_name: String,
    pub card_number: String,
    pub driver_name: String,
    pub constructor_name: String,
    pub rookie_card: bool,
    pub parallel: Option<String>,
    pub print_run: Option<u32>,
    pub image_url: String,

    pub notify_on_available: bool,
}

// ---------------------------------------------------------------------------
// CardCondition — Grading options accepted by the ownership endpoints
// ---------------------------------------------------------------------------

/// Wire values for card condition, covering raw and graded (PSA/BGS/SGC) slabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardCondition {
    #[serde(rename = "Raw")]
    Raw,
    #[serde(rename = "Excellent")]
    Excellent,
    #[serde(rename = "Near Mint")]
    NearMint,
    #[serde(rename = "Mint")]
    Mint,
    #[serde(rename = "PSA 10")]
    Psa10,
    #[serde(rename = "PSA 9")]
    Psa9,
    #[serde(rename = "PSA 8")]
    Psa8,
    #[serde(rename = "PSA 7")]
    Psa7,
    #[serde(rename = "PSA 6")]
    Psa6,
    #[serde(rename = "BGS 10")]
    Bgs10,
    #[serde(rename = "BGS 9.5")]
    Bgs95,
    #[serde(rename = "BGS 9")]
    Bgs9,
    #[serde(rename = "BGS 8.5")]
    Bgs85,
    #[serde(rename = "BGS 8")]
    Bgs8,
    #[serde(rename = "BGS 7.5")]
    Bgs75,
    #[serde(rename = "BGS 7")]
    Bgs7,
    #[serde(rename = "SGC 10")]
    Sgc10,
    #[serde(rename = "SGC 9.5")]
    Sgc95,
    #[serde(rename = "SGC 9")]
    Sgc9,
    #[serde(rename = "SGC 8.5")]
    Sgc85,
    #[serde(rename = "SGC 8")]
    Sgc8,
    #[serde(rename = "SGC 7.5")]
    Sgc75,
    #[serde(rename = "SGC 7")]
    Sgc7,
    #[serde(rename = "Other")]
    Other,
}
