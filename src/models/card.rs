use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Parallel — A named print variant of a base card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parallel {
    /// Canonical parallel name, e.g. "Superfractor", "Gold", "Red Wave Refractor".
    /// Ownership, grail and price records reference this name verbatim.
    pub name: String,
    /// Total copies printed. Absent for unnumbered/multi-colored short prints.
    pub print_run: Option<u32>,
    pub is_one_of_one: Option<bool>,
    pub image_url: Option<String>,
}

// ---------------------------------------------------------------------------
// EnabledParallel — A parallel viewed through the 1/1 tracker
// ---------------------------------------------------------------------------

/// A parallel as returned by the rarity-tracking endpoint, carrying the
/// community-reported "found" flag. The flag is global, not per-user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnabledParallel {
    pub name: String,
    pub image_url: Option<String>,
    pub is_one_of_one: Option<bool>,
    pub is_one_of_one_found: Option<bool>,
}

// ---------------------------------------------------------------------------
// Card — The primary catalog model (base card + its parallels)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub year: i32,
    pub set_name: String,
    /// Heterogeneous format: "44", "1954-11", "TT-5" or free-form.
    pub card_number: String,
    pub driver_name: String,
    pub constructor_name: String,
    pub subset: Option<String>,
    pub rookie_card: bool,
    pub has_one_of_one: bool,
    pub base_image_url: String,
    #[serde(default)]
    pub parallels: Vec<Parallel>,
}

// ---------------------------------------------------------------------------
// OneOfOneCard — Catalog card as returned by the 1/1 tracker endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneOfOneCard {
    pub id: String,
    pub year: i32,
    pub set_name: String,
    pub card_number: String,
    pub driver_name: String,
    pub constructor_name: String,
    pub rookie_card: bool,
    #[serde(default)]
    pub parallels: Vec<EnabledParallel>,
}
