//! Catalog card lookups.

use crate::error::Result;
use crate::models::Card;
use crate::query_params::QueryParams;

// ---------------------------------------------------------------------------
// CardCriteria
// ---------------------------------------------------------------------------

/// Optional catalog filters. When `None`, the corresponding query parameter
/// is omitted and the server skips that filter.
#[derive(Debug, Clone, Default)]
pub struct CardCriteria {
    pub year: Option<i32>,
    pub set_name: Option<String>,
    pub driver_name: Option<String>,
    pub constructor_name: Option<String>,
    pub card_number: Option<String>,
}

// ---------------------------------------------------------------------------
// CardClient
// ---------------------------------------------------------------------------

/// Query interface for the card catalog.
pub struct CardClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> CardClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    /// Fetch catalog cards matching the given criteria.
    pub fn by_criteria(&self, criteria: &CardCriteria) -> Result<Vec<Card>> {
        let mut params = QueryParams::new();
        params
            .set_opt("year", criteria.year)
            .set_opt("setName", criteria.set_name.as_deref())
            .set_opt("driverName", criteria.driver_name.as_deref())
            .set_opt("constructorName", criteria.constructor_name.as_deref())
            .set_opt("cardNumber", criteria.card_number.as_deref());

        self.conn.get("/cards", &params)
    }

    /// Fetch a single catalog card by id.
    pub fn by_id(&self, card_id: &str) -> Result<Card> {
        self.conn
            .get(&format!("/card/{card_id}"), &QueryParams::new())
    }
}
