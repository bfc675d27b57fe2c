//! Rarity-tracking (1/1) lookups.

use crate::error::Result;
use crate::models::OneOfOneCard;
use crate::query_params::QueryParams;

/// Optional filters for the 1/1 tracker endpoint.
#[derive(Debug, Clone, Default)]
pub struct OneOfOneCriteria {
    pub is_found: Option<bool>,
    pub set_name: Option<String>,
    pub driver_name: Option<String>,
}

/// Query interface for one-of-one tracking data.
pub struct OneOfOneClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> OneOfOneClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    /// Cards carrying 1/1 parallels, with community-reported found flags.
    pub fn by_criteria(&self, criteria: &OneOfOneCriteria) -> Result<Vec<OneOfOneCard>> {
        let mut params = QueryParams::new();
        params
            .set_opt("isFound", criteria.is_found)
            .set_opt("driverName", criteria.driver_name.as_deref())
            .set_opt("setName", criteria.set_name.as_deref());

        self.conn.get("/oneofones", &params)
    }
}
