//! Release-calendar (card drop) lookups.

use crate::error::Result;
use crate::models::CardDrop;
use crate::query_params::QueryParams;

/// Query interface for upcoming product drops.
pub struct DropClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> DropClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    pub fn all(&self) -> Result<Vec<CardDrop>> {
        self.conn.get("/drops", &QueryParams::new())
    }

    pub fn by_id(&self, drop_id: &str) -> Result<CardDrop> {
        self.conn
            .get(&format!("/drops/{drop_id}"), &QueryParams::new())
    }
}
