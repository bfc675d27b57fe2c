//! Collection (ownership) reads and mutations.

use crate::error::Result;
use crate::models::{AddToCollection, CollectionCard, RemoveFromCollection, UpdateCollection};
use crate::query_params::QueryParams;

/// Query interface for a user's card collection.
pub struct OwnershipClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> OwnershipClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    /// All ownership lines for a user, denormalized with card display fields.
    pub fn for_user(&self, user_id: &str) -> Result<Vec<CollectionCard>> {
        self.conn
            .get(&format!("/ownership/{user_id}"), &QueryParams::new())
    }

    /// Add copies of a card+parallel+condition combination.
    pub fn add(&self, request: &AddToCollection) -> Result<()> {
        self.conn.post_unit("/ownership", request)
    }

    /// Update quantity, condition, parallel or purchase details of a line.
    pub fn update(&self, request: &UpdateCollection) -> Result<()> {
        self.conn.put_unit("/ownership", request)
    }

    /// Subtract copies from a line; the server drops the record when the
    /// quantity reaches zero.
    pub fn remove(&self, request: &RemoveFromCollection) -> Result<()> {
        self.conn.delete_unit("/ownership", request)
    }
}
