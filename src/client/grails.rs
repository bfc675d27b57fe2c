//! Grail list (wishlist) reads and mutations.
//!
//! The grail endpoints return the user's updated list after every mutation,
//! so the surrounding application can replace its state without a refetch.

use crate::error::Result;
use crate::models::{AddGrail, GrailCard, RemoveGrail, UpdateGrail};
use crate::query_params::QueryParams;

/// Query interface for a user's grail list.
pub struct GrailClient<'a> {
    conn: &'a crate::connection::ApiConnection,
}

impl<'a> GrailClient<'a> {
    pub fn new(conn: &'a crate::connection::ApiConnection) -> Self {
        Self { conn }
    }

    pub fn for_user(&self, user_id: &str) -> Result<Vec<GrailCard>> {
        self.conn
            .get(&format!("/grails/{user_id}"), &QueryParams::new())
    }

    pub fn add(&self, request: &AddGrail) -> Result<Vec<GrailCard>> {
        self.conn.post("/grails", request)
    }

    pub fn update(&self, request: &UpdateGrail) -> Result<Vec<GrailCard>> {
        self.conn.put("/grails", request)
    }

    pub fn remove(&self, request: &RemoveGrail) -> Result<Vec<GrailCard>> {
        self.conn.delete("/grails", request)
    }
}
