//! Thin HTTP wrappers over the Formula Cardz API, one per domain.
//!
//! Each wrapper borrows the shared [`ApiConnection`](crate::connection::ApiConnection)
//! and translates method calls into endpoint requests. No derivation happens
//! here; fetched records are handed to [`engine`](crate::engine) functions
//! (or the embedding application) as-is.

pub mod battles;
pub mod cards;
pub mod dropdowns;
pub mod drops;
pub mod grails;
pub mod one_of_ones;
pub mod ownership;
pub mod prices;
