//! Formula Cardz SDK for Rust.
//!
//! Provides a high-level client for the Formula Cardz API (F1 trading-card
//! catalog, collections, grail lists, market prices, 1/1 tracking, battles
//! and release drops) plus a pure [`engine`] module that reconciles and
//! aggregates the fetched records into display-ready views.
//!
//! # Quick start
//!
//! ```no_run
//! use formula_cardz_sdk::client::cards::CardCriteria;
//! use formula_cardz_sdk::FormulaCardzSdk;
//!
//! let sdk = FormulaCardzSdk::builder().build().unwrap();
//!
//! // Query the catalog
//! let criteria = CardCriteria {
//!     set_name: Some("2023 Topps Chrome F1".into()),
//!     ..Default::default()
//! };
//! let cards = sdk.cards().by_criteria(&criteria).unwrap();
//!
//! // Chart-ready price series for the base printing
//! let series = sdk.prices().series_for_card(&cards[0].id, None).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod connection;
pub mod engine;
pub mod error;
pub mod models;
pub mod query_params;

#[cfg(feature = "async")]
pub use async_client::AsyncFormulaCardzSdk;
pub use connection::ApiConnection;
pub use error::{FormulaCardzError, Result};
pub use query_params::QueryParams;

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// FormulaCardzSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`FormulaCardzSdk`] instance.
///
/// Use [`FormulaCardzSdk::builder()`] to obtain a builder, chain
/// configuration methods, and call [`build()`](FormulaCardzSdkBuilder::build)
/// to create the SDK.
pub struct FormulaCardzSdkBuilder {
    base_url: String,
    timeout: Duration,
    auth_token: Option<String>,
}

impl Default for FormulaCardzSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            auth_token: None,
        }
    }
}

impl FormulaCardzSdkBuilder {
    /// Point the SDK at a different API deployment (e.g. a staging host).
    /// The URL should include the version prefix and no trailing slash.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bearer token attached to every request. Catalog and battle reads work
    /// anonymously; ownership and grail endpoints require it.
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Build the SDK, constructing the underlying HTTP client.
    pub fn build(self) -> Result<FormulaCardzSdk> {
        let conn = ApiConnection::new(self.base_url, self.timeout, self.auth_token)?;
        Ok(FormulaCardzSdk { conn })
    }
}

// ---------------------------------------------------------------------------
// FormulaCardzSdk
// ---------------------------------------------------------------------------

/// The main entry point for the Formula Cardz SDK.
///
/// Wraps an [`ApiConnection`] and exposes domain-specific client interfaces
/// as lightweight borrowing wrappers. Created via
/// [`FormulaCardzSdk::builder()`].
pub struct FormulaCardzSdk {
    conn: ApiConnection,
}

impl FormulaCardzSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> FormulaCardzSdkBuilder {
        FormulaCardzSdkBuilder::default()
    }

    // -- Client accessors --------------------------------------------------

    /// Access the catalog card client.
    pub fn cards(&self) -> client::cards::CardClient<'_> {
        client::cards::CardClient::new(&self.conn)
    }

    /// Access the collection (ownership) client.
    pub fn ownership(&self) -> client::ownership::OwnershipClient<'_> {
        client::ownership::OwnershipClient::new(&self.conn)
    }

    /// Access the grail-list client.
    pub fn grails(&self) -> client::grails::GrailClient<'_> {
        client::grails::GrailClient::new(&self.conn)
    }

    /// Access the market-price client.
    pub fn prices(&self) -> client::prices::PriceClient<'_> {
        client::prices::PriceClient::new(&self.conn)
    }

    /// Access the 1/1 tracker client.
    pub fn one_of_ones(&self) -> client::one_of_ones::OneOfOneClient<'_> {
        client::one_of_ones::OneOfOneClient::new(&self.conn)
    }

    /// Access the card-battle client.
    pub fn battles(&self) -> client::battles::BattleClient<'_> {
        client::battles::BattleClient::new(&self.conn)
    }

    /// Access the release-drop client.
    pub fn drops(&self) -> client::drops::DropClient<'_> {
        client::drops::DropClient::new(&self.conn)
    }

    /// Access the filter-dropdown client.
    pub fn dropdowns(&self) -> client::dropdowns::DropdownClient<'_> {
        client::dropdowns::DropdownClient::new(&self.conn)
    }

    // -- Utility -----------------------------------------------------------

    /// Replace the bearer token, e.g. after a login or refresh.
    pub fn set_auth_token(&mut self, token: Option<String>) {
        self.conn.set_auth_token(token);
    }

    /// Return a reference to the underlying [`ApiConnection`].
    pub fn connection(&self) -> &ApiConnection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for FormulaCardzSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FormulaCardzSdk(base_url={})", self.conn.base_url())
    }
}
