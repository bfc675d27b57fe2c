//! URL query-parameter builder for the API client.
//!
//! Collects `key=value` pairs, skipping unset optional values so an omitted
//! filter never reaches the server as an empty parameter. The assembled
//! pairs are handed to reqwest's query serializer, which owns the actual
//! percent-encoding. Builder methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use formula_cardz_sdk::QueryParams;
//!
//! let mut qp = QueryParams::new();
//! qp.set("setName", "Topps Chrome F1")
//!     .set_opt("driverName", Some("Max Verstappen"))
//!     .set_opt("cardNumber", None::<&str>);
//! assert_eq!(qp.pairs().len(), 2);
//! ```

#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter unconditionally.
    pub fn set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a parameter only when the value is present.
    pub fn set_opt(&mut self, key: &str, value: Option<impl ToString>) -> &mut Self {
        if let Some(v) = value {
            self.pairs.push((key.to_string(), v.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The accumulated pairs, in insertion order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
