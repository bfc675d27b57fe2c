use std::time::Duration;

/// Default production API endpoint.
pub const API_BASE: &str = "https://formula-cardz-api.onrender.com/v1";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The implicit parallel name for the unnumbered base printing of a card.
///
/// Ownership, grail and price records omit the parallel field (or send this
/// sentinel) when they refer to the base card rather than a named parallel.
pub const BASE_PARALLEL: &str = "Base";
