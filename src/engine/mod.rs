//! Pure reconciliation and aggregation over in-memory card data.
//!
//! Everything in this module is synchronous and side-effect free: the client
//! layer (or the embedding application) fetches catalog, ownership, grail and
//! price records, and these functions turn them into display-ready views.
//! Recomputation is cheap and idempotent, so callers handling overlapping
//! async fetches can simply re-invoke with fresh inputs and discard results
//! for a stale selection.

pub mod battle;
pub mod card_number;
pub mod filter_sort;
pub mod one_of_one;
pub mod parallel;
pub mod price_history;

pub use battle::{battle_vote_split, vote_split};
pub use card_number::{compare_card_numbers, CardNumber};
pub use filter_sort::{
    CollectionEntry, CollectionFilter, CollectionView, SortKey, SortOrder, WithMarketPrice,
};
pub use one_of_one::{matches_status, one_of_one_stats, OneOfOneStats, StatusFilter};
pub use parallel::{parallel_display_name, resolve_parallel, ResolvedParallel};
pub use price_history::{aggregate_price_history, latest_average_price, PriceSeries, PriceSummary};
