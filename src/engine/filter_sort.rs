//! Reusable filter + sort pipeline for card collections.
//!
//! The same pipeline backs the collection page, marketplace listings and the
//! 1/1 tracker results, so it is written against a small accessor trait
//! rather than any one record type. Filtering always runs before sorting,
//! the sort is stable (same-keyed entries keep their input order, which
//! matters because same-named entries can differ in parallel), and the input
//! slice is never mutated.

use std::cmp::Ordering;

use crate::engine::price_history::latest_average_price;
use crate::models::{CollectionCard, GrailCard, MarketPriceSnapshot, OneOfOneCard};

// ---------------------------------------------------------------------------
// CollectionEntry
// ---------------------------------------------------------------------------

/// Facet accessors the pipeline filters and sorts on.
///
/// Ownership-only facets default to "no data": zero quantity, no condition
/// and a latest price of 0.0, so catalog-only collections still sort
/// deterministically under every key.
pub trait CollectionEntry {
    fn driver_name(&self) -> &str;
    fn constructor_name(&self) -> &str;
    fn set_name(&self) -> &str;
    fn card_number(&self) -> &str;
    fn year(&self) -> i32;
    fn rookie_card(&self) -> bool;

    fn parallel(&self) -> Option<&str> {
        None
    }
    fn condition(&self) -> Option<&str> {
        None
    }
    fn quantity(&self) -> u32 {
        0
    }
    /// Latest average market price, 0.0 when no price data exists.
    fn latest_price(&self) -> f64 {
        0.0
    }
}

impl CollectionEntry for CollectionCard {
    fn driver_name(&self) -> &str {
        &self.driver_name
    }
    fn constructor_name(&self) -> &str {
        &self.constructor_name
    }
    fn set_name(&self) -> &str {
        &self.set_name
    }
    fn card_number(&self) -> &str {
        &self.card_number
    }
    fn year(&self) -> i32 {
        self.year
    }
    fn rookie_card(&self) -> bool {
        self.rookie_card
    }
    fn parallel(&self) -> Option<&str> {
        self.parallel.as_deref()
    }
    fn condition(&self) -> Option<&str> {
        Some(&self.condition)
    }
    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl CollectionEntry for GrailCard {
    fn driver_name(&self) -> &str {
        &self.driver_name
    }
    fn constructor_name(&self) -> &str {
        &self.constructor_name
    }
    fn set_name(&self) -> &str {
        &self.set_name
    }
    fn card_number(&self) -> &str {
        &self.card_number
    }
    fn year(&self) -> i32 {
        self.year
    }
    fn rookie_card(&self) -> bool {
        self.rookie_card
    }
    fn parallel(&self) -> Option<&str> {
        self.parallel.as_deref()
    }
}

impl CollectionEntry for OneOfOneCard {
    fn driver_name(&self) -> &str {
        &self.driver_name
    }
    fn constructor_name(&self) -> &str {
        &self.constructor_name
    }
    fn set_name(&self) -> &str {
        &self.set_name
    }
    fn card_number(&self) -> &str {
        &self.card_number
    }
    fn year(&self) -> i32 {
        self.year
    }
    fn rookie_card(&self) -> bool {
        self.rookie_card
    }
}

// ---------------------------------------------------------------------------
// WithMarketPrice
// ---------------------------------------------------------------------------

/// Pairs a collection entry with its fetched price history so the price
/// sort keys have data to compare. The latest average is computed once at
/// construction.
#[derive(Debug, Clone)]
pub struct WithMarketPrice<T> {
    pub entry: T,
    latest_price: f64,
}

impl<T: CollectionEntry> WithMarketPrice<T> {
    pub fn new(entry: T, history: &[MarketPriceSnapshot]) -> Self {
        let latest_price = latest_average_price(history);
        Self {
            entry,
            latest_price,
        }
    }

    /// An entry with no price data; sorts as 0.0 under the price keys.
    pub fn unpriced(entry: T) -> Self {
        Self {
            entry,
            latest_price: 0.0,
        }
    }
}

impl<T: CollectionEntry> CollectionEntry for WithMarketPrice<T> {
    fn driver_name(&self) -> &str {
        self.entry.driver_name()
    }
    fn constructor_name(&self) -> &str {
        self.entry.constructor_name()
    }
    fn set_name(&self) -> &str {
        self.entry.set_name()
    }
    fn card_number(&self) -> &str {
        self.entry.card_number()
    }
    fn year(&self) -> i32 {
        self.entry.year()
    }
    fn rookie_card(&self) -> bool {
        self.entry.rookie_card()
    }
    fn parallel(&self) -> Option<&str> {
        self.entry.parallel()
    }
    fn condition(&self) -> Option<&str> {
        self.entry.condition()
    }
    fn quantity(&self) -> u32 {
        self.entry.quantity()
    }
    fn latest_price(&self) -> f64 {
        self.latest_price
    }
}

// ---------------------------------------------------------------------------
// CollectionFilter
// ---------------------------------------------------------------------------

/// Conjunction of independent facet predicates. An unset (or empty-string)
/// facet is no constraint, not a match against the empty string.
#[derive(Debug, Clone, Default)]
pub struct CollectionFilter {
    /// Case-insensitive substring search over driver, constructor, set name,
    /// card number and parallel.
    pub search: Option<String>,
    pub driver: Option<String>,
    pub constructor: Option<String>,
    pub parallel: Option<String>,
    pub condition: Option<String>,
    pub year: Option<i32>,
    pub rookie_only: bool,
}

impl CollectionFilter {
    pub fn matches<T: CollectionEntry>(&self, entry: &T) -> bool {
        if let Some(query) = active(&self.search) {
            let query = query.to_lowercase();
            let hit = entry.driver_name().to_lowercase().contains(&query)
                || entry.constructor_name().to_lowercase().contains(&query)
                || entry.set_name().to_lowercase().contains(&query)
                || entry.card_number().to_lowercase().contains(&query)
                || entry
                    .parallel()
                    .is_some_and(|p| p.to_lowercase().contains(&query));
            if !hit {
                return false;
            }
        }

        if let Some(driver) = active(&self.driver) {
            if entry.driver_name() != driver {
                return false;
            }
        }
        if let Some(constructor) = active(&self.constructor) {
            if entry.constructor_name() != constructor {
                return false;
            }
        }
        if let Some(parallel) = active(&self.parallel) {
            if entry.parallel() != Some(parallel) {
                return false;
            }
        }
        if let Some(condition) = active(&self.condition) {
            if entry.condition() != Some(condition) {
                return false;
            }
        }
        if let Some(year) = self.year {
            if entry.year() != year {
                return false;
            }
        }
        if self.rookie_only && !entry.rookie_card() {
            return false;
        }

        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// The active sort key. Each key carries its natural direction as shown in
/// the UI: `Recent` is newest-first and `PriceHigh` highest-first even under
/// [`SortOrder::Ascending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Driver,
    Team,
    Year,
    Quantity,
    Condition,
    Recent,
    PriceHigh,
    PriceLow,
}

impl SortKey {
    fn compare<T: CollectionEntry>(self, a: &T, b: &T) -> Ordering {
        match self {
            SortKey::Driver => a.driver_name().cmp(b.driver_name()),
            SortKey::Team => a.constructor_name().cmp(b.constructor_name()),
            SortKey::Year => a.year().cmp(&b.year()),
            SortKey::Quantity => a.quantity().cmp(&b.quantity()),
            SortKey::Condition => a
                .condition()
                .unwrap_or_default()
                .cmp(b.condition().unwrap_or_default()),
            SortKey::Recent => b.year().cmp(&a.year()),
            SortKey::PriceHigh => b.latest_price().total_cmp(&a.latest_price()),
            SortKey::PriceLow => a.latest_price().total_cmp(&b.latest_price()),
        }
    }
}

/// Direction toggle, applied by reversing the key's comparator outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Filter settings plus sort settings; one value describes a complete view
/// of a collection.
#[derive(Debug, Clone, Default)]
pub struct CollectionView {
    pub filter: CollectionFilter,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
}

impl CollectionView {
    /// Run the pipeline: filter first, then a stable sort. Returns a new
    /// vector; the input is untouched. Applying the same view twice yields
    /// the same result as applying it once.
    pub fn apply<T: CollectionEntry + Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out: Vec<T> = items
            .iter()
            .filter(|item| self.filter.matches(*item))
            .cloned()
            .collect();

        out.sort_by(|a, b| {
            let ordering = self.sort_key.compare(a, b);
            match self.sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });

        out
    }
}
