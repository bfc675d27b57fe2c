//! Chart-ready aggregation of raw market-price snapshots.

use crate::config::BASE_PARALLEL;
use crate::models::MarketPriceSnapshot;

// ---------------------------------------------------------------------------
// PriceSummary / PriceSeries
// ---------------------------------------------------------------------------

/// The "current" low/avg/high triple, taken from the latest snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub lowest: f64,
    pub average: f64,
    pub highest: f64,
}

/// An ordered series for charting plus the latest summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    /// Snapshots ascending by timestamp. Equal timestamps keep input order.
    pub series: Vec<MarketPriceSnapshot>,
    pub current: PriceSummary,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Filter, order and summarize a raw snapshot list.
///
/// A named `parallel` keeps only snapshots tagged with exactly that name;
/// `None` or the `"Base"` sentinel keeps only untagged snapshots. The server
/// applies the same filter when asked, but cannot distinguish "untagged"
/// from "parameter omitted", so callers re-apply it here.
///
/// Returns `None` when nothing survives the filter; callers render a
/// no-data state instead of indexing into an empty series.
pub fn aggregate_price_history(
    history: &[MarketPriceSnapshot],
    parallel: Option<&str>,
) -> Option<PriceSeries> {
    let mut series: Vec<MarketPriceSnapshot> = match parallel {
        Some(name) if name != BASE_PARALLEL => history
            .iter()
            .filter(|s| s.parallel.as_deref() == Some(name))
            .cloned()
            .collect(),
        _ => history
            .iter()
            .filter(|s| s.parallel.is_none())
            .cloned()
            .collect(),
    };

    series.sort_by_key(|s| s.timestamp);

    let latest = series.last()?;
    let current = PriceSummary {
        lowest: latest.lowest_price,
        average: latest.average_price,
        highest: latest.highest_price,
    };

    Some(PriceSeries { series, current })
}

/// Latest average price in an unfiltered history, or 0.0 with no data.
/// Used as the sort key for price-ordered collection views.
pub fn latest_average_price(history: &[MarketPriceSnapshot]) -> f64 {
    history
        .iter()
        .max_by_key(|s| s.timestamp)
        .map(|s| s.average_price)
        .unwrap_or(0.0)
}
