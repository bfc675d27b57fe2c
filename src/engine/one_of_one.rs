//! Found/missing statistics over one-of-one parallels.

use crate::models::{EnabledParallel, OneOfOneCard};

/// Substring marking the four printing-plate parallels, which are 1/1 by
/// definition and swamp the counts when included.
const PRINTING_PLATE: &str = "Printing Plate";

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Which community-found status a parallel must have to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Found,
    Missing,
}

/// Whether a single parallel is visible under the given status filter.
///
/// This drives which parallel cards get rendered; the aggregate counters in
/// [`one_of_one_stats`] deliberately ignore it and always reflect the full
/// (exclusion-filtered) population. Note the asymmetry for unreported
/// parallels (no flag at all): they are visible under neither `Found` nor
/// `Missing`, but still count as missing in the aggregate.
pub fn matches_status(parallel: &EnabledParallel, filter: StatusFilter) -> bool {
    match filter {
        StatusFilter::All => true,
        StatusFilter::Found => parallel.is_one_of_one_found == Some(true),
        StatusFilter::Missing => parallel.is_one_of_one_found == Some(false),
    }
}

// ---------------------------------------------------------------------------
// OneOfOneStats
// ---------------------------------------------------------------------------

/// Aggregate hunt progress. `found + missing == total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OneOfOneStats {
    pub total: usize,
    pub found: usize,
    pub missing: usize,
}

/// Count one-of-one parallels across a set of tracker cards.
///
/// With `exclude_printing_plates` set, any parallel whose name contains
/// `"Printing Plate"` is dropped before counting. Empty input yields all
/// zeros.
pub fn one_of_one_stats(cards: &[OneOfOneCard], exclude_printing_plates: bool) -> OneOfOneStats {
    let mut stats = OneOfOneStats::default();

    for parallel in cards.iter().flat_map(|c| c.parallels.iter()) {
        if exclude_printing_plates && parallel.name.contains(PRINTING_PLATE) {
            continue;
        }
        if parallel.is_one_of_one != Some(true) {
            continue;
        }
        stats.total += 1;
        if parallel.is_one_of_one_found == Some(true) {
            stats.found += 1;
        }
    }

    stats.missing = stats.total - stats.found;
    stats
}
