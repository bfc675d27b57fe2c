//! Collection filter + sort pipeline tests.

mod common;

use formula_cardz_sdk::engine::filter_sort::{
    CollectionEntry, CollectionFilter, CollectionView, SortKey, SortOrder, WithMarketPrice,
};
use formula_cardz_sdk::models::CollectionCard;

fn view(filter: CollectionFilter, sort_key: SortKey, sort_order: SortOrder) -> CollectionView {
    CollectionView {
        filter,
        sort_key,
        sort_order,
    }
}

fn drivers(cards: &[CollectionCard]) -> Vec<&str> {
    cards.iter().map(|c| c.driver_name.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

#[test]
fn default_view_keeps_everything_sorted_by_driver() {
    let cards = common::collection_cards();
    let result = CollectionView::default().apply(&cards);

    assert_eq!(
        drivers(&result),
        vec!["Lewis Hamilton", "Max Verstappen", "Oscar Piastri"]
    );
}

#[test]
fn facet_filters_are_a_conjunction() {
    let cards = common::collection_cards();

    let filter = CollectionFilter {
        year: Some(2023),
        constructor: Some("McLaren".to_string()),
        ..Default::default()
    };
    let result = view(filter, SortKey::Driver, SortOrder::Ascending).apply(&cards);

    assert_eq!(drivers(&result), vec!["Oscar Piastri"]);
}

#[test]
fn empty_string_facet_means_no_constraint() {
    let cards = common::collection_cards();

    let filter = CollectionFilter {
        driver: Some(String::new()),
        parallel: Some(String::new()),
        search: Some(String::new()),
        ..Default::default()
    };
    let result = view(filter, SortKey::Driver, SortOrder::Ascending).apply(&cards);

    assert_eq!(result.len(), 3);
}

#[test]
fn parallel_and_condition_facets_match_exactly() {
    let cards = common::collection_cards();

    let filter = CollectionFilter {
        parallel: Some("Gold".to_string()),
        ..Default::default()
    };
    assert_eq!(
        drivers(&view(filter, SortKey::Driver, SortOrder::Ascending).apply(&cards)),
        vec!["Lewis Hamilton"]
    );

    let filter = CollectionFilter {
        condition: Some("PSA 10".to_string()),
        ..Default::default()
    };
    assert_eq!(
        drivers(&view(filter, SortKey::Driver, SortOrder::Ascending).apply(&cards)),
        vec!["Max Verstappen"]
    );
}

#[test]
fn rookie_only_drops_veterans() {
    let cards = common::collection_cards();

    let filter = CollectionFilter {
        rookie_only: true,
        ..Default::default()
    };
    assert_eq!(
        drivers(&view(filter, SortKey::Driver, SortOrder::Ascending).apply(&cards)),
        vec!["Oscar Piastri"]
    );
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let cards = common::collection_cards();

    for query in ["verstappen", "RED BULL", "2022 topps", "refractor"] {
        let filter = CollectionFilter {
            search: Some(query.to_string()),
            ..Default::default()
        };
        let result = view(filter, SortKey::Driver, SortOrder::Ascending).apply(&cards);
        assert_eq!(result.len(), 1, "query {query:?}");
    }

    let filter = CollectionFilter {
        search: Some("no such card".to_string()),
        ..Default::default()
    };
    assert!(view(filter, SortKey::Driver, SortOrder::Ascending)
        .apply(&cards)
        .is_empty());
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[test]
fn year_sorts_ascending_and_descending() {
    let cards = common::collection_cards();

    let asc = view(CollectionFilter::default(), SortKey::Year, SortOrder::Ascending).apply(&cards);
    assert_eq!(asc[0].year, 2022);

    let desc =
        view(CollectionFilter::default(), SortKey::Year, SortOrder::Descending).apply(&cards);
    assert_eq!(desc[0].year, 2023);
}

#[test]
fn recent_is_newest_first_under_ascending_order() {
    let cards = common::collection_cards();
    let result =
        view(CollectionFilter::default(), SortKey::Recent, SortOrder::Ascending).apply(&cards);
    assert_eq!(result[0].year, 2023);
    assert_eq!(result.last().unwrap().year, 2022);
}

#[test]
fn quantity_sorts_numerically() {
    let cards = common::collection_cards();
    let result =
        view(CollectionFilter::default(), SortKey::Quantity, SortOrder::Ascending).apply(&cards);
    let quantities: Vec<u32> = result.iter().map(|c| c.quantity).collect();
    assert_eq!(quantities, vec![1, 2, 3]);
}

#[test]
fn sort_is_stable_for_equal_keys() {
    let cards = common::collection_cards();
    // Both 2023 cards tie under Year; they must keep input order
    // (Hamilton before Piastri) whichever direction is applied.
    let result =
        view(CollectionFilter::default(), SortKey::Year, SortOrder::Ascending).apply(&cards);
    assert_eq!(
        drivers(&result),
        vec!["Max Verstappen", "Lewis Hamilton", "Oscar Piastri"]
    );
}

#[test]
fn pipeline_is_idempotent_and_does_not_mutate_input() {
    let cards = common::collection_cards();
    let v = view(CollectionFilter::default(), SortKey::Team, SortOrder::Descending);

    let once = v.apply(&cards);
    let twice = v.apply(&once);
    assert_eq!(drivers(&once), drivers(&twice));

    // Original order untouched
    assert_eq!(
        drivers(&cards),
        vec!["Lewis Hamilton", "Max Verstappen", "Oscar Piastri"]
    );
}

// ---------------------------------------------------------------------------
// Price sorting
// ---------------------------------------------------------------------------

#[test]
fn price_keys_compare_latest_average_defaulting_to_zero() {
    let cards = common::collection_cards();

    let priced: Vec<WithMarketPrice<CollectionCard>> = vec![
        WithMarketPrice::new(
            cards[0].clone(),
            &[
                common::snapshot("2024-01-01T00:00:00Z", 90.0, 100.0, 120.0, None),
                common::snapshot("2024-02-01T00:00:00Z", 140.0, 150.0, 160.0, None),
            ],
        ),
        // No price data: sorts as 0.0
        WithMarketPrice::unpriced(cards[1].clone()),
        WithMarketPrice::new(
            cards[2].clone(),
            &[common::snapshot("2024-02-01T00:00:00Z", 30.0, 40.0, 55.0, None)],
        ),
    ];

    let high = view(CollectionFilter::default(), SortKey::PriceHigh, SortOrder::Ascending)
        .apply(&priced);
    let names: Vec<&str> = high.iter().map(|c| c.driver_name()).collect();
    assert_eq!(names, vec!["Lewis Hamilton", "Oscar Piastri", "Max Verstappen"]);

    let low = view(CollectionFilter::default(), SortKey::PriceLow, SortOrder::Ascending)
        .apply(&priced);
    let names: Vec<&str> = low.iter().map(|c| c.driver_name()).collect();
    assert_eq!(names, vec!["Max Verstappen", "Oscar Piastri", "Lewis Hamilton"]);
}
