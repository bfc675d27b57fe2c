//! Unit tests for the card-number total order.

use std::cmp::Ordering;

use formula_cardz_sdk::engine::card_number::{compare_card_numbers, CardNumber};

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

#[test]
fn classifies_pure_numeric() {
    assert_eq!(CardNumber::parse("44"), CardNumber::Numeric(44));
}

#[test]
fn classifies_year_dash_number() {
    assert_eq!(
        CardNumber::parse("1954-11"),
        CardNumber::YearNumber {
            year: 1954,
            number: 11
        }
    );
}

#[test]
fn classifies_prefix_dash_number_uppercased() {
    assert_eq!(
        CardNumber::parse("tt-5"),
        CardNumber::Prefixed {
            prefix: "TT".to_string(),
            number: 5
        }
    );
}

#[test]
fn unmatched_formats_degrade_to_opaque() {
    assert_eq!(
        CardNumber::parse("CL-2-B"),
        CardNumber::Opaque("CL-2-B".to_string())
    );
    assert_eq!(CardNumber::parse(""), CardNumber::Opaque(String::new()));
    // Three-digit head is not a year, alpha head is required for prefixed
    assert_eq!(
        CardNumber::parse("195-11"),
        CardNumber::Opaque("195-11".to_string())
    );
}

// ---------------------------------------------------------------------------
// Within-category ordering
// ---------------------------------------------------------------------------

#[test]
fn numeric_compares_as_integers_not_strings() {
    assert_eq!(compare_card_numbers("2", "10"), Ordering::Less);
    assert_eq!(compare_card_numbers("44", "1"), Ordering::Greater);
    assert_eq!(compare_card_numbers("7", "7"), Ordering::Equal);
}

#[test]
fn year_compares_by_year_then_number() {
    assert_eq!(compare_card_numbers("1954-11", "1954-200"), Ordering::Less);
    assert_eq!(compare_card_numbers("1954-11", "1953-200"), Ordering::Greater);
}

#[test]
fn prefixed_compares_by_prefix_then_number() {
    assert_eq!(compare_card_numbers("TT-5", "TT-12"), Ordering::Less);
    assert_eq!(compare_card_numbers("AA-9", "TT-1"), Ordering::Less);
}

#[test]
fn prefixed_comparison_is_case_insensitive() {
    assert_eq!(compare_card_numbers("tt-5", "TT-5"), Ordering::Equal);
    assert_eq!(compare_card_numbers("tt-5", "TT-12"), Ordering::Less);
}

#[test]
fn opaque_comparison_is_case_insensitive() {
    assert_eq!(compare_card_numbers("abc!", "ABC!"), Ordering::Equal);
    assert_eq!(compare_card_numbers("abc!", "ABD!"), Ordering::Less);
}

// ---------------------------------------------------------------------------
// Cross-category ordering
// ---------------------------------------------------------------------------

#[test]
fn numeric_sorts_before_year_dash() {
    assert_eq!(compare_card_numbers("1954-5", "44"), Ordering::Greater);
    assert_eq!(compare_card_numbers("44", "1954-5"), Ordering::Less);
}

#[test]
fn year_sorts_before_prefixed() {
    assert_eq!(compare_card_numbers("1954-5", "AA-1"), Ordering::Less);
}

#[test]
fn prefixed_sorts_before_opaque() {
    assert_eq!(compare_card_numbers("TT-5", "ZZZ"), Ordering::Less);
    assert_eq!(compare_card_numbers("A-1", "0-0"), Ordering::Less);
}

// ---------------------------------------------------------------------------
// Total-order properties
// ---------------------------------------------------------------------------

#[test]
fn comparator_is_antisymmetric_and_transitive() {
    let samples = [
        "1", "2", "10", "44", "1953-9", "1954-11", "1954-200", "AA-1", "TT-5", "TT-12", "ZZ-1",
        "CL-2-B", "ZZZ",
    ];
    for a in samples {
        for b in samples {
            assert_eq!(
                compare_card_numbers(a, b),
                compare_card_numbers(b, a).reverse(),
                "antisymmetry failed for ({a}, {b})"
            );
            for c in samples {
                if compare_card_numbers(a, b) != Ordering::Greater
                    && compare_card_numbers(b, c) != Ordering::Greater
                {
                    assert_ne!(
                        compare_card_numbers(a, c),
                        Ordering::Greater,
                        "transitivity failed for ({a}, {b}, {c})"
                    );
                }
            }
        }
    }
}

#[test]
fn sorting_a_shuffled_mix_is_deterministic() {
    let mut numbers = vec!["ZZZ", "TT-12", "1954-200", "10", "TT-5", "2", "1954-11", "44"];
    numbers.sort_by(|a, b| compare_card_numbers(a, b));
    assert_eq!(
        numbers,
        vec!["2", "10", "44", "1954-11", "1954-200", "TT-5", "TT-12", "ZZZ"]
    );

    let mut reversed = vec!["2", "1954-11", "44", "TT-5", "10", "1954-200", "ZZZ", "TT-12"];
    reversed.sort_by(|a, b| compare_card_numbers(a, b));
    assert_eq!(numbers, reversed);
}
