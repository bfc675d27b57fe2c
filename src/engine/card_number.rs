//! Total ordering over heterogeneous card-number strings.
//!
//! Four numbering schemes coexist in the catalog: plain integers ("44"),
//! vintage year-dash numbers ("1954-11"), insert-set prefix numbers ("TT-5")
//! and free-form strings. Each number is classified once and comparison is
//! dispatched on the variant, so `"2" < "10"` holds numerically and a fifth
//! scheme can be slotted in without touching the existing arms.

use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// CardNumber
// ---------------------------------------------------------------------------

/// A parsed card number. Variant order defines the cross-scheme ordering:
/// plain numerics sort before year-dash numbers, which sort before prefixed
/// numbers, with everything else last.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum CardNumber {
    Numeric(u64),
    YearNumber { year: u16, number: u64 },
    /// Prefix is stored uppercased so comparison is case-insensitive.
    Prefixed { prefix: String, number: u64 },
    /// Uppercased fallback for anything that fits no known scheme.
    Opaque(String),
}

impl CardNumber {
    /// Classify a raw card-number string. Never fails: input that matches no
    /// scheme becomes [`CardNumber::Opaque`].
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = raw.parse::<u64>() {
                return CardNumber::Numeric(n);
            }
            // More digits than fit in u64; treat as opaque rather than wrap.
            return CardNumber::Opaque(raw.to_uppercase());
        }

        if let Some((head, tail)) = raw.split_once('-') {
            let tail_numeric = !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit());
            if tail_numeric {
                if head.len() == 4 && head.bytes().all(|b| b.is_ascii_digit()) {
                    if let (Ok(year), Ok(number)) = (head.parse::<u16>(), tail.parse::<u64>()) {
                        return CardNumber::YearNumber { year, number };
                    }
                }
                if !head.is_empty() && head.bytes().all(|b| b.is_ascii_alphabetic()) {
                    if let Ok(number) = tail.parse::<u64>() {
                        return CardNumber::Prefixed {
                            prefix: head.to_uppercase(),
                            number,
                        };
                    }
                }
            }
        }

        CardNumber::Opaque(raw.to_uppercase())
    }
}

impl From<&str> for CardNumber {
    fn from(raw: &str) -> Self {
        CardNumber::parse(raw)
    }
}

// ---------------------------------------------------------------------------
// Comparator
// ---------------------------------------------------------------------------

/// Compare two raw card-number strings under the catalog ordering.
///
/// Pure and deterministic; suitable for `sort_by` directly:
///
/// ```
/// use formula_cardz_sdk::engine::card_number::compare_card_numbers;
///
/// let mut numbers = vec!["TT-5", "10", "2", "1954-11"];
/// numbers.sort_by(|a, b| compare_card_numbers(a, b));
/// assert_eq!(numbers, vec!["2", "10", "1954-11", "TT-5"]);
/// ```
pub fn compare_card_numbers(a: &str, b: &str) -> Ordering {
    CardNumber::parse(a).cmp(&CardNumber::parse(b))
}
