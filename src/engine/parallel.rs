//! Parallel resolution: joining loose parallel names back to the catalog.
//!
//! Ownership, grail and price records identify a variant only by card id plus
//! an optional parallel name (a foreign key by name, tolerant of catalog
//! edits). This module is the single place that turns that loose reference
//! into concrete display data.

use crate::config::BASE_PARALLEL;
use crate::models::{Card, Parallel};

// ---------------------------------------------------------------------------
// ResolvedParallel
// ---------------------------------------------------------------------------

/// The concrete variant a caller should render for a (card, parallel name)
/// pair. Either a named parallel from the catalog or the synthetic base
/// variant built from the card itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParallel {
    pub name: String,
    pub image_url: String,
    pub print_run: Option<u32>,
    pub is_one_of_one: bool,
}

impl ResolvedParallel {
    fn base(card: &Card) -> Self {
        Self {
            name: BASE_PARALLEL.to_string(),
            image_url: card.base_image_url.clone(),
            print_run: None,
            is_one_of_one: false,
        }
    }

    fn named(card: &Card, parallel: &Parallel) -> Self {
        Self {
            name: parallel.name.clone(),
            // Parallels without their own artwork fall back to the base image.
            image_url: parallel
                .image_url
                .clone()
                .unwrap_or_else(|| card.base_image_url.clone()),
            print_run: parallel.print_run,
            is_one_of_one: parallel.is_one_of_one.unwrap_or(false),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve a card + optional parallel name to the variant to display.
///
/// `None` or the `"Base"` sentinel resolves to the synthetic base variant.
/// Named lookups are exact and case-sensitive; if the card's catalog entry
/// lists the same name twice (a data error upstream) the first match wins.
///
/// A name with no match also resolves to the base variant rather than
/// failing: parallel catalogs get renamed and extended over time, and an
/// ownership record pointing at a stale name is a display concern, not a
/// data error.
pub fn resolve_parallel(card: &Card, parallel_name: Option<&str>) -> ResolvedParallel {
    let name = match parallel_name {
        None => return ResolvedParallel::base(card),
        Some(n) if n == BASE_PARALLEL => return ResolvedParallel::base(card),
        Some(n) => n,
    };

    card.parallels
        .iter()
        .find(|p| p.name == name)
        .map(|p| ResolvedParallel::named(card, p))
        .unwrap_or_else(|| ResolvedParallel::base(card))
}

// ---------------------------------------------------------------------------
// Display names
// ---------------------------------------------------------------------------

/// Short display name for a parallel, for space-constrained layouts.
/// Names without an abbreviation pass through unchanged.
pub fn parallel_display_name(parallel: &str) -> &str {
    match parallel {
        // Sapphire
        "Aqua Sapphire" => "Aqua",
        "70th Anniversary Sapphire" => "70th Sapphire",
        "Gold Sapphire" => "Gold",
        "Orange Sapphire" => "Orange",
        "Purple Sapphire" => "Purple",
        "Red Sapphire" => "Red",
        "Chartreuse Sapphire" => "Chartreuse",
        "Sepia Sapphire" => "Sepia",
        "Green Sapphire" => "Green",

        // Refractors
        "Purple/Green Refractor" => "Purple/Green",
        "Gold/Purple Refractor" => "Gold/Purple",
        "Orange/Red Refractor" => "Orange/Red",
        "Red/Green Refractor" => "Red/Green",
        "Purple Refractor" => "Purple",
        "Purple Checker Flag Refractor" => "Purple Checker",
        "Green Refractor" => "Green",
        "Gold Refractor" => "Gold",
        "70th Anniversary Gold Refractor" => "70th Gold",
        "Gold Checker Flag Refractor" => "Gold Checker",
        "Gold Wave Refractor" => "Gold Wave",
        "Orange Refractor" => "Orange",
        "70th Anniversary Orange Refractor" => "70th Orange",
        "Orange Checker Flag Refractor" => "Orange Checker",
        "Orange Wave Refractor" => "Orange Wave",
        "Red Refractor" => "Red",
        "70th Anniversary Red Refractor" => "70th Red",
        "Red Checker Flag Refractor" => "Red Checker",
        "Red Wave Refractor" => "Red Wave",
        "Green RayWave Refractor" => "Green RayWave",
        "Pink Refractor" => "Pink",
        "Pink RayWave Refractor" => "Pink RayWave",
        "Aqua Wave Refractor" => "Aqua Wave",
        "Fuchsia Lava Refractor" => "Fuchsia Lava",
        "Mini Diamond Refractor" => "Mini Diamond",
        "Black and White RayWave Refractor" => "B&W RayWave",
        "Sepia Refractor" => "Sepia",
        "Gold RayWave Refractor" => "Gold RayWave",
        "Orange RayWave Refractor" => "Orange RayWave",
        "Red RayWave Refractor" => "Red RayWave",
        "Black RayWave Refractor" => "Black RayWave",
        "Blue Refractor" => "Blue",
        "Pearl White Refractor" => "Pearl White",
        "Gold Minted Refractor" => "Gold Minted",

        // X-Fractors
        "Checkered Flag Gold X-fractor" => "Gold X-fractor",
        "Checkered Flag Orange X-fractor" => "Orange X-fractor",
        "Checkered Flag Red X-fractor" => "Red X-fractor",

        // Foils & patterns
        "Checker Flag" => "Checker",
        "Sparkle Foil" => "Sparkle",
        "Rainbow Foil" => "Rainbow",
        "Red Foil" => "Red",
        "Black Foil" => "Black",
        "Black and White Foil" => "B & W",
        "Purple Foil" => "Purple",
        "Blue Foil" => "Blue",
        "Rainbow Foilboard" => "Rainbow",
        "Gold Rainbow Foil" => "Gold Rainbow",

        // Printing plates
        "Printing Plate Black" => "Black Plate",
        "Printing Plate Cyan" => "Cyan Plate",
        "Printing Plate Magenta" => "Magenta Plate",
        "Printing Plate Yellow" => "Yellow Plate",

        // Autos
        "Red Autograph" => "Red Auto",
        "Black Autograph" => "Black Auto",
        "Rainbow Autograph" => "Rainbow Auto",
        "Green Autograph" => "Green Auto",
        "Gold Rainbow Autograph" => "Gold Rainbow Auto",
        "Gold Autograph Refractor" => "Gold Auto",
        "Black Autograph Refractor" => "Black Auto",
        "Red Autograph Refractor" => "Red Auto",

        // Inserts
        "Insert Die-Cut Refractor" => "Die-Cut",
        "Insert Gold Refractor" => "Gold",
        "Insert Black Refractor" => "Black",
        "Insert Red Refractor" => "Red",

        // Logofractors
        "Green Logofractor" => "Green",
        "Gold Logofractor" => "Gold",
        "Orange Logofractor" => "Orange",
        "Black Logofractor" => "Black",
        "Red Logofractor" => "Red",

        // Finest rarity-tiered refractors
        "Common Blue Refractor" | "Uncommon Blue Refractor" | "Rare Blue Refractor" => "Blue",
        "Common Die-Cut Refractor" | "Uncommon Die-Cut Refractor" | "Rare Die-Cut Refractor" => {
            "Die-Cut"
        }
        "Common Gold Refractor" | "Uncommon Gold Refractor" | "Rare Gold Refractor" => "Gold",
        "Common Black Refractor" | "Uncommon Black Refractor" | "Rare Black Refractor" => "Black",
        "Common Red/Black Vapor Refractor"
        | "Uncommon Red/Black Vapor Refractor"
        | "Rare Red/Black Vapor Refractor" => "Red/Black",
        "Common Red Refractor" | "Uncommon Red Refractor" | "Rare Red Refractor" => "Red",

        // Rare 1/1s
        "70th Anniversary Superfractor" => "70th Superfractor",
        "Rose Gold Logofractor" => "Rose Gold",

        other => other,
    }
}
