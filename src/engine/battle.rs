//! Vote-split percentages for card battles.

use crate::models::CardBattle;

/// Rounded percentage split for the two sides of a battle.
///
/// With zero total votes the split is an even 50/50 rather than a NaN-prone
/// division. The two halves can sum to 99 or 101 after rounding; callers
/// display them independently.
pub fn vote_split(votes_card_one: u32, votes_card_two: u32) -> (u32, u32) {
    let total = votes_card_one + votes_card_two;
    if total == 0 {
        return (50, 50);
    }
    let one = ((votes_card_one as f64 / total as f64) * 100.0).round() as u32;
    let two = ((votes_card_two as f64 / total as f64) * 100.0).round() as u32;
    (one, two)
}

/// [`vote_split`] over a battle record.
pub fn battle_vote_split(battle: &CardBattle) -> (u32, u32) {
    vote_split(battle.votes_card_one, battle.votes_card_two)
}
