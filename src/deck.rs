//! Full-deck construction and known-card removal.

use crate::card::{Card, Rank, Suit};
use crate::error::ContractError;

/// All 52 cards, suit-major, rank-minor.
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
        .collect()
}

/// Bitset over card ids.
#[inline(always)]
pub(crate) fn used_mask<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> u64 {
    cards.into_iter().fold(0u64, |m, c| m | (1u64 << c.id()))
}

/// `deck` minus every card in `used`, preserving deck order.
pub fn remove_known(deck: &[Card], used: &[Card]) -> Vec<Card> {
    let used = used_mask(used);
    deck.iter()
        .copied()
        .filter(|c| used & (1u64 << c.id()) == 0)
        .collect()
}

/// True when no card repeats across both hole pairs and the community cards.
pub fn verify_unique(player: &[Card], opponent: &[Card], community: &[Card]) -> bool {
    first_duplicate(player.iter().chain(opponent).chain(community)).is_none()
}

pub(crate) fn first_duplicate<'a, I: IntoIterator<Item = &'a Card>>(cards: I) -> Option<Card> {
    let mut used = 0u64;
    for c in cards {
        let bit = 1u64 << c.id();
        if used & bit != 0 {
            return Some(*c);
        }
        used |= bit;
    }
    None
}

#[inline]
pub(crate) fn ensure_unique<'a, I: IntoIterator<Item = &'a Card>>(
    cards: I,
) -> Result<(), ContractError> {
    match first_duplicate(cards) {
        Some(c) => Err(ContractError::DuplicateCard(c)),
        None => Ok(()),
    }
}
