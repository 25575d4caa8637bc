//! Showdown comparison between two evaluated hands.

use std::cmp::Ordering;

use crate::card::Card;
use crate::category::HandCategory;
use crate::classify::{Counts, EvaluatedHand};
use crate::strict;

/// Outcome from the first hand's perspective.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandResult {
    Victory,
    Loss,
    Split,
    /// The hands could not be compared (mismatched categories, or cards
    /// that do not back the claimed category).
    Error,
}

impl HandResult {
    /// The same outcome seen from the other hand.
    pub fn flip(self) -> Self {
        match self {
            HandResult::Victory => HandResult::Loss,
            HandResult::Loss => HandResult::Victory,
            r => r,
        }
    }

    #[inline]
    fn then(self, next: impl FnOnce() -> HandResult) -> HandResult {
        match self {
            HandResult::Split => next(),
            decided => decided,
        }
    }
}

impl From<Ordering> for HandResult {
    fn from(o: Ordering) -> Self {
        match o {
            Ordering::Greater => HandResult::Victory,
            Ordering::Less => HandResult::Loss,
            Ordering::Equal => HandResult::Split,
        }
    }
}

/// How two hands are ranked against each other at showdown.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Showdown {
    /// Category order, then category-specific tie-breaks over the entire
    /// combined card set (kickers may come from more than five cards).
    #[default]
    WholeSet,
    /// Standard hold'em ranking: each side's best five cards.
    BestFive,
}

/// Compare with [`Showdown::WholeSet`].
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> HandResult {
    compare_with(a, b, Showdown::WholeSet)
}

pub fn compare_with(a: &EvaluatedHand, b: &EvaluatedHand, mode: Showdown) -> HandResult {
    match mode {
        Showdown::WholeSet => match a.order().cmp(&b.order()) {
            // lower order is the stronger category
            Ordering::Less => HandResult::Victory,
            Ordering::Greater => HandResult::Loss,
            Ordering::Equal => compare_same_category(a, b),
        },
        Showdown::BestFive => strict::score(a.cards())
            .cmp(&strict::score(b.cards()))
            .into(),
    }
}

/// Tie-break two hands of one category. Hands of different categories are
/// an [`HandResult::Error`].
pub fn compare_same_category(a: &EvaluatedHand, b: &EvaluatedHand) -> HandResult {
    if a.category() != b.category() {
        return HandResult::Error;
    }
    tie_break(a.category(), a.cards(), b.cards()).unwrap_or(HandResult::Error)
}

fn tie_break(category: HandCategory, a: &[Card], b: &[Card]) -> Option<HandResult> {
    let (ca, cb) = (Counts::of(a), Counts::of(b));
    let by = |n: u8| -> Option<HandResult> {
        let x = ca.highest_with_count(n)?;
        let y = cb.highest_with_count(n)?;
        Some(x.cmp(&y).into())
    };
    let kickers = || compare_kickers(a, b);

    let result = match category {
        HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::Straight => {
            ca.straight_top()?.cmp(&cb.straight_top()?).into()
        }
        HandCategory::FourOfAKind => by(4)?.then(kickers),
        // equal trips and equal pair split without looking further
        HandCategory::FullHouse => {
            let pair = by(2)?;
            by(3)?.then(|| pair)
        }
        HandCategory::Flush | HandCategory::HighCard => kickers(),
        HandCategory::ThreeOfAKind => by(3)?.then(kickers),
        HandCategory::TwoPair => {
            let pa: Vec<u8> = ca.with_count(2).take(2).collect();
            let pb: Vec<u8> = cb.with_count(2).take(2).collect();
            if pa.len() < 2 || pb.len() < 2 {
                return None;
            }
            HandResult::from(pa.cmp(&pb)).then(kickers)
        }
        HandCategory::Pair => by(2)?.then(kickers),
    };
    Some(result)
}

/// Rank values of both whole sets, sorted high to low, compared position by
/// position.
pub fn compare_kickers(a: &[Card], b: &[Card]) -> HandResult {
    let sorted = |cards: &[Card]| {
        let mut v: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
        v.sort_unstable_by(|x, y| y.cmp(x));
        v
    };
    let (ka, kb) = (sorted(a), sorted(b));
    ka.iter()
        .zip(&kb)
        .map(|(x, y)| x.cmp(y))
        .find(|o| o.is_ne())
        .map(HandResult::from)
        .unwrap_or(HandResult::Split)
}
