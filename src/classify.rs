//! Whole-set hand classification.
//!
//! Ranks and suits are counted over every card supplied (hole plus however
//! many community cards are known, 2..7 cards). No best-five subset is
//! chosen; see [`crate::Showdown::BestFive`] for that.

use crate::card::{Card, Rank};
use crate::category::HandCategory;
use crate::error::ContractError;

/// A classified hand. `cards` is the full combined set given to the classifier.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluatedHand {
    category: HandCategory,
    cards: Vec<Card>,
}

impl EvaluatedHand {
    /// Pair a category with a card set as-is. The comparator reports
    /// [`crate::HandResult::Error`] if the cards cannot back the category.
    pub fn new(category: HandCategory, cards: Vec<Card>) -> Self {
        Self { category, cards }
    }

    #[inline(always)]
    pub fn category(&self) -> HandCategory {
        self.category
    }

    #[inline(always)]
    pub fn order(&self) -> u8 {
        self.category.order()
    }

    #[inline(always)]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Occurrence counts per rank value (index 2..=14) and per suit.
#[derive(Clone, Debug, Default)]
pub(crate) struct Counts {
    ranks: [u8; 15],
    suits: [u8; 4],
}

impl Counts {
    pub(crate) fn of(cards: &[Card]) -> Self {
        let mut c = Self::default();
        for card in cards {
            c.ranks[card.rank.value() as usize] += 1;
            c.suits[card.suit.idx()] += 1;
        }
        c
    }

    /// Rank values appearing exactly `n` times, highest first.
    pub(crate) fn with_count(&self, n: u8) -> impl Iterator<Item = u8> + '_ {
        (2..=14u8).rev().filter(move |&v| self.ranks[v as usize] == n)
    }

    pub(crate) fn highest_with_count(&self, n: u8) -> Option<u8> {
        self.with_count(n).next()
    }

    fn has_count(&self, n: u8) -> bool {
        self.highest_with_count(n).is_some()
    }

    fn has(&self, rank: Rank) -> bool {
        self.ranks[rank.value() as usize] > 0
    }

    fn is_flush(&self) -> bool {
        self.suits.iter().any(|&n| n >= 5)
    }

    /// Top card of the highest five-in-a-row among the distinct ranks; the
    /// wheel (A-2-3-4-5) tops out at 5.
    pub(crate) fn straight_top(&self) -> Option<u8> {
        let mut run = 0u8;
        let mut top = None;
        for v in 2..=14u8 {
            if self.ranks[v as usize] > 0 {
                run += 1;
                if run >= 5 {
                    top = Some(v);
                }
            } else {
                run = 0;
            }
        }
        let wheel = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five];
        top.or_else(|| wheel.iter().all(|&r| self.has(r)).then_some(5))
    }
}

fn categorize(cards: &[Card]) -> HandCategory {
    let c = Counts::of(cards);
    let flush = c.is_flush();
    let straight = c.straight_top().is_some();
    let royal = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]
        .iter()
        .all(|&r| c.has(r));

    if flush && straight && royal {
        HandCategory::RoyalFlush
    } else if flush && straight {
        HandCategory::StraightFlush
    } else if c.has_count(4) {
        HandCategory::FourOfAKind
    } else if c.has_count(3) && c.has_count(2) {
        HandCategory::FullHouse
    } else if flush {
        HandCategory::Flush
    } else if straight {
        HandCategory::Straight
    } else if c.has_count(3) {
        HandCategory::ThreeOfAKind
    } else if c.with_count(2).count() == 2 {
        HandCategory::TwoPair
    } else if c.has_count(2) {
        HandCategory::Pair
    } else {
        HandCategory::HighCard
    }
}

/// Classify two hole cards plus 0..=5 community cards.
pub fn classify(hole: &[Card], community: &[Card]) -> Result<EvaluatedHand, ContractError> {
    if hole.len() != 2 {
        return Err(ContractError::HoleCards { found: hole.len() });
    }
    if community.len() > 5 {
        return Err(ContractError::CommunityCards {
            found: community.len(),
        });
    }
    let cards: Vec<Card> = hole.iter().chain(community).copied().collect();
    Ok(EvaluatedHand::new(categorize(&cards), cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{parse_cards, Suit};
    use crate::deck::full_deck;
    use rand::rngs::SmallRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn cat(hole: &str, board: &str) -> HandCategory {
        classify(&parse_cards(hole).unwrap(), &parse_cards(board).unwrap())
            .unwrap()
            .category()
    }

    #[test]
    fn fixtures() {
        assert_eq!(
            cat("A-s A-h", "A-d A-c 2-s 7-h 9-d"),
            HandCategory::FourOfAKind
        );
        assert_eq!(cat("T-s J-s", "Q-s K-s A-s"), HandCategory::RoyalFlush);
        assert_eq!(
            cat("2-s 2-h", "2-d 5-c 5-s 9-h K-d"),
            HandCategory::FullHouse
        );
        assert_eq!(cat("A-s 2-h", "3-d 4-c 5-s 9-h K-d"), HandCategory::Straight);
    }

    #[test]
    fn wheel_tops_at_five() {
        let cards = parse_cards("A-s 2-h 3-d 4-c 5-s 9-h K-d").unwrap();
        assert_eq!(Counts::of(&cards).straight_top(), Some(5));
        let cards = parse_cards("A-s 2-h 3-d 4-c 5-s 6-h K-d").unwrap();
        assert_eq!(Counts::of(&cards).straight_top(), Some(6));
    }

    #[test]
    fn every_category() {
        let cases = [
            ("A-s 2-s", "3-s 4-s 5-s 9-h K-d", HandCategory::StraightFlush),
            ("2-h 6-h", "9-h J-h K-h A-s A-d", HandCategory::Flush),
            ("7-c 7-d", "7-h 2-s 9-c J-h Q-d", HandCategory::ThreeOfAKind),
            ("7-c 7-d", "9-h 9-s 4-c 3-h Q-d", HandCategory::TwoPair),
            ("7-c 7-d", "2-h 9-s J-c K-h Q-d", HandCategory::Pair),
            ("7-c 3-d", "2-h 9-s J-c K-h Q-d", HandCategory::HighCard),
        ];
        for (hole, board, want) in cases {
            assert_eq!(cat(hole, board), want, "{hole} | {board}");
        }
    }

    #[test]
    fn whole_set_counting_quirks() {
        // two sets of trips and no pair is not a full house here
        assert_eq!(cat("9-s 9-c", "9-h 2-s 2-c 2-h Q-d"), HandCategory::ThreeOfAKind);
        // three pairs are not "exactly two pairs"
        assert_eq!(cat("7-c 7-d", "9-h 9-s 4-c 4-h Q-d"), HandCategory::Pair);
        // flush and straight from different cards still count as a straight flush
        assert_eq!(
            cat("2-h 3-h", "4-c 5-h 6-s 9-h K-h"),
            HandCategory::StraightFlush
        );
    }

    #[test]
    fn short_sets_never_make_straights_or_flushes() {
        assert_eq!(cat("A-s K-s", ""), HandCategory::HighCard);
        assert_eq!(cat("A-s A-h", ""), HandCategory::Pair);
        assert_eq!(cat("T-s J-s", "Q-s K-s"), HandCategory::HighCard);
    }

    #[test]
    fn contract_errors() {
        let one = [Card::new(Rank::Ace, Suit::Spades)];
        assert_eq!(
            classify(&one, &[]),
            Err(ContractError::HoleCards { found: 1 })
        );
        let deck = full_deck();
        assert_eq!(
            classify(&deck[..2], &deck[2..8]),
            Err(ContractError::CommunityCards { found: 6 })
        );
    }

    #[test]
    fn total_over_random_sets() {
        let mut rng = SmallRng::seed_from_u64(5);
        let mut deck = full_deck();
        for n in 3..=5 {
            for _ in 0..500 {
                deck.shuffle(&mut rng);
                let h = classify(&deck[..2], &deck[2..2 + n]).unwrap();
                assert_eq!(h.cards().len(), 2 + n);
                assert!((1..=10).contains(&h.order()));
            }
        }
    }
}
