//! Hand categories and their fixed order.

use std::fmt;

/// The ten hand categories, strongest first.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    RoyalFlush = 1,
    StraightFlush = 2,
    FourOfAKind = 3,
    FullHouse = 4,
    Flush = 5,
    Straight = 6,
    ThreeOfAKind = 7,
    TwoPair = 8,
    Pair = 9,
    HighCard = 10,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::RoyalFlush,
        HandCategory::StraightFlush,
        HandCategory::FourOfAKind,
        HandCategory::FullHouse,
        HandCategory::Flush,
        HandCategory::Straight,
        HandCategory::ThreeOfAKind,
        HandCategory::TwoPair,
        HandCategory::Pair,
        HandCategory::HighCard,
    ];

    /// 1 = strongest .. 10 = weakest. Lower order wins.
    #[inline(always)]
    pub const fn order(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandCategory::RoyalFlush => "Royal flush",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::FullHouse => "Full house",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::TwoPair => "Two pair",
            HandCategory::Pair => "One pair",
            HandCategory::HighCard => "High card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_are_one_through_ten() {
        for (i, c) in HandCategory::ALL.iter().enumerate() {
            assert_eq!(c.order() as usize, i + 1);
        }
        assert_eq!(HandCategory::Pair.to_string(), "One pair");
    }
}
