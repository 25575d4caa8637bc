//! Card types (Suit/Rank/Card) and their text form.
//!
//! Small `Copy` enums that compile down to integer operations. Ranks carry
//! their poker value directly (Two = 2 .. Ace = 14).

use std::fmt;
use std::str::FromStr;

use crate::error::ContractError;

/// A playing card suit. Suits never contribute a numeric value.
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Suit {
    Hearts = 0,
    Diamonds = 1,
    Clubs = 2,
    Spades = 3,
}

impl Suit {
    /// Deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[inline(always)]
    pub const fn idx(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hearts" | "h" => Ok(Suit::Hearts),
            "diamonds" | "d" => Ok(Suit::Diamonds),
            "clubs" | "c" => Ok(Suit::Clubs),
            "spades" | "s" => Ok(Suit::Spades),
            _ => Err(ContractError::UnknownSuit(s.to_string())),
        }
    }
}

/// A playing card rank, valued 2..14 (Ace high).
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value 2..14.
    #[inline(always)]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Bit index 0..12 (Two..Ace), the natural 13-bit mask position.
    #[inline(always)]
    pub const fn idx(self) -> u8 {
        self as u8 - 2
    }

    pub const fn symbol(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Rank {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "T" | "10" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(ContractError::UnknownRank(s.to_string())),
        }
    }
}

/// A card = rank + suit. Equality is by (rank, suit).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    #[inline(always)]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[inline(always)]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    #[inline(always)]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// 0..51 id, suit-major: suit * 13 + rank index.
    #[inline(always)]
    pub const fn id(self) -> u8 {
        (self.suit as u8) * 13 + self.rank.idx()
    }
}

/// `T-hearts` style: rank symbol, dash, suit name.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (rank, suit) = s
            .split_once('-')
            .ok_or_else(|| ContractError::MalformedCard(s.to_string()))?;
        Ok(Card::new(rank.parse()?, suit.parse()?))
    }
}

/// Parse a list of cards separated by whitespace and/or commas.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, ContractError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

/// Parse exactly two hole cards.
pub fn parse_hole_cards(s: &str) -> Result<[Card; 2], ContractError> {
    match parse_cards(s)?.as_slice() {
        &[a, b] => Ok([a, b]),
        other => Err(ContractError::HoleCards { found: other.len() }),
    }
}
