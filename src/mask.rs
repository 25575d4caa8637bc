//! 4x13 card mask (one 13-bit rank mask per suit) and 13-bit lookup tables.
//!
//! - `popcnt13(mask)`       -> number of set ranks
//! - `hibit13(mask)`        -> highest set rank index (0..12) or -1
//! - `straight_top13(mask)` -> top rank index of the best straight or -1;
//!                             the wheel A2345 reports 3 (Five-high)

use crate::card::Card;

pub const MASK13: u16 = (1u16 << 13) - 1;

const N: usize = 1 << 13;
const WHEEL: u16 = (1u16 << 12) | 0b1111;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct CardMask {
    suits: [u16; 4],
}

impl CardMask {
    #[inline(always)]
    pub const fn new() -> Self {
        Self { suits: [0; 4] }
    }

    #[inline]
    pub fn from_cards<'a, I: IntoIterator<Item = &'a Card>>(iter: I) -> Self {
        let mut m = Self::new();
        for &c in iter {
            m.add(c);
        }
        m
    }

    /// Returns true if the card was already present.
    #[inline(always)]
    pub fn add(&mut self, card: Card) -> bool {
        let s = card.suit.idx();
        let bit = 1u16 << card.rank.idx();
        let already = self.suits[s] & bit != 0;
        self.suits[s] |= bit;
        already
    }

    #[inline(always)]
    pub const fn suits(&self) -> &[u16; 4] {
        &self.suits
    }

    #[inline(always)]
    pub fn ranks_any(&self) -> u16 {
        self.suits[0] | self.suits[1] | self.suits[2] | self.suits[3]
    }

    /// Ranks held in at least two suits.
    #[inline(always)]
    pub fn ge2(&self) -> u16 {
        let [h0, h1, h2, h3] = self.suits;
        (h0 & h1) | (h0 & h2) | (h0 & h3) | (h1 & h2) | (h1 & h3) | (h2 & h3)
    }

    #[inline(always)]
    pub fn ge3(&self) -> u16 {
        let [h0, h1, h2, h3] = self.suits;
        (h0 & h1 & h2) | (h0 & h1 & h3) | (h0 & h2 & h3) | (h1 & h2 & h3)
    }

    #[inline(always)]
    pub fn ge4(&self) -> u16 {
        let [h0, h1, h2, h3] = self.suits;
        h0 & h1 & h2 & h3
    }
}

const fn hibit_u16(x: u16) -> i8 {
    if x == 0 {
        return -1;
    }
    15 - x.leading_zeros() as i8
}

const fn straight_top_u16(mask: u16) -> i8 {
    // 5-bit windows from the highest start (8, i.e. T-A) down
    let mut s: i8 = 8;
    while s >= 0 {
        let window: u16 = 0b11111 << (s as u16);
        if mask & window == window {
            return s + 4;
        }
        s -= 1;
    }
    if mask & WHEEL == WHEEL {
        return 3;
    }
    -1
}

const fn build_popcnt13() -> [u8; N] {
    let mut arr = [0u8; N];
    let mut i = 0;
    while i < N {
        arr[i] = (i as u16).count_ones() as u8;
        i += 1;
    }
    arr
}

const fn build_hibit13() -> [i8; N] {
    let mut arr = [0i8; N];
    let mut i = 0;
    while i < N {
        arr[i] = hibit_u16(i as u16);
        i += 1;
    }
    arr
}

const fn build_straight_top13() -> [i8; N] {
    let mut arr = [0i8; N];
    let mut i = 0;
    while i < N {
        arr[i] = straight_top_u16(i as u16);
        i += 1;
    }
    arr
}

static POPCNT13: [u8; N] = build_popcnt13();
static HIBIT13: [i8; N] = build_hibit13();
static STRAIGHT_TOP13: [i8; N] = build_straight_top13();

#[inline(always)]
pub fn popcnt13(mask: u16) -> u8 {
    POPCNT13[(mask & MASK13) as usize]
}

#[inline(always)]
pub fn hibit13(mask: u16) -> i8 {
    HIBIT13[(mask & MASK13) as usize]
}

#[inline(always)]
pub fn straight_top13(mask: u16) -> i8 {
    STRAIGHT_TOP13[(mask & MASK13) as usize]
}
