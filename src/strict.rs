//! Best-five-card scoring for the strict showdown mode.
//!
//! Packs the strongest five-card hand found in the set into a `u32` where
//! a larger value is a better hand:
//!
//! bits 20..23 : strength (10 - category order; RoyalFlush = 9, HighCard = 0)
//! bits 16..19 : r0
//! bits 12..15 : r1
//! bits  8..11 : r2
//! bits  4..7  : r3
//! bits  0..3  : r4
//!
//! Each r* is a rank index (0..12), most significant first. Unused slots are 0.

use crate::card::Card;
use crate::category::HandCategory;
use crate::mask::{hibit13, popcnt13, straight_top13, CardMask};

#[repr(transparent)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Score(pub u32);

impl Score {
    fn pack(cat: HandCategory, r: [u8; 5]) -> Self {
        let strength = (10 - cat.order()) as u32;
        Score(
            (strength << 20)
                | ((r[0] as u32) << 16)
                | ((r[1] as u32) << 12)
                | ((r[2] as u32) << 8)
                | ((r[3] as u32) << 4)
                | (r[4] as u32 & 0xF),
        )
    }

    #[cfg(test)]
    pub(crate) fn category(self) -> HandCategory {
        let order = 10 - ((self.0 >> 20) & 0xF).min(9) as u8;
        HandCategory::ALL[order as usize - 1]
    }
}

/// Up to `n` highest rank indices of `m`, high to low, zero-filled.
#[inline(always)]
fn top_ranks<const K: usize>(mut m: u16, n: usize) -> [u8; K] {
    let mut out = [0u8; K];
    for slot in out.iter_mut().take(n) {
        let hi = hibit13(m);
        if hi < 0 {
            break;
        }
        *slot = hi as u8;
        m &= !(1u16 << hi as u16);
    }
    out
}

#[inline(always)]
fn without(m: u16, idx: u8) -> u16 {
    m & !(1u16 << idx)
}

/// Score the best five-card hand in `cards` (any size; fewer than five
/// cards never make a straight or flush).
pub fn score(cards: &[Card]) -> Score {
    let mask = CardMask::from_cards(cards);
    let suits = mask.suits();
    let ranks = mask.ranks_any();
    let ge4 = mask.ge4();
    let ge3 = mask.ge3();
    let ge2 = mask.ge2();

    let best_sf = suits
        .iter()
        .filter(|&&s| popcnt13(s) >= 5)
        .map(|&s| straight_top13(s))
        .max()
        .unwrap_or(-1);
    if best_sf == 12 {
        return Score::pack(HandCategory::RoyalFlush, [12, 0, 0, 0, 0]);
    }
    if best_sf >= 0 {
        return Score::pack(HandCategory::StraightFlush, [best_sf as u8, 0, 0, 0, 0]);
    }

    if ge4 != 0 {
        let q = hibit13(ge4) as u8;
        let [k] = top_ranks::<1>(without(ranks, q), 1);
        return Score::pack(HandCategory::FourOfAKind, [q, k, 0, 0, 0]);
    }

    // trips plus a pair, where a second set of trips also supplies the pair
    let trips = ge3 & !ge4;
    if trips != 0 {
        let t = hibit13(trips) as u8;
        let p = hibit13(without(ge2, t));
        if p >= 0 {
            return Score::pack(HandCategory::FullHouse, [t, p as u8, 0, 0, 0]);
        }
    }

    if let Some(&f) = suits.iter().find(|&&s| popcnt13(s) >= 5) {
        return Score::pack(HandCategory::Flush, top_ranks::<5>(f, 5));
    }

    let st = straight_top13(ranks);
    if st >= 0 {
        return Score::pack(HandCategory::Straight, [st as u8, 0, 0, 0, 0]);
    }

    if trips != 0 {
        let t = hibit13(trips) as u8;
        let [k1, k2] = top_ranks::<2>(without(ranks, t), 2);
        return Score::pack(HandCategory::ThreeOfAKind, [t, k1, k2, 0, 0]);
    }

    let pairs = ge2 & !ge3;
    if popcnt13(pairs) >= 2 {
        let [p1, p2] = top_ranks::<2>(pairs, 2);
        let [k] = top_ranks::<1>(without(without(ranks, p1), p2), 1);
        return Score::pack(HandCategory::TwoPair, [p1, p2, k, 0, 0]);
    }

    if pairs != 0 {
        let p = hibit13(pairs) as u8;
        let [k1, k2, k3] = top_ranks::<3>(without(ranks, p), 3);
        return Score::pack(HandCategory::Pair, [p, k1, k2, k3, 0]);
    }

    Score::pack(HandCategory::HighCard, top_ranks::<5>(ranks, 5))
}
