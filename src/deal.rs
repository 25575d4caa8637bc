//! Random dealing helpers for setting up scenarios.
//!
//! All helpers draw from a freshly shuffled full deck using the caller's RNG,
//! so a seeded RNG gives reproducible deals.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, Rank};
use crate::deck::full_deck;

/// A heads-up deal: both hole pairs and a complete board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deal {
    pub player: [Card; 2],
    pub opponent: [Card; 2],
    pub community: [Card; 5],
}

fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = full_deck();
    deck.shuffle(rng);
    deck
}

/// Deal two hole pairs and five community cards from one shuffled deck.
pub fn deal_game<R: Rng + ?Sized>(rng: &mut R) -> Deal {
    let d = shuffled(rng);
    Deal {
        player: [d[0], d[1]],
        opponent: [d[2], d[3]],
        community: [d[4], d[5], d[6], d[7], d[8]],
    }
}

/// `n` distinct random cards (at most 52).
pub fn deal_random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Card> {
    let mut d = shuffled(rng);
    d.truncate(n);
    d
}

/// Two cards of the same suit.
pub fn deal_suited<R: Rng + ?Sized>(rng: &mut R) -> [Card; 2] {
    loop {
        let d = shuffled(rng);
        if d[0].suit == d[1].suit {
            return [d[0], d[1]];
        }
    }
}

/// Two cards of different suits.
pub fn deal_offsuit<R: Rng + ?Sized>(rng: &mut R) -> [Card; 2] {
    loop {
        let d = shuffled(rng);
        if d[0].suit != d[1].suit {
            return [d[0], d[1]];
        }
    }
}

/// A pocket pair: the first rank to repeat in a shuffled deck.
pub fn deal_paired<R: Rng + ?Sized>(rng: &mut R) -> [Card; 2] {
    let d = shuffled(rng);
    let mut first: [Option<Card>; 13] = [None; 13];
    for &c in &d {
        match first[c.rank.idx() as usize] {
            Some(p) => return [p, c],
            None => first[c.rank.idx() as usize] = Some(c),
        }
    }
    [d[0], d[1]]
}

const STRONG_CONNECTORS: [(Rank, Rank); 4] = [
    (Rank::Ten, Rank::Jack),
    (Rank::Jack, Rank::Queen),
    (Rank::Queen, Rank::King),
    (Rank::King, Rank::Ace),
];

fn is_strong(a: Card, b: Card) -> bool {
    if a.rank == b.rank {
        return true;
    }
    a.suit == b.suit
        && STRONG_CONNECTORS
            .iter()
            .any(|&(x, y)| (a.rank == x && b.rank == y) || (a.rank == y && b.rank == x))
}

fn is_weak(a: Card, b: Card) -> bool {
    a.rank != b.rank && a.suit != b.suit && a.rank.value().abs_diff(b.rank.value()) != 1
}

/// First adjacent pair in a shuffled deck that `accept`s; reshuffles when none does.
fn first_adjacent<R: Rng + ?Sized>(rng: &mut R, accept: fn(Card, Card) -> bool) -> [Card; 2] {
    loop {
        let d = shuffled(rng);
        if let Some(w) = d.windows(2).find(|w| accept(w[0], w[1])) {
            return [w[0], w[1]];
        }
    }
}

/// A pocket pair or a suited T-J, J-Q, Q-K or K-A connector.
pub fn deal_strong<R: Rng + ?Sized>(rng: &mut R) -> [Card; 2] {
    first_adjacent(rng, is_strong)
}

/// Neither paired, suited, nor connected.
pub fn deal_weak<R: Rng + ?Sized>(rng: &mut R) -> [Card; 2] {
    first_adjacent(rng, is_weak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::verify_unique;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn game_deal_has_no_duplicates() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let g = deal_game(&mut rng);
            assert!(verify_unique(&g.player, &g.opponent, &g.community));
        }
    }

    #[test]
    fn seeded_deals_repeat() {
        let a = deal_game(&mut SmallRng::seed_from_u64(11));
        let b = deal_game(&mut SmallRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn random_amount() {
        let mut rng = SmallRng::seed_from_u64(3);
        assert_eq!(deal_random(7, &mut rng).len(), 7);
        assert_eq!(deal_random(60, &mut rng).len(), 52);
    }

    #[test]
    fn hand_shapes() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..50 {
            let [a, b] = deal_suited(&mut rng);
            assert_eq!(a.suit, b.suit);

            let [a, b] = deal_offsuit(&mut rng);
            assert_ne!(a.suit, b.suit);

            let [a, b] = deal_paired(&mut rng);
            assert_eq!(a.rank, b.rank);
            assert_ne!(a, b);

            let [a, b] = deal_strong(&mut rng);
            assert!(is_strong(a, b));

            let [a, b] = deal_weak(&mut rng);
            assert!(is_weak(a, b));
        }
    }
}
