//! Heads-up equity estimation over the unknown community cards.
//!
//! Every completion of the board is a size-`5 - known` combination of the
//! cards nobody holds. The estimator picks a uniform sample of at most
//! `sample_cap` distinct completions, classifies both hands on each full
//! board, compares them and tallies the outcomes.

use std::ops::{Add, AddAssign};

use rand::rngs::SmallRng;
use rand::seq::{index, SliceRandom};
use rand::SeedableRng;

use crate::card::Card;
use crate::classify::classify;
use crate::compare::{compare_with, HandResult};
use crate::config::{EstimatorConfig, Sampling};
use crate::deck::{ensure_unique, full_deck, remove_known};
use crate::error::ContractError;

/// Raw outcome tallies. Every sampled completion lands in exactly one field.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityCounts {
    pub player_wins: u64,
    pub opponent_wins: u64,
    pub splits: u64,
    pub errors: u64,
}

impl EquityCounts {
    #[inline(always)]
    pub fn sampled(&self) -> u64 {
        self.player_wins + self.opponent_wins + self.splits + self.errors
    }

    /// Completions that produced an outcome, floored at 1.
    #[inline(always)]
    pub fn valid(&self) -> u64 {
        (self.sampled() - self.errors).max(1)
    }

    #[inline(always)]
    pub fn record(&mut self, outcome: HandResult) {
        match outcome {
            HandResult::Victory => self.player_wins += 1,
            HandResult::Loss => self.opponent_wins += 1,
            HandResult::Split => self.splits += 1,
            HandResult::Error => self.errors += 1,
        }
    }
}

impl Add for EquityCounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            player_wins: self.player_wins + rhs.player_wins,
            opponent_wins: self.opponent_wins + rhs.opponent_wins,
            splits: self.splits + rhs.splits,
            errors: self.errors + rhs.errors,
        }
    }
}

impl AddAssign for EquityCounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Percentages in [0, 100]. Splits count half for each side, so
/// `player_odds + opponent_odds` is 100 whenever at least one completion
/// was valid.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    pub player_odds: f64,
    pub opponent_odds: f64,
    /// Share of valid completions that split.
    pub split_odds: f64,
    pub counts: EquityCounts,
}

impl From<EquityCounts> for EquityResult {
    fn from(counts: EquityCounts) -> Self {
        let valid = counts.valid() as f64;
        let half = counts.splits as f64 / 2.0;
        Self {
            player_odds: (counts.player_wins as f64 + half) / valid * 100.0,
            opponent_odds: (counts.opponent_wins as f64 + half) / valid * 100.0,
            split_odds: counts.splits as f64 / valid * 100.0,
            counts,
        }
    }
}

/// Indices (ascending) into the remaining deck making up one board completion.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
struct Completion {
    idx: [u8; 5],
    len: u8,
}

impl Completion {
    #[inline(always)]
    fn push(&mut self, i: u8) {
        self.idx[self.len as usize] = i;
        self.len += 1;
    }

    #[inline(always)]
    fn pop(&mut self) {
        self.len -= 1;
    }

    #[inline(always)]
    fn indices(&self) -> &[u8] {
        &self.idx[..self.len as usize]
    }
}

/// C(n, k); 0 when k > n. Exact for n <= 64.
pub(crate) fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    // acc is C(n, i) before each step, so acc * (n - i) stays far below u128::MAX
    let c = (0..k).fold(1u128, |acc, i| acc * (n - i) as u128 / (i + 1) as u128);
    c as u64
}

/// Every size-`k` combination of `0..n`, in lexicographic order.
fn all_combinations(n: usize, k: usize) -> Vec<Completion> {
    fn generate(n: usize, k: usize, start: usize, cur: &mut Completion, out: &mut Vec<Completion>) {
        if cur.len as usize == k {
            out.push(*cur);
            return;
        }
        for i in start..n {
            cur.push(i as u8);
            generate(n, k, i + 1, cur, out);
            cur.pop();
        }
    }
    let mut out = Vec::with_capacity(binomial(n, k) as usize);
    generate(n, k, 0, &mut Completion::default(), &mut out);
    out
}

/// The `rank`-th (lexicographic) size-`k` combination of `0..n`.
fn unrank(mut rank: u64, n: usize, k: usize) -> Completion {
    let mut c = Completion::default();
    let mut next = 0usize;
    for slot in 0..k {
        let left = k - slot - 1;
        loop {
            let starting_here = binomial(n - next - 1, left);
            if rank < starting_here {
                break;
            }
            rank -= starting_here;
            next += 1;
        }
        c.push(next as u8);
        next += 1;
    }
    c
}

/// A validated scenario with its completions chosen.
struct Runout<'a> {
    own: &'a [Card],
    opponent: &'a [Card],
    known: &'a [Card],
    remaining: Vec<Card>,
    completions: Vec<Completion>,
}

#[derive(Clone, Debug, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimate win/loss/split percentages for `own` against `opponent`
    /// given 0, 3, 4 or 5 known community cards.
    pub fn estimate(
        &self,
        own: &[Card],
        opponent: &[Card],
        known: &[Card],
    ) -> Result<EquityResult, ContractError> {
        let runout = self.prepare(own, opponent, known)?;
        let counts = runout
            .completions
            .iter()
            .map(|c| self.showdown(&runout, c))
            .fold(EquityCounts::default(), |mut acc, r| {
                acc.record(r);
                acc
            });
        Ok(self.finish(counts))
    }

    /// Same sample as [`Estimator::estimate`], evaluated on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn estimate_par(
        &self,
        own: &[Card],
        opponent: &[Card],
        known: &[Card],
    ) -> Result<EquityResult, ContractError> {
        use rayon::prelude::*;

        let runout = self.prepare(own, opponent, known)?;
        let counts = runout
            .completions
            .par_iter()
            .map(|c| self.showdown(&runout, c))
            .fold(EquityCounts::default, |mut acc, r| {
                acc.record(r);
                acc
            })
            .reduce(EquityCounts::default, Add::add);
        Ok(self.finish(counts))
    }

    fn prepare<'a>(
        &self,
        own: &'a [Card],
        opponent: &'a [Card],
        known: &'a [Card],
    ) -> Result<Runout<'a>, ContractError> {
        for hole in [own, opponent] {
            if hole.len() != 2 {
                return Err(ContractError::HoleCards { found: hole.len() });
            }
        }
        if !matches!(known.len(), 0 | 3 | 4 | 5) {
            return Err(ContractError::CommunityCards { found: known.len() });
        }
        ensure_unique(own.iter().chain(opponent).chain(known))?;

        let used: Vec<Card> = own.iter().chain(opponent).chain(known).copied().collect();
        let remaining = remove_known(&full_deck(), &used);
        let needed = 5 - known.len();

        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        let completions = self.choose(remaining.len(), needed, &mut rng);
        log::debug!(
            "estimating: {} known, {} needed, {} of {} completions",
            known.len(),
            needed,
            completions.len(),
            binomial(remaining.len(), needed)
        );

        Ok(Runout {
            own,
            opponent,
            known,
            remaining,
            completions,
        })
    }

    /// Uniformly chosen distinct completions, at most `sample_cap` of them.
    fn choose(&self, n: usize, k: usize, rng: &mut SmallRng) -> Vec<Completion> {
        let cap = self.config.sample_cap;
        let total = binomial(n, k) as usize;
        match self.config.sampling {
            Sampling::Materialize => {
                let mut all = all_combinations(n, k);
                all.shuffle(rng);
                all.truncate(cap);
                all
            }
            Sampling::Direct if cap >= total => all_combinations(n, k),
            Sampling::Direct => index::sample(rng, total, cap)
                .into_iter()
                .map(|r| unrank(r as u64, n, k))
                .collect(),
        }
    }

    fn showdown(&self, runout: &Runout<'_>, completion: &Completion) -> HandResult {
        let board: Vec<Card> = runout
            .known
            .iter()
            .copied()
            .chain(completion.indices().iter().map(|&i| runout.remaining[i as usize]))
            .collect();
        if board.len() != 5 {
            log::warn!("skipping completion with {} community cards", board.len());
            return HandResult::Error;
        }
        let (Ok(own), Ok(opponent)) = (classify(runout.own, &board), classify(runout.opponent, &board))
        else {
            log::warn!("skipping unclassifiable board {:?}", board);
            return HandResult::Error;
        };
        let result = compare_with(&own, &opponent, self.config.showdown);
        if result == HandResult::Error {
            log::warn!(
                "incomparable hands {} vs {} on {:?}",
                own.category(),
                opponent.category(),
                board
            );
        }
        result
    }

    fn finish(&self, counts: EquityCounts) -> EquityResult {
        log::debug!(
            "tallies: {} player, {} opponent, {} split, {} errors",
            counts.player_wins,
            counts.opponent_wins,
            counts.splits,
            counts.errors
        );
        EquityResult::from(counts)
    }
}

/// Estimate with default settings and the given sample cap.
pub fn estimate(
    own: &[Card],
    opponent: &[Card],
    known: &[Card],
    sample_cap: usize,
) -> Result<EquityResult, ContractError> {
    Estimator::new(EstimatorConfig::default().sample_cap(sample_cap)).estimate(own, opponent, known)
}
