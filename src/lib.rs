//! Heads-up Texas Hold'em hand ranking and equity estimation.

pub mod card;
pub mod category;
pub mod classify;
pub mod compare;
pub mod config;
pub mod deal;
pub mod deck;
pub mod equity;
pub mod error;
pub mod mask;
pub mod strict;

pub use card::{parse_cards, parse_hole_cards, Card, Rank, Suit};
pub use category::HandCategory;
pub use classify::{classify, EvaluatedHand};
pub use compare::{
    compare,
    compare_kickers,
    compare_same_category,
    compare_with,
    HandResult,
    Showdown,
};
pub use config::{EstimatorConfig, Sampling};
pub use deal::{
    deal_game,
    deal_offsuit,
    deal_paired,
    deal_random,
    deal_strong,
    deal_suited,
    deal_weak,
    Deal,
};
pub use deck::{full_deck, remove_known, verify_unique};
pub use equity::{estimate, EquityCounts, EquityResult, Estimator};
pub use error::ContractError;
