use thiserror::Error;

use crate::card::Card;

/// Invalid input handed to the engine by a caller.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ContractError {
    #[error("expected exactly 2 hole cards, found {found}")]
    HoleCards { found: usize },

    #[error("unsupported community card count: {found}")]
    CommunityCards { found: usize },

    #[error("card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("unknown rank: {0:?}")]
    UnknownRank(String),

    #[error("unknown suit: {0:?}")]
    UnknownSuit(String),

    #[error("malformed card: {0:?} (expected e.g. \"T-hearts\")")]
    MalformedCard(String),
}
