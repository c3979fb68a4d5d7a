use thiserror::Error;

/// Errors raised by store construction and miner configuration.
///
/// All of these are fatal to the run: they are raised before any level is
/// mined and nothing partial is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MiningError {
    #[error("minimum support count must be at least 1")]
    ZeroSupportCount,

    #[error("minimum support fraction must be in (0, 1], got {0}")]
    SupportFractionOutOfRange(f64),

    #[error("maximum itemset size must be at least 1")]
    ZeroMaxSize,

    #[error("transaction {index} is empty")]
    EmptyTransaction { index: usize },

    #[error("transaction {index} contains duplicate item {item:?}")]
    DuplicateItem { index: usize, item: String },
}

pub type Result<T> = std::result::Result<T, MiningError>;
