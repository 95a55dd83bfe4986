use thiserror::Error;

/// Reasons a rating period update can fail.
///
/// All errors are deterministic for a given input. Retrying with the same
/// input fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Input rejected before any computation, for example a non-positive
    /// deviation or a non-finite value.
    #[error("invalid rating state: {0}")]
    InvalidState(&'static str),
    /// Rating system parameters violate the builder's constraints.
    #[error("invalid rating system configuration: {0}")]
    InvalidConfig(&'static str),
    /// Opponent and score sequences have different lengths.
    #[error("mismatched match set: {opponents} opponents but {scores} scores")]
    MismatchedMatchSet { opponents: usize, scores: usize },
    /// The estimated variance is undefined without any games.
    #[error("no opponents in rating period")]
    NoOpponents,
    /// No lower bound for the volatility root was found.
    #[error("volatility bracket search exceeded {steps} steps")]
    BracketSearchExceeded { steps: u32 },
    /// The Illinois iteration did not reach the convergence tolerance.
    #[error("volatility solver did not converge within {iterations} iterations")]
    SolverDidNotConverge { iterations: u32 },
}
