use crate::{
    model::{expectation, expectation_variance, g, ScoreConvention},
    Error, MatchSet,
};

/// Aggregate of one rating period's games, seen from a player with internal
/// rating `mu`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Estimate {
    /// Estimated variance `v` of the rating based only on game outcomes.
    pub variance: f64,
    /// `Σ g(phi_j)·(s_j - E_j)`.
    pub improvement_sum: f64,
}

impl Estimate {
    pub fn new(mu: f64, games: &MatchSet, convention: ScoreConvention) -> Result<Estimate, Error> {
        if games.is_empty() {
            return Err(Error::NoOpponents);
        }

        let mut information = 0.0;
        let mut improvement_sum = 0.0;
        for &(opponent, score) in games {
            let weight = g(opponent.phi);
            let expected = expectation(mu, opponent.mu, opponent.phi, convention);
            information += weight * weight * expectation_variance(mu, opponent.mu, opponent.phi);
            improvement_sum += weight * (score.value() - expected);
        }

        let variance = 1.0 / information;
        if !variance.is_finite() {
            return Err(Error::InvalidState("rating difference too large to estimate variance"));
        }

        Ok(Estimate {
            variance,
            improvement_sum,
        })
    }

    /// Estimated improvement `delta` in rating.
    #[inline]
    pub fn improvement(&self) -> f64 {
        self.variance * self.improvement_sum
    }
}
