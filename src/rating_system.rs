use tracing::debug;

use crate::{
    estimate::Estimate,
    internal_rating::InternalRating,
    model::{expectation, ScoreConvention},
    volatility::VolatilitySolver,
    Error, MatchSet, Opponent, Rating, RatingDifference, RatingScalar, Score, Volatility,
};

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RatingSystemBuilder {
    default_rating: f64,
    default_deviation: f64,
    default_volatility: f64,

    tau: f64,
    convergence_tolerance: f64,
    max_bracket_steps: u32,
    max_iterations: u32,

    score_convention: ScoreConvention,
}

impl Default for RatingSystemBuilder {
    fn default() -> RatingSystemBuilder {
        RatingSystemBuilder::new()
    }
}

impl RatingSystemBuilder {
    pub fn new() -> RatingSystemBuilder {
        RatingSystemBuilder {
            default_rating: 1500.0,
            default_deviation: 350.0,
            default_volatility: 0.06,

            tau: 0.5,
            convergence_tolerance: 1e-6,
            max_bracket_steps: 1000,
            max_iterations: 1000,

            score_convention: ScoreConvention::Standard,
        }
    }

    pub fn default_rating(&mut self, default_rating: f64) -> &mut Self {
        assert!(Rating::new(default_rating, self.default_deviation, self.default_volatility)
            .validate()
            .is_ok());
        self.default_rating = default_rating;
        self
    }

    pub fn default_deviation(&mut self, default_deviation: f64) -> &mut Self {
        assert!(Rating::new(self.default_rating, default_deviation, self.default_volatility)
            .validate()
            .is_ok());
        self.default_deviation = default_deviation;
        self
    }

    pub fn default_volatility(&mut self, default_volatility: f64) -> &mut Self {
        assert!(Rating::new(self.default_rating, self.default_deviation, default_volatility)
            .validate()
            .is_ok());
        self.default_volatility = default_volatility;
        self
    }

    /// Constrains the change in volatility over time. Reasonable choices are
    /// between `0.3` and `1.2`.
    pub fn tau(&mut self, tau: f64) -> &mut Self {
        assert!(tau.is_finite() && tau * tau > 0.0);
        self.tau = tau;
        self
    }

    /// Width of the bracket around `ln(sigma'^2)` at which the volatility
    /// solver stops.
    pub fn convergence_tolerance(&mut self, convergence_tolerance: f64) -> &mut Self {
        assert!(convergence_tolerance >= 0.0);
        self.convergence_tolerance = convergence_tolerance;
        self
    }

    pub fn max_bracket_steps(&mut self, max_bracket_steps: u32) -> &mut Self {
        assert!(max_bracket_steps > 0);
        self.max_bracket_steps = max_bracket_steps;
        self
    }

    pub fn max_iterations(&mut self, max_iterations: u32) -> &mut Self {
        assert!(max_iterations > 0);
        self.max_iterations = max_iterations;
        self
    }

    pub fn score_convention(&mut self, score_convention: ScoreConvention) -> &mut Self {
        self.score_convention = score_convention;
        self
    }

    /// Checks the same constraints as the setters, for builders that were
    /// deserialized instead of assembled with the setters.
    pub fn check(&self) -> Result<(), Error> {
        Rating::new(
            self.default_rating,
            self.default_deviation,
            self.default_volatility,
        )
        .validate()
        .map_err(|_| Error::InvalidConfig("default rating is not a valid rating"))?;
        if !(self.tau.is_finite() && self.tau * self.tau > 0.0) {
            return Err(Error::InvalidConfig("tau must be finite and positive"));
        }
        if self.convergence_tolerance.is_nan() || self.convergence_tolerance < 0.0 {
            return Err(Error::InvalidConfig("convergence tolerance must not be negative"));
        }
        if self.max_bracket_steps == 0 {
            return Err(Error::InvalidConfig("max bracket steps must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfig("max iterations must be positive"));
        }
        Ok(())
    }

    pub fn build(&self) -> RatingSystem {
        RatingSystem {
            default_rating: self.default_rating,
            default_deviation: self.default_deviation,
            default_volatility: self.default_volatility,

            tau: self.tau,
            convergence_tolerance: self.convergence_tolerance,
            max_bracket_steps: self.max_bracket_steps,
            max_iterations: self.max_iterations,

            score_convention: self.score_convention,
        }
    }
}

/// Glicko-2 parameters. Updates one competitor at a time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RatingSystemBuilder"))]
pub struct RatingSystem {
    default_rating: f64,
    default_deviation: f64,
    default_volatility: f64,

    tau: f64,
    convergence_tolerance: f64,
    max_bracket_steps: u32,
    max_iterations: u32,

    score_convention: ScoreConvention,
}

impl Default for RatingSystem {
    fn default() -> RatingSystem {
        RatingSystem::new()
    }
}

impl TryFrom<RatingSystemBuilder> for RatingSystem {
    type Error = Error;

    fn try_from(builder: RatingSystemBuilder) -> Result<RatingSystem, Error> {
        builder.check()?;
        Ok(builder.build())
    }
}

impl RatingSystem {
    pub fn builder() -> RatingSystemBuilder {
        RatingSystemBuilder::default()
    }

    pub fn new() -> RatingSystem {
        RatingSystem::builder().build()
    }

    /// Rating for a new competitor.
    pub fn new_rating(&self) -> Rating {
        Rating {
            rating: RatingScalar(self.default_rating),
            deviation: RatingDifference(self.default_deviation),
            volatility: Volatility(self.default_volatility),
        }
    }

    pub fn default_rating(&self) -> f64 {
        self.default_rating
    }

    pub fn default_deviation(&self) -> f64 {
        self.default_deviation
    }

    pub fn default_volatility(&self) -> f64 {
        self.default_volatility
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn convergence_tolerance(&self) -> f64 {
        self.convergence_tolerance
    }

    pub fn max_bracket_steps(&self) -> u32 {
        self.max_bracket_steps
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn score_convention(&self) -> ScoreConvention {
        self.score_convention
    }

    /// Expected score of `first` in a game against `second`.
    pub fn expected_score(&self, first: &Rating, second: &Rating) -> Score {
        let first = InternalRating::from(first);
        let second = InternalRating::from(second);
        Score(expectation(
            first.mu,
            second.mu,
            second.phi,
            self.score_convention,
        ))
    }

    /// Computes the rating of a competitor after a rating period with the
    /// given games.
    ///
    /// All games are evaluated against the rating at the start of the
    /// period. Fails with [`Error::NoOpponents`] if `games` is empty, see
    /// [`RatingSystem::skip_period()`] for that case.
    pub fn update(&self, rating: &Rating, games: &MatchSet) -> Result<Rating, Error> {
        rating.validate()?;
        games.validate()?;

        let InternalRating { mu, phi } = InternalRating::from(rating);

        let estimate = Estimate::new(mu, games, self.score_convention)?;
        let delta = estimate.improvement();
        debug!(
            games = games.len(),
            variance = estimate.variance,
            delta,
            "estimated rating period"
        );

        let volatility = self.volatility_solver().solve(
            phi,
            estimate.variance,
            delta,
            rating.volatility.0,
        )?;

        let phi_star_sq = phi * phi + volatility * volatility;
        let phi = 1.0 / (1.0 / phi_star_sq + 1.0 / estimate.variance).sqrt();
        let mu = mu + phi * phi * estimate.improvement_sum;

        let (rating, deviation) = InternalRating { mu, phi }.to_public();
        debug!(
            rating = rating.0,
            deviation = deviation.0,
            volatility,
            "updated rating"
        );

        Ok(Rating {
            rating,
            deviation,
            volatility: Volatility(volatility),
        })
    }

    /// Like [`RatingSystem::update()`], with the `i`-th opponent paired with
    /// the `i`-th score.
    pub fn update_with(
        &self,
        rating: &Rating,
        opponents: &[Opponent],
        scores: &[Score],
    ) -> Result<Rating, Error> {
        rating.validate()?;
        self.update(rating, &MatchSet::zip(opponents, scores)?)
    }

    /// Computes the rating of a competitor who did not play in a rating
    /// period. The rating and volatility stay the same, while the deviation
    /// grows by the volatility.
    pub fn skip_period(&self, rating: &Rating) -> Result<Rating, Error> {
        rating.validate()?;

        let internal = InternalRating::from(rating);
        let phi = (internal.phi * internal.phi + rating.volatility.sq()).sqrt();
        let (_, deviation) = InternalRating { phi, ..internal }.to_public();

        Ok(Rating {
            deviation,
            ..rating.clone()
        })
    }

    fn volatility_solver(&self) -> VolatilitySolver {
        VolatilitySolver {
            tau: self.tau,
            convergence_tolerance: self.convergence_tolerance,
            max_bracket_steps: self.max_bracket_steps,
            max_iterations: self.max_iterations,
        }
    }
}
