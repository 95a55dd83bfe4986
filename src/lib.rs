//! Glicko-2 rating updates for a single competitor and a single rating
//! period.
//!
//! ```
//! use glicko2_period::{MatchSet, Opponent, Rating, RatingSystem, Score};
//!
//! let rating_system = RatingSystem::new();
//!
//! let games = MatchSet::zip(
//!     &[
//!         Opponent::from_rating(&Rating::new(1400.0, 30.0, 0.06)),
//!         Opponent::from_rating(&Rating::new(1550.0, 100.0, 0.06)),
//!         Opponent::from_rating(&Rating::new(1700.0, 300.0, 0.06)),
//!     ],
//!     &[Score::WIN, Score::LOSS, Score::LOSS],
//! )?;
//!
//! let rating = rating_system.update(&Rating::new(1500.0, 200.0, 0.06), &games)?;
//! assert!((f64::from(rating.rating) - 1464.06).abs() < 0.05);
//! assert!((f64::from(rating.deviation) - 151.52).abs() < 0.05);
//! # Ok::<_, glicko2_period::Error>(())
//! ```
//!
//! Opponents are given on the internal Glicko-2 scale. Use
//! [`Opponent::from_rating()`] to convert from the public scale.

mod error;
mod estimate;
mod internal_rating;
mod match_set;
mod model;
mod rating;
mod rating_system;
mod score;
mod volatility;

pub use error::Error;
pub use internal_rating::{Q, RATING_CENTER};
pub use match_set::{MatchSet, Opponent};
pub use model::ScoreConvention;
pub use rating::{Rating, RatingDifference, RatingScalar, Volatility};
pub use rating_system::{RatingSystem, RatingSystemBuilder};
pub use score::Score;
