use crate::{internal_rating::Q, Error};

/// Number representing playing strength on the public scale, centered at
/// `1500`. Higher is better.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RatingScalar(pub f64);

impl From<RatingScalar> for f64 {
    #[inline]
    fn from(RatingScalar(rating): RatingScalar) -> f64 {
        rating
    }
}

impl From<f64> for RatingScalar {
    #[inline]
    fn from(rating: f64) -> RatingScalar {
        RatingScalar(rating)
    }
}

/// A difference between two ratings, also used for the rating deviation.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RatingDifference(pub f64);

impl From<RatingDifference> for f64 {
    #[inline]
    fn from(RatingDifference(difference): RatingDifference) -> f64 {
        difference
    }
}

impl From<f64> for RatingDifference {
    #[inline]
    fn from(difference: f64) -> RatingDifference {
        RatingDifference(difference)
    }
}

/// Number representing the degree of expected fluctuation in a rating.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Volatility(pub f64);

impl Volatility {
    #[inline]
    pub(crate) fn sq(self) -> f64 {
        self.0 * self.0
    }
}

impl From<Volatility> for f64 {
    #[inline]
    fn from(Volatility(volatility): Volatility) -> f64 {
        volatility
    }
}

impl From<f64> for Volatility {
    #[inline]
    fn from(volatility: f64) -> Volatility {
        Volatility(volatility)
    }
}

/// The rating state of a single competitor on the public scale.
///
/// A rating period never modifies a `Rating` in place.
/// [`RatingSystem::update()`](crate::RatingSystem::update) returns a
/// replacement with all three fields recomputed together.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rating {
    /// Number indicating playing strength. Higher is better. The difference
    /// between two ratings determines the expected score in a game between
    /// the two players.
    pub rating: RatingScalar,
    /// Uncertainty in the rating. A range from rating minus twice the deviation
    /// to rating plus twice the deviation approximately represents a 95%
    /// confidence interval.
    pub deviation: RatingDifference,
    /// Number indicating the degree of expected fluctuation in the rating.
    pub volatility: Volatility,
}

impl Rating {
    pub fn new(rating: f64, deviation: f64, volatility: f64) -> Rating {
        Rating {
            rating: RatingScalar(rating),
            deviation: RatingDifference(deviation),
            volatility: Volatility(volatility),
        }
    }

    /// Checks that all fields are finite and that deviation and volatility
    /// are strictly positive. The squares of the internal deviation and of
    /// the volatility must not overflow either.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.rating.0.is_finite() {
            return Err(Error::InvalidState("rating is not finite"));
        }
        let phi = self.deviation.0 * Q;
        if !(phi * phi).is_finite() || self.deviation.0 <= 0.0 {
            return Err(Error::InvalidState("deviation must be positive with a finite square"));
        }
        if !self.volatility.sq().is_finite() || self.volatility.0 <= 0.0 {
            return Err(Error::InvalidState("volatility must be positive with a finite square"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Rating::new(1500.0, 350.0, 0.06).validate().is_ok());
        assert!(Rating::new(-200.0, 1e-9, 1e-9).validate().is_ok());
        assert!(Rating::new(1500.0, 1e150, 1e150).validate().is_ok());
        assert!(Rating::new(1500.0, 350.0, 1e-300).validate().is_ok());

        for bad in [
            Rating::new(1500.0, 0.0, 0.06),
            Rating::new(1500.0, -1.0, 0.06),
            Rating::new(1500.0, 350.0, 0.0),
            Rating::new(1500.0, 350.0, -0.06),
            Rating::new(f64::NAN, 350.0, 0.06),
            Rating::new(f64::INFINITY, 350.0, 0.06),
            Rating::new(1500.0, f64::INFINITY, 0.06),
            Rating::new(1500.0, 350.0, f64::NAN),
            Rating::new(1500.0, 1e160, 0.06),
            Rating::new(1500.0, 350.0, 1e160),
        ] {
            assert!(
                matches!(bad.validate(), Err(Error::InvalidState(_))),
                "{bad:?}"
            );
        }
    }
}
