use crate::rating::{Rating, RatingDifference, RatingScalar};

/// Public rating that maps to `0.0` on the internal scale.
pub const RATING_CENTER: f64 = 1500.0;

/// Factor from public rating points to the internal Glicko-2 scale,
/// `ln(10) / 400`. Its inverse is approximately `173.7178`.
pub const Q: f64 = std::f64::consts::LN_10 / 400.0;

/// Rating and deviation on the internal Glicko-2 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct InternalRating {
    pub mu: f64,
    pub phi: f64,
}

impl From<&Rating> for InternalRating {
    #[inline]
    fn from(rating: &Rating) -> InternalRating {
        InternalRating {
            mu: (rating.rating.0 - RATING_CENTER) * Q,
            phi: rating.deviation.0 * Q,
        }
    }
}

impl InternalRating {
    #[inline]
    pub fn to_public(self) -> (RatingScalar, RatingDifference) {
        (
            RatingScalar(self.mu / Q + RATING_CENTER),
            RatingDifference(self.phi / Q),
        )
    }
}
