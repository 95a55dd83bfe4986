use crate::Error;

/// A score or expectation value in the range `0.0..=1.0`, where `0.0` is a
/// loss and `1.0` is a win.
///
/// Fractional scores other than [`Score::DRAW`] are accepted and enter the
/// update arithmetically.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Score(pub f64);

impl From<Score> for f64 {
    fn from(Score(score): Score) -> f64 {
        score
    }
}

impl From<f64> for Score {
    fn from(score: f64) -> Score {
        Score(score)
    }
}

impl Score {
    pub const LOSS: Score = Score(0.0);
    pub const DRAW: Score = Score(0.5);
    pub const WIN: Score = Score(1.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub(crate) fn validate(self) -> Result<(), Error> {
        if (0.0..=1.0).contains(&self.0) {
            Ok(())
        } else {
            Err(Error::InvalidState("score must be in 0.0..=1.0"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(Score::LOSS.validate().is_ok());
        assert!(Score(0.3).validate().is_ok());
        assert!(Score::WIN.validate().is_ok());
        assert!(Score(-0.1).validate().is_err());
        assert!(Score(1.5).validate().is_err());
        assert!(Score(f64::NAN).validate().is_err());
    }
}
