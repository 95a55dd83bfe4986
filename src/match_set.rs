use crate::{internal_rating::InternalRating, Error, Rating, Score};

/// An opponent's rating and deviation on the internal Glicko-2 scale, at the
/// time of the match.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Opponent {
    pub mu: f64,
    pub phi: f64,
}

impl Opponent {
    pub fn new(mu: f64, phi: f64) -> Opponent {
        Opponent { mu, phi }
    }

    /// Converts an opponent rating from the public scale.
    pub fn from_rating(rating: &Rating) -> Opponent {
        let InternalRating { mu, phi } = InternalRating::from(rating);
        Opponent { mu, phi }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.mu.is_finite() && self.phi.is_finite() {
            Ok(())
        } else {
            Err(Error::InvalidState("opponent rating is not finite"))
        }
    }
}

impl From<&Rating> for Opponent {
    fn from(rating: &Rating) -> Opponent {
        Opponent::from_rating(rating)
    }
}

/// The games of one competitor in one rating period, in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchSet {
    games: Vec<(Opponent, Score)>,
}

impl MatchSet {
    pub fn new() -> MatchSet {
        MatchSet::default()
    }

    /// Pairs the `i`-th opponent with the `i`-th score.
    pub fn zip(opponents: &[Opponent], scores: &[Score]) -> Result<MatchSet, Error> {
        if opponents.len() != scores.len() {
            return Err(Error::MismatchedMatchSet {
                opponents: opponents.len(),
                scores: scores.len(),
            });
        }
        Ok(opponents.iter().copied().zip(scores.iter().copied()).collect())
    }

    pub fn push(&mut self, opponent: Opponent, score: Score) {
        self.games.push((opponent, score));
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Opponent, Score)> + '_ {
        self.games.iter()
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        for (opponent, score) in &self.games {
            opponent.validate()?;
            score.validate()?;
        }
        Ok(())
    }
}

impl FromIterator<(Opponent, Score)> for MatchSet {
    fn from_iter<I: IntoIterator<Item = (Opponent, Score)>>(iter: I) -> MatchSet {
        MatchSet {
            games: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Opponent, Score)> for MatchSet {
    fn extend<I: IntoIterator<Item = (Opponent, Score)>>(&mut self, iter: I) {
        self.games.extend(iter);
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a (Opponent, Score);
    type IntoIter = std::slice::Iter<'a, (Opponent, Score)>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip() {
        let opponents = [Opponent::new(0.0, 1.0), Opponent::new(0.5, 0.2)];
        let games = MatchSet::zip(&opponents, &[Score::WIN, Score::DRAW]).unwrap();
        assert_eq!(games.len(), 2);
        let pairs: Vec<_> = games.iter().copied().collect();
        assert_eq!(pairs[0], (Opponent::new(0.0, 1.0), Score::WIN));
        assert_eq!(pairs[1], (Opponent::new(0.5, 0.2), Score::DRAW));
    }

    #[test]
    fn test_zip_mismatched() {
        let opponents = [Opponent::new(0.0, 1.0)];
        assert_eq!(
            MatchSet::zip(&opponents, &[Score::WIN, Score::LOSS]),
            Err(Error::MismatchedMatchSet {
                opponents: 1,
                scores: 2
            })
        );
        assert_eq!(
            MatchSet::zip(&opponents, &[]),
            Err(Error::MismatchedMatchSet {
                opponents: 1,
                scores: 0
            })
        );
    }

    #[test]
    fn test_from_rating() {
        let opponent = Opponent::from_rating(&Rating::new(1500.0 + 173.7178, 173.7178, 0.06));
        assert!((opponent.mu - 1.0).abs() < 1e-6);
        assert!((opponent.phi - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate() {
        let mut games = MatchSet::new();
        games.push(Opponent::new(0.0, 1.0), Score(0.75));
        assert!(games.validate().is_ok());
        games.push(Opponent::new(f64::NAN, 1.0), Score::WIN);
        assert!(matches!(games.validate(), Err(Error::InvalidState(_))));

        let games: MatchSet = [(Opponent::new(0.0, 1.0), Score(2.0))].into_iter().collect();
        assert!(matches!(games.validate(), Err(Error::InvalidState(_))));
    }
}
