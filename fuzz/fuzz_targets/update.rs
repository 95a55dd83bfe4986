#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use glicko2_period::{Error, MatchSet, Opponent, Rating, RatingSystem, Score};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ArbitraryRating {
    rating: f64,
    deviation: f64,
    volatility: f64,
}

impl ArbitraryRating {
    fn into_clamped(self) -> Option<Rating> {
        if self.rating.is_nan() || self.deviation.is_nan() || self.volatility.is_nan() {
            None
        } else {
            Some(Rating::new(
                self.rating.clamp(-10000.0, 10000.0),
                self.deviation.clamp(1e-3, 1000.0),
                self.volatility.clamp(f64::MIN_POSITIVE, 1.0),
            ))
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Period {
    player: ArbitraryRating,
    games: Vec<(ArbitraryRating, f64)>,
}

fn assert_rating(rating: &Rating) {
    assert!(f64::from(rating.rating).is_finite());
    assert!(f64::from(rating.deviation) > 0.0);
    assert!(f64::from(rating.volatility) > 0.0);
}

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(period) = Period::arbitrary(&mut u) else {
        return;
    };
    let Some(player) = period.player.into_clamped() else {
        return;
    };

    let mut games = MatchSet::new();
    for (opponent, score) in period.games {
        let Some(opponent) = opponent.into_clamped() else {
            return;
        };
        if score.is_nan() {
            return;
        }
        games.push(Opponent::from_rating(&opponent), Score(score.clamp(0.0, 1.0)));
    }

    let rating_system = RatingSystem::new();
    match rating_system.update(&player, &games) {
        Ok(rating) => assert_rating(&rating),
        Err(Error::NoOpponents) => assert!(games.is_empty()),
        Err(err) => panic!("unexpected error for valid input: {err}"),
    }
});
