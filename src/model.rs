use std::f64::consts::PI;

/// Sign of the exponent in the win-probability function.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ScoreConvention {
    /// `1 / (1 + exp(-g·(mu - mu_j)))`, as published by Glickman. The
    /// expectation increases with the rating advantage.
    #[default]
    Standard,
    /// `1 / (1 + exp(g·(mu - mu_j)))`. Reproduces the output of an older
    /// implementation that dropped the negation, which inverts the
    /// expectation. Only useful to match historical numbers.
    Unnegated,
}

/// Weighting factor that reduces the impact of opponents with uncertain
/// ratings.
#[inline]
pub(crate) fn g(phi: f64) -> f64 {
    1.0 / (1.0 + 3.0 * phi * phi / (PI * PI)).sqrt()
}

/// Expected score of a player with internal rating `mu` against an opponent
/// with internal rating `mu_j` and deviation `phi_j`.
#[inline]
pub(crate) fn expectation(mu: f64, mu_j: f64, phi_j: f64, convention: ScoreConvention) -> f64 {
    let exponent = g(phi_j) * (mu - mu_j);
    match convention {
        ScoreConvention::Standard => 1.0 / (1.0 + (-exponent).exp()),
        ScoreConvention::Unnegated => 1.0 / (1.0 + exponent.exp()),
    }
}

/// `E·(1 - E)` for the expectation `E` against opponent `j`, computed as
/// `1 / (4·cosh²(z/2))` so that lopsided pairings do not underflow to zero.
/// The same under both conventions.
#[inline]
pub(crate) fn expectation_variance(mu: f64, mu_j: f64, phi_j: f64) -> f64 {
    let half = 0.5 * g(phi_j) * (mu - mu_j);
    let cosh = half.cosh();
    0.25 / (cosh * cosh)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_g() {
        assert_eq!(g(0.0), 1.0);
        // Values from Glickman's worked example.
        assert_relative_eq!(g(30.0 / 173.7178), 0.9955, epsilon = 1e-4);
        assert_relative_eq!(g(100.0 / 173.7178), 0.9531, epsilon = 1e-4);
        assert_relative_eq!(g(300.0 / 173.7178), 0.7242, epsilon = 1e-4);
        assert_eq!(g(-1.5), g(1.5));

        let mut previous = g(0.0);
        for i in 1..100u32 {
            let current = g(f64::from(i) * 0.05);
            assert!(current < previous);
            previous = current;
        }
    }

    #[test]
    fn test_expectation() {
        let standard = ScoreConvention::Standard;
        assert_eq!(expectation(0.3, 0.3, 1.0, standard), 0.5);
        assert_relative_eq!(
            expectation(0.0, -0.5756, 0.1727, standard),
            0.639,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            expectation(0.0, 0.2878, 0.5756, standard),
            0.432,
            epsilon = 1e-3
        );
        assert_relative_eq!(
            expectation(0.0, 1.1513, 1.7269, standard),
            0.303,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_unnegated_mirrors_standard() {
        for (mu, mu_j, phi_j) in [(0.0, 1.0, 0.5), (0.7, -0.2, 2.0), (1.0, 1.0, 0.0)] {
            let standard = expectation(mu, mu_j, phi_j, ScoreConvention::Standard);
            let unnegated = expectation(mu, mu_j, phi_j, ScoreConvention::Unnegated);
            assert_relative_eq!(standard + unnegated, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_expectation_variance() {
        for (mu, mu_j, phi_j) in [(0.0, 0.0, 1.0), (0.3, -0.5756, 0.1727), (-2.0, 1.1513, 1.7269)] {
            let expected = expectation(mu, mu_j, phi_j, ScoreConvention::Standard);
            assert_relative_eq!(
                expectation_variance(mu, mu_j, phi_j),
                expected * (1.0 - expected),
                max_relative = 1e-12
            );
        }
        // 1 - E rounds to zero here, the product does not.
        assert!(expectation_variance(40.0, 0.0, 0.0) > 0.0);
    }

    proptest::proptest! {
        #[test]
        fn prop_g_decreasing(phi in 0.0f64..10.0, step in 1e-3f64..10.0) {
            proptest::prop_assert!(g(phi) > g(phi + step));
        }

        #[test]
        fn prop_expectation_increasing(
            mu in -5.0f64..5.0,
            step in 1e-3f64..5.0,
            mu_j in -5.0f64..5.0,
            phi_j in 0.0f64..3.0,
        ) {
            let low = expectation(mu, mu_j, phi_j, ScoreConvention::Standard);
            let high = expectation(mu + step, mu_j, phi_j, ScoreConvention::Standard);
            proptest::prop_assert!(0.0 < low && low < high && high < 1.0);
        }
    }
}
