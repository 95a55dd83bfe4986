//! Volatility update of Glicko-2, step 5 in
//! [Glickman's paper](http://www.glicko.net/glicko/glicko2.pdf).
//!
//! The new volatility `sigma'` is the root of `f(x)` for `x = ln(sigma'^2)`,
//! found with the Illinois variant of regula falsi.

use tracing::{trace, warn};

use crate::Error;

/// Parameters of the volatility solver, taken from the
/// [`RatingSystem`](crate::RatingSystem).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct VolatilitySolver {
    pub tau: f64,
    pub convergence_tolerance: f64,
    pub max_bracket_steps: u32,
    pub max_iterations: u32,
}

/// The function `f` whose root is `ln(sigma'^2)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Target {
    delta_sq: f64,
    phi_sq: f64,
    variance: f64,
    a: f64,
    tau_sq: f64,
}

impl Target {
    pub fn new(phi: f64, variance: f64, delta: f64, volatility: f64, tau: f64) -> Target {
        Target {
            delta_sq: delta * delta,
            phi_sq: phi * phi,
            variance,
            // Not ln(volatility^2), which underflows for tiny volatilities.
            a: 2.0 * volatility.ln(),
            tau_sq: tau * tau,
        }
    }

    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let exp_x = x.exp();
        let denom = self.phi_sq + self.variance + exp_x;
        exp_x / denom * (self.delta_sq - self.phi_sq - self.variance - exp_x) / denom / 2.0
            - (x - self.a) / self.tau_sq
    }
}

impl VolatilitySolver {
    /// Solves for the new volatility of a player with internal deviation
    /// `phi`, given the estimated variance and improvement of the period.
    pub fn solve(&self, phi: f64, variance: f64, delta: f64, volatility: f64) -> Result<f64, Error> {
        let f = Target::new(phi, variance, delta, volatility, self.tau);

        // All terms of f, with headroom for their sum.
        if !(4.0 * (f.phi_sq + variance + f.delta_sq + volatility * volatility)).is_finite() {
            return Err(Error::InvalidState("volatility equation out of range"));
        }

        let mut a = f.a;
        let mut b = if f.delta_sq > f.phi_sq + variance {
            (f.delta_sq - f.phi_sq - variance).ln()
        } else {
            self.bracket_below(&f)?
        };

        let mut fa = f.eval(a);
        let mut fb = f.eval(b);
        if fa == 0.0 {
            return Ok((a / 2.0).exp());
        }
        if fb == 0.0 {
            return Ok((b / 2.0).exp());
        }

        let mut iterations = 0;
        while (b - a).abs() > self.convergence_tolerance {
            if iterations >= self.max_iterations {
                warn!(iterations, a, b, "volatility solver did not converge");
                return Err(Error::SolverDidNotConverge { iterations });
            }
            iterations += 1;

            let c = a + (a - b) * fa / (fb - fa);
            let fc = f.eval(c);
            trace!(iterations, a, b, c, fc, "illinois step");

            if !fc.is_finite() {
                warn!(iterations, c, "volatility target is not finite");
                return Err(Error::SolverDidNotConverge { iterations });
            }
            // Exact root, or |fb| is negligible next to |fa| so that the
            // secant step rounds back to b.
            if fc == 0.0 || c == b {
                return Ok((c / 2.0).exp());
            }

            // Compare signs rather than the product, which can underflow.
            if (fc < 0.0) != (fb < 0.0) {
                a = b;
                fa = fb;
            } else {
                fa /= 2.0;
            }
            b = c;
            fb = fc;
        }

        Ok((a / 2.0).exp())
    }

    /// Finds the lower end of the initial bracket by stepping down from `a`
    /// in multiples of `tau` until `f` is non-negative.
    fn bracket_below(&self, f: &Target) -> Result<f64, Error> {
        for k in 1..=self.max_bracket_steps {
            let x = f.a - f64::from(k) * self.tau;
            let fx = f.eval(x);
            trace!(k, x, fx, "bracket step");
            if fx >= 0.0 {
                return Ok(x);
            }
        }
        warn!(steps = self.max_bracket_steps, "volatility bracket search exhausted");
        Err(Error::BracketSearchExceeded {
            steps: self.max_bracket_steps,
        })
    }
}
