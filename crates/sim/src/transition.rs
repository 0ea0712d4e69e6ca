//! Transition matrix for the three-state weather chain.

use crate::error::SimError;
use crate::state::WeatherState;

/// A 3x3 row-stochastic transition matrix.
///
/// Each row `i` contains the probabilities of transitioning from state `i`
/// to states 0, 1, and 2 respectively. Row sums are expected to be 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionMatrix {
    probs: [[f64; 3]; 3],
}

impl TransitionMatrix {
    /// Constructs a transition matrix directly from a 3x3 array.
    pub(crate) fn from_probs(probs: [[f64; 3]; 3]) -> Self {
        Self { probs }
    }

    /// Returns the fixed prior matrix the simulator starts from.
    ///
    /// Sunny days persist (0.7), cloudy days drift either way, rainy days
    /// have the strongest pull back to themselves after sunny.
    pub fn prior() -> Self {
        Self::from_probs([
            [0.7, 0.2, 0.1],
            [0.3, 0.5, 0.2],
            [0.2, 0.3, 0.5],
        ])
    }

    /// Builds a matrix from occurrence counts over the recent window.
    ///
    /// Every row receives the same Laplace-smoothed distribution
    /// `(count[j] + 1) / (total + 3)`. The reweighting deliberately ignores
    /// the source state: it models "recent unconditional weather frequency"
    /// rather than per-source transition counts. Rows sum to exactly 1.0
    /// because the smoothing adds one per category.
    pub fn from_recent_counts(counts: &[usize; 3]) -> Self {
        let total: usize = counts.iter().sum();
        let mut row = [0.0_f64; 3];
        for (j, &c) in counts.iter().enumerate() {
            row[j] = (c as f64 + 1.0) / (total as f64 + 3.0);
        }
        Self::from_probs([row, row, row])
    }

    /// Returns the transition probabilities from a given state.
    pub fn row(&self, from: WeatherState) -> &[f64; 3] {
        &self.probs[from.as_index()]
    }

    /// Returns the probability of transitioning from one state to another.
    pub fn prob(&self, from: WeatherState, to: WeatherState) -> f64 {
        self.probs[from.as_index()][to.as_index()]
    }

    /// Returns the full 3x3 probability matrix.
    pub fn probs(&self) -> &[[f64; 3]; 3] {
        &self.probs
    }

    /// Validates that the matrix is row-stochastic.
    ///
    /// Checks that all values are finite, in `[0, 1]`, and that each row
    /// sums to approximately 1.0 (tolerance: 1e-6).
    pub fn validate(&self) -> Result<(), SimError> {
        for (i, row) in self.probs.iter().enumerate() {
            let mut sum = 0.0;
            for (j, &p) in row.iter().enumerate() {
                if !p.is_finite() {
                    return Err(SimError::InvalidProbability {
                        reason: format!("probs[{i}][{j}] is not finite: {p}"),
                    });
                }
                if !(0.0..=1.0).contains(&p) {
                    return Err(SimError::InvalidProbability {
                        reason: format!("probs[{i}][{j}] = {p} is outside [0, 1]"),
                    });
                }
                sum += p;
            }
            if (sum - 1.0).abs() > 1e-6 {
                return Err(SimError::InvalidProbability {
                    reason: format!("row {i} sums to {sum}, expected ~1.0"),
                });
            }
        }
        Ok(())
    }

    /// Samples the next state given the current state, using cumulative CDF.
    ///
    /// Draws a uniform random number and walks through the row's cumulative
    /// distribution, returning the first state whose cumulative probability
    /// meets or exceeds the draw. Falls back to the last state if rounding
    /// prevents a match.
    pub fn sample(&self, from: WeatherState, rng: &mut impl rand::Rng) -> WeatherState {
        let u: f64 = rng.random();
        pick_cumulative(&self.probs[from.as_index()], u)
    }
}

/// Walks a probability row's cumulative distribution for a draw `u`.
///
/// Zero-probability entries are skipped, so a draw of exactly 0.0 cannot
/// select a state the row rules out. Falls back to the last state if
/// floating-point rounding leaves the cumulative sum below `u`.
pub(crate) fn pick_cumulative(row: &[f64; 3], u: f64) -> WeatherState {
    let mut cumulative = 0.0;
    for &state in &WeatherState::ALL {
        let p = row[state.as_index()];
        cumulative += p;
        if p > 0.0 && cumulative >= u {
            return state;
        }
    }
    WeatherState::Rainy
}

/// Normalizes a probability vector in-place, using a fallback if the sum is zero.
///
/// 1. Replaces non-finite and negative values with 0.0.
/// 2. If the sum is positive, divides each element by the sum.
/// 3. Otherwise, copies `fallback` into `probs`.
pub(crate) fn normalize_probs(probs: &mut [f64; 3], fallback: [f64; 3]) {
    // Step 1: sanitize
    for p in probs.iter_mut() {
        if !p.is_finite() || *p < 0.0 {
            *p = 0.0;
        }
    }
    // Step 2-3: normalize or fallback
    let s: f64 = probs.iter().sum();
    if s > 0.0 {
        for p in probs.iter_mut() {
            *p /= s;
        }
    } else {
        *probs = fallback;
    }
}
