//! Expected-utility prediction of the next weather state.
//!
//! The prediction ranks candidate next states by an expected utility that
//! combines the transition matrix with a recency-derived desirability, then
//! samples from the normalized utilities rather than returning the argmax.

use crate::config::SimConfig;
use crate::history::History;
use crate::state::WeatherState;
use crate::transition::{TransitionMatrix, normalize_probs, pick_cumulative};

/// Computes the per-state utility vector from recent history.
///
/// Utility of a state is its occurrence fraction over the recent window
/// plus a small uniform jitter from the configured range. With fewer
/// history entries than the window, every state gets utility 1.0 and no
/// jitter is drawn.
fn utilities(history: &History, config: &SimConfig, rng: &mut impl rand::Rng) -> [f64; 3] {
    let window = config.recent_window();
    if history.len() < window {
        return [1.0; 3];
    }
    let counts = history.counts(window);
    let (lo, hi) = config.jitter_range();
    let mut out = [0.0_f64; 3];
    for (j, &c) in counts.iter().enumerate() {
        out[j] = c as f64 / window as f64 + rng.random_range(lo..hi);
    }
    out
}

/// Computes expected utilities: `EU(t) = sum over sources of P(src -> t) * U(t)`.
fn expected_utilities(matrix: &TransitionMatrix, utilities: &[f64; 3]) -> [f64; 3] {
    let mut eu = [0.0_f64; 3];
    for &src in &WeatherState::ALL {
        for &dst in &WeatherState::ALL {
            eu[dst.as_index()] += matrix.prob(src, dst) * utilities[dst.as_index()];
        }
    }
    eu
}

/// Predicts the next weather state.
///
/// Normalizes the expected-utility vector into a probability distribution
/// (uniform fallback if the total is zero) and samples one state from it
/// with the same cumulative rule the chain itself uses. Forward-looking
/// display value only; does not advance the chain.
pub(crate) fn predict_next(
    matrix: &TransitionMatrix,
    history: &History,
    config: &SimConfig,
    rng: &mut impl rand::Rng,
) -> WeatherState {
    let util = utilities(history, config, rng);
    let mut dist = expected_utilities(matrix, &util);
    normalize_probs(&mut dist, [1.0 / 3.0; 3]);
    let u: f64 = rng.random();
    pick_cumulative(&dist, u)
}
