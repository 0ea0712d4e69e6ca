//! The weather simulator: owned state, day advancement, and guess resolution.

use crate::config::SimConfig;
use crate::error::SimError;
use crate::history::History;
use crate::predict;
use crate::state::WeatherState;
use crate::transition::TransitionMatrix;

/// Outcome of comparing a player's guess against the generated weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess matched the generated weather.
    Correct,
    /// The guess did not match.
    Incorrect,
    /// No guess was recorded since the last resolution.
    NoGuess,
}

/// Everything the presentation layer needs after one day advance.
///
/// Returned by [`WeatherSimulator::advance_day`]; the host formats and
/// displays these values however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayReport {
    /// The weather generated for the new day.
    pub weather: WeatherState,
    /// The model's prediction for the following day.
    pub predicted: WeatherState,
    /// Resolution of the player's guess against `weather`.
    pub guess: GuessOutcome,
}

/// Adaptive three-state Markov weather simulator.
///
/// Owns the transition matrix, the bounded history, the current state, and
/// the player's last guess. All randomness comes from the caller-supplied
/// RNG, so a seeded `StdRng` reproduces entire runs.
///
/// Construct with [`new`](Self::new), then arm with
/// [`initialize`](Self::initialize) before advancing days. Operations that
/// read or advance the chain return [`SimError::Uninitialized`] until then.
#[derive(Debug, Clone)]
pub struct WeatherSimulator {
    config: SimConfig,
    matrix: TransitionMatrix,
    history: History,
    current: WeatherState,
    guess: Option<WeatherState>,
    initialized: bool,
}

impl WeatherSimulator {
    /// Creates an unarmed simulator with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration fails
    /// validation.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let capacity = config.history_capacity();
        Ok(Self {
            config,
            matrix: TransitionMatrix::prior(),
            history: History::new(capacity),
            current: WeatherState::Sunny,
            guess: None,
            initialized: false,
        })
    }

    /// Resets the simulator to its startup state and pre-fills history.
    ///
    /// The matrix is set to the fixed prior, the current state to Sunny,
    /// and the history is filled to capacity by repeatedly sampling the
    /// unmodified prior from the evolving current state. After return the
    /// current state is the last pre-filled entry, so history and current
    /// state reflect pure prior-matrix simulation.
    pub fn initialize(&mut self, rng: &mut impl rand::Rng) {
        self.matrix = TransitionMatrix::prior();
        self.current = WeatherState::Sunny;
        self.history.clear();
        self.guess = None;
        for _ in 0..self.config.history_capacity() {
            self.current = self.matrix.sample(self.current, rng);
            self.history.push(self.current);
        }
        self.initialized = true;
    }

    /// Recomputes transition probabilities from the recent window.
    ///
    /// No-op while the history is shorter than the window; otherwise every
    /// row becomes the Laplace-smoothed occurrence distribution of the last
    /// `recent_window` entries (see [`TransitionMatrix::from_recent_counts`]).
    pub fn adapt_matrix(&mut self) {
        let window = self.config.recent_window();
        if self.history.len() < window {
            return;
        }
        self.matrix = TransitionMatrix::from_recent_counts(&self.history.counts(window));
    }

    /// Advances the chain by one day and returns the generated weather.
    ///
    /// Reweights the matrix from recent history, samples the next state
    /// from the current one, and appends it to history (evicting the
    /// oldest entry past capacity).
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Uninitialized`] before [`initialize`](Self::initialize).
    pub fn generate_weather(&mut self, rng: &mut impl rand::Rng) -> Result<WeatherState, SimError> {
        self.ensure_initialized("generate_weather")?;
        self.adapt_matrix();
        self.current = self.matrix.sample(self.current, rng);
        self.history.push(self.current);
        Ok(self.current)
    }

    /// Predicts the next day's weather without advancing the chain.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Uninitialized`] before [`initialize`](Self::initialize).
    pub fn predict_next(&self, rng: &mut impl rand::Rng) -> Result<WeatherState, SimError> {
        self.ensure_initialized("predict_next")?;
        Ok(predict::predict_next(
            &self.matrix,
            &self.history,
            &self.config,
            rng,
        ))
    }

    /// Records the player's guess for the next generated day.
    ///
    /// Overwrites any unresolved previous guess.
    pub fn record_guess(&mut self, guess: WeatherState) {
        self.guess = Some(guess);
    }

    /// Resolves the stored guess against the current weather.
    ///
    /// The guess is consumed: one recorded guess yields exactly one
    /// `Correct`/`Incorrect`, and further calls return `NoGuess` until a
    /// new guess is recorded.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Uninitialized`] before [`initialize`](Self::initialize).
    pub fn resolve_guess(&mut self) -> Result<GuessOutcome, SimError> {
        self.ensure_initialized("resolve_guess")?;
        Ok(match self.guess.take() {
            None => GuessOutcome::NoGuess,
            Some(g) if g == self.current => GuessOutcome::Correct,
            Some(_) => GuessOutcome::Incorrect,
        })
    }

    /// Advances one full day: generate, predict, and resolve the guess.
    ///
    /// This is the composite the presentation layer calls once per day; the
    /// returned [`DayReport`] carries every value it needs to display.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Uninitialized`] before [`initialize`](Self::initialize).
    pub fn advance_day(&mut self, rng: &mut impl rand::Rng) -> Result<DayReport, SimError> {
        let weather = self.generate_weather(rng)?;
        let predicted = self.predict_next(rng)?;
        let guess = self.resolve_guess()?;
        Ok(DayReport {
            weather,
            predicted,
            guess,
        })
    }

    /// Returns the last `n` days of history, oldest first (clamped to the
    /// available length).
    pub fn recent_history(&self, n: usize) -> &[WeatherState] {
        self.history.recent(n)
    }

    /// Returns the current weather state.
    pub fn current_state(&self) -> WeatherState {
        self.current
    }

    /// Returns the current transition matrix.
    pub fn transition_matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Returns the full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn ensure_initialized(&self, op: &'static str) -> Result<(), SimError> {
        if self.initialized {
            Ok(())
        } else {
            Err(SimError::Uninitialized { op })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use WeatherState::{Cloudy, Rainy, Sunny};

    fn armed_sim(seed: u64) -> WeatherSimulator {
        let mut sim = WeatherSimulator::new(SimConfig::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        sim.initialize(&mut rng);
        sim
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = SimConfig::new().with_recent_window(0);
        assert!(matches!(
            WeatherSimulator::new(cfg),
            Err(SimError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn uninitialized_operations_fail() {
        let mut sim = WeatherSimulator::new(SimConfig::new()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sim.generate_weather(&mut rng),
            Err(SimError::Uninitialized {
                op: "generate_weather"
            })
        ));
        assert!(matches!(
            sim.predict_next(&mut rng),
            Err(SimError::Uninitialized { op: "predict_next" })
        ));
        assert!(matches!(
            sim.resolve_guess(),
            Err(SimError::Uninitialized { op: "resolve_guess" })
        ));
        assert!(matches!(
            sim.advance_day(&mut rng),
            Err(SimError::Uninitialized { .. })
        ));
    }

    #[test]
    fn initialize_prefills_to_capacity() {
        let sim = armed_sim(42);
        assert_eq!(sim.history().len(), 30);
        // The current state is the last pre-filled entry.
        assert_eq!(sim.current_state(), *sim.recent_history(1).last().unwrap());
        // Pre-fill samples the prior only; the matrix is still the prior.
        assert_eq!(*sim.transition_matrix(), TransitionMatrix::prior());
    }

    #[test]
    fn adapt_matrix_noop_below_window() {
        let mut sim = armed_sim(1);
        // Shrink history below the window to hit the no-op branch.
        sim.history.clear();
        sim.history.push(Sunny);
        sim.history.push(Rainy);
        let before = sim.matrix;
        sim.adapt_matrix();
        assert_eq!(sim.matrix, before);
    }

    #[test]
    fn adapt_matrix_reweights_from_window() {
        let mut sim = armed_sim(1);
        sim.history.clear();
        for state in [Sunny, Sunny, Cloudy, Sunny, Rainy, Sunny, Cloudy] {
            sim.history.push(state);
        }
        sim.adapt_matrix();
        for &from in &WeatherState::ALL {
            assert!((sim.matrix.prob(from, Sunny) - 0.5).abs() < 1e-10);
            assert!((sim.matrix.prob(from, Cloudy) - 0.3).abs() < 1e-10);
            assert!((sim.matrix.prob(from, Rainy) - 0.2).abs() < 1e-10);
        }
    }

    #[test]
    fn generate_appends_and_caps_history() {
        let mut sim = armed_sim(7);
        let mut rng = StdRng::seed_from_u64(8);
        let before: Vec<WeatherState> = sim.recent_history(30).to_vec();
        let w = sim.generate_weather(&mut rng).unwrap();
        assert_eq!(sim.history().len(), 30);
        assert_eq!(sim.current_state(), w);
        // The window shifted by one: oldest entry evicted, new day appended.
        let after = sim.recent_history(30);
        assert_eq!(&after[..29], &before[1..]);
        assert_eq!(after[29], w);
    }

    #[test]
    fn resolve_without_guess_is_noguess() {
        let mut sim = armed_sim(3);
        assert_eq!(sim.resolve_guess().unwrap(), GuessOutcome::NoGuess);
    }

    #[test]
    fn resolve_matches_generated_weather() {
        let mut sim = armed_sim(4);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            // Peek at what the chain will generate by cloning sim and rng.
            let mut peek_sim = sim.clone();
            let mut peek_rng = rng.clone();
            let upcoming = peek_sim.generate_weather(&mut peek_rng).unwrap();

            sim.record_guess(upcoming);
            sim.generate_weather(&mut rng).unwrap();
            assert_eq!(sim.resolve_guess().unwrap(), GuessOutcome::Correct);
        }
    }

    #[test]
    fn resolve_wrong_guess_is_incorrect() {
        let mut sim = armed_sim(6);
        let mut rng = StdRng::seed_from_u64(9);
        let mut peek_sim = sim.clone();
        let mut peek_rng = rng.clone();
        let upcoming = peek_sim.generate_weather(&mut peek_rng).unwrap();

        // Guess any state other than the upcoming one.
        let wrong = WeatherState::ALL
            .into_iter()
            .find(|&s| s != upcoming)
            .unwrap();
        sim.record_guess(wrong);
        sim.generate_weather(&mut rng).unwrap();
        assert_eq!(sim.resolve_guess().unwrap(), GuessOutcome::Incorrect);
    }

    #[test]
    fn guess_is_consumed_on_resolution() {
        let mut sim = armed_sim(10);
        sim.record_guess(sim.current_state());
        assert_eq!(sim.resolve_guess().unwrap(), GuessOutcome::Correct);
        // A second resolution without a new guess reports NoGuess.
        assert_eq!(sim.resolve_guess().unwrap(), GuessOutcome::NoGuess);
    }

    #[test]
    fn advance_day_bundles_events() {
        let mut sim = armed_sim(11);
        let mut rng = StdRng::seed_from_u64(12);
        let report = sim.advance_day(&mut rng).unwrap();
        assert_eq!(report.weather, sim.current_state());
        // No guess was recorded before the advance.
        assert_eq!(report.guess, GuessOutcome::NoGuess);
        assert!(WeatherState::ALL.contains(&report.predicted));
    }

    #[test]
    fn reinitialize_resets_matrix_and_guess() {
        let mut sim = armed_sim(13);
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..10 {
            sim.advance_day(&mut rng).unwrap();
        }
        sim.record_guess(Sunny);
        sim.initialize(&mut rng);
        assert_eq!(*sim.transition_matrix(), TransitionMatrix::prior());
        assert_eq!(sim.resolve_guess().unwrap(), GuessOutcome::NoGuess);
        assert_eq!(sim.history().len(), 30);
    }
}
