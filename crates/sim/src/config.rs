//! Configuration for the weather simulator.

use crate::error::SimError;

/// Configuration for the weather simulator.
///
/// Use the builder methods to customise parameters. The defaults reproduce
/// the reference game exactly: 30 days of retained history, a 7-day recent
/// window, and prediction jitter drawn from `[0.01, 0.05)`.
///
/// # Example
///
/// ```
/// use aeolus_sim::SimConfig;
///
/// let config = SimConfig::new().with_recent_window(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug)]
pub struct SimConfig {
    history_capacity: usize,
    recent_window: usize,
    jitter_min: f64,
    jitter_max: f64,
}

impl SimConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `history_capacity = 30`, `recent_window = 7`,
    /// `jitter_min = 0.01`, `jitter_max = 0.05`.
    pub fn new() -> Self {
        Self {
            history_capacity: 30,
            recent_window: 7,
            jitter_min: 0.01,
            jitter_max: 0.05,
        }
    }

    /// Sets the number of days of history to retain.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Sets the size of the recent window used for reweighting and utilities.
    pub fn with_recent_window(mut self, window: usize) -> Self {
        self.recent_window = window;
        self
    }

    /// Sets the half-open jitter range `[min, max)` added to prediction utilities.
    pub fn with_jitter_range(mut self, min: f64, max: f64) -> Self {
        self.jitter_min = min;
        self.jitter_max = max;
        self
    }

    // --- Accessors ---

    /// Returns the history capacity in days.
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    /// Returns the recent window size in days.
    pub fn recent_window(&self) -> usize {
        self.recent_window
    }

    /// Returns the `(min, max)` jitter range.
    pub fn jitter_range(&self) -> (f64, f64) {
        (self.jitter_min, self.jitter_max)
    }

    /// Validates this configuration.
    ///
    /// Checks that the capacity and window are positive, the window does not
    /// exceed the capacity, and the jitter range is finite, non-negative, and
    /// non-empty.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.history_capacity == 0 {
            return Err(SimError::InvalidConfig {
                reason: "history_capacity must be > 0".to_string(),
            });
        }
        if self.recent_window == 0 {
            return Err(SimError::InvalidConfig {
                reason: "recent_window must be > 0".to_string(),
            });
        }
        if self.recent_window > self.history_capacity {
            return Err(SimError::InvalidConfig {
                reason: format!(
                    "recent_window ({}) must not exceed history_capacity ({})",
                    self.recent_window, self.history_capacity
                ),
            });
        }
        if !self.jitter_min.is_finite() || !self.jitter_max.is_finite() {
            return Err(SimError::InvalidConfig {
                reason: format!(
                    "jitter range must be finite, got [{}, {})",
                    self.jitter_min, self.jitter_max
                ),
            });
        }
        if self.jitter_min < 0.0 || self.jitter_min >= self.jitter_max {
            return Err(SimError::InvalidConfig {
                reason: format!(
                    "jitter range must satisfy 0 <= min < max, got [{}, {})",
                    self.jitter_min, self.jitter_max
                ),
            });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}
