//! Adaptive three-state Markov chain for the Aeolus weather minigame.
//!
//! This crate models daily weather as a first-order, three-state Markov
//! chain whose transition matrix is reweighted from recent history, with an
//! expected-utility prediction of the next state and resolution of a
//! player's guess against the generated outcome.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │  adapt       │────▶│  generate      │────▶│    predict       │
//!  │  (reweight)  │     │  (draw state)  │     │  (rank + draw)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use aeolus_sim::{SimConfig, WeatherSimulator};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut sim = WeatherSimulator::new(SimConfig::new()).unwrap();
//! sim.initialize(&mut rng);
//!
//! let report = sim.advance_day(&mut rng).unwrap();
//! println!("today: {}, tomorrow looks like: {}", report.weather, report.predicted);
//! ```
//!
//! The simulator owns no RNG: every stochastic operation takes
//! `&mut impl rand::Rng`, so a seeded `StdRng` reproduces whole runs.

pub mod config;
pub mod error;
pub mod history;
mod predict;
pub mod simulator;
pub mod state;
pub mod transition;

pub use config::SimConfig;
pub use error::SimError;
pub use history::History;
pub use simulator::{DayReport, GuessOutcome, WeatherSimulator};
pub use state::WeatherState;
pub use transition::TransitionMatrix;
