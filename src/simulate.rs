//! Simulate command: advance the weather chain day by day.

use aeolus_sim::{WeatherSimulator, WeatherState};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use crate::cli::SimulateArgs;
use crate::config;
use crate::display::format_states;

/// One simulated day in the JSON run report.
#[derive(Serialize)]
struct DayRecord {
    day: usize,
    weather: String,
    /// Numeric encoding (0 = Sunny, 1 = Cloudy, 2 = Rainy) for plotting.
    index: usize,
    predicted: String,
}

/// Full JSON run report consumed by external plotting tools.
#[derive(Serialize)]
struct RunReport {
    seed: Option<u64>,
    days: Vec<DayRecord>,
    counts: StateCounts,
    /// Fraction of days where the previous day's prediction matched.
    prediction_accuracy: f64,
}

#[derive(Serialize)]
struct StateCounts {
    sunny: usize,
    cloudy: usize,
    rainy: usize,
}

/// Run the day-by-day simulation.
pub fn run(args: SimulateArgs) -> Result<()> {
    let cfg = config::load_or_default(&args.config)?;
    let seed = args.seed.or(cfg.seed);

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut sim =
        WeatherSimulator::new(cfg.sim.to_sim_config()).context("invalid simulator config")?;
    sim.initialize(&mut rng);
    info!(
        history = %format_states(sim.recent_history(sim.config().recent_window())),
        "simulator initialized"
    );

    let mut records = Vec::with_capacity(args.days);
    let mut counts = [0usize; 3];
    let mut prediction_hits = 0usize;
    let mut last_prediction: Option<WeatherState> = None;

    for day in 1..=args.days {
        let report = sim.advance_day(&mut rng).context("day advance failed")?;
        counts[report.weather.as_index()] += 1;
        if last_prediction == Some(report.weather) {
            prediction_hits += 1;
        }
        last_prediction = Some(report.predicted);

        info!(
            day,
            weather = %report.weather,
            predicted = %report.predicted,
            "day advanced"
        );
        records.push(DayRecord {
            day,
            weather: report.weather.to_string(),
            index: report.weather.as_index(),
            predicted: report.predicted.to_string(),
        });
    }

    // Predictions are scored against the following day, so the first day has
    // no score and the last prediction is never scored.
    let scored_days = args.days.saturating_sub(1);
    let accuracy = if scored_days > 0 {
        prediction_hits as f64 / scored_days as f64
    } else {
        0.0
    };

    let window = sim.config().recent_window();
    println!(
        "Last {window} days: {}",
        format_states(sim.recent_history(window))
    );
    println!(
        "Simulated {} days: {} sunny, {} cloudy, {} rainy",
        args.days, counts[0], counts[1], counts[2]
    );
    println!("Prediction accuracy: {:.1}%", accuracy * 100.0);

    if let Some(output) = args.output {
        let report = RunReport {
            seed,
            days: records,
            counts: StateCounts {
                sunny: counts[0],
                cloudy: counts[1],
                rainy: counts[2],
            },
            prediction_accuracy: accuracy,
        };
        let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        std::fs::write(&output, &json)
            .with_context(|| format!("failed to write report: {}", output.display()))?;
        info!(path = %output.display(), "run report written");
    }

    Ok(())
}
