//! Guess command: one round of the guessing game.

use aeolus_sim::{GuessOutcome, WeatherSimulator, WeatherState};
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::cli::GuessArgs;
use crate::config;
use crate::display::format_states;

/// Run one guessing round: record the guess, advance a day, report the result.
pub fn run(args: GuessArgs) -> Result<()> {
    let guess: WeatherState = args
        .guess
        .parse()
        .with_context(|| format!("cannot parse guess {:?}", args.guess))?;

    let cfg = config::load_or_default(&args.config)?;
    let seed = args.seed.or(cfg.seed);

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut sim =
        WeatherSimulator::new(cfg.sim.to_sim_config()).context("invalid simulator config")?;
    sim.initialize(&mut rng);

    let window = sim.config().recent_window();
    println!(
        "Last {window} days: {}",
        format_states(sim.recent_history(window))
    );

    let model_prediction = sim
        .predict_next(&mut rng)
        .context("prediction failed")?;
    println!("Model predicts: {model_prediction}");
    println!("Your guess: {guess}");

    sim.record_guess(guess);
    let weather = sim.generate_weather(&mut rng).context("day advance failed")?;
    let outcome = sim.resolve_guess().context("guess resolution failed")?;
    info!(weather = %weather, outcome = ?outcome, "round resolved");

    match outcome {
        GuessOutcome::Correct => println!("Correct! The weather is {weather}"),
        GuessOutcome::Incorrect => println!("Wrong! The weather is {weather}"),
        GuessOutcome::NoGuess => unreachable!("a guess was recorded above"),
    }

    Ok(())
}
