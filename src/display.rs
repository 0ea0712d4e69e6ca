use aeolus_sim::WeatherState;

/// Joins states into the single-line history format the game shows,
/// e.g. `Sunny | Cloudy | Rainy`.
pub fn format_states(states: &[WeatherState]) -> String {
    states
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(" | ")
}
