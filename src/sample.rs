// Built-in sample dataset.
//
// Six accounts with hand-picked feature vectors, one pair per category.
// Used by the CLI when no input file is given, and by tests.

use crate::signals::SignalFeatures;

/// (username, features) pairs of the sample dataset, in display order.
pub fn sample_accounts() -> Vec<(String, SignalFeatures)> {
    [
        (
            "tech_enthusiast_2024",
            SignalFeatures::new(95.0, 84.0, 78.0, 90.0, 50.0),
        ),
        (
            "start_and_design_hub",
            SignalFeatures::new(60.0, 55.0, 50.0, 40.0, 60.0),
        ),
        (
            "digital_nomad_life",
            SignalFeatures::new(10.0, 8.0, 5.0, 0.0, 0.0),
        ),
        (
            "market_watch_daily",
            SignalFeatures::new(45.0, 50.0, 60.0, 10.0, 20.0),
        ),
        (
            "city_food_trails",
            SignalFeatures::new(20.0, 15.0, 25.0, 0.0, 25.0),
        ),
        (
            "crypto_giveaway_now",
            SignalFeatures::new(90.0, 92.0, 88.0, 70.0, 80.0),
        ),
    ]
    .into_iter()
    .map(|(name, features)| (name.to_string(), features))
    .collect()
}
