use anyhow::Result;
use rand::{SeedableRng, rngs::StdRng};

use crate::config::Config;

/// Prints ranked anonymous suggestions as JSON on stdout. A seed makes the
/// output reproducible.
pub fn generate(config: &Config, count: Option<usize>, seed: Option<u64>) -> Result<()> {
    let engine = wsid_suggestion::SuggestionEngine::new(config.suggestion.weights());
    let count = count.unwrap_or(config.suggestion.default_count);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let drinks = engine.suggest(count, None, &mut rng)?;
    tracing::debug!(count = drinks.len(), ?seed, "Generated suggestions");

    println!("{}", serde_json::to_string_pretty(&drinks)?);

    Ok(())
}
