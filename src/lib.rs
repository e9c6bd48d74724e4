pub mod prng;
pub mod maze;
pub mod render;
pub mod config;
pub mod leaderboard;
pub mod session;
pub mod query;
pub mod search;
pub mod errors;

/// Parses a maze seed from user input. Seeds are plain numbers; fractional
/// values are allowed since the maze config endpoint hands those out.
pub fn parse_seed(src: &str) -> Result<f64, errors::SeedError> {
    let trimmed = src.trim();
    if trimmed.is_empty() {
        return Err(errors::SeedError::Empty);
    }
    let seed: f64 = trimmed.parse()
        .map_err(|_| errors::SeedError::NotANumber(trimmed.to_string()))?;
    if !seed.is_finite() {
        return Err(errors::SeedError::NonFinite(trimmed.to_string()));
    }
    Ok(seed)
}
