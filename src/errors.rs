use thiserror::Error;
use std::io;


#[derive(Debug, Error, Clone)]
pub enum SeedError {
    #[error("Seed must not be empty.")]
    Empty,

    #[error("Seed '{0}' is not a number.")]
    NotANumber(String),

    #[error("Seed '{0}' must be a finite number.")]
    NonFinite(String),
}

#[derive(Debug, Error, Clone)]
pub enum ConfigError {
    #[error("Error during file IO for '{0}': {1}")]
    IoError(String, io::ErrorKind),

    #[error("Maze config failed to parse: {0}")]
    ParseError(String),

    #[error("Maze dimensions must be at least 1x1, got {0}x{1}")]
    InvalidDimensions(usize, usize),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::ParseError(e.to_string())
    }
}

#[derive(Debug, Error, Clone)]
pub enum LeaderboardError {
    #[error("Player name must not be empty")]
    EmptyName,

    #[error("Invalid completion time {0}; must be a finite, non-negative number of seconds")]
    InvalidTime(f64),

    #[error("Error during file IO for '{0}': {1}")]
    IoError(String, io::ErrorKind),

    #[error("Leaderboard data failed to (de)serialize: {0}")]
    SerdeError(String),
}

impl From<serde_json::Error> for LeaderboardError {
    fn from(e: serde_json::Error) -> Self {
        LeaderboardError::SerdeError(e.to_string())
    }
}

#[derive(Debug, Error, Clone)]
pub enum QueryError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Unrecognized metric: \"{0}\"")]
    UnrecognizedMetric(String),

    #[error("Maze dimensions must be at least 1x1, got {0}x{1}")]
    InvalidDimensions(usize, usize),
}

impl<'a> From<nom::Err<nom::error::Error<&'a str>>> for QueryError {
    fn from(e: nom::Err<nom::error::Error<&'a str>>) -> Self {
        QueryError::ParseError(e.to_string())
    }
}

#[derive(Debug, Error, Clone)]
pub enum RenderError {
    #[error("Maze with seed {seed} ({width}x{height}) cannot be rendered")]
    InvalidMaze { seed: f64, width: usize, height: usize },

    #[error("Issue with file '{0}': {1}")]
    IoError(String, String),
}
