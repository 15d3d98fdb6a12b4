use thiserror::Error;

/// Rejected startup configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("playfield {name} must be a positive finite number, got {value}")]
    NonPositiveDimension { name: &'static str, value: f32 },

    #[error("playfield width {width} cannot hold the enemy grid (needs more than {required})")]
    TooNarrow { width: f32, required: f32 },

    #[error("playfield height {height} leaves no room below the enemy grid (needs more than {required})")]
    TooShort { height: f32, required: f32 },

    #[error("environment variable {var} has an invalid value: {value:?}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Errors surfaced by the terminal frontend.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
