//! Tuning constants and validated startup configuration.

use crate::error::ConfigError;

/// Gameplay tuning. Distances are playfield units, speeds are units per tick.
pub mod consts {
    // ── Player ───────────────────────────────────────────────────────────────
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 30.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    /// Distance from the playfield bottom to the player's top edge.
    pub const PLAYER_BOTTOM_OFFSET: f32 = 60.0;
    pub const STARTING_LIVES: u32 = 3;
    /// Minimum wall-clock gap between two player shots.
    pub const SHOT_COOLDOWN_MS: u64 = 250;

    // ── Projectiles ──────────────────────────────────────────────────────────
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const PLAYER_BULLET_SPEED: f32 = 7.0;
    pub const ENEMY_BULLET_SPEED: f32 = 3.0;
    /// Per-tick chance that some alive enemy fires.
    pub const ENEMY_FIRE_CHANCE: f64 = 0.02;

    // ── Enemy grid ───────────────────────────────────────────────────────────
    pub const GRID_ROWS: usize = 5;
    pub const GRID_COLS: usize = 10;
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 30.0;
    pub const GRID_SPACING_X: f32 = 60.0;
    pub const GRID_SPACING_Y: f32 = 50.0;
    pub const GRID_OFFSET_X: f32 = 50.0;
    pub const GRID_OFFSET_Y: f32 = 50.0;

    // ── Formation ────────────────────────────────────────────────────────────
    pub const FORMATION_START_SPEED: f32 = 1.0;
    pub const FORMATION_SPEED_STEP: f32 = 0.5;
    pub const FORMATION_DROP: f32 = 20.0;

    pub const KILL_SCORE: u32 = 10;

    /// Right edge of the freshly spawned grid.
    pub const GRID_RIGHT_EDGE: f32 =
        GRID_OFFSET_X + (GRID_COLS - 1) as f32 * GRID_SPACING_X + ENEMY_WIDTH;
    /// Bottom edge of the freshly spawned grid.
    pub const GRID_BOTTOM_EDGE: f32 =
        GRID_OFFSET_Y + (GRID_ROWS - 1) as f32 * GRID_SPACING_Y + ENEMY_HEIGHT;
}

use consts::*;

pub const DEFAULT_WIDTH: f32 = 800.0;
pub const DEFAULT_HEIGHT: f32 = 600.0;

/// Playfield dimensions. Built either by [`Playfield::new`], which validates,
/// or by `Default` (800×600), so a value of this type always fits the grid
/// and the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playfield {
    width: f32,
    height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Result<Self, ConfigError> {
        for (name, value) in [("width", width), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveDimension { name, value });
            }
        }
        if width <= GRID_RIGHT_EDGE {
            return Err(ConfigError::TooNarrow {
                width,
                required: GRID_RIGHT_EDGE,
            });
        }
        // A grid that already touches the player line would end the game on tick one.
        let required = GRID_BOTTOM_EDGE + PLAYER_BOTTOM_OFFSET;
        if height <= required {
            return Err(ConfigError::TooShort { height, required });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

// ── Environment-driven configuration ─────────────────────────────────────────

pub const ENV_WIDTH: &str = "INVADERS_WIDTH";
pub const ENV_HEIGHT: &str = "INVADERS_HEIGHT";
pub const ENV_SEED: &str = "INVADERS_SEED";

/// Everything the frontend needs to build an engine.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct GameConfig {
    pub playfield: Playfield,
    /// Fixed RNG seed for reproducible enemy fire; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Read `INVADERS_WIDTH`, `INVADERS_HEIGHT` and `INVADERS_SEED`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let width = parse_var(&lookup, ENV_WIDTH)?.unwrap_or(DEFAULT_WIDTH);
        let height = parse_var(&lookup, ENV_HEIGHT)?.unwrap_or(DEFAULT_HEIGHT);
        let seed = parse_var(&lookup, ENV_SEED)?;
        Ok(Self {
            playfield: Playfield::new(width, height)?,
            seed,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
    }
}
