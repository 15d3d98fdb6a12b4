//! All game entity types — pure data, no logic.

use crate::config::Playfield;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// Horizontal heading shared by the whole formation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// −1.0 for left, +1.0 for right.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Which logical actions are held this tick. Level-triggered: holding fire
/// keeps firing as fast as the cooldown allows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

/// A projectile. Player and enemy shots share this shape and live in separate
/// collections on [`GameState`].
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Vertical velocity per tick (negative = upward).
    pub dy: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Clock reading of the last shot, `None` before the first one.
    pub last_shot_ms: Option<u64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub alive: bool,
}

/// Motion shared by every alive enemy.
#[derive(Clone, Debug, PartialEq)]
pub struct Formation {
    pub speed: f32,
    pub direction: Direction,
    pub drop: f32,
}

// ── Signals for presentation ──────────────────────────────────────────────────

/// Something a display sink may want to react to, produced during one tick.
#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    ScoreChanged(u32),
    LivesChanged(u32),
    /// A wave was wiped out; wave `next_wave` spawned moving at `speed`.
    WaveCleared { next_wave: u32, speed: f32 },
    GameOver { score: u32 },
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game state. Cloneable so pure update functions can return a
/// new copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub player: Player,
    /// Fixed 5×10 grid in row-major order; dead enemies stay until the next wave.
    pub enemies: Vec<Enemy>,
    pub formation: Formation,
    /// Oldest first.
    pub player_bullets: Vec<Bullet>,
    /// Oldest first.
    pub enemy_bullets: Vec<Bullet>,
    pub score: u32,
    pub lives: u32,
    /// 1-based number of the wave currently on screen.
    pub wave: u32,
    pub status: GameStatus,
    /// Ticks advanced while playing.
    pub frame: u64,
    pub playfield: Playfield,
    /// Events raised by the most recent tick (or restart).
    pub events: Vec<GameEvent>,
}
