//! Pure game-logic functions.
//!
//! Every public function takes an immutable reference to the current
//! `GameState` (plus, where needed, a clock reading or an RNG handle) and
//! returns a brand-new `GameState`. Side effects are limited to the injected
//! RNG and `log` output.

use rand::Rng;

use crate::collision::Hitbox;
use crate::config::consts::*;
use crate::config::Playfield;
use crate::entities::{
    Bullet, Direction, Enemy, Formation, GameEvent, GameState, GameStatus, InputSnapshot, Player,
};

// ── Constructors ─────────────────────────────────────────────────────────────

/// The full 5×10 enemy grid, every enemy alive, in row-major order.
pub fn spawn_grid() -> Vec<Enemy> {
    (0..GRID_ROWS)
        .flat_map(|row| {
            (0..GRID_COLS).map(move |col| Enemy {
                x: col as f32 * GRID_SPACING_X + GRID_OFFSET_X,
                y: row as f32 * GRID_SPACING_Y + GRID_OFFSET_Y,
                width: ENEMY_WIDTH,
                height: ENEMY_HEIGHT,
                alive: true,
            })
        })
        .collect()
}

/// The player's starting x: horizontally centred.
pub fn player_start_x(playfield: &Playfield) -> f32 {
    playfield.width() / 2.0 - PLAYER_WIDTH / 2.0
}

/// Build the initial game state for a playfield.
pub fn init_state(playfield: Playfield) -> GameState {
    GameState {
        player: Player {
            x: player_start_x(&playfield),
            y: playfield.height() - PLAYER_BOTTOM_OFFSET,
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            last_shot_ms: None,
        },
        enemies: spawn_grid(),
        formation: Formation {
            speed: FORMATION_START_SPEED,
            direction: Direction::Right,
            drop: FORMATION_DROP,
        },
        player_bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        score: 0,
        lives: STARTING_LIVES,
        wave: 1,
        status: GameStatus::Playing,
        frame: 0,
        playfield,
        events: Vec::new(),
    }
}

/// Fresh session on the same playfield. Announces the reset score and lives
/// so display sinks can refresh.
pub fn restart(state: &GameState) -> GameState {
    log::info!("restarting session (previous score {})", state.score);
    let mut next = init_state(state.playfield);
    next.events = vec![
        GameEvent::ScoreChanged(next.score),
        GameEvent::LivesChanged(next.lives),
    ];
    next
}

// ── Queries ──────────────────────────────────────────────────────────────────

pub fn alive_enemies(state: &GameState) -> impl Iterator<Item = &Enemy> {
    state.enemies.iter().filter(|e| e.alive)
}

pub fn alive_enemy_count(state: &GameState) -> usize {
    alive_enemies(state).count()
}

// ── Input-driven state transitions (pure) ───────────────────────────────────

/// Step left unless the player's left edge is already at or past 0.
pub fn move_player_left(state: &GameState) -> GameState {
    if state.player.x <= 0.0 {
        return state.clone();
    }
    GameState {
        player: Player {
            x: state.player.x - state.player.speed,
            ..state.player.clone()
        },
        ..state.clone()
    }
}

/// Step right unless the player's right edge is already at or past the
/// playfield width.
pub fn move_player_right(state: &GameState) -> GameState {
    let p = &state.player;
    if p.x + p.width >= state.playfield.width() {
        return state.clone();
    }
    GameState {
        player: Player {
            x: p.x + p.speed,
            ..p.clone()
        },
        ..state.clone()
    }
}

/// Whether the cooldown since the last shot has elapsed at `now_ms`.
pub fn can_shoot(player: &Player, now_ms: u64) -> bool {
    match player.last_shot_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) >= SHOT_COOLDOWN_MS,
    }
}

/// Fire from the centre of the player's top edge, rate-limited by wall clock.
pub fn player_shoot(state: &GameState, now_ms: u64) -> GameState {
    if !can_shoot(&state.player, now_ms) {
        return state.clone();
    }
    let p = &state.player;
    let mut player_bullets = state.player_bullets.clone();
    player_bullets.push(Bullet {
        x: p.x + p.width / 2.0 - BULLET_WIDTH / 2.0,
        y: p.y,
        width: BULLET_WIDTH,
        height: BULLET_HEIGHT,
        dy: -PLAYER_BULLET_SPEED,
    });
    GameState {
        player: Player {
            last_shot_ms: Some(now_ms),
            ..p.clone()
        },
        player_bullets,
        ..state.clone()
    }
}

/// Apply one input snapshot. Left and right are checked independently.
pub fn update_player(state: &GameState, input: &InputSnapshot, now_ms: u64) -> GameState {
    let mut next = state.clone();
    if input.left {
        next = move_player_left(&next);
    }
    if input.right {
        next = move_player_right(&next);
    }
    if input.fire {
        next = player_shoot(&next, now_ms);
    }
    next
}

// ── Per-tick sub-steps ───────────────────────────────────────────────────────

fn enemy_bullet(shooter: &Enemy) -> Bullet {
    Bullet {
        x: shooter.x + shooter.width / 2.0 - BULLET_WIDTH / 2.0,
        y: shooter.y + shooter.height,
        width: BULLET_WIDTH,
        height: BULLET_HEIGHT,
        dy: ENEMY_BULLET_SPEED,
    }
}

/// Move every projectile, drop those fully outside the playfield, then maybe
/// let one random alive enemy fire.
pub fn advance_projectiles(state: &GameState, rng: &mut impl Rng) -> GameState {
    let height = state.playfield.height();

    let player_bullets: Vec<Bullet> = state
        .player_bullets
        .iter()
        .map(|b| Bullet { y: b.y + b.dy, ..b.clone() })
        .filter(|b| b.y + b.height > 0.0)
        .collect();

    let mut enemy_bullets: Vec<Bullet> = state
        .enemy_bullets
        .iter()
        .map(|b| Bullet { y: b.y + b.dy, ..b.clone() })
        .filter(|b| b.y < height)
        .collect();

    if rng.gen_bool(ENEMY_FIRE_CHANCE) {
        let shooters: Vec<&Enemy> = alive_enemies(state).collect();
        if !shooters.is_empty() {
            let shooter = shooters[rng.gen_range(0..shooters.len())];
            enemy_bullets.push(enemy_bullet(shooter));
        }
    }

    GameState {
        player_bullets,
        enemy_bullets,
        ..state.clone()
    }
}

/// Move the formation as one body: either everyone steps sideways, or, when
/// the step would carry any alive enemy to the edge, everyone drops and the
/// direction flips instead.
pub fn advance_formation(state: &GameState) -> GameState {
    let formation = &state.formation;
    let step = formation.speed * formation.direction.sign();
    let width = state.playfield.width();

    let at_edge = alive_enemies(state).any(|e| match formation.direction {
        Direction::Left => e.x + step <= 0.0,
        Direction::Right => e.x + e.width + step >= width,
    });

    let enemies: Vec<Enemy> = state
        .enemies
        .iter()
        .map(|e| match (e.alive, at_edge) {
            (false, _) => e.clone(),
            (true, true) => Enemy { y: e.y + formation.drop, ..e.clone() },
            (true, false) => Enemy { x: e.x + step, ..e.clone() },
        })
        .collect();

    let direction = if at_edge {
        formation.direction.reversed()
    } else {
        formation.direction
    };

    GameState {
        enemies,
        formation: Formation {
            direction,
            ..formation.clone()
        },
        ..state.clone()
    }
}

fn latch_game_over(state: &mut GameState) {
    if state.status == GameStatus::GameOver {
        return;
    }
    log::info!("game over at wave {} with score {}", state.wave, state.score);
    state.status = GameStatus::GameOver;
    state.events.push(GameEvent::GameOver { score: state.score });
}

/// Resolve hits in a fixed order:
/// 1. player bullets (newest first) against alive enemies, one kill each;
/// 2. enemy bullets (newest first) against the player, stopping at the first hit;
/// 3. any alive enemy reaching the player's line ends the game outright.
pub fn resolve_collisions(state: &GameState) -> GameState {
    let mut next = state.clone();

    // ── 1. Player bullets ↔ enemies ──────────────────────────────────────────
    let mut kills = 0;
    for bi in (0..next.player_bullets.len()).rev() {
        let bullet = &next.player_bullets[bi];
        let hit = next
            .enemies
            .iter()
            .position(|e| e.alive && bullet.collides_with(e));
        if let Some(ei) = hit {
            next.enemies[ei].alive = false;
            next.player_bullets.remove(bi);
            kills += 1;
        }
    }
    if kills > 0 {
        next.score += KILL_SCORE * kills;
        next.events.push(GameEvent::ScoreChanged(next.score));
    }

    // ── 2. Enemy bullets ↔ player ────────────────────────────────────────────
    // Only the newest overlapping bullet counts; any others stay in flight.
    let player = next.player.rect();
    if let Some(bi) = next
        .enemy_bullets
        .iter()
        .rposition(|b| b.collides_with(&player))
    {
        next.enemy_bullets.remove(bi);
        next.lives = next.lives.saturating_sub(1);
        log::debug!("player hit, {} lives left", next.lives);
        next.events.push(GameEvent::LivesChanged(next.lives));
        if next.lives == 0 {
            latch_game_over(&mut next);
        }
    }

    // ── 3. Enemies ↔ player line ─────────────────────────────────────────────
    let player_line = next.player.y;
    if alive_enemies(&next).any(|e| e.y + e.height >= player_line) {
        latch_game_over(&mut next);
    }

    next
}

/// Respawn the grid and ratchet the formation speed once every enemy is down.
pub fn check_wave(state: &GameState) -> GameState {
    if alive_enemy_count(state) > 0 {
        return state.clone();
    }
    let speed = state.formation.speed + FORMATION_SPEED_STEP;
    let wave = state.wave + 1;
    log::info!("wave {} cleared, next formation speed {}", state.wave, speed);

    let mut events = state.events.clone();
    events.push(GameEvent::WaveCleared { next_wave: wave, speed });
    GameState {
        enemies: spawn_grid(),
        formation: Formation {
            speed,
            ..state.formation.clone()
        },
        wave,
        events,
        ..state.clone()
    }
}

// ── Per-frame tick (nearly pure — RNG is injected) ──────────────────────────

/// Advance the simulation by one tick. `now_ms` is the caller's clock reading
/// and only feeds the shot cooldown; all randomness comes through `rng`.
///
/// Once the game is over the state is frozen: the result equals the input
/// except that no events are reported.
pub fn advance(
    state: &GameState,
    input: &InputSnapshot,
    now_ms: u64,
    rng: &mut impl Rng,
) -> GameState {
    if state.status == GameStatus::GameOver {
        return GameState {
            events: Vec::new(),
            ..state.clone()
        };
    }

    let start = GameState {
        frame: state.frame + 1,
        events: Vec::new(),
        ..state.clone()
    };

    let s = update_player(&start, input, now_ms);
    let s = advance_projectiles(&s, rng);
    let s = advance_formation(&s);
    let s = resolve_collisions(&s);
    check_wave(&s)
}
