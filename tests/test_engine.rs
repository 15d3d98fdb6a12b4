use invaders::clock::{Clock, ManualClock, SystemClock};
use invaders::compute::alive_enemy_count;
use invaders::config::Playfield;
use invaders::engine::Engine;
use invaders::entities::*;

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

const IDLE: InputSnapshot = InputSnapshot { left: false, right: false, fire: false };
const FIRE: InputSnapshot = InputSnapshot { left: false, right: false, fire: true };

fn quiet_engine(clock: ManualClock) -> Engine<StepRng, ManualClock> {
    Engine::new(Playfield::default(), StepRng::new(u64::MAX, 0), clock)
}

// ── Clocks ────────────────────────────────────────────────────────────────────

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new(10);
    let handle = clock.clone();
    handle.advance(5);
    assert_eq!(clock.now_ms(), 15);
    handle.set(1_000);
    assert_eq!(clock.now_ms(), 1_000);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(b >= a);
}

// ── Engine ────────────────────────────────────────────────────────────────────

#[test]
fn engine_starts_fresh() {
    let engine = quiet_engine(ManualClock::default());
    let s = engine.state();
    assert_eq!(s.score, 0);
    assert_eq!(s.lives, 3);
    assert_eq!(alive_enemy_count(s), 50);
    assert!(!engine.is_over());
    assert!(engine.events().is_empty());
}

#[test]
fn engine_advance_moves_formation() {
    let mut engine = quiet_engine(ManualClock::default());
    let s = engine.advance(&IDLE);
    assert_eq!(s.enemies[0].x, 51.0);
    assert_eq!(s.frame, 1);
}

#[test]
fn cooldown_follows_injected_clock() {
    let clock = ManualClock::new(0);
    let mut engine = quiet_engine(clock.clone());

    engine.advance(&FIRE);
    clock.advance(249);
    engine.advance(&FIRE);
    assert_eq!(engine.state().player_bullets.len(), 1);

    clock.advance(1); // 250 ms after the first shot
    engine.advance(&FIRE);
    assert_eq!(engine.state().player_bullets.len(), 2);
}

#[test]
fn cooldown_ignores_tick_count() {
    // Many fast ticks inside one cooldown window still yield one shot.
    let clock = ManualClock::new(0);
    let mut engine = quiet_engine(clock.clone());
    for _ in 0..20 {
        engine.advance(&FIRE);
        clock.advance(10);
    }
    assert_eq!(engine.state().player_bullets.len(), 1);
}

#[test]
fn game_over_latches_until_restart() {
    // Left alone, the player is eventually shot down or overrun.
    let mut engine = Engine::new(
        Playfield::default(),
        StdRng::seed_from_u64(7),
        ManualClock::default(),
    );
    let mut ticks = 0;
    while !engine.is_over() {
        engine.advance(&IDLE);
        ticks += 1;
        assert!(ticks < 100_000, "game never ended");
    }

    let frozen = engine.state().clone();
    for _ in 0..10 {
        engine.advance(&FIRE);
        assert!(engine.is_over());
        assert!(engine.events().is_empty());
    }
    assert_eq!(engine.state().frame, frozen.frame);
    assert_eq!(engine.state().enemies, frozen.enemies);

    engine.restart();
    let s = engine.state();
    assert!(!engine.is_over());
    assert_eq!(s.score, 0);
    assert_eq!(s.lives, 3);
    assert_eq!(s.formation.speed, 1.0);
    assert_eq!(alive_enemy_count(s), 50);
    assert!(s.player_bullets.is_empty());
    assert!(s.enemy_bullets.is_empty());
    assert_eq!(s.player.x, 375.0);
    assert_eq!(
        engine.events(),
        &[GameEvent::ScoreChanged(0), GameEvent::LivesChanged(3)]
    );
}

#[test]
fn restart_keeps_playfield() {
    let playfield = Playfield::new(1000.0, 700.0).unwrap();
    let mut engine = Engine::new(playfield, StepRng::new(u64::MAX, 0), ManualClock::default());
    engine.advance(&IDLE);
    engine.restart();
    assert_eq!(engine.state().playfield, playfield);
    assert_eq!(engine.state().player.x, 475.0);
    assert_eq!(engine.state().player.y, 640.0);
}
