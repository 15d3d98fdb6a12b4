use invaders::collision::{Hitbox, Rect};
use invaders::compute::init_state;
use invaders::config::Playfield;
use invaders::entities::*;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_eq!(Direction::Left, Direction::Left);
    assert_ne!(Direction::Left, Direction::Right);

    let input = InputSnapshot { left: true, ..InputSnapshot::default() };
    assert_eq!(input.clone(), input);
    assert!(!input.right && !input.fire);
}

#[test]
fn direction_sign_and_reverse() {
    assert_eq!(Direction::Left.sign(), -1.0);
    assert_eq!(Direction::Right.sign(), 1.0);
    assert_eq!(Direction::Left.reversed(), Direction::Right);
    assert_eq!(Direction::Right.reversed().reversed(), Direction::Right);
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Playfield::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies[0].alive = false;
    cloned.player_bullets.push(Bullet { x: 5.0, y: 5.0, width: 4.0, height: 10.0, dy: -7.0 });

    assert_eq!(original.player.x, 375.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies[0].alive);
    assert!(original.player_bullets.is_empty());
}

// ── Rectangle overlap ─────────────────────────────────────────────────────────

#[test]
fn overlapping_rects_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(5.0, 5.0, 10.0, 10.0);
    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
}

#[test]
fn touching_edges_do_not_collide() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
}

#[test]
fn contained_rect_collides() {
    let outer = Rect::new(0.0, 0.0, 40.0, 30.0);
    let inner = Rect::new(18.0, 10.0, 4.0, 10.0);
    assert!(outer.overlaps(&inner));
    assert!(inner.overlaps(&outer));
}

#[test]
fn hitbox_matches_entity_fields() {
    let enemy = Enemy { x: 50.0, y: 60.0, width: 40.0, height: 30.0, alive: true };
    assert_eq!(enemy.rect(), Rect::new(50.0, 60.0, 40.0, 30.0));
    assert_eq!(enemy.rect().right(), 90.0);
    assert_eq!(enemy.rect().bottom(), 90.0);

    let bullet = Bullet { x: 60.0, y: 80.0, width: 4.0, height: 10.0, dy: -7.0 };
    assert!(bullet.collides_with(&enemy));
    let far = Bullet { y: 200.0, ..bullet };
    assert!(!far.collides_with(&enemy));
}
