use std::collections::HashMap;

use invaders::config::{GameConfig, Playfield, ENV_HEIGHT, ENV_SEED, ENV_WIDTH};
use invaders::error::ConfigError;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

// ── Playfield ─────────────────────────────────────────────────────────────────

#[test]
fn default_playfield_is_800_by_600() {
    let p = Playfield::default();
    assert_eq!(p.width(), 800.0);
    assert_eq!(p.height(), 600.0);
    assert_eq!(Playfield::new(800.0, 600.0), Ok(p));
}

#[test]
fn rejects_non_positive_dimensions() {
    assert_eq!(
        Playfield::new(0.0, 600.0),
        Err(ConfigError::NonPositiveDimension { name: "width", value: 0.0 })
    );
    assert_eq!(
        Playfield::new(800.0, -1.0),
        Err(ConfigError::NonPositiveDimension { name: "height", value: -1.0 })
    );
}

#[test]
fn rejects_non_finite_dimensions() {
    assert!(matches!(
        Playfield::new(f32::INFINITY, 600.0),
        Err(ConfigError::NonPositiveDimension { name: "width", .. })
    ));
    assert!(matches!(
        Playfield::new(800.0, f32::NAN),
        Err(ConfigError::NonPositiveDimension { name: "height", .. })
    ));
}

#[test]
fn rejects_playfield_narrower_than_grid() {
    // Grid right edge: 9 * 60 + 50 + 40 = 630
    assert_eq!(
        Playfield::new(630.0, 600.0),
        Err(ConfigError::TooNarrow { width: 630.0, required: 630.0 })
    );
    assert!(Playfield::new(631.0, 600.0).is_ok());
}

#[test]
fn rejects_playfield_too_short_for_player() {
    // Grid bottom edge 280 plus the 60-unit player offset
    assert_eq!(
        Playfield::new(800.0, 340.0),
        Err(ConfigError::TooShort { height: 340.0, required: 340.0 })
    );
    assert!(Playfield::new(800.0, 341.0).is_ok());
}

#[test]
fn config_error_messages_name_the_problem() {
    let err = Playfield::new(-5.0, 600.0).unwrap_err();
    assert!(err.to_string().contains("width"));
    let err = Playfield::new(100.0, 600.0).unwrap_err();
    assert!(err.to_string().contains("630"));
}

// ── GameConfig ────────────────────────────────────────────────────────────────

#[test]
fn config_defaults_without_env() {
    let cfg = GameConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, GameConfig::default());
    assert_eq!(cfg.seed, None);
}

#[test]
fn config_reads_all_vars() {
    let cfg = GameConfig::from_lookup(lookup(&[
        (ENV_WIDTH, "1024"),
        (ENV_HEIGHT, " 768 "),
        (ENV_SEED, "42"),
    ]))
    .unwrap();
    assert_eq!(cfg.playfield.width(), 1024.0);
    assert_eq!(cfg.playfield.height(), 768.0);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn config_rejects_unparsable_var() {
    let err = GameConfig::from_lookup(lookup(&[(ENV_SEED, "soon")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidEnv { var: ENV_SEED, value: "soon".to_string() }
    );
}

#[test]
fn config_propagates_playfield_errors() {
    let err = GameConfig::from_lookup(lookup(&[(ENV_WIDTH, "-800")])).unwrap_err();
    assert!(matches!(err, ConfigError::NonPositiveDimension { name: "width", .. }));
}
