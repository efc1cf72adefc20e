use std::fs;

use rect_engine::{Engine, PhysicsConfig};

#[test]
fn config_fixture_parses_and_keeps_defaults() {
    let json = fs::read_to_string("tests/fixtures/moon.json").expect("fixture should exist");

    let config = PhysicsConfig::from_json(&json).expect("fixture should parse");
    assert_eq!(config.gravity, 0.005);
    assert_eq!(config.terminal_velocity, 1.5);
    assert_eq!(config.max_substeps, PhysicsConfig::default().max_substeps);

    let mut engine = Engine::new_flat(16, 16, 4);
    engine.load_config_json(&json).unwrap();
    assert!(engine.config_json().contains("0.005"));
}
