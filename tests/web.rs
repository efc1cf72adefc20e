//! Browser smoke test: `wasm-pack test --headless --chrome`
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use rect_engine::Engine;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn engine_steps_in_the_browser() {
    rect_engine::init();
    let mut engine = Engine::new_flat(32, 32, 8);
    let id = engine.spawn_player(4.0, 20.0).unwrap();
    for _ in 0..120 {
        engine.step();
    }
    assert!(engine.on_ground(id));
    assert!(engine.load_config_json("{\"gravity\": \"heavy\"}").is_err());
}
