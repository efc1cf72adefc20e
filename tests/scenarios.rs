use rect_engine::{BlockType, Engine, Entity, NoHooks, PhysicsConfig, Terrain, World};

#[test]
fn bomb_lands_then_blows_a_hole_in_the_floor() {
    let mut engine = Engine::new_flat(32, 32, 10);
    let player = engine.spawn_player(10.0, 12.0).unwrap();
    let bomb = engine.spawn_bomb(12.0, 14.0, 90).unwrap();

    for _ in 0..80 {
        engine.step();
    }
    assert!(engine.on_ground(player));
    assert!(engine.on_ground(bomb));
    let rest = engine.position(bomb).unwrap();
    assert!((rest[1] - 10.3).abs() < 1e-5);
    assert!(engine.take_destroyed_cells().is_empty());

    for _ in 0..10 {
        engine.step();
    }
    assert!(!engine.has_entity(bomb));
    let destroyed = engine.take_destroyed_cells();
    assert!(!destroyed.is_empty());
    assert_eq!(destroyed.len() % 2, 0);
    assert_eq!(engine.get_block(12, 9), BlockType::Air.id());

    // The player took falloff damage but survives.
    let health = engine.health(player).unwrap();
    assert!(health > 0.0 && health < 100.0);
}

#[test]
fn fast_bodies_do_not_tunnel() {
    let mut terrain = Terrain::new(64, 64);
    terrain.fill_rect(0, 0, 63, 0, BlockType::Stone);
    let config = PhysicsConfig { terminal_velocity: 100.0, ..PhysicsConfig::default() };
    let mut world = World::with_config(terrain, config);
    let bullet = Entity::builder(1).physical(32.5, 30.0, 0.2, 0.2).inertial(0.1).velocity(0.0, -50.0).build().unwrap();
    world.insert(bullet).unwrap();

    world.step(&mut NoHooks);
    let (body, motion) = world.get(1).unwrap().motion().unwrap();
    assert!((body.bottom() - 1.0).abs() < 1e-6);
    assert!(motion.on_ground);
}

#[test]
fn thin_platform_of_grasses_is_not_solid() {
    let mut engine = Engine::new(16, 16);
    engine.fill_rect(0, 5, 15, 5, BlockType::Grasses.id());
    engine.fill_rect(0, 0, 15, 2, BlockType::Stone.id());
    let id = engine.spawn_box(8.0, 10.0, 1.0, 1.0, "crate".to_string()).unwrap();

    for _ in 0..120 {
        engine.step();
    }
    let pos = engine.position(id).unwrap();
    assert_eq!(pos[1], 3.5);
}

#[test]
fn unknown_block_ids_are_rejected() {
    let mut engine = Engine::new(4, 4);
    assert!(!engine.set_block(1, 1, 200));
    assert!(engine.set_block(1, 1, BlockType::Soil.id()));
    assert_eq!(engine.get_block(1, 1), BlockType::Soil.id());
    assert!(!engine.set_block(9, 9, BlockType::Soil.id()));
    assert_eq!(engine.get_block(-1, 0), BlockType::Placeholder.id());
}
