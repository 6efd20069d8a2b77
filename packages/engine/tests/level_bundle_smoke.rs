use std::fs;

use blockstep_engine::{Game, GameCore, Level, Obstacle};

#[test]
fn default_bundle_matches_builtin_level() {
    let json = fs::read_to_string("levels/default.json").expect("levels/default.json should exist");

    let level = Level::from_bundle_json(&json).expect("default.json should parse");
    let builtin = Level::default_level();

    assert_eq!(level.name, builtin.name);
    assert_eq!(level.params, builtin.params);
    assert_eq!(level.world, builtin.world);
}

#[test]
fn towers_bundle_blocks_walking_right() {
    let json = fs::read_to_string("levels/towers.json").expect("levels/towers.json should exist");

    let mut game = Game::from_level_json(json).expect("towers.json should parse");
    assert_eq!(game.core().level_name(), "towers");
    // First tower column sits at x = 3 * 40.
    assert!(game.core().world().obstacles().contains(&Obstacle::new(120, 440)));

    game.set_input(false, true, false);
    for _ in 0..300 {
        game.step();
    }

    // Stopped flush against the first tower, standing on the floor.
    assert_eq!(game.x(), 100.0);
    assert_eq!(game.y(), 540.0);
    assert!(game.grounded());
}

#[test]
fn jumping_over_the_first_tower() {
    let json = fs::read_to_string("levels/towers.json").expect("levels/towers.json should exist");
    let mut core = GameCore::from_level_json(&json).expect("towers.json should parse");

    // Walk to the tower, then hold jump as well.
    core.set_key("KeyD", true);
    for _ in 0..60 {
        core.step();
    }
    core.set_key("Space", true);
    for _ in 0..120 {
        core.step();
    }

    assert!(core.body().x > 160.0, "x = {}", core.body().x);
}
