use std::collections::HashSet;

use crate::domain::bindings::KeyBindings;
use crate::domain::level::Level;
use crate::systems::{Body, InputState};

use super::perf_stats::PerfStats;
use super::render_extract::RECT_STRIDE;
use super::GameCore;

pub(super) fn create_game_core(level: Level) -> GameCore {
    // Every obstacle plus the body.
    let rect_capacity = (level.world.len() + 1) * RECT_STRIDE;
    let body = Body::at_spawn(&level.params);
    log_level(&level);

    GameCore {
        level,
        body,
        bindings: KeyBindings::default(),
        held_keys: HashSet::new(),
        manual_input: InputState::default(),
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        render_rects: Vec::with_capacity(rect_capacity),
    }
}

pub(super) fn install_level(game: &mut GameCore, level: Level) {
    log_level(&level);
    game.body = Body::at_spawn(&level.params);
    game.level = level;
    game.frame = 0;
    game.render_rects.clear();
    game.perf_stats.reset();
}

fn log_level(level: &Level) {
    console_log!(
        "level '{}' loaded: {} obstacles, spawn ({}, {})",
        level.name,
        level.world.len(),
        level.params.spawn_x,
        level.params.spawn_y
    );
}
