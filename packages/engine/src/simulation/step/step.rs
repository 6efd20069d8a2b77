use crate::systems;

use super::{GameCore, PerfTimer};

pub(super) fn step(game: &mut GameCore) {
    // Snapshot once; nothing can change it mid-tick.
    let input = game.current_input();

    let perf_on = game.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    systems::step(&mut game.body, &game.level.world, input, &game.level.params);
    game.frame = game.frame.wrapping_add(1);

    if let Some(t0) = step_start {
        game.perf_stats.step_ms = t0.elapsed_ms();
        game.perf_stats.frame = game.frame;
        game.perf_stats.obstacle_count = game.level.world.len();
    }
}
