use crate::domain::bindings::KeyBindings;

use super::perf_stats::PerfStats;
use super::GameCore;

pub(super) fn enable_perf_metrics(game: &mut GameCore, enabled: bool) {
    game.perf_enabled = enabled;
    if !enabled {
        game.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(game: &GameCore) -> PerfStats {
    game.perf_stats.clone()
}

pub(super) fn load_key_bindings_json(game: &mut GameCore, json: &str) -> Result<(), String> {
    let bindings = KeyBindings::from_json(json)?;
    console_log!(
        "key bindings: left {:?}, right {:?}, jump {:?}",
        bindings.left,
        bindings.right,
        bindings.jump
    );
    game.bindings = bindings;
    // Keys held under the old map would otherwise stay stuck.
    game.held_keys.clear();
    Ok(())
}
