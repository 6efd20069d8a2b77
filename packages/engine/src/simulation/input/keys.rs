use crate::systems::InputState;

use super::GameCore;

pub(super) fn set_key(game: &mut GameCore, code: &str, pressed: bool) -> bool {
    if !game.bindings.is_bound(code) {
        return false;
    }
    if pressed {
        game.held_keys.insert(code.to_string());
    } else if !game.held_keys.remove(code) {
        console_warn!("release of '{}' without a matching press", code);
    }
    true
}

pub(super) fn set_input(game: &mut GameCore, input: InputState) {
    game.manual_input = input;
}

pub(super) fn clear_input(game: &mut GameCore) {
    game.held_keys.clear();
    game.manual_input = InputState::default();
}

pub(super) fn current_input(game: &GameCore) -> InputState {
    game.bindings
        .snapshot(&game.held_keys)
        .merge(game.manual_input)
}
