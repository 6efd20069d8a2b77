use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::systems::input::InputState;

/// Host key codes (`KeyboardEvent.code`) mapped to the three actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub jump: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: codes(&["ArrowLeft", "KeyA"]),
            right: codes(&["ArrowRight", "KeyD"]),
            jump: codes(&["Space", "ArrowUp", "KeyW"]),
        }
    }
}

fn codes(list: &[&str]) -> Vec<String> {
    list.iter().map(|c| c.to_string()).collect()
}

impl KeyBindings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// True if `code` drives any action.
    pub fn is_bound(&self, code: &str) -> bool {
        [&self.left, &self.right, &self.jump]
            .iter()
            .any(|list| list.iter().any(|c| c == code))
    }

    /// Snapshot of which actions are held, given the currently pressed keys.
    pub fn snapshot(&self, held: &HashSet<String>) -> InputState {
        let any_held = |list: &[String]| list.iter().any(|c| held.contains(c));
        InputState {
            left: any_held(self.left.as_slice()),
            right: any_held(self.right.as_slice()),
            jump: any_held(self.jump.as_slice()),
        }
    }
}
