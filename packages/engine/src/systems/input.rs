use serde::{Deserialize, Serialize};

/// Held state of the three actions for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub const fn new(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump }
    }

    /// Horizontal velocity for this tick. Right is checked after left and
    /// wins when both are held.
    #[inline]
    pub fn horizontal_velocity(&self, move_speed: f32) -> f32 {
        let mut vx = 0.0;
        if self.left {
            vx = -move_speed;
        }
        if self.right {
            vx = move_speed;
        }
        vx
    }

    /// Union of two snapshots (an action is held if either holds it).
    pub fn merge(self, other: InputState) -> InputState {
        InputState {
            left: self.left || other.left,
            right: self.right || other.right,
            jump: self.jump || other.jump,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_wins_when_both_held() {
        assert_eq!(InputState::new(true, true, false).horizontal_velocity(5.0), 5.0);
        assert_eq!(InputState::new(true, false, false).horizontal_velocity(5.0), -5.0);
        assert_eq!(InputState::default().horizontal_velocity(5.0), 0.0);
    }

    #[test]
    fn merge_is_per_action_or() {
        let a = InputState::new(true, false, false);
        let b = InputState::new(false, false, true);
        assert_eq!(a.merge(b), InputState::new(true, false, true));
    }
}
