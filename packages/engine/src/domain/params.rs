use serde::{Deserialize, Serialize};

use super::constants::{
    BLOCK_SIZE, BODY_SIZE, GRAVITY, JUMP_STRENGTH, MOVE_SPEED, SPAWN_X, SPAWN_Y, WORLD_HEIGHT,
    WORLD_WIDTH,
};

/// Physics tuning consumed by the step.
///
/// Missing fields in a level bundle fall back to the defaults in
/// [`crate::domain::constants`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub move_speed: f32,
    pub gravity: f32,
    pub jump_strength: f32,
    pub body_size: f32,
    pub block_size: i32,
    pub world_width: f32,
    pub world_height: f32,
    pub spawn_x: f32,
    pub spawn_y: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            body_size: BODY_SIZE,
            block_size: BLOCK_SIZE,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
        }
    }
}

impl PhysicsParams {
    /// Reject tunings the step can't run sensibly with.
    pub fn validate(&self) -> Result<(), String> {
        let floats = [
            ("move_speed", self.move_speed),
            ("gravity", self.gravity),
            ("jump_strength", self.jump_strength),
            ("body_size", self.body_size),
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(format!("{} must be finite, got {}", name, value));
            }
        }

        if self.body_size <= 0.0 {
            return Err(format!("body_size must be positive, got {}", self.body_size));
        }
        if self.block_size <= 0 {
            return Err(format!("block_size must be positive, got {}", self.block_size));
        }
        if self.world_width < self.body_size || self.world_height < self.body_size {
            return Err(format!(
                "world {}x{} is smaller than the body ({})",
                self.world_width, self.world_height, self.body_size
            ));
        }
        if self.jump_strength > 0.0 {
            return Err(format!(
                "jump_strength points down (+y), got {}",
                self.jump_strength
            ));
        }

        let max_x = self.world_width - self.body_size;
        if self.spawn_x < 0.0 || self.spawn_x > max_x {
            return Err(format!("spawn_x {} outside [0, {}]", self.spawn_x, max_x));
        }
        if self.spawn_y < 0.0 || self.spawn_y > self.world_height {
            return Err(format!(
                "spawn_y {} outside [0, {}]",
                self.spawn_y, self.world_height
            ));
        }

        Ok(())
    }

    /// Rightmost x the body may occupy.
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.world_width - self.body_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(PhysicsParams::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let params: PhysicsParams = serde_json::from_str(r#"{ "gravity": 0.25 }"#).unwrap();
        assert_eq!(params.gravity, 0.25);
        assert_eq!(params.move_speed, MOVE_SPEED);
        assert_eq!(params.block_size, BLOCK_SIZE);
    }

    #[test]
    fn rejects_bad_tunings() {
        let mut p = PhysicsParams::default();
        p.body_size = 0.0;
        assert!(p.validate().is_err());

        let mut p = PhysicsParams::default();
        p.jump_strength = 12.0;
        assert!(p.validate().is_err());

        let mut p = PhysicsParams::default();
        p.gravity = f32::NAN;
        assert!(p.validate().unwrap_err().contains("gravity"));

        let mut p = PhysicsParams::default();
        p.spawn_x = 790.0;
        assert!(p.validate().unwrap_err().contains("spawn_x"));
    }
}
