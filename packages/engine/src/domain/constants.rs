//! Default tuning, matching the original hand-tuned platformer.
//!
//! Units are world pixels and ticks (one tick ≈ 16 ms at the host's cadence).

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Side of the body's square hitbox
pub const BODY_SIZE: f32 = 20.0;
/// Side of an obstacle cell
pub const BLOCK_SIZE: i32 = 40;

pub const GRAVITY: f32 = 0.5;
/// Upward impulse (negative y is up)
pub const JUMP_STRENGTH: f32 = -12.0;
pub const MOVE_SPEED: f32 = 5.0;

pub const SPAWN_X: f32 = 100.0;
pub const SPAWN_Y: f32 = 400.0;
