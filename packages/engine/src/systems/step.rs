use crate::domain::params::PhysicsParams;
use crate::spatial::world::World;

use super::body::Body;
use super::collision::{any_overlap, first_overlap};
use super::input::InputState;

/// Advance the body by one tick.
///
/// Order is fixed: input, gravity, horizontal, vertical, out-of-world
/// recovery. The vertical pass uses the x committed by the horizontal pass.
/// Total and allocation-free.
pub fn step(body: &mut Body, world: &World, input: InputState, params: &PhysicsParams) {
    apply_input(body, input, params);
    resolve_horizontal(body, world, params);
    resolve_vertical(body, world, params);
    recover_out_of_world(body, params);
}

/// Recompute vx, fire the jump impulse if grounded, then add gravity.
pub(crate) fn apply_input(body: &mut Body, input: InputState, params: &PhysicsParams) {
    body.vx = input.horizontal_velocity(params.move_speed);

    if input.jump && body.grounded {
        body.vy = params.jump_strength;
        body.grounded = false;
    }

    // Unconditional, even when grounded.
    body.vy += params.gravity;
}

/// All-or-nothing: the move is dropped if it hits any cell or leaves
/// `[0, world_width - body_size]`.
pub(crate) fn resolve_horizontal(body: &mut Body, world: &World, params: &PhysicsParams) {
    let candidate_x = body.x + body.vx;

    if any_overlap(world, candidate_x, body.y, params) {
        return;
    }
    if candidate_x >= 0.0 && candidate_x <= params.max_x() {
        body.x = candidate_x;
    }
}

/// Snap against the first overlapping cell in world order. No bound clamp.
pub(crate) fn resolve_vertical(body: &mut Body, world: &World, params: &PhysicsParams) {
    let candidate_y = body.y + body.vy;
    body.grounded = false;

    match first_overlap(world, body.x, candidate_y, params) {
        Some(cell) if body.vy > 0.0 => {
            // Landed on top.
            body.y = (cell.y as f32) - params.body_size;
            body.vy = 0.0;
            body.grounded = true;
        }
        Some(cell) => {
            // Head bump (or zero-velocity overlap): sit under the cell.
            body.y = cell.y as f32 + params.block_size as f32;
            body.vy = 0.0;
        }
        None => body.y = candidate_y,
    }
}

pub(crate) fn recover_out_of_world(body: &mut Body, params: &PhysicsParams) {
    if body.y > params.world_height {
        body.respawn(params);
    }
}
