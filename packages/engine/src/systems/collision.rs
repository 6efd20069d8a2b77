use crate::domain::constants::{BLOCK_SIZE, BODY_SIZE};
use crate::domain::params::PhysicsParams;
use crate::spatial::world::{Obstacle, World};

/// AABB overlap of a default-sized body at `(moving_x, moving_y)` against a
/// default-sized cell.
///
/// All four tests are strict: boxes sharing an edge do not overlap, so a body
/// resting flush on a floor or against a wall is free to move along it.
#[inline]
pub fn overlaps(moving_x: f32, moving_y: f32, obstacle_x: i32, obstacle_y: i32) -> bool {
    overlaps_sized(moving_x, moving_y, BODY_SIZE, obstacle_x, obstacle_y, BLOCK_SIZE)
}

/// [`overlaps`] with explicit body and cell sizes.
#[inline]
pub fn overlaps_sized(
    moving_x: f32,
    moving_y: f32,
    size: f32,
    obstacle_x: i32,
    obstacle_y: i32,
    block: i32,
) -> bool {
    // Far edges in f32: cells near i32::MAX must not overflow.
    let block = block as f32;
    let far_x = obstacle_x as f32 + block;
    let far_y = obstacle_y as f32 + block;
    moving_x < far_x
        && moving_x + size > obstacle_x as f32
        && moving_y < far_y
        && moving_y + size > obstacle_y as f32
}

/// First cell in world order overlapping the body box at `(x, y)`.
#[inline]
pub fn first_overlap<'w>(world: &'w World, x: f32, y: f32, params: &PhysicsParams) -> Option<&'w Obstacle> {
    world
        .iter()
        .find(|o| overlaps_sized(x, y, params.body_size, o.x, o.y, params.block_size))
}

#[inline]
pub fn any_overlap(world: &World, x: f32, y: f32, params: &PhysicsParams) -> bool {
    first_overlap(world, x, y, params).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        // Body's right edge on the cell's left edge.
        assert!(!overlaps(80.0, 100.0, 100, 100));
        // Body's bottom edge on the cell's top edge.
        assert!(!overlaps(100.0, 80.0, 100, 100));
        // Body's left edge on the cell's right edge.
        assert!(!overlaps(140.0, 100.0, 100, 100));
        // Body's top edge on the cell's bottom edge.
        assert!(!overlaps(100.0, 140.0, 100, 100));
    }

    #[test]
    fn any_penetration_overlaps() {
        assert!(overlaps(80.5, 100.0, 100, 100));
        assert!(overlaps(100.0, 80.5, 100, 100));
        assert!(overlaps(139.5, 139.5, 100, 100));
        assert!(overlaps(110.0, 110.0, 100, 100));
    }

    #[test]
    fn cells_at_coordinate_extremes_do_not_overflow() {
        assert!(!overlaps(100.0, 100.0, i32::MAX, 0));
        assert!(!overlaps(100.0, 100.0, 0, i32::MAX));
        assert!(!overlaps_sized(100.0, 100.0, 20.0, i32::MAX - 1, i32::MAX - 1, i32::MAX));
    }

    #[test]
    fn first_overlap_respects_world_order() {
        let params = PhysicsParams::default();
        let world = World::new(vec![Obstacle::new(0, 0), Obstacle::new(100, 580), Obstacle::new(100, 560)]);

        let hit = first_overlap(&world, 100.0, 575.5, &params);
        assert_eq!(hit, Some(&Obstacle::new(100, 580)));
        assert!(!any_overlap(&world, 300.0, 300.0, &params));
    }
}
