//! World - static obstacle layout
//!
//! An ordered, fixed set of square cells. Built once (from a level bundle or
//! the built-in layout) and never mutated afterwards; the step only reads it.
//!
//! Order matters: vertical resolution stops at the first overlapping cell.

use serde::{Deserialize, Serialize};

/// Top-left corner of one solid cell. Side length comes from
/// `PhysicsParams::block_size`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: i32,
    pub y: i32,
}

impl Obstacle {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    // Boxed slice: the layout can't grow or reallocate once built.
    obstacles: Box<[Obstacle]>,
}

impl World {
    pub fn new(obstacles: Vec<Obstacle>) -> Self {
        Self {
            obstacles: obstacles.into_boxed_slice(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }
}

impl<'a> IntoIterator for &'a World {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}

impl FromIterator<Obstacle> for World {
    fn from_iter<I: IntoIterator<Item = Obstacle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let world: World = [Obstacle::new(40, 0), Obstacle::new(0, 0), Obstacle::new(80, 40)]
            .into_iter()
            .collect();

        let xs: Vec<i32> = world.iter().map(|o| o.x).collect();
        assert_eq!(xs, vec![40, 0, 80]);
        assert_eq!(world.len(), 3);
        assert!(!world.is_empty());
    }

    #[test]
    fn empty_world_has_no_cells() {
        let world = World::empty();
        assert!(world.is_empty());
        assert_eq!((&world).into_iter().count(), 0);
    }
}
