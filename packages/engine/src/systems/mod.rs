//! Kinematic body system
//!
//! One controllable square body against a static world of square cells.
//!
//! Current behavior:
//! - Horizontal velocity is re-derived from input every tick.
//! - Gravity always accumulates; `grounded` is re-derived from collisions.
//! - Per-axis resolution: horizontal first (all-or-nothing), then vertical
//!   (snap to the first overlapping cell in world order).
//! - Falling past the bottom of the world respawns in place.

pub mod body;
pub mod collision;
pub mod input;
pub mod step;

pub use body::Body;
pub use collision::overlaps;
pub use input::InputState;
pub use step::step;
