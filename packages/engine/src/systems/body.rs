use crate::domain::params::PhysicsParams;

/// The controlled actor.
///
/// `(x, y)` is the top-left corner of the square hitbox, velocity is in world
/// units per tick. Created once at spawn and mutated in place by the step.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Landed on a cell during the last vertical resolution.
    pub grounded: bool,
}

impl Body {
    /// Body at rest at an arbitrary position, airborne.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Fresh body at the spawn pose with zero velocity.
    pub fn at_spawn(params: &PhysicsParams) -> Self {
        Self::new(params.spawn_x, params.spawn_y)
    }

    /// Out-of-world recovery: back to spawn, vertical velocity cleared.
    /// `vx` and `grounded` are left alone.
    #[inline]
    pub fn respawn(&mut self, params: &PhysicsParams) {
        self.x = params.spawn_x;
        self.y = params.spawn_y;
        self.vy = 0.0;
    }

    #[inline]
    pub fn pose(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_pose_is_at_rest() {
        let body = Body::at_spawn(&PhysicsParams::default());
        assert_eq!(body.pose(), (100.0, 400.0));
        assert_eq!((body.vx, body.vy, body.grounded), (0.0, 0.0, false));
    }

    #[test]
    fn respawn_keeps_vx_and_grounded() {
        let params = PhysicsParams::default();
        let mut body = Body { x: 300.0, y: 700.0, vx: 5.0, vy: 9.0, grounded: true };
        body.respawn(&params);
        assert_eq!(body, Body { x: 100.0, y: 400.0, vx: 5.0, vy: 0.0, grounded: true });
    }
}
