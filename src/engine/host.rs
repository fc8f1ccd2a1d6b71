// Host engine contract
//
// The character controller never owns the physics body, the collision world or
// the transform. It talks to them through the traits below, which the rapier
// backend in `engine::physics` implements and tests can mock.

use glam::Vec2;

use super::physics::LayerMask;

/// Access to rigid bodies owned by the host physics engine
pub trait PhysicsBody {
    /// Non-owning reference to a body inside the host world
    type Handle: Copy + std::fmt::Debug;

    /// Check whether the handle still refers to a live body
    fn contains_body(&self, body: Self::Handle) -> bool;

    /// Current linear velocity, or `None` for an unknown handle
    fn linear_velocity(&self, body: Self::Handle) -> Option<Vec2>;

    /// Overwrite the linear velocity (ignored for an unknown handle)
    fn set_linear_velocity(&mut self, body: Self::Handle, velocity: Vec2);

    /// Current gravity multiplier, or `None` for an unknown handle
    fn gravity_scale(&self, body: Self::Handle) -> Option<f32>;

    /// Set the gravity multiplier (1.0 = normal gravity)
    fn set_gravity_scale(&mut self, body: Self::Handle, scale: f32);

    /// Freeze or release rotational freedom
    fn set_rotation_locked(&mut self, body: Self::Handle, locked: bool);

    /// Whether rotation is frozen, or `None` for an unknown handle
    fn is_rotation_locked(&self, body: Self::Handle) -> Option<bool>;
}

/// Geometric queries against the host collision world
pub trait CollisionWorld {
    /// True if the segment `a`-`b` touches any collider on a layer in `mask`
    fn line_intersects_any(&self, a: Vec2, b: Vec2, mask: LayerMask) -> bool;
}

/// Position and scale of the game object the controller is attached to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World position of the object's pivot
    pub position: Vec2,
    /// Local scale; the sign of `x` encodes the sprite flip
    pub local_scale: Vec2,
}

impl Transform {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            local_scale: Vec2::ONE,
        }
    }

    pub fn with_scale(mut self, local_scale: Vec2) -> Self {
        self.local_scale = local_scale;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

/// A line segment in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Horizontal segment of `width` centred on `center`
    pub fn horizontal(center: Vec2, width: f32) -> Self {
        let half = width / 2.0;
        Self {
            start: Vec2::new(center.x - half, center.y),
            end: Vec2::new(center.x + half, center.y),
        }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn midpoint(&self) -> Vec2 {
        (self.start + self.end) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_defaults_to_unit_scale() {
        let transform = Transform::new(Vec2::new(3.0, 4.0));
        assert_eq!(transform.local_scale, Vec2::ONE);
        assert_eq!(Transform::default().position, Vec2::ZERO);
    }

    #[test]
    fn test_horizontal_segment_is_symmetric() {
        let line = LineSegment::horizontal(Vec2::new(2.0, -1.0), 1.5);
        assert_relative_eq!(line.start.x, 1.25);
        assert_relative_eq!(line.end.x, 2.75);
        assert_eq!(line.start.y, -1.0);
        assert_eq!(line.end.y, -1.0);
        assert_relative_eq!(line.length(), 1.5);
        assert_eq!(line.midpoint(), Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_zero_width_segment_collapses_to_point() {
        let line = LineSegment::horizontal(Vec2::new(1.0, 1.0), 0.0);
        assert_eq!(line.start, line.end);
        assert_eq!(line.length(), 0.0);
    }
}
