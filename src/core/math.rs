// Math utilities and helper functions

use glam::Vec2;
use rapier2d::prelude::{point, vector, Point, Real, Vector};
use rapier2d::na as nalgebra;

/// Sign of a value as -1, 0 or 1 (unlike `f32::signum`, zero maps to zero)
pub fn sign_or_zero(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Convert a glam vector into a rapier vector
pub fn to_vector(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

/// Convert a glam vector into a rapier point
pub fn to_point(v: Vec2) -> Point<Real> {
    point![v.x, v.y]
}

/// Convert a rapier vector into a glam vector
pub fn from_vector(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}
