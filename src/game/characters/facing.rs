// Left/right orientation

use crate::core::math::sign_or_zero;

/// Which way a character (or its source artwork) faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left
    pub fn sign(self) -> f32 {
        match self {
            Self::Right => 1.0,
            Self::Left => -1.0,
        }
    }

    /// Facing implied by the sign of a value; zero implies nothing
    pub fn from_sign(value: f32) -> Option<Self> {
        match sign_or_zero(value) {
            s if s > 0.0 => Some(Self::Right),
            s if s < 0.0 => Some(Self::Left),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}
