// Character life cycle and animation state selection

use super::config::AnimationClipNames;

/// One-way life cycle: Alive -> Dead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifeState {
    /// Accepts input, drives physics and animation
    #[default]
    Alive,
    /// Terminal; every update is a no-op
    Dead,
}

impl LifeState {
    pub fn is_alive(&self) -> bool {
        matches!(self, Self::Alive)
    }

    /// Move to `Dead`. Returns true only on the actual transition.
    pub fn die(&mut self) -> bool {
        let was_alive = self.is_alive();
        *self = Self::Dead;
        was_alive
    }
}

/// Animation picked for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationState {
    /// Airborne
    Jump,
    /// Grounded and not moving horizontally
    Idle,
    /// Grounded and moving horizontally
    Walk,
}

impl AnimationState {
    /// Pick the animation for this frame; first match wins:
    /// airborne -> Jump, standing still -> Idle, otherwise Walk.
    ///
    /// Without a threshold "standing still" means `velocity_x == 0.0` exactly.
    pub fn select(grounded: bool, velocity_x: f32, idle_threshold: Option<f32>) -> Self {
        if !grounded {
            return Self::Jump;
        }

        let still = match idle_threshold {
            Some(threshold) => velocity_x.abs() <= threshold,
            None => velocity_x == 0.0,
        };

        if still {
            Self::Idle
        } else {
            Self::Walk
        }
    }

    /// Clip name configured for this state
    pub fn clip_name<'a>(&self, clips: &'a AnimationClipNames) -> &'a str {
        match self {
            Self::Jump => &clips.jump,
            Self::Idle => &clips.idle,
            Self::Walk => &clips.walk,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_life_state() {
        assert!(LifeState::default().is_alive());
    }

    #[test]
    fn test_death_is_terminal() {
        let mut life = LifeState::Alive;
        assert!(life.die());
        assert!(!life.is_alive());

        // Second death is not a transition
        assert!(!life.die());
        assert_eq!(life, LifeState::Dead);
    }

    #[test]
    fn test_airborne_is_jump() {
        assert_eq!(AnimationState::select(false, 0.0, None), AnimationState::Jump);
        assert_eq!(AnimationState::select(false, 5.0, None), AnimationState::Jump);
        assert_eq!(
            AnimationState::select(false, -2.0, Some(0.5)),
            AnimationState::Jump
        );
    }

    #[test]
    fn test_grounded_exact_zero_is_idle() {
        assert_eq!(AnimationState::select(true, 0.0, None), AnimationState::Idle);
        assert_eq!(AnimationState::select(true, -0.0, None), AnimationState::Idle);
    }

    #[test]
    fn test_grounded_moving_is_walk() {
        assert_eq!(AnimationState::select(true, 3.5, None), AnimationState::Walk);
        assert_eq!(AnimationState::select(true, -3.5, None), AnimationState::Walk);
        // Exact test: residual drift still walks
        assert_eq!(AnimationState::select(true, 1e-6, None), AnimationState::Walk);
    }

    #[test]
    fn test_idle_threshold() {
        assert_eq!(
            AnimationState::select(true, 1e-6, Some(0.01)),
            AnimationState::Idle
        );
        assert_eq!(
            AnimationState::select(true, -0.01, Some(0.01)),
            AnimationState::Idle
        );
        assert_eq!(
            AnimationState::select(true, 0.5, Some(0.01)),
            AnimationState::Walk
        );
    }

    #[test]
    fn test_clip_names() {
        let clips = AnimationClipNames::default();
        assert_eq!(AnimationState::Jump.clip_name(&clips), "Jump");
        assert_eq!(AnimationState::Idle.clip_name(&clips), "Idle");
        assert_eq!(AnimationState::Walk.clip_name(&clips), "Walk");
    }
}
