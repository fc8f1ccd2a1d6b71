// Character tunables, fixed for the lifetime of a scene

use super::facing::Facing;
use crate::engine::input::{HORIZONTAL_AXIS, JUMP_BUTTON};
use crate::engine::physics::{CollisionLayer, LayerMask};

/// Configuration errors caught before a controller is built
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{0} must not be empty")]
    EmptyName(&'static str),

    #[error("idle speed threshold must be non-negative, got {0}")]
    NegativeIdleThreshold(f32),
}

/// Animation clip names issued to the animator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationClipNames {
    pub jump: String,
    pub idle: String,
    pub walk: String,
}

impl Default for AnimationClipNames {
    fn default() -> Self {
        Self {
            jump: "Jump".to_string(),
            idle: "Idle".to_string(),
            walk: "Walk".to_string(),
        }
    }
}

/// Names the controller samples from the input service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputNames {
    pub horizontal_axis: String,
    pub jump_button: String,
}

impl Default for InputNames {
    fn default() -> Self {
        Self {
            horizontal_axis: HORIZONTAL_AXIS.to_string(),
            jump_button: JUMP_BUTTON.to_string(),
        }
    }
}

/// Tunables for one character
///
/// Offsets are measured from the transform position. The contact probe lines
/// span `width` centred on the position at `foot_offset` / `head_offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterConfig {
    // Contact
    /// Layers the foot and head lines test against
    pub ground_mask: LayerMask,
    /// Direction the sprite artwork is drawn facing
    pub image_direction: Facing,

    // Animation
    pub clips: AnimationClipNames,

    // Body
    /// Uniform sprite scale (sign is driven by facing)
    pub body_scale: f32,
    /// Vertical offset of the ceiling probe line
    pub head_offset: f32,
    /// Vertical offset of the ground probe line
    pub foot_offset: f32,
    /// Length of both probe lines
    pub width: f32,
    /// Gravity multiplier applied to the body at start
    pub gravity_scale: f32,

    // Movement
    /// Horizontal speed at full axis deflection (units/second)
    pub move_speed: f32,
    /// Vertical velocity set by a jump
    pub jump_scale: f32,
    /// Vertical velocity forced while the head touches a ceiling
    pub ceiling_bounce: f32,
    /// Facing used until the transform's scale says otherwise
    pub default_facing: Facing,
    /// Speed below which a grounded character counts as idle.
    /// `None` keeps the exact-zero test.
    pub idle_speed_threshold: Option<f32>,

    // Input
    /// Whether the controller samples input itself each frame
    pub input_enabled: bool,
    pub input: InputNames,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            ground_mask: LayerMask::from(CollisionLayer::Ground),
            image_direction: Facing::Right,
            clips: AnimationClipNames::default(),
            body_scale: 1.0,
            head_offset: 1.0,
            foot_offset: -1.0,
            width: 1.0,
            gravity_scale: 1.0,
            move_speed: 5.0,
            jump_scale: 10.0,
            ceiling_bounce: -1.0,
            default_facing: Facing::Right,
            idle_speed_threshold: None,
            input_enabled: true,
            input: InputNames::default(),
        }
    }
}

impl CharacterConfig {
    pub fn with_ground_mask(mut self, mask: LayerMask) -> Self {
        self.ground_mask = mask;
        self
    }

    pub fn with_image_direction(mut self, direction: Facing) -> Self {
        self.image_direction = direction;
        self
    }

    pub fn with_clips(mut self, jump: &str, idle: &str, walk: &str) -> Self {
        self.clips = AnimationClipNames {
            jump: jump.to_string(),
            idle: idle.to_string(),
            walk: walk.to_string(),
        };
        self
    }

    pub fn with_body_scale(mut self, scale: f32) -> Self {
        self.body_scale = scale;
        self
    }

    /// Set the head/foot probe offsets and the probe width
    pub fn with_probes(mut self, head_offset: f32, foot_offset: f32, width: f32) -> Self {
        self.head_offset = head_offset;
        self.foot_offset = foot_offset;
        self.width = width;
        self
    }

    pub fn with_gravity_scale(mut self, scale: f32) -> Self {
        self.gravity_scale = scale;
        self
    }

    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    pub fn with_jump_scale(mut self, jump_scale: f32) -> Self {
        self.jump_scale = jump_scale;
        self
    }

    pub fn with_ceiling_bounce(mut self, velocity: f32) -> Self {
        self.ceiling_bounce = velocity;
        self
    }

    pub fn with_default_facing(mut self, facing: Facing) -> Self {
        self.default_facing = facing;
        self
    }

    pub fn with_idle_speed_threshold(mut self, threshold: f32) -> Self {
        self.idle_speed_threshold = Some(threshold);
        self
    }

    pub fn with_input_enabled(mut self, enabled: bool) -> Self {
        self.input_enabled = enabled;
        self
    }

    /// Check that every number is finite and every name is set.
    /// Zero width is allowed; it yields zero-length probe lines that act as
    /// point tests.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let numbers = [
            ("body_scale", self.body_scale),
            ("head_offset", self.head_offset),
            ("foot_offset", self.foot_offset),
            ("width", self.width),
            ("gravity_scale", self.gravity_scale),
            ("move_speed", self.move_speed),
            ("jump_scale", self.jump_scale),
            ("ceiling_bounce", self.ceiling_bounce),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        if let Some(threshold) = self.idle_speed_threshold {
            if !threshold.is_finite() {
                return Err(ConfigError::NotFinite {
                    field: "idle_speed_threshold",
                    value: threshold,
                });
            }
            if threshold < 0.0 {
                return Err(ConfigError::NegativeIdleThreshold(threshold));
            }
        }

        let names = [
            ("jump clip", &self.clips.jump),
            ("idle clip", &self.clips.idle),
            ("walk clip", &self.clips.walk),
            ("horizontal axis", &self.input.horizontal_axis),
            ("jump button", &self.input.jump_button),
        ];
        for (field, name) in names {
            if name.is_empty() {
                return Err(ConfigError::EmptyName(field));
            }
        }

        Ok(())
    }
}
