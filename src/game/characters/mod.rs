// Character system
//
// Everything a playable platformer character needs on top of the engine:
// - Controller: input -> velocity, contact probes, animation selection
// - Config: per-character tunables
// - Facing and life/animation state
// - Animator contract and a frame-stepping animation player

pub mod animation;
pub mod config;
pub mod controller;
pub mod error;
pub mod facing;
pub mod state;

// Re-export commonly used types
pub use animation::{AnimationClip, AnimationPlayer, Animator};
pub use config::{AnimationClipNames, CharacterConfig, ConfigError, InputNames};
pub use controller::{CharacterController2D, CharacterControllerBuilder};
pub use error::ControllerError;
pub use facing::Facing;
pub use state::{AnimationState, LifeState};
