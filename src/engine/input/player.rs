// Per-player input state management

use super::action::{Action, Axis};
use super::InputService;
use std::collections::HashSet;

/// Input state for the local player, refreshed once per frame
#[derive(Debug, Default)]
pub struct PlayerInput {
    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions pressed since the last frame update
    just_pressed: HashSet<Action>,

    /// Actions released since the last frame update
    just_released: HashSet<Action>,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: Action) -> bool {
        self.just_released.contains(&action)
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Start a new frame: forget edge events, keep held actions
    pub fn update(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Raw value of a virtual axis: -1, 0 or 1
    pub fn axis(&self, axis: Axis) -> f32 {
        let (negative, positive) = axis.actions();
        let mut value = 0.0;
        if self.is_pressed(negative) {
            value -= 1.0;
        }
        if self.is_pressed(positive) {
            value += 1.0;
        }
        value
    }
}

impl InputService for PlayerInput {
    fn axis_raw(&self, axis: &str) -> f32 {
        Axis::from_name(axis)
            .map(|axis| self.axis(axis))
            .unwrap_or(0.0)
    }

    fn button_down(&self, button: &str) -> bool {
        Action::from_button_name(button)
            .map(|action| self.just_pressed(action))
            .unwrap_or(false)
    }
}
