// Input manager - feeds winit keyboard events into the player's input state

use super::action::{Action, InputSource};
use super::config::InputConfig;
use super::player::PlayerInput;
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Translates raw keyboard events into action state for the local player
#[derive(Debug)]
pub struct InputManager {
    config: InputConfig,
    player: PlayerInput,
}

impl InputManager {
    pub fn new(config: InputConfig) -> Self {
        Self {
            config,
            player: PlayerInput::new(),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state, event.repeat);
        }
    }

    /// Apply a key transition; OS key repeats never count as new presses
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        let Some(action) = self.config.get_action(InputSource::key(key_code)) else {
            return;
        };

        match state {
            ElementState::Pressed if !repeat => self.player.press(action),
            ElementState::Pressed => {}
            ElementState::Released => self.player.release(action),
        }
    }

    /// Start a new frame. Call once per frame after the game consumed input.
    pub fn update(&mut self) {
        self.player.update();
    }

    pub fn player(&self) -> &PlayerInput {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerInput {
        &mut self.player
    }

    pub fn config_mut(&mut self) -> &mut InputConfig {
        &mut self.config
    }

    /// Check if an action was pressed this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.player.just_pressed(action)
    }

    /// Drop all held keys (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.player.reset();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(InputConfig::with_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::InputService;

    #[test]
    fn test_key_press_maps_to_action() {
        let mut manager = InputManager::default();
        manager.process_key(KeyCode::KeyD, ElementState::Pressed, false);

        assert!(manager.player().is_pressed(Action::MoveRight));
        assert_eq!(manager.player().axis_raw("Horizontal"), 1.0);
    }

    #[test]
    fn test_key_repeat_is_ignored() {
        let mut manager = InputManager::default();
        manager.process_key(KeyCode::Space, ElementState::Pressed, true);
        assert!(!manager.just_pressed(Action::Jump));
    }

    #[test]
    fn test_release_and_frame_update() {
        let mut manager = InputManager::default();
        manager.process_key(KeyCode::Space, ElementState::Pressed, false);
        assert!(manager.player().button_down("Jump"));

        manager.update();
        assert!(!manager.player().button_down("Jump"));
        assert!(manager.player().is_pressed(Action::Jump));

        manager.process_key(KeyCode::Space, ElementState::Released, false);
        assert!(manager.player().just_released(Action::Jump));
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let mut manager = InputManager::default();
        manager.process_key(KeyCode::KeyQ, ElementState::Pressed, false);
        assert_eq!(manager.player().axis_raw("Horizontal"), 0.0);
    }

    #[test]
    fn test_remapped_key() {
        let mut manager = InputManager::default();
        manager
            .config_mut()
            .bind(InputSource::key(KeyCode::KeyJ), Action::Jump);
        manager.process_key(KeyCode::KeyJ, ElementState::Pressed, false);
        assert!(manager.just_pressed(Action::Jump));
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::default();
        manager.process_key(KeyCode::KeyA, ElementState::Pressed, false);
        manager.reset();
        assert_eq!(manager.player_mut().axis_raw("Horizontal"), 0.0);
    }
}
