// Input handling system
//
// The character controller only sees the `InputService` trait: named axes and
// buttons, sampled once per frame. Everything below it turns winit keyboard
// events into that view.
//
// ## Architecture
//
// - `action`: Game actions, the named axis/button, default key bindings
// - `config`: Key remapping table
// - `player`: Per-frame action state, implements `InputService`
// - `manager`: Feeds winit `KeyEvent`s into the player state

pub mod action;
pub mod config;
pub mod manager;
pub mod player;

pub use action::{Action, Axis, InputSource, HORIZONTAL_AXIS, JUMP_BUTTON};
pub use config::InputConfig;
pub use manager::InputManager;
pub use player::PlayerInput;

/// Named-axis and named-button input, as the host exposes it to game objects
pub trait InputService {
    /// Unsmoothed axis value in [-1, 1]; unknown axes read as 0
    fn axis_raw(&self, axis: &str) -> f32;

    /// True only on the frame the button went down
    fn button_down(&self, button: &str) -> bool;
}
