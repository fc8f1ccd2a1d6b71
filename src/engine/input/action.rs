// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Name of the horizontal movement axis
pub const HORIZONTAL_AXIS: &str = "Horizontal";

/// Name of the jump button
pub const JUMP_BUTTON: &str = "Jump";

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,

    // Meta
    Pause,
}

impl Action {
    /// Look up the action behind a named button
    pub fn from_button_name(name: &str) -> Option<Self> {
        match name {
            JUMP_BUTTON => Some(Self::Jump),
            "Pause" => Some(Self::Pause),
            _ => None,
        }
    }
}

/// A virtual axis built from a negative and a positive action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
}

impl Axis {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            HORIZONTAL_AXIS => Some(Self::Horizontal),
            _ => None,
        }
    }

    /// (negative, positive) actions driving this axis
    pub fn actions(self) -> (Action, Action) {
        match self {
            Self::Horizontal => (Action::MoveLeft, Action::MoveRight),
        }
    }
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    // Future: Add controller support
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::KeyA), Action::MoveLeft),
        (InputSource::key(KeyCode::ArrowLeft), Action::MoveLeft),
        (InputSource::key(KeyCode::KeyD), Action::MoveRight),
        (InputSource::key(KeyCode::ArrowRight), Action::MoveRight),
        (InputSource::key(KeyCode::Space), Action::Jump),
        (InputSource::key(KeyCode::KeyW), Action::Jump),
        (InputSource::key(KeyCode::Escape), Action::Pause),
    ]
}
