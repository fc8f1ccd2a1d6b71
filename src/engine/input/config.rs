// Input configuration and remapping

use super::action::{default_bindings, Action, InputSource};
use std::collections::HashMap;

/// Maps input sources (keys) to game actions
#[derive(Debug, Clone, Default)]
pub struct InputConfig {
    bindings: HashMap<InputSource, Action>,
}

impl InputConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with the default keyboard layout
    pub fn with_defaults() -> Self {
        Self::from_bindings(default_bindings())
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        let mut config = Self::new();
        for (source, action) in bindings {
            config.bind(source, action);
        }
        config
    }

    /// Bind an input source to an action, replacing any previous binding of that source
    pub fn bind(&mut self, source: InputSource, action: Action) {
        self.bindings.insert(source, action);
    }

    /// Unbind an input source
    pub fn unbind_source(&mut self, source: InputSource) {
        self.bindings.remove(&source);
    }

    /// Unbind all sources for an action
    pub fn unbind_action(&mut self, action: Action) {
        self.bindings.retain(|_, bound| *bound != action);
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Get all input sources bound to an action
    pub fn get_sources(&self, action: Action) -> Vec<InputSource> {
        self.bindings
            .iter()
            .filter(|(_, bound)| **bound == action)
            .map(|(source, _)| *source)
            .collect()
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.bindings.values().any(|bound| *bound == action)
    }

    /// Reset to the default keyboard layout
    pub fn reset_to_defaults(&mut self) {
        *self = Self::with_defaults();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::KeyCode;

    #[test]
    fn test_defaults_bind_jump() {
        let config = InputConfig::with_defaults();
        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Space)),
            Some(Action::Jump)
        );
        assert!(config.has_binding(Action::MoveLeft));
    }

    #[test]
    fn test_rebind_source() {
        let mut config = InputConfig::with_defaults();
        config.bind(InputSource::key(KeyCode::Space), Action::Pause);

        assert_eq!(
            config.get_action(InputSource::key(KeyCode::Space)),
            Some(Action::Pause)
        );
        // W still jumps
        assert!(config.has_binding(Action::Jump));
    }

    #[test]
    fn test_unbind_action() {
        let mut config = InputConfig::with_defaults();
        config.unbind_action(Action::Jump);

        assert!(!config.has_binding(Action::Jump));
        assert!(config.get_sources(Action::Jump).is_empty());
    }

    #[test]
    fn test_unbind_source() {
        let mut config = InputConfig::with_defaults();
        config.unbind_source(InputSource::key(KeyCode::KeyA));

        assert_eq!(config.get_action(InputSource::key(KeyCode::KeyA)), None);
        assert_eq!(
            config.get_sources(Action::MoveLeft),
            vec![InputSource::key(KeyCode::ArrowLeft)]
        );
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut config = InputConfig::new();
        assert!(!config.has_binding(Action::Jump));

        config.reset_to_defaults();
        assert!(config.has_binding(Action::Jump));
    }
}
