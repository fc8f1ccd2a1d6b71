use crate::engine::host::LineSegment;

/// RGBA color in linear 0..1 space
pub type DebugColor = [f32; 4];

pub const DEBUG_BLUE: DebugColor = [0.0, 0.0, 1.0, 1.0];
pub const DEBUG_RED: DebugColor = [1.0, 0.0, 0.0, 1.0];
pub const DEBUG_GREEN: DebugColor = [0.0, 1.0, 0.0, 1.0];

/// A colored line waiting to be drawn by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub segment: LineSegment,
    pub color: DebugColor,
}

/// Collects debug geometry (contact probe lines, etc.) for the host to render
///
/// Nothing here draws; the host decides how lines reach the screen.
#[derive(Debug, Default)]
pub struct DebugLines {
    lines: Vec<DebugLine>,
    enabled: bool,
}

impl DebugLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable collection
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.lines.clear();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Queue a segment; ignored while disabled
    pub fn push_segment(&mut self, segment: LineSegment, color: DebugColor) {
        if self.enabled {
            self.lines.push(DebugLine { segment, color });
        }
    }

    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    /// Drop everything queued (call once per frame after drawing)
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_disabled_by_default() {
        let mut debug = DebugLines::new();
        debug.push_segment(LineSegment::new(Vec2::ZERO, Vec2::X), DEBUG_RED);
        assert!(!debug.is_enabled());
        assert!(debug.lines().is_empty());
    }

    #[test]
    fn test_collects_when_enabled() {
        let mut debug = DebugLines::new();
        debug.set_enabled(true);
        debug.push_segment(LineSegment::new(Vec2::ZERO, Vec2::X), DEBUG_BLUE);
        debug.push_segment(LineSegment::new(Vec2::ZERO, Vec2::Y), DEBUG_GREEN);

        assert_eq!(debug.lines().len(), 2);
        assert_eq!(debug.lines()[0].color, DEBUG_BLUE);

        debug.clear();
        assert!(debug.lines().is_empty());
    }

    #[test]
    fn test_disabling_drops_queued_lines() {
        let mut debug = DebugLines::new();
        debug.set_enabled(true);
        debug.push_segment(LineSegment::new(Vec2::ZERO, Vec2::X), DEBUG_BLUE);
        debug.set_enabled(false);
        assert!(debug.lines().is_empty());
    }
}
