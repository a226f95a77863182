//! Input state
//!
//! The explicit input object the frontend accumulates into and each tick
//! samples. Held flags persist across ticks; pointer presses are one-shot
//! and drained after the tick that consumed them.

use glam::Vec2;

/// Held-key and pointer state for one simulation tick
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Held melee-attack trigger
    pub attack: bool,
    /// Discrete pointer presses in world coordinates
    pub pointer_presses: Vec<Vec2>,
    /// Latest known pointer position in world coordinates
    pub pointer: Option<Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer press (attack/mine) at a world coordinate
    pub fn press_pointer(&mut self, world: Vec2) {
        self.pointer_presses.push(world);
        self.pointer = Some(world);
    }

    /// Record a pointer move (hover) at a world coordinate
    pub fn move_pointer(&mut self, world: Vec2) {
        self.pointer = Some(world);
    }

    /// Movement intent per axis in {-1, 0, 1}
    pub fn movement(&self) -> Vec2 {
        let dx = (self.right as i32 - self.left as i32) as f32;
        let dy = (self.down as i32 - self.up as i32) as f32;
        Vec2::new(dx, dy)
    }

    /// Drop one-shot events after the tick that consumed them. Held flags
    /// and the hover position stay.
    pub fn clear_transient(&mut self) {
        self.pointer_presses.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_intent() {
        let mut input = InputState::new();
        assert_eq!(input.movement(), Vec2::ZERO);

        input.right = true;
        input.down = true;
        assert_eq!(input.movement(), Vec2::new(1.0, 1.0));

        input.left = true;
        assert_eq!(input.movement(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_clear_transient_keeps_held_state() {
        let mut input = InputState::new();
        input.up = true;
        input.attack = true;
        input.press_pointer(Vec2::new(10.0, 20.0));
        input.clear_transient();

        assert!(input.up);
        assert!(input.attack);
        assert!(input.pointer_presses.is_empty());
        assert_eq!(input.pointer, Some(Vec2::new(10.0, 20.0)));
    }
}
