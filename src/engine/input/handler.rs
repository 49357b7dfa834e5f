// Per-player input snapshot

use super::action::Action;
use glam::Vec2;
use std::collections::HashSet;

/// Input state the character states read every frame.
///
/// `mov` and `holding_run` mirror what is currently held. `jump` and `shoot`
/// are edge-triggered: set here on a press, but cleared only by the
/// character's jump/shoot checks. The handler owns the storage; the character
/// owns the right to consume.
#[derive(Debug, Default)]
pub struct InputHandler {
    pressed: HashSet<Action>,

    /// Movement vector derived from held actions (-1.0 to 1.0 per axis)
    pub mov: Vec2,
    /// Whether the run modifier is held
    pub holding_run: bool,
    /// Jump was pressed and not yet consumed
    pub jump: bool,
    /// Shoot was pressed and not yet consumed
    pub shoot: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an action press. Repeats while held are ignored.
    pub fn press(&mut self, action: Action) {
        if !self.pressed.insert(action) {
            return;
        }
        match action {
            Action::Jump => self.jump = true,
            Action::Shoot => self.shoot = true,
            _ => {}
        }
        self.refresh_held();
    }

    /// Register an action release.
    pub fn release(&mut self, action: Action) {
        if self.pressed.remove(&action) {
            self.refresh_held();
        }
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Drop all held and pending input.
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.mov = Vec2::ZERO;
        self.holding_run = false;
        self.jump = false;
        self.shoot = false;
    }

    fn refresh_held(&mut self) {
        let mut horizontal = 0.0;
        if self.pressed.contains(&Action::MoveLeft) {
            horizontal -= 1.0;
        }
        if self.pressed.contains(&Action::MoveRight) {
            horizontal += 1.0;
        }
        self.mov = Vec2::new(horizontal, 0.0);
        self.holding_run = self.pressed.contains(&Action::Run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_by_default() {
        let input = InputHandler::new();
        assert_eq!(input.mov, Vec2::ZERO);
        assert!(!input.holding_run);
        assert!(!input.jump);
        assert!(!input.shoot);
    }

    #[test]
    fn test_horizontal_axis() {
        let mut input = InputHandler::new();
        input.press(Action::MoveRight);
        assert_eq!(input.mov.x, 1.0);

        input.press(Action::MoveLeft);
        assert_eq!(input.mov.x, 0.0, "opposing directions cancel");

        input.release(Action::MoveRight);
        assert_eq!(input.mov.x, -1.0);
    }

    #[test]
    fn test_run_modifier_tracks_held_state() {
        let mut input = InputHandler::new();
        input.press(Action::Run);
        assert!(input.holding_run);
        input.release(Action::Run);
        assert!(!input.holding_run);
    }

    #[test]
    fn test_jump_flag_survives_release_until_consumed() {
        let mut input = InputHandler::new();
        input.press(Action::Jump);
        input.release(Action::Jump);
        assert!(input.jump, "edge flag is only cleared by the consumer");

        input.jump = false;
        input.press(Action::Jump);
        assert!(input.jump);
    }

    #[test]
    fn test_held_key_does_not_retrigger_edge() {
        let mut input = InputHandler::new();
        input.press(Action::Shoot);
        input.shoot = false;
        input.press(Action::Shoot); // key repeat while held
        assert!(!input.shoot);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = InputHandler::new();
        input.press(Action::MoveLeft);
        input.press(Action::Jump);
        input.reset();
        assert_eq!(input.mov, Vec2::ZERO);
        assert!(!input.jump);
        assert!(!input.is_pressed(Action::MoveLeft));
    }
}
