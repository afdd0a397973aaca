//! Raw input event translation
//!
//! Accumulates browser-style key and pointer events between ticks and turns
//! them into a [`TickInput`]. Held keys map to held flags; clicks and the
//! weapon-cycle key are one-shots cleared when the tick input is taken.
//! Unrecognized key codes are no-ops.

use glam::Vec2;

use crate::sim::TickInput;

/// Accumulated input state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    thrust_held: bool,
    /// Latest pointer position in screen coordinates
    pointer: Vec2,
    fire_queued: bool,
    cycle_queued: bool,
    pause_queued: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press by browser key code
    pub fn key_down(&mut self, code: &str) {
        match code {
            "ArrowLeft" => self.left_held = true,
            "ArrowRight" => self.right_held = true,
            "ArrowUp" => self.thrust_held = true,
            "KeyQ" => self.cycle_queued = true,
            _ => {}
        }
    }

    /// Handle a key release by browser key code
    pub fn key_up(&mut self, code: &str) {
        match code {
            "ArrowLeft" => self.left_held = false,
            "ArrowRight" => self.right_held = false,
            "ArrowUp" => self.thrust_held = false,
            _ => {}
        }
    }

    /// Record the pointer position in screen coordinates
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Queue a fire command (pointer click)
    pub fn pointer_clicked(&mut self) {
        self.fire_queued = true;
    }

    /// Queue a pause/resume toggle (external session control)
    pub fn toggle_pause(&mut self) {
        self.pause_queued = true;
    }

    /// Produce this tick's input and clear the one-shot flags.
    ///
    /// The aim target is translated into world space with the camera offset;
    /// only the horizontal axis scrolls.
    pub fn take_tick_input(&mut self, camera_x: f32) -> TickInput {
        let input = TickInput {
            left: self.left_held,
            right: self.right_held,
            thrust: self.thrust_held,
            fire: self.fire_queued,
            aim: Vec2::new(self.pointer.x + camera_x, self.pointer.y),
            cycle_weapon: self.cycle_queued,
            pause: self.pause_queued,
        };
        self.fire_queued = false;
        self.cycle_queued = false;
        self.pause_queued = false;
        input
    }
}
