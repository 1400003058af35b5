//! Idle/demo mode: a simple pilot that produces intents
//!
//! It only uses the public intent setters, the same way a human-facing
//! input layer would.

use super::state::{Enemy, GameState};

/// Intent producer for headless or attract-mode sessions
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Horizontal distance ahead of the player where an enemy in our lane
    /// triggers a dodge instead of an attack
    pub danger_distance: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            danger_distance: 160.0,
        }
    }
}

impl Autopilot {
    /// Set this tick's intents
    pub fn steer(&self, state: &mut GameState) {
        if !state.is_running() {
            return;
        }

        let player = state.player.rect();
        let center_y = player.center().y;
        let front = player.pos.x + player.size.x;
        let arena_height = state.arena().height;

        let in_lane =
            |e: &Enemy| e.pos.y < player.pos.y + player.size.y && e.pos.y + e.size.y > player.pos.y;

        let threat = state
            .entities
            .enemies()
            .iter()
            .filter(|e| e.pos.x + e.size.x > player.pos.x)
            .filter(|e| e.pos.x < front + self.danger_distance && in_lane(*e))
            .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x));

        let target_y = if let Some(enemy) = threat {
            // Slip past whichever side has more room
            let room_above = enemy.pos.y;
            let room_below = arena_height - (enemy.pos.y + enemy.size.y);
            if room_above >= room_below {
                enemy.pos.y - player.size.y
            } else {
                enemy.pos.y + enemy.size.y + player.size.y
            }
        } else {
            // Line up with the nearest enemy still ahead
            state
                .entities
                .enemies()
                .iter()
                .filter(|e| e.pos.x > front)
                .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
                .map(|e| e.rect().center().y)
                .unwrap_or(center_y)
        };

        let deadzone = state.player.speed;
        state.set_move_up(target_y < center_y - deadzone);
        state.set_move_down(target_y > center_y + deadzone);
        state.set_firing(true);
    }
}
