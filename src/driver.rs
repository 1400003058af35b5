//! Frame driver
//!
//! Runs one simulation tick per rendering frame. The host's frame callback
//! hands back the token it was scheduled with; tokens that were cancelled or
//! superseded are ignored, so a late callback after `stop()` is harmless.

use std::time::Instant;

use crate::sim::{GamePhase, GameState, Snapshot, tick};

/// Millisecond timestamps from a monotonic origin
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from creation
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Handle for one scheduled frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(u64);

/// Owns a session and paces its ticks
#[derive(Debug)]
pub struct FrameDriver {
    state: GameState,
    pending: Option<FrameToken>,
    next_token: u64,
    /// Frames that ran a tick call
    frames: u64,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            pending: None,
            next_token: 0,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Intent access for the input layer
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// True while a frame callback is scheduled
    pub fn is_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<FrameToken> {
        self.pending
    }

    /// Asset loader succeeded: start the session and the frame loop
    pub fn assets_ready(&mut self) -> Option<FrameToken> {
        self.state.assets_ready();
        self.start()
    }

    /// Asset loader failed: halt for good
    pub fn assets_failed(&mut self, identifier: impl Into<String>) {
        self.state.assets_failed(identifier);
        self.stop();
    }

    /// Schedule the next frame. Returns the already pending token if the
    /// loop is active, or None if the session can never tick again.
    pub fn start(&mut self) -> Option<FrameToken> {
        if self.state.phase == GamePhase::Failed {
            return None;
        }
        if let Some(token) = self.pending {
            return Some(token);
        }
        Some(self.schedule())
    }

    /// Cancel the pending frame. Safe to call repeatedly.
    pub fn stop(&mut self) -> bool {
        match self.pending.take() {
            Some(token) => {
                log::debug!("Cancelled frame {:?}", token);
                true
            }
            None => false,
        }
    }

    /// Frame callback. Ticks once and returns the token for the next frame,
    /// or None if the token is stale or the loop has stopped.
    pub fn on_frame(&mut self, token: FrameToken, now_ms: f64) -> Option<FrameToken> {
        if self.pending != Some(token) {
            log::debug!("Ignoring stale frame {:?}", token);
            return None;
        }
        self.pending = None;

        tick(&mut self.state, now_ms);
        self.frames += 1;

        if self.state.phase == GamePhase::Failed {
            return None;
        }
        Some(self.schedule())
    }

    /// Convenience for hosts that poll: run the pending frame, if any
    pub fn pump(&mut self, clock: &impl Clock) -> Option<FrameToken> {
        let token = self.pending?;
        self.on_frame(token, clock.now_ms())
    }

    fn schedule(&mut self) -> FrameToken {
        let token = FrameToken(self.next_token);
        self.next_token += 1;
        self.pending = Some(token);
        token
    }
}
