//! Frame pacing for the game loop.
//!
//! The session bumps a revision counter on every visible state change. A new
//! revision is drawn immediately; otherwise the screen is refreshed only as
//! often as the clock-driven parts (play timer, peek countdown) need.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last_render_ms: u64,
    last_revision: Option<u64>,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last_render_ms: 0,
            last_revision: None,
        }
    }

    /// Decide whether to draw a frame now.
    ///
    /// Always true for the first call, after [`RenderThrottle::force`], and
    /// when `revision` changed. Otherwise true once `idle_interval_ms` has
    /// passed since the last frame.
    pub fn should_render(&mut self, now_ms: u64, revision: u64) -> bool {
        let due = match self.last_revision {
            None => true,
            Some(last) if last != revision => true,
            Some(_) => now_ms.saturating_sub(self.last_render_ms) >= self.idle_interval_ms,
        };
        if due {
            self.last_render_ms = now_ms;
            self.last_revision = Some(revision);
        }
        due
    }

    /// Make the next `should_render` call return true.
    pub fn force(&mut self) {
        self.last_revision = None;
    }
}
