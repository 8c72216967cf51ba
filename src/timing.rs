/// Frame pacing.
///
/// The loop measures wall-clock time since the previous iteration, feeds
/// it to the simulation as `dt`, and sleeps for whatever remains of the
/// frame budget.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FramePacer {
    budget: Duration,
    previous: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        FramePacer {
            budget: Duration::from_secs(1) / fps.max(1),
            previous: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Seconds since the previous call (or construction).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.previous);
        self.previous = now;
        dt.as_secs_f32()
    }

    /// Sleep for the rest of the frame that began at `frame_start`.
    pub fn wait(&self, frame_start: Instant) {
        let remaining = remaining(self.budget, frame_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}

/// Budget left after `elapsed`, clamped to zero when already behind.
pub fn remaining(budget: Duration, elapsed: Duration) -> Duration {
    budget.saturating_sub(elapsed)
}
