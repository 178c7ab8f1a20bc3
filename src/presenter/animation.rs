use std::time::{Duration, Instant};

/// Time for the spring to come to rest
pub const SPRING_SETTLE: Duration = Duration::from_millis(1000);
/// Spring response: the period of the undamped oscillation
const SPRING_RESPONSE_SECS: f32 = 0.55;

/// Easing applied to an offset animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Critically damped spring, used when sliding in
    Spring,
    /// Decelerating curve over a fixed duration, used when sliding out
    EaseOut(Duration),
}

impl Curve {
    pub fn duration(self) -> Duration {
        match self {
            Curve::Spring => SPRING_SETTLE,
            Curve::EaseOut(duration) => duration,
        }
    }

    /// Progress in `0.0..=1.0` after `elapsed`
    pub fn progress(self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration() {
            return 1.0;
        }

        let t = elapsed.as_secs_f32();
        match self {
            Curve::Spring => {
                let omega = std::f32::consts::TAU / SPRING_RESPONSE_SECS;
                let wt = omega * t;
                1.0 - (1.0 + wt) * (-wt).exp()
            }
            Curve::EaseOut(duration) => {
                let p = t / duration.as_secs_f32();
                1.0 - (1.0 - p) * (1.0 - p)
            }
        }
    }
}

/// A vertical offset moving from `from` to `to` along a curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    from: f32,
    to: f32,
    start: Instant,
    curve: Curve,
}

impl Animation {
    pub fn new(from: f32, to: f32, curve: Curve, start: Instant) -> Self {
        Self {
            from,
            to,
            start,
            curve,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn value_at(&self, now: Instant) -> f32 {
        let progress = self.curve.progress(now.saturating_duration_since(self.start));
        self.from + (self.to - self.from) * progress
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start) >= self.curve.duration()
    }
}

#[cfg(test)]
#[path = "animation_tests.rs"]
mod animation_tests;
