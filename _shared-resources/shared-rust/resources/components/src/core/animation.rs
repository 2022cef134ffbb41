// Underline Animation
// Damped spring timing curve and the animated underline offset built on it

use std::time::{Duration, Instant};

/// Spring timing curve described the way layout animations usually are:
/// total duration, damping ratio and initial velocity (in distances per second)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringAnimation {
    pub duration: Duration,
    pub damping_ratio: f32,
    pub initial_velocity: f32,
}

impl SpringAnimation {
    /// Curve used when the selected tab changes
    pub const SELECTION: SpringAnimation = SpringAnimation {
        duration: Duration::from_millis(300),
        damping_ratio: 0.7,
        initial_velocity: 1.0,
    };

    /// Residual displacement treated as settled when the duration runs out
    const SETTLE_THRESHOLD: f32 = 0.001;

    pub fn new(duration: Duration, damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            duration,
            damping_ratio,
            initial_velocity,
        }
    }

    /// Natural frequency chosen so the envelope decays to the settle threshold
    /// exactly at `duration`
    fn natural_frequency(&self, damping_ratio: f32) -> f32 {
        let seconds = self.duration.as_secs_f32().max(f32::EPSILON);
        -Self::SETTLE_THRESHOLD.ln() / (damping_ratio * seconds)
    }

    /// Fraction of the distance covered after `elapsed`; may overshoot 1.0
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return 1.0;
        }

        let zeta = self.damping_ratio.clamp(0.05, 1.0);
        let omega = self.natural_frequency(zeta);
        let v0 = self.initial_velocity;
        let t = elapsed.as_secs_f32();

        // Remaining displacement, starting at 1 with velocity -v0
        let displacement = if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            envelope * ((damped * t).cos() + ((zeta * omega - v0) / damped) * (damped * t).sin())
        } else {
            (-omega * t).exp() * (1.0 + (omega - v0) * t)
        };

        1.0 - displacement
    }
}

impl Default for SpringAnimation {
    fn default() -> Self {
        Self::SELECTION
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f32,
    to: f32,
    started: Instant,
}

/// Horizontal underline offset that either jumps or springs to its target
#[derive(Debug, Clone, PartialEq)]
pub struct UnderlineAnimator {
    curve: SpringAnimation,
    target: u16,
    current: f32,
    transition: Option<Transition>,
}

impl UnderlineAnimator {
    pub fn new(curve: SpringAnimation) -> Self {
        Self {
            curve,
            target: 0,
            current: 0.0,
            transition: None,
        }
    }

    /// Jump straight to `offset`, cancelling any running transition
    pub fn snap_to(&mut self, offset: u16) {
        self.target = offset;
        self.current = offset as f32;
        self.transition = None;
    }

    /// Spring from wherever the underline is drawn right now to `offset`
    pub fn animate_to(&mut self, offset: u16, now: Instant) {
        self.tick(now);
        self.target = offset;
        if (self.current - offset as f32).abs() < f32::EPSILON {
            self.transition = None;
            return;
        }
        self.transition = Some(Transition {
            from: self.current,
            to: offset as f32,
            started: now,
        });
    }

    /// Advance to `now`. Returns true while the transition is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        let elapsed = now.saturating_duration_since(transition.started);
        if elapsed >= self.curve.duration {
            self.current = transition.to;
            self.transition = None;
            return false;
        }

        let progress = self.curve.progress(elapsed);
        self.current = transition.from + (transition.to - transition.from) * progress;
        true
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Offset the animation is heading to
    pub fn target(&self) -> u16 {
        self.target
    }

    /// Offset to draw this frame
    pub fn current(&self) -> u16 {
        self.current.round().max(0.0) as u16
    }
}

impl Default for UnderlineAnimator {
    fn default() -> Self {
        Self::new(SpringAnimation::SELECTION)
    }
}
