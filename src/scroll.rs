//! Smooth scroll tween.
//!
//! Keyboard and wheel input move a target offset; the actual scroll
//! position eases toward it with a smoothstep curve over a short
//! duration. New input retargets from the currently sampled position, so
//! interrupting an animation never snaps.

/// Eased scroll animation between two offsets, in rows.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTween {
    from: f32,
    to: f32,
    start_ms: u64,
    duration_ms: u64,
}

/// Default animation length for a scroll step.
pub const SCROLL_TWEEN_MS: u64 = 240;

impl ScrollTween {
    /// A settled tween resting at `at`.
    pub fn idle(at: f32) -> Self {
        Self {
            from: at,
            to: at,
            start_ms: 0,
            duration_ms: 1,
        }
    }

    /// The offset the animation is heading toward.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Begin easing toward `to` from wherever the animation currently is.
    pub fn retarget(&mut self, now_ms: u64, to: f32, duration_ms: u64) {
        let current = self.sample(now_ms);
        *self = Self {
            from: current,
            to,
            start_ms: now_ms,
            duration_ms: duration_ms.max(1),
        };
    }

    /// Jump without animating (reduced motion).
    pub fn snap(&mut self, to: f32) {
        *self = Self::idle(to);
    }

    /// Current eased position.
    pub fn sample(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        if elapsed >= self.duration_ms {
            return self.to;
        }
        let t = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// True once the animation has reached its target.
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_is_settled() {
        let tween = ScrollTween::idle(42.0);
        assert!(tween.is_done(0));
        assert_eq!(tween.sample(0), 42.0);
        assert_eq!(tween.sample(10_000), 42.0);
    }

    #[test]
    fn test_reaches_target_and_stays() {
        let mut tween = ScrollTween::idle(0.0);
        tween.retarget(1000, 100.0, 240);

        assert_eq!(tween.sample(1000), 0.0);
        assert!(!tween.is_done(1100));
        assert_eq!(tween.sample(1240), 100.0);
        assert!(tween.is_done(1240));
        assert_eq!(tween.sample(9999), 100.0);
    }

    #[test]
    fn test_eases_monotonically() {
        let mut tween = ScrollTween::idle(0.0);
        tween.retarget(0, 50.0, 200);

        let mut last = -1.0;
        for ms in (0..=200).step_by(20) {
            let v = tween.sample(ms);
            assert!(v >= last);
            assert!((0.0..=50.0).contains(&v));
            last = v;
        }
    }

    #[test]
    fn test_retarget_continues_from_current_position() {
        let mut tween = ScrollTween::idle(0.0);
        tween.retarget(0, 100.0, 200);

        // Interrupt halfway; smoothstep(0.5) = 0.5, so we are at 50.
        let midpoint = tween.sample(100);
        assert_eq!(midpoint, 50.0);

        tween.retarget(100, 20.0, 200);
        // The new animation starts exactly where the old one was.
        assert_eq!(tween.sample(100), midpoint);
        assert_eq!(tween.sample(300), 20.0);
    }

    #[test]
    fn test_snap_jumps_without_animation() {
        let mut tween = ScrollTween::idle(0.0);
        tween.retarget(0, 100.0, 200);
        tween.snap(70.0);
        assert!(tween.is_done(1));
        assert_eq!(tween.sample(1), 70.0);
        assert_eq!(tween.target(), 70.0);
    }
}
