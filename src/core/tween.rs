/// Easing curves used across the intro, modal and panel animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
}

impl Ease {
    /// Map linear progress `t` in `[0, 1]` through the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::QuadIn => t * t,
            Ease::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Ease::CubicIn => t * t * t,
            Ease::CubicOut => 1.0 - (1.0 - t).powi(3),
            Ease::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - 4.0 * (1.0 - t).powi(3)
                }
            }
        }
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Fire-and-forget scalar animation from `from` to `to` over `duration`
/// seconds. Advanced by frame delta; lands exactly on `to`.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// Advance the clock and return the current value. A zero-duration
    /// tween completes on its first advance.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        lerp(self.from, self.to, self.ease.apply(self.progress()))
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn done(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn end_value(&self) -> f32 {
        self.to
    }
}

/// A tween that holds its start value for `delay` seconds before running.
#[derive(Clone, Copy, Debug)]
pub struct Delayed {
    delay: f32,
    waited: f32,
    tween: Tween,
}

impl Delayed {
    pub fn new(delay: f32, tween: Tween) -> Self {
        Self {
            delay: delay.max(0.0),
            waited: 0.0,
            tween,
        }
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        let mut dt = dt.max(0.0);
        if self.waited < self.delay {
            let remaining = self.delay - self.waited;
            if dt <= remaining {
                self.waited += dt;
                return self.tween.value();
            }
            self.waited = self.delay;
            dt -= remaining;
        }
        self.tween.advance(dt)
    }

    pub fn value(&self) -> f32 {
        self.tween.value()
    }

    pub fn done(&self) -> bool {
        self.waited >= self.delay && self.tween.done()
    }
}
