use super::tween::{Ease, Tween};

// Maximum panel displacement from center, in viewport-height units.
pub const MAX_OFFSET_VH: f32 = 50.0;

// One wheel notch moves the panel by 100vh * sensitivity before resistance.
pub const SCROLL_SENSITIVITY: f32 = 0.05;
pub const WHEEL_STEP_VH: f32 = 100.0;

// Resistance is capped so the limit stays reachable.
pub const RESISTANCE_CAP: f32 = 0.92;
pub const RESISTANCE_EXPONENT: f32 = 1.75;

// Panel motion smoothing and snap-back timing.
pub const MOVE_DURATION: f32 = 0.6;
pub const SNAP_DURATION: f32 = 1.0;
pub const SNAP_COOLDOWN: f32 = 0.5;
pub const IDLE_SNAP_DELAY: f32 = 5.0;
pub const CENTER_EPSILON_VH: f32 = 0.1;

// Directional drop shadow scaling with displacement.
pub const SHADOW_MAX_BLUR_PX: f32 = 60.0;
pub const SHADOW_MAX_OPACITY: f32 = 0.3;
pub const SHADOW_OFFSET_PX: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDir {
    /// Panel slides up, revealing the content below it.
    Up,
    /// Panel slides down, revealing the content above it.
    Down,
}

#[derive(Clone, Copy, Debug)]
pub struct Shadow {
    pub blur_px: f32,
    pub opacity: f32,
    pub offset_y_px: f32,
}

#[derive(Clone, Copy, Debug)]
enum SnapState {
    Free { idle: f32 },
    Snapping { tween: Tween },
    Cooldown { remaining: f32 },
}

/// Scroll-resistance panel reveal.
///
/// The panel is displaced in vh units within `[-MAX_OFFSET_VH,
/// +MAX_OFFSET_VH]`. Moving away from center gets progressively harder;
/// scrolling against the current displacement, or sitting idle while
/// displaced, snaps the panel back to center. Input is ignored while a
/// snap runs and for a short cool-down after it lands, so residual wheel
/// inertia cannot immediately re-displace the panel.
///
/// All timing flows through `tick`; the struct never reads a clock.
#[derive(Clone, Copy, Debug)]
pub struct RevealPanel {
    /// Target displacement driven by scroll input.
    offset: f32,
    /// Smoothed displacement actually shown, easing toward `offset`.
    shown: Tween,
    state: SnapState,
}

impl Default for RevealPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealPanel {
    pub fn new() -> Self {
        Self {
            offset: 0.0,
            shown: Tween::new(0.0, 0.0, 0.0, Ease::QuadOut),
            state: SnapState::Free { idle: 0.0 },
        }
    }

    /// Target displacement in vh.
    #[inline]
    pub fn offset_vh(&self) -> f32 {
        self.offset
    }

    /// Smoothed displacement in vh, for styling the panel transform.
    #[inline]
    pub fn shown_vh(&self) -> f32 {
        self.shown.value()
    }

    /// How hard it is to keep moving away from center: 1 at center, falling
    /// toward `(1 - RESISTANCE_CAP)^RESISTANCE_EXPONENT` near the limit.
    pub fn resistance_factor(offset: f32) -> f32 {
        let progress = (offset.abs() / MAX_OFFSET_VH).min(RESISTANCE_CAP);
        (1.0 - progress).powf(RESISTANCE_EXPONENT)
    }

    /// Apply one wheel notch.
    pub fn scroll(&mut self, dir: ScrollDir) {
        match self.state {
            SnapState::Free { .. } => {}
            _ => return,
        }
        // Any activity restarts the inactivity countdown.
        self.state = SnapState::Free { idle: 0.0 };

        match dir {
            ScrollDir::Up => {
                if self.offset > 0.0 {
                    self.snap_to_center();
                    return;
                }
                let resistance = if self.offset < 0.0 {
                    Self::resistance_factor(self.offset)
                } else {
                    1.0
                };
                let next = self.offset - WHEEL_STEP_VH * SCROLL_SENSITIVITY * resistance;
                self.offset = next.max(-MAX_OFFSET_VH);
            }
            ScrollDir::Down => {
                if self.offset < 0.0 {
                    self.snap_to_center();
                    return;
                }
                let resistance = if self.offset > 0.0 {
                    Self::resistance_factor(self.offset)
                } else {
                    1.0
                };
                let next = self.offset + WHEEL_STEP_VH * SCROLL_SENSITIVITY * resistance;
                self.offset = next.min(MAX_OFFSET_VH);
            }
        }
        self.shown = Tween::new(self.shown.value(), self.offset, MOVE_DURATION, Ease::QuadOut);
    }

    /// Advance timers and animations by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        match &mut self.state {
            SnapState::Free { idle } => {
                self.shown.advance(dt);
                if self.offset.abs() > CENTER_EPSILON_VH {
                    *idle += dt;
                    if *idle >= IDLE_SNAP_DELAY {
                        self.snap_to_center();
                    }
                } else {
                    *idle = 0.0;
                }
            }
            SnapState::Snapping { tween } => {
                self.offset = tween.advance(dt);
                self.shown.advance(dt);
                if tween.done() {
                    self.offset = tween.end_value();
                    self.shown = Tween::new(0.0, 0.0, 0.0, Ease::QuadOut);
                    self.state = SnapState::Cooldown {
                        remaining: SNAP_COOLDOWN,
                    };
                }
            }
            SnapState::Cooldown { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.state = SnapState::Free { idle: 0.0 };
                }
            }
        }
    }

    fn snap_to_center(&mut self) {
        self.state = SnapState::Snapping {
            tween: Tween::new(self.offset, 0.0, SNAP_DURATION, Ease::QuadInOut),
        };
        // The displayed value eases home from wherever it currently is,
        // not from the (possibly further) input target.
        self.shown = Tween::new(self.shown.value(), 0.0, SNAP_DURATION, Ease::QuadInOut);
    }

    #[inline]
    pub fn is_snapping(&self) -> bool {
        matches!(self.state, SnapState::Snapping { .. })
    }

    /// Displacement fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        (self.offset.abs() / MAX_OFFSET_VH).min(1.0)
    }

    /// Fill fractions for the (top, bottom) navigation progress bars. The
    /// bar opposite the travel direction fills; the other resets.
    pub fn bar_fractions(&self) -> (f32, f32) {
        if self.offset > 0.0 {
            (self.progress(), 0.0)
        } else if self.offset < 0.0 {
            (0.0, self.progress())
        } else {
            (0.0, 0.0)
        }
    }

    /// Drop shadow cast toward the revealed content, or `None` at center.
    pub fn shadow(&self) -> Option<Shadow> {
        if self.offset == 0.0 {
            return None;
        }
        let progress = self.progress();
        Some(Shadow {
            blur_px: progress * SHADOW_MAX_BLUR_PX,
            opacity: progress * SHADOW_MAX_OPACITY,
            offset_y_px: if self.offset < 0.0 {
                SHADOW_OFFSET_PX
            } else {
                -SHADOW_OFFSET_PX
            },
        })
    }

    /// The panel only takes pointer interaction when centered.
    pub fn pointer_events_enabled(&self) -> bool {
        self.offset == 0.0 && !self.is_snapping()
    }
}
