use glam::Vec2;

// Geometric velocity decay per frame while coasting. Closer to 1 coasts longer.
pub const FRICTION: f32 = 0.92;

// Below this magnitude a velocity component snaps to exactly zero.
pub const VELOCITY_EPSILON: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
    Coasting,
}

/// Camera state for the infinite canvas.
///
/// A single context object stepped once per rendering frame: while a drag
/// is active the velocity is driven directly by gesture deltas, otherwise
/// the offset integrates the velocity and friction decays it to an exact
/// stop. The camera moves opposite to the gesture direction.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub offset: Vec2,
    pub velocity: Vec2,
    phase: Phase,
    friction: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::with_friction(FRICTION)
    }

    pub fn with_friction(friction: f32) -> Self {
        Self {
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            phase: Phase::Idle,
            friction,
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Gesture pressed: stop coasting and hand control to the drag.
    pub fn begin_drag(&mut self) {
        self.phase = Phase::Dragging;
        self.velocity = Vec2::ZERO;
    }

    /// Apply one gesture delta. Only meaningful while dragging; the camera
    /// pans opposite the gesture and the instantaneous velocity is
    /// overridden with the raw delta so a release throws at gesture speed.
    pub fn drag_by(&mut self, delta: Vec2) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.offset -= delta;
        self.velocity = -delta;
    }

    /// Gesture released: keep the last drag velocity and coast on it.
    pub fn release(&mut self) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.phase = if self.velocity == Vec2::ZERO {
            Phase::Idle
        } else {
            Phase::Coasting
        };
    }

    /// Kill all motion immediately (reduced-motion release).
    pub fn halt(&mut self) {
        self.velocity = Vec2::ZERO;
        if self.phase != Phase::Dragging {
            self.phase = Phase::Idle;
        }
    }

    /// Advance one frame. Integrates and decays only outside of a drag;
    /// each velocity component snaps to exactly zero once it falls below
    /// `VELOCITY_EPSILON`, bounding the coast to a finite frame count.
    pub fn step(&mut self) {
        if self.phase == Phase::Dragging {
            return;
        }
        self.offset += self.velocity;
        self.velocity *= self.friction;
        if self.velocity.x.abs() < VELOCITY_EPSILON {
            self.velocity.x = 0.0;
        }
        if self.velocity.y.abs() < VELOCITY_EPSILON {
            self.velocity.y = 0.0;
        }
        if self.phase == Phase::Coasting && self.velocity == Vec2::ZERO {
            self.phase = Phase::Idle;
        }
    }
}
