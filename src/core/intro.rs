use super::tween::{Delayed, Ease, Tween};

// Loader timing: flash overlay holds, fades, then the whole loader fades
// once the visitor clicks, taps or scrolls.
pub const FLASH_DELAY: f32 = 0.5;
pub const FLASH_FADE_DURATION: f32 = 0.8;
pub const OUTRO_FADE_DURATION: f32 = 0.5;

// Gallery intro timing (shortened when reduced motion is requested).
pub const APPEAR_DURATION: f32 = 1.0;
pub const APPEAR_DURATION_REDUCED: f32 = 0.3;
pub const HOLD_DURATION: f32 = 0.3;
pub const HOLD_DURATION_REDUCED: f32 = 0.1;
pub const DISPERSE_DURATION: f32 = 0.8;
pub const DISPERSE_DURATION_REDUCED: f32 = 0.5;

// Items rise this many pixels while fading in.
pub const APPEAR_RISE_PX: f32 = 30.0;

// Stacked intro items fit within this fraction of the viewport.
pub const INTRO_VIEWPORT_FRACTION: f32 = 0.9;

#[derive(Clone, Copy, Debug)]
enum LoaderPhase {
    Flash(Delayed),
    Waiting,
    Outro(Tween),
    Done,
}

/// Intro loader sequence: flash fade → waiting → outro → done.
///
/// Outro triggers that arrive before the flash has finished are ignored,
/// matching the visible behavior: the loader cannot be dismissed while it
/// is still flashing in.
#[derive(Clone, Copy, Debug)]
pub struct Loader {
    phase: LoaderPhase,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            phase: LoaderPhase::Flash(Delayed::new(
                FLASH_DELAY,
                Tween::new(1.0, 0.0, FLASH_FADE_DURATION, Ease::QuadOut),
            )),
        }
    }

    /// Loader for a visitor who already saw the intro this session.
    pub fn skipped() -> Self {
        Self {
            phase: LoaderPhase::Done,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        match &mut self.phase {
            LoaderPhase::Flash(fade) => {
                fade.advance(dt);
                if fade.done() {
                    self.phase = LoaderPhase::Waiting;
                }
            }
            LoaderPhase::Outro(fade) => {
                fade.advance(dt);
                if fade.done() {
                    self.phase = LoaderPhase::Done;
                }
            }
            LoaderPhase::Waiting | LoaderPhase::Done => {}
        }
    }

    /// Click, touch or wheel: start the outro once the flash has settled.
    pub fn trigger_outro(&mut self) {
        if matches!(self.phase, LoaderPhase::Waiting) {
            self.phase = LoaderPhase::Outro(Tween::new(1.0, 0.0, OUTRO_FADE_DURATION, Ease::QuadOut));
        }
    }

    /// Opacity of the flash overlay.
    pub fn flash_alpha(&self) -> f32 {
        match &self.phase {
            LoaderPhase::Flash(fade) => fade.value(),
            _ => 0.0,
        }
    }

    /// Whether the flash overlay can be removed from the page.
    pub fn flash_done(&self) -> bool {
        !matches!(self.phase, LoaderPhase::Flash(_))
    }

    /// Opacity of the whole loader wrap.
    pub fn wrap_alpha(&self) -> f32 {
        match &self.phase {
            LoaderPhase::Outro(fade) => fade.value(),
            LoaderPhase::Done => 0.0,
            _ => 1.0,
        }
    }

    pub fn done(&self) -> bool {
        matches!(self.phase, LoaderPhase::Done)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug)]
enum GalleryPhase {
    Pending,
    Appear(Tween),
    Hold { remaining: f32 },
    Disperse(Tween),
    Done,
}

/// Gallery intro: items appear stacked at the viewport center, hold
/// briefly, then disperse to their resting positions on the tile.
/// Interactions stay disabled until dispersal completes.
#[derive(Clone, Copy, Debug)]
pub struct GalleryIntro {
    phase: GalleryPhase,
    reduced_motion: bool,
}

impl GalleryIntro {
    pub fn new(reduced_motion: bool) -> Self {
        Self {
            phase: GalleryPhase::Pending,
            reduced_motion,
        }
    }

    fn pick(&self, normal: f32, reduced: f32) -> f32 {
        if self.reduced_motion {
            reduced
        } else {
            normal
        }
    }

    /// Begin the appear phase (called once the loader is gone).
    pub fn start(&mut self) {
        if matches!(self.phase, GalleryPhase::Pending) {
            let duration = self.pick(APPEAR_DURATION, APPEAR_DURATION_REDUCED);
            self.phase = GalleryPhase::Appear(Tween::new(0.0, 1.0, duration, Ease::QuadOut));
        }
    }

    pub fn tick(&mut self, dt: f32) {
        match &mut self.phase {
            GalleryPhase::Appear(clock) => {
                clock.advance(dt);
                if clock.done() {
                    self.phase = GalleryPhase::Hold {
                        remaining: self.pick(HOLD_DURATION, HOLD_DURATION_REDUCED),
                    };
                }
            }
            GalleryPhase::Hold { remaining } => {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    let duration = self.pick(DISPERSE_DURATION, DISPERSE_DURATION_REDUCED);
                    self.phase = GalleryPhase::Disperse(Tween::new(0.0, 1.0, duration, Ease::CubicInOut));
                }
            }
            GalleryPhase::Disperse(clock) => {
                clock.advance(dt);
                if clock.done() {
                    self.phase = GalleryPhase::Done;
                }
            }
            GalleryPhase::Pending | GalleryPhase::Done => {}
        }
    }

    pub fn started(&self) -> bool {
        !matches!(self.phase, GalleryPhase::Pending)
    }

    /// Eased progress of the fade/rise onto the center stack.
    pub fn appear_progress(&self) -> f32 {
        match &self.phase {
            GalleryPhase::Pending => 0.0,
            GalleryPhase::Appear(clock) => clock.value(),
            _ => 1.0,
        }
    }

    /// Eased progress of the flight from center to resting positions.
    pub fn disperse_progress(&self) -> f32 {
        match &self.phase {
            GalleryPhase::Disperse(clock) => clock.value(),
            GalleryPhase::Done => 1.0,
            _ => 0.0,
        }
    }

    pub fn done(&self) -> bool {
        matches!(self.phase, GalleryPhase::Done)
    }

    /// Drag and modal input unlock only after dispersal.
    pub fn interactions_enabled(&self) -> bool {
        self.done()
    }
}
