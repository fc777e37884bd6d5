//! Testimonial carousel state machine.
//!
//! Owns the slide index, the `Idle`/`Transitioning` phase, the autoplay
//! deadline, and swipe interpretation. The controller never reads the
//! clock; callers pass `Instant::now()` in, which keeps the unit tests
//! free of real sleeps.

use std::time::{Duration, Instant};

/// How long a slide change animates before the outgoing slide is dropped.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);

/// Interval between automatic advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(8000);

/// Minimum horizontal drag distance treated as a swipe rather than a tap.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Direction a slide change moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Incoming slide enters from the right.
    Next,
    /// Incoming slide enters from the left.
    Prev,
}

impl SlideDirection {
    /// The direction implied by moving from `from` to `to`.
    pub fn inferred(from: usize, to: usize) -> Self {
        if to > from {
            SlideDirection::Next
        } else {
            SlideDirection::Prev
        }
    }
}

/// Carousel phase. `Transitioning` carries everything the renderer needs
/// to draw the outgoing slide until the deadline passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselPhase {
    /// No slide change in flight.
    Idle,
    /// A slide change is animating.
    Transitioning {
        /// Index of the slide on its way out.
        outgoing: usize,
        /// Direction of travel.
        direction: SlideDirection,
        /// When the outgoing slide is dropped and the phase returns to idle.
        until: Instant,
    },
}

/// State for the testimonial carousel.
///
/// The `Transitioning` phase is the sole re-entrancy guard: every entry
/// point that could start a slide change checks it first, so overlapping
/// transitions cannot occur.
pub struct CarouselController {
    /// Number of slides, fixed at construction
    slide_count: usize,
    /// Index of the active slide
    current: usize,
    /// Current phase
    phase: CarouselPhase,
    /// Next automatic advance; `None` while autoplay is stopped
    autoplay_at: Option<Instant>,
    /// Press x-coordinate of an in-flight drag
    touch_start_x: Option<f32>,
}

impl CarouselController {
    /// Create a controller for `slide_count` slides with autoplay armed.
    ///
    /// Returns `None` for an empty slide list; a carousel with nothing to
    /// show binds no handlers and starts no timer.
    pub fn new(slide_count: usize, now: Instant) -> Option<Self> {
        if slide_count == 0 {
            tracing::warn!("no slides provided, skipping carousel setup");
            return None;
        }

        Some(Self {
            slide_count,
            current: 0,
            phase: CarouselPhase::Idle,
            autoplay_at: Some(now + AUTOPLAY_INTERVAL),
            touch_start_x: None,
        })
    }

    /// Number of slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Index of the active slide.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Current phase.
    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Whether a slide change is animating.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, CarouselPhase::Transitioning { .. })
    }

    /// Whether automatic advancement is armed.
    pub fn autoplay_active(&self) -> bool {
        self.autoplay_at.is_some()
    }

    /// The outgoing slide and travel direction, while one is animating.
    pub fn outgoing(&self) -> Option<(usize, SlideDirection)> {
        match self.phase {
            CarouselPhase::Transitioning {
                outgoing,
                direction,
                ..
            } => Some((outgoing, direction)),
            CarouselPhase::Idle => None,
        }
    }

    /// Fraction of the current transition that has elapsed, in `[0, 1]`.
    /// `1.0` while idle.
    pub fn transition_progress(&self, now: Instant) -> f32 {
        match self.phase {
            CarouselPhase::Idle => 1.0,
            CarouselPhase::Transitioning { until, .. } => {
                if now >= until {
                    1.0
                } else {
                    let remaining = until.duration_since(now).as_secs_f32();
                    (1.0 - remaining / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0)
                }
            }
        }
    }

    /// Start a transition to `target`.
    ///
    /// No-op if `target` is the active slide, out of range, or a transition
    /// is already in flight. The slide index changes immediately, at
    /// transition start; only the outgoing slide's removal waits for the
    /// deadline. Returns whether a transition started.
    pub fn go_to(
        &mut self,
        target: usize,
        direction: Option<SlideDirection>,
        now: Instant,
    ) -> bool {
        if target == self.current || target >= self.slide_count || self.is_transitioning() {
            return false;
        }

        let direction = direction.unwrap_or_else(|| SlideDirection::inferred(self.current, target));

        self.phase = CarouselPhase::Transitioning {
            outgoing: self.current,
            direction,
            until: now + TRANSITION_DURATION,
        };
        self.current = target;

        // Any navigation, manual or automatic, restarts the autoplay clock.
        if self.autoplay_at.is_some() {
            self.autoplay_at = Some(now + AUTOPLAY_INTERVAL);
        }

        tracing::debug!(target, ?direction, "slide transition started");
        true
    }

    /// Advance to the following slide, wrapping at the end.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.is_transitioning() {
            return false;
        }
        let target = (self.current + 1) % self.slide_count;
        self.go_to(target, Some(SlideDirection::Next), now)
    }

    /// Go back to the preceding slide, wrapping at the start.
    pub fn prev(&mut self, now: Instant) -> bool {
        if self.is_transitioning() {
            return false;
        }
        let target = (self.current + self.slide_count - 1) % self.slide_count;
        self.go_to(target, Some(SlideDirection::Prev), now)
    }

    /// Jump to `target` (indicator dot activation), direction inferred.
    pub fn select(&mut self, target: usize, now: Instant) -> bool {
        if self.is_transitioning() {
            return false;
        }
        self.go_to(target, None, now)
    }

    /// Arm (or re-arm) automatic advancement.
    pub fn start_autoplay(&mut self, now: Instant) {
        self.autoplay_at = Some(now + AUTOPLAY_INTERVAL);
    }

    /// Disarm automatic advancement.
    pub fn stop_autoplay(&mut self) {
        self.autoplay_at = None;
    }

    /// Record the press x-coordinate of a drag.
    pub fn touch_start(&mut self, x: f32) {
        self.touch_start_x = Some(x);
    }

    /// Interpret a drag release at `x`.
    ///
    /// Displacements under [`SWIPE_THRESHOLD`] are taps and do nothing.
    /// A leftward swipe advances, a rightward swipe goes back; both are
    /// ignored mid-transition. Returns whether a navigation started.
    pub fn touch_end(&mut self, x: f32, now: Instant) -> bool {
        let Some(start_x) = self.touch_start_x.take() else {
            return false;
        };

        if self.is_transitioning() {
            return false;
        }

        let difference = start_x - x;
        if difference.abs() < SWIPE_THRESHOLD {
            return false;
        }

        if difference > 0.0 {
            self.next(now)
        } else {
            self.prev(now)
        }
    }

    /// Advance controller time: finalize an elapsed transition, then fire
    /// the autoplay deadline if it has passed.
    ///
    /// An autoplay deadline reached mid-transition is dropped, not queued;
    /// the next deadline stays on the original schedule rather than being
    /// re-based on `now`.
    pub fn tick(&mut self, now: Instant) {
        if let CarouselPhase::Transitioning { until, .. } = self.phase {
            if now >= until {
                self.phase = CarouselPhase::Idle;
            }
        }

        if let Some(at) = self.autoplay_at {
            if now >= at {
                if self.is_transitioning() {
                    self.autoplay_at = Some(at + AUTOPLAY_INTERVAL);
                } else {
                    tracing::debug!("auto-advancing to next slide");
                    self.next(now);
                }
            }
        }
    }

    /// Time until the next scheduled event (transition completion or
    /// autoplay), for repaint scheduling. `None` when nothing is pending.
    pub fn time_until_next_event(&self, now: Instant) -> Option<Duration> {
        let transition_due = match self.phase {
            CarouselPhase::Transitioning { until, .. } => Some(until),
            CarouselPhase::Idle => None,
        };

        [transition_due, self.autoplay_at]
            .into_iter()
            .flatten()
            .min()
            .map(|due| due.saturating_duration_since(now))
    }
}
