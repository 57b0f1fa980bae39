//! One-shot reveal tracking for page sections.
//!
//! Each tracked section latches `has_been_visible` the first time enough of
//! it intersects the viewport, then stops reacting to further observations.
//! Tracking is acquired with [`RevealController::attach`] and released with
//! [`RevealController::detach`]; a detach before the latch cancels tracking
//! with no state change. When no tracking facility is available the
//! controller fails open: everything reports as revealed.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::layout::Section;
use crate::transitions::{
    EasingFunction, MAX_STAGGER, REVEAL_TRANSITION_DURATION,
};

/// Visible fraction a section must exceed before it latches.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// How viewport intersections are sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracking {
    /// Latch sections from scroll viewport observations.
    Viewport,
    /// No tracking runs; every section reports as revealed immediately.
    Disabled,
}

#[derive(Debug, Clone)]
struct RevealEntry {
    threshold: f32,
    delay: Duration,
    has_been_visible: bool,
    revealed_at: Option<Instant>,
}

/// Reveal state for every tracked section.
#[derive(Debug, Clone)]
pub struct RevealController {
    tracking: Tracking,
    entries: HashMap<Section, RevealEntry>,
}

impl RevealController {
    pub fn new(tracking: Tracking) -> Self {
        RevealController {
            tracking,
            entries: HashMap::new(),
        }
    }

    pub fn tracking(&self) -> Tracking {
        self.tracking
    }

    /// Register a section for viewport tracking.
    ///
    /// `delay` shifts only the visual transition after the latch; it never
    /// affects when `has_been_visible` becomes true. Re-attaching an
    /// already tracked section is a no-op.
    pub fn attach(&mut self, section: Section, threshold: f32, delay: Duration) {
        self.entries.entry(section).or_insert(RevealEntry {
            threshold,
            delay,
            has_been_visible: false,
            revealed_at: None,
        });
    }

    /// Release tracking for a section on any teardown path.
    pub fn detach(&mut self, section: Section) {
        self.entries.remove(&section);
    }

    pub fn detach_all(&mut self) {
        self.entries.clear();
    }

    pub fn is_attached(&self, section: Section) -> bool {
        self.entries.contains_key(&section)
    }

    /// Feed one viewport observation for a section.
    ///
    /// Latches the entry the first time `visible_fraction` exceeds its
    /// threshold; latched entries ignore every further observation, so a
    /// section never flickers back when it scrolls away.
    pub fn observe(
        &mut self,
        section: Section,
        visible_fraction: f32,
        now: Instant,
    ) {
        if self.tracking == Tracking::Disabled {
            return;
        }
        let Some(entry) = self.entries.get_mut(&section) else {
            return;
        };
        if entry.has_been_visible {
            return;
        }
        if visible_fraction > entry.threshold {
            entry.has_been_visible = true;
            entry.revealed_at = Some(now);
            log::debug!(
                "section {:?} revealed at fraction {visible_fraction:.2}",
                section
            );
        }
    }

    /// Whether the section has ever been sufficiently visible.
    ///
    /// Untracked sections and disabled tracking report `true`: content must
    /// never stay hidden because nothing is watching it.
    pub fn has_been_visible(&self, section: Section) -> bool {
        match self.tracking {
            Tracking::Disabled => true,
            Tracking::Viewport => self
                .entries
                .get(&section)
                .map(|entry| entry.has_been_visible)
                .unwrap_or(true),
        }
    }

    /// Eased transition progress for a section in `0.0..=1.0`.
    ///
    /// Zero until the per-entry delay plus `stagger` has elapsed since the
    /// latch, one once the transition has completed. Sections that are not
    /// tracked render settled.
    pub fn progress(
        &self,
        section: Section,
        now: Instant,
        stagger: Duration,
    ) -> f32 {
        if self.tracking == Tracking::Disabled {
            return 1.0;
        }
        let Some(entry) = self.entries.get(&section) else {
            return 1.0;
        };
        let Some(revealed_at) = entry.revealed_at else {
            return 0.0;
        };

        let start = revealed_at + entry.delay + stagger;
        if now < start {
            return 0.0;
        }
        let t = (now - start).as_secs_f32()
            / REVEAL_TRANSITION_DURATION.as_secs_f32();
        EasingFunction::EaseOutCubic.apply(t)
    }

    /// Whether any reveal transition can still be in flight at `now`.
    /// Drives the animation tick subscription.
    pub fn is_animating(&self, now: Instant) -> bool {
        if self.tracking == Tracking::Disabled {
            return false;
        }
        self.entries.values().any(|entry| {
            entry.revealed_at.is_some_and(|at| {
                now < at + entry.delay + MAX_STAGGER + REVEAL_TRANSITION_DURATION
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> RevealController {
        let mut controller = RevealController::new(Tracking::Viewport);
        controller.attach(
            Section::About,
            DEFAULT_THRESHOLD,
            Duration::from_millis(100),
        );
        controller
    }

    #[test]
    fn latches_once_threshold_is_exceeded() {
        let mut controller = controller();
        let now = Instant::now();

        controller.observe(Section::About, 0.05, now);
        assert!(!controller.has_been_visible(Section::About));

        controller.observe(Section::About, 0.4, now);
        assert!(controller.has_been_visible(Section::About));
    }

    #[test]
    fn latch_never_reverts() {
        let mut controller = controller();
        let now = Instant::now();

        controller.observe(Section::About, 0.4, now);
        controller.observe(Section::About, 0.0, now);
        assert!(controller.has_been_visible(Section::About));
    }

    #[test]
    fn exact_threshold_does_not_latch() {
        let mut controller = controller();
        controller.observe(Section::About, DEFAULT_THRESHOLD, Instant::now());
        assert!(!controller.has_been_visible(Section::About));
    }

    #[test]
    fn detach_before_visibility_cancels_cleanly() {
        let mut controller = controller();
        controller.detach(Section::About);

        assert!(!controller.is_attached(Section::About));
        // Observations after release are dropped.
        controller.observe(Section::About, 1.0, Instant::now());
        assert!(!controller.is_attached(Section::About));
    }

    #[test]
    fn delay_shifts_animation_but_not_the_latch() {
        let mut controller = controller();
        let now = Instant::now();

        controller.observe(Section::About, 0.5, now);
        assert!(controller.has_been_visible(Section::About));
        // Inside the delay window: visible, but the transition has not
        // started.
        assert_eq!(
            controller.progress(Section::About, now, Duration::ZERO),
            0.0
        );

        let later = now
            + Duration::from_millis(100)
            + REVEAL_TRANSITION_DURATION
            + Duration::from_millis(50);
        let progress =
            controller.progress(Section::About, later, Duration::ZERO);
        assert!((progress - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn stagger_delays_progress_per_child() {
        let mut controller = controller();
        let now = Instant::now();
        controller.observe(Section::About, 0.5, now);

        let mid = now + Duration::from_millis(300);
        let eager = controller.progress(Section::About, mid, Duration::ZERO);
        let staggered = controller.progress(
            Section::About,
            mid,
            Duration::from_millis(250),
        );
        assert!(eager > 0.0);
        assert!(staggered < eager);
    }

    #[test]
    fn disabled_tracking_fails_open() {
        let mut controller = RevealController::new(Tracking::Disabled);
        controller.attach(
            Section::Contact,
            DEFAULT_THRESHOLD,
            Duration::ZERO,
        );

        assert!(controller.has_been_visible(Section::Contact));
        assert_eq!(
            controller.progress(
                Section::Contact,
                Instant::now(),
                Duration::ZERO
            ),
            1.0
        );
        assert!(!controller.is_animating(Instant::now()));
    }

    #[test]
    fn untracked_sections_report_revealed() {
        let controller = RevealController::new(Tracking::Viewport);
        assert!(controller.has_been_visible(Section::Footer));
        assert_eq!(
            controller.progress(
                Section::Footer,
                Instant::now(),
                Duration::ZERO
            ),
            1.0
        );
    }

    #[test]
    fn animating_window_covers_delay_and_transition() {
        let mut controller = controller();
        let now = Instant::now();
        controller.observe(Section::About, 0.5, now);

        assert!(controller.is_animating(now));
        let done = now
            + Duration::from_millis(100)
            + MAX_STAGGER
            + REVEAL_TRANSITION_DURATION
            + Duration::from_millis(1);
        assert!(!controller.is_animating(done));
    }
}
