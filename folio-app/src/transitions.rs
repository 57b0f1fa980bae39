//! Easing primitives for the one-shot section reveals.

use std::time::Duration;

/// Duration of the reveal slide once it starts.
pub const REVEAL_TRANSITION_DURATION: Duration = Duration::from_millis(800);

/// Upper bound on the per-child stagger views may add within a section.
pub const MAX_STAGGER: Duration = Duration::from_millis(600);

/// Vertical offset applied to fully hidden content, in logical pixels.
pub const REVEAL_OFFSET: f32 = 28.0;

/// Easing function types for transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    EaseOutCubic,
    EaseInOutCubic,
    EaseOutQuart,
    EaseOutExpo,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            EasingFunction::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
            EasingFunction::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
        }
    }
}

/// Slide offset for a reveal progress value: full [`REVEAL_OFFSET`] while
/// hidden, settling to zero as the eased progress reaches one.
pub fn reveal_offset(progress: f32) -> f32 {
    REVEAL_OFFSET * (1.0 - EasingFunction::EaseOutCubic.apply(progress))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_is_clamped_and_monotone_at_bounds() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseOutCubic,
            EasingFunction::EaseInOutCubic,
            EasingFunction::EaseOutQuart,
            EasingFunction::EaseOutExpo,
        ] {
            assert_eq!(easing.apply(-1.0), 0.0);
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON);
            assert!((easing.apply(2.0) - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn reveal_offset_spans_hidden_to_settled() {
        assert_eq!(reveal_offset(0.0), REVEAL_OFFSET);
        assert!(reveal_offset(0.5) < REVEAL_OFFSET);
        assert!(reveal_offset(1.0).abs() < f32::EPSILON);
    }
}
