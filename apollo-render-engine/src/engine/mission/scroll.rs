use bevy::prelude::*;
use constants::mission::STAGE_COUNT;
use serde::Serialize;

/// Scroll position resolved onto the stage timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScrollState {
    pub scroll_fraction: f32,
    pub stage_index: usize,
    pub stage_progress: f32,
}

/// Current scroll state, rewritten whenever new scroll input arrives.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct MissionScroll {
    pub state: ScrollState,
}

impl MissionScroll {
    pub fn set_fraction(&mut self, fraction: f32) {
        self.state = map_scroll(fraction);
    }
}

/// Map a scroll fraction onto the twelve mission stages.
pub fn map_scroll(fraction: f32) -> ScrollState {
    map_scroll_with(fraction, STAGE_COUNT)
}

/// Map a scroll fraction onto `stage_count` equal stages.
///
/// The fraction is clamped to [0, 1] first. The final stage is reached
/// exactly at 1.0, where the index is clamped back from `stage_count`.
pub fn map_scroll_with(fraction: f32, stage_count: usize) -> ScrollState {
    let stage_count = stage_count.max(1);
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };

    let scaled = fraction * stage_count as f32;
    let stage_index = (scaled.floor() as usize).min(stage_count - 1);

    ScrollState {
        scroll_fraction: fraction,
        stage_index,
        stage_progress: scaled.fract(),
    }
}

/// Scroll fraction of a document scrolled to `scroll_y`.
///
/// A document no taller than its viewport has nothing to scroll and
/// reports 0.
pub fn scroll_fraction(scroll_y: f32, document_height: f32, viewport_height: f32) -> f32 {
    let scrollable = document_height - viewport_height;
    if !(scrollable > 0.0) {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_scroll_is_first_stage() {
        let state = map_scroll(0.0);
        assert_eq!(state.stage_index, 0);
        assert_eq!(state.stage_progress, 0.0);
    }

    #[test]
    fn end_of_scroll_reaches_last_stage() {
        assert_eq!(map_scroll(1.0).stage_index, 11);
    }

    #[test]
    fn midpoint_lands_on_stage_boundary() {
        let state = map_scroll(0.5);
        assert_eq!(state.stage_index, 6);
        assert_eq!(state.stage_progress, 0.0);
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(map_scroll(-0.3).stage_index, 0);
        assert_eq!(map_scroll(1.7).stage_index, 11);
        assert_eq!(map_scroll(1.7).scroll_fraction, 1.0);
        assert_eq!(map_scroll(f32::NAN).stage_index, 0);
    }

    #[test]
    fn stage_index_never_decreases() {
        let mut previous = 0;
        for step in 0..=1000 {
            let state = map_scroll(step as f32 / 1000.0);
            assert!(state.stage_index <= 11);
            assert!(state.stage_index >= previous);
            assert!((0.0..1.0).contains(&state.stage_progress));
            previous = state.stage_index;
        }
    }

    #[test]
    fn single_stage_timeline() {
        assert_eq!(map_scroll_with(1.0, 1).stage_index, 0);
        assert_eq!(map_scroll_with(0.4, 0).stage_index, 0);
    }

    #[test]
    fn unscrollable_document_reports_zero() {
        assert_eq!(scroll_fraction(0.0, 800.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(50.0, 600.0, 800.0), 0.0);
        assert_eq!(scroll_fraction(500.0, 1800.0, 800.0), 0.5);
    }
}
