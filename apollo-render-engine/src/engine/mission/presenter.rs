use bevy::prelude::*;
use constants::mission::{MissionStage, STAGE_COUNT};
use constants::render_settings::SCROLL_HINT_THRESHOLD;
use serde::Serialize;

/// Text and counter targets shown for a newly entered stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageDisplay {
    pub stage_number: String,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub altitude: f64,
    pub velocity: f64,
    pub distance: f64,
}

pub fn on_stage_change(stage: &MissionStage) -> StageDisplay {
    StageDisplay {
        stage_number: format!("{:02}", stage.id),
        name: stage.name,
        title: stage.title,
        description: stage.description,
        altitude: stage.altitude,
        velocity: stage.velocity,
        distance: stage.distance,
    }
}

/// Remembers the last presented stage so changes fire once each.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct StageTracker {
    current: Option<usize>,
}

impl StageTracker {
    /// Record `stage_index`; returns it only if it differs from the last one seen.
    pub fn observe(&mut self, stage_index: usize) -> Option<usize> {
        if self.current == Some(stage_index) {
            return None;
        }
        self.current = Some(stage_index);
        Some(stage_index)
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerState {
    Completed,
    Active,
    Pending,
}

impl MarkerState {
    pub fn for_marker(marker_index: usize, stage_index: usize) -> Self {
        match marker_index.cmp(&stage_index) {
            std::cmp::Ordering::Less => Self::Completed,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Pending,
        }
    }
}

pub fn marker_states(stage_index: usize) -> [MarkerState; STAGE_COUNT] {
    std::array::from_fn(|marker| MarkerState::for_marker(marker, stage_index))
}

/// Vertical offset of a stage marker along the progress rail, in percent.
pub fn marker_offset_percent(marker_index: usize) -> f32 {
    if STAGE_COUNT < 2 {
        return 0.0;
    }
    marker_index as f32 / (STAGE_COUNT - 1) as f32 * 100.0
}

pub fn scroll_hint_hidden(scroll_fraction: f32) -> bool {
    scroll_fraction > SCROLL_HINT_THRESHOLD
}

/// Progress rail contents for one scroll position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressDisplay {
    pub bar_percent: f32,
    pub markers: [MarkerState; STAGE_COUNT],
    pub scroll_hint_hidden: bool,
}

pub fn progress_display(scroll_fraction: f32, stage_index: usize) -> ProgressDisplay {
    ProgressDisplay {
        bar_percent: scroll_fraction * 100.0,
        markers: marker_states(stage_index),
        scroll_hint_hidden: scroll_hint_hidden(scroll_fraction),
    }
}
