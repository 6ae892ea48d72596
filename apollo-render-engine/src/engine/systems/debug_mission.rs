use crate::engine::mission::placement::place_for;
use crate::engine::mission::presenter::StageTracker;
use crate::engine::mission::scroll::MissionScroll;
use bevy::prelude::*;
use constants::mission::stage_at;

/// F1 dumps the current scroll state and derived placement to the log.
pub fn debug_mission_state(
    mission_scroll: Res<MissionScroll>,
    tracker: Res<StageTracker>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    let state = mission_scroll.state;
    let placement = place_for(state.stage_index, state.stage_progress);
    let stage = stage_at(state.stage_index);

    info!("=== MISSION DEBUG STATE ===");
    info!(
        "Scroll fraction: {:.4} -> stage {} ({}) at {:.3}",
        state.scroll_fraction, state.stage_index, stage.name, state.stage_progress
    );
    info!("Last presented stage: {:?}", tracker.current());
    info!(
        "Spacecraft: pos {} rot {}",
        placement.spacecraft.position, placement.spacecraft.rotation
    );
    info!(
        "Lunar module: pos {} visible {}",
        placement.lunar_module.position, placement.lunar_module_visible
    );
    info!("Trajectory visible: {}", placement.trajectory_visible);
    info!(
        "Camera: pos {} looking at {}",
        placement.camera.position, placement.camera.look_at
    );
}
