use crate::engine::mission::counter::StatCounters;
use crate::engine::mission::presenter::{
    StageDisplay, StageTracker, on_stage_change, progress_display,
};
use crate::engine::mission::scroll::MissionScroll;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;
use constants::mission::stage_at;
use constants::render_settings::INFO_PANEL_REVEAL_SECONDS;

/// Fired once each time the scroll position crosses into a different stage.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageChanged {
    pub stage_index: usize,
}

/// Info panel content for the stage currently on screen.
#[derive(Resource, Debug, Default, Clone)]
pub struct CurrentStageDisplay(pub Option<StageDisplay>);

pub fn track_stage_changes(
    mission_scroll: Res<MissionScroll>,
    mut tracker: ResMut<StageTracker>,
    mut stage_events: EventWriter<StageChanged>,
) {
    if let Some(stage_index) = tracker.observe(mission_scroll.state.stage_index) {
        stage_events.write(StageChanged { stage_index });
    }
}

/// Refresh the info panel and retarget the stat counters on stage change.
pub fn present_stage_changes(
    mut stage_events: EventReader<StageChanged>,
    time: Res<Time>,
    mut counters: ResMut<StatCounters>,
    mut display: ResMut<CurrentStageDisplay>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let now = time.elapsed_secs_f64();

    for event in stage_events.read() {
        let stage = stage_at(event.stage_index);
        let stage_display = on_stage_change(stage);
        info!(
            "Stage {} {}: {}",
            stage_display.stage_number, stage_display.name, stage_display.title
        );

        counters.retarget(stage, now);
        rpc_interface.send_notification(
            "stage_changed",
            serde_json::json!({
                "stage_index": event.stage_index,
                "display": &stage_display,
            }),
        );
        display.0 = Some(stage_display);
    }
}

/// Step the eased counters and forward the formatted readouts while they move.
pub fn animate_stat_counters(
    time: Res<Time>,
    mut counters: ResMut<StatCounters>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    let now = time.elapsed_secs_f64();
    if !counters.bypass_change_detection().sample(now) {
        return;
    }

    counters.set_changed();
    rpc_interface.send_notification(
        "counters_update",
        serde_json::json!({
            "altitude": counters.altitude.text(),
            "velocity": counters.velocity.text(),
            "distance": counters.distance.text(),
        }),
    );
}

/// Push progress bar, marker and scroll hint state whenever the scroll moves.
pub fn publish_scroll_progress(
    mission_scroll: Res<MissionScroll>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !mission_scroll.is_changed() {
        return;
    }

    let state = mission_scroll.state;
    let progress = progress_display(state.scroll_fraction, state.stage_index);
    rpc_interface.send_notification(
        "scroll_progress",
        serde_json::json!({
            "scroll": state,
            "progress": progress,
        }),
    );
}

/// Marker for the native info panel, revealed shortly after startup.
#[derive(Component)]
pub struct InfoPanel;

pub fn reveal_info_panel(
    time: Res<Time>,
    mut revealed: Local<bool>,
    mut panels: Query<&mut Visibility, With<InfoPanel>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if *revealed || time.elapsed_secs() < INFO_PANEL_REVEAL_SECONDS {
        return;
    }

    for mut visibility in &mut panels {
        *visibility = Visibility::Visible;
    }
    rpc_interface.send_notification("info_panel_visible", serde_json::json!({ "visible": true }));
    *revealed = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::EventCursor;
    use std::time::Duration;

    fn stage_tracking_app() -> App {
        let mut app = App::new();
        app.add_event::<StageChanged>()
            .init_resource::<MissionScroll>()
            .init_resource::<StageTracker>()
            .add_systems(Update, track_stage_changes);
        app
    }

    #[test]
    fn stage_changes_fire_once_per_stage() {
        let mut app = stage_tracking_app();
        let mut cursor = EventCursor::<StageChanged>::default();
        let mut fired = Vec::new();

        for step in 0..=240 {
            app.world_mut()
                .resource_mut::<MissionScroll>()
                .set_fraction(step as f32 / 240.0);
            app.update();

            let events = app.world().resource::<Events<StageChanged>>();
            fired.extend(cursor.read(events).map(|e| e.stage_index));
        }

        assert_eq!(fired, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn idle_scroll_is_quiet() {
        let mut app = stage_tracking_app();
        let mut cursor = EventCursor::<StageChanged>::default();

        let mut fired = Vec::new();
        for _ in 0..3 {
            app.update();
            let events = app.world().resource::<Events<StageChanged>>();
            fired.extend(cursor.read(events).map(|e| e.stage_index));
        }

        assert_eq!(fired, vec![0]);
    }

    fn presenter_app() -> App {
        let mut app = App::new();
        app.add_event::<StageChanged>()
            .init_resource::<Time>()
            .init_resource::<StatCounters>()
            .init_resource::<CurrentStageDisplay>()
            .init_resource::<WebRpcInterface>()
            .add_systems(
                Update,
                (present_stage_changes, animate_stat_counters).chain(),
            );
        app
    }

    fn notification_methods(app: &App) -> Vec<String> {
        app.world()
            .resource::<WebRpcInterface>()
            .pending_notifications()
            .iter()
            .map(|n| n.method.clone())
            .collect()
    }

    #[test]
    fn stage_change_retargets_counters_and_notifies_host() {
        let mut app = presenter_app();
        app.world_mut().send_event(StageChanged { stage_index: 6 });
        app.update();

        let display = app.world().resource::<CurrentStageDisplay>();
        assert_eq!(display.0.as_ref().map(|d| d.name), Some("LOI"));
        assert!(app.world().resource::<StatCounters>().altitude.is_animating());
        assert_eq!(notification_methods(&app), vec!["stage_changed", "counters_update"]);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs(2));
        app.update();

        let counters = app.world().resource::<StatCounters>();
        assert_eq!(counters.altitude.text(), "110.0");
        assert_eq!(counters.velocity.text(), "1.6");
        assert_eq!(counters.distance.text(), "384,400");
        assert!(!counters.distance.is_animating());
    }

    #[test]
    fn settled_counters_stay_quiet() {
        let mut app = presenter_app();
        app.update();
        assert!(notification_methods(&app).is_empty());
    }
}
