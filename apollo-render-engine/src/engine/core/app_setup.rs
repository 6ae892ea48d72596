use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
// Crate engine modules
use crate::engine::camera::mission_camera::{
    CameraTarget, place_mission_camera, spawn_mission_camera,
};
use crate::engine::core::app_state::{AppState, SceneProgress, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::mission::counter::StatCounters;
use crate::engine::mission::presenter::StageTracker;
use crate::engine::mission::scroll::MissionScroll;
use crate::engine::scene::bodies::{spawn_earth, spawn_moon};
use crate::engine::scene::materials::hex_colour;
use crate::engine::scene::starfield::spawn_star_field;
use crate::engine::scene::trajectory::spawn_trajectory_path;
use crate::engine::scene::vehicles::{spawn_lunar_module, spawn_spacecraft};
use crate::engine::systems::body_rotation::rotate_celestial_bodies;
use crate::engine::systems::debug_mission::debug_mission_state;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::placement::apply_mission_placement;
use crate::engine::systems::stage_info::{
    CurrentStageDisplay, StageChanged, animate_stat_counters, present_stage_changes,
    publish_scroll_progress, reveal_info_panel, track_stage_changes,
};
// Create Web RPC modules
use crate::rpc::web_rpc::{WebRpcPlugin, handle_rpc_messages};
use constants::render_settings::{
    AMBIENT_LIGHT_BRIGHTNESS, AMBIENT_LIGHT_COLOUR, BACKGROUND_COLOUR, SUN_ILLUMINANCE,
    SUN_POSITION,
};

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::scroll_input::{
    NativeScroll, handle_window_resize, native_scroll_input,
};
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::ui::overlay::{
    spawn_overlay, update_counter_readouts, update_progress_rail, update_stage_panel,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .insert_resource(ClearColor(hex_colour(BACKGROUND_COLOUR)))
        .insert_resource(AmbientLight {
            color: hex_colour(AMBIENT_LIGHT_COLOUR),
            brightness: AMBIENT_LIGHT_BRIGHTNESS,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<SceneProgress>()
        .init_resource::<MissionScroll>()
        .init_resource::<StageTracker>()
        .init_resource::<StatCounters>()
        .init_resource::<CurrentStageDisplay>()
        .init_resource::<CameraTarget>()
        .add_event::<StageChanged>();

    app.add_systems(Startup, (setup, spawn_mission_camera).chain())
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::Loading)),
        );

    // Scroll state is final for the frame once host messages are handled.
    let mission_systems = (
        track_stage_changes,
        present_stage_changes,
        animate_stat_counters,
        publish_scroll_progress,
        apply_mission_placement,
        place_mission_camera,
    )
        .chain()
        .after(handle_rpc_messages);

    let runtime_systems = (
        rotate_celestial_bodies,
        reveal_info_panel,
        fps_notification_system,
        debug_mission_state,
    );

    app.add_systems(
        Update,
        (mission_systems, runtime_systems).run_if(in_state(AppState::Running)),
    );

    #[cfg(not(target_arch = "wasm32"))]
    {
        app.init_resource::<NativeScroll>()
            .add_systems(Startup, spawn_overlay)
            .add_systems(Update, fps_text_update_system)
            .add_systems(
                Update,
                (handle_window_resize, native_scroll_input)
                    .chain()
                    .before(track_stage_changes)
                    .run_if(in_state(AppState::Running)),
            )
            .add_systems(
                Update,
                (
                    update_stage_panel,
                    update_counter_readouts,
                    update_progress_rail,
                )
                    .after(animate_stat_counters)
                    .run_if(in_state(AppState::Running)),
            );
    }

    app
}

fn spawn_lighting(commands: &mut Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::from_array(SUN_POSITION)).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

// Startup system spawning the whole mission scene
fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut progress: ResMut<SceneProgress>,
) {
    println!("=== APOLLO MISSION VISUALIZATION ===");

    spawn_lighting(&mut commands);
    spawn_star_field(&mut commands, &mut meshes, &mut materials);
    spawn_earth(&mut commands, &mut meshes, &mut materials);
    spawn_moon(&mut commands, &mut meshes, &mut materials);
    spawn_trajectory_path(&mut commands, &mut meshes, &mut materials);
    progress.bodies_spawned = true;

    spawn_spacecraft(&mut commands, &mut meshes, &mut materials);
    spawn_lunar_module(&mut commands, &mut meshes, &mut materials);
    progress.vehicles_spawned = true;
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
