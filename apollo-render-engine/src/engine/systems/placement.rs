use crate::engine::camera::mission_camera::CameraTarget;
use crate::engine::mission::placement::{Placement, place_for};
use crate::engine::mission::scroll::MissionScroll;
use crate::engine::scene::trajectory::TrajectoryPath;
use crate::engine::scene::vehicles::{LunarModule, Spacecraft};
use bevy::prelude::*;

fn visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    }
}

/// Recompute the stage placement from the current scroll state and apply it.
pub fn apply_mission_placement(
    mission_scroll: Res<MissionScroll>,
    mut camera_target: ResMut<CameraTarget>,
    mut spacecraft: Query<&mut Transform, (With<Spacecraft>, Without<LunarModule>)>,
    mut lunar_module: Query<(&mut Transform, &mut Visibility), (With<LunarModule>, Without<Spacecraft>)>,
    mut trajectory: Query<&mut Visibility, (With<TrajectoryPath>, Without<LunarModule>)>,
) {
    let state = mission_scroll.state;
    let placement: Placement = place_for(state.stage_index, state.stage_progress);

    for mut transform in &mut spacecraft {
        transform.translation = placement.spacecraft.position;
        transform.rotation = placement.spacecraft.rotation_quat();
    }

    for (mut transform, mut visible) in &mut lunar_module {
        transform.translation = placement.lunar_module.position;
        transform.rotation = placement.lunar_module.rotation_quat();
        visible.set_if_neq(visibility(placement.lunar_module_visible));
    }

    for mut visible in &mut trajectory {
        visible.set_if_neq(visibility(placement.trajectory_visible));
    }

    if camera_target.pose != placement.camera {
        camera_target.pose = placement.camera;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_module_appears_for_descent() {
        let mut app = App::new();
        app.init_resource::<MissionScroll>()
            .init_resource::<CameraTarget>()
            .add_systems(Update, apply_mission_placement);

        let spacecraft = app
            .world_mut()
            .spawn((Spacecraft, Transform::default()))
            .id();
        let lunar_module = app
            .world_mut()
            .spawn((LunarModule, Transform::default(), Visibility::Hidden))
            .id();
        let trajectory = app
            .world_mut()
            .spawn((TrajectoryPath, Visibility::Hidden))
            .id();

        app.world_mut()
            .resource_mut::<MissionScroll>()
            .set_fraction(7.5 / 12.0);
        app.update();

        let world = app.world();
        assert_eq!(world.get::<Visibility>(lunar_module), Some(&Visibility::Visible));
        assert_eq!(world.get::<Visibility>(trajectory), Some(&Visibility::Visible));

        let expected = place_for(7, 0.5);
        let craft = world.get::<Transform>(spacecraft).map(|t| t.translation);
        assert_eq!(craft, Some(expected.spacecraft.position));
        assert_eq!(world.resource::<CameraTarget>().pose, expected.camera);
    }
}
