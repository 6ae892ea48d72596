use crate::engine::core::app_state::SceneProgress;
use crate::engine::mission::placement::{CameraPose, Placement};
use bevy::prelude::*;
use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR, CAMERA_START,
};

#[derive(Component)]
pub struct MissionCamera;

/// Camera pose requested by the current stage.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraTarget {
    pub pose: CameraPose,
}

impl Default for CameraTarget {
    fn default() -> Self {
        Self {
            pose: Placement::initial().camera,
        }
    }
}

pub fn spawn_mission_camera(mut commands: Commands, mut progress: ResMut<SceneProgress>) {
    let start = CameraTarget::default().pose;

    commands.spawn((
        Name::new("Mission Camera"),
        MissionCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(Vec3::from_array(CAMERA_START)).looking_at(start.look_at, Vec3::Y),
    ));

    progress.camera_spawned = true;
}

/// Snap the camera to the staged position and aim it at the staged subject.
///
/// Reads only the current `CameraTarget`, so the same scroll position always
/// renders the same view.
pub fn place_mission_camera(
    target: Res<CameraTarget>,
    mut camera_query: Query<&mut Transform, With<MissionCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    transform.translation = target.pose.position;
    if target.pose.position.distance_squared(target.pose.look_at) > f32::EPSILON {
        transform.look_at(target.pose.look_at, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::mission::placement::place_for;

    #[test]
    fn same_target_gives_same_view() {
        let pose = place_for(5, 0.5).camera;
        let mut app = App::new();
        app.insert_resource(CameraTarget { pose })
            .add_systems(Update, place_mission_camera);
        let camera = app
            .world_mut()
            .spawn((MissionCamera, Transform::from_translation(Vec3::from_array(CAMERA_START))))
            .id();

        app.update();
        let first = app.world().get::<Transform>(camera).copied();
        app.update();
        let second = app.world().get::<Transform>(camera).copied();

        assert_eq!(first, second);
        let transform = first.expect("camera transform");
        assert_eq!(transform.translation, pose.position);
        let towards_subject = (pose.look_at - pose.position).normalize();
        assert!(transform.forward().dot(towards_subject) > 0.9999);
    }
}
