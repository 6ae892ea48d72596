use super::materials::{glow, shaded};
use bevy::prelude::*;
use constants::scene_layout::SPACECRAFT_START;
use std::f32::consts::{PI, TAU};

/// Command/service module stack.
#[derive(Component)]
pub struct Spacecraft;

#[derive(Component)]
pub struct LunarModule;

const LANDING_LEG_COUNT: usize = 4;

/// Command module cone, service module cylinder and engine nozzle.
pub fn spawn_spacecraft(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let command_module = meshes.add(Cone::new(3.0, 5.0).mesh().resolution(8));
    let service_module = meshes.add(Cylinder::new(3.0, 10.0).mesh().resolution(8));
    let nozzle = meshes.add(
        ConicalFrustum {
            radius_top: 1.0,
            radius_bottom: 2.0,
            height: 3.0,
        }
        .mesh()
        .resolution(8),
    );

    commands
        .spawn((
            Name::new("Spacecraft"),
            Spacecraft,
            Transform::from_translation(SPACECRAFT_START),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(command_module),
                MeshMaterial3d(materials.add(shaded(0xcccccc, None, 0.8))),
                Transform::from_xyz(0.0, 2.5, 0.0).with_rotation(Quat::from_rotation_x(PI)),
            ));
            parent.spawn((
                Mesh3d(service_module),
                MeshMaterial3d(materials.add(shaded(0x888888, None, 0.6))),
                Transform::from_xyz(0.0, -5.0, 0.0),
            ));
            parent.spawn((
                Mesh3d(nozzle),
                MeshMaterial3d(materials.add(shaded(0x444444, None, 0.0))),
                Transform::from_xyz(0.0, -11.5, 0.0),
            ));
        });
}

/// Descent stage, ascent stage, window and four legs with footpads.
/// Starts hidden alongside the spacecraft stack.
pub fn spawn_lunar_module(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let descent_stage = meshes.add(
        ConicalFrustum {
            radius_top: 4.0,
            radius_bottom: 5.0,
            height: 4.0,
        }
        .mesh()
        .resolution(8),
    );
    let ascent_stage = meshes.add(Cuboid::new(5.0, 4.0, 5.0));
    let window = meshes.add(Cuboid::new(2.0, 1.5, 0.5));
    let leg = meshes.add(Cylinder::new(0.2, 6.0).mesh().resolution(4));
    let footpad = meshes.add(Cylinder::new(1.0, 0.3).mesh().resolution(8));
    let leg_material = materials.add(shaded(0x888888, None, 0.0));

    commands
        .spawn((
            Name::new("Lunar Module"),
            LunarModule,
            Transform::from_translation(SPACECRAFT_START),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(descent_stage),
                MeshMaterial3d(materials.add(shaded(0xaaaa44, None, 0.3))),
            ));
            parent.spawn((
                Mesh3d(ascent_stage),
                MeshMaterial3d(materials.add(shaded(0xcccccc, None, 0.5))),
                Transform::from_xyz(0.0, 4.0, 0.0),
            ));
            parent.spawn((
                Mesh3d(window),
                MeshMaterial3d(materials.add(glow(0x4facfe, 0.7))),
                Transform::from_xyz(0.0, 4.5, 2.8),
            ));

            for (leg_transform, pad_transform) in landing_gear_transforms() {
                parent.spawn((
                    Mesh3d(leg.clone()),
                    MeshMaterial3d(leg_material.clone()),
                    leg_transform,
                ));
                parent.spawn((
                    Mesh3d(footpad.clone()),
                    MeshMaterial3d(leg_material.clone()),
                    pad_transform,
                ));
            }
        });
}

/// Splayed leg and footpad transforms, evenly spaced around the descent stage.
pub fn landing_gear_transforms() -> [(Transform, Transform); LANDING_LEG_COUNT] {
    std::array::from_fn(|i| {
        let angle = i as f32 / LANDING_LEG_COUNT as f32 * TAU;
        let (sin, cos) = angle.sin_cos();

        let leg = Transform::from_xyz(cos * 5.0, -3.0, sin * 5.0).with_rotation(Quat::from_euler(
            EulerRot::XYZ,
            sin * 0.4,
            0.0,
            cos * 0.4,
        ));
        let pad = Transform::from_xyz(cos * 7.0, -6.0, sin * 7.0);
        (leg, pad)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footpads_sit_outside_their_legs() {
        for (leg, pad) in landing_gear_transforms() {
            let leg_reach = Vec2::new(leg.translation.x, leg.translation.z).length();
            let pad_reach = Vec2::new(pad.translation.x, pad.translation.z).length();
            assert!((leg_reach - 5.0).abs() < 1e-4);
            assert!((pad_reach - 7.0).abs() < 1e-4);
            assert!(pad.translation.y < leg.translation.y);
        }
    }
}
