use super::materials::{back_face_glow, glow, shaded, translucent};
use bevy::prelude::*;
use constants::scene_layout::{
    EARTH_ATMOSPHERE_RADIUS, EARTH_CLOUD_RADIUS, EARTH_LAND_RADIUS, EARTH_POSITION, EARTH_RADIUS,
    MOON_CRATER_RADIUS, MOON_POSITION, MOON_RADIUS,
};

#[derive(Component)]
pub struct Earth;

#[derive(Component)]
pub struct CloudLayer;

#[derive(Component)]
pub struct Moon;

/// Earth group: ocean globe, land layer, cloud layer and atmosphere halo.
pub fn spawn_earth(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let ocean = meshes.add(Sphere::new(EARTH_RADIUS).mesh().uv(64, 64));
    let land = meshes.add(Sphere::new(EARTH_LAND_RADIUS).mesh().uv(64, 64));
    let clouds = meshes.add(Sphere::new(EARTH_CLOUD_RADIUS).mesh().uv(64, 64));
    let atmosphere = meshes.add(Sphere::new(EARTH_ATMOSPHERE_RADIUS).mesh().uv(64, 64));

    commands
        .spawn((
            Name::new("Earth"),
            Earth,
            Transform::from_translation(EARTH_POSITION),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(ocean),
                MeshMaterial3d(materials.add(shaded(0x2233aa, Some(0x112244), 0.0))),
            ));
            parent.spawn((
                Mesh3d(land),
                MeshMaterial3d(materials.add(translucent(0x33aa55, 0.7))),
            ));
            parent.spawn((
                Mesh3d(atmosphere),
                MeshMaterial3d(materials.add(back_face_glow(0x4facfe, 0.15))),
            ));
            parent.spawn((
                Name::new("Clouds"),
                CloudLayer,
                Mesh3d(clouds),
                MeshMaterial3d(materials.add(translucent(0xffffff, 0.3))),
            ));
        });
}

/// Moon group: grey globe with a darker crater overlay.
pub fn spawn_moon(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let surface = meshes.add(Sphere::new(MOON_RADIUS).mesh().uv(64, 64));
    let craters = meshes.add(Sphere::new(MOON_CRATER_RADIUS).mesh().uv(32, 32));

    commands
        .spawn((
            Name::new("Moon"),
            Moon,
            Transform::from_translation(MOON_POSITION),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(surface),
                MeshMaterial3d(materials.add(shaded(0xaaaaaa, Some(0x222222), 0.0))),
            ));
            parent.spawn((
                Mesh3d(craters),
                MeshMaterial3d(materials.add(glow(0x666666, 0.3))),
            ));
        });
}
