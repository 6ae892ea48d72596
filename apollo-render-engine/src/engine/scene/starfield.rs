use super::materials::glow;
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use constants::scene_layout::{STAR_COUNT, STAR_FIELD_SEED, STAR_SHELL_DEPTH, STAR_SHELL_INNER_RADIUS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

#[derive(Component)]
pub struct StarField;

/// Stars scattered uniformly over directions on a thick shell around the origin.
pub fn star_positions(count: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let radius = STAR_SHELL_INNER_RADIUS + rng.r#gen::<f32>() * STAR_SHELL_DEPTH;
            let theta = rng.r#gen::<f32>() * TAU;
            let phi = (2.0 * rng.r#gen::<f32>() - 1.0).acos();

            Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            )
        })
        .collect()
}

pub fn spawn_star_field(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let mut mesh = Mesh::new(PrimitiveTopology::PointList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(
        Mesh::ATTRIBUTE_POSITION,
        star_positions(STAR_COUNT, STAR_FIELD_SEED),
    );

    commands.spawn((
        Name::new("Star Field"),
        StarField,
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(glow(0xffffff, 0.8))),
        NoFrustumCulling,
        Transform::IDENTITY,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_stay_inside_the_shell() {
        let stars = star_positions(500, 7);
        assert_eq!(stars.len(), 500);
        for star in stars {
            let radius = star.length();
            assert!(radius >= STAR_SHELL_INNER_RADIUS - 0.5);
            assert!(radius <= STAR_SHELL_INNER_RADIUS + STAR_SHELL_DEPTH + 0.5);
        }
    }

    #[test]
    fn seeded_layout_is_reproducible() {
        assert_eq!(star_positions(32, 99), star_positions(32, 99));
        assert_ne!(star_positions(32, 99), star_positions(32, 100));
    }
}
