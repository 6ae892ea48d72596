use super::materials::glow;
use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};
use bevy::render::view::NoFrustumCulling;
use constants::scene_layout::{
    MOON_POSITION, TRAJECTORY_ARC_DEPTH, TRAJECTORY_ARC_HEIGHT, TRAJECTORY_DASH_LENGTH,
    TRAJECTORY_GAP_LENGTH, TRAJECTORY_SAMPLES,
};
use std::f32::consts::PI;

/// Dashed Earth-to-Moon path, shown from trans-lunar injection onwards.
#[derive(Component)]
pub struct TrajectoryPath;

/// `samples + 1` points from Earth towards the Moon, arcing up and out of plane.
pub fn trajectory_points(samples: usize) -> Vec<Vec3> {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| {
            let t = i as f32 / samples as f32;
            Vec3::new(
                t * MOON_POSITION.x,
                (t * PI).sin() * TRAJECTORY_ARC_HEIGHT,
                (t * PI * 0.5).sin() * TRAJECTORY_ARC_DEPTH,
            )
        })
        .collect()
}

/// Cut a polyline into dash segments of `dash` length separated by `gap`,
/// measured along the path so the pattern carries across vertices.
pub fn dash_segments(points: &[Vec3], dash: f32, gap: f32) -> Vec<[Vec3; 2]> {
    let period = dash + gap;
    if dash <= 0.0 || gap <= 0.0 {
        return points.windows(2).map(|pair| [pair[0], pair[1]]).collect();
    }

    let mut dashes = Vec::new();
    let mut travelled = 0.0;

    for pair in points.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let length = start.distance(end);
        if length <= f32::EPSILON {
            continue;
        }

        let mut offset = 0.0;
        while offset < length {
            let phase = (travelled + offset) % period;
            let (drawn, span) = if phase < dash {
                (true, dash - phase)
            } else {
                (false, period - phase)
            };
            let stop = (offset + span).min(length);
            if drawn {
                dashes.push([
                    start.lerp(end, offset / length),
                    start.lerp(end, stop / length),
                ]);
            }
            offset = stop;
        }
        travelled += length;
    }

    dashes
}

fn dashed_line_mesh(dashes: &[[Vec3; 2]]) -> Mesh {
    let vertices: Vec<Vec3> = dashes.iter().flatten().copied().collect();
    let indices: Vec<u32> = (0..vertices.len() as u32).collect();

    let mut mesh = Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::RENDER_WORLD);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, vertices);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

pub fn spawn_trajectory_path(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
) {
    let dashes = dash_segments(
        &trajectory_points(TRAJECTORY_SAMPLES),
        TRAJECTORY_DASH_LENGTH,
        TRAJECTORY_GAP_LENGTH,
    );

    commands.spawn((
        Name::new("Trajectory"),
        TrajectoryPath,
        Mesh3d(meshes.add(dashed_line_mesh(&dashes))),
        MeshMaterial3d(materials.add(glow(0x4facfe, 0.3))),
        Visibility::Hidden,
        NoFrustumCulling,
        Transform::IDENTITY,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_runs_from_earth_to_moon() {
        let points = trajectory_points(TRAJECTORY_SAMPLES);
        assert_eq!(points.len(), 101);
        assert_eq!(points[0], Vec3::ZERO);
        let last = points[100];
        assert!((last.x - MOON_POSITION.x).abs() < 1e-3);
        assert!(last.y.abs() < 1e-3);
        assert!((last.z - TRAJECTORY_ARC_DEPTH).abs() < 1e-3);
        assert!((points[50].y - TRAJECTORY_ARC_HEIGHT).abs() < 1e-3);
    }

    #[test]
    fn straight_line_dashes() {
        let line = [Vec3::ZERO, Vec3::new(30.0, 0.0, 0.0)];
        let dashes = dash_segments(&line, 10.0, 5.0);
        assert_eq!(dashes.len(), 2);
        let ends: Vec<(f32, f32)> = dashes.iter().map(|[a, b]| (a.x, b.x)).collect();
        for ((start, end), (expected_start, expected_end)) in ends.into_iter().zip([(0.0, 10.0), (15.0, 25.0)]) {
            assert!((start - expected_start).abs() < 1e-4);
            assert!((end - expected_end).abs() < 1e-4);
        }
    }

    #[test]
    fn dash_pattern_carries_across_vertices() {
        let line = [
            Vec3::ZERO,
            Vec3::new(6.0, 0.0, 0.0),
            Vec3::new(6.0, 6.0, 0.0),
        ];
        let dashes = dash_segments(&line, 10.0, 5.0);
        let drawn: f32 = dashes.iter().map(|[a, b]| a.distance(*b)).sum();
        assert!((drawn - 10.0).abs() < 1e-4);
    }

    #[test]
    fn dashed_length_is_two_thirds_of_path() {
        let points = trajectory_points(TRAJECTORY_SAMPLES);
        let total: f32 = points.windows(2).map(|p| p[0].distance(p[1])).sum();
        let drawn: f32 = dash_segments(&points, 10.0, 5.0)
            .iter()
            .map(|[a, b]| a.distance(*b))
            .sum();
        let ratio = drawn / total;
        assert!((ratio - 2.0 / 3.0).abs() < 0.01, "ratio {ratio}");
    }
}
