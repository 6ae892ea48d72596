use crate::engine::scene::bodies::{CloudLayer, Earth, Moon};
use bevy::prelude::*;
use constants::scene_layout::{CLOUD_SPIN_RATE, EARTH_SPIN_RATE, MOON_SPIN_RATE};

/// Slow idle spin of Earth, its cloud layer and the Moon.
pub fn rotate_celestial_bodies(
    time: Res<Time>,
    mut earth: Query<&mut Transform, (With<Earth>, Without<Moon>, Without<CloudLayer>)>,
    mut clouds: Query<&mut Transform, (With<CloudLayer>, Without<Earth>, Without<Moon>)>,
    mut moon: Query<&mut Transform, (With<Moon>, Without<Earth>, Without<CloudLayer>)>,
) {
    let dt = time.delta_secs();

    for mut transform in &mut earth {
        transform.rotate_y(EARTH_SPIN_RATE * dt);
    }
    for mut transform in &mut clouds {
        transform.rotate_y(CLOUD_SPIN_RATE * dt);
    }
    for mut transform in &mut moon {
        transform.rotate_y(MOON_SPIN_RATE * dt);
    }
}
