//! Fixed scene geometry. Distances are scene units, not kilometres: the
//! Earth-Moon gap is compressed so both bodies fit in one camera sweep.
use bevy::math::Vec3;

pub const EARTH_POSITION: Vec3 = Vec3::ZERO;
pub const EARTH_RADIUS: f32 = 100.0;
pub const EARTH_LAND_RADIUS: f32 = 100.5;
pub const EARTH_CLOUD_RADIUS: f32 = 102.0;
pub const EARTH_ATMOSPHERE_RADIUS: f32 = 105.0;

pub const MOON_POSITION: Vec3 = Vec3::new(2000.0, 0.0, 0.0);
pub const MOON_RADIUS: f32 = 27.0;
pub const MOON_CRATER_RADIUS: f32 = 27.2;

/// Spacecraft stack position before the first scroll event
pub const SPACECRAFT_START: Vec3 = Vec3::new(0.0, 120.0, 0.0);

/// Lunar module rests on the surface: moon radius plus half its leg span
pub const LUNAR_SURFACE_HEIGHT: f32 = MOON_RADIUS + 6.0;

/// Earth spin in radians per second (clouds drift faster than the globe)
pub const EARTH_SPIN_RATE: f32 = 0.012;
pub const CLOUD_SPIN_RATE: f32 = 0.03;
pub const MOON_SPIN_RATE: f32 = 0.006;

/// Star shell
pub const STAR_COUNT: usize = 5000;
pub const STAR_SHELL_INNER_RADIUS: f32 = 5000.0;
pub const STAR_SHELL_DEPTH: f32 = 10000.0;
pub const STAR_FIELD_SEED: u64 = 0x0A90_1100;

/// Earth-to-Moon trajectory overlay
pub const TRAJECTORY_SAMPLES: usize = 100;
pub const TRAJECTORY_ARC_HEIGHT: f32 = 300.0;
pub const TRAJECTORY_ARC_DEPTH: f32 = 100.0;
pub const TRAJECTORY_DASH_LENGTH: f32 = 10.0;
pub const TRAJECTORY_GAP_LENGTH: f32 = 5.0;
