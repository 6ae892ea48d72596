//! Scene content: celestial bodies, spacecraft, star field and trajectory.
//!
//! Everything is spawned once at startup; per-frame motion is applied by
//! the placement and rotation systems.

/// Earth and Moon groups with their layered shells.
pub mod bodies;

/// Material helpers shared by the scene spawners.
pub mod materials;

/// Seeded star shell rendered as a point list.
pub mod starfield;

/// Dashed Earth-to-Moon trajectory overlay.
pub mod trajectory;

/// Command/service module and lunar module models.
pub mod vehicles;
