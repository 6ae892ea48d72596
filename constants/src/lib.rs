//! Shared mission data and tuning constants for the Apollo scroll renderer.

pub mod mission;
pub mod render_settings;
pub mod scene_layout;
