//! Scroll-to-stage mapping and everything derived from it.
//!
//! All functions here are pure; the ECS systems in `engine::systems` sample
//! input, call into this module and apply the results.

/// Closed-form curves used to build stage plans.
pub mod curve;

/// Eased stat counters and their number formatting.
pub mod counter;

/// Per-stage scene placement of the spacecraft, lunar module and camera.
pub mod placement;

/// Stage info panel content, stage change tracking and progress rail state.
pub mod presenter;

/// Scroll fraction to stage index/progress mapping.
pub mod scroll;
