//! Runtime systems driving the mission from scroll input.
//!
//! Input sampling, stage tracking, placement, counters, idle body rotation
//! and diagnostics.

/// Idle spin of Earth, clouds and Moon.
pub mod body_rotation;

/// Keyboard-triggered dump of scroll state and placement.
pub mod debug_mission;

/// FPS tracking and notification systems for performance monitoring.
///
/// Sends frame rate updates to the host page via RPC and updates native UI overlays.
pub mod fps_tracking;

/// Applies the stage placement to scene entities and the camera target.
pub mod placement;

/// Native wheel/keyboard scrolling over a virtual page and resize handling.
pub mod scroll_input;

/// Stage change detection, info panel content, counters and progress publishing.
pub mod stage_info;
