//! Scroll-staged camera.
//!
//! The camera takes the pose requested by the current stage plan every frame.

/// Mission camera spawn, staged target resource and placement system.
pub mod mission_camera;
