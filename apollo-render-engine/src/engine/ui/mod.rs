//! Native overlay UI mirroring the host page's info panel and progress rail.

/// Overlay spawning and per-frame text/progress updates.
pub mod overlay;
