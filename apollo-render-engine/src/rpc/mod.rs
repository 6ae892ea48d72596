//! JSON-RPC 2.0 bridge between the visualization and its host page.
//!
//! The engine runs inside an iframe or canvas owned by a page that renders
//! the document being scrolled, the info panel and the progress rail. The
//! page reports scroll positions; the engine reports what the page should
//! show.
//!
//! ## Message Flow
//!
//! ```text
//! Host page (parent window)  <──postMessage──>  Bevy (iframe)
//!        │                                        │
//!        ├─ scroll_changed (notification) ──────> │
//!        │                                        ├─ map scroll, place scene
//!        │ <────────── stage_changed ─────────────┤
//!        │ <────────── counters_update ───────────┤
//!        │ <────────── scroll_progress ───────────┤
//!        │                                        │
//!        ├─ Request (with ID) ──────────────────> │
//!        │ <───────────────── Response (with ID) ─┤
//! ```
//!
//! ## Incoming Methods
//!
//! - `scroll_changed`: either `{ "fraction": f }` or
//!   `{ "scroll_y": y, "scroll_height": h, "viewport_height": v }`.
//!   Usually sent as a notification from the page's scroll listener.
//! - `get_scroll_state`: current fraction, stage index and stage progress.
//! - `get_mission_stages`: the full stage table.
//! - `get_fps`: current smoothed frame rate.
//!
//! ## Outgoing Notifications
//!
//! - `stage_changed`: stage index and the formatted info panel content.
//! - `counters_update`: formatted altitude, velocity and distance readouts.
//! - `scroll_progress`: progress bar percent, marker states, scroll hint.
//! - `info_panel_visible`: sent once after the initial reveal delay.
//! - `fps_update`: periodic frame rate.
//! - `debug_message`: messages that could not be parsed.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error

/// JSON-RPC 2.0 bidirectional communication system for host page integration.
///
/// Handles request-response patterns, notifications, and WASM message listeners.
pub mod web_rpc;
