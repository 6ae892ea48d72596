/// Scene background (#0a0a12)
pub const BACKGROUND_COLOUR: u32 = 0x0a0a12;

pub const AMBIENT_LIGHT_COLOUR: u32 = 0x404040;
pub const AMBIENT_LIGHT_BRIGHTNESS: f32 = 400.0;
pub const SUN_ILLUMINANCE: f32 = 12_000.0;
pub const SUN_POSITION: [f32; 3] = [500.0, 200.0, 500.0];

/// Camera projection
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100_000.0;
pub const CAMERA_START: [f32; 3] = [0.0, 50.0, 200.0];

/// Stat counters ease towards their new target over this many seconds
pub const COUNTER_ANIMATION_SECONDS: f64 = 1.0;

/// Delay before the stage info panel fades in
pub const INFO_PANEL_REVEAL_SECONDS: f32 = 1.0;

/// Scroll fraction past which the scroll hint is hidden
pub const SCROLL_HINT_THRESHOLD: f32 = 0.01;

/// Native builds scroll a virtual document this many viewports tall
pub const NATIVE_DOCUMENT_HEIGHT_FACTOR: f32 = 13.0;
/// Viewport height assumed until the window reports its size
pub const NATIVE_DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;
pub const NATIVE_LINE_SCROLL_PX: f32 = 40.0;
pub const NATIVE_KEY_SCROLL_PX: f32 = 120.0;

/// Minimum interval between FPS notifications to the host page
pub const FPS_NOTIFICATION_INTERVAL: f32 = 0.5;
