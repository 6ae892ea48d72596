use crate::engine::mission::scroll::{MissionScroll, scroll_fraction};
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use constants::render_settings::{
    NATIVE_DEFAULT_VIEWPORT_HEIGHT, NATIVE_DOCUMENT_HEIGHT_FACTOR, NATIVE_KEY_SCROLL_PX,
    NATIVE_LINE_SCROLL_PX,
};

/// Virtual page scrolled by native builds, where there is no host document.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct NativeScroll {
    pub scroll_y: f32,
    pub viewport_height: f32,
}

impl Default for NativeScroll {
    fn default() -> Self {
        Self {
            scroll_y: 0.0,
            viewport_height: NATIVE_DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

impl NativeScroll {
    pub fn document_height(&self) -> f32 {
        self.viewport_height * NATIVE_DOCUMENT_HEIGHT_FACTOR
    }

    fn max_scroll(&self) -> f32 {
        (self.document_height() - self.viewport_height).max(0.0)
    }

    /// Scroll by `delta_px` (positive is down the page), staying within the document.
    pub fn scroll_by(&mut self, delta_px: f32) {
        self.scroll_y = (self.scroll_y + delta_px).clamp(0.0, self.max_scroll());
    }

    /// Re-measure after a resize, keeping the same relative position.
    pub fn resize(&mut self, viewport_height: f32) {
        let fraction = self.fraction();
        self.viewport_height = viewport_height.max(0.0);
        self.scroll_y = fraction * self.max_scroll();
    }

    pub fn fraction(&self) -> f32 {
        scroll_fraction(self.scroll_y, self.document_height(), self.viewport_height)
    }
}

/// Pixel delta for one wheel event; wheel up scrolls back towards launch.
fn wheel_delta(event: &MouseWheel) -> f32 {
    match event.unit {
        MouseScrollUnit::Line => -event.y * NATIVE_LINE_SCROLL_PX,
        MouseScrollUnit::Pixel => -event.y,
    }
}

/// Sample wheel and keyboard scrolling at the top of the frame.
pub fn native_scroll_input(
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut native: ResMut<NativeScroll>,
    mut mission_scroll: ResMut<MissionScroll>,
) {
    let mut delta: f32 = scroll_events.read().map(wheel_delta).sum();

    if keyboard.just_pressed(KeyCode::ArrowDown) || keyboard.just_pressed(KeyCode::PageDown) {
        delta += NATIVE_KEY_SCROLL_PX;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) || keyboard.just_pressed(KeyCode::PageUp) {
        delta -= NATIVE_KEY_SCROLL_PX;
    }
    if keyboard.just_pressed(KeyCode::Home) {
        delta = -native.scroll_y;
    }
    if keyboard.just_pressed(KeyCode::End) {
        delta = native.document_height();
    }

    if delta.abs() > f32::EPSILON {
        native.scroll_by(delta);
        sync_mission_scroll(&native, &mut mission_scroll);
    }
}

/// Keep the virtual page in step with the primary window size.
pub fn handle_window_resize(
    mut resize_events: EventReader<WindowResized>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
    mut native: ResMut<NativeScroll>,
    mut mission_scroll: ResMut<MissionScroll>,
) {
    let Ok(primary) = primary_window.single() else {
        resize_events.clear();
        return;
    };

    let Some(resized) = resize_events.read().filter(|e| e.window == primary).last() else {
        return;
    };

    native.resize(resized.height);
    sync_mission_scroll(&native, &mut mission_scroll);
    info!(
        "Viewport resized to {:.0}x{:.0}",
        resized.width, resized.height
    );
}

fn sync_mission_scroll(native: &NativeScroll, mission_scroll: &mut MissionScroll) {
    let fraction = native.fraction();
    if fraction != mission_scroll.state.scroll_fraction {
        mission_scroll.set_fraction(fraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_page_uses_configured_viewport() {
        let native = NativeScroll::default();
        assert_eq!(native.viewport_height, NATIVE_DEFAULT_VIEWPORT_HEIGHT);
        assert_eq!(
            native.document_height(),
            NATIVE_DEFAULT_VIEWPORT_HEIGHT * NATIVE_DOCUMENT_HEIGHT_FACTOR
        );
    }

    #[test]
    fn scrolling_is_clamped_to_the_document() {
        let mut native = NativeScroll::default();
        native.scroll_by(-50.0);
        assert_eq!(native.fraction(), 0.0);
        native.scroll_by(1.0e9);
        assert_eq!(native.fraction(), 1.0);
    }

    #[test]
    fn resize_keeps_relative_position() {
        let mut native = NativeScroll::default();
        native.scroll_by(native.max_scroll() * 0.25);
        native.resize(1080.0);
        assert!((native.fraction() - 0.25).abs() < 1e-5);
    }

    #[test]
    fn collapsed_viewport_reports_start() {
        let mut native = NativeScroll::default();
        native.scroll_by(500.0);
        native.resize(0.0);
        assert_eq!(native.fraction(), 0.0);
    }

    #[test]
    fn wheel_down_advances_the_mission() {
        let mut app = App::new();
        app.add_event::<MouseWheel>()
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<NativeScroll>()
            .init_resource::<MissionScroll>()
            .add_systems(Update, native_scroll_input);

        let window = app.world_mut().spawn_empty().id();
        app.world_mut().send_event(MouseWheel {
            unit: MouseScrollUnit::Pixel,
            x: 0.0,
            y: -4320.0,
            window,
        });
        app.update();

        let state = app.world().resource::<MissionScroll>().state;
        assert_eq!(state.stage_index, 6);
    }
}
