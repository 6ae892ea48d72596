pub mod camera;
pub mod core;
pub mod mission;
pub mod scene;
pub mod systems;
pub mod ui;
