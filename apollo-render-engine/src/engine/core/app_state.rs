use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

/// Startup bookkeeping; runtime systems wait until everything is spawned.
#[derive(Resource, Default, Debug)]
pub struct SceneProgress {
    pub bodies_spawned: bool,
    pub vehicles_spawned: bool,
    pub camera_spawned: bool,
}

impl SceneProgress {
    pub fn is_ready(&self) -> bool {
        self.bodies_spawned && self.vehicles_spawned && self.camera_spawned
    }
}

pub fn transition_to_running(
    progress: Res<SceneProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if progress.is_ready() {
        println!("→ Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    #[test]
    fn waits_for_the_whole_scene() {
        let mut app = App::new();
        app.add_plugins(StatesPlugin)
            .init_state::<AppState>()
            .init_resource::<SceneProgress>()
            .add_systems(
                Update,
                transition_to_running.run_if(in_state(AppState::Loading)),
            );

        {
            let mut progress = app.world_mut().resource_mut::<SceneProgress>();
            progress.bodies_spawned = true;
            progress.vehicles_spawned = true;
        }
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<AppState>>().get(), AppState::Loading);

        app.world_mut().resource_mut::<SceneProgress>().camera_spawned = true;
        app.update();
        app.update();
        assert_eq!(*app.world().resource::<State<AppState>>().get(), AppState::Running);
    }
}
