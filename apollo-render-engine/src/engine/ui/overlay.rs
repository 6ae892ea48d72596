use crate::engine::mission::counter::StatCounters;
use crate::engine::mission::presenter::{MarkerState, marker_offset_percent, progress_display};
use crate::engine::mission::scroll::MissionScroll;
use crate::engine::scene::materials::hex_colour;
use crate::engine::systems::stage_info::{CurrentStageDisplay, InfoPanel};
use bevy::prelude::*;
use constants::mission::STAGE_COUNT;

const ACCENT: u32 = 0x4facfe;

#[derive(Component)]
pub struct FpsText;

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageField {
    Number,
    Name,
    Title,
    Description,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterReadout {
    Altitude,
    Velocity,
    Distance,
}

impl CounterReadout {
    const ALL: [(Self, &'static str, &'static str); 3] = [
        (Self::Altitude, "ALTITUDE", "km"),
        (Self::Velocity, "VELOCITY", "km/s"),
        (Self::Distance, "DISTANCE", "km"),
    ];
}

#[derive(Component)]
pub struct ProgressFill;

#[derive(Component)]
pub struct ProgressMarker(pub usize);

#[derive(Component)]
pub struct ScrollHint;

fn marker_colour(state: MarkerState) -> Color {
    match state {
        MarkerState::Completed => hex_colour(ACCENT),
        MarkerState::Active => Color::WHITE,
        MarkerState::Pending => Color::srgba(1.0, 1.0, 1.0, 0.25),
    }
}

fn label(text: &str, font_size: f32, colour: Color) -> (Text, TextFont, TextColor) {
    (
        Text::new(text),
        TextFont {
            font_size,
            ..default()
        },
        TextColor(colour),
    )
}

/// Native stand-in for the host page: info panel, progress rail, scroll hint and FPS.
pub fn spawn_overlay(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Overlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                ..default()
            },
        ))
        .with_children(|root| {
            spawn_info_panel(root);
            spawn_progress_rail(root);

            root.spawn((
                ScrollHint,
                label("SCROLL TO BEGIN THE MISSION", 14.0, hex_colour(ACCENT)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(24.0),
                    left: Val::Percent(42.0),
                    ..default()
                },
            ));

            root.spawn((
                FpsText,
                label("FPS: ", 16.0, Color::srgb(1.0, 0.0, 0.0)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
            ));
        });
}

fn spawn_info_panel(root: &mut ChildSpawnerCommands) {
    root.spawn((
        InfoPanel,
        Visibility::Hidden,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(40.0),
            bottom: Val::Px(40.0),
            width: Val::Px(420.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            padding: UiRect::all(Val::Px(20.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.04, 0.04, 0.07, 0.85)),
        BorderRadius::all(Val::Px(8.0)),
    ))
    .with_children(|panel| {
        panel
            .spawn(Node {
                column_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|heading| {
                heading.spawn((StageField::Number, label("01", 14.0, hex_colour(ACCENT))));
                heading.spawn((StageField::Name, label("", 14.0, hex_colour(ACCENT))));
            });

        panel.spawn((StageField::Title, label("", 28.0, Color::WHITE)));
        panel.spawn((
            StageField::Description,
            label("", 15.0, Color::srgba(1.0, 1.0, 1.0, 0.75)),
        ));

        panel
            .spawn(Node {
                column_gap: Val::Px(24.0),
                margin: UiRect::top(Val::Px(12.0)),
                ..default()
            })
            .with_children(|stats| {
                for (readout, caption, unit) in CounterReadout::ALL {
                    stats
                        .spawn(Node {
                            flex_direction: FlexDirection::Column,
                            ..default()
                        })
                        .with_children(|stat| {
                            stat.spawn((readout, label("0", 22.0, Color::WHITE)));
                            stat.spawn(label(
                                &format!("{caption} ({unit})"),
                                11.0,
                                Color::srgba(1.0, 1.0, 1.0, 0.5),
                            ));
                        });
                }
            });
    });
}

fn spawn_progress_rail(root: &mut ChildSpawnerCommands) {
    root.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(30.0),
            top: Val::Percent(10.0),
            height: Val::Percent(80.0),
            width: Val::Px(4.0),
            ..default()
        },
        BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.1)),
    ))
    .with_children(|rail| {
        rail.spawn((
            ProgressFill,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(0.0),
                ..default()
            },
            BackgroundColor(hex_colour(ACCENT)),
        ));

        for index in 0..STAGE_COUNT {
            rail.spawn((
                ProgressMarker(index),
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Percent(marker_offset_percent(index)),
                    left: Val::Px(-4.0),
                    width: Val::Px(12.0),
                    height: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(marker_colour(MarkerState::Pending)),
                BorderRadius::MAX,
            ));
        }
    });
}

pub fn update_stage_panel(
    display: Res<CurrentStageDisplay>,
    mut fields: Query<(&StageField, &mut Text)>,
) {
    if !display.is_changed() {
        return;
    }
    let Some(stage) = display.0.as_ref() else {
        return;
    };

    for (field, mut text) in &mut fields {
        text.0 = match field {
            StageField::Number => stage.stage_number.clone(),
            StageField::Name => stage.name.to_string(),
            StageField::Title => stage.title.to_string(),
            StageField::Description => stage.description.to_string(),
        };
    }
}

pub fn update_counter_readouts(
    counters: Res<StatCounters>,
    mut readouts: Query<(&CounterReadout, &mut Text)>,
) {
    if !counters.is_changed() {
        return;
    }

    for (readout, mut text) in &mut readouts {
        let counter = match readout {
            CounterReadout::Altitude => &counters.altitude,
            CounterReadout::Velocity => &counters.velocity,
            CounterReadout::Distance => &counters.distance,
        };
        if !counter.text().is_empty() {
            text.0 = counter.text().to_string();
        }
    }
}

pub fn update_progress_rail(
    mission_scroll: Res<MissionScroll>,
    mut fill: Query<&mut Node, With<ProgressFill>>,
    mut markers: Query<(&ProgressMarker, &mut BackgroundColor)>,
    mut hints: Query<&mut Visibility, With<ScrollHint>>,
) {
    if !mission_scroll.is_changed() {
        return;
    }

    let state = mission_scroll.state;
    let progress = progress_display(state.scroll_fraction, state.stage_index);

    for mut node in &mut fill {
        node.height = Val::Percent(progress.bar_percent);
    }

    for (marker, mut background) in &mut markers {
        if let Some(marker_state) = progress.markers.get(marker.0) {
            background.0 = marker_colour(*marker_state);
        }
    }

    for mut visibility in &mut hints {
        visibility.set_if_neq(if progress.scroll_hint_hidden {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        });
    }
}
