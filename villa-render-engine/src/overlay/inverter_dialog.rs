use bevy::prelude::*;

use crate::engine::assets::system_manifest::SystemManifest;
use crate::engine::interaction::hover::HoverTarget;
use crate::engine::scene::equipment::DialogTrigger;

/// Height of the tallest bar in the daily output chart.
pub const CHART_HEIGHT_PX: f32 = 140.0;

const BAR_COLOUR: Color = Color::srgb(0.16, 0.45, 0.85);
const LABEL_COLOUR: Color = Color::srgb(0.42, 0.47, 0.54);
const VALUE_COLOUR: Color = Color::srgb(0.12, 0.16, 0.22);

/// Request to open the inverter dialog, fired by clicking the inverter unit
/// or the header's system information button.
#[derive(Event)]
pub struct OpenInverterDialog;

#[derive(Resource, Default)]
pub struct InverterDialogState {
    pub open: bool,
}

#[derive(Component)]
pub struct DialogRoot;

#[derive(Component)]
pub struct CloseButton;

/// Bar height for one sample, scaled against the curve's peak.
pub fn bar_height_px(power_kw: f32, peak_kw: f32) -> f32 {
    if peak_kw <= 0.0 {
        return 0.0;
    }
    (power_kw / peak_kw).clamp(0.0, 1.0) * CHART_HEIGHT_PX
}

pub fn open_dialog_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    hover: Res<HoverTarget>,
    triggers: Query<(), With<DialogTrigger>>,
    mut open_events: EventWriter<OpenInverterDialog>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if let Some(entity) = hover.entity {
        if triggers.contains(entity) {
            open_events.write(OpenInverterDialog);
        }
    }
}

pub fn handle_open_events(
    mut open_events: EventReader<OpenInverterDialog>,
    mut state: ResMut<InverterDialogState>,
) {
    if open_events.is_empty() {
        return;
    }
    open_events.clear();

    // Redundant opens must not rebuild an already visible dialog.
    if !state.open {
        state.open = true;
    }
}

pub fn close_dialog(
    keys: Res<ButtonInput<KeyCode>>,
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<CloseButton>),
    >,
    mut state: ResMut<InverterDialogState>,
) {
    let mut requested = keys.just_pressed(KeyCode::Escape);
    for (interaction, mut background) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                background.0 = Color::srgba(0.0, 0.0, 0.0, 0.18);
                requested = true;
            }
            Interaction::Hovered => background.0 = Color::srgba(0.0, 0.0, 0.0, 0.10),
            Interaction::None => background.0 = Color::NONE,
        }
    }

    if requested && state.open {
        state.open = false;
    }
}

/// Rebuilds the dialog UI whenever its open flag flips. The manifest resource
/// may be absent for a frame or two after entering Running; the built-in
/// figures cover that window.
pub fn apply_dialog_state(
    state: Res<InverterDialogState>,
    manifest: Option<Res<SystemManifest>>,
    dialogs: Query<Entity, With<DialogRoot>>,
    mut commands: Commands,
) {
    if !state.is_changed() {
        return;
    }

    for dialog in &dialogs {
        commands.entity(dialog).despawn();
    }

    if state.open {
        let fallback;
        let manifest = match manifest.as_ref() {
            Some(manifest) => manifest.as_ref(),
            None => {
                fallback = SystemManifest::default();
                &fallback
            }
        };
        spawn_dialog(&mut commands, manifest);
    }
}

fn spawn_dialog(commands: &mut Commands, manifest: &SystemManifest) {
    commands
        .spawn((
            DialogRoot,
            Name::new("InverterDialog"),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.45)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            GlobalZIndex(30),
        ))
        .with_children(|scrim| {
            scrim
                .spawn((
                    Name::new("DialogCard"),
                    BackgroundColor(Color::srgb(0.98, 0.98, 0.99)),
                    Node {
                        width: Val::Px(480.0),
                        padding: UiRect::all(Val::Px(20.0)),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        row_gap: Val::Px(14.0),
                        ..default()
                    },
                    BorderRadius::all(Val::Px(12.0)),
                ))
                .with_children(|card| {
                    spawn_title_row(card, manifest);
                    spawn_readouts(card, manifest);
                    spawn_chart(card, manifest);
                    spawn_specs(card, manifest);
                    spawn_network_row(card, manifest);
                });
        });
}

fn spawn_title_row(card: &mut ChildSpawnerCommands, manifest: &SystemManifest) {
    card.spawn(Node {
        width: Val::Percent(100.0),
        display: Display::Flex,
        justify_content: JustifyContent::SpaceBetween,
        align_items: AlignItems::Center,
        ..default()
    })
    .with_children(|row| {
        row.spawn((
            Text::new(format!("{} Inverter", manifest.site_name)),
            TextFont { font_size: 20.0, ..default() },
            TextColor(VALUE_COLOUR),
        ));
        row.spawn((
            CloseButton,
            Button,
            Name::new("CloseButton"),
            BackgroundColor(Color::NONE),
            Node {
                width: Val::Px(28.0),
                height: Val::Px(28.0),
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new("\u{2715}"),
                TextFont { font_size: 16.0, ..default() },
                TextColor(LABEL_COLOUR),
            ));
        });
    });
}

fn spawn_readouts(card: &mut ChildSpawnerCommands, manifest: &SystemManifest) {
    card.spawn(Node {
        width: Val::Percent(100.0),
        display: Display::Flex,
        flex_wrap: FlexWrap::Wrap,
        column_gap: Val::Px(10.0),
        row_gap: Val::Px(10.0),
        ..default()
    })
    .with_children(|grid| {
        let readout = &manifest.readout;
        spawn_readout_card(grid, "Current Output", &format!("{:.1} kW", readout.output_kw));
        spawn_readout_card(grid, "Energy Today", &format!("{:.1} kWh", readout.daily_yield_kwh));
        spawn_readout_card(grid, "Status", &readout.status);
        spawn_readout_card(grid, "Temperature", &format!("{:.0}\u{b0}C", readout.temperature_c));
    });
}

fn spawn_readout_card(grid: &mut ChildSpawnerCommands, label: &str, value: &str) {
    grid.spawn((
        BackgroundColor(Color::srgb(0.93, 0.95, 0.98)),
        Node {
            width: Val::Px(106.0),
            padding: UiRect::all(Val::Px(10.0)),
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(4.0),
            ..default()
        },
        BorderRadius::all(Val::Px(8.0)),
    ))
    .with_children(|cell| {
        cell.spawn((
            Text::new(label),
            TextFont { font_size: 11.0, ..default() },
            TextColor(LABEL_COLOUR),
        ));
        cell.spawn((
            Text::new(value),
            TextFont { font_size: 16.0, ..default() },
            TextColor(VALUE_COLOUR),
        ));
    });
}

fn spawn_chart(card: &mut ChildSpawnerCommands, manifest: &SystemManifest) {
    card.spawn((
        Text::new("Daily Power Output"),
        TextFont { font_size: 13.0, ..default() },
        TextColor(LABEL_COLOUR),
    ));

    let peak = manifest.peak_power_kw();
    card.spawn(Node {
        width: Val::Percent(100.0),
        height: Val::Px(CHART_HEIGHT_PX + 22.0),
        display: Display::Flex,
        align_items: AlignItems::FlexEnd,
        justify_content: JustifyContent::SpaceBetween,
        column_gap: Val::Px(6.0),
        ..default()
    })
    .with_children(|chart| {
        for sample in &manifest.power_curve {
            chart
                .spawn(Node {
                    display: Display::Flex,
                    flex_direction: FlexDirection::Column,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(4.0),
                    ..default()
                })
                .with_children(|column| {
                    column.spawn((
                        BackgroundColor(BAR_COLOUR),
                        Node {
                            width: Val::Px(22.0),
                            height: Val::Px(bar_height_px(sample.power_kw, peak)),
                            ..default()
                        },
                        BorderRadius::all(Val::Px(3.0)),
                    ));
                    column.spawn((
                        Text::new(sample.time.clone()),
                        TextFont { font_size: 10.0, ..default() },
                        TextColor(LABEL_COLOUR),
                    ));
                });
        }
    });
}

fn spawn_specs(card: &mut ChildSpawnerCommands, manifest: &SystemManifest) {
    card.spawn((
        BackgroundColor(Color::srgb(0.93, 0.95, 0.98)),
        Node {
            width: Val::Percent(100.0),
            padding: UiRect::all(Val::Px(12.0)),
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        },
        BorderRadius::all(Val::Px(8.0)),
    ))
    .with_children(|block| {
        let spec = &manifest.spec;
        spawn_spec_row(block, "Model", &spec.model);
        spawn_spec_row(block, "Rated Power", &format!("{:.0} kW", spec.rated_power_kw));
        spawn_spec_row(block, "Efficiency", &format!("{:.1}%", spec.efficiency_percent));
        spawn_spec_row(block, "Installed", &spec.installed);
    });
}

fn spawn_spec_row(block: &mut ChildSpawnerCommands, label: &str, value: &str) {
    block
        .spawn(Node {
            width: Val::Percent(100.0),
            display: Display::Flex,
            justify_content: JustifyContent::SpaceBetween,
            ..default()
        })
        .with_children(|row| {
            row.spawn((
                Text::new(label),
                TextFont { font_size: 12.0, ..default() },
                TextColor(LABEL_COLOUR),
            ));
            row.spawn((
                Text::new(value),
                TextFont { font_size: 12.0, ..default() },
                TextColor(VALUE_COLOUR),
            ));
        });
}

fn spawn_network_row(card: &mut ChildSpawnerCommands, manifest: &SystemManifest) {
    let (status, colour) = if manifest.network.connected {
        ("Connected", Color::srgb(0.13, 0.62, 0.33))
    } else {
        ("Offline", Color::srgb(0.73, 0.11, 0.11))
    };

    card.spawn(Node {
        width: Val::Percent(100.0),
        display: Display::Flex,
        justify_content: JustifyContent::SpaceBetween,
        ..default()
    })
    .with_children(|row| {
        row.spawn((
            Text::new(status),
            TextFont { font_size: 12.0, ..default() },
            TextColor(colour),
        ));
        row.spawn((
            Text::new(manifest.network.address.clone()),
            TextFont { font_size: 12.0, ..default() },
            TextColor(LABEL_COLOUR),
        ));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_against_the_peak() {
        assert_eq!(bar_height_px(3.8, 3.8), CHART_HEIGHT_PX);
        assert_eq!(bar_height_px(1.9, 3.8), CHART_HEIGHT_PX / 2.0);
        assert_eq!(bar_height_px(0.0, 3.8), 0.0);
    }

    #[test]
    fn degenerate_curves_produce_no_bars() {
        assert_eq!(bar_height_px(2.0, 0.0), 0.0);
        assert_eq!(bar_height_px(2.0, -1.0), 0.0);
    }

    #[test]
    fn bars_never_overshoot_the_chart() {
        assert_eq!(bar_height_px(9.9, 3.8), CHART_HEIGHT_PX);
    }
}
