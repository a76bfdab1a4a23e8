use bevy::prelude::*;

use crate::engine::interaction::hover::HoverTarget;
use super::inverter_dialog::OpenInverterDialog;

const BADGE_BG: Color = Color::srgba(1.0, 1.0, 1.0, 0.88);
const BADGE_TEXT: Color = Color::srgb(0.15, 0.20, 0.27);
const BUTTON_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.88);
const BUTTON_HOVER: Color = Color::srgba(0.92, 0.95, 1.0, 0.95);
const BUTTON_PRESSED: Color = Color::srgba(0.82, 0.88, 0.98, 0.95);

#[derive(Component)]
pub struct HudRoot;

#[derive(Component)]
pub struct SystemInfoButton;

#[derive(Component)]
pub struct TooltipRoot;

#[derive(Component)]
pub struct TooltipText;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            HudRoot,
            Name::new("Hud"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                ..default()
            },
            GlobalZIndex(10),
        ))
        .with_children(|hud| {
            spawn_header(hud);
            spawn_tooltip(hud);
            spawn_instructions(hud);
        });
}

/// Badge column in the top-left corner: scene title, the dialog shortcut
/// and a components badge.
fn spawn_header(hud: &mut ChildSpawnerCommands) {
    hud.spawn((
        Name::new("Header"),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexStart,
            row_gap: Val::Px(8.0),
            ..default()
        },
    ))
    .with_children(|header| {
        spawn_badge(header, "Solar Villa Visualization", 18.0);
        header
            .spawn((
                SystemInfoButton,
                Button,
                Name::new("SystemInfoButton"),
                BackgroundColor(BUTTON_IDLE),
                Node {
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                    display: Display::Flex,
                    align_items: AlignItems::Center,
                    ..default()
                },
                BorderRadius::all(Val::Px(6.0)),
            ))
            .with_children(|button| {
                button.spawn((
                    Text::new("System Information"),
                    TextFont { font_size: 14.0, ..default() },
                    TextColor(BADGE_TEXT),
                ));
            });
        spawn_badge(header, "Components", 14.0);
    });
}

fn spawn_badge(parent: &mut ChildSpawnerCommands, label: &str, font_size: f32) {
    parent
        .spawn((
            BackgroundColor(BADGE_BG),
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                display: Display::Flex,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderRadius::all(Val::Px(6.0)),
        ))
        .with_children(|badge| {
            badge.spawn((
                Text::new(label),
                TextFont { font_size, ..default() },
                TextColor(BADGE_TEXT),
            ));
        });
}

/// Single tooltip pill above the instructions. Hidden until the cursor rests
/// on a hoverable group.
fn spawn_tooltip(hud: &mut ChildSpawnerCommands) {
    hud.spawn((
        TooltipRoot,
        Name::new("Tooltip"),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(64.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            display: Display::None,
            justify_content: JustifyContent::Center,
            ..default()
        },
    ))
    .with_children(|row| {
        row.spawn((
            BackgroundColor(Color::srgba(0.08, 0.10, 0.14, 0.85)),
            Node {
                padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
                display: Display::Flex,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderRadius::all(Val::Px(8.0)),
        ))
        .with_children(|pill| {
            pill.spawn((
                TooltipText,
                Text::new(""),
                TextFont { font_size: 14.0, ..default() },
                TextColor(Color::WHITE),
            ));
        });
    });
}

fn spawn_instructions(hud: &mut ChildSpawnerCommands) {
    hud.spawn((
        Name::new("Instructions"),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(20.0),
            left: Val::Px(0.0),
            width: Val::Percent(100.0),
            display: Display::Flex,
            justify_content: JustifyContent::Center,
            ..default()
        },
    ))
    .with_children(|row| {
        row.spawn((
            BackgroundColor(Color::srgba(0.08, 0.10, 0.14, 0.65)),
            Node {
                padding: UiRect::axes(Val::Px(14.0), Val::Px(7.0)),
                display: Display::Flex,
                align_items: AlignItems::Center,
                ..default()
            },
            BorderRadius::all(Val::Px(8.0)),
        ))
        .with_children(|pill| {
            pill.spawn((
                Text::new("Click and drag to rotate \u{2022} Scroll to zoom"),
                TextFont { font_size: 13.0, ..default() },
                TextColor(Color::srgba(1.0, 1.0, 1.0, 0.85)),
            ));
        });
    });
}

pub fn update_tooltip(
    hover: Res<HoverTarget>,
    mut pills: Query<&mut Node, With<TooltipRoot>>,
    mut labels: Query<&mut Text, With<TooltipText>>,
) {
    if !hover.is_changed() {
        return;
    }

    let (Ok(mut pill), Ok(mut label)) = (pills.single_mut(), labels.single_mut()) else {
        return;
    };

    match &hover.label {
        Some(text) => {
            label.0 = text.clone();
            pill.display = Display::Flex;
        }
        None => {
            pill.display = Display::None;
        }
    }
}

pub fn system_info_button_interaction(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<SystemInfoButton>),
    >,
    mut open_events: EventWriter<OpenInverterDialog>,
) {
    for (interaction, mut background) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                background.0 = BUTTON_PRESSED;
                open_events.write(OpenInverterDialog);
            }
            Interaction::Hovered => background.0 = BUTTON_HOVER,
            Interaction::None => background.0 = BUTTON_IDLE,
        }
    }
}
