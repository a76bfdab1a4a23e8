use bevy::prelude::*;

use crate::engine::core::app_state::DismissIntro;

const BUTTON_IDLE: Color = Color::srgb(0.16, 0.45, 0.85);
const BUTTON_HOVER: Color = Color::srgb(0.22, 0.52, 0.92);
const BUTTON_PRESSED: Color = Color::srgb(0.12, 0.38, 0.75);

#[derive(Component)]
pub struct IntroRoot;

#[derive(Component)]
pub struct ExploreButton;

pub fn spawn_intro_overlay(mut commands: Commands) {
    commands
        .spawn((
            IntroRoot,
            Name::new("IntroOverlay"),
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.55)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            GlobalZIndex(15),
        ))
        .with_children(|scrim| {
            scrim
                .spawn((
                    Name::new("IntroCard"),
                    BackgroundColor(Color::srgb(0.97, 0.98, 0.99)),
                    Node {
                        width: Val::Px(420.0),
                        padding: UiRect::all(Val::Px(28.0)),
                        display: Display::Flex,
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        row_gap: Val::Px(16.0),
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.15)),
                    BorderRadius::all(Val::Px(12.0)),
                ))
                .with_children(|card| {
                    card.spawn((
                        Text::new("Interactive Solar Villa"),
                        TextFont { font_size: 26.0, ..default() },
                        TextColor(Color::srgb(0.12, 0.16, 0.22)),
                    ));
                    card.spawn((
                        Text::new(
                            "Drag to orbit the villa and scroll to zoom. Hover over \
                             the solar panels and equipment for details, and open the \
                             inverter for live system readouts.",
                        ),
                        TextFont { font_size: 15.0, ..default() },
                        TextColor(Color::srgb(0.35, 0.40, 0.47)),
                    ));
                    card.spawn((
                        ExploreButton,
                        Button,
                        Name::new("ExploreButton"),
                        BackgroundColor(BUTTON_IDLE),
                        Node {
                            padding: UiRect::axes(Val::Px(28.0), Val::Px(10.0)),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                        BorderRadius::all(Val::Px(8.0)),
                    ))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("Explore Now"),
                            TextFont { font_size: 16.0, ..default() },
                            TextColor(Color::WHITE),
                        ));
                    });
                });
        });
}

pub fn despawn_intro_overlay(mut commands: Commands, overlays: Query<Entity, With<IntroRoot>>) {
    for overlay in &overlays {
        commands.entity(overlay).despawn();
    }
}

pub fn explore_button_interaction(
    mut buttons: Query<
        (&Interaction, &mut BackgroundColor),
        (Changed<Interaction>, With<ExploreButton>),
    >,
    mut dismissals: EventWriter<DismissIntro>,
) {
    for (interaction, mut background) in &mut buttons {
        match interaction {
            Interaction::Pressed => {
                background.0 = BUTTON_PRESSED;
                dismissals.write(DismissIntro);
            }
            Interaction::Hovered => background.0 = BUTTON_HOVER,
            Interaction::None => background.0 = BUTTON_IDLE,
        }
    }
}

pub fn keyboard_dismiss(
    keys: Res<ButtonInput<KeyCode>>,
    mut dismissals: EventWriter<DismissIntro>,
) {
    if keys.just_pressed(KeyCode::Space)
        || keys.just_pressed(KeyCode::Enter)
        || keys.just_pressed(KeyCode::Escape)
    {
        dismissals.write(DismissIntro);
    }
}
