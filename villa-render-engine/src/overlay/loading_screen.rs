use bevy::prelude::*;
use constants::overlay::LOADING_DOT_PERIOD_SECS;

#[derive(Component)]
pub struct LoadingScreenRoot;

/// The trailing dots of the loading subtitle, cycled while loading.
#[derive(Component)]
pub struct LoadingDots;

pub fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            LoadingScreenRoot,
            Name::new("LoadingScreen"),
            BackgroundColor(Color::srgb(0.09, 0.12, 0.16)),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            GlobalZIndex(20),
        ))
        .with_children(|screen| {
            screen.spawn((
                Text::new("Loading Solar Villa"),
                TextFont { font_size: 28.0, ..default() },
                TextColor(Color::WHITE),
            ));
            screen
                .spawn(Node {
                    display: Display::Flex,
                    ..default()
                })
                .with_children(|row| {
                    row.spawn((
                        Text::new("Preparing 3D visualization"),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(Color::srgb(0.65, 0.72, 0.80)),
                    ));
                    row.spawn((
                        LoadingDots,
                        Text::new("..."),
                        TextFont { font_size: 16.0, ..default() },
                        TextColor(Color::srgb(0.65, 0.72, 0.80)),
                    ));
                });
        });
}

pub fn despawn_loading_screen(
    mut commands: Commands,
    screens: Query<Entity, With<LoadingScreenRoot>>,
) {
    for screen in &screens {
        commands.entity(screen).despawn();
    }
}

pub fn animate_loading_dots(
    time: Res<Time>,
    mut dots: Query<&mut Text, With<LoadingDots>>,
    mut clock: Local<Option<Timer>>,
    mut phase: Local<usize>,
) {
    let clock = clock.get_or_insert_with(|| {
        Timer::from_seconds(LOADING_DOT_PERIOD_SECS, TimerMode::Repeating)
    });
    if !clock.tick(time.delta()).just_finished() {
        return;
    }

    *phase = (*phase + 1) % 4;
    for mut text in &mut dots {
        text.0 = ".".repeat(*phase);
    }
}
