use bevy::asset::AssetMetaCheck;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, CAMERA_FOV_DEGREES, DIRECTIONAL_LIGHT_LUX, ORBIT_SETTINGS,
};

use crate::engine::assets::system_manifest::SystemManifest;
use crate::engine::camera::orbit_camera::{OrbitCamera, camera_controller};
use crate::engine::core::app_state::{
    AppState, DismissIntro, transition_from_intro, transition_from_loading,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::feedback::{
    apply_hover_scale, spin_hovered, update_indicator_lights, update_panel_glow,
};
use crate::engine::interaction::hover::{HoverTarget, update_hover_target};
use crate::engine::loading::manifest_loader::{ManifestLoader, resolve_manifest, start_loading};
use crate::engine::loading::progress::{LoadingProgress, OverlayTimers, tick_overlay_timers};
use crate::engine::scene::setup_scene;
use crate::overlay::OverlayPlugin;

/// Builds the viewer application with all plugins, resources and systems.
pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(JsonAssetPlugin::<SystemManifest>::new(&["json"]))
        .add_plugins(OverlayPlugin)
        .init_state::<AppState>()
        .insert_resource(ClearColor(Color::srgb(0.93, 0.96, 0.99)))
        .insert_resource(AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        })
        .insert_resource(ORBIT_SETTINGS)
        .init_resource::<OrbitCamera>()
        .init_resource::<HoverTarget>()
        .init_resource::<LoadingProgress>()
        .init_resource::<OverlayTimers>()
        .init_resource::<ManifestLoader>()
        .add_event::<DismissIntro>()
        .add_systems(
            Startup,
            (setup_camera, spawn_lighting, setup_scene, start_loading),
        )
        .add_systems(Update, tick_overlay_timers)
        .add_systems(
            Update,
            (resolve_manifest, transition_from_loading)
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            transition_from_intro.run_if(in_state(AppState::Intro)),
        )
        .add_systems(
            Update,
            (
                camera_controller,
                update_hover_target,
                apply_hover_scale,
                spin_hovered,
                update_indicator_lights,
                update_panel_glow,
            )
                .run_if(in_state(AppState::Running)),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(create_window_config()),
            ..default()
        })
        .set(AssetPlugin {
            meta_check: AssetMetaCheck::Never,
            ..default()
        })
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_xyz(8.0, 5.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Warm key light with shadows plus the ambient fill set above.
fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_LUX,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
