//! 2D overlay surfaces drawn on top of the 3D scene.
//!
//! Covers the whole overlay lifecycle: the loading screen shown while the
//! manifest resolves, the intro card with its explore button, the persistent
//! header and tooltip HUD, and the inverter detail dialog. Each surface is
//! spawned and torn down on the matching state transition.

/// Header badges, hover tooltip and control instructions.
pub mod hud;

/// Intro card with the explore button and keyboard dismissal.
pub mod intro;

/// Inverter detail dialog fed from the system manifest.
pub mod inverter_dialog;

/// Full-screen loading overlay with animated dots.
pub mod loading_screen;

use bevy::prelude::*;

use crate::engine::core::app_state::AppState;
use inverter_dialog::{InverterDialogState, OpenInverterDialog};

pub struct OverlayPlugin;

impl Plugin for OverlayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InverterDialogState>()
            .add_event::<OpenInverterDialog>()
            .add_systems(OnEnter(AppState::Loading), loading_screen::spawn_loading_screen)
            .add_systems(OnExit(AppState::Loading), loading_screen::despawn_loading_screen)
            .add_systems(OnEnter(AppState::Intro), intro::spawn_intro_overlay)
            .add_systems(OnExit(AppState::Intro), intro::despawn_intro_overlay)
            .add_systems(OnEnter(AppState::Running), hud::spawn_hud)
            .add_systems(
                Update,
                loading_screen::animate_loading_dots.run_if(in_state(AppState::Loading)),
            )
            .add_systems(
                Update,
                (intro::explore_button_interaction, intro::keyboard_dismiss)
                    .run_if(in_state(AppState::Intro)),
            )
            .add_systems(
                Update,
                (
                    hud::update_tooltip,
                    hud::system_info_button_interaction,
                    inverter_dialog::open_dialog_on_click,
                    inverter_dialog::handle_open_events,
                    inverter_dialog::close_dialog,
                    inverter_dialog::apply_dialog_state,
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}
