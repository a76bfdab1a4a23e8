//! Exercises the loading, intro and running lifecycle on a headless app
//! with manually stepped time.

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::{TimeUpdateStrategy, Virtual};

use villa_render_engine::engine::core::app_state::{
    AppState, DismissIntro, transition_from_intro, transition_from_loading,
};
use villa_render_engine::engine::loading::progress::{
    LoadingProgress, OverlayTimers, tick_overlay_timers,
};

const STEP: Duration = Duration::from_millis(500);

fn build_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_plugins(StatesPlugin)
        .init_state::<AppState>()
        .add_event::<DismissIntro>()
        .init_resource::<LoadingProgress>()
        .init_resource::<OverlayTimers>()
        .insert_resource(TimeUpdateStrategy::ManualDuration(STEP))
        .add_systems(
            Update,
            (
                tick_overlay_timers,
                transition_from_loading.run_if(in_state(AppState::Loading)),
                transition_from_intro.run_if(in_state(AppState::Intro)),
            )
                .chain(),
        );
    // Virtual time clamps each delta to max_delta (250ms by default), which
    // would halve the manual 500ms steps; lift the clamp so every update
    // advances by the full step.
    app.world_mut()
        .resource_mut::<Time<Virtual>>()
        .set_max_delta(Duration::MAX);
    app
}

fn state(app: &App) -> AppState {
    *app.world().resource::<State<AppState>>().get()
}

fn resolve_manifest(app: &mut App) {
    app.world_mut()
        .resource_mut::<LoadingProgress>()
        .manifest_resolved = true;
}

fn advance(app: &mut App, steps: usize) {
    for _ in 0..steps {
        app.update();
    }
}

#[test]
fn loading_holds_until_the_manifest_resolves() {
    let mut app = build_app();

    // Far past the two second minimum, but nothing resolved yet.
    advance(&mut app, 10);
    assert_eq!(state(&app), AppState::Loading);

    resolve_manifest(&mut app);
    advance(&mut app, 2);
    assert_eq!(state(&app), AppState::Running);
}

#[test]
fn loading_holds_for_the_minimum_display_time() {
    let mut app = build_app();
    resolve_manifest(&mut app);

    // Under two seconds of simulated time: still loading.
    advance(&mut app, 3);
    assert_eq!(state(&app), AppState::Loading);
}

#[test]
fn intro_follows_a_prompt_load() {
    let mut app = build_app();
    resolve_manifest(&mut app);

    // Past the minimum but well inside the intro window.
    advance(&mut app, 6);
    assert_eq!(state(&app), AppState::Intro);
}

#[test]
fn intro_auto_dismisses_into_running() {
    let mut app = build_app();
    resolve_manifest(&mut app);

    advance(&mut app, 6);
    assert_eq!(state(&app), AppState::Intro);

    // Cross the five second auto-dismiss boundary.
    advance(&mut app, 8);
    assert_eq!(state(&app), AppState::Running);
}

#[test]
fn explicit_dismissal_enters_running_immediately() {
    let mut app = build_app();
    resolve_manifest(&mut app);

    advance(&mut app, 6);
    assert_eq!(state(&app), AppState::Intro);

    app.world_mut().send_event(DismissIntro);
    advance(&mut app, 2);
    assert_eq!(state(&app), AppState::Running);
}

#[test]
fn slow_load_skips_the_intro() {
    let mut app = build_app();

    // Manifest arrives only after the intro window has already closed.
    advance(&mut app, 12);
    assert_eq!(state(&app), AppState::Loading);

    resolve_manifest(&mut app);
    advance(&mut app, 2);
    assert_eq!(state(&app), AppState::Running);
}
