use bevy::prelude::*;

use crate::engine::loading::progress::{LoadingProgress, OverlayTimers};

/// One-way viewer lifecycle. There is no path back to an earlier state.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Intro,
    Running,
}

/// Explicit intro dismissal, fired by the Explore button or a keyboard press.
#[derive(Event)]
pub struct DismissIntro;

/// Loading ends only once the manifest has resolved and the minimum display
/// time has elapsed, whichever comes later.
pub fn loading_complete(progress: &LoadingProgress) -> bool {
    progress.manifest_resolved && progress.minimum_elapsed
}

pub fn transition_from_loading(
    progress: Res<LoadingProgress>,
    timers: Res<OverlayTimers>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if !loading_complete(&progress) {
        return;
    }

    // The intro clock runs from startup. A load slower than the intro window
    // skips the intro card entirely.
    if timers.intro_auto_dismiss.finished() {
        info!("→ Loading finished after the intro window, entering Running state");
        next_state.set(AppState::Running);
    } else {
        info!("→ Loading finished, showing intro");
        next_state.set(AppState::Intro);
    }
}

pub fn transition_from_intro(
    timers: Res<OverlayTimers>,
    mut dismissals: EventReader<DismissIntro>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let dismissed = !dismissals.is_empty();
    dismissals.clear();

    if dismissed || timers.intro_auto_dismiss.finished() {
        info!("→ Intro dismissed, entering Running state");
        next_state.set(AppState::Running);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_waits_for_both_conditions() {
        let mut progress = LoadingProgress::default();
        assert!(!loading_complete(&progress));

        progress.manifest_resolved = true;
        assert!(!loading_complete(&progress));

        progress.minimum_elapsed = true;
        assert!(loading_complete(&progress));

        let manifest_pending = LoadingProgress {
            manifest_resolved: false,
            minimum_elapsed: true,
            ..default()
        };
        assert!(!loading_complete(&manifest_pending));
    }
}
