use bevy::prelude::*;
use constants::overlay::{INTRO_AUTO_DISMISS_SECS, LOADING_MIN_SECS};

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    /// Set when the manifest failed to load and built-in defaults were used.
    pub manifest_failed: bool,
    pub minimum_elapsed: bool,
}

/// One-shot clocks behind the loading screen and the intro card. Both start
/// at application startup.
#[derive(Resource)]
pub struct OverlayTimers {
    pub minimum_loading: Timer,
    pub intro_auto_dismiss: Timer,
}

impl Default for OverlayTimers {
    fn default() -> Self {
        Self {
            minimum_loading: Timer::from_seconds(LOADING_MIN_SECS, TimerMode::Once),
            intro_auto_dismiss: Timer::from_seconds(INTRO_AUTO_DISMISS_SECS, TimerMode::Once),
        }
    }
}

pub fn tick_overlay_timers(
    time: Res<Time>,
    mut timers: ResMut<OverlayTimers>,
    mut progress: ResMut<LoadingProgress>,
) {
    timers.minimum_loading.tick(time.delta());
    timers.intro_auto_dismiss.tick(time.delta());

    if timers.minimum_loading.finished() && !progress.minimum_elapsed {
        progress.minimum_elapsed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timers_match_configured_delays() {
        let timers = OverlayTimers::default();
        assert_eq!(timers.minimum_loading.duration(), Duration::from_secs(2));
        assert_eq!(timers.intro_auto_dismiss.duration(), Duration::from_secs(5));
    }

    #[test]
    fn minimum_loading_does_not_finish_early() {
        let mut timers = OverlayTimers::default();
        timers.minimum_loading.tick(Duration::from_millis(1999));
        assert!(!timers.minimum_loading.finished());
        timers.minimum_loading.tick(Duration::from_millis(1));
        assert!(timers.minimum_loading.finished());
    }
}
