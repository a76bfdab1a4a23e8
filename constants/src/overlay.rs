//! Overlay timing shared by the loading screen, intro card and their tests.

/// Minimum time the loading screen stays visible, even when the system
/// manifest resolves immediately.
pub const LOADING_MIN_SECS: f32 = 2.0;

/// The intro auto-dismiss clock starts at application startup, not when the
/// intro becomes visible. A slow load can therefore swallow the intro
/// entirely, matching the viewer's original behaviour.
pub const INTRO_AUTO_DISMISS_SECS: f32 = 5.0;

/// Cadence of the cycling dots on the loading screen.
pub const LOADING_DOT_PERIOD_SECS: f32 = 0.4;
