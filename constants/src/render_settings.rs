use bevy::prelude::*;

/// Orbit camera tuning shared between the controller and its tests.
#[derive(Resource, Clone, Copy)]
pub struct OrbitSettings {
    pub min_distance: f32,
    pub max_distance: f32,
    /// Elevation above the horizon, radians. Zero keeps the camera level
    /// with the focus point, the maximum looks steeply down.
    pub min_pitch: f32,
    pub max_pitch: f32,
    pub drag_sensitivity: f32,
    /// Fraction of the current distance removed per scroll line.
    pub zoom_step: f32,
    pub smoothing: f32,
}

pub const ORBIT_SETTINGS: OrbitSettings = OrbitSettings {
    min_distance: 5.0,
    max_distance: 15.0,
    min_pitch: 0.0,
    max_pitch: std::f32::consts::FRAC_PI_3,
    drag_sensitivity: 0.005,
    zoom_step: 0.1,
    smoothing: 12.0,
};

pub const CAMERA_FOV_DEGREES: f32 = 40.0;

pub const DIRECTIONAL_LIGHT_LUX: f32 = 15_000.0;
pub const AMBIENT_BRIGHTNESS: f32 = 400.0;
