use bevy::input::mouse::MouseScrollUnit;
use bevy::{
    input::mouse::{MouseMotion, MouseWheel},
    prelude::*,
};
use constants::render_settings::OrbitSettings;

#[derive(Resource)]
pub struct OrbitCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    /// Elevation above the horizon, radians.
    pub pitch: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    /// Matches the initial pose: eye at (8, 5, 8) looking at the origin.
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            yaw: std::f32::consts::FRAC_PI_4,
            pitch: 0.417,
            distance: 12.37,
        }
    }
}

impl OrbitCamera {
    pub fn clamp_to(&mut self, settings: &OrbitSettings) {
        self.pitch = self.pitch.clamp(settings.min_pitch, settings.max_pitch);
        self.distance = self
            .distance
            .clamp(settings.min_distance, settings.max_distance);
    }

    /// Eye position on the orbit sphere around the focus point.
    pub fn eye_position(&self) -> Vec3 {
        let offset = Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        ) * self.distance;
        self.focus_point + offset
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut orbit: ResMut<OrbitCamera>,
    settings: Res<OrbitSettings>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Left-drag orbits
    if mouse_button.pressed(MouseButton::Left) && mouse_delta != Vec2::ZERO {
        orbit.yaw -= mouse_delta.x * settings.drag_sensitivity;
        orbit.pitch += mouse_delta.y * settings.drag_sensitivity;
    }

    // Mouse wheel scroll accumulation (pixel and line scroll)
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        let zoom = orbit.distance * settings.zoom_step;
        orbit.distance -= scroll_accum * zoom;
    }

    orbit.clamp_to(&settings);

    let target_pos = orbit.eye_position();
    let target_rot = Transform::from_translation(target_pos)
        .looking_at(orbit.focus_point, Vec3::Y)
        .rotation;

    let lerp_speed = (settings.smoothing * time.delta_secs()).min(1.0);
    camera_transform.translation = camera_transform.translation.lerp(target_pos, lerp_speed);
    camera_transform.rotation = camera_transform.rotation.slerp(target_rot, lerp_speed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::render_settings::ORBIT_SETTINGS;

    #[test]
    fn clamp_keeps_polar_and_distance_limits() {
        let mut orbit = OrbitCamera {
            pitch: 1.5,
            distance: 40.0,
            ..default()
        };
        orbit.clamp_to(&ORBIT_SETTINGS);
        assert_eq!(orbit.pitch, ORBIT_SETTINGS.max_pitch);
        assert_eq!(orbit.distance, ORBIT_SETTINGS.max_distance);

        orbit.pitch = -1.0;
        orbit.distance = 0.5;
        orbit.clamp_to(&ORBIT_SETTINGS);
        assert_eq!(orbit.pitch, ORBIT_SETTINGS.min_pitch);
        assert_eq!(orbit.distance, ORBIT_SETTINGS.min_distance);
    }

    #[test]
    fn default_pose_matches_reference_eye() {
        let orbit = OrbitCamera::default();
        let eye = orbit.eye_position();
        assert!((eye - Vec3::new(8.0, 5.0, 8.0)).length() < 0.05);
    }

    #[test]
    fn level_pitch_sits_on_the_horizon() {
        let orbit = OrbitCamera {
            yaw: 0.0,
            pitch: 0.0,
            distance: 10.0,
            focus_point: Vec3::ZERO,
        };
        let eye = orbit.eye_position();
        assert!((eye - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    }
}
