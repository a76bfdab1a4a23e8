use bevy::prelude::*;

use super::hover::{HoverScale, HoverSpin, Hovered};
use crate::engine::scene::equipment::IndicatorLight;
use crate::engine::scene::solar_panels::SolarPanel;

pub const HOVER_SCALE: f32 = 1.05;

/// Emissive tint shared by every panel while any panel is hovered.
const PANEL_GLOW: Color = Color::srgb(0.063, 0.251, 0.376);

pub fn apply_hover_scale(mut groups: Query<(&mut Transform, Has<Hovered>), With<HoverScale>>) {
    for (mut transform, hovered) in &mut groups {
        let target = if hovered { HOVER_SCALE } else { 1.0 };
        if transform.scale.x != target {
            transform.scale = Vec3::splat(target);
        }
    }
}

pub fn spin_hovered(
    time: Res<Time>,
    mut groups: Query<(&mut Transform, &HoverSpin), With<Hovered>>,
) {
    for (mut transform, spin) in &mut groups {
        transform.rotate_y(spin.speed * time.delta_secs());
    }
}

/// Brightens indicator lights on the equipment group the cursor entered and
/// restores them when it leaves. Each light records its owning group, so no
/// hierarchy walk is needed here.
pub fn update_indicator_lights(
    entered: Query<Entity, Added<Hovered>>,
    mut left: RemovedComponents<Hovered>,
    lights: Query<(&IndicatorLight, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let left: Vec<Entity> = left.read().collect();
    if entered.is_empty() && left.is_empty() {
        return;
    }

    for (light, material_handle) in &lights {
        let boosted = if entered.iter().any(|group| group == light.group) {
            true
        } else if left.contains(&light.group) {
            false
        } else {
            continue;
        };

        if let Some(material) = materials.get_mut(&material_handle.0) {
            let intensity = if boosted { light.boost } else { light.base };
            material.emissive = light.colour.to_linear() * intensity;
        }
    }
}

/// Tints the whole array while any single panel is hovered, mirroring the
/// group-level glow of the original scene.
pub fn update_panel_glow(
    hovered_panels: Query<(), (With<SolarPanel>, With<Hovered>)>,
    panels: Query<&MeshMaterial3d<StandardMaterial>, With<SolarPanel>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut glowing: Local<bool>,
) {
    let any_hovered = !hovered_panels.is_empty();
    if any_hovered == *glowing {
        return;
    }
    *glowing = any_hovered;

    for material_handle in &panels {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.emissive = if any_hovered {
                PANEL_GLOW.to_linear()
            } else {
                LinearRgba::BLACK
            };
        }
    }
}
