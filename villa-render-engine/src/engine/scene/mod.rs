//! Static villa scene content.
//!
//! Everything here is hand-placed geometry spawned once at startup: the
//! ground plane, the villa shell with its roofs, windows, doors and garden,
//! the rooftop solar array, and the four labelled equipment units.

/// Four labelled equipment units with indicator lights and hover strings.
pub mod equipment;

/// Ground plane under the villa plot.
pub mod grounds;

/// Rooftop solar array with per-panel efficiency figures.
pub mod solar_panels;

/// Villa shell: wings, pitched roofs, windows, doors, railings, garden.
pub mod villa;

use bevy::prelude::*;

pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    grounds::spawn_ground(&mut commands, &mut meshes, &mut materials);
    villa::spawn_villa(&mut commands, &mut meshes, &mut materials);
    solar_panels::spawn_solar_panels(&mut commands, &mut meshes, &mut materials);
    equipment::spawn_equipment(&mut commands, &mut meshes, &mut materials);
}
