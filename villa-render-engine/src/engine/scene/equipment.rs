use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::engine::interaction::hover::{HoverScale, HoverSpin, Hoverable};

/// The four equipment units of the installation.
#[derive(Component, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Equipment {
    Inverter,
    Meter,
    Storage,
    Controller,
}

impl Equipment {
    pub fn label(self) -> &'static str {
        match self {
            Equipment::Inverter => {
                "Inverter: Converts DC power from solar panels to AC power for home use"
            }
            Equipment::Meter => {
                "Smart Meter: Monitors power consumption and solar energy production"
            }
            Equipment::Storage => {
                "Energy Storage System: Stores excess solar power for use when the sun isn't shining"
            }
            Equipment::Controller => {
                "Off-Grid Controller: Manages power flow between solar panels, storage, and home appliances"
            }
        }
    }
}

/// An emissive detail on an equipment unit. Stores the owning group entity so
/// hover feedback can brighten it without walking the hierarchy.
#[derive(Component)]
pub struct IndicatorLight {
    pub group: Entity,
    pub colour: Color,
    /// Emissive intensity at rest.
    pub base: f32,
    /// Emissive intensity while the group is hovered.
    pub boost: f32,
}

/// Clicking the unit carrying this marker opens the inverter detail dialog.
#[derive(Component)]
pub struct DialogTrigger;

pub fn spawn_equipment(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    spawn_inverter(commands, meshes, materials, Vec3::new(2.0, 0.0, 2.0));
    spawn_meter(commands, meshes, materials, Vec3::new(-2.0, 0.0, 2.0));
    spawn_storage(commands, meshes, materials, Vec3::new(-2.0, 0.0, -2.0));
    spawn_controller(commands, meshes, materials, Vec3::new(2.0, 0.0, -2.0));
}

fn unit_root(
    commands: &mut Commands,
    unit: Equipment,
    name: &'static str,
    position: Vec3,
    bounds: Vec3,
) -> Entity {
    commands
        .spawn((
            Name::new(name),
            unit,
            Hoverable::new(unit.label(), bounds).with_tier(1),
            HoverScale,
            HoverSpin { speed: 0.5 },
            Transform::from_translation(position),
            Visibility::default(),
        ))
        .id()
}

fn spawn_inverter(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let root = unit_root(
        commands,
        Equipment::Inverter,
        "Inverter",
        position,
        Vec3::new(0.7, 1.0, 0.5),
    );
    commands.entity(root).insert(DialogTrigger);
    commands.entity(root).with_children(|unit| {
        spawn_body(unit, meshes, materials, Vec3::new(0.5, 0.8, 0.3), 0x4a5568);
        spawn_plate(
            unit,
            meshes,
            materials,
            Vec3::new(0.0, 0.1, 0.16),
            Vec2::new(0.3, 0.2),
            0x202020,
        );
        // Status spheres: green running light and yellow warning light
        spawn_sphere_light(unit, meshes, materials, root, Vec3::new(0.0, 0.25, 0.16), 0.05, 0x22c55e);
        spawn_sphere_light(unit, meshes, materials, root, Vec3::new(0.1, 0.25, 0.16), 0.05, 0xeab308);
    });
}

fn spawn_meter(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let root = unit_root(
        commands,
        Equipment::Meter,
        "Smart meter",
        position,
        Vec3::new(0.6, 0.8, 0.4),
    );
    commands.entity(root).with_children(|unit| {
        spawn_body(unit, meshes, materials, Vec3::new(0.4, 0.6, 0.2), 0x2d3748);
        spawn_screen_light(
            unit,
            meshes,
            materials,
            root,
            Vec3::new(0.0, 0.0, 0.11),
            Vec2::new(0.25, 0.25),
            0x0c4a6e,
        );
        spawn_sphere_light(unit, meshes, materials, root, Vec3::new(0.0, 0.2, 0.11), 0.04, 0x3b82f6);
    });
}

fn spawn_storage(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let root = unit_root(
        commands,
        Equipment::Storage,
        "Energy storage",
        position,
        Vec3::new(1.0, 1.4, 0.7),
    );
    commands.entity(root).with_children(|unit| {
        spawn_body(unit, meshes, materials, Vec3::new(0.8, 1.2, 0.5), 0x1a365d);
        spawn_plate(
            unit,
            meshes,
            materials,
            Vec3::new(0.0, 0.0, 0.26),
            Vec2::new(0.4, 0.7),
            0x1a202c,
        );
        // Charge gauge, three quarters full
        let bar = meshes.add(Cuboid::new(0.35, 0.1, 0.01));
        let colours: [u32; 4] = [0x22c55e, 0x22c55e, 0xeab308, 0x94a3b8];
        for (index, colour) in colours.into_iter().enumerate() {
            let colour = colour_from_hex(colour);
            unit.spawn((
                IndicatorLight {
                    group: root,
                    colour,
                    base: 0.2,
                    boost: 1.0,
                },
                Mesh3d(bar.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: colour,
                    emissive: colour.to_linear() * 0.2,
                    ..default()
                })),
                Transform::from_xyz(0.0, -0.15 + index as f32 * 0.1, 0.27),
            ));
        }
    });
}

fn spawn_controller(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
) {
    let root = unit_root(
        commands,
        Equipment::Controller,
        "Off-grid controller",
        position,
        Vec3::new(0.8, 1.0, 0.5),
    );
    commands.entity(root).with_children(|unit| {
        spawn_body(unit, meshes, materials, Vec3::new(0.6, 0.8, 0.3), 0x2b6cb0);
        spawn_screen_light(
            unit,
            meshes,
            materials,
            root,
            Vec3::new(0.0, 0.1, 0.16),
            Vec2::new(0.4, 0.3),
            0x0c4a6e,
        );
        // Button row under the display
        let button = meshes.add(Cylinder::new(0.08, 0.02));
        for (index, colour) in [0xb91c1c_u32, 0x0369a1, 0x15803d].into_iter().enumerate() {
            unit.spawn((
                Mesh3d(button.clone()),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: colour_from_hex(colour),
                    perceptual_roughness: 0.4,
                    ..default()
                })),
                Transform::from_xyz(-0.15 + index as f32 * 0.15, -0.2, 0.16)
                    .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
            ));
        }
    });
}

fn colour_from_hex(hex: u32) -> Color {
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn spawn_body(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    size: Vec3,
    colour: u32,
) {
    parent.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour_from_hex(colour),
            perceptual_roughness: 0.4,
            metallic: 0.3,
            ..default()
        })),
        Transform::default(),
    ));
}

fn spawn_plate(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    position: Vec3,
    size: Vec2,
    colour: u32,
) {
    parent.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, 0.01))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour_from_hex(colour),
            perceptual_roughness: 0.6,
            ..default()
        })),
        Transform::from_translation(position),
    ));
}

fn spawn_sphere_light(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    group: Entity,
    position: Vec3,
    radius: f32,
    colour: u32,
) {
    let colour = colour_from_hex(colour);
    parent.spawn((
        IndicatorLight {
            group,
            colour,
            base: 0.5,
            boost: 2.0,
        },
        Mesh3d(meshes.add(Sphere::new(radius))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour,
            emissive: colour.to_linear() * 0.5,
            ..default()
        })),
        Transform::from_translation(position),
    ));
}

fn spawn_screen_light(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    group: Entity,
    position: Vec3,
    size: Vec2,
    colour: u32,
) {
    let colour = colour_from_hex(colour);
    parent.spawn((
        IndicatorLight {
            group,
            colour,
            base: 0.2,
            boost: 0.5,
        },
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, 0.01))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: colour,
            emissive: colour.to_linear() * 0.2,
            ..default()
        })),
        Transform::from_translation(position),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_has_a_distinct_label() {
        let units = [
            Equipment::Inverter,
            Equipment::Meter,
            Equipment::Storage,
            Equipment::Controller,
        ];
        for (i, a) in units.iter().enumerate() {
            for b in &units[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn labels_lead_with_the_unit_name() {
        assert!(Equipment::Inverter.label().starts_with("Inverter:"));
        assert!(Equipment::Meter.label().starts_with("Smart Meter:"));
        assert!(Equipment::Storage.label().starts_with("Energy Storage System:"));
        assert!(Equipment::Controller.label().starts_with("Off-Grid Controller:"));
    }

    #[test]
    fn hex_colours_unpack_to_srgb_channels() {
        assert_eq!(colour_from_hex(0xff0000), Color::srgb_u8(0xff, 0, 0));
        assert_eq!(colour_from_hex(0x2c5282), Color::srgb_u8(0x2c, 0x52, 0x82));
    }
}
