use bevy::prelude::*;
use bevy::render::alpha::AlphaMode;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;

use crate::engine::interaction::hover::{HoverSpin, Hoverable};

pub const VILLA_LABEL: &str = "Modern villa with energy-efficient design and solar integration";

#[derive(Component)]
pub struct VillaRoot;

/// Shared material handles for the villa shell.
struct VillaMaterials {
    foundation: Handle<StandardMaterial>,
    wall: Handle<StandardMaterial>,
    roof: Handle<StandardMaterial>,
    slab: Handle<StandardMaterial>,
    path: Handle<StandardMaterial>,
    frame: Handle<StandardMaterial>,
    glass: Handle<StandardMaterial>,
    door_frame: Handle<StandardMaterial>,
    door: Handle<StandardMaterial>,
    handle: Handle<StandardMaterial>,
    support: Handle<StandardMaterial>,
    garage_frame: Handle<StandardMaterial>,
    garage_panel: Handle<StandardMaterial>,
    railing: Handle<StandardMaterial>,
    bush: Handle<StandardMaterial>,
}

fn create_materials(materials: &mut Assets<StandardMaterial>) -> VillaMaterials {
    VillaMaterials {
        foundation: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xe0, 0xe0, 0xe0),
            perceptual_roughness: 0.8,
            ..default()
        }),
        wall: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 0.2,
            metallic: 0.1,
            ..default()
        }),
        roof: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x33, 0x33, 0x33),
            perceptual_roughness: 0.6,
            metallic: 0.4,
            ..default()
        }),
        slab: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xd4, 0xd4, 0xd4),
            perceptual_roughness: 0.5,
            metallic: 0.1,
            ..default()
        }),
        path: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xd4, 0xd4, 0xd4),
            perceptual_roughness: 0.7,
            ..default()
        }),
        frame: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x44, 0x44, 0x44),
            perceptual_roughness: 0.5,
            metallic: 0.5,
            ..default()
        }),
        glass: materials.add(StandardMaterial {
            base_color: Color::srgba_u8(0x2a, 0x6a, 0xa0, 179),
            perceptual_roughness: 0.0,
            metallic: 0.8,
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        door_frame: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x33, 0x33, 0x33),
            perceptual_roughness: 0.5,
            metallic: 0.2,
            ..default()
        }),
        door: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x66, 0x66, 0x66),
            perceptual_roughness: 0.4,
            metallic: 0.6,
            ..default()
        }),
        handle: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xaa, 0xaa, 0xaa),
            metallic: 0.9,
            perceptual_roughness: 0.1,
            ..default()
        }),
        support: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0xaa, 0xaa, 0xaa),
            metallic: 0.7,
            perceptual_roughness: 0.3,
            ..default()
        }),
        garage_frame: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x55, 0x55, 0x55),
            perceptual_roughness: 0.5,
            metallic: 0.3,
            ..default()
        }),
        garage_panel: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x77, 0x77, 0x77),
            perceptual_roughness: 0.4,
            metallic: 0.5,
            ..default()
        }),
        railing: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            metallic: 0.5,
            perceptual_roughness: 0.5,
            ..default()
        }),
        bush: materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x3a, 0x70, 0x41),
            perceptual_roughness: 0.8,
            ..default()
        }),
    }
}

pub fn spawn_villa(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let mats = create_materials(materials);

    commands
        .spawn((
            Name::new("Villa"),
            VillaRoot,
            Hoverable::new(VILLA_LABEL, Vec3::new(16.4, 5.6, 12.4))
                .with_centre(Vec3::new(0.0, 2.3, 0.0)),
            HoverSpin { speed: 0.05 },
            Transform::from_xyz(0.0, -1.0, 0.0),
            Visibility::default(),
        ))
        .with_children(|villa| {
            // Foundation platform
            spawn_box(villa, meshes, &mats.foundation, Vec3::new(0.0, -0.05, 0.0), Vec3::new(16.0, 0.1, 12.0));

            // Building masses: two-storey west wing, tall centre, garage
            spawn_box(villa, meshes, &mats.wall, Vec3::new(-3.0, 1.5, 0.0), Vec3::new(8.0, 3.0, 8.0));
            spawn_box(villa, meshes, &mats.wall, Vec3::new(0.0, 2.0, 0.0), Vec3::new(3.0, 4.0, 6.0));
            spawn_box(villa, meshes, &mats.wall, Vec3::new(5.0, 1.0, 1.0), Vec3::new(6.0, 2.0, 5.0));

            // Pitched roofs over the wing and the centre section
            spawn_pitched_roof(villa, meshes, &mats.roof, Vec3::new(-3.0, 3.05, 0.0), 8.4, 1.6, 8.4);
            spawn_pitched_roof(villa, meshes, &mats.roof, Vec3::new(0.0, 4.05, 0.0), 3.4, 1.2, 6.4);

            // Flat garage roof doubling as a terrace
            spawn_box(villa, meshes, &mats.slab, Vec3::new(5.0, 2.05, 1.0), Vec3::new(6.2, 0.1, 5.2));

            // Terrace railing
            spawn_railing(villa, meshes, &mats.railing, Vec3::new(5.0, 2.3, -1.1), Quat::IDENTITY, 6.0);
            let side = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
            spawn_railing(villa, meshes, &mats.railing, Vec3::new(2.0, 2.3, 1.0), side, 4.0);
            spawn_railing(villa, meshes, &mats.railing, Vec3::new(8.0, 2.3, 1.0), side, 4.0);

            // Windows: wing front, ground and first floor
            let large = Vec2::new(1.6, 1.6);
            let small = Vec2::new(1.6, 1.2);
            let tall = Vec2::new(1.6, 1.8);
            spawn_window(villa, meshes, &mats, Vec3::new(-5.0, 1.0, 4.01), Quat::IDENTITY, large);
            spawn_window(villa, meshes, &mats, Vec3::new(-2.0, 1.0, 4.01), Quat::IDENTITY, large);
            spawn_window(villa, meshes, &mats, Vec3::new(-5.0, 2.5, 4.01), Quat::IDENTITY, small);
            spawn_window(villa, meshes, &mats, Vec3::new(-2.0, 2.5, 4.01), Quat::IDENTITY, small);

            // Centre section
            spawn_window(villa, meshes, &mats, Vec3::new(0.0, 1.0, 3.01), Quat::IDENTITY, tall);
            spawn_window(villa, meshes, &mats, Vec3::new(0.0, 3.0, 3.01), Quat::IDENTITY, tall);

            // West side
            spawn_window(villa, meshes, &mats, Vec3::new(-7.01, 1.0, 0.0), side, large);
            spawn_window(villa, meshes, &mats, Vec3::new(-7.01, 2.5, 0.0), side, small);
            spawn_window(villa, meshes, &mats, Vec3::new(-7.01, 1.0, 2.0), side, large);
            spawn_window(villa, meshes, &mats, Vec3::new(-7.01, 2.5, 2.0), side, small);

            // Back side
            spawn_window(villa, meshes, &mats, Vec3::new(-5.0, 1.0, -4.01), Quat::IDENTITY, large);
            spawn_window(villa, meshes, &mats, Vec3::new(-2.0, 1.0, -4.01), Quat::IDENTITY, large);
            spawn_window(villa, meshes, &mats, Vec3::new(-5.0, 2.5, -4.01), Quat::IDENTITY, small);
            spawn_window(villa, meshes, &mats, Vec3::new(-2.0, 2.5, -4.01), Quat::IDENTITY, small);

            spawn_garage_door(villa, meshes, &mats, Vec3::new(5.0, 0.8, 3.51));
            spawn_entrance_door(villa, meshes, &mats, Vec3::new(0.0, 0.0, 3.01));

            // Entrance path
            spawn_box(villa, meshes, &mats.path, Vec3::new(0.0, -0.5, 4.5), Vec3::new(2.0, 0.1, 3.0));

            // Garden
            spawn_bush(villa, meshes, &mats.bush, Vec3::new(-6.0, -0.5, 4.5), 0.5);
            spawn_bush(villa, meshes, &mats.bush, Vec3::new(-3.0, -0.5, 4.5), 0.5);
            spawn_bush(villa, meshes, &mats.bush, Vec3::new(3.0, -0.5, 4.5), 0.4);
            spawn_bush(villa, meshes, &mats.bush, Vec3::new(6.0, -0.5, 4.5), 0.6);
            spawn_bush(villa, meshes, &mats.bush, Vec3::new(-7.0, -0.5, 0.0), 0.5);
            spawn_bush(villa, meshes, &mats.bush, Vec3::new(-7.0, -0.5, -4.0), 0.5);
        });
}

fn spawn_box(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    position: Vec3,
    size: Vec3,
) {
    parent.spawn((
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(material.clone()),
        Transform::from_translation(position),
    ));
}

/// Gabled roof: a thin base slab with a triangular prism on top.
fn spawn_pitched_roof(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    position: Vec3,
    width: f32,
    height: f32,
    depth: f32,
) {
    parent
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|roof| {
            spawn_box(roof, meshes, material, Vec3::ZERO, Vec3::new(width, 0.1, depth));
            roof.spawn((
                Mesh3d(meshes.add(pitched_roof_mesh(width, height, depth))),
                MeshMaterial3d(material.clone()),
                Transform::from_xyz(0.0, 0.05, 0.0),
            ));
        });
}

/// Triangles of a gabled prism with its ridge along z: two slopes and two
/// gable ends, open underneath. Counter-clockwise winding, outward faces.
pub fn roof_prism_triangles(width: f32, height: f32, depth: f32) -> Vec<[Vec3; 3]> {
    let (hw, hd) = (width * 0.5, depth * 0.5);
    let a = Vec3::new(-hw, 0.0, hd);
    let b = Vec3::new(hw, 0.0, hd);
    let c = Vec3::new(hw, 0.0, -hd);
    let d = Vec3::new(-hw, 0.0, -hd);
    let ridge_front = Vec3::new(0.0, height, hd);
    let ridge_back = Vec3::new(0.0, height, -hd);

    vec![
        // Front and back gables
        [a, b, ridge_front],
        [c, d, ridge_back],
        // East slope
        [b, c, ridge_back],
        [b, ridge_back, ridge_front],
        // West slope
        [d, a, ridge_front],
        [d, ridge_front, ridge_back],
    ]
}

fn pitched_roof_mesh(width: f32, height: f32, depth: f32) -> Mesh {
    let triangles = roof_prism_triangles(width, height, depth);

    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(triangles.len() * 3);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(triangles.len() * 3);
    for [p0, p1, p2] in triangles {
        let normal = (p1 - p0).cross(p2 - p0).normalize().to_array();
        for p in [p0, p1, p2] {
            positions.push(p.to_array());
            normals.push(normal);
        }
    }
    let uvs = vec![[0.0_f32, 0.0]; positions.len()];

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
}

fn spawn_window(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    mats: &VillaMaterials,
    position: Vec3,
    rotation: Quat,
    size: Vec2,
) {
    parent
        .spawn((
            Transform::from_translation(position).with_rotation(rotation),
            Visibility::default(),
        ))
        .with_children(|window| {
            // Frame
            spawn_box(window, meshes, &mats.frame, Vec3::ZERO, Vec3::new(size.x + 0.1, size.y + 0.1, 0.08));
            // Glass
            spawn_box(window, meshes, &mats.glass, Vec3::new(0.0, 0.0, 0.03), Vec3::new(size.x - 0.1, size.y - 0.1, 0.02));
            // Vertical divider
            spawn_box(window, meshes, &mats.frame, Vec3::new(0.0, 0.0, 0.05), Vec3::new(0.05, size.y - 0.1, 0.04));
            // Horizontal blind slats
            for index in 0..6 {
                spawn_box(
                    window,
                    meshes,
                    &mats.frame,
                    Vec3::new(0.0, blind_slat_y(size.y, index), 0.05),
                    Vec3::new(size.x - 0.2, 0.05, 0.04),
                );
            }
        });
}

pub fn blind_slat_y(window_height: f32, index: usize) -> f32 {
    window_height / 2.0 - 0.2 - index as f32 * (window_height - 0.2) / 5.0
}

fn spawn_entrance_door(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    mats: &VillaMaterials,
    position: Vec3,
) {
    parent
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|door| {
            spawn_box(door, meshes, &mats.door_frame, Vec3::ZERO, Vec3::new(1.8, 2.5, 0.3));
            spawn_box(door, meshes, &mats.door, Vec3::new(0.0, 0.0, 0.18), Vec3::new(1.5, 2.3, 0.05));
            // Handle
            spawn_box(door, meshes, &mats.handle, Vec3::new(0.6, 0.0, 0.23), Vec3::new(0.1, 0.5, 0.05));
            // Canopy over the door with two supports
            spawn_box(door, meshes, &mats.roof, Vec3::new(0.0, 1.4, 0.5), Vec3::new(2.2, 0.1, 1.0));
            spawn_box(door, meshes, &mats.support, Vec3::new(-0.9, 1.15, 0.8), Vec3::new(0.05, 0.5, 0.05));
            spawn_box(door, meshes, &mats.support, Vec3::new(0.9, 1.15, 0.8), Vec3::new(0.05, 0.5, 0.05));
        });
}

fn spawn_garage_door(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    mats: &VillaMaterials,
    position: Vec3,
) {
    parent
        .spawn((Transform::from_translation(position), Visibility::default()))
        .with_children(|door| {
            spawn_box(door, meshes, &mats.garage_frame, Vec3::ZERO, Vec3::new(4.5, 2.1, 0.2));
            for col in 0..3 {
                for row in 0..4 {
                    spawn_box(
                        door,
                        meshes,
                        &mats.garage_panel,
                        Vec3::new((col as f32 - 1.0) * 1.4, (row as f32 - 1.5) * 0.5, 0.11),
                        Vec3::new(1.3, 0.45, 0.05),
                    );
                }
            }
        });
}

fn spawn_railing(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    position: Vec3,
    rotation: Quat,
    width: f32,
) {
    parent
        .spawn((
            Transform::from_translation(position).with_rotation(rotation),
            Visibility::default(),
        ))
        .with_children(|railing| {
            spawn_box(railing, meshes, material, Vec3::new(0.0, 0.3, 0.0), Vec3::new(width, 0.05, 0.05));
            spawn_box(railing, meshes, material, Vec3::new(0.0, 0.05, 0.0), Vec3::new(width, 0.05, 0.05));
            for x in railing_post_xs(width) {
                spawn_box(railing, meshes, material, Vec3::new(x, 0.15, 0.0), Vec3::new(0.02, 0.6, 0.02));
            }
        });
}

/// Post spacing: four posts per metre of railing.
pub fn railing_post_xs(width: f32) -> Vec<f32> {
    let count = (width.ceil() as usize) * 4;
    (0..count)
        .map(|i| -width / 2.0 + 0.2 + i as f32 * width / count as f32)
        .collect()
}

fn spawn_bush(
    parent: &mut ChildSpawnerCommands,
    meshes: &mut Assets<Mesh>,
    material: &Handle<StandardMaterial>,
    position: Vec3,
    scale: f32,
) {
    parent
        .spawn((
            Transform::from_translation(position).with_scale(Vec3::splat(scale)),
            Visibility::default(),
        ))
        .with_children(|bush| {
            spawn_box(bush, meshes, material, Vec3::ZERO, Vec3::new(1.2, 1.0, 1.2));
            spawn_box(bush, meshes, material, Vec3::new(0.0, 0.6, 0.0), Vec3::new(0.9, 0.4, 0.9));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roof_prism_has_two_slopes_and_two_gables() {
        let triangles = roof_prism_triangles(8.4, 1.6, 8.4);
        assert_eq!(triangles.len(), 6);

        let ridge_points: Vec<Vec3> = triangles
            .iter()
            .flatten()
            .copied()
            .filter(|p| p.y > 0.0)
            .collect();
        assert!(ridge_points.iter().all(|p| (p.y - 1.6).abs() < 1e-6));
        assert!(ridge_points.iter().all(|p| p.x == 0.0));
    }

    #[test]
    fn roof_prism_normals_point_outward() {
        for [p0, p1, p2] in roof_prism_triangles(4.0, 1.0, 6.0) {
            let normal = (p1 - p0).cross(p2 - p0).normalize();
            let centroid = (p0 + p1 + p2) / 3.0;
            // Outward means away from the prism's interior axis point.
            let outward = centroid - Vec3::new(0.0, 0.3, 0.0);
            assert!(normal.dot(outward) > 0.0);
        }
    }

    #[test]
    fn blind_slats_descend_inside_the_window() {
        let height = 1.6;
        let ys: Vec<f32> = (0..6).map(|i| blind_slat_y(height, i)).collect();
        for pair in ys.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!(ys.iter().all(|y| y.abs() <= height / 2.0));
    }

    #[test]
    fn railing_posts_stay_within_the_run() {
        let xs = railing_post_xs(6.0);
        assert_eq!(xs.len(), 24);
        assert!(xs.iter().all(|x| x.abs() <= 3.0));

        let xs = railing_post_xs(4.0);
        assert_eq!(xs.len(), 16);
    }
}
