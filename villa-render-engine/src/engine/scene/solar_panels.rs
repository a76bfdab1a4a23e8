use bevy::prelude::*;
use rand::Rng;

use crate::engine::interaction::hover::Hoverable;

pub const PANEL_ROWS: usize = 3;
pub const PANEL_COLS: usize = 4;
const PANEL_SPACING: f32 = 0.8;

/// One cell of the rooftop array.
#[derive(Component)]
pub struct SolarPanel {
    pub row: usize,
    pub col: usize,
    pub efficiency_percent: u8,
}

/// Root of the whole array, positioned on the wing's roof.
#[derive(Component)]
pub struct PanelArray;

/// Local offsets of the panel cells, centred on the array root.
pub fn panel_offsets() -> Vec<Vec3> {
    let mut offsets = Vec::with_capacity(PANEL_ROWS * PANEL_COLS);
    for row in 0..PANEL_ROWS {
        for col in 0..PANEL_COLS {
            offsets.push(Vec3::new(
                (col as f32 - 1.5) * PANEL_SPACING,
                0.05,
                (row as f32 - 1.0) * PANEL_SPACING,
            ));
        }
    }
    offsets
}

/// Per-panel conversion efficiency, sampled once at spawn.
pub fn random_efficiency(rng: &mut impl Rng) -> u8 {
    rng.gen_range(90..=99)
}

pub fn spawn_solar_panels(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    let panel_mesh = meshes.add(Cuboid::new(0.7, 0.05, 0.7));
    let mut rng = rand::thread_rng();

    commands
        .spawn((
            Name::new("Solar array"),
            PanelArray,
            Transform::from_xyz(0.0, 2.2, 0.0),
            Visibility::default(),
        ))
        .with_children(|array| {
            for (index, offset) in panel_offsets().into_iter().enumerate() {
                let row = index / PANEL_COLS;
                let col = index % PANEL_COLS;
                let efficiency = random_efficiency(&mut rng);

                // Each panel carries its own material so hover glow only
                // brightens the cell under the cursor.
                let material = materials.add(StandardMaterial {
                    base_color: Color::srgb_u8(0x2c, 0x52, 0x82),
                    metallic: 0.8,
                    perceptual_roughness: 0.2,
                    ..default()
                });

                array.spawn((
                    SolarPanel {
                        row,
                        col,
                        efficiency_percent: efficiency,
                    },
                    Hoverable::new(
                        format!(
                            "Solar panel {}-{}: {}% efficiency",
                            row + 1,
                            col + 1,
                            efficiency
                        ),
                        Vec3::new(0.7, 0.2, 0.7),
                    )
                    .with_tier(1),
                    Mesh3d(panel_mesh.clone()),
                    MeshMaterial3d(material),
                    Transform::from_translation(offset),
                ));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn array_holds_twelve_panels() {
        let offsets = panel_offsets();
        assert_eq!(offsets.len(), 12);
        assert_eq!(offsets[0], Vec3::new(-1.2, 0.05, -0.8));
    }

    #[test]
    fn array_is_centred_on_its_root() {
        let sum: Vec3 = panel_offsets().into_iter().sum();
        assert!(sum.x.abs() < 1e-5);
        assert!(sum.z.abs() < 1e-5);
    }

    #[test]
    fn efficiency_stays_in_advertised_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let efficiency = random_efficiency(&mut rng);
            assert!((90..=99).contains(&efficiency));
        }
    }
}
