use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::ray::ray_hits_obb;

/// Two hits closer together than this are treated as a tie, which stays on
/// the previously hovered group.
pub const HOVER_TIE_EPS: f32 = 1e-4;

/// A group the cursor can point at. The bounding box covers the whole group
/// rather than individual child meshes.
#[derive(Component)]
pub struct Hoverable {
    pub label: String,
    /// Box centre in the group's local space.
    pub centre: Vec3,
    /// Full extents of the box.
    pub size: Vec3,
    /// Resolution tier. The equipment and panels sit inside the villa's
    /// bounding volume, so they carry a higher tier than the villa backdrop
    /// and win whenever both are under the cursor.
    pub tier: i8,
}

impl Hoverable {
    pub fn new(label: impl Into<String>, size: Vec3) -> Self {
        Self {
            label: label.into(),
            centre: Vec3::ZERO,
            size,
            tier: 0,
        }
    }

    pub fn with_centre(mut self, centre: Vec3) -> Self {
        self.centre = centre;
        self
    }

    pub fn with_tier(mut self, tier: i8) -> Self {
        self.tier = tier;
        self
    }
}

/// Marker inserted on the hoverable group currently under the cursor.
#[derive(Component)]
pub struct Hovered;

/// Groups that rotate slowly while hovered.
#[derive(Component)]
pub struct HoverSpin {
    pub speed: f32,
}

/// Groups that scale up slightly while hovered (the equipment boxes).
#[derive(Component)]
pub struct HoverScale;

/// The single active tooltip. Empty before any pointer interaction and
/// whenever the cursor points at nothing hoverable.
#[derive(Resource, Default)]
pub struct HoverTarget {
    pub entity: Option<Entity>,
    pub label: Option<String>,
}

impl HoverTarget {
    pub fn is_empty(&self) -> bool {
        self.entity.is_none()
    }
}

/// Resolution policy for overlapping hover regions: the highest tier wins,
/// then the nearest positive hit within that tier. Ties keep the previous
/// target so a cursor resting on a shared face does not flicker.
pub fn resolve_hover<I: Copy + PartialEq>(
    hits: &[(I, f32, i8)],
    previous: Option<I>,
) -> Option<I> {
    let mut best: Option<(I, f32, i8)> = None;
    for &(id, t, tier) in hits {
        if t <= 0.0 {
            continue;
        }
        let better = match best {
            None => true,
            Some((_, best_t, best_tier)) => {
                tier > best_tier || (tier == best_tier && t < best_t)
            }
        };
        if better {
            best = Some((id, t, tier));
        }
    }

    let (id, best_t, best_tier) = best?;
    if let Some(prev) = previous {
        let prev_ties = hits.iter().any(|&(i, t, tier)| {
            i == prev && t > 0.0 && tier == best_tier && (t - best_t).abs() <= HOVER_TIE_EPS
        });
        if prev_ties {
            return Some(prev);
        }
    }
    Some(id)
}

pub fn update_hover_target(
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    hoverables: Query<(Entity, &GlobalTransform, &Hoverable)>,
    mut hover: ResMut<HoverTarget>,
    mut commands: Commands,
) {
    let previous = hover.entity;

    let mut next = None;
    if let (Ok(window), Ok((cam_xf, camera))) = (windows.single(), cameras.single()) {
        if let Some(cursor_pos) = window.cursor_position() {
            if let Ok(cursor_ray) = camera.viewport_to_world(cam_xf, cursor_pos) {
                let origin = cursor_ray.origin;
                let dir = cursor_ray.direction.as_vec3();
                let hits: Vec<(Entity, f32, i8)> = hoverables
                    .iter()
                    .filter_map(|(entity, xf, hoverable)| {
                        ray_hits_obb(origin, dir, xf, hoverable.centre, hoverable.size)
                            .map(|t| (entity, t, hoverable.tier))
                    })
                    .collect();
                next = resolve_hover(&hits, previous);
            }
        }
    }

    if next == previous {
        return;
    }

    if let Some(prev) = previous {
        commands.entity(prev).remove::<Hovered>();
    }

    match next {
        Some(entity) => {
            // The hit came from this query, so the lookup cannot fail.
            if let Ok((_, _, hoverable)) = hoverables.get(entity) {
                hover.entity = Some(entity);
                hover.label = Some(hoverable.label.clone());
                commands.entity(entity).insert(Hovered);
            }
        }
        None => {
            hover.entity = None;
            hover.label = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hits_resolve_to_none() {
        assert_eq!(resolve_hover::<u32>(&[], None), None);
        assert_eq!(resolve_hover::<u32>(&[], Some(7)), None);
    }

    #[test]
    fn nearest_hit_wins_within_a_tier() {
        let hits = [(1u32, 4.0, 0), (2, 2.5, 0), (3, 9.0, 0)];
        assert_eq!(resolve_hover(&hits, None), Some(2));
    }

    #[test]
    fn higher_tier_beats_nearer_backdrop() {
        // The villa shell is hit first, but the equipment inside outranks it.
        let hits = [(1u32, 1.0, 0), (2, 6.0, 1)];
        assert_eq!(resolve_hover(&hits, None), Some(2));
    }

    #[test]
    fn hits_behind_the_ray_are_ignored() {
        let hits = [(1u32, -3.0, 1), (2, 6.0, 0)];
        assert_eq!(resolve_hover(&hits, None), Some(2));
        assert_eq!(resolve_hover(&[(1u32, -3.0, 0)], None), None);
    }

    #[test]
    fn tie_stays_on_previous_target() {
        let hits = [(1u32, 2.0, 0), (2, 2.0, 0)];
        assert_eq!(resolve_hover(&hits, Some(2)), Some(2));
        assert_eq!(resolve_hover(&hits, Some(1)), Some(1));
        // Without history the first nearest hit wins.
        assert_eq!(resolve_hover(&hits, None), Some(1));
    }

    #[test]
    fn previous_target_does_not_win_from_behind() {
        let hits = [(1u32, 2.0, 0), (2, 5.0, 0)];
        assert_eq!(resolve_hover(&hits, Some(2)), Some(1));
    }
}
