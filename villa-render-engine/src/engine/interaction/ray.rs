use bevy::prelude::*;

/// Ray against the oriented bounding box of a hoverable group. The box is
/// centred at `centre` in the group's local space with full extents `size`.
pub fn ray_hits_obb(
    origin: Vec3,
    dir: Vec3,
    xf: &GlobalTransform,
    centre: Vec3,
    size: Vec3,
) -> Option<f32> {
    let inv = xf.compute_matrix().inverse();
    let o_local = inv.transform_point3(origin) - centre;
    let d_local = inv.transform_vector3(dir);
    let he = size * 0.5;
    ray_aabb_hit_t(o_local, d_local, -he, he)
}

// Slab-method ray–AABB intersection, returns Some(t) or None
pub fn ray_aabb_hit_t(ray_origin: Vec3, ray_direction: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let (mut t_enter, mut t_exit) = (f32::NEG_INFINITY, f32::INFINITY);

    for axis in 0..3 {
        let o = ray_origin[axis];
        let d = ray_direction[axis];

        // Parallel to this slab pair: inside or never
        if d.abs() < f32::EPSILON {
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / d;
        let (mut t0, mut t1) = ((min[axis] - o) * inv, (max[axis] - o) * inv);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_enter = t_enter.max(t0);
        t_exit = t_exit.min(t1);
        if t_enter > t_exit {
            return None;
        }
    }

    if t_exit < 0.0 {
        return None;
    }
    Some(if t_enter >= 0.0 { t_enter } else { t_exit })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_hit_returns_entry_distance() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!((t.unwrap() - 4.0).abs() < 1e-5);
    }

    #[test]
    fn miss_returns_none() {
        let t = ray_aabb_hit_t(
            Vec3::new(5.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn box_behind_ray_returns_none() {
        let t = ray_aabb_hit_t(
            Vec3::new(0.0, 0.0, 5.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!(t.is_none());
    }

    #[test]
    fn origin_inside_box_hits_exit_face() {
        let t = ray_aabb_hit_t(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::splat(-1.0),
            Vec3::splat(1.0),
        );
        assert!((t.unwrap() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn obb_respects_local_centre_offset() {
        let xf = GlobalTransform::from(Transform::from_xyz(0.0, -1.0, 0.0));
        // Box centred two units up in local space: world span y in [0.5, 1.5].
        let hit = ray_hits_obb(
            Vec3::new(0.0, 1.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            &xf,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::ONE,
        );
        assert!(hit.is_some());

        let miss = ray_hits_obb(
            Vec3::new(0.0, -1.0, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            &xf,
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::ONE,
        );
        assert!(miss.is_none());
    }
}
