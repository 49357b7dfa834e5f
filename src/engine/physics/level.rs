// Static level geometry

use super::body::KinematicBody;
use super::layers::CollisionLayer;
use super::probe::SurfaceProbe;
use glam::Vec2;
use parry2d::math::{Isometry, Real};
use parry2d::query;
use parry2d::shape::{Ball, SharedShape};

/// How far below a surface top the feet may sink before snapping stops
/// applying. Must exceed the distance covered at max fall speed in one fixed
/// step, or fast falls tunnel through.
const MAX_SNAP_DEPTH: f32 = 0.4;

struct Surface {
    layer: CollisionLayer,
    shape: SharedShape,
    pose: Isometry<Real>,
}

/// Static world geometry sorted into collision layers.
///
/// Answers the character's circle-overlap probes and settles falling bodies
/// onto ground slabs. All shapes are fixed at build time.
#[derive(Default)]
pub struct LevelGeometry {
    surfaces: Vec<Surface>,
}

impl LevelGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axis-aligned slab (half extents around a center) to a layer.
    pub fn add_slab(&mut self, layer: CollisionLayer, center: Vec2, half_extents: Vec2) {
        self.surfaces.push(Surface {
            layer,
            shape: SharedShape::cuboid(half_extents.x, half_extents.y),
            pose: Isometry::translation(center.x, center.y),
        });
    }

    /// Snap a falling body onto the highest ground slab under its feet and
    /// kill its vertical velocity. Rising or frozen bodies are left alone.
    pub fn settle(&self, body: &mut KinematicBody) {
        if body.is_frozen() || body.velocity().y > 0.0 {
            return;
        }

        let feet = body.feet_point();
        let mut landing_top: Option<f32> = None;
        for surface in self.surfaces.iter().filter(|s| s.layer == CollisionLayer::Ground) {
            let aabb = surface.shape.compute_aabb(&surface.pose);
            if feet.x < aabb.mins.x || feet.x > aabb.maxs.x {
                continue;
            }
            let top = aabb.maxs.y;
            if feet.y <= top && feet.y >= top - MAX_SNAP_DEPTH {
                landing_top = Some(landing_top.map_or(top, |best: f32| best.max(top)));
            }
        }

        if let Some(top) = landing_top {
            body.set_position(Vec2::new(body.position().x, top + body.half_extents().y));
            body.set_velocity_y(0.0);
        }
    }
}

impl SurfaceProbe for LevelGeometry {
    fn overlaps_circle(&self, center: Vec2, radius: f32, layer: CollisionLayer) -> bool {
        let ball = Ball::new(radius);
        let ball_pose = Isometry::translation(center.x, center.y);
        self.surfaces
            .iter()
            .filter(|surface| surface.layer == layer)
            .any(|surface| {
                query::intersection_test(&ball_pose, &ball, &surface.pose, &*surface.shape)
                    .unwrap_or(false)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level() -> LevelGeometry {
        let mut level = LevelGeometry::new();
        // Ground slab with top at y = 0, spanning x = [-8, 0]
        level.add_slab(
            CollisionLayer::Ground,
            Vec2::new(-4.0, -0.5),
            Vec2::new(4.0, 0.5),
        );
        // Water pool spanning x = [0, 6], y = [-2, 0]
        level.add_slab(
            CollisionLayer::Water,
            Vec2::new(3.0, -1.0),
            Vec2::new(3.0, 1.0),
        );
        level
    }

    #[test]
    fn test_probe_hits_ground_at_surface() {
        let level = level();
        assert!(level.overlaps_circle(Vec2::new(-4.0, 0.0), 0.02, CollisionLayer::Ground));
        assert!(!level.overlaps_circle(Vec2::new(-4.0, 0.5), 0.02, CollisionLayer::Ground));
    }

    #[test]
    fn test_probe_filters_by_layer() {
        let level = level();
        let in_pool = Vec2::new(3.0, -1.0);
        assert!(level.overlaps_circle(in_pool, 0.02, CollisionLayer::Water));
        assert!(!level.overlaps_circle(in_pool, 0.02, CollisionLayer::Ground));
    }

    #[test]
    fn test_probe_misses_outside_extent() {
        let level = level();
        assert!(!level.overlaps_circle(Vec2::new(10.0, 0.0), 0.02, CollisionLayer::Ground));
    }

    #[test]
    fn test_settle_snaps_falling_body_onto_slab() {
        let level = level();
        let mut body = KinematicBody::new(Vec2::new(-4.0, 0.9), Vec2::new(0.5, 1.0));
        body.set_velocity_y(-5.0);
        // Feet are at -0.1, inside the snap window below the slab top.
        level.settle(&mut body);
        assert_eq!(body.position(), Vec2::new(-4.0, 1.0));
        assert_eq!(body.velocity().y, 0.0);
    }

    #[test]
    fn test_settle_ignores_rising_body() {
        let level = level();
        let mut body = KinematicBody::new(Vec2::new(-4.0, 0.9), Vec2::new(0.5, 1.0));
        body.set_velocity_y(3.0);
        level.settle(&mut body);
        assert_eq!(body.position(), Vec2::new(-4.0, 0.9));
        assert_eq!(body.velocity().y, 3.0);
    }

    #[test]
    fn test_settle_ignores_body_far_above() {
        let level = level();
        let mut body = KinematicBody::new(Vec2::new(-4.0, 3.0), Vec2::new(0.5, 1.0));
        body.set_velocity_y(-1.0);
        level.settle(&mut body);
        assert_eq!(body.position(), Vec2::new(-4.0, 3.0));
    }

    #[test]
    fn test_settle_ignores_water() {
        let level = level();
        let mut body = KinematicBody::new(Vec2::new(3.0, 0.9), Vec2::new(0.5, 1.0));
        body.set_velocity_y(-1.0);
        level.settle(&mut body);
        // Water is not walkable; the body keeps sinking.
        assert_eq!(body.position(), Vec2::new(3.0, 0.9));
        assert_eq!(body.velocity().y, -1.0);
    }
}
