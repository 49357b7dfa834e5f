// Overlap query boundary

use super::layers::CollisionLayer;
use glam::Vec2;

/// Circle-overlap queries against layered world geometry.
///
/// This is the character's only view of the world: a point, a radius, and a
/// layer in; a yes/no out. Implemented by `LevelGeometry` for real levels and
/// by scripted fakes in tests.
pub trait SurfaceProbe {
    fn overlaps_circle(&self, center: Vec2, radius: f32, layer: CollisionLayer) -> bool;
}
