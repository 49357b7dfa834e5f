// Collision layers for filtering probe queries

/// Named layers static geometry is sorted into.
///
/// The character probes one layer at a time: the ground layer decides
/// grounded-ness, the water layer decides the water super state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    /// Walkable terrain and platforms
    Ground,
    /// Swimmable volumes
    Water,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_equality() {
        assert_eq!(CollisionLayer::Ground, CollisionLayer::Ground);
        assert_ne!(CollisionLayer::Ground, CollisionLayer::Water);
    }
}
