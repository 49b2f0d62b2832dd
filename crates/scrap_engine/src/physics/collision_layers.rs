//! Collision layer filtering
//!
//! Colliders carry a layer (what they are) and a mask (what they test
//! against). Filtering is mutual: both sides must accept the other.

use bitflags::bitflags;

bitflags! {
    /// Collision layer bits for colliders and trigger volumes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CollisionLayers: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;

        /// Static environment geometry
        const ENVIRONMENT = 1 << 1;

        /// Trigger volumes (no physical response)
        const TRIGGER = 1 << 2;

        /// Debris and small physics objects
        const DEBRIS = 1 << 3;

        /// Pickups and collectibles
        const PICKUP = 1 << 4;
    }
}

impl Default for CollisionLayers {
    fn default() -> Self {
        Self::all()
    }
}

impl CollisionLayers {
    /// Check whether two colliders should interact based on layers and masks
    ///
    /// A's layer must be in B's mask and B's layer must be in A's mask.
    pub fn should_collide(
        layer_a: CollisionLayers,
        mask_a: CollisionLayers,
        layer_b: CollisionLayers,
        mask_b: CollisionLayers,
    ) -> bool {
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::ENVIRONMENT,
            CollisionLayers::ENVIRONMENT,
            CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Player tests against triggers, but the trigger ignores players.
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER,
            CollisionLayers::TRIGGER,
            CollisionLayers::TRIGGER,
            CollisionLayers::DEBRIS,
        ));
    }

    #[test]
    fn test_default_mask_matches_everything() {
        assert!(CollisionLayers::default().intersects(CollisionLayers::PICKUP));
    }
}
