//! Collider shape descriptors
//!
//! Colliders describe the shapes a physics capability occupies. Detection and
//! resolution belong to an external physics backend; the engine only carries
//! the descriptions authored by scene builders.

use crate::assets::MeshHandle;
use crate::foundation::math::Vec3;

use super::collision_layers::CollisionLayers;

/// Supported collider shapes
#[derive(Debug, Clone)]
pub enum ColliderShape {
    /// Axis-aligned box given by half extents
    Box {
        /// Half extents along each local axis
        half_extents: Vec3,
    },

    /// Sphere
    Sphere {
        /// Sphere radius
        radius: f32,
    },

    /// Infinite plane
    Plane {
        /// Plane normal
        normal: Vec3,
    },

    /// Upright cylinder
    Cylinder {
        /// Cylinder radius
        radius: f32,
        /// Half height along the local Z axis
        half_height: f32,
    },

    /// Convex hull of a mesh resource
    ConvexMesh {
        /// Source mesh
        mesh: MeshHandle,
    },
}

/// A collider instance on a rigid body or trigger volume
#[derive(Debug, Clone)]
pub struct Collider {
    /// Shape of the collider
    pub shape: ColliderShape,

    /// Local offset from the owning object's origin
    pub position: Vec3,

    /// Local scale applied to the shape
    pub scale: Vec3,

    /// Layer this collider belongs to
    pub layer: CollisionLayers,

    /// Layers this collider tests against
    pub mask: CollisionLayers,
}

impl Collider {
    /// Create a collider with identity placement and permissive layers
    pub fn new(shape: ColliderShape) -> Self {
        Self {
            shape,
            position: Vec3::zeros(),
            scale: Vec3::new(1.0, 1.0, 1.0),
            layer: CollisionLayers::all(),
            mask: CollisionLayers::all(),
        }
    }

    /// Box collider shorthand
    pub fn box_shape(half_extents: Vec3) -> Self {
        Self::new(ColliderShape::Box { half_extents })
    }

    /// Sphere collider shorthand
    pub fn sphere(radius: f32) -> Self {
        Self::new(ColliderShape::Sphere { radius })
    }

    /// Set the local offset
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the local scale
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Set layer and mask
    pub fn with_layers(mut self, layer: CollisionLayers, mask: CollisionLayers) -> Self {
        self.layer = layer;
        self.mask = mask;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let collider = Collider::box_shape(Vec3::new(0.6, 0.99, 0.32))
            .with_position(Vec3::new(0.0, 0.95, 0.0))
            .with_layers(CollisionLayers::PLAYER, CollisionLayers::ENVIRONMENT);

        assert_eq!(collider.position, Vec3::new(0.0, 0.95, 0.0));
        assert_eq!(collider.layer, CollisionLayers::PLAYER);
        assert!(matches!(collider.shape, ColliderShape::Box { .. }));
    }
}
