//! Mesh resource descriptors

use crate::foundation::math::{Vec2, Vec3};

/// Parameters for procedurally generated mesh pieces
#[derive(Debug, Clone, PartialEq)]
pub enum MeshBuilderParam {
    /// Icosphere approximation of an ellipsoid
    IcoSphere {
        /// Center of the sphere
        center: Vec3,
        /// Per-axis radii
        radii: Vec3,
        /// Subdivision count
        tessellation: u32,
    },

    /// Flat quad in the XY plane
    Plane {
        /// Edge lengths
        size: Vec2,
    },

    /// Axis-aligned box
    Cube {
        /// Half extents along each axis
        half_extents: Vec3,
    },
}

/// Where a mesh's geometry comes from
#[derive(Debug, Clone, PartialEq)]
pub enum MeshSource {
    /// Model file, resolved by the external loader
    File(String),

    /// Generated from a list of builder parameters
    Generated(Vec<MeshBuilderParam>),
}

/// Mesh resource descriptor
#[derive(Debug, Clone)]
pub struct MeshResource {
    /// Geometry source
    pub source: MeshSource,
}

impl MeshResource {
    /// Mesh from a model file path
    pub fn from_file(path: impl Into<String>) -> Self {
        Self {
            source: MeshSource::File(path.into()),
        }
    }

    /// Empty generated mesh; add pieces with [`add_param`](Self::add_param)
    pub fn generated() -> Self {
        Self {
            source: MeshSource::Generated(Vec::new()),
        }
    }

    /// Append a generator parameter; no-op for file-backed meshes
    pub fn add_param(&mut self, param: MeshBuilderParam) {
        match &mut self.source {
            MeshSource::Generated(params) => params.push(param),
            MeshSource::File(path) => {
                log::warn!("ignoring builder param on file-backed mesh '{}'", path);
            }
        }
    }

    /// Source path for file-backed meshes
    pub fn path(&self) -> Option<&str> {
        match &self.source {
            MeshSource::File(path) => Some(path),
            MeshSource::Generated(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_mesh_collects_params() {
        let mut mesh = MeshResource::generated();
        mesh.add_param(MeshBuilderParam::IcoSphere {
            center: Vec3::zeros(),
            radii: Vec3::new(1.0, 1.0, 1.0),
            tessellation: 5,
        });

        match mesh.source {
            MeshSource::Generated(ref params) => assert_eq!(params.len(), 1),
            MeshSource::File(_) => panic!("expected generated source"),
        }
    }

    #[test]
    fn test_param_on_file_mesh_is_ignored() {
        let mut mesh = MeshResource::from_file("platform2.obj");
        mesh.add_param(MeshBuilderParam::Plane {
            size: Vec2::new(1.0, 1.0),
        });
        assert_eq!(mesh.path(), Some("platform2.obj"));
    }
}
