//! Render component: mesh + material binding for a game object

use std::any::Any;

use crate::assets::{MaterialHandle, MeshHandle};
use crate::scene::Component;

/// Makes a game object drawable by binding a mesh and a material
///
/// The engine carries the binding; drawing is the external renderer's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderComponent {
    mesh: Option<MeshHandle>,
    material: Option<MaterialHandle>,
}

impl RenderComponent {
    /// Create an empty render component
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the mesh to draw
    pub fn set_mesh(&mut self, mesh: MeshHandle) {
        self.mesh = Some(mesh);
    }

    /// Bind the material to draw with
    pub fn set_material(&mut self, material: MaterialHandle) {
        self.material = Some(material);
    }

    /// Bound mesh, if any
    pub fn mesh(&self) -> Option<MeshHandle> {
        self.mesh
    }

    /// Bound material, if any
    pub fn material(&self) -> Option<MaterialHandle> {
        self.material
    }
}

impl Component for RenderComponent {
    fn type_name(&self) -> &'static str {
        "RenderComponent"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
