//! Resource manager: typed handles and path-keyed deduplication
//!
//! Registers asset descriptors (shaders, textures, meshes, materials) and
//! hands out slotmap-backed handles. File-sourced assets are cached by path so
//! repeated loads return the same handle. Decoding file contents is the
//! external loader's job.

use std::collections::HashMap;

use slotmap::SlotMap;
use thiserror::Error;

use super::material::Material;
use super::mesh::MeshResource;
use super::shader::ShaderProgram;
use super::texture::Texture;

slotmap::new_key_type! {
    /// Handle to a registered shader program
    pub struct ShaderHandle;

    /// Handle to a registered texture
    pub struct TextureHandle;

    /// Handle to a registered mesh resource
    pub struct MeshHandle;

    /// Handle to a registered material
    pub struct MaterialHandle;
}

/// Resource registry errors
#[derive(Debug, Error)]
pub enum ResourceError {
    /// Shader handle did not resolve
    #[error("unknown shader handle")]
    UnknownShader,

    /// Texture handle did not resolve
    #[error("unknown texture handle")]
    UnknownTexture,

    /// Mesh handle did not resolve
    #[error("unknown mesh handle")]
    UnknownMesh,

    /// Material handle did not resolve
    #[error("unknown material handle")]
    UnknownMaterial,
}

/// Central registry for the assets a scene is authored against
#[derive(Default)]
pub struct ResourceManager {
    shaders: SlotMap<ShaderHandle, ShaderProgram>,
    textures: SlotMap<TextureHandle, Texture>,
    meshes: SlotMap<MeshHandle, MeshResource>,
    materials: SlotMap<MaterialHandle, Material>,

    texture_cache: HashMap<String, TextureHandle>,
    mesh_cache: HashMap<String, MeshHandle>,
}

impl ResourceManager {
    /// Create an empty resource manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a shader program
    pub fn create_shader(&mut self, program: ShaderProgram) -> ShaderHandle {
        if let Some(name) = program.debug_name() {
            log::debug!("registering shader '{}'", name);
        }
        self.shaders.insert(program)
    }

    /// Register a texture, deduplicating file-backed sources by path
    pub fn create_texture(&mut self, texture: Texture) -> TextureHandle {
        if let Some(path) = texture.path() {
            if let Some(&existing) = self.texture_cache.get(path) {
                log::trace!("texture cache hit for '{}'", path);
                return existing;
            }
            let path = path.to_owned();
            let handle = self.textures.insert(texture);
            self.texture_cache.insert(path, handle);
            return handle;
        }
        self.textures.insert(texture)
    }

    /// Register a plain 2D texture by file path
    pub fn load_texture(&mut self, path: &str) -> TextureHandle {
        self.create_texture(Texture::from_file(path))
    }

    /// Register a mesh, deduplicating file-backed sources by path
    pub fn create_mesh(&mut self, mesh: MeshResource) -> MeshHandle {
        if let Some(path) = mesh.path() {
            if let Some(&existing) = self.mesh_cache.get(path) {
                log::trace!("mesh cache hit for '{}'", path);
                return existing;
            }
            let path = path.to_owned();
            let handle = self.meshes.insert(mesh);
            self.mesh_cache.insert(path, handle);
            return handle;
        }
        self.meshes.insert(mesh)
    }

    /// Register a mesh by model file path
    pub fn load_mesh(&mut self, path: &str) -> MeshHandle {
        self.create_mesh(MeshResource::from_file(path))
    }

    /// Create a material over a registered shader
    pub fn create_material(
        &mut self,
        shader: ShaderHandle,
    ) -> Result<MaterialHandle, ResourceError> {
        if !self.shaders.contains_key(shader) {
            return Err(ResourceError::UnknownShader);
        }
        Ok(self.materials.insert(Material::new(shader)))
    }

    /// Resolve a shader handle
    pub fn shader(&self, handle: ShaderHandle) -> Result<&ShaderProgram, ResourceError> {
        self.shaders.get(handle).ok_or(ResourceError::UnknownShader)
    }

    /// Resolve a texture handle
    pub fn texture(&self, handle: TextureHandle) -> Result<&Texture, ResourceError> {
        self.textures
            .get(handle)
            .ok_or(ResourceError::UnknownTexture)
    }

    /// Resolve a mesh handle
    pub fn mesh(&self, handle: MeshHandle) -> Result<&MeshResource, ResourceError> {
        self.meshes.get(handle).ok_or(ResourceError::UnknownMesh)
    }

    /// Resolve a material handle
    pub fn material(&self, handle: MaterialHandle) -> Result<&Material, ResourceError> {
        self.materials
            .get(handle)
            .ok_or(ResourceError::UnknownMaterial)
    }

    /// Resolve a material handle mutably (for parameter binding)
    pub fn material_mut(
        &mut self,
        handle: MaterialHandle,
    ) -> Result<&mut Material, ResourceError> {
        self.materials
            .get_mut(handle)
            .ok_or(ResourceError::UnknownMaterial)
    }

    /// Number of registered shaders
    pub fn shader_count(&self) -> usize {
        self.shaders.len()
    }

    /// Number of registered textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// Number of registered meshes
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of registered materials
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::shader::ShaderStage;
    use crate::assets::texture::TextureKind;

    #[test]
    fn test_texture_dedup_by_path() {
        let mut resources = ResourceManager::new();
        let first = resources.load_texture("textures/box-diffuse.png");
        let second = resources.load_texture("textures/box-diffuse.png");

        assert_eq!(first, second);
        assert_eq!(resources.texture_count(), 1);
    }

    #[test]
    fn test_pixel_textures_are_not_deduplicated() {
        let mut resources = ResourceManager::new();
        let a = resources.create_texture(Texture::solid_color([0.0, 0.0, 0.0]));
        let b = resources.create_texture(Texture::solid_color([0.0, 0.0, 0.0]));

        assert_ne!(a, b);
        assert_eq!(resources.texture_count(), 2);
    }

    #[test]
    fn test_mesh_dedup_by_path() {
        let mut resources = ResourceManager::new();
        let first = resources.load_mesh("platform2.obj");
        let second = resources.load_mesh("platform2.obj");
        assert_eq!(first, second);
    }

    #[test]
    fn test_material_requires_live_shader() {
        let mut resources = ResourceManager::new();
        let shader = resources.create_shader(ShaderProgram::from_stages([(
            ShaderStage::Vertex,
            "shaders/vertex_shaders/basic.glsl",
        )]));

        let material = resources.create_material(shader).expect("material");
        assert!(resources.material(material).is_ok());

        let bogus = ShaderHandle::default();
        assert!(matches!(
            resources.create_material(bogus),
            Err(ResourceError::UnknownShader)
        ));
    }

    #[test]
    fn test_cubemap_kind_survives_registration() {
        let mut resources = ResourceManager::new();
        let handle = resources
            .create_texture(Texture::from_file("cubemaps/ocean/ocean.jpg").with_kind(TextureKind::Cube));
        let texture = resources.texture(handle).expect("texture");
        assert_eq!(texture.kind, TextureKind::Cube);
    }
}
