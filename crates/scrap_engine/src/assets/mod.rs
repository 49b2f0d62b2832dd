//! Asset descriptors and the resource registry

mod material;
mod mesh;
mod resource_manager;
mod shader;
mod texture;

pub use material::{Material, MaterialParam};
pub use mesh::{MeshBuilderParam, MeshResource, MeshSource};
pub use resource_manager::{
    MaterialHandle, MeshHandle, ResourceError, ResourceManager, ShaderHandle, TextureHandle,
};
pub use shader::{ShaderProgram, ShaderStage};
pub use texture::{FilterMode, Texture, TextureKind, TextureSource, WrapMode};
