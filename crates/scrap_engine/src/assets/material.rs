//! Materials: named shader instances with parameter sets

use std::collections::HashMap;

use crate::foundation::math::{Vec3, Vec4};

use super::resource_manager::{ShaderHandle, TextureHandle};

/// A value bound to a material parameter slot
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialParam {
    /// Scalar float
    Float(f32),

    /// Scalar integer
    Int(i32),

    /// 3-component vector
    Vec3(Vec3),

    /// 4-component vector
    Vec4(Vec4),

    /// Texture binding
    Texture(TextureHandle),
}

impl From<f32> for MaterialParam {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for MaterialParam {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Vec3> for MaterialParam {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

impl From<Vec4> for MaterialParam {
    fn from(value: Vec4) -> Self {
        Self::Vec4(value)
    }
}

impl From<TextureHandle> for MaterialParam {
    fn from(value: TextureHandle) -> Self {
        Self::Texture(value)
    }
}

/// A shader instance plus the parameter values it is drawn with
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    shader: ShaderHandle,
    params: HashMap<String, MaterialParam>,
}

impl Material {
    /// Create an unnamed material over a shader program
    pub fn new(shader: ShaderHandle) -> Self {
        Self {
            name: String::new(),
            shader,
            params: HashMap::new(),
        }
    }

    /// Material name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the material name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Shader this material instantiates
    pub fn shader(&self) -> ShaderHandle {
        self.shader
    }

    /// Bind a parameter value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<MaterialParam>) {
        self.params.insert(key.into(), value.into());
    }

    /// Read a bound parameter
    pub fn get(&self, key: &str) -> Option<&MaterialParam> {
        self.params.get(key)
    }

    /// Number of bound parameters
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_param_binding() {
        let mut shaders: SlotMap<ShaderHandle, ()> = SlotMap::with_key();
        let shader = shaders.insert(());

        let mut material = Material::new(shader);
        material.set_name("Box");
        material.set("u_Material.Shininess", 0.1f32);
        material.set("u_Material.Steps", 8);

        assert_eq!(material.name(), "Box");
        assert_eq!(
            material.get("u_Material.Shininess"),
            Some(&MaterialParam::Float(0.1))
        );
        assert_eq!(
            material.get("u_Material.Steps"),
            Some(&MaterialParam::Int(8))
        );
        assert_eq!(material.get("u_Material.AlbedoMap"), None);
    }
}
