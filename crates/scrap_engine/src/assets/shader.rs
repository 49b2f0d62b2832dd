//! Shader program descriptors

use std::collections::HashMap;

/// Pipeline stage a shader source belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex stage
    Vertex,

    /// Fragment stage
    Fragment,
}

/// A shader program described by its per-stage source paths
///
/// The engine never compiles shaders; the descriptor is what scene authors
/// hand to the (external) renderer.
#[derive(Debug, Clone, Default)]
pub struct ShaderProgram {
    stages: HashMap<ShaderStage, String>,
    debug_name: Option<String>,
}

impl ShaderProgram {
    /// Build a program from stage/path pairs
    pub fn from_stages<I, S>(stages: I) -> Self
    where
        I: IntoIterator<Item = (ShaderStage, S)>,
        S: Into<String>,
    {
        Self {
            stages: stages
                .into_iter()
                .map(|(stage, path)| (stage, path.into()))
                .collect(),
            debug_name: None,
        }
    }

    /// Source path for a stage
    pub fn stage(&self, stage: ShaderStage) -> Option<&str> {
        self.stages.get(&stage).map(String::as_str)
    }

    /// Attach a human-readable name for diagnostics
    pub fn set_debug_name(&mut self, name: impl Into<String>) {
        self.debug_name = Some(name.into());
    }

    /// Human-readable name, if set
    pub fn debug_name(&self) -> Option<&str> {
        self.debug_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_lookup() {
        let mut program = ShaderProgram::from_stages([
            (ShaderStage::Vertex, "shaders/vertex_shaders/basic.glsl"),
            (
                ShaderStage::Fragment,
                "shaders/fragment_shaders/deferred_forward.glsl",
            ),
        ]);
        program.set_debug_name("Deferred - GBuffer Generation");

        assert_eq!(
            program.stage(ShaderStage::Vertex),
            Some("shaders/vertex_shaders/basic.glsl")
        );
        assert_eq!(program.debug_name(), Some("Deferred - GBuffer Generation"));
    }
}
