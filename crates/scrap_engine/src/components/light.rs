//! Point light component

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec3;
use crate::scene::Component;

/// Point light attached to a game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Light {
    color: Vec3,
    radius: f32,
    intensity: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            color: Vec3::new(1.0, 1.0, 1.0),
            radius: 5.0,
            intensity: 1.0,
        }
    }
}

impl Light {
    /// White point light with default falloff
    pub fn new() -> Self {
        Self::default()
    }

    /// Light color
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Set the light color
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Falloff radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Set the falloff radius
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }

    /// Light intensity
    pub fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Set the light intensity
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity.max(0.0);
    }

    /// Deserialize a light from a RON document
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }
}

impl Component for Light {
    fn type_name(&self) -> &'static str {
        "Light"
    }

    fn to_ron(&self) -> Option<String> {
        ron::ser::to_string(self).ok()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_radius_clamped() {
        let mut light = Light::new();
        light.set_radius(-1.0);
        assert_eq!(light.radius(), 0.0);
    }

    #[test]
    fn test_ron_roundtrip() {
        let mut light = Light::new();
        light.set_color(Vec3::new(0.902, 0.02, 0.02));
        light.set_radius(10.0);

        let text = light.to_ron().expect("serialize");
        let restored = Light::from_ron(&text).expect("deserialize");
        assert_eq!(restored.radius(), 10.0);
        assert_eq!(restored.color(), light.color());
    }
}
