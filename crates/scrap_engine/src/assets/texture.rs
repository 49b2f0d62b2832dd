//! Texture descriptors
//!
//! Textures are descriptors only: either a source path for the (external)
//! loader or in-memory pixel data for procedurally authored defaults such as
//! 1x1 solid colors and the flat normal map.

/// Dimensionality/layout of a texture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    /// Plain 2D texture
    Flat,

    /// 2D texture atlas addressed as a grid of layers
    Array {
        /// Grid rows
        rows: u32,
        /// Grid columns
        cols: u32,
    },

    /// Cubemap (environment map)
    Cube,

    /// 1D lookup table
    Lut1D,

    /// 3D lookup table
    Lut3D,
}

/// Where a texture's contents come from
#[derive(Debug, Clone, PartialEq)]
pub enum TextureSource {
    /// Image file, resolved by the external loader
    File(String),

    /// In-memory float pixel data (RGB triplets, row major)
    Pixels {
        /// Width in pixels
        width: u32,
        /// Height in pixels
        height: u32,
        /// RGB triplets
        data: Vec<f32>,
    },
}

/// Sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    /// Bilinear filtering
    Linear,

    /// Nearest-neighbor filtering
    Nearest,
}

/// Coordinate wrap behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    /// Tile the texture
    Repeat,

    /// Clamp coordinates to the edge texel
    ClampToEdge,
}

/// Texture descriptor
#[derive(Debug, Clone)]
pub struct Texture {
    /// Content source
    pub source: TextureSource,

    /// Layout of the texture
    pub kind: TextureKind,

    /// Minification filter
    pub min_filter: FilterMode,

    /// Magnification filter
    pub mag_filter: FilterMode,

    /// Wrap behavior
    pub wrap: WrapMode,
}

impl Texture {
    /// Plain 2D texture from a file path
    pub fn from_file(path: impl Into<String>) -> Self {
        Self {
            source: TextureSource::File(path.into()),
            kind: TextureKind::Flat,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            wrap: WrapMode::Repeat,
        }
    }

    /// Texture from in-memory RGB pixel data
    pub fn from_pixels(width: u32, height: u32, data: Vec<f32>) -> Self {
        Self {
            source: TextureSource::Pixels {
                width,
                height,
                data,
            },
            kind: TextureKind::Flat,
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            wrap: WrapMode::Repeat,
        }
    }

    /// 1x1 solid color texture
    pub fn solid_color(rgb: [f32; 3]) -> Self {
        Self::from_pixels(1, 1, rgb.to_vec())
    }

    /// Override the texture kind
    pub fn with_kind(mut self, kind: TextureKind) -> Self {
        self.kind = kind;
        self
    }

    /// Override both filters
    pub fn with_filters(mut self, min: FilterMode, mag: FilterMode) -> Self {
        self.min_filter = min;
        self.mag_filter = mag;
        self
    }

    /// Override the wrap mode
    pub fn with_wrap(mut self, wrap: WrapMode) -> Self {
        self.wrap = wrap;
        self
    }

    /// Source path for file-backed textures
    pub fn path(&self) -> Option<&str> {
        match &self.source {
            TextureSource::File(path) => Some(path),
            TextureSource::Pixels { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_is_single_pixel() {
        let texture = Texture::solid_color([0.5, 0.5, 1.0]);
        match texture.source {
            TextureSource::Pixels {
                width,
                height,
                ref data,
            } => {
                assert_eq!((width, height), (1, 1));
                assert_eq!(data, &vec![0.5, 0.5, 1.0]);
            }
            TextureSource::File(_) => panic!("expected pixel source"),
        }
    }

    #[test]
    fn test_builder_overrides() {
        let texture = Texture::from_file("textures/leaves.png")
            .with_filters(FilterMode::Nearest, FilterMode::Nearest)
            .with_wrap(WrapMode::ClampToEdge);

        assert_eq!(texture.min_filter, FilterMode::Nearest);
        assert_eq!(texture.wrap, WrapMode::ClampToEdge);
        assert_eq!(texture.path(), Some("textures/leaves.png"));
    }
}
