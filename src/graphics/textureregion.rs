use serde::{Deserialize, Serialize};

/// A rectangular pixel region of a texture.
///
/// Stores the backing texture dimensions so normalized UV coordinates can
/// be derived on demand. Coordinates are top-left based, matching screen
/// space: `v()` is the top edge of the region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRegion {
    /// Width of the backing texture in pixels.
    pub texture_width: u32,
    /// Height of the backing texture in pixels.
    pub texture_height: u32,
    /// Region left edge in pixels.
    pub x: u32,
    /// Region top edge in pixels.
    pub y: u32,
    /// Region width in pixels.
    pub width: u32,
    /// Region height in pixels.
    pub height: u32,
}

impl TextureRegion {
    /// Region covering the whole texture.
    pub fn of_texture(texture_width: u32, texture_height: u32) -> Self {
        TextureRegion {
            texture_width,
            texture_height,
            x: 0,
            y: 0,
            width: texture_width,
            height: texture_height,
        }
    }

    pub fn new(
        texture_width: u32,
        texture_height: u32,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    ) -> Self {
        TextureRegion {
            texture_width,
            texture_height,
            x,
            y,
            width,
            height,
        }
    }

    /// Carve a sub-region; `x` and `y` are relative to this region's
    /// top-left corner.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> TextureRegion {
        TextureRegion {
            texture_width: self.texture_width,
            texture_height: self.texture_height,
            x: self.x + x,
            y: self.y + y,
            width,
            height,
        }
    }

    /// Normalized left edge.
    pub fn u(&self) -> f32 {
        self.x as f32 / self.texture_width as f32
    }

    /// Normalized top edge.
    pub fn v(&self) -> f32 {
        self.y as f32 / self.texture_height as f32
    }

    /// Normalized right edge.
    pub fn u2(&self) -> f32 {
        (self.x + self.width) as f32 / self.texture_width as f32
    }

    /// Normalized bottom edge.
    pub fn v2(&self) -> f32 {
        (self.y + self.height) as f32 / self.texture_height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uv_normalization() {
        let region = TextureRegion::new(256, 128, 64, 32, 64, 32);
        assert_eq!(region.u(), 0.25);
        assert_eq!(region.v(), 0.25);
        assert_eq!(region.u2(), 0.5);
        assert_eq!(region.v2(), 0.5);
    }

    #[test]
    fn test_subregion_is_absolute() {
        let parent = TextureRegion::new(256, 256, 100, 50, 100, 100);
        let child = parent.region(10, 20, 30, 40);
        assert_eq!(child.x, 110);
        assert_eq!(child.y, 70);
        assert_eq!(child.width, 30);
        assert_eq!(child.height, 40);
        assert_eq!(child.texture_width, 256);
    }
}
