//! Texture-region and nine-patch geometry.
//!
//! Rendering itself belongs to the host backend; this module only does the
//! region arithmetic a sprite batch needs:
//! - [`textureregion`] – pixel rectangle of a texture plus normalized UVs
//! - [`ninepatch`] – stretch-aware nine-patch vertex-buffer assembly
//!
//! All results are plain float buffers ready to be copied into whatever
//! vertex format the backend uses.

pub mod ninepatch;
pub mod textureregion;

pub use ninepatch::NinePatch;
pub use textureregion::TextureRegion;
