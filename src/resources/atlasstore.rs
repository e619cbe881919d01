//! Texture atlas storage and data types.
//!
//! Provides serializable structs for atlas definitions and a store for
//! loaded atlases keyed by string IDs. Decoding image files is the host
//! backend's job; this store only holds the region arithmetic data and
//! hands out [`TextureRegion`]/[`NinePatch`] lookups to rendering code.
//!
//! Atlas definitions are JSON, e.g.:
//!
//! ```json
//! {
//!   "texture_width": 256,
//!   "texture_height": 256,
//!   "regions": [
//!     { "name": "button", "x": 0, "y": 0, "width": 48, "height": 48,
//!       "split": [8, 8, 8, 8] }
//!   ]
//! }
//! ```

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::graphics::{NinePatch, TextureRegion};

/// Single named region within an atlas.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AtlasRegionDef {
    pub name: String,
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Optional nine-patch insets as `[left, right, top, bottom]`.
    #[serde(default)]
    pub split: Option<[u32; 4]>,
}

/// Atlas metadata and its named regions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TextureAtlas {
    /// Backing texture width in pixels.
    pub texture_width: u32,
    /// Backing texture height in pixels.
    pub texture_height: u32,
    pub regions: Vec<AtlasRegionDef>,
}

impl TextureAtlas {
    /// Parse an atlas definition from JSON.
    pub fn from_json(json: &str) -> Result<TextureAtlas, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse atlas JSON: {}", e))
    }

    fn find(&self, name: &str) -> Option<&AtlasRegionDef> {
        self.regions.iter().find(|region| region.name == name)
    }

    /// Look up a named region.
    pub fn region(&self, name: &str) -> Option<TextureRegion> {
        self.find(name).map(|def| {
            TextureRegion::new(
                self.texture_width,
                self.texture_height,
                def.x,
                def.y,
                def.width,
                def.height,
            )
        })
    }

    /// Look up a named region carrying nine-patch splits.
    ///
    /// Returns None when the region is missing or has no `split` entry.
    pub fn nine_patch(&self, name: &str) -> Option<NinePatch> {
        let def = self.find(name)?;
        let [left, right, top, bottom] = def.split?;
        let region = TextureRegion::new(
            self.texture_width,
            self.texture_height,
            def.x,
            def.y,
            def.width,
            def.height,
        );
        Some(NinePatch::new(region, left, right, top, bottom))
    }
}

/// Registry of loaded atlases by key.
#[derive(Resource, Debug, Default)]
pub struct AtlasStore {
    pub map: FxHashMap<String, TextureAtlas>,
}

impl AtlasStore {
    /// Create an empty store.
    pub fn new() -> Self {
        AtlasStore {
            map: FxHashMap::default(),
        }
    }

    /// Get an atlas by its key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&TextureAtlas> {
        self.map.get(key.as_ref())
    }

    /// Insert an atlas with a specific key.
    pub fn insert(&mut self, key: impl Into<String>, atlas: TextureAtlas) {
        self.map.insert(key.into(), atlas);
    }

    /// Get an atlas, running `load` to produce it on first access.
    ///
    /// The loading-cache entry point: repeated calls for the same key
    /// return the cached atlas without invoking `load` again.
    pub fn get_or_insert_with(
        &mut self,
        key: impl Into<String>,
        load: impl FnOnce() -> Result<TextureAtlas, String>,
    ) -> Result<&TextureAtlas, String> {
        use std::collections::hash_map::Entry;
        match self.map.entry(key.into()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(load()?)),
        }
    }

    /// Clear all loaded atlases.
    pub fn clear(&mut self) {
        self.map.clear();
    }
}
