use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use log::{debug, warn};

use crate::{bitmap::Bitmap, error::AssetError};

/// Asset the `:` glyph is stored under.
pub const COLON_ASSET: &str = "dois-pontos";

/// Named key-value store holding bitfile documents.
pub trait AssetStore {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError>;
}

impl<T: AssetStore + ?Sized> AssetStore for &T {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        (**self).read(name)
    }
}

impl<T: AssetStore + ?Sized> AssetStore for Arc<T> {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        (**self).read(name)
    }
}

/// In-memory asset store.
#[derive(Default)]
pub struct MemoryStore {
    assets: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.assets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), data.into());
    }

    /// Stores `lines` as a bitfile document.
    pub fn insert_bitlines<S: AsRef<str>>(&self, name: impl Into<String>, lines: &[S]) {
        let bitmap = Bitmap::from_lines(lines);
        let data = serde_json::to_vec(&bitmap.to_bitfile()).unwrap_or_default();
        self.insert(name, data);
    }

    pub fn remove(&self, name: &str) {
        self.assets
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}

impl AssetStore for MemoryStore {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        self.assets
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or(AssetError::IoError(embedded_io::ErrorKind::NotFound))
    }
}

pub fn glyph_asset_name(ch: char) -> String {
    match ch {
        ':' => COLON_ASSET.into(),
        ch => ch.to_string(),
    }
}

/// Glyph and image lookup on top of an [`AssetStore`].
///
/// Glyphs are cached per character once they loaded successfully. Images
/// are read from the store every time.
pub struct Catalog<S> {
    store: S,
    glyphs: RwLock<HashMap<char, Arc<Bitmap>>>,
}

impl<S: AssetStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            glyphs: RwLock::new(HashMap::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_image(&self, name: &str) -> Option<Bitmap> {
        match self.fetch(name) {
            Ok(bitmap) => Some(bitmap),
            Err(e) => {
                warn!("Image {} not found: {}", name, e);
                None
            }
        }
    }

    pub fn load_char(&self, ch: char) -> Option<Arc<Bitmap>> {
        if let Some(glyph) = self.cached(ch) {
            return Some(glyph);
        }

        let name = glyph_asset_name(ch);
        match self.fetch(&name) {
            Ok(bitmap) => {
                debug!("Caching glyph '{}' from {}", ch, name);
                let mut glyphs = self.glyphs.write().unwrap_or_else(PoisonError::into_inner);
                // Another render may have loaded the same glyph in between.
                let glyph = glyphs.entry(ch).or_insert_with(|| Arc::new(bitmap));
                Some(Arc::clone(glyph))
            }
            Err(e) => {
                warn!("Character {} not found: {}", ch, e);
                None
            }
        }
    }

    pub fn cached_glyphs(&self) -> usize {
        self.glyphs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn clear_cache(&self) {
        self.glyphs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn cached(&self, ch: char) -> Option<Arc<Bitmap>> {
        self.glyphs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&ch)
            .cloned()
    }

    fn fetch(&self, name: &str) -> Result<Bitmap, AssetError> {
        let data = self.store.read(name)?;
        Bitmap::from_json(&data)
    }
}
