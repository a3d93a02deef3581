use std::{fs, path::PathBuf};

use log::info;
use scoreboard_core::{AssetStore, bitmap::Bitmap, error::AssetError};

/// Asset store backed by a directory of `<name>.json` bitfiles.
pub struct DirStore {
    base_path: PathBuf,
}

impl DirStore {
    pub fn new_with_base_path(base_path: PathBuf) -> Self {
        info!("Using DirStore with base path: {:?}", base_path);
        DirStore { base_path }
    }

    /// Names may already carry the `.json` extension.
    pub fn path_for(&self, name: &str) -> Result<PathBuf, AssetError> {
        if name.is_empty() || name.contains(['/', '\\', '\0']) {
            return Err(AssetError::InvalidName);
        }
        let file = if name.ends_with(".json") {
            name.to_string()
        } else {
            format!("{name}.json")
        };
        Ok(self.base_path.join(file))
    }

    pub fn write(&self, name: &str, bitmap: &Bitmap) -> Result<(), AssetError> {
        let path = self.path_for(name)?;
        let data =
            serde_json::to_vec_pretty(&bitmap.to_bitfile()).map_err(|_| AssetError::Malformed)?;
        fs::write(path, data).map_err(AssetError::from_io_error)
    }
}

impl AssetStore for DirStore {
    fn read(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let path = self.path_for(name)?;
        fs::read(path).map_err(AssetError::from_io_error)
    }
}
