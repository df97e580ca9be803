use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::PathBuf;

use crate::error::AssetError;

/// Read access to bundled assets (marker images, models, textures, sounds).
pub trait AssetSource {
    /// Open a named asset as a byte stream.
    fn open_asset(&self, name: &str) -> Result<Box<dyn Read + '_>, AssetError>;

    /// Read the whole asset into memory.
    fn read_asset(&self, name: &str) -> Result<Vec<u8>, AssetError> {
        let mut bytes = Vec::new();
        self.open_asset(name)?.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

/// Assets stored as files below a directory.
#[derive(Debug, Clone)]
pub struct DirAssetSource {
    root: PathBuf,
}

impl DirAssetSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirAssetSource {
    fn open_asset(&self, name: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        let path = self.root.join(name);
        match File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Assets held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssetSource {
    assets: HashMap<String, Vec<u8>>,
}

impl MemoryAssetSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), bytes.into());
    }

    pub fn with_asset(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl AssetSource for MemoryAssetSource {
    fn open_asset(&self, name: &str) -> Result<Box<dyn Read + '_>, AssetError> {
        self.assets
            .get(name)
            .map(|bytes| Box::new(Cursor::new(bytes.as_slice())) as Box<dyn Read + '_>)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}
