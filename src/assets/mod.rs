//! Asset access used during scene assembly.

pub mod model;
pub mod source;

pub use model::{load_obj_model, MeshData, Model};
pub use source::{AssetSource, DirAssetSource, MemoryAssetSource};
