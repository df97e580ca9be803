//! OBJ model loading
//!
//! Models are parsed with `tobj` from any [`AssetSource`]. Materials referenced
//! by the OBJ are not resolved; the scene assembly supplies its own material.

use std::io::BufReader;

use cgmath::{InnerSpace, Vector3};
use log::debug;

use super::source::AssetSource;
use crate::error::AssetError;

/// Geometry of a single mesh, single-indexed and triangulated.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub name: String,
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A loaded model ready to be attached to a scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub name: String,
    pub meshes: Vec<MeshData>,
}

impl Model {
    pub fn vertex_count(&self) -> usize {
        self.meshes.iter().map(MeshData::vertex_count).sum()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(MeshData::triangle_count).sum()
    }
}

/// Load an OBJ model from the asset source.
pub fn load_obj_model(source: &dyn AssetSource, name: &str) -> Result<Model, AssetError> {
    let mut reader = BufReader::new(source.open_asset(name)?);
    let (models, _materials) = tobj::load_obj_buf(
        &mut reader,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
        |_| Err(tobj::LoadError::OpenFileFailed),
    )
    .map_err(|e| AssetError::Model {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    if models.is_empty() {
        return Err(AssetError::Model {
            name: name.to_string(),
            reason: "no geometry".to_string(),
        });
    }

    let meshes: Vec<MeshData> = models
        .into_iter()
        .map(|m| {
            // Use normals from OBJ if available, otherwise calculate them
            let normals = if m.mesh.normals.len() == m.mesh.positions.len() {
                m.mesh.normals
            } else {
                calculate_vertex_normals(&m.mesh.positions, &m.mesh.indices)
            };
            MeshData {
                name: m.name,
                positions: m.mesh.positions,
                normals,
                indices: m.mesh.indices,
            }
        })
        .collect();

    let model = Model {
        name: name.to_string(),
        meshes,
    };
    debug!(
        "loaded model `{}`: {} vertices, {} triangles",
        name,
        model.vertex_count(),
        model.triangle_count()
    );
    Ok(model)
}

/// Average the face normals of every triangle touching each vertex.
pub fn calculate_vertex_normals(positions: &[f32], indices: &[u32]) -> Vec<f32> {
    let vertex = |i: u32| {
        let i = i as usize * 3;
        Vector3::new(positions[i], positions[i + 1], positions[i + 2])
    };

    let mut sums = vec![Vector3::new(0.0f32, 0.0, 0.0); positions.len() / 3];
    for triangle in indices.chunks_exact(3) {
        let (v0, v1, v2) = (vertex(triangle[0]), vertex(triangle[1]), vertex(triangle[2]));
        let face_normal = (v1 - v0).cross(v2 - v0);
        for &index in triangle {
            sums[index as usize] += face_normal;
        }
    }

    sums.into_iter()
        .flat_map(|sum| {
            let n = if sum.magnitude2() > 0.0 {
                sum.normalize()
            } else {
                sum
            };
            [n.x, n.y, n.z]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::MemoryAssetSource;

    const TRIANGLE_OBJ: &str = "o tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    #[test]
    fn test_load_triangle() {
        let source = MemoryAssetSource::new().with_asset("tri.obj", TRIANGLE_OBJ);
        let model = load_obj_model(&source, "tri.obj").unwrap();

        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.triangle_count(), 1);
        // Counter-clockwise in XY: normal points along +Z
        assert_eq!(&model.meshes[0].normals[0..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_empty_obj_is_model_error() {
        let source = MemoryAssetSource::new().with_asset("empty.obj", "# nothing\n");
        assert!(matches!(
            load_obj_model(&source, "empty.obj"),
            Err(AssetError::Model { .. })
        ));
    }

    #[test]
    fn test_missing_model_is_not_found() {
        let source = MemoryAssetSource::new();
        assert!(matches!(
            load_obj_model(&source, "Toothless.obj"),
            Err(AssetError::NotFound(_))
        ));
    }
}
