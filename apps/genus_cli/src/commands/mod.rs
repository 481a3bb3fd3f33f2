// apps/genus_cli/src/commands/mod.rs

//! 子命令实现

pub mod genus;
pub mod info;
pub mod validate;

use anyhow::{Context, Result};
use genus_mesh::{HalfEdgeMesh, ObjLoader};
use std::path::Path;
use tracing::debug;

/// 读取 OBJ 文件并构建半边图
pub(crate) fn load_mesh(path: &Path) -> Result<HalfEdgeMesh> {
    let data = ObjLoader::load(path)
        .with_context(|| format!("无法读取网格文件 {}", path.display()))?;
    debug!(
        path = %path.display(),
        n_vertices = data.n_vertices(),
        n_faces = data.n_faces(),
        "网格已读取"
    );

    HalfEdgeMesh::from_polygons(&data.positions, &data.faces)
        .with_context(|| format!("无法构建半边图 {}", path.display()))
}
