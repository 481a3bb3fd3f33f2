// crates/genus_mesh/src/lib.rs

//! Genus 网格模块
//!
//! 从多边形网格构建半边图，划分连通分量，并按分量计算欧拉示性数与亏格。
//!
//! # 核心类型
//!
//! - [`HalfEdgeMesh`]: 构建后不可变的半边图
//! - [`MeshComponent`]: 一个连通分量的半边集合
//! - [`TopologyAnalyzer`] / [`TopologyReport`]: 逐分量的 V/E/F、χ 与亏格
//!
//! # 模块结构
//!
//! - [`halfedge`]: 半边图、构建、遍历与验证
//! - [`components`]: 连通分量划分
//! - [`topology`]: 欧拉示性数与亏格
//! - [`statistics`]: 网格统计
//! - [`io`]: 网格 IO (OBJ)
//!
//! # 示例
//!
//! ```rust
//! use genus_mesh::compute_genus;
//!
//! let positions = [
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ];
//! let faces = [[0usize, 2, 1], [0, 1, 3], [1, 2, 3], [2, 0, 3]];
//!
//! let genus = compute_genus(&positions, &faces).unwrap();
//! assert_eq!(genus, 0.0);
//! ```

pub mod components;
pub mod error;
pub mod halfedge;
pub mod io;
pub mod statistics;
pub mod topology;

use genus_foundation::geometry::Point3D;
use std::path::Path;

// 重新导出核心类型
pub use components::{find_connected_components, MeshComponent};
pub use error::{InvalidFaceKind, MeshError, MeshResult};
pub use halfedge::{Face, HalfEdge, HalfEdgeMesh, ValidationError, ValidationReport, Vertex};
pub use io::{ObjLoader, ObjMeshData};
pub use statistics::MeshStatistics;
pub use topology::{
    genus_from_euler, ComponentTopology, EulerCounts, TopologyAnalyzer, TopologyReport,
};

/// 构建半边图并返回完整的拓扑报告
///
/// # 错误
///
/// 面少于 3 个顶点或引用越界顶点时返回 [`MeshError::InvalidFace`]。
pub fn analyze<P, F>(positions: &[P], faces: &[F]) -> MeshResult<TopologyReport>
where
    P: Copy + Into<Point3D>,
    F: AsRef<[usize]>,
{
    let mesh = HalfEdgeMesh::from_polygons(positions, faces)?;
    Ok(TopologyAnalyzer::analyze(&mesh))
}

/// 计算网格亏格（各连通分量之和）
///
/// 纯函数，相同输入得到逐位相同的结果。
pub fn compute_genus<P, F>(positions: &[P], faces: &[F]) -> MeshResult<f64>
where
    P: Copy + Into<Point3D>,
    F: AsRef<[usize]>,
{
    Ok(analyze(positions, faces)?.genus)
}

/// 读取 OBJ 文件并分析
pub fn analyze_obj_file<P: AsRef<Path>>(path: P) -> MeshResult<TopologyReport> {
    let data = ObjLoader::load(path)?;
    analyze(&data.positions, &data.faces)
}
