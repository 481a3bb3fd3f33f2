// crates/genus_mesh/src/statistics.rs

//! 网格统计信息

use crate::components::find_connected_components;
use crate::halfedge::HalfEdgeMesh;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// 半边网格统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshStatistics {
    pub n_vertices: usize,
    pub n_isolated_vertices: usize,
    pub n_faces: usize,
    pub n_halfedges: usize,
    pub n_boundary_halfedges: usize,
    pub n_components: usize,
    /// 顶点重复出现的退化面数
    pub n_degenerate_faces: usize,
    /// 最大顶点度（沿 twin -> next 旋转计数，边界顶点只计单侧扇区）
    pub max_vertex_valence: usize,
    /// 面边数 -> 面个数
    pub face_degree_histogram: BTreeMap<usize, usize>,
}

impl MeshStatistics {
    /// 统计网格
    pub fn compute(mesh: &HalfEdgeMesh) -> Self {
        let mut face_degree_histogram = BTreeMap::new();
        let mut n_degenerate_faces = 0;
        for face in mesh.face_indices() {
            *face_degree_histogram.entry(mesh.face_degree(face)).or_insert(0) += 1;

            let mut seen = HashSet::new();
            if !mesh.face_vertices(face).all(|v| seen.insert(v)) {
                n_degenerate_faces += 1;
            }
        }

        let max_vertex_valence = mesh
            .vertex_indices()
            .map(|v| mesh.vertex_outgoing(v).count())
            .max()
            .unwrap_or(0);

        Self {
            n_vertices: mesh.n_vertices(),
            n_isolated_vertices: mesh.vertices().filter(|(_, v)| v.is_isolated()).count(),
            n_faces: mesh.n_faces(),
            n_halfedges: mesh.n_halfedges(),
            n_boundary_halfedges: mesh
                .halfedge_indices()
                .filter(|&he| mesh.is_boundary_halfedge(he))
                .count(),
            n_components: find_connected_components(mesh).len(),
            n_degenerate_faces,
            max_vertex_valence,
            face_degree_histogram,
        }
    }

    /// 是否全部为三角形
    pub fn is_triangulated(&self) -> bool {
        self.face_degree_histogram.keys().all(|&d| d == 3)
    }
}

impl std::fmt::Display for MeshStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== 网格统计 ===")?;
        writeln!(
            f,
            "顶点数: {} (孤立: {})",
            self.n_vertices, self.n_isolated_vertices
        )?;
        writeln!(f, "面数: {}", self.n_faces)?;
        writeln!(
            f,
            "半边数: {} (边界: {})",
            self.n_halfedges, self.n_boundary_halfedges
        )?;
        writeln!(f, "连通分量: {}", self.n_components)?;
        writeln!(f, "退化面: {}", self.n_degenerate_faces)?;
        writeln!(f, "最大顶点度: {}", self.max_vertex_valence)?;
        write!(f, "面边数分布:")?;
        if self.face_degree_histogram.is_empty() {
            write!(f, " (无)")?;
        }
        for (degree, count) in &self.face_degree_histogram {
            write!(f, "\n  {}边形: {}", degree, count)?;
        }
        Ok(())
    }
}
