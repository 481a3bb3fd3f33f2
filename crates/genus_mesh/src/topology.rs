// crates/genus_mesh/src/topology.rs

//! 拓扑分析：欧拉示性数与亏格
//!
//! 对每个连通分量统计
//!
//! - V: 作为 origin 出现的不同顶点数
//! - F: 被引用的不同面数
//! - E: 不同的无向边数，`(a, b)` 与 `(b, a)` 只计一次，与是否存在 twin 无关
//!
//! 得到 `χ = V − E + F`，再取 `g = 1 − χ/2`。网格的亏格是各分量亏格之和。
//!
//! # 数学说明
//!
//! `g = 1 − χ/2` 只对无边界的闭合可定向曲面成立。带边界的分量
//! （存在无 twin 的半边）同样得到一个数值，可能不是整数，也不是真正的亏格；
//! 多个分量求和也只是沿用的聚合约定，不是拓扑恒等式。两者都按原样保留。

use crate::components::{find_connected_components, MeshComponent};
use crate::halfedge::HalfEdgeMesh;
use genus_foundation::index::{FaceIndex, VertexIndex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::trace;

/// 由欧拉示性数计算亏格
///
/// ```
/// use genus_mesh::genus_from_euler;
///
/// assert_eq!(genus_from_euler(2), 0.0);
/// assert_eq!(genus_from_euler(0), 1.0);
/// assert_eq!(genus_from_euler(1), 0.5);
/// ```
#[inline]
pub fn genus_from_euler(euler_characteristic: i64) -> f64 {
    1.0 - euler_characteristic as f64 / 2.0
}

/// 一个分量的 V/E/F 计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EulerCounts {
    /// 顶点数
    pub vertices: usize,
    /// 无向边数
    pub edges: usize,
    /// 面数
    pub faces: usize,
}

impl EulerCounts {
    /// 统计分量的顶点/边/面
    pub fn of_component(mesh: &HalfEdgeMesh, component: &MeshComponent) -> Self {
        let mut vertices: HashSet<VertexIndex> = HashSet::new();
        let mut faces: HashSet<FaceIndex> = HashSet::new();
        let mut edges: HashSet<(VertexIndex, VertexIndex)> = HashSet::new();

        for &he in component.halfedges() {
            let Some(he_data) = mesh.halfedge(he) else {
                continue;
            };
            vertices.insert(he_data.origin);
            faces.insert(he_data.face);
            if let Some(edge) = mesh.undirected_edge(he) {
                edges.insert(edge);
            }
        }

        Self {
            vertices: vertices.len(),
            edges: edges.len(),
            faces: faces.len(),
        }
    }

    /// 欧拉示性数 χ = V − E + F
    #[inline]
    pub fn euler_characteristic(&self) -> i64 {
        self.vertices as i64 - self.edges as i64 + self.faces as i64
    }

    /// 对应的亏格 1 − χ/2
    #[inline]
    pub fn genus(&self) -> f64 {
        genus_from_euler(self.euler_characteristic())
    }
}

/// 单个连通分量的拓扑结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentTopology {
    /// 分量序号
    pub index: usize,
    /// 半边数
    pub n_halfedges: usize,
    /// 顶点数 V
    pub vertices: usize,
    /// 无向边数 E
    pub edges: usize,
    /// 面数 F
    pub faces: usize,
    /// 欧拉示性数 χ
    pub euler_characteristic: i64,
    /// 亏格贡献 1 − χ/2
    pub genus: f64,
    /// 无 twin 的半边数，非零时亏格只是形式值
    pub boundary_halfedges: usize,
}

impl ComponentTopology {
    /// 是否为闭合分量（所有半边都有 twin）
    pub fn is_closed(&self) -> bool {
        self.boundary_halfedges == 0
    }
}

/// 整个网格的拓扑报告
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopologyReport {
    /// 各分量结果（按分量顺序）
    pub components: Vec<ComponentTopology>,
    /// 各分量亏格之和
    pub genus: f64,
}

impl TopologyReport {
    /// 分量数量
    pub fn n_components(&self) -> usize {
        self.components.len()
    }

    /// 是否所有分量都闭合
    pub fn is_closed(&self) -> bool {
        self.components.iter().all(ComponentTopology::is_closed)
    }

    /// 欧拉示性数之和
    pub fn total_euler_characteristic(&self) -> i64 {
        self.components.iter().map(|c| c.euler_characteristic).sum()
    }
}

/// 拓扑分析器
pub struct TopologyAnalyzer;

impl TopologyAnalyzer {
    /// 分析单个分量
    pub fn analyze_component(
        mesh: &HalfEdgeMesh,
        index: usize,
        component: &MeshComponent,
    ) -> ComponentTopology {
        let counts = EulerCounts::of_component(mesh, component);
        let boundary_halfedges = component
            .halfedges()
            .iter()
            .filter(|&&he| mesh.is_boundary_halfedge(he))
            .count();

        let topology = ComponentTopology {
            index,
            n_halfedges: component.len(),
            vertices: counts.vertices,
            edges: counts.edges,
            faces: counts.faces,
            euler_characteristic: counts.euler_characteristic(),
            genus: counts.genus(),
            boundary_halfedges,
        };

        trace!(
            index,
            v = topology.vertices,
            e = topology.edges,
            f = topology.faces,
            chi = topology.euler_characteristic,
            genus = topology.genus,
            "分量拓扑"
        );

        topology
    }

    /// 划分连通分量并逐个分析，亏格按分量顺序求和
    pub fn analyze(mesh: &HalfEdgeMesh) -> TopologyReport {
        let components = find_connected_components(mesh);
        Self::analyze_components(mesh, &components)
    }

    /// 使用已有的分量划分进行分析
    pub fn analyze_components(mesh: &HalfEdgeMesh, components: &[MeshComponent]) -> TopologyReport {
        let components: Vec<ComponentTopology> = components
            .iter()
            .enumerate()
            .map(|(i, c)| Self::analyze_component(mesh, i, c))
            .collect();

        let genus = components.iter().fold(0.0, |acc, c| acc + c.genus);

        TopologyReport { components, genus }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genus_foundation::index::HalfEdgeIndex;

    fn build(positions: &[[f64; 3]], faces: &[Vec<usize>]) -> HalfEdgeMesh {
        HalfEdgeMesh::from_polygons(positions, faces).unwrap()
    }

    #[test]
    fn test_genus_formula() {
        assert!((genus_from_euler(2) - 0.0).abs() < 1e-12);
        assert!((genus_from_euler(-2) - 2.0).abs() < 1e-12);
        assert!((genus_from_euler(3) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_single_triangle_counts() {
        let mesh = build(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &[vec![0, 1, 2]],
        );
        let report = TopologyAnalyzer::analyze(&mesh);

        assert_eq!(report.n_components(), 1);
        let c = &report.components[0];
        assert_eq!((c.vertices, c.edges, c.faces), (3, 3, 1));
        assert_eq!(c.euler_characteristic, 1);
        assert_eq!(c.boundary_halfedges, 3);
        assert!(!c.is_closed());
        assert_eq!(report.genus, 0.5);
    }

    #[test]
    fn test_edge_counted_once_with_and_without_twin() {
        // 两个相邻三角形：共享边有 twin，只计一次
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
        let mesh = build(&positions, &[vec![0, 1, 2], vec![0, 2, 3]]);
        let report = TopologyAnalyzer::analyze(&mesh);

        let c = &report.components[0];
        assert_eq!((c.vertices, c.edges, c.faces), (4, 5, 2));
        assert_eq!(c.euler_characteristic, 1);
    }

    #[test]
    fn test_twinless_edge_dedups_against_reverse() {
        // 面 0 的 0->1 被面 1 覆盖而没有 twin，面 2 的 1->0 与面 1 配对；
        // 面 3 经 1-2 和 1-4 把面 0 与面 2 连进同一分量
        let positions = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
            [0.5, -1.0, 0.0],
            [0.5, 0.0, 1.0],
        ];
        let faces = [vec![0, 1, 2], vec![0, 1, 3], vec![1, 0, 4], vec![2, 1, 4]];
        let mesh = build(&positions, &faces);
        assert!(mesh.is_boundary_halfedge(HalfEdgeIndex::new(0)));

        let components = find_connected_components(&mesh);
        assert_eq!(components.len(), 1);

        let counts = EulerCounts::of_component(&mesh, &components[0]);
        assert_eq!(counts, EulerCounts { vertices: 5, edges: 8, faces: 4 });
    }

    #[test]
    fn test_inconsistent_orientation_splits_components() {
        // 共享边 2->0 两次同向出现，没有 twin，next/prev 不跨面
        let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
        let mesh = build(&positions, &[vec![0, 1, 2], vec![2, 0, 3]]);
        let report = TopologyAnalyzer::analyze(&mesh);

        assert_eq!(report.n_components(), 2);
        assert!((report.genus - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_mesh_report() {
        let report = TopologyAnalyzer::analyze(&HalfEdgeMesh::new());
        assert_eq!(report.n_components(), 0);
        assert_eq!(report.genus, 0.0);
        assert!(report.is_closed());
    }

    #[test]
    fn test_report_serializes() {
        let mesh = build(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            &[vec![0, 1, 2]],
        );
        let report = TopologyAnalyzer::analyze(&mesh);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["genus"], 0.5);
        assert_eq!(json["components"][0]["euler_characteristic"], 1);
    }
}
