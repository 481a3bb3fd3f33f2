// crates/genus_mesh/src/components.rs

//! 连通分量划分
//!
//! 把 `twin`/`next`/`prev` 三种引用视为半边之间的无向边，用显式栈的
//! 深度优先遍历把全部半边划分为互不相交的连通分量。不依赖流形性质。
//!
//! 未访问的半边按创建顺序作为新分量的种子，因此分量顺序是确定的。

use crate::halfedge::HalfEdgeMesh;
use genus_foundation::index::HalfEdgeIndex;
use tracing::debug;

/// 一个连通分量（非空半边集合）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshComponent {
    halfedges: Vec<HalfEdgeIndex>,
}

impl MeshComponent {
    /// 分量内的半边（遍历顺序，无语义）
    pub fn halfedges(&self) -> &[HalfEdgeIndex] {
        &self.halfedges
    }

    /// 半边数量
    pub fn len(&self) -> usize {
        self.halfedges.len()
    }

    /// 是否为空（由 [`find_connected_components`] 得到的分量总是非空）
    pub fn is_empty(&self) -> bool {
        self.halfedges.is_empty()
    }

    /// 种子半边，即分量内创建顺序最早的半边
    pub fn seed(&self) -> Option<HalfEdgeIndex> {
        self.halfedges.first().copied()
    }
}

/// 划分网格的连通分量
///
/// 每条半边恰好被访问一次，时间复杂度与半边数成线性。
///
/// # 示例
///
/// ```
/// use genus_mesh::{find_connected_components, HalfEdgeMesh};
///
/// let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
/// let mesh = HalfEdgeMesh::from_polygons(&positions, &[[0usize, 1, 2]]).unwrap();
/// let components = find_connected_components(&mesh);
/// assert_eq!(components.len(), 1);
/// assert_eq!(components[0].len(), 3);
/// ```
pub fn find_connected_components(mesh: &HalfEdgeMesh) -> Vec<MeshComponent> {
    let n = mesh.n_halfedges();
    let mut visited = vec![false; n];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for seed in mesh.halfedge_indices() {
        if visited[seed.as_usize()] {
            continue;
        }

        let mut halfedges = Vec::new();
        visited[seed.as_usize()] = true;
        stack.push(seed);

        while let Some(he) = stack.pop() {
            halfedges.push(he);

            let Some(he_data) = mesh.halfedge(he) else {
                continue;
            };

            // 入栈时即标记，保证每条半边只入栈一次
            for neighbor in [he_data.twin, he_data.next, he_data.prev] {
                if neighbor.is_valid() && neighbor.as_usize() < n && !visited[neighbor.as_usize()] {
                    visited[neighbor.as_usize()] = true;
                    stack.push(neighbor);
                }
            }
        }

        components.push(MeshComponent { halfedges });
    }

    debug!(n_halfedges = n, n_components = components.len(), "连通分量划分完成");

    components
}
