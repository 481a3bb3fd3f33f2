// crates/genus_mesh/src/halfedge/traversal.rs

//! 半边网格拓扑遍历迭代器

use super::mesh::HalfEdgeMesh;
use genus_foundation::index::{FaceIndex, HalfEdgeIndex, VertexIndex};

// ============================================================================
// 面遍历
// ============================================================================

/// 遍历面的所有半边
///
/// 步数上限为半边总数，结构损坏时不会死循环。
pub struct FaceHalfEdgeIter<'a> {
    mesh: &'a HalfEdgeMesh,
    start: HalfEdgeIndex,
    current: HalfEdgeIndex,
    remaining: usize,
    done: bool,
}

impl<'a> FaceHalfEdgeIter<'a> {
    pub(crate) fn new(mesh: &'a HalfEdgeMesh, face: FaceIndex) -> Self {
        let start = mesh
            .face(face)
            .map(|f| f.halfedge)
            .unwrap_or(HalfEdgeIndex::INVALID);

        Self {
            mesh,
            start,
            current: start,
            remaining: mesh.n_halfedges(),
            done: start.is_invalid(),
        }
    }
}

impl<'a> Iterator for FaceHalfEdgeIter<'a> {
    type Item = HalfEdgeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.remaining == 0 {
            return None;
        }

        let result = self.current;
        let he = self.mesh.halfedge(self.current)?;

        self.remaining -= 1;
        self.current = he.next;
        if self.current == self.start {
            self.done = true;
        }

        Some(result)
    }
}

/// 遍历面的所有顶点
pub struct FaceVertexIter<'a> {
    inner: FaceHalfEdgeIter<'a>,
}

impl<'a> Iterator for FaceVertexIter<'a> {
    type Item = VertexIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let he = self.inner.next()?;
        self.inner.mesh.halfedge(he).map(|h| h.origin)
    }
}

// ============================================================================
// 顶点遍历
// ============================================================================

/// 遍历顶点周围的所有出发半边
///
/// 从顶点的出发半边开始沿 `twin -> next` 旋转，遇到边界（无 twin）
/// 或回到起点时停止。边界顶点只能得到单侧扇区。
pub struct VertexOutgoingIter<'a> {
    mesh: &'a HalfEdgeMesh,
    start: HalfEdgeIndex,
    current: HalfEdgeIndex,
    remaining: usize,
    done: bool,
}

impl<'a> VertexOutgoingIter<'a> {
    pub(crate) fn new(mesh: &'a HalfEdgeMesh, vertex: VertexIndex) -> Self {
        let start = mesh
            .vertex(vertex)
            .map(|v| v.halfedge)
            .unwrap_or(HalfEdgeIndex::INVALID);

        Self {
            mesh,
            start,
            current: start,
            remaining: mesh.n_halfedges(),
            done: start.is_invalid(),
        }
    }
}

impl<'a> Iterator for VertexOutgoingIter<'a> {
    type Item = HalfEdgeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.remaining == 0 {
            return None;
        }

        let result = self.current;
        self.remaining -= 1;

        // 移动到下一个出发边: twin -> next
        let he = self.mesh.halfedge(self.current)?;
        match self.mesh.halfedge(he.twin) {
            Some(twin) => {
                self.current = twin.next;
                if self.current == self.start {
                    self.done = true;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

// ============================================================================
// 网格便捷方法
// ============================================================================

impl HalfEdgeMesh {
    /// 遍历面的半边
    pub fn face_halfedges(&self, face: FaceIndex) -> FaceHalfEdgeIter<'_> {
        FaceHalfEdgeIter::new(self, face)
    }

    /// 遍历面的顶点（按边界环顺序）
    pub fn face_vertices(&self, face: FaceIndex) -> FaceVertexIter<'_> {
        FaceVertexIter {
            inner: FaceHalfEdgeIter::new(self, face),
        }
    }

    /// 面的边数
    pub fn face_degree(&self, face: FaceIndex) -> usize {
        self.face_halfedges(face).count()
    }

    /// 遍历顶点的出发半边
    pub fn vertex_outgoing(&self, vertex: VertexIndex) -> VertexOutgoingIter<'_> {
        VertexOutgoingIter::new(self, vertex)
    }
}
