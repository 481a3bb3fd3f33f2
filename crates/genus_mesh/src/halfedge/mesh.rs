// crates/genus_mesh/src/halfedge/mesh.rs

//! 半边网格核心数据结构
//!
//! # 设计要点
//!
//! 1. **半边表示**: 每个多边形的每条边对应一个有向半边，相邻面的反向半边互为 twin
//! 2. **Arena存储**: 顶点/半边/面分别存放在三个 Arena 中，交叉引用全部是整数索引
//! 3. **只读**: 由 [`HalfEdgeMesh::from_polygons`] 一次性构建，之后不再修改
//! 4. **不要求流形**: 同一有向边出现多次、边被两个以上的面共享都被静默接受

use genus_foundation::arena::Arena;
use genus_foundation::geometry::Point3D;
use genus_foundation::index::{FaceIndex, FaceTag, HalfEdgeIndex, HalfEdgeTag, VertexIndex, VertexTag};

/// 顶点数据
#[derive(Debug, Clone)]
pub struct Vertex {
    /// 顶点位置（3D坐标）
    pub position: Point3D,
    /// 以该顶点为起点的任一半边 (INVALID 表示孤立顶点)
    ///
    /// 构建时后写覆盖先写，取值依赖面的输入顺序；拓扑分析不读取此字段。
    pub halfedge: HalfEdgeIndex,
}

impl Vertex {
    /// 创建新顶点
    pub fn new(position: Point3D) -> Self {
        Self {
            position,
            halfedge: HalfEdgeIndex::INVALID,
        }
    }

    /// 是否为孤立顶点（未被任何面引用）
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.halfedge.is_invalid()
    }
}

/// 半边数据
#[derive(Debug, Clone)]
pub struct HalfEdge {
    /// 起点顶点
    pub origin: VertexIndex,
    /// 对偶半边 (边界时为INVALID)
    pub twin: HalfEdgeIndex,
    /// 下一条半边 (同一面内)
    pub next: HalfEdgeIndex,
    /// 上一条半边 (同一面内)
    pub prev: HalfEdgeIndex,
    /// 所属面
    pub face: FaceIndex,
}

impl Default for HalfEdge {
    fn default() -> Self {
        Self::new(VertexIndex::INVALID)
    }
}

impl HalfEdge {
    /// 创建新半边
    pub fn new(origin: VertexIndex) -> Self {
        Self {
            origin,
            twin: HalfEdgeIndex::INVALID,
            next: HalfEdgeIndex::INVALID,
            prev: HalfEdgeIndex::INVALID,
            face: FaceIndex::INVALID,
        }
    }

    /// 是否存在对偶半边
    #[inline]
    pub fn has_twin(&self) -> bool {
        self.twin.is_valid()
    }
}

/// 面数据
#[derive(Debug, Clone)]
pub struct Face {
    /// 任一边界半边
    pub halfedge: HalfEdgeIndex,
}

impl Face {
    /// 创建新面
    pub fn new(halfedge: HalfEdgeIndex) -> Self {
        Self { halfedge }
    }
}

/// 半边网格
#[derive(Debug, Clone, Default)]
pub struct HalfEdgeMesh {
    /// 顶点存储
    pub(super) vertices: Arena<Vertex, VertexTag>,
    /// 半边存储
    pub(super) halfedges: Arena<HalfEdge, HalfEdgeTag>,
    /// 面存储
    pub(super) faces: Arena<Face, FaceTag>,
}

impl HalfEdgeMesh {
    /// 创建空网格
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建指定容量的网格
    pub fn with_capacity(n_vertices: usize, n_halfedges: usize, n_faces: usize) -> Self {
        Self {
            vertices: Arena::with_capacity(n_vertices),
            halfedges: Arena::with_capacity(n_halfedges),
            faces: Arena::with_capacity(n_faces),
        }
    }

    // =========================================================================
    // 基本统计
    // =========================================================================

    /// 顶点数量
    #[inline]
    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// 半边数量
    #[inline]
    pub fn n_halfedges(&self) -> usize {
        self.halfedges.len()
    }

    /// 面数量
    #[inline]
    pub fn n_faces(&self) -> usize {
        self.faces.len()
    }

    /// 网格是否为空（没有任何半边）
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.halfedges.is_empty()
    }

    // =========================================================================
    // 元素访问
    // =========================================================================

    /// 获取顶点
    #[inline]
    pub fn vertex(&self, idx: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(idx)
    }

    /// 获取半边
    #[inline]
    pub fn halfedge(&self, idx: HalfEdgeIndex) -> Option<&HalfEdge> {
        self.halfedges.get(idx)
    }

    /// 获取半边 (可变)，仅供 crate 内部测试构造损坏结构
    #[inline]
    #[allow(dead_code)]
    pub(crate) fn halfedge_mut(&mut self, idx: HalfEdgeIndex) -> Option<&mut HalfEdge> {
        self.halfedges.get_mut(idx)
    }

    /// 获取面
    #[inline]
    pub fn face(&self, idx: FaceIndex) -> Option<&Face> {
        self.faces.get(idx)
    }

    /// 检查顶点是否存在
    #[inline]
    pub fn contains_vertex(&self, idx: VertexIndex) -> bool {
        self.vertices.contains(idx)
    }

    /// 检查半边是否存在
    #[inline]
    pub fn contains_halfedge(&self, idx: HalfEdgeIndex) -> bool {
        self.halfedges.contains(idx)
    }

    /// 检查面是否存在
    #[inline]
    pub fn contains_face(&self, idx: FaceIndex) -> bool {
        self.faces.contains(idx)
    }

    /// 遍历所有顶点索引
    pub fn vertex_indices(&self) -> impl Iterator<Item = VertexIndex> + '_ {
        self.vertices.indices()
    }

    /// 遍历所有顶点
    pub fn vertices(&self) -> impl Iterator<Item = (VertexIndex, &Vertex)> + '_ {
        self.vertices.iter()
    }

    /// 遍历所有半边索引（创建顺序）
    pub fn halfedge_indices(&self) -> impl Iterator<Item = HalfEdgeIndex> + '_ {
        self.halfedges.indices()
    }

    /// 遍历所有半边
    pub fn halfedges(&self) -> impl Iterator<Item = (HalfEdgeIndex, &HalfEdge)> + '_ {
        self.halfedges.iter()
    }

    /// 遍历所有面索引
    pub fn face_indices(&self) -> impl Iterator<Item = FaceIndex> + '_ {
        self.faces.indices()
    }

    /// 遍历所有面
    pub fn faces(&self) -> impl Iterator<Item = (FaceIndex, &Face)> + '_ {
        self.faces.iter()
    }

    // =========================================================================
    // 拓扑查询辅助
    // =========================================================================

    /// 获取半边的终点顶点（即 next 的起点）
    #[inline]
    pub fn halfedge_target(&self, he: HalfEdgeIndex) -> Option<VertexIndex> {
        self.halfedge(he)
            .and_then(|h| self.halfedge(h.next))
            .map(|h| h.origin)
    }

    /// 获取半边的对偶半边
    #[inline]
    pub fn twin(&self, he: HalfEdgeIndex) -> Option<HalfEdgeIndex> {
        self.halfedge(he).and_then(|h| h.twin.to_option())
    }

    /// 判断半边是否为边界（没有对偶半边）
    #[inline]
    pub fn is_boundary_halfedge(&self, he: HalfEdgeIndex) -> bool {
        self.halfedge(he).map(|h| !h.has_twin()).unwrap_or(false)
    }

    /// 半边对应的无向边 (较小顶点, 较大顶点)
    #[inline]
    pub fn undirected_edge(&self, he: HalfEdgeIndex) -> Option<(VertexIndex, VertexIndex)> {
        let origin = self.halfedge(he)?.origin;
        let target = self.halfedge_target(he)?;
        Some(if origin <= target {
            (origin, target)
        } else {
            (target, origin)
        })
    }
}
