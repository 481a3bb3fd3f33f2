// crates/genus_mesh/src/halfedge/builder.rs

//! 从扁平的多边形列表构建半边图
//!
//! 构建分为五步：
//!
//! 1. 每个输入位置创建一个顶点
//! 2. 每个面的每对相邻顶点（含首尾闭合对）创建一条有向半边，
//!    并以 `(起点, 终点)` 为键记录；重复的有向边由后出现的面覆盖
//! 3. 每个面创建一个 Face，按该面自身的边数链接 next/prev
//! 4. 设置半边起点和顶点的出发半边（后写覆盖先写）
//! 5. `(a, b)` 与 `(b, a)` 同时存在时互设 twin
//!
//! 每个面的半边在 Arena 中连续存放，通过累计偏移量定位，不假定面是三角形。

use super::mesh::{Face, HalfEdge, HalfEdgeMesh, Vertex};
use crate::error::{MeshError, MeshResult};
use genus_foundation::error::CoreError;
use genus_foundation::geometry::Point3D;
use genus_foundation::index::{FaceIndex, HalfEdgeIndex, VertexIndex};
use std::collections::HashMap;
use tracing::{debug, warn};

/// 单个面在半边 Arena 中的连续区间
#[derive(Debug, Clone, Copy)]
struct FaceSpan {
    /// 第一条半边的位置
    start: usize,
    /// 面的边数
    degree: usize,
}

impl FaceSpan {
    #[inline]
    fn halfedge(&self, i: usize) -> HalfEdgeIndex {
        HalfEdgeIndex::from_usize(self.start + i % self.degree)
    }
}

impl HalfEdgeMesh {
    /// 从顶点位置和多边形面构建半边网格
    ///
    /// # 参数
    /// - `positions`: 顶点坐标，按输入顺序编号
    /// - `faces`: 每个面的顶点索引（0 起始），长度至少为 3
    ///
    /// # 错误
    ///
    /// 任一面少于 3 个顶点或引用越界顶点时返回 [`MeshError::InvalidFace`]，
    /// 不返回部分构建的网格。顶点、半边或面数超出 `u32` 索引空间时返回
    /// [`CoreError::InvalidInput`]。
    ///
    /// # 示例
    ///
    /// ```
    /// use genus_mesh::HalfEdgeMesh;
    ///
    /// let positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
    /// let mesh = HalfEdgeMesh::from_polygons(&positions, &[vec![0, 1, 2, 3]]).unwrap();
    /// assert_eq!(mesh.n_halfedges(), 4);
    /// assert_eq!(mesh.n_faces(), 1);
    /// ```
    pub fn from_polygons<P, F>(positions: &[P], faces: &[F]) -> MeshResult<Self>
    where
        P: Copy + Into<Point3D>,
        F: AsRef<[usize]>,
    {
        let n_vertices = positions.len();
        check_faces(faces, n_vertices)?;

        let n_halfedges: usize = faces.iter().map(|f| f.as_ref().len()).sum();
        check_capacity(n_vertices, n_halfedges, faces.len())?;

        let mut mesh = Self::with_capacity(n_vertices, n_halfedges, faces.len());

        // 1. 顶点
        for &p in positions {
            mesh.vertices.push(Vertex::new(p.into()));
        }

        // 2. 有向半边 + (起点, 终点) 映射
        let mut edge_map: HashMap<(usize, usize), HalfEdgeIndex> = HashMap::with_capacity(n_halfedges);
        let mut spans = Vec::with_capacity(faces.len());
        let mut overwritten = 0usize;

        for face in faces {
            let face = face.as_ref();
            let degree = face.len();
            let start = mesh.halfedges.len();

            for (i, &a) in face.iter().enumerate() {
                let b = face[(i + 1) % degree];
                let he = mesh.halfedges.push(HalfEdge::new(VertexIndex::from_usize(a)));
                if edge_map.insert((a, b), he).is_some() {
                    overwritten += 1;
                }
            }

            spans.push(FaceSpan { start, degree });
        }

        // 3 + 4. 面、环链接与顶点出发半边
        for span in &spans {
            let face_idx = mesh.faces.push(Face::new(span.halfedge(0)));

            for i in 0..span.degree {
                let he = span.halfedge(i);
                let halfedge = &mut mesh.halfedges[he];
                halfedge.face = face_idx;
                halfedge.next = span.halfedge(i + 1);
                halfedge.prev = span.halfedge(i + span.degree - 1);

                let origin = halfedge.origin;
                mesh.vertices[origin].halfedge = he;
            }
        }

        // 5. twin 配对，只处理仍持有映射项的半边，按创建顺序保证结果确定
        let mut self_twins = 0usize;
        for i in 0..mesh.halfedges.len() {
            let he = HalfEdgeIndex::from_usize(i);
            let a = mesh.halfedges[he].origin.as_usize();
            let b = mesh.halfedges[mesh.halfedges[he].next].origin.as_usize();

            if edge_map.get(&(a, b)) != Some(&he) {
                continue;
            }
            if let Some(&reverse) = edge_map.get(&(b, a)) {
                if reverse == he {
                    self_twins += 1;
                }
                mesh.halfedges[he].twin = reverse;
                mesh.halfedges[reverse].twin = he;
            }
        }

        if overwritten > 0 {
            warn!(overwritten, "重复的有向边被后出现的面覆盖，网格非流形");
        }
        if self_twins > 0 {
            warn!(self_twins, "存在首尾相同的退化边，其 twin 指向自身");
        }
        debug!(
            n_vertices = mesh.n_vertices(),
            n_halfedges = mesh.n_halfedges(),
            n_faces = mesh.n_faces(),
            "半边图构建完成"
        );

        Ok(mesh)
    }
}

/// 检查元素数量是否在索引空间内
fn check_capacity(n_vertices: usize, n_halfedges: usize, n_faces: usize) -> MeshResult<()> {
    let limits = [
        ("顶点", n_vertices, VertexIndex::MAX_LEN),
        ("半边", n_halfedges, HalfEdgeIndex::MAX_LEN),
        ("面", n_faces, FaceIndex::MAX_LEN),
    ];
    for (what, count, max) in limits {
        if count > max {
            return Err(CoreError::invalid_input(format!("{}数 {} 超出索引上限 {}", what, count, max)).into());
        }
    }
    Ok(())
}

/// 检查所有面的顶点数与索引范围
fn check_faces<F: AsRef<[usize]>>(faces: &[F], n_vertices: usize) -> MeshResult<()> {
    for (face_id, face) in faces.iter().enumerate() {
        let face = face.as_ref();
        if face.len() < 3 {
            return Err(MeshError::too_few_vertices(face_id, face.len()));
        }
        if let Some(&vertex) = face.iter().find(|&&v| v >= n_vertices) {
            return Err(MeshError::vertex_out_of_range(face_id, vertex, n_vertices));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidFaceKind;

    fn square() -> Vec<[f64; 3]> {
        vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]
    }

    #[test]
    fn test_triangle_cycle() {
        let mesh = HalfEdgeMesh::from_polygons(&square()[..3], &[[0usize, 1, 2]]).unwrap();

        assert_eq!(mesh.n_faces(), 1);
        assert_eq!(mesh.n_halfedges(), 3);

        let face_he = mesh.face(0usize.into()).unwrap().halfedge;
        let he0 = mesh.halfedge(face_he).unwrap();
        let he1 = mesh.halfedge(he0.next).unwrap();
        let he2 = mesh.halfedge(he1.next).unwrap();

        assert_eq!(he2.next, face_he);
        assert_eq!(he0.prev, he1.next);
        assert_eq!(he0.origin.as_usize(), 0);
        assert_eq!(he1.origin.as_usize(), 1);
        assert_eq!(he2.origin.as_usize(), 2);
    }

    #[test]
    fn test_mixed_arity_offsets() {
        // 四边形后接三角形：三角形半边从偏移 4 开始
        let positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.5, 2.0, 0.0],
        ];
        let faces = vec![vec![0, 1, 2, 3], vec![3, 2, 4]];
        let mesh = HalfEdgeMesh::from_polygons(&positions, &faces).unwrap();

        assert_eq!(mesh.n_halfedges(), 7);

        let tri = mesh.face(1usize.into()).unwrap();
        assert_eq!(tri.halfedge.as_usize(), 4);

        let he4 = mesh.halfedge(HalfEdgeIndex::new(4)).unwrap();
        assert_eq!(he4.next.as_usize(), 5);
        assert_eq!(he4.prev.as_usize(), 6);
        assert_eq!(he4.face.as_usize(), 1);

        let he3 = mesh.halfedge(HalfEdgeIndex::new(3)).unwrap();
        assert_eq!(he3.next.as_usize(), 0);
        assert_eq!(he3.face.as_usize(), 0);
    }

    #[test]
    fn test_twins_between_adjacent_faces() {
        let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];
        let mesh = HalfEdgeMesh::from_polygons(&square(), &faces).unwrap();

        // 半边 2: 2->0, 半边 3: 0->2
        let he2 = HalfEdgeIndex::new(2);
        let he3 = HalfEdgeIndex::new(3);
        assert_eq!(mesh.twin(he2), Some(he3));
        assert_eq!(mesh.twin(he3), Some(he2));

        let boundary = mesh
            .halfedge_indices()
            .filter(|&he| mesh.is_boundary_halfedge(he))
            .count();
        assert_eq!(boundary, 4);
    }

    #[test]
    fn test_vertex_backreference_last_write_wins() {
        let faces = vec![vec![0, 1, 2], vec![0, 2, 3]];
        let mesh = HalfEdgeMesh::from_polygons(&square(), &faces).unwrap();

        // 顶点 0 最后一次作为起点出现在半边 3
        let v0 = mesh.vertex(VertexIndex::new(0)).unwrap();
        assert_eq!(v0.halfedge, HalfEdgeIndex::new(3));
    }

    #[test]
    fn test_duplicate_directed_edge_later_face_wins() {
        // 两个面方向相同地共享 0->1，第二个面的半边持有映射项
        let positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.5, 1.0, 0.0],
            [0.5, -1.0, 0.0],
            [0.5, 0.5, 1.0],
        ];
        let faces = vec![vec![0, 1, 2], vec![0, 1, 3], vec![1, 0, 4]];
        let mesh = HalfEdgeMesh::from_polygons(&positions, &faces).unwrap();

        let first = HalfEdgeIndex::new(0);
        let second = HalfEdgeIndex::new(3);
        let reverse = HalfEdgeIndex::new(6);

        assert_eq!(mesh.twin(first), None);
        assert_eq!(mesh.twin(second), Some(reverse));
        assert_eq!(mesh.twin(reverse), Some(second));
    }

    #[test]
    fn test_too_few_vertices() {
        let err = HalfEdgeMesh::from_polygons(&square(), &[vec![0, 1, 2], vec![0, 1]]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidFace {
                face: 1,
                kind: InvalidFaceKind::TooFewVertices { count: 2 }
            }
        ));
    }

    #[test]
    fn test_index_equal_to_vertex_count() {
        let err = HalfEdgeMesh::from_polygons(&square(), &[vec![0, 1, 4]]).unwrap_err();
        assert!(matches!(
            err,
            MeshError::InvalidFace {
                face: 0,
                kind: InvalidFaceKind::VertexOutOfRange { vertex: 4, n_vertices: 4 }
            }
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_capacity_limit() {
        assert!(check_capacity(3, 3, 1).is_ok());
        assert!(check_capacity(0, HalfEdgeIndex::MAX_LEN, 0).is_ok());

        let err = check_capacity(0, HalfEdgeIndex::MAX_LEN + 1, 0).unwrap_err();
        assert!(matches!(err, MeshError::Core(CoreError::InvalidInput { .. })));
        assert!(err.to_string().contains("半边"));
    }

    #[test]
    fn test_empty_input() {
        let faces: Vec<Vec<usize>> = Vec::new();
        let mesh = HalfEdgeMesh::from_polygons::<[f64; 3], _>(&[], &faces).unwrap();
        assert!(mesh.is_empty());
    }
}
