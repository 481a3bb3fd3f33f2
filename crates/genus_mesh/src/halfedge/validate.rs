// crates/genus_mesh/src/halfedge/validate.rs

//! 半边网格验证
//!
//! 检查半边图的结构不变量。边界半边、孤立顶点和重复有向边不是错误，
//! 只计入警告计数：拓扑分析对这些情况给出数值而不是拒绝。

use super::mesh::HalfEdgeMesh;
use crate::error::{MeshError, MeshResult};
use genus_foundation::index::{FaceIndex, HalfEdgeIndex, VertexIndex};
use std::collections::HashMap;

/// 验证错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// 半边的 next 无效
    #[error("半边 {halfedge} 的 next 无效")]
    InvalidNext { halfedge: HalfEdgeIndex },
    /// 半边的 prev 与 next 不一致
    #[error("半边 {halfedge} 的 prev/next 不一致")]
    InvalidPrev { halfedge: HalfEdgeIndex },
    /// 半边的 twin 不对称或方向不相反
    #[error("半边 {halfedge} 的 twin 不对称")]
    TwinMismatch { halfedge: HalfEdgeIndex },
    /// 半边链不闭合
    #[error("面 {face} 的半边链不闭合")]
    OpenLoop { face: FaceIndex },
    /// 面环上的半边不属于该面
    #[error("半边 {halfedge} 位于面 {face} 的环上但指向其他面")]
    FaceMismatch { face: FaceIndex, halfedge: HalfEdgeIndex },
    /// 顶点的出发边无效
    #[error("顶点 {vertex} 的出发半边无效")]
    InvalidVertexHalfEdge { vertex: VertexIndex },
    /// 面的半边无效
    #[error("面 {face} 的起始半边无效")]
    InvalidFaceHalfEdge { face: FaceIndex },
    /// 半边的 origin 无效
    #[error("半边 {halfedge} 的起点无效")]
    InvalidOrigin { halfedge: HalfEdgeIndex },
    /// 半边的 face 指向无效面
    #[error("半边 {halfedge} 的所属面无效")]
    InvalidFaceRef { halfedge: HalfEdgeIndex },
}

impl ValidationError {
    /// 检查项名称
    pub fn check_name(&self) -> &'static str {
        match self {
            Self::InvalidNext { .. } => "next",
            Self::InvalidPrev { .. } => "prev",
            Self::TwinMismatch { .. } => "twin",
            Self::OpenLoop { .. } => "face_loop",
            Self::FaceMismatch { .. } => "face_loop",
            Self::InvalidVertexHalfEdge { .. } => "vertex_halfedge",
            Self::InvalidFaceHalfEdge { .. } => "face_halfedge",
            Self::InvalidOrigin { .. } => "origin",
            Self::InvalidFaceRef { .. } => "face_ref",
        }
    }

    /// 出错元素的编号
    pub fn element_id(&self) -> usize {
        match self {
            Self::InvalidNext { halfedge }
            | Self::InvalidPrev { halfedge }
            | Self::TwinMismatch { halfedge }
            | Self::FaceMismatch { halfedge, .. }
            | Self::InvalidOrigin { halfedge }
            | Self::InvalidFaceRef { halfedge } => halfedge.as_usize(),
            Self::OpenLoop { face } | Self::InvalidFaceHalfEdge { face } => face.as_usize(),
            Self::InvalidVertexHalfEdge { vertex } => vertex.as_usize(),
        }
    }
}

/// 验证报告
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// 错误列表
    pub errors: Vec<ValidationError>,
    /// 边界半边数（无 twin）
    pub boundary_halfedges: usize,
    /// 孤立顶点数
    pub isolated_vertices: usize,
    /// 被后出现的面覆盖的重复有向边数
    pub overwritten_edges: usize,
}

impl ValidationReport {
    /// 验证是否通过
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// 添加错误
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// 警告总数
    pub fn warnings(&self) -> usize {
        self.boundary_halfedges + self.isolated_vertices + self.overwritten_edges
    }

    /// 有错误时返回第一个错误
    pub fn into_result(self) -> MeshResult<Self> {
        match self.errors.first() {
            Some(err) => Err(MeshError::halfedge_corruption(
                err.check_name(),
                err.element_id(),
                err.to_string(),
            )),
            None => Ok(self),
        }
    }
}

impl HalfEdgeMesh {
    /// 验证网格拓扑完整性
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        for he_idx in self.halfedge_indices() {
            self.validate_halfedge(he_idx, &mut report);
        }

        for v_idx in self.vertex_indices() {
            self.validate_vertex(v_idx, &mut report);
        }

        for f_idx in self.face_indices() {
            self.validate_face(f_idx, &mut report);
        }

        report.overwritten_edges = self.count_overwritten_edges();

        if !report.is_valid() {
            tracing::warn!(errors = report.errors.len(), "半边结构验证未通过");
        }

        report
    }

    /// 验证单个半边
    fn validate_halfedge(&self, he: HalfEdgeIndex, report: &mut ValidationReport) {
        let Some(he_data) = self.halfedge(he) else {
            return;
        };

        if !self.contains_vertex(he_data.origin) {
            report.add_error(ValidationError::InvalidOrigin { halfedge: he });
        }

        // next / prev 双向一致
        match self.halfedge(he_data.next) {
            None => report.add_error(ValidationError::InvalidNext { halfedge: he }),
            Some(next_data) if next_data.prev != he => {
                report.add_error(ValidationError::InvalidPrev { halfedge: he_data.next });
            }
            Some(_) => {}
        }
        match self.halfedge(he_data.prev) {
            Some(prev_data) if prev_data.next == he => {}
            _ => report.add_error(ValidationError::InvalidPrev { halfedge: he }),
        }

        // twin 对称且方向相反
        if he_data.twin.is_valid() {
            let symmetric = self
                .halfedge(he_data.twin)
                .map(|twin_data| twin_data.twin == he)
                .unwrap_or(false);
            let opposite = self.halfedge_target(he_data.twin) == Some(he_data.origin)
                && self.halfedge(he_data.twin).map(|t| t.origin) == self.halfedge_target(he);

            if !symmetric || !opposite {
                report.add_error(ValidationError::TwinMismatch { halfedge: he });
            }
        } else {
            report.boundary_halfedges += 1;
        }

        if !self.contains_face(he_data.face) {
            report.add_error(ValidationError::InvalidFaceRef { halfedge: he });
        }
    }

    /// 验证单个顶点
    fn validate_vertex(&self, v: VertexIndex, report: &mut ValidationReport) {
        let Some(v_data) = self.vertex(v) else {
            return;
        };

        if v_data.is_isolated() {
            report.isolated_vertices += 1;
            return;
        }

        let origin_matches = self
            .halfedge(v_data.halfedge)
            .map(|he| he.origin == v)
            .unwrap_or(false);
        if !origin_matches {
            report.add_error(ValidationError::InvalidVertexHalfEdge { vertex: v });
        }
    }

    /// 验证单个面：环必须闭合，环上每条半边都属于该面
    fn validate_face(&self, f: FaceIndex, report: &mut ValidationReport) {
        let Some(f_data) = self.face(f) else {
            return;
        };

        if !self.contains_halfedge(f_data.halfedge) {
            report.add_error(ValidationError::InvalidFaceHalfEdge { face: f });
            return;
        }

        let start = f_data.halfedge;
        let mut current = start;
        let max_steps = self.n_halfedges();

        for _ in 0..max_steps {
            let Some(he_data) = self.halfedge(current) else {
                report.add_error(ValidationError::OpenLoop { face: f });
                return;
            };

            if he_data.face != f {
                report.add_error(ValidationError::FaceMismatch { face: f, halfedge: current });
            }

            current = he_data.next;
            if current == start {
                return;
            }
        }

        report.add_error(ValidationError::OpenLoop { face: f });
    }

    /// 统计重复出现的有向边（超出首次出现的部分）
    fn count_overwritten_edges(&self) -> usize {
        let mut counts: HashMap<(VertexIndex, VertexIndex), usize> = HashMap::new();
        for (he, he_data) in self.halfedges() {
            if let Some(target) = self.halfedge_target(he) {
                *counts.entry((he_data.origin, target)).or_insert(0) += 1;
            }
        }
        counts.values().map(|&c| c.saturating_sub(1)).sum()
    }
}
