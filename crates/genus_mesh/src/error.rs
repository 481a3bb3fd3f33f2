// crates/genus_mesh/src/error.rs
//! 网格处理错误类型
//!
//! 包含面定义、文件格式、半边结构等错误定义。
//! 所有错误可转换为 `genus_foundation::CoreError` 向上传播。

use genus_foundation::CoreError;
use thiserror::Error;

/// 网格模块结果类型
pub type MeshResult<T> = Result<T, MeshError>;

/// 无效面的具体原因
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFaceKind {
    /// 面的顶点数少于 3
    #[error("仅有 {count} 个顶点, 至少需要 3 个")]
    TooFewVertices {
        /// 实际顶点数
        count: usize,
    },

    /// 顶点索引越界
    #[error("引用顶点 {vertex} 超出范围 0..{n_vertices}")]
    VertexOutOfRange {
        /// 越界的顶点索引（0 起始）
        vertex: usize,
        /// 顶点总数
        n_vertices: usize,
    },
}

/// 网格错误枚举
#[derive(Error, Debug)]
pub enum MeshError {
    /// 无效面，构建半边图时检测，整个构建失败
    #[error("无效面: 面 {face} {kind}")]
    InvalidFace {
        /// 面在输入序列中的位置
        face: usize,
        /// 具体原因
        kind: InvalidFaceKind,
    },

    /// 网格格式错误
    #[error("网格格式错误: {format}, {file}, 行 {line}: {message}")]
    MeshFormatError {
        format: &'static str,
        file: String,
        line: usize,
        message: String,
    },

    /// 半边结构损坏
    #[error("半边结构损坏: {check}, 元素 {element_id}, {message}")]
    HalfEdgeCorruption {
        check: &'static str,
        element_id: usize,
        message: String,
    },

    /// 基础层错误
    #[error("基础层错误: {0}")]
    Core(#[from] CoreError),
}

/// 转换到 Foundation 层错误
impl From<MeshError> for CoreError {
    fn from(err: MeshError) -> Self {
        match err {
            MeshError::InvalidFace { face, kind } => {
                CoreError::invalid_input(format!("无效面 [{}]: {}", face, kind))
            }
            MeshError::MeshFormatError { format, file, line, message } => {
                CoreError::parse(file, line, format!("[{}] {}", format, message))
            }
            MeshError::HalfEdgeCorruption { check, element_id, message } => {
                CoreError::internal(format!("半边结构损坏 [{}, 元素 {}]: {}", check, element_id, message))
            }
            MeshError::Core(core_err) => core_err,
        }
    }
}

/// 便捷构造函数
impl MeshError {
    pub fn too_few_vertices(face: usize, count: usize) -> Self {
        Self::InvalidFace {
            face,
            kind: InvalidFaceKind::TooFewVertices { count },
        }
    }

    pub fn vertex_out_of_range(face: usize, vertex: usize, n_vertices: usize) -> Self {
        Self::InvalidFace {
            face,
            kind: InvalidFaceKind::VertexOutOfRange { vertex, n_vertices },
        }
    }

    pub fn mesh_format_error(format: &'static str, file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::MeshFormatError {
            format,
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    pub fn halfedge_corruption(check: &'static str, element_id: usize, message: impl Into<String>) -> Self {
        Self::HalfEdgeCorruption {
            check,
            element_id,
            message: message.into(),
        }
    }

    /// 是否为无效面错误
    pub fn is_invalid_face(&self) -> bool {
        matches!(self, Self::InvalidFace { .. })
    }
}
