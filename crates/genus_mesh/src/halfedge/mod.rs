// crates/genus_mesh/src/halfedge/mod.rs

//! 半边网格模块
//!
//! # 模块结构
//!
//! - [`mesh`]: 核心数据结构
//! - [`builder`]: 从多边形列表构建半边图
//! - [`traversal`]: 拓扑遍历迭代器
//! - [`validate`]: 拓扑验证

pub mod builder;
pub mod mesh;
pub mod traversal;
pub mod validate;

// 重新导出核心类型
pub use mesh::{Face, HalfEdge, HalfEdgeMesh, Vertex};
pub use traversal::{FaceHalfEdgeIter, FaceVertexIter, VertexOutgoingIter};
pub use validate::{ValidationError, ValidationReport};
