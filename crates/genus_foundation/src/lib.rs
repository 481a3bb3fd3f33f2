// crates/genus_foundation/src/lib.rs

//! Genus Foundation Layer
//!
//! 基础层，提供网格拓扑分析所需的基础抽象。
//!
//! # 模块概览
//!
//! - [`index`]: 强类型索引系统
//! - [`arena`]: 追加式 Arena 存储
//! - [`geometry`]: 3D 点类型
//! - [`error`]: 基础错误类型
//!
//! # 示例
//!
//! ```
//! use genus_foundation::{Arena, HalfEdgeIndex};
//! use genus_foundation::index::HalfEdgeTag;
//!
//! let mut arena: Arena<u32, HalfEdgeTag> = Arena::new();
//! let idx: HalfEdgeIndex = arena.push(7);
//! assert_eq!(arena[idx], 7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arena;
pub mod error;
pub mod geometry;
pub mod index;

// 重导出常用类型
pub use arena::Arena;
pub use error::{CoreError, CoreResult};
pub use geometry::Point3D;
pub use index::{FaceIndex, HalfEdgeIndex, Idx, VertexIndex};
