// crates/genus_mesh/src/io/mod.rs

//! 网格 IO 模块
//!
//! - Wavefront OBJ (.obj)

pub mod obj;

pub use obj::{ObjLoader, ObjMeshData};
