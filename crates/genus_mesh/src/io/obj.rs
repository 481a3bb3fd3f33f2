// crates/genus_mesh/src/io/obj.rs

//! Wavefront OBJ 读取
//!
//! 只读取几何与连接关系：
//!
//! - `v x y z [w]`: 取前三个坐标
//! - `f a b c ...`: 引用为 1 起始，可带 `/vt/vn` 后缀
//!
//! 其余行（注释、`vn`、`vt`、`o`、`g`、`s`、`usemtl`、`mtllib` 等）忽略。
//! 面的边数与索引范围不在此检查，由半边构建统一报告。
//!
//! # 示例
//!
//! ```ignore
//! use genus_mesh::io::obj::ObjLoader;
//!
//! let data = ObjLoader::load("bunny.obj")?;
//! println!("Loaded {} vertices and {} faces", data.n_vertices(), data.n_faces());
//! ```

use crate::error::{MeshError, MeshResult};
use genus_foundation::error::CoreError;
use genus_foundation::geometry::Point3D;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

const FORMAT: &str = "OBJ";

/// OBJ 加载的网格数据
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjMeshData {
    /// 顶点坐标
    pub positions: Vec<Point3D>,
    /// 面顶点索引（0 起始）
    pub faces: Vec<Vec<usize>>,
}

impl ObjMeshData {
    /// 顶点数量
    pub fn n_vertices(&self) -> usize {
        self.positions.len()
    }

    /// 面数量
    pub fn n_faces(&self) -> usize {
        self.faces.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.faces.is_empty()
    }
}

/// OBJ 文件加载器
pub struct ObjLoader;

impl ObjLoader {
    /// 加载 OBJ 文件
    pub fn load<P: AsRef<Path>>(path: P) -> MeshResult<ObjMeshData> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CoreError::file_not_found(path)
            } else {
                CoreError::io_with_source(format!("无法打开 {}", path.display()), e)
            }
        })?;
        let data = Self::parse(BufReader::new(file), &path.display().to_string())?;
        debug!(
            path = %path.display(),
            n_vertices = data.n_vertices(),
            n_faces = data.n_faces(),
            "OBJ 加载完成"
        );
        Ok(data)
    }

    /// 从 reader 加载
    pub fn load_from_reader<R: BufRead>(reader: R) -> MeshResult<ObjMeshData> {
        Self::parse(reader, "<reader>")
    }

    fn parse<R: BufRead>(reader: R, file: &str) -> MeshResult<ObjMeshData> {
        let mut data = ObjMeshData::default();

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line.map_err(|e| {
                CoreError::io_with_source(format!("读取 {} 第 {} 行失败", file, line_no), e)
            })?;

            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let position = Self::parse_vertex(tokens, file, line_no)?;
                    data.positions.push(position);
                }
                Some("f") => {
                    let face = Self::parse_face(tokens, file, line_no)?;
                    data.faces.push(face);
                }
                _ => {}
            }
        }

        Ok(data)
    }

    fn parse_vertex<'a>(
        tokens: impl Iterator<Item = &'a str>,
        file: &str,
        line: usize,
    ) -> MeshResult<Point3D> {
        let mut coords = [0.0; 3];
        let mut count = 0;

        for token in tokens.take(3) {
            coords[count] = token.parse::<f64>().map_err(|_| {
                MeshError::mesh_format_error(FORMAT, file, line, format!("无法解析顶点坐标 '{}'", token))
            })?;
            count += 1;
        }

        if count < 3 {
            return Err(MeshError::mesh_format_error(
                FORMAT,
                file,
                line,
                format!("顶点需要 3 个坐标, 实际 {}", count),
            ));
        }

        Ok(Point3D::from(coords))
    }

    fn parse_face<'a>(
        tokens: impl Iterator<Item = &'a str>,
        file: &str,
        line: usize,
    ) -> MeshResult<Vec<usize>> {
        tokens
            .map(|token| {
                let reference = token.split('/').next().unwrap_or(token);
                match reference.parse::<i64>() {
                    Ok(r) if r > 0 => Ok((r - 1) as usize),
                    Ok(r) => Err(MeshError::mesh_format_error(
                        FORMAT,
                        file,
                        line,
                        format!("面顶点引用必须为正数, 实际 {}", r),
                    )),
                    Err(_) => Err(MeshError::mesh_format_error(
                        FORMAT,
                        file,
                        line,
                        format!("无法解析面顶点引用 '{}'", token),
                    )),
                }
            })
            .collect()
    }
}
