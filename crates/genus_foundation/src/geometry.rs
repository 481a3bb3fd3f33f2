// crates/genus_foundation/src/geometry.rs

//! 几何类型定义
//!
//! 拓扑分析只把坐标当作顶点的附加数据携带，不参与计算。

use serde::{Deserialize, Serialize};

/// 3D点
///
/// # 示例
///
/// ```
/// use genus_foundation::geometry::Point3D;
///
/// let p = Point3D::from([1.0, 2.0, 3.0]);
/// assert_eq!(p, Point3D::new(1.0, 2.0, 3.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point3D {
    /// X坐标
    pub x: f64,
    /// Y坐标
    pub y: f64,
    /// Z坐标
    pub z: f64,
}

impl Point3D {
    /// 创建新的3D点
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Point3D {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}
