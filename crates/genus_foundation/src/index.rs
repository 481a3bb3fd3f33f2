// crates/genus_foundation/src/index.rs

//! 强类型索引系统
//!
//! 使用泛型 `Idx<T>` 实现类型安全的整数索引，半边图中所有交叉引用
//! （origin/twin/next/prev/face）均以此类型存储，避免引用环。
//!
//! # 设计目标
//!
//! 1. **类型安全**: 编译期区分顶点/半边/面索引
//! 2. **零开销**: 与 `u32` 内存布局相同
//! 3. **哨兵值**: `INVALID` 表示"无"（如边界半边的 twin）
//!
//! # 示例
//!
//! ```
//! use genus_foundation::index::{HalfEdgeIndex, VertexIndex};
//!
//! let v = VertexIndex::from_usize(3);
//! assert!(v.is_valid());
//! assert_eq!(v.as_usize(), 3);
//!
//! let twin = HalfEdgeIndex::INVALID;
//! assert_eq!(twin.to_option(), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// 无效索引标记
const INVALID_INDEX: u32 = u32::MAX;

// ============================================================================
// 标记类型 (Phantom Types)
// ============================================================================

/// Arena 标记 trait，用于区分不同用途的索引
pub trait ArenaTag: 'static + Copy + Send + Sync {
    /// 用于调试输出的短名称
    const NAME: &'static str;
}

/// 顶点索引标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexTag;

/// 半边索引标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfEdgeTag;

/// 面索引标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceTag;

impl ArenaTag for VertexTag {
    const NAME: &'static str = "V";
}

impl ArenaTag for HalfEdgeTag {
    const NAME: &'static str = "HE";
}

impl ArenaTag for FaceTag {
    const NAME: &'static str = "F";
}

// ============================================================================
// 泛型索引类型
// ============================================================================

/// 轻量级类型安全索引（4字节）
///
/// 使用 `PhantomData<fn() -> T>` 使 `Copy`/`Send`/`Sync` 不依赖 `T`。
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Idx<T> {
    index: u32,
    #[serde(skip)]
    _marker: PhantomData<fn() -> T>,
}

// 手动实现，derive 会给 T 加上多余的约束
impl<T> Copy for Idx<T> {}

impl<T> Clone for Idx<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Idx<T> {
    /// 无效索引常量
    pub const INVALID: Self = Self {
        index: INVALID_INDEX,
        _marker: PhantomData,
    };

    /// 创建新索引
    #[inline]
    pub const fn new(index: u32) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// 单个 Arena 最多容纳的元素数，有效索引为 `0..MAX_LEN`
    pub const MAX_LEN: usize = INVALID_INDEX as usize;

    /// 从 usize 创建，超出索引空间时返回 None
    #[inline]
    pub fn try_from_usize(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&i| i != INVALID_INDEX)
            .map(Self::new)
    }

    /// 从 usize 创建
    ///
    /// # Panics
    ///
    /// `index >= MAX_LEN` 时 panic（release 下同样检查）。
    /// 构建半边图前已用 `MAX_LEN` 检查规模，正常路径不会触发。
    #[inline]
    pub fn from_usize(index: usize) -> Self {
        match Self::try_from_usize(index) {
            Some(idx) => idx,
            None => panic!("index {index} overflows u32 index space"),
        }
    }

    /// 获取索引值
    #[inline]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// 获取索引值（usize）
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.index as usize
    }

    /// 判断索引是否有效
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.index != INVALID_INDEX
    }

    /// 判断索引是否无效
    #[inline]
    pub const fn is_invalid(self) -> bool {
        !self.is_valid()
    }

    /// 转换为 `Option<Self>`，INVALID 映射为 None
    #[inline]
    pub fn to_option(self) -> Option<Self> {
        if self.is_valid() {
            Some(self)
        } else {
            None
        }
    }
}

// ============================================================================
// Trait 实现
// ============================================================================

impl<T> Default for Idx<T> {
    fn default() -> Self {
        Self::INVALID
    }
}

impl<T> PartialEq for Idx<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl<T> Eq for Idx<T> {}

impl<T> PartialOrd for Idx<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Idx<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index.cmp(&other.index)
    }
}

impl<T> Hash for Idx<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl<T: ArenaTag> fmt::Debug for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}({})", T::NAME, self.index)
        } else {
            write!(f, "{}(INVALID)", T::NAME)
        }
    }
}

impl<T: ArenaTag> fmt::Display for Idx<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl<T> From<usize> for Idx<T> {
    #[inline]
    fn from(value: usize) -> Self {
        Self::from_usize(value)
    }
}

impl<T> From<Idx<T>> for usize {
    #[inline]
    fn from(idx: Idx<T>) -> Self {
        idx.as_usize()
    }
}

// ============================================================================
// 类型别名
// ============================================================================

/// 顶点索引
pub type VertexIndex = Idx<VertexTag>;

/// 半边索引
pub type HalfEdgeIndex = Idx<HalfEdgeTag>;

/// 面索引
pub type FaceIndex = Idx<FaceTag>;
