// crates/genus_foundation/src/arena.rs

//! 追加式 Arena 存储
//!
//! 半边图构建完成后只读，因此 Arena 只支持追加，不支持删除与槽位复用。
//! 索引即元素在内部向量中的位置，插入顺序即遍历顺序。
//!
//! # 示例
//!
//! ```
//! use genus_foundation::arena::Arena;
//! use genus_foundation::index::VertexTag;
//!
//! let mut arena: Arena<i32, VertexTag> = Arena::new();
//! let idx = arena.push(42);
//! assert_eq!(arena[idx], 42);
//! assert_eq!(arena.get(idx), Some(&42));
//! ```

use crate::index::{ArenaTag, Idx};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// 追加式类型安全存储
///
/// # 类型参数
/// - `T`: 存储的元素类型
/// - `Tag`: 标记类型，防止不同 Arena 的索引混用
#[derive(Clone)]
pub struct Arena<T, Tag: ArenaTag> {
    items: Vec<T>,
    _marker: PhantomData<Tag>,
}

impl<T, Tag: ArenaTag> Default for Arena<T, Tag> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug, Tag: ArenaTag> std::fmt::Debug for Arena<T, Tag> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arena")
            .field("tag", &Tag::NAME)
            .field("items", &self.items)
            .finish()
    }
}

impl<T, Tag: ArenaTag> Arena<T, Tag> {
    /// 创建空 Arena
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// 创建指定容量的 Arena
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            _marker: PhantomData,
        }
    }

    /// 元素数量
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 追加元素并返回其索引
    ///
    /// # Panics
    ///
    /// 元素数达到 [`Idx::MAX_LEN`] 时 panic。
    #[inline]
    pub fn push(&mut self, value: T) -> Idx<Tag> {
        let idx = Idx::from_usize(self.items.len());
        self.items.push(value);
        idx
    }

    /// 获取元素，索引无效或越界时返回 None
    #[inline]
    pub fn get(&self, idx: Idx<Tag>) -> Option<&T> {
        if idx.is_invalid() {
            return None;
        }
        self.items.get(idx.as_usize())
    }

    /// 获取元素的可变引用
    #[inline]
    pub fn get_mut(&mut self, idx: Idx<Tag>) -> Option<&mut T> {
        if idx.is_invalid() {
            return None;
        }
        self.items.get_mut(idx.as_usize())
    }

    /// 索引是否指向已存在的元素
    #[inline]
    pub fn contains(&self, idx: Idx<Tag>) -> bool {
        idx.is_valid() && idx.as_usize() < self.items.len()
    }

    /// 按插入顺序遍历 (索引, 元素)
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Idx<Tag>, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (Idx::from_usize(i), item))
    }

    /// 按插入顺序遍历索引
    pub fn indices(&self) -> impl ExactSizeIterator<Item = Idx<Tag>> {
        (0..self.items.len()).map(Idx::from_usize)
    }

    /// 以切片形式访问全部元素
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T, Tag: ArenaTag> Index<Idx<Tag>> for Arena<T, Tag> {
    type Output = T;

    #[inline]
    fn index(&self, idx: Idx<Tag>) -> &T {
        &self.items[idx.as_usize()]
    }
}

impl<T, Tag: ArenaTag> IndexMut<Idx<Tag>> for Arena<T, Tag> {
    #[inline]
    fn index_mut(&mut self, idx: Idx<Tag>) -> &mut T {
        &mut self.items[idx.as_usize()]
    }
}

impl<T, Tag: ArenaTag> FromIterator<T> for Arena<T, Tag> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}
