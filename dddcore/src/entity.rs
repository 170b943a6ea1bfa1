//! 实体（Entity）基础抽象
//!
//! 实体以标识区分而非属性：同一具体类型的两个实体当且仅当标识相等时相等，
//! 与其余字段无关。标识在构造时确定（缺省时自动生成），此后不可更改。
//!
use std::any::Any;

use crate::identity::{IdGenerator, Identity};

/// 具备唯一标识的实体抽象
///
/// 通常由 `#[entity]` 宏实现，宏同时生成仅比较标识的 `PartialEq`/`Eq`/`Hash`。
/// 由于 `PartialEq` 只在同类型间实现，相等性天然限定在具体类型之内。
pub trait Entity: Sized {
    /// 使用给定标识创建实体
    fn with_identity(id: Identity) -> Self;

    /// 获取实体标识
    fn id(&self) -> &Identity;

    /// 使用可选标识创建实体，缺省时为本次调用生成新标识
    fn new(id: Option<Identity>) -> Self {
        Self::with_identity(id.unwrap_or_else(Identity::generate))
    }

    /// 使用注入的生成器分配标识
    fn new_with<G>(generator: &G) -> Self
    where
        G: IdGenerator + ?Sized,
    {
        Self::with_identity(Identity::generate_with(generator))
    }

    /// 是否与另一实体具有相同标识
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// 跨类型的实体相等判断
///
/// 仅当 `a` 与 `b` 为同一具体类型且标识相等时返回 true；
/// 不同类型的实体即使标识相同也不相等。
pub fn entity_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Entity + 'static,
    B: Entity + 'static,
{
    (b as &dyn Any)
        .downcast_ref::<A>()
        .is_some_and(|b| a.id() == b.id())
}
