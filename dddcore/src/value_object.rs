//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象。同一具体类型的两个实例当且仅当
//! 每个具名字段两两相等时相等（逐字段比较，与字段声明顺序无关）；
//! 不同具体类型的实例即使字段完全相同也永不相等。
//!
use std::any::Any;
use std::fmt;

/// 值对象抽象
///
/// 结构相等由 `PartialEq` 提供，通常经由 `#[value_object]` 宏派生。
/// 基础层不强制不可变，调用方应将实例视为不可变值；如需哈希请在具体类型上自行派生。
pub trait ValueObject: Clone + PartialEq + fmt::Debug {}

/// 跨类型的值相等判断
///
/// 仅当 `a` 与 `b` 为同一具体类型且逐字段相等时返回 true。
///
/// ```
/// use dddcore::identity::Identity;
/// use dddcore::value_object::value_eq;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Code(String);
/// impl dddcore::value_object::ValueObject for Code {}
///
/// let id = Identity::from_string("x");
/// assert!(value_eq(&id, &Identity::from_string("x")));
/// assert!(!value_eq(&id, &Code("x".into())));
/// ```
pub fn value_eq<A, B>(a: &A, b: &B) -> bool
where
    A: ValueObject + 'static,
    B: ValueObject + 'static,
{
    (b as &dyn Any).downcast_ref::<A>().is_some_and(|b| a == b)
}
