//! 规约（Specification）模式
//!
//! 将业务规则封装为可复用、可组合、可测试的布尔谓词。组合规约（AND/OR/NOT）
//! 只持有子规约，不缓存结果，每次求值都会重新求值全部叶子规约。
//!
use std::marker::PhantomData;
use std::ops;

/// 规约模式的核心 trait
///
/// 用于封装业务规则，使其可复用、可组合和可测试
pub trait Specification<T> {
    /// 检查候选对象是否满足规约
    fn is_satisfied_by(&self, candidate: &T) -> bool;

    /// 与另一个规约进行 AND 组合
    fn and<S>(self, other: S) -> AndSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        AndSpecification::new(Box::new(self), Box::new(other))
    }

    /// 与另一个规约进行 OR 组合
    fn or<S>(self, other: S) -> OrSpecification<T>
    where
        Self: Sized + 'static,
        S: Specification<T> + 'static,
    {
        OrSpecification::new(Box::new(self), Box::new(other))
    }

    /// 对规约进行 NOT 操作
    fn not(self) -> NotSpecification<T>
    where
        Self: Sized + 'static,
    {
        NotSpecification::new(Box::new(self))
    }

    /// 擦除具体类型，便于放入集合或在运行时组装
    fn boxed(self) -> Box<dyn Specification<T>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// 使得可以直接使用 Box 类型（含 `Box<dyn Specification<T>>`）的规约
impl<T, S> Specification<T> for Box<S>
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.as_ref().is_satisfied_by(candidate)
    }
}

impl<T, S> Specification<T> for &S
where
    S: Specification<T> + ?Sized,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

/// AND 组合规约
///
/// 当两个规约都满足时，组合规约才满足
pub struct AndSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> AndSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for AndSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) && self.right.is_satisfied_by(candidate)
    }
}

/// OR 组合规约
///
/// 当任意一个规约满足时，组合规约就满足
pub struct OrSpecification<T> {
    left: Box<dyn Specification<T>>,
    right: Box<dyn Specification<T>>,
}

impl<T> OrSpecification<T> {
    pub fn new(left: Box<dyn Specification<T>>, right: Box<dyn Specification<T>>) -> Self {
        Self { left, right }
    }
}

impl<T> Specification<T> for OrSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.left.is_satisfied_by(candidate) || self.right.is_satisfied_by(candidate)
    }
}

/// NOT 规约
///
/// 当内部规约不满足时，NOT 规约才满足
pub struct NotSpecification<T> {
    inner: Box<dyn Specification<T>>,
}

impl<T> NotSpecification<T> {
    pub fn new(inner: Box<dyn Specification<T>>) -> Self {
        Self { inner }
    }
}

impl<T> Specification<T> for NotSpecification<T> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.inner.is_satisfied_by(candidate)
    }
}

/// 以闭包表达的叶子规约
pub struct PredicateSpecification<T, F> {
    predicate: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T, F> Specification<T> for PredicateSpecification<T, F>
where
    F: Fn(&T) -> bool,
{
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (self.predicate)(candidate)
    }
}

/// 由闭包构造叶子规约
///
/// ```
/// use dddcore::specification::{Specification, predicate};
///
/// let adult = predicate(|age: &u32| *age >= 18);
/// let senior = predicate(|age: &u32| *age >= 65);
/// let working_age = adult & !senior;
///
/// assert!(working_age.is_satisfied_by(&30));
/// assert!(!working_age.is_satisfied_by(&70));
/// assert!(!working_age.is_satisfied_by(&12));
/// ```
pub fn predicate<T, F>(predicate: F) -> PredicateSpecification<T, F>
where
    F: Fn(&T) -> bool,
{
    PredicateSpecification {
        predicate,
        _marker: PhantomData,
    }
}

// 运算符语法糖：`a & b`、`a | b`、`!a`
macro_rules! impl_operators {
    ([$($generics:tt)*] $ty:ty) => {
        impl<T: 'static, $($generics)* R> ops::BitAnd<R> for $ty
        where
            R: Specification<T> + 'static,
        {
            type Output = AndSpecification<T>;

            fn bitand(self, rhs: R) -> Self::Output {
                Specification::and(self, rhs)
            }
        }

        impl<T: 'static, $($generics)* R> ops::BitOr<R> for $ty
        where
            R: Specification<T> + 'static,
        {
            type Output = OrSpecification<T>;

            fn bitor(self, rhs: R) -> Self::Output {
                Specification::or(self, rhs)
            }
        }

        impl<T: 'static, $($generics)*> ops::Not for $ty {
            type Output = NotSpecification<T>;

            fn not(self) -> Self::Output {
                Specification::not(self)
            }
        }
    };
}

impl_operators!([] AndSpecification<T>);
impl_operators!([] OrSpecification<T>);
impl_operators!([] NotSpecification<T>);
impl_operators!([F: Fn(&T) -> bool + 'static,] PredicateSpecification<T, F>);
