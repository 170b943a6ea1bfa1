use async_trait::async_trait;

use super::DomainEvent;

/// 领域事件发布者：负责投递或排队事件
///
/// 仅为能力契约，本库不提供实现。契约未实现即无法使用：
///
/// ```compile_fail
/// use dddcore::domain_event::DomainEventPublisher;
///
/// struct Bus;
///
/// // 缺少 publish，无法通过编译
/// #[async_trait::async_trait]
/// impl<E: dddcore::domain_event::DomainEvent> DomainEventPublisher<E> for Bus {}
/// ```
///
/// 也无法直接实例化：
///
/// ```compile_fail
/// let publisher = dddcore::domain_event::DomainEventPublisher;
/// ```
#[async_trait]
pub trait DomainEventPublisher<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 发布一个事件
    async fn publish(&self, event: E) -> anyhow::Result<()>;
}
