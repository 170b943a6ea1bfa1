use async_trait::async_trait;

use super::DomainEvent;

/// 领域事件订阅者：处理单个事件
///
/// 每次调用完成（或失败）一个事件的处理；顺序、重试与投递语义由外部传输层决定。
///
/// ```compile_fail
/// use dddcore::domain_event::{DomainEvent, DomainEventSubscriber};
///
/// struct Projector;
///
/// // 缺少 handle_event，无法通过编译
/// #[async_trait::async_trait]
/// impl<E: DomainEvent> DomainEventSubscriber<E> for Projector {}
/// ```
///
/// ```compile_fail
/// let subscriber = dddcore::domain_event::DomainEventSubscriber;
/// ```
#[async_trait]
pub trait DomainEventSubscriber<E>: Send + Sync
where
    E: DomainEvent,
{
    /// 处理一个事件
    async fn handle_event(&self, event: &E) -> anyhow::Result<()>;
}
