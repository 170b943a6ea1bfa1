//! 领域事件（Domain Event）
//!
//! 定义事件载荷需要实现的最小接口（`DomainEvent`：类型级名称 + 构造时冻结的 UTC 时间戳），
//! 以及发布/订阅事件的能力契约（`DomainEventPublisher`、`DomainEventSubscriber`）。
//! 具体的传输/分发实现属于外部协作方。

mod domain_event_trait;
mod publisher;
mod subscriber;

pub use domain_event_trait::DomainEvent;
pub use publisher::DomainEventPublisher;
pub use subscriber::DomainEventSubscriber;
