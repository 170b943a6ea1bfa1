use chrono::{DateTime, Utc};
use std::fmt;

/// 领域事件载荷需要满足的通用能力边界
///
/// 通常由 `#[domain_event(name = "...")]` 宏实现：宏插入私有字段 `occurred_at`
/// 并生成 `new`/`with_timestamp`/`with_clock` 构造函数，时间戳只在构造时读取一次。
pub trait DomainEvent: fmt::Debug + Send + Sync + 'static {
    /// 事件类型名称（类型级常量）
    const NAME: &'static str;

    /// 事件类型名称
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// 事件发生时间（UTC）
    fn timestamp_utc(&self) -> DateTime<Utc>;
}
