//! 时钟（Clock）
//!
//! 领域事件在构造时读取当前 UTC 时间；将时钟抽象为协作者，
//! 便于测试与回放时替换为确定的时间源。
//!
use chrono::{DateTime, Utc};

/// 领域层使用的 UTC 时间戳
pub type Timestamp = DateTime<Utc>;

/// UTC 时间源
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 系统时钟
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 固定时钟：始终返回构造时给定的时刻
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
