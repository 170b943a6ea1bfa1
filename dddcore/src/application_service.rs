//! 应用服务（Application Service）
//!
//! 编排用例：加载聚合、调用领域逻辑、发布事件。仅为标记契约。
//!

/// 应用服务标记
pub trait ApplicationService: Send + Sync {}
