//! 仓储（Repository）
//!
//! 以聚合为单位加载与保存的持久化契约。本库只声明仓储与其聚合类型的对应关系，
//! 加载/保存等操作及事务原子性由具体实现（外部协作方）提供。
//!
use crate::aggregate_root::AggregateRoot;

/// 仓储标记：关联所管理的聚合根类型
pub trait Repository: Send + Sync {
    type Aggregate: AggregateRoot;
}
