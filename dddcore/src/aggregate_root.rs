//! 聚合根（AggregateRoot）
//!
//! 作为一组相关对象的一致性/事务边界的实体。本层不附加任何状态或操作，
//! 以整体加载/保存的原子性由仓储实现负责。
//!
use crate::entity::Entity;

/// 聚合根标记：具备实体的全部契约
pub trait AggregateRoot: Entity {}
