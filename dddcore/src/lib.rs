//! DDD 领域层基础构件（dddcore）
//!
//! 提供以 DDD 为中心的最小抽象集合，供应用代码实现：
//! - 标识（`identity`）、实体（`entity`）与聚合根（`aggregate_root`）
//! - 值对象（`value_object`）：以结构相等为准
//! - 领域事件（`domain_event`）及其发布/订阅能力契约
//! - 规约（`specification`）：AND/OR/NOT 组合
//! - 领域服务、应用服务与仓储的标记契约
//!
//! 本 crate 不涉及持久化、事务与消息传输，相关实现属于外部协作方。
//! 配套的属性宏（`#[entity]`、`#[aggregate_root]`、`#[value_object]`、
//! `#[domain_event]`）位于 `dddcore-macros`。
//!
pub mod aggregate_root;
pub mod application_service;
pub mod clock;
pub mod domain_event;
pub mod domain_service;
pub mod entity;
pub mod error;
pub mod identity;
pub mod repository;
pub mod specification;
pub mod value_object;

// 允许在本 crate 内部通过 ::dddcore 进行自引用，
// 以便过程宏在本 crate 的单元测试中也能解析到 ::dddcore 路径。
extern crate self as dddcore;
