//! dddcore 配套过程宏
//!
//! - `#[entity]`：插入 `id: Identity` 字段并实现 `Entity`，相等与哈希仅基于标识
//! - `#[aggregate_root]`：在 `#[entity]` 基础上实现 `AggregateRoot`
//! - `#[value_object]`：派生结构相等所需的 trait 并实现 `ValueObject`
//! - `#[domain_event]`：插入冻结的时间戳字段、实现 `DomainEvent` 并生成构造函数
//!
use proc_macro::TokenStream;

mod derive_utils;
mod domain_event;
mod entity;
mod field_utils;
mod value_object;

/// 实体宏
/// - 若缺失则追加字段 `id: ::dddcore::identity::Identity`，并置于字段最前
/// - 实现 `::dddcore::entity::Entity`（`with_identity`/`id`），其余字段逐一取 `Default::default()`
/// - 以标识实现 `PartialEq`/`Eq`/`Hash`，并移除用户声明的同名派生
/// - 合并派生：Debug（`debug = false` 时关闭）、Clone、Default
#[proc_macro_attribute]
pub fn entity(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item, entity::Kind::Entity)
}

/// 聚合根宏：与 `#[entity]` 相同，额外实现 `::dddcore::aggregate_root::AggregateRoot`
#[proc_macro_attribute]
pub fn aggregate_root(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity::expand(attr, item, entity::Kind::AggregateRoot)
}

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并派生：Debug、Clone、PartialEq、Eq、Default、Serialize、Deserialize
/// - 参数：`#[value_object(debug = bool, eq = bool, default = bool)]`，均默认 true；
///   含浮点字段时使用 `eq = false`；枚举需以 `#[default]` 标注变体才派生 Default
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 领域事件宏
/// - 仅支持具名字段结构体或单元结构体
/// - 插入私有字段 `occurred_at: ::dddcore::clock::Timestamp`
/// - 实现 `::dddcore::domain_event::DomainEvent`，名称取 `name = "..."`，缺省为类型名
/// - 生成构造函数 `new(..)`、`with_timestamp(ts, ..)`、`with_clock(&clock, ..)`
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}
