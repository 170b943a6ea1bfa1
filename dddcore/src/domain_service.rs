//! 领域服务（Domain Service）
//!
//! 承载不属于单个实体或值对象的领域逻辑。此处仅为名义上的标记契约，
//! 不定义任何操作，具体输入输出由实现类型自行声明。
//!

/// 领域服务标记
pub trait DomainService: Send + Sync {}
