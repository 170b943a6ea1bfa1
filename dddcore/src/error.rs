//! 领域层错误定义
//!
//! 仅一种领域错误：业务不变量被违反。基础设施错误不在此列。
//!
use thiserror::Error;

/// 领域规则被违反时由应用代码抛出的错误
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for DomainError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for DomainError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
