//! 标识（Identity）
//!
//! 包装单个字符串令牌的不透明标识，按令牌值比较与哈希，创建后不可变。
//! 新标识由 `IdGenerator` 生成，默认实现为 128 位随机数（UUID v4）的十六进制形式；
//! 从存储重建时使用 `Identity::from_string` 包装既有令牌。
//!
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::value_object::ValueObject;

/// 实体标识
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// 使用默认生成器创建全新的标识
    ///
    /// ```
    /// use dddcore::identity::Identity;
    ///
    /// assert_ne!(Identity::generate(), Identity::generate());
    /// ```
    pub fn generate() -> Self {
        UuidGenerator.next_identity()
    }

    /// 使用注入的生成器创建标识
    pub fn generate_with<G>(generator: &G) -> Self
    where
        G: IdGenerator + ?Sized,
    {
        generator.next_identity()
    }

    /// 包装已有令牌（例如从存储中重建）
    ///
    /// ```
    /// use dddcore::identity::Identity;
    ///
    /// let id = Identity::from_string("12345-ABCDE");
    /// assert_eq!(id.to_string(), "12345-ABCDE");
    /// ```
    pub fn from_string(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 每次调用都生成新标识，避免所有默认实体共享同一个标识
impl Default for Identity {
    fn default() -> Self {
        Self::generate()
    }
}

impl ValueObject for Identity {}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identity {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_string(s))
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Identity {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Identity {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}

/// 标识生成器：封装随机源，便于在测试中替换为确定性实现
pub trait IdGenerator: Send + Sync {
    fn next_identity(&self) -> Identity;
}

/// 基于 UUID v4 的生成器，输出 32 位小写十六进制令牌
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_identity(&self) -> Identity {
        let token = Uuid::new_v4().simple().to_string();
        tracing::trace!(identity = %token, "generated identity");
        Identity(token)
    }
}
