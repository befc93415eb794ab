//! 存储层错误类型
//!
//! 统一封装查找存储（lookup store）的失败：
//! - 传输/连接错误
//! - 锁失败
//! - 数据一致性错误
//!
//! “未找到”不是错误，查找接口返回空列表或 None。

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}
