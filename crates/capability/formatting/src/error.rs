use std::sync::Arc;
use wms_storage::StorageError;

/// 格式化错误。
///
/// 引擎自身只抛出参数错误；查找存储的失败原样透传。
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// 参考数据缓存共享加载失败时返回 `Arc<StorageError>`。
impl From<Arc<StorageError>> for FormatError {
    fn from(err: Arc<StorageError>) -> Self {
        FormatError::Storage(StorageError::clone(&err))
    }
}

impl FormatError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, FormatError::InvalidArgument(_))
    }
}
