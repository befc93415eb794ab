//! 异常内存存储实现
//!
//! 仅用于本地演示、快照渲染和测试。

use crate::error::StorageError;
use crate::in_memory::lookup::NodeRecords;
use crate::models::ExceptionRecord;
use crate::traits::ExceptionStore;
use domain::RequestContext;

/// 异常内存存储
pub struct InMemoryExceptionStore {
    records: NodeRecords<ExceptionRecord>,
}

impl InMemoryExceptionStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// 使用初始记录创建存储
    pub fn with_records(records: Vec<ExceptionRecord>) -> Self {
        Self {
            records: NodeRecords::new(records),
        }
    }

    /// 追加一条记录
    pub fn insert(&self, record: ExceptionRecord) -> Result<(), StorageError> {
        self.records.push(record)
    }

    /// 记录数量（用于测试）
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryExceptionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ExceptionStore for InMemoryExceptionStore {
    async fn get_exceptions(
        &self,
        _ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<ExceptionRecord>, StorageError> {
        self.records.batch(node_ids)
    }
}
