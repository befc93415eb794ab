//! 抽油机型号内存存储实现
//!
//! 仅用于本地演示、快照渲染和测试。

use crate::error::StorageError;
use crate::in_memory::lookup::NodeRecords;
use crate::models::PumpingUnitRecord;
use crate::traits::PumpingUnitStore;
use domain::RequestContext;

/// 抽油机型号内存存储
pub struct InMemoryPumpingUnitStore {
    records: NodeRecords<PumpingUnitRecord>,
}

impl InMemoryPumpingUnitStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// 使用初始记录创建存储
    pub fn with_records(records: Vec<PumpingUnitRecord>) -> Self {
        Self {
            records: NodeRecords::new(records),
        }
    }

    /// 追加一条记录
    pub fn insert(&self, record: PumpingUnitRecord) -> Result<(), StorageError> {
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

impl Default for InMemoryPumpingUnitStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PumpingUnitStore for InMemoryPumpingUnitStore {
    async fn get_unit_names(
        &self,
        _ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<PumpingUnitRecord>, StorageError> {
        self.records.batch(node_ids)
    }
}
