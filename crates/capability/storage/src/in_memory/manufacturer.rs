//! 抽油机制造商内存存储实现
//!
//! 仅用于本地演示、快照渲染和测试。

use crate::error::StorageError;
use crate::in_memory::lookup::NodeRecords;
use crate::models::PumpingUnitManufacturerRecord;
use crate::traits::PumpingUnitManufacturerStore;
use domain::RequestContext;

/// 抽油机制造商内存存储
pub struct InMemoryPumpingUnitManufacturerStore {
    records: NodeRecords<PumpingUnitManufacturerRecord>,
}

impl InMemoryPumpingUnitManufacturerStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// 使用初始记录创建存储
    pub fn with_records(records: Vec<PumpingUnitManufacturerRecord>) -> Self {
        Self {
            records: NodeRecords::new(records),
        }
    }

    /// 追加一条记录
    pub fn insert(&self, record: PumpingUnitManufacturerRecord) -> Result<(), StorageError> {
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

impl Default for InMemoryPumpingUnitManufacturerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PumpingUnitManufacturerStore for InMemoryPumpingUnitManufacturerStore {
    async fn get_manufacturers(
        &self,
        _ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<PumpingUnitManufacturerRecord>, StorageError> {
        self.records.batch(node_ids)
    }
}
