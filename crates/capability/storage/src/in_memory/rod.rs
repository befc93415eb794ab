//! 抽油杆内存存储实现
//!
//! 仅用于本地演示、快照渲染和测试。

use crate::error::StorageError;
use crate::in_memory::lookup::NodeRecords;
use crate::models::RodRecord;
use crate::traits::RodStore;
use domain::RequestContext;

/// 抽油杆内存存储
pub struct InMemoryRodStore {
    records: NodeRecords<RodRecord>,
}

impl InMemoryRodStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// 使用初始记录创建存储
    pub fn with_records(records: Vec<RodRecord>) -> Self {
        Self {
            records: NodeRecords::new(records),
        }
    }

    /// 追加一条记录
    pub fn insert(&self, record: RodRecord) -> Result<(), StorageError> {
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

impl Default for InMemoryRodStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl RodStore for InMemoryRodStore {
    async fn get_rod_for_group_status(
        &self,
        _ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<RodRecord>, StorageError> {
        // 与数据库查询一致：按节点、杆段序号排序
        let mut items = self.records.batch(node_ids)?;
        items.sort_by(|a, b| a.node_id.cmp(&b.node_id).then(a.rod_num.cmp(&b.rod_num)));
        Ok(items)
    }
}
