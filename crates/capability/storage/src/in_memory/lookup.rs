//! 按节点 ID 批量过滤的内存记录表（各查找存储共用）。

use crate::error::StorageError;
use crate::models::{
    ExceptionRecord, HostAlarmRecord, PumpingUnitManufacturerRecord, PumpingUnitRecord, RodRecord,
};
use crate::validation::normalize_node_ids;
use std::collections::HashSet;
use std::sync::RwLock;

/// 带节点 ID 的记录。
pub(crate) trait NodeKeyed {
    fn node_id(&self) -> &str;
}

impl NodeKeyed for RodRecord {
    fn node_id(&self) -> &str {
        &self.node_id
    }
}

impl NodeKeyed for PumpingUnitRecord {
    fn node_id(&self) -> &str {
        &self.node_id
    }
}

impl NodeKeyed for PumpingUnitManufacturerRecord {
    fn node_id(&self) -> &str {
        &self.node_id
    }
}

impl NodeKeyed for ExceptionRecord {
    fn node_id(&self) -> &str {
        &self.node_id
    }
}

impl NodeKeyed for HostAlarmRecord {
    fn node_id(&self) -> &str {
        &self.node_id
    }
}

/// RwLock + Vec 的记录表，保持插入顺序。
pub(crate) struct NodeRecords<T> {
    records: RwLock<Vec<T>>,
}

impl<T: NodeKeyed + Clone> NodeRecords<T> {
    pub(crate) fn new(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub(crate) fn push(&self, record: T) -> Result<(), StorageError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        records.push(record);
        Ok(())
    }

    /// 一次性返回所有请求节点的记录（大小写不敏感匹配节点 ID）。
    pub(crate) fn batch(&self, node_ids: &[String]) -> Result<Vec<T>, StorageError> {
        let wanted: HashSet<String> = normalize_node_ids(node_ids)
            .into_iter()
            .map(|id| id.to_ascii_lowercase())
            .collect();
        if wanted.is_empty() {
            return Ok(Vec::new());
        }
        let records = self
            .records
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(records
            .iter()
            .filter(|item| wanted.contains(&item.node_id().to_ascii_lowercase()))
            .cloned()
            .collect())
    }

    pub(crate) fn len(&self) -> usize {
        self.records.read().map(|items| items.len()).unwrap_or(0)
    }
}
