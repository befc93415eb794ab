//! 控制器类型内存存储实现
//!
//! 仅用于本地演示、快照渲染和测试。

use crate::error::StorageError;
use crate::models::PocTypeRecord;
use crate::traits::PocTypeStore;
use domain::RequestContext;
use std::collections::BTreeMap;
use std::sync::RwLock;

/// 控制器类型内存存储（按类型 ID 排序）
pub struct InMemoryPocTypeStore {
    poc_types: RwLock<BTreeMap<i32, PocTypeRecord>>,
}

impl InMemoryPocTypeStore {
    /// 创建空存储
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// 使用初始记录创建存储（重复 ID 以后者为准）
    pub fn with_records(records: Vec<PocTypeRecord>) -> Self {
        let poc_types = records
            .into_iter()
            .map(|record| (record.poc_type, record))
            .collect();
        Self {
            poc_types: RwLock::new(poc_types),
        }
    }

    /// 写入或覆盖一条记录
    pub fn upsert(&self, record: PocTypeRecord) -> Result<(), StorageError> {
        let mut map = self
            .poc_types
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.insert(record.poc_type, record);
        Ok(())
    }
}

impl Default for InMemoryPocTypeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl PocTypeStore for InMemoryPocTypeStore {
    async fn get(
        &self,
        _ctx: &RequestContext,
        poc_type: i32,
    ) -> Result<Option<PocTypeRecord>, StorageError> {
        let map = self
            .poc_types
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.get(&poc_type).cloned())
    }

    async fn get_all(&self, _ctx: &RequestContext) -> Result<Vec<PocTypeRecord>, StorageError> {
        let map = self
            .poc_types
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.values().cloned().collect())
    }
}
