//! 控制器（POC）类型列。

use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use tracing::debug;
use wms_storage::{ColumnData, LookupKind, PocTypeRecord, PocTypeStore, ReferenceCache};

/// 控制器类型列表在参考数据缓存中的键。
pub const POC_TYPES_CACHE_KEY: &str = "poc-types";

/// 把 `tblNodeMaster.POCTYPE` 翻译为控制器类型描述。
///
/// 查找顺序：预加载列表 → 批量数据 → 参考数据缓存（`get_all`）→ 单条 `get`。
pub struct PocTypeFormatter {
    store: Arc<dyn PocTypeStore>,
    cache: Option<ReferenceCache<Vec<PocTypeRecord>>>,
    preloaded: Option<Vec<PocTypeRecord>>,
}

impl PocTypeFormatter {
    pub fn new(store: Arc<dyn PocTypeStore>) -> Self {
        Self {
            store,
            cache: None,
            preloaded: None,
        }
    }

    pub fn with_cache(mut self, cache: ReferenceCache<Vec<PocTypeRecord>>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// 离线模式：只使用给定列表，不访问存储。
    pub fn with_preloaded(mut self, poc_types: Vec<PocTypeRecord>) -> Self {
        self.preloaded = Some(poc_types);
        self
    }

    async fn describe(
        &self,
        poc_type: i32,
        ctx: &FormatContext<'_>,
    ) -> Result<Option<String>, FormatError> {
        if let Some(list) = &self.preloaded {
            return Ok(find_description(list, poc_type));
        }
        if let Some(ColumnData::PocTypes(list)) = ctx.bulk {
            return Ok(find_description(list, poc_type));
        }
        if let Some(cache) = &self.cache {
            let list = cache
                .try_get_with(
                    POC_TYPES_CACHE_KEY.to_string(),
                    self.store.get_all(ctx.request),
                )
                .await?;
            return Ok(find_description(&list, poc_type));
        }
        let record = self.store.get(ctx.request, poc_type).await?;
        Ok(record.map(|record| record.description))
    }
}

fn find_description(list: &[PocTypeRecord], poc_type: i32) -> Option<String> {
    list.iter()
        .find(|record| record.poc_type == poc_type)
        .map(|record| record.description.clone())
}

#[async_trait]
impl ColumnFormatter for PocTypeFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::PocType
    }

    fn lookup(&self) -> Option<LookupKind> {
        Some(LookupKind::PocType)
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let parsed = row
            .text(fields::POC_TYPE)
            .and_then(|text| text.trim().parse::<i32>().ok());
        let Some(poc_type) = parsed else {
            cell.clear_value();
            return Ok(());
        };
        match self.describe(poc_type, ctx).await? {
            Some(description) => cell.set_value(description),
            None => {
                debug!(
                    target: "wms.formatting",
                    correlation_id = %ctx.correlation_id(),
                    poc_type,
                    "poc_type_not_found"
                );
                cell.clear_value();
            }
        }
        Ok(())
    }

    async fn perform_format(
        &self,
        _row: &DataRow,
        _cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        Ok(())
    }
}
