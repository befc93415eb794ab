//! 分组状态表格组装。
//!
//! 宿主侧流程：为每列选择格式化器，按查找种类每种只批量取数一次，
//! 再对每行每列依次执行 `calculate_value` 与 `perform_format`。

use domain::{DataRow, GroupStatusColumn, RequestContext, RowColumnModel};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use wms_column_cache::ColumnDataCacheService;
use wms_formatting::{
    ColumnFormatter, ColumnFormatterFactory, FormatContext, FormatError, calculate_cell,
    format_cell,
};
use wms_storage::{ColumnData, LookupKind, StorageError};

/// 表格组装错误。
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("format error: {0}")]
    Format(#[from] FormatError),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

/// 一行输出。
#[derive(Debug, Clone, PartialEq)]
pub struct GridRow {
    pub node_id: Option<String>,
    /// 与列定义同序。
    pub cells: Vec<RowColumnModel>,
}

/// 组装结果。
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatusGrid {
    pub columns: Vec<GroupStatusColumn>,
    pub rows: Vec<GridRow>,
    /// 找不到格式化器的列（其单元格留空）。
    pub unresolved: Vec<String>,
}

impl GroupStatusGrid {
    pub fn cell(&self, row: usize, column: usize) -> Option<&RowColumnModel> {
        self.rows.get(row).and_then(|row| row.cells.get(column))
    }
}

struct GridInner {
    factory: Arc<ColumnFormatterFactory>,
    cache: ColumnDataCacheService,
}

/// 分组状态表格组装入口。
#[derive(Clone)]
pub struct GroupStatusGridBuilder {
    inner: Arc<GridInner>,
}

impl GroupStatusGridBuilder {
    pub fn new(factory: Arc<ColumnFormatterFactory>, cache: ColumnDataCacheService) -> Self {
        Self {
            inner: Arc::new(GridInner { factory, cache }),
        }
    }

    pub async fn build(
        &self,
        ctx: &RequestContext,
        columns: &[GroupStatusColumn],
        rows: &[DataRow],
    ) -> Result<GroupStatusGrid, GridError> {
        let formatters = self.resolve_columns(ctx, columns);
        let unresolved: Vec<String> = columns
            .iter()
            .zip(&formatters)
            .filter(|(_, formatter)| formatter.is_none())
            .map(|(column, _)| column.field_heading.clone())
            .collect();

        let node_ids: Vec<String> = rows.iter().filter_map(DataRow::node_id).collect();
        let bulk = self.load_lookups(ctx, &formatters, &node_ids).await?;

        let mut grid_rows = Vec::with_capacity(rows.len());
        let mut formatted = 0u64;
        for row in rows {
            let mut cells = Vec::with_capacity(columns.len());
            for (column, formatter) in columns.iter().zip(&formatters) {
                let mut cell = RowColumnModel::new();
                if let Some(formatter) = formatter {
                    let data = formatter.lookup().and_then(|kind| bulk.get(&kind));
                    let format_ctx = FormatContext::new(ctx).with_bulk(data);
                    calculate_cell(
                        formatter.as_ref(),
                        Some(row),
                        Some(&mut cell),
                        Some(column),
                        &format_ctx,
                    )
                    .await?;
                    format_cell(
                        formatter.as_ref(),
                        Some(row),
                        Some(&mut cell),
                        Some(column),
                        &format_ctx,
                    )
                    .await?;
                    formatted += 1;
                }
                cells.push(cell);
            }
            grid_rows.push(GridRow {
                node_id: row.node_id(),
                cells,
            });
        }
        wms_telemetry::record_cells_formatted(formatted);
        debug!(
            target: "wms.grid",
            correlation_id = %ctx.correlation_id,
            rows = rows.len(),
            columns = columns.len(),
            unresolved = unresolved.len(),
            lookups = bulk.len(),
            cells = formatted,
            "grid_built"
        );

        Ok(GroupStatusGrid {
            columns: columns.to_vec(),
            rows: grid_rows,
            unresolved,
        })
    }

    fn resolve_columns(
        &self,
        ctx: &RequestContext,
        columns: &[GroupStatusColumn],
    ) -> Vec<Option<Arc<dyn ColumnFormatter>>> {
        columns
            .iter()
            .map(|column| {
                let formatter = self.inner.factory.create(
                    column.source_type_id,
                    &column.formatter_name,
                    &column.conditional_formats,
                );
                if formatter.is_none() {
                    wms_telemetry::record_column_unresolved();
                    debug!(
                        target: "wms.grid",
                        correlation_id = %ctx.correlation_id,
                        field_heading = %column.field_heading,
                        formatter_name = %column.formatter_name,
                        source_type_id = column.source_type_id,
                        "column_unresolved"
                    );
                }
                formatter
            })
            .collect()
    }

    /// 每种查找只取一次，多列共享。
    async fn load_lookups(
        &self,
        ctx: &RequestContext,
        formatters: &[Option<Arc<dyn ColumnFormatter>>],
        node_ids: &[String],
    ) -> Result<HashMap<LookupKind, ColumnData>, GridError> {
        let mut bulk = HashMap::new();
        for kind in formatters.iter().flatten().filter_map(|f| f.lookup()) {
            if bulk.contains_key(&kind) {
                continue;
            }
            let data = self
                .inner
                .cache
                .get_data_for_kind(ctx, kind, node_ids)
                .await?;
            bulk.insert(kind, data);
        }
        Ok(bulk)
    }
}
