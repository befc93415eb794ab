//! 异常组列。

use super::same_node;
use crate::colors;
use crate::error::FormatError;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::{ColumnData, ExceptionRecord, ExceptionStore, LookupKind};

/// 显示节点最高优先级异常的组名，并按优先级着色。
pub struct ExceptionFormatter {
    store: Arc<dyn ExceptionStore>,
}

impl ExceptionFormatter {
    pub fn new(store: Arc<dyn ExceptionStore>) -> Self {
        Self { store }
    }

    async fn top_exception(
        &self,
        row: &DataRow,
        ctx: &FormatContext<'_>,
    ) -> Result<Option<ExceptionRecord>, FormatError> {
        let Some(node_id) = row.node_id() else {
            return Ok(None);
        };
        let records: Vec<ExceptionRecord> = match ctx.bulk {
            Some(ColumnData::Exceptions(records)) => records
                .iter()
                .filter(|record| same_node(&record.node_id, &node_id))
                .cloned()
                .collect(),
            _ => self
                .store
                .get_exceptions(ctx.request, &[node_id.clone()])
                .await?
                .into_iter()
                .filter(|record| same_node(&record.node_id, &node_id))
                .collect(),
        };
        Ok(highest_priority(records))
    }
}

/// 优先级最高者；同优先级取先出现的记录，无优先级视为最低。
pub fn highest_priority(records: Vec<ExceptionRecord>) -> Option<ExceptionRecord> {
    let mut best: Option<ExceptionRecord> = None;
    for record in records {
        let replace = match &best {
            None => true,
            Some(current) => {
                record.priority.unwrap_or(i32::MIN) > current.priority.unwrap_or(i32::MIN)
            }
        };
        if replace {
            best = Some(record);
        }
    }
    best
}

#[async_trait]
impl ColumnFormatter for ExceptionFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::Exception
    }

    fn lookup(&self) -> Option<LookupKind> {
        Some(LookupKind::ExceptionGroupName)
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let value = self
            .top_exception(row, ctx)
            .await?
            .and_then(|record| record.exception_group_name)
            .unwrap_or_default();
        cell.set_value(value);
        Ok(())
    }

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let priority = self
            .top_exception(row, ctx)
            .await?
            .and_then(|record| record.priority)
            .map(i64::from);
        if let Some(pair) = colors::exception_colors(priority) {
            cell.set_colors(pair);
        }
        Ok(())
    }
}
