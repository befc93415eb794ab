//! 条件格式列。

use crate::comparison::first_match;
use crate::error::FormatError;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind, require_column};
use async_trait::async_trait;
use domain::{CellColors, DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::LookupKind;

/// 按列上配置的规则着色。
///
/// 有基础格式化器时先由它计算值和颜色，首条匹配规则再覆盖颜色；
/// 没有时值取 `row[FieldHeading]`。
pub struct ConditionalFormatter {
    base: Option<Arc<dyn ColumnFormatter>>,
}

impl ConditionalFormatter {
    pub fn new(base: Option<Arc<dyn ColumnFormatter>>) -> Self {
        Self { base }
    }

    pub fn base(&self) -> Option<&Arc<dyn ColumnFormatter>> {
        self.base.as_ref()
    }
}

#[async_trait]
impl ColumnFormatter for ConditionalFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::Conditional
    }

    fn lookup(&self) -> Option<LookupKind> {
        self.base.as_ref().and_then(|base| base.lookup())
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        if let Some(base) = &self.base {
            return base.calculate_value(row, cell, column, ctx).await;
        }
        let column = require_column(column)?;
        cell.set_value(row.text(&column.field_heading).unwrap_or_default());
        Ok(())
    }

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let column = require_column(column)?;
        if let Some(base) = &self.base {
            base.perform_format(row, cell, Some(column), ctx).await?;
        }
        let actual = row
            .text(&column.field_heading)
            .or_else(|| cell.value().map(str::to_string));
        if let Some(rule) = first_match(&column.conditional_formats, actual.as_deref()) {
            cell.set_colors(CellColors::new(rule.back(), rule.fore()));
        }
        Ok(())
    }
}
