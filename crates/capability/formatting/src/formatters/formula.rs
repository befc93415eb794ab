//! 公式列。

use super::parameter::SignificantDigits;
use crate::error::FormatError;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind, require_column};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::CommonStore;

/// 公式结果已由宿主算好放在行内，这里只做有效数字取整。
pub struct FormulaFormatter {
    digits: SignificantDigits,
}

impl FormulaFormatter {
    pub fn new(common: Arc<dyn CommonStore>, ttl_seconds: u64) -> Self {
        Self {
            digits: SignificantDigits::new(common, ttl_seconds),
        }
    }
}

#[async_trait]
impl ColumnFormatter for FormulaFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::Formula
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let column = require_column(column)?;
        let value = self.digits.field_text(row, &column.field_heading, ctx).await?;
        cell.set_value(value);
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
