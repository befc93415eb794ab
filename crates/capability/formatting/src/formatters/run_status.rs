//! 运行状态列。

use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

/// 已停用的井不显示运行状态。
#[derive(Debug, Default)]
pub struct RunStatusFormatter;

#[async_trait]
impl ColumnFormatter for RunStatusFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::RunStatus
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let status = if row.is_enabled() {
            row.text(fields::RUN_STATUS).unwrap_or_default()
        } else {
            String::new()
        };
        cell.set_value(status.trim());
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
