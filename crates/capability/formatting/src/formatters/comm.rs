//! 通讯状态列。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

#[derive(Debug, Default)]
pub struct CommFormatter;

#[async_trait]
impl ColumnFormatter for CommFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::Comm
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let status = row
            .text(fields::COMM_STATUS)
            .map(|status| status.trim().to_string())
            .unwrap_or_default();
        cell.set_value(status);
        Ok(())
    }

    async fn perform_format(
        &self,
        _row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        // 空值与 "OK" 视为正常
        if !matches!(cell.value(), None | Some("") | Some("OK")) {
            cell.set_colors(colors::ALARM);
        }
        Ok(())
    }
}
