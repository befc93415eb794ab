//! 泵充满度列。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

#[derive(Debug, Default)]
pub struct PercentFillFormatter;

#[async_trait]
impl ColumnFormatter for PercentFillFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::PercentFill
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let value = row
            .number(fields::PUMP_FILLAGE)
            .map(|fillage| format!("{}", fillage.round() as i64))
            .unwrap_or_default();
        cell.set_value(value);
        Ok(())
    }

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        // 低于充满度设定值时提示
        if let (Some(fillage), Some(setpoint)) = (
            row.number(fields::PUMP_FILLAGE),
            row.number(fields::FILLAGE_SETPOINT),
        ) {
            if fillage < setpoint {
                cell.set_colors(colors::WARNING);
            }
        }
        Ok(())
    }
}
