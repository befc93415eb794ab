//! 高优先级报警列。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

pub const OK: &str = "OK";

/// 高优先级报警：无报警且已启用时显示 "OK"，其余报警文本标红。
#[derive(Debug, Default)]
pub struct AlarmFormatter;

#[async_trait]
impl ColumnFormatter for AlarmFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::Alarm
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let value = match row.non_empty_text(fields::HIGH_PRI_ALARM) {
            Some(alarm) => alarm,
            None if row.is_enabled() => OK.to_string(),
            None => String::new(),
        };
        cell.set_value(value);
        Ok(())
    }

    async fn perform_format(
        &self,
        _row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        if let Some(value) = cell.value() {
            if !value.is_empty() && value != OK {
                cell.set_colors(colors::ALARM);
            }
        }
        Ok(())
    }
}
