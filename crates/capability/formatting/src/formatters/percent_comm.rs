//! 通讯成功率列。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use crate::numeric::percent_text;
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

/// 低于该百分比标红。
pub const LOW_COMM_PERCENT: f64 = 75.0;

/// 通讯成功率 = CommSuccess / CommAttempt * 100（取整）。
///
/// - CommSuccess 为空：值为 None
/// - CommAttempt 为空：空字符串
/// - CommAttempt 为 0："0"
#[derive(Debug, Default)]
pub struct PercentCommFormatter;

#[async_trait]
impl ColumnFormatter for PercentCommFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::PercentComm
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let Some(success) = row.number(fields::COMM_SUCCESS) else {
            cell.clear_value();
            return Ok(());
        };
        let value = match row.number(fields::COMM_ATTEMPT) {
            None => String::new(),
            Some(attempt) if attempt == 0.0 => "0".to_string(),
            Some(attempt) => percent_text(success, attempt).unwrap_or_default(),
        };
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
        if !row.is_enabled() {
            return Ok(());
        }
        let percent = cell.value().and_then(|value| value.trim().parse::<f64>().ok());
        if matches!(percent, Some(percent) if percent < LOW_COMM_PERCENT) {
            cell.set_colors(colors::ALARM);
        }
        Ok(())
    }
}
