//! 当前状态持续时间列。

use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// `TimeInState`（分钟）显示为 `1d 02:05` 或 `02:05`。
#[derive(Debug, Default)]
pub struct TimeInServiceFormatter;

/// 分钟数转显示文本；负数或非数值返回 None。
pub fn format_duration_minutes(minutes: f64) -> Option<String> {
    if !minutes.is_finite() || minutes < 0.0 {
        return None;
    }
    let total = minutes.round() as i64;
    let days = total / MINUTES_PER_DAY;
    let hours = (total % MINUTES_PER_DAY) / 60;
    let mins = total % 60;
    if days > 0 {
        Some(format!("{}d {:02}:{:02}", days, hours, mins))
    } else {
        Some(format!("{:02}:{:02}", hours, mins))
    }
}

#[async_trait]
impl ColumnFormatter for TimeInServiceFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::TimeInService
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let value = row
            .number(fields::TIME_IN_STATE)
            .and_then(format_duration_minutes)
            .unwrap_or_default();
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
