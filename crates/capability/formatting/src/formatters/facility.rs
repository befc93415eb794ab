//! 设施标签报警列（仅设施来源）。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

#[derive(Debug, Default)]
pub struct FacilityTagAlarmsFormatter;

/// 非空、非 0、非 False 即视为有报警。
fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case("false") {
        return false;
    }
    match value.parse::<f64>() {
        Ok(number) => number != 0.0,
        Err(_) => true,
    }
}

#[async_trait]
impl ColumnFormatter for FacilityTagAlarmsFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::FacilityTagAlarms
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        cell.set_value(row.text(fields::FACILITY_TAG_ALARMS).unwrap_or_default());
        Ok(())
    }

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        if row
            .text(fields::FACILITY_TAG_ALARMS)
            .is_some_and(|value| is_truthy(&value))
        {
            cell.set_colors(colors::ALARM);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::is_truthy;

    #[test]
    fn truthy_values() {
        assert!(is_truthy("3"));
        assert!(is_truthy("Hi Tank Level"));
        assert!(is_truthy("True"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(" "));
        assert!(!is_truthy("false"));
    }
}
