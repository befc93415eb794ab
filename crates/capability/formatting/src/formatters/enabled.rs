//! 启用状态列。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};

pub const ENABLED_TEXT: &str = "Enabled";
pub const DISABLED_TEXT: &str = "Disabled";

#[derive(Debug, Default)]
pub struct EnabledFormatter;

fn is_enabled(row: &DataRow) -> bool {
    if row.is_enabled() {
        return true;
    }
    row.text(fields::ENBLD)
        .map(|value| {
            let value = value.trim();
            value == "1" || value.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}

#[async_trait]
impl ColumnFormatter for EnabledFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::Enabled
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let value = if is_enabled(row) {
            ENABLED_TEXT.to_string()
        } else {
            row.non_empty_text(fields::DISABLE_CODE)
                .unwrap_or_else(|| DISABLED_TEXT.to_string())
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
        let has_state = [fields::ENBLD, fields::DISABLE_CODE, fields::ENABLED]
            .iter()
            .any(|key| row.contains_key(key));
        if has_state {
            cell.set_colors(colors::ENABLED);
        }
        Ok(())
    }
}
