//! 昨日运行率列。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use crate::numeric::percent_text;
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::{CommonStore, ReferenceCache, reference_cache};

/// 计产周期默认小时数。
pub const DEFAULT_GAUGE_OFF_HOURS: &str = "24";

/// 运行率 = 昨日运行小时 / 计产周期小时 * 100（取整）。
///
/// 计产周期来自系统参数 `GaugeOffHours`，跨请求缓存。
pub struct PercentRuntimeFormatter {
    common: Arc<dyn CommonStore>,
    cache: ReferenceCache<String>,
}

impl PercentRuntimeFormatter {
    pub fn new(common: Arc<dyn CommonStore>, ttl_seconds: u64) -> Self {
        Self {
            common,
            cache: reference_cache(ttl_seconds),
        }
    }
}

#[async_trait]
impl ColumnFormatter for PercentRuntimeFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::PercentRuntime
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let Some(runtime_hours) = row.number(fields::RUNTIME_YESTERDAY) else {
            cell.set_value("");
            return Ok(());
        };
        let period = self
            .cache
            .try_get_with(
                fields::GAUGE_OFF_HOURS_PARAMETER.to_string(),
                self.common.get_system_parameter(
                    ctx.request,
                    fields::GAUGE_OFF_HOURS_PARAMETER,
                    DEFAULT_GAUGE_OFF_HOURS,
                ),
            )
            .await?;
        let value = period
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|hours| *hours > 0.0)
            .and_then(|hours| percent_text(runtime_hours, hours))
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
        // 运行率报警状态为数值（非 "OK"）时标红
        let alarmed = row
            .text(fields::RUNTIME_ALARM_STATE)
            .map(|state| state.trim().to_string())
            .filter(|state| state != "OK")
            .and_then(|state| state.parse::<f64>().ok())
            .is_some();
        if alarmed {
            cell.set_colors(colors::ALARM);
        }
        Ok(())
    }
}
