//! 主机报警列。

use super::same_node;
use crate::colors;
use crate::error::FormatError;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel, format_number};
use std::sync::Arc;
use wms_storage::{ColumnData, HostAlarmRecord, HostAlarmStore, LookupKind};

/// 变化率报警：上升。
const ALARM_TYPE_ROC_RISE: i32 = 4;
/// 变化率报警：下降。
const ALARM_TYPE_ROC_FALL: i32 = 5;
/// 值变化报警：下降。
const ALARM_TYPE_VALUE_FALL: i32 = 9;

/// 已确认。
pub const ACKNOWLEDGED_STATE: i32 = 115;

/// 显示节点当前主机报警的描述和状态后缀。
pub struct HostAlarmFormatter {
    store: Arc<dyn HostAlarmStore>,
}

impl HostAlarmFormatter {
    pub fn new(store: Arc<dyn HostAlarmStore>) -> Self {
        Self { store }
    }

    async fn current_alarm(
        &self,
        row: &DataRow,
        ctx: &FormatContext<'_>,
    ) -> Result<Option<HostAlarmRecord>, FormatError> {
        let Some(node_id) = row.node_id() else {
            return Ok(None);
        };
        let records: Vec<HostAlarmRecord> = match ctx.bulk {
            Some(ColumnData::HostAlarms(records)) => records
                .iter()
                .filter(|record| same_node(&record.node_id, &node_id))
                .cloned()
                .collect(),
            _ => self
                .store
                .get_all_group_status_host_alarms(ctx.request, &[node_id.clone()])
                .await?
                .into_iter()
                .filter(|record| same_node(&record.node_id, &node_id))
                .collect(),
        };
        Ok(select_alarm(records))
    }
}

/// 首个处于报警状态（非空且非 0）的记录，否则首条记录。
pub fn select_alarm(records: Vec<HostAlarmRecord>) -> Option<HostAlarmRecord> {
    let active = records
        .iter()
        .position(|record| matches!(record.alarm_state, Some(state) if state != 0));
    match active {
        Some(index) => records.into_iter().nth(index),
        None => records.into_iter().next(),
    }
}

/// 报警状态对应的描述后缀。
pub fn state_suffix(record: &HostAlarmRecord) -> String {
    let number = |value: Option<f64>| value.map(format_number).unwrap_or_default();
    match (record.alarm_state, record.alarm_type) {
        (Some(1), _) => "-Hi".to_string(),
        (Some(2), _) => "-HiHi".to_string(),
        (Some(3), _) => "-Lo".to_string(),
        (Some(4), _) => "-LoLo".to_string(),
        (Some(5), Some(ALARM_TYPE_ROC_RISE)) => {
            format!("-ROC: +{}%", number(record.percent_change))
        }
        (Some(5), Some(ALARM_TYPE_ROC_FALL)) => {
            format!("-ROC: -{}%", number(record.percent_change))
        }
        (Some(6), _) => format!("-MaxSpan: {}", number(record.min_to_max_limit)),
        (Some(7), _) => "-NearPumpoff".to_string(),
        (Some(8), Some(ALARM_TYPE_VALUE_FALL)) => "-Val Chg: -".to_string(),
        (Some(8), _) => "-Val Chg: +".to_string(),
        (Some(10), _) => format!("-MinSpan: {}", number(record.min_to_max_limit)),
        (Some(ACKNOWLEDGED_STATE), _) => " (Acknowledged)".to_string(),
        _ => String::new(),
    }
}

#[async_trait]
impl ColumnFormatter for HostAlarmFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::HostAlarm
    }

    fn lookup(&self) -> Option<LookupKind> {
        Some(LookupKind::HostAlarms)
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let alarm = self.current_alarm(row, ctx).await?;
        let description = alarm
            .as_ref()
            .and_then(|record| record.description.as_deref())
            .map(str::trim)
            .unwrap_or_default();
        let value = match alarm.as_ref() {
            Some(record) if !description.is_empty() => {
                format!("{}{}", description, state_suffix(record))
            }
            _ if row.is_enabled() => "OK".to_string(),
            _ => String::new(),
        };
        cell.set_value(value);
        Ok(())
    }

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let state = self
            .current_alarm(row, ctx)
            .await?
            .and_then(|record| record.alarm_state)
            .map(i64::from);
        if let Some(pair) = colors::host_alarm_colors(state) {
            cell.set_colors(pair);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alarm(state: Option<i32>, alarm_type: Option<i32>) -> HostAlarmRecord {
        HostAlarmRecord {
            node_id: "Well1".to_string(),
            address: Some(1001),
            description: Some("Tubing Pressure".to_string()),
            alarm_state: state,
            alarm_type,
            percent_change: Some(12.5),
            min_to_max_limit: Some(40.0),
        }
    }

    #[test]
    fn suffix_rules() {
        assert_eq!(state_suffix(&alarm(Some(1), None)), "-Hi");
        assert_eq!(state_suffix(&alarm(Some(4), None)), "-LoLo");
        assert_eq!(state_suffix(&alarm(Some(5), Some(4))), "-ROC: +12.5%");
        assert_eq!(state_suffix(&alarm(Some(5), Some(5))), "-ROC: -12.5%");
        assert_eq!(state_suffix(&alarm(Some(5), Some(1))), "");
        assert_eq!(state_suffix(&alarm(Some(6), None)), "-MaxSpan: 40");
        assert_eq!(state_suffix(&alarm(Some(8), Some(9))), "-Val Chg: -");
        assert_eq!(state_suffix(&alarm(Some(8), Some(2))), "-Val Chg: +");
        assert_eq!(state_suffix(&alarm(Some(10), None)), "-MinSpan: 40");
        assert_eq!(state_suffix(&alarm(Some(115), None)), " (Acknowledged)");
        assert_eq!(state_suffix(&alarm(Some(9), None)), "");
        assert_eq!(state_suffix(&alarm(None, None)), "");
    }

    #[test]
    fn prefers_first_active_alarm() {
        let records = vec![alarm(Some(0), None), alarm(None, None), alarm(Some(3), None)];
        assert_eq!(select_alarm(records).and_then(|r| r.alarm_state), Some(3));

        let quiet = vec![alarm(Some(0), None), alarm(None, None)];
        assert_eq!(select_alarm(quiet).and_then(|r| r.alarm_state), Some(0));
        assert!(select_alarm(Vec::new()).is_none());
    }
}
