mod common;

use common::{CountingCommonStore, CountingPhraseStore, hex, render};
use domain::DataRow;
use std::collections::HashMap;
use std::sync::Arc;
use wms_formatting::formatters::{
    AlarmFormatter, CameraAlarmsFormatter, CommFormatter, EnabledFormatter,
    FacilityTagAlarmsFormatter, PercentCommFormatter, PercentFillFormatter,
    PercentRuntimeFormatter, RunStatusFormatter, TimeInServiceFormatter,
};
use wms_storage::{InMemoryCommonStore, InMemoryLocalePhraseStore};

fn enabled() -> DataRow {
    DataRow::new().with("Well", "Well1").with("Enabled", "True")
}

#[tokio::test]
async fn alarm_text_is_red() {
    let row = enabled().with("tblNodeMaster.HighPriAlarm", "Alarm");
    let cell = render(&AlarmFormatter, &row, None).await.expect("cell");
    assert_eq!(cell.value(), Some("Alarm"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#FF0000"));
    assert_eq!(hex(cell.fore_color()).as_deref(), Some("#FFFFFF"));
}

#[tokio::test]
async fn alarm_ok_has_no_colors() {
    let row = enabled().with("tblNodeMaster.HighPriAlarm", "OK");
    let cell = render(&AlarmFormatter, &row, None).await.expect("cell");
    assert_eq!(cell.value(), Some("OK"));
    assert_eq!(cell.colors(), None);

    let missing = render(&AlarmFormatter, &enabled(), None).await.expect("cell");
    assert_eq!(missing.value(), Some("OK"));
    assert_eq!(missing.colors(), None);

    let disabled = DataRow::new().with("Enabled", "False");
    let cell = render(&AlarmFormatter, &disabled, None).await.expect("cell");
    assert_eq!(cell.value(), Some(""));
    assert_eq!(cell.colors(), None);
}

#[tokio::test]
async fn comm_status_colors() {
    let failed = enabled().with("tblNodeMaster.CommStatus", " Comm Fail ");
    let cell = render(&CommFormatter, &failed, None).await.expect("cell");
    assert_eq!(cell.value(), Some("Comm Fail"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#FF0000"));

    for status in ["OK", ""] {
        let row = enabled().with("tblNodeMaster.CommStatus", status);
        let cell = render(&CommFormatter, &row, None).await.expect("cell");
        assert_eq!(cell.colors(), None, "{status}");
    }
    let missing = render(&CommFormatter, &enabled(), None).await.expect("cell");
    assert_eq!(missing.value(), Some(""));
    assert_eq!(missing.colors(), None);
}

#[tokio::test]
async fn percent_comm_values() {
    let half = enabled()
        .with("tblNodeMaster.CommSuccess", 1)
        .with("tblNodeMaster.CommAttempt", 2);
    let cell = render(&PercentCommFormatter, &half, None).await.expect("cell");
    assert_eq!(cell.value(), Some("50"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#FF0000"));
    assert_eq!(hex(cell.fore_color()).as_deref(), Some("#FFFFFF"));

    let zero = enabled()
        .with("tblNodeMaster.CommSuccess", 0)
        .with("tblNodeMaster.CommAttempt", 0);
    let cell = render(&PercentCommFormatter, &zero, None).await.expect("cell");
    assert_eq!(cell.value(), Some("0"));

    let no_success = enabled().with("tblNodeMaster.CommAttempt", 2);
    let cell = render(&PercentCommFormatter, &no_success, None).await.expect("cell");
    assert_eq!(cell.value(), None);
    assert_eq!(cell.colors(), None);

    let no_attempt = enabled().with("tblNodeMaster.CommSuccess", 3);
    let cell = render(&PercentCommFormatter, &no_attempt, None).await.expect("cell");
    assert_eq!(cell.value(), Some(""));
    assert_eq!(cell.colors(), None);
}

#[tokio::test]
async fn percent_comm_healthy_or_disabled_has_no_colors() {
    let healthy = enabled()
        .with("tblNodeMaster.CommSuccess", 96)
        .with("tblNodeMaster.CommAttempt", 100);
    let cell = render(&PercentCommFormatter, &healthy, None).await.expect("cell");
    assert_eq!(cell.value(), Some("96"));
    assert_eq!(cell.colors(), None);

    let disabled = DataRow::new()
        .with("Enabled", "False")
        .with("tblNodeMaster.CommSuccess", 1)
        .with("tblNodeMaster.CommAttempt", 2);
    let cell = render(&PercentCommFormatter, &disabled, None).await.expect("cell");
    assert_eq!(cell.value(), Some("50"));
    assert_eq!(cell.colors(), None);
}

#[tokio::test]
async fn percent_fill_below_setpoint_is_yellow() {
    let low = enabled()
        .with("tblNodeMaster.PumpFillage", 62.6)
        .with("tblNodeMaster.FillageSetpoint", 70);
    let cell = render(&PercentFillFormatter, &low, None).await.expect("cell");
    assert_eq!(cell.value(), Some("63"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#FFFF00"));
    assert_eq!(hex(cell.fore_color()).as_deref(), Some("#000000"));

    let ok = enabled()
        .with("tblNodeMaster.PumpFillage", 85)
        .with("tblNodeMaster.FillageSetpoint", 70);
    let cell = render(&PercentFillFormatter, &ok, None).await.expect("cell");
    assert_eq!(cell.colors(), None);

    let junk = enabled().with("tblNodeMaster.PumpFillage", "n/a");
    let cell = render(&PercentFillFormatter, &junk, None).await.expect("cell");
    assert_eq!(cell.value(), Some(""));
}

async fn runtime_cell(gauge_off_hours: Option<&str>, row: &DataRow) -> Option<String> {
    let common = InMemoryCommonStore::new();
    if let Some(hours) = gauge_off_hours {
        common.set("GaugeOffHours", hours).expect("set");
    }
    let formatter = PercentRuntimeFormatter::new(Arc::new(common), 0);
    let cell = render(&formatter, row, None).await.expect("cell");
    cell.value().map(str::to_string)
}

#[tokio::test]
async fn percent_runtime_uses_gauge_off_hours() {
    let row = enabled()
        .with("tblNodeMaster.RunTimeYesterday", 18)
        .with("tblNodeMaster.RunTimeAlarmState", "OK");
    assert_eq!(runtime_cell(None, &row).await.as_deref(), Some("75"));
    assert_eq!(runtime_cell(Some("12"), &row).await.as_deref(), Some("150"));
    assert_eq!(runtime_cell(Some("zero"), &row).await.as_deref(), Some(""));
}

#[tokio::test]
async fn percent_runtime_reads_gauge_off_hours_once() {
    let common = Arc::new(CountingCommonStore::new(&[("GaugeOffHours", "12")]));
    let formatter = PercentRuntimeFormatter::new(common.clone(), 0);
    for hours in 0..50 {
        let row = enabled().with("tblNodeMaster.RunTimeYesterday", hours % 13);
        render(&formatter, &row, None).await.expect("cell");
    }
    assert_eq!(common.count(), 1);

    let row = enabled().with("tblNodeMaster.RunTimeYesterday", 6);
    let cell = render(&formatter, &row, None).await.expect("cell");
    assert_eq!(cell.value(), Some("50"));
    assert_eq!(common.count(), 1);
}

#[tokio::test]
async fn percent_runtime_alarm_state() {
    let formatter = PercentRuntimeFormatter::new(Arc::new(InMemoryCommonStore::new()), 0);
    let alarmed = enabled()
        .with("tblNodeMaster.RunTimeYesterday", 2)
        .with("tblNodeMaster.RunTimeAlarmState", "1");
    let cell = render(&formatter, &alarmed, None).await.expect("cell");
    assert_eq!(cell.value(), Some("8"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#FF0000"));

    let text_state = enabled().with("tblNodeMaster.RunTimeAlarmState", "Low");
    let cell = render(&formatter, &text_state, None).await.expect("cell");
    assert_eq!(cell.value(), Some(""));
    assert_eq!(cell.colors(), None);
}

#[tokio::test]
async fn run_status_hidden_when_disabled() {
    let row = enabled().with("tblNodeMaster.RunStatus", "Running");
    let cell = render(&RunStatusFormatter, &row, None).await.expect("cell");
    assert_eq!(cell.value(), Some("Running"));

    let disabled = DataRow::new()
        .with("Enabled", "0")
        .with("tblNodeMaster.RunStatus", "Running");
    let cell = render(&RunStatusFormatter, &disabled, None).await.expect("cell");
    assert_eq!(cell.value(), Some(""));
}

#[tokio::test]
async fn time_in_state_formats_minutes() {
    let row = enabled().with("tblNodeMaster.TimeInState", 1565);
    let cell = render(&TimeInServiceFormatter, &row, None).await.expect("cell");
    assert_eq!(cell.value(), Some("1d 02:05"));

    let short = enabled().with("tblNodeMaster.TimeInState", "45");
    let cell = render(&TimeInServiceFormatter, &short, None).await.expect("cell");
    assert_eq!(cell.value(), Some("00:45"));

    let bad = enabled().with("tblNodeMaster.TimeInState", "-");
    let cell = render(&TimeInServiceFormatter, &bad, None).await.expect("cell");
    assert_eq!(cell.value(), Some(""));
}

#[tokio::test]
async fn enabled_column() {
    let cell = render(&EnabledFormatter, &enabled(), None).await.expect("cell");
    assert_eq!(cell.value(), Some("Enabled"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#00FA9A"));
    assert_eq!(hex(cell.fore_color()).as_deref(), Some("#000000"));

    let enbld = DataRow::new().with("Enbld", true);
    let cell = render(&EnabledFormatter, &enbld, None).await.expect("cell");
    assert_eq!(cell.value(), Some("Enabled"));

    let coded = DataRow::new()
        .with("Enabled", "False")
        .with("DisableCode", "Shut-in");
    let cell = render(&EnabledFormatter, &coded, None).await.expect("cell");
    assert_eq!(cell.value(), Some("Shut-in"));
    assert!(cell.colors().is_some());

    let bare = DataRow::new().with("Well", "Well1");
    let cell = render(&EnabledFormatter, &bare, None).await.expect("cell");
    assert_eq!(cell.value(), Some("Disabled"));
    assert_eq!(cell.colors(), None);
}

#[tokio::test]
async fn facility_tag_alarms() {
    let row = DataRow::new().with("FacilityTagAlarms", 2);
    let cell = render(&FacilityTagAlarmsFormatter, &row, None).await.expect("cell");
    assert_eq!(cell.value(), Some("2"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#FF0000"));

    let quiet = DataRow::new().with("FacilityTagAlarms", 0);
    let cell = render(&FacilityTagAlarmsFormatter, &quiet, None).await.expect("cell");
    assert_eq!(cell.colors(), None);
}

#[tokio::test]
async fn camera_alarms_use_phrases() {
    let mut phrases = HashMap::new();
    phrases.insert(4001, "Alarme".to_string());
    let phrases = Arc::new(InMemoryLocalePhraseStore::with_phrases(phrases));
    let formatter = CameraAlarmsFormatter::new(phrases, 0);

    let alarmed = DataRow::new().with("CameraAlarmCount", 3);
    let cell = render(&formatter, &alarmed, None).await.expect("cell");
    assert_eq!(cell.value(), Some("Alarme"));
    assert_eq!(hex(cell.back_color()).as_deref(), Some("#FF0000"));

    // 4002 未配置，回退英文
    let quiet = DataRow::new().with("CameraAlarmCount", 0);
    let cell = render(&formatter, &quiet, None).await.expect("cell");
    assert_eq!(cell.value(), Some("OK"));
    assert_eq!(cell.colors(), None);

    let missing = render(&formatter, &DataRow::new(), None).await.expect("cell");
    assert_eq!(missing.value(), Some(""));
}

#[tokio::test]
async fn camera_alarm_phrases_are_read_once_each() {
    let phrases = Arc::new(CountingPhraseStore::new(&[(4001, "Alarme"), (4002, "Normal")]));
    let formatter = CameraAlarmsFormatter::new(phrases.clone(), 0);
    for count in 0..50 {
        let row = DataRow::new().with("CameraAlarmCount", count % 3);
        let cell = render(&formatter, &row, None).await.expect("cell");
        let expected = if count % 3 > 0 { "Alarme" } else { "Normal" };
        assert_eq!(cell.value(), Some(expected));
    }
    assert_eq!(phrases.count(4001), 1);
    assert_eq!(phrases.count(4002), 1);
}
