mod common;

use common::{CountingPocTypeStore, ctx, in_memory_stores};
use domain::{DataRow, GroupStatusColumn, RowColumnModel, SourceType};
use std::sync::Arc;
use wms_formatting::formatters::PocTypeFormatter;
use wms_formatting::{
    ColumnFormatterFactory, FormatContext, FormatError, FormatterKind, calculate_cell, format_cell,
};

#[tokio::test]
async fn every_formatter_rejects_missing_row_or_cell() {
    let factory = ColumnFormatterFactory::from_stores(&in_memory_stores(), 0);
    let request = ctx();
    let format_ctx = FormatContext::new(&request);
    let row = DataRow::new().with("Well", "Well1");
    let column = GroupStatusColumn::new("Flow", "PARAMETER", SourceType::Parameter);
    let kinds = [
        FormatterKind::Alarm,
        FormatterKind::Comm,
        FormatterKind::PercentComm,
        FormatterKind::PercentFill,
        FormatterKind::PercentRuntime,
        FormatterKind::PocType,
        FormatterKind::PumpingUnit,
        FormatterKind::PumpingUnitManufacturer,
        FormatterKind::RodGrade,
        FormatterKind::Exception,
        FormatterKind::HostAlarm,
        FormatterKind::FacilityTagAlarms,
        FormatterKind::CameraAlarms,
        FormatterKind::RunStatus,
        FormatterKind::TimeInService,
        FormatterKind::Enabled,
        FormatterKind::Conditional,
        FormatterKind::Parameter,
        FormatterKind::ParamStandard,
        FormatterKind::Formula,
    ];

    for kind in kinds {
        let formatter = factory.get(kind).expect("registered");
        let formatter = formatter.as_ref();

        let mut cell = RowColumnModel::new();
        let err = calculate_cell(formatter, None, Some(&mut cell), Some(&column), &format_ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidArgument("row")), "{kind:?}");

        let err = calculate_cell(formatter, Some(&row), None, Some(&column), &format_ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidArgument("cell")), "{kind:?}");

        let err = format_cell(formatter, None, Some(&mut cell), Some(&column), &format_ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidArgument("row")), "{kind:?}");

        let err = format_cell(formatter, Some(&row), None, Some(&column), &format_ctx)
            .await
            .unwrap_err();
        assert!(matches!(err, FormatError::InvalidArgument("cell")), "{kind:?}");

        assert_eq!(cell, RowColumnModel::new(), "{kind:?}");
    }
}

#[tokio::test]
async fn invalid_argument_happens_before_store_calls() {
    let store = Arc::new(CountingPocTypeStore::new(Vec::new()));
    let formatter = PocTypeFormatter::new(store.clone());
    let request = ctx();
    let format_ctx = FormatContext::new(&request);

    let err = calculate_cell(&formatter, None, Some(&mut RowColumnModel::new()), None, &format_ctx)
        .await
        .unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(store.get_count(), 0);
    assert_eq!(store.get_all_count(), 0);
}

#[tokio::test]
async fn valid_arguments_pass_through() {
    let factory = ColumnFormatterFactory::from_stores(&in_memory_stores(), 0);
    let formatter = factory.get(FormatterKind::Alarm).expect("alarm");
    let request = ctx();
    let format_ctx = FormatContext::new(&request);
    let row = DataRow::new()
        .with("Enabled", "True")
        .with("tblNodeMaster.HighPriAlarm", "Alarm");
    let mut cell = RowColumnModel::new();

    calculate_cell(formatter.as_ref(), Some(&row), Some(&mut cell), None, &format_ctx)
        .await
        .expect("value");
    format_cell(formatter.as_ref(), Some(&row), Some(&mut cell), None, &format_ctx)
        .await
        .expect("format");
    assert_eq!(cell.value(), Some("Alarm"));
    assert!(cell.colors().is_some());
}
