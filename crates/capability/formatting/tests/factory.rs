mod common;

use common::in_memory_stores;
use domain::{ConditionalFormat, ConditionalOperator, SourceType};
use std::sync::Arc;
use wms_formatting::formatters::AlarmFormatter;
use wms_formatting::{ColumnFormatterFactory, FormatterKind};

fn factory() -> ColumnFormatterFactory {
    ColumnFormatterFactory::from_stores(&in_memory_stores(), 300)
}

fn rule() -> ConditionalFormat {
    ConditionalFormat::numeric(ConditionalOperator::Equal, 10.0, 0xFF0000, 0xFFFFFF)
}

fn kind_of(factory: &ColumnFormatterFactory, source: i32, name: &str) -> Option<FormatterKind> {
    factory.create(source, name, &[]).map(|formatter| formatter.kind())
}

#[test]
fn registers_every_kind() {
    assert_eq!(factory().len(), 20);
}

#[test]
fn resolves_known_names() {
    let factory = factory();
    let common = SourceType::Common.id();
    let facility = SourceType::Facility.id();

    assert_eq!(kind_of(&factory, common, "ALARMS"), Some(FormatterKind::Alarm));
    assert_eq!(kind_of(&factory, common, "Comm Status"), Some(FormatterKind::Comm));
    assert_eq!(kind_of(&factory, common, "%COMM"), Some(FormatterKind::PercentComm));
    assert_eq!(kind_of(&factory, common, "%FILL"), Some(FormatterKind::PercentFill));
    assert_eq!(kind_of(&factory, common, "%RTY"), Some(FormatterKind::PercentRuntime));
    assert_eq!(kind_of(&factory, common, "CONTROLLER"), Some(FormatterKind::PocType));
    assert_eq!(kind_of(&factory, common, "PUMPING UNIT"), Some(FormatterKind::PumpingUnit));
    assert_eq!(
        kind_of(&factory, common, "PUMPING UNIT MANUFACTURER"),
        Some(FormatterKind::PumpingUnitManufacturer)
    );
    assert_eq!(kind_of(&factory, common, "ROD GRADE"), Some(FormatterKind::RodGrade));
    assert_eq!(
        kind_of(&factory, facility, "EXCEPTIONGROUPNAME"),
        Some(FormatterKind::Exception)
    );
    assert_eq!(kind_of(&factory, facility, "HOSTALARMS"), Some(FormatterKind::HostAlarm));
    assert_eq!(
        kind_of(&factory, facility, "FACILITY"),
        Some(FormatterKind::FacilityTagAlarms)
    );
    assert_eq!(kind_of(&factory, common, "CAMERA ALARMS"), Some(FormatterKind::CameraAlarms));
    assert_eq!(kind_of(&factory, common, "RUN STATUS"), Some(FormatterKind::RunStatus));
    assert_eq!(kind_of(&factory, common, "TIS"), Some(FormatterKind::TimeInService));
    assert_eq!(kind_of(&factory, facility, "ENABLED"), Some(FormatterKind::Enabled));
    assert_eq!(
        kind_of(&factory, SourceType::Parameter.id(), "PARAMETER"),
        Some(FormatterKind::Parameter)
    );
    assert_eq!(
        kind_of(&factory, SourceType::ParamStandard.id(), "PARAM STANDARD"),
        Some(FormatterKind::ParamStandard)
    );
    assert_eq!(
        kind_of(&factory, SourceType::Formula.id(), "FORMULA"),
        Some(FormatterKind::Formula)
    );
    assert_eq!(
        kind_of(&factory, SourceType::Conditional.id(), "CONDITIONAL"),
        Some(FormatterKind::Conditional)
    );
}

#[test]
fn unknown_names_and_sources_return_none() {
    let factory = factory();
    assert!(factory.create(SourceType::Common.id(), "UNKNOWN", &[]).is_none());
    assert!(factory.create(1000, "UNKNOWN", &[]).is_none());
    assert!(factory.create(1000, "ALARMS", &[]).is_none());
    assert!(factory.create(SourceType::Common.id(), "FACILITY", &[]).is_none());
    assert!(factory.create(SourceType::Common.id(), "PARAMETER", &[]).is_none());
}

#[test]
fn rules_route_to_conditional() {
    let factory = factory();
    let rules = [rule()];

    for (source, name) in [
        (SourceType::Conditional.id(), "CONDITIONAL"),
        (1000, "CONDITIONAL"),
        (SourceType::Common.id(), "UNKNOWN"),
        (SourceType::Common.id(), "ALARMS"),
    ] {
        let formatter = factory.create(source, name, &rules).expect("conditional");
        assert_eq!(formatter.kind(), FormatterKind::Conditional, "{source} {name}");
    }
}

#[test]
fn conditional_keeps_base_lookup() {
    let factory = factory();
    let formatter = factory
        .create(SourceType::Common.id(), "ROD GRADE", &[rule()])
        .expect("conditional");
    assert_eq!(formatter.kind(), FormatterKind::Conditional);
    assert_eq!(formatter.lookup(), Some(wms_storage::LookupKind::RodGrade));
}

#[test]
fn missing_registration_returns_none() {
    let factory = ColumnFormatterFactory::new(vec![Arc::new(AlarmFormatter)]);
    assert!(factory.create(SourceType::Common.id(), "ALARMS", &[]).is_some());
    assert!(factory.create(SourceType::Common.id(), "COMM", &[]).is_none());
}
