use wms_telemetry::{
    metrics, new_correlation_id, record_cells_formatted, record_column_unresolved,
    record_invalid_argument, record_lookup_batch, record_lookup_failure, MetricsSnapshot,
};

#[test]
fn correlation_ids_are_unique_uuids() {
    let first = new_correlation_id();
    let second = new_correlation_id();
    assert_eq!(first.len(), 36);
    assert_ne!(first, second);
}

#[test]
fn counters_only_grow() {
    let before = metrics().snapshot();
    record_cells_formatted(4);
    record_column_unresolved();
    record_lookup_batch();
    record_lookup_batch();
    record_lookup_failure();
    record_invalid_argument();
    let delta = metrics().snapshot().since(&before);

    // 同一进程内其他测试也可能计数，只断言下界
    assert!(delta.cells_formatted >= 4);
    assert!(delta.columns_unresolved >= 1);
    assert!(delta.lookup_batches >= 2);
    assert!(delta.lookup_failures >= 1);
    assert!(delta.invalid_arguments >= 1);
}

#[test]
fn since_saturates() {
    let later = MetricsSnapshot::default();
    let earlier = MetricsSnapshot {
        cells_formatted: 3,
        ..MetricsSnapshot::default()
    };
    assert_eq!(later.since(&earlier), MetricsSnapshot::default());
}
