#![allow(dead_code)]

use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RequestContext, RowColumnModel};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicUsize, Ordering};
use wms_formatting::{ColumnFormatter, FormatContext, FormatError};
use wms_storage::{
    CommonStore, ExceptionRecord, HostAlarmRecord, InMemoryCommonStore, InMemoryExceptionStore,
    InMemoryHostAlarmStore, InMemoryLocalePhraseStore, InMemoryPocTypeStore,
    InMemoryPumpingUnitManufacturerStore, InMemoryPumpingUnitStore, InMemoryRodStore,
    LocalePhraseStore, LookupStores, PocTypeRecord, PocTypeStore, PumpingUnitManufacturerRecord,
    PumpingUnitRecord, RodRecord, StorageError,
};

pub fn ctx() -> RequestContext {
    RequestContext::new("corr-test")
}

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// 对单行执行 calculate_value + perform_format。
pub async fn render(
    formatter: &dyn ColumnFormatter,
    row: &DataRow,
    column: Option<&GroupStatusColumn>,
) -> Result<RowColumnModel, FormatError> {
    let request = ctx();
    let format_ctx = FormatContext::new(&request);
    let mut cell = RowColumnModel::new();
    formatter
        .calculate_value(row, &mut cell, column, &format_ctx)
        .await?;
    formatter
        .perform_format(row, &mut cell, column, &format_ctx)
        .await?;
    Ok(cell)
}

pub fn hex(color: Option<domain::Color>) -> Option<String> {
    color.map(|color| color.to_string())
}

pub fn rod(node_id: &str, rod_num: i32, grade: &str) -> RodRecord {
    RodRecord {
        node_id: node_id.to_string(),
        rod_num,
        rod_grade_id: None,
        rod_grade_name: Some(grade.to_string()),
        diameter: None,
        length: None,
    }
}

pub fn host_alarm(node_id: &str, description: &str, state: Option<i32>) -> HostAlarmRecord {
    HostAlarmRecord {
        node_id: node_id.to_string(),
        address: Some(2001),
        description: Some(description.to_string()),
        alarm_state: state,
        alarm_type: None,
        percent_change: None,
        min_to_max_limit: None,
    }
}

pub fn exception(node_id: &str, group: &str, priority: i32) -> ExceptionRecord {
    ExceptionRecord {
        node_id: node_id.to_string(),
        exception_group_name: Some(group.to_string()),
        priority: Some(priority),
    }
}

/// 计数的控制器类型存储。
pub struct CountingPocTypeStore {
    inner: InMemoryPocTypeStore,
    pub get_calls: AtomicUsize,
    pub get_all_calls: AtomicUsize,
}

impl CountingPocTypeStore {
    pub fn new(records: Vec<PocTypeRecord>) -> Self {
        Self {
            inner: InMemoryPocTypeStore::with_records(records),
            get_calls: AtomicUsize::new(0),
            get_all_calls: AtomicUsize::new(0),
        }
    }

    pub fn get_count(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn get_all_count(&self) -> usize {
        self.get_all_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PocTypeStore for CountingPocTypeStore {
    async fn get(
        &self,
        ctx: &RequestContext,
        poc_type: i32,
    ) -> Result<Option<PocTypeRecord>, StorageError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get(ctx, poc_type).await
    }

    async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<PocTypeRecord>, StorageError> {
        self.get_all_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_all(ctx).await
    }
}

/// 所有调用都失败的控制器类型存储。
pub struct FailingPocTypeStore;

#[async_trait]
impl PocTypeStore for FailingPocTypeStore {
    async fn get(
        &self,
        _ctx: &RequestContext,
        _poc_type: i32,
    ) -> Result<Option<PocTypeRecord>, StorageError> {
        Err(StorageError::new("poc type store down"))
    }

    async fn get_all(&self, _ctx: &RequestContext) -> Result<Vec<PocTypeRecord>, StorageError> {
        Err(StorageError::new("poc type store down"))
    }
}

/// 计数的系统参数存储。
pub struct CountingCommonStore {
    inner: InMemoryCommonStore,
    pub calls: AtomicUsize,
}

impl CountingCommonStore {
    pub fn new(parameters: &[(&str, &str)]) -> Self {
        let parameters: HashMap<String, String> = parameters
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Self {
            inner: InMemoryCommonStore::with_parameters(parameters),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommonStore for CountingCommonStore {
    async fn get_system_parameter(
        &self,
        ctx: &RequestContext,
        name: &str,
        default: &str,
    ) -> Result<String, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_system_parameter(ctx, name, default).await
    }

    async fn get_significant_digits(&self, ctx: &RequestContext) -> Result<u32, StorageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.get_significant_digits(ctx).await
    }
}

/// 按短语 ID 计数的短语存储。
pub struct CountingPhraseStore {
    inner: InMemoryLocalePhraseStore,
    calls: Mutex<HashMap<i32, usize>>,
}

impl CountingPhraseStore {
    pub fn new(phrases: &[(i32, &str)]) -> Self {
        let phrases: HashMap<i32, String> = phrases
            .iter()
            .map(|(id, text)| (*id, text.to_string()))
            .collect();
        Self {
            inner: InMemoryLocalePhraseStore::with_phrases(phrases),
            calls: Mutex::new(HashMap::new()),
        }
    }

    pub fn count(&self, phrase_id: i32) -> usize {
        self.calls
            .lock()
            .expect("lock")
            .get(&phrase_id)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl LocalePhraseStore for CountingPhraseStore {
    async fn get(
        &self,
        ctx: &RequestContext,
        phrase_id: i32,
    ) -> Result<Option<String>, StorageError> {
        *self.calls.lock().expect("lock").entry(phrase_id).or_insert(0) += 1;
        self.inner.get(ctx, phrase_id).await
    }
}

/// 测试用的全套内存存储。
pub fn in_memory_stores() -> LookupStores {
    let mut phrases = HashMap::new();
    phrases.insert(4001, "Alarm".to_string());
    phrases.insert(4002, "OK".to_string());
    LookupStores {
        rods: Arc::new(InMemoryRodStore::with_records(vec![
            rod("Well1", 2, "KD"),
            rod("Well1", 1, "D"),
            rod("Well1", 3, "KD"),
            rod("Well2", 1, "C"),
        ])),
        pumping_units: Arc::new(InMemoryPumpingUnitStore::with_records(vec![
            PumpingUnitRecord {
                node_id: "Well1".to_string(),
                unit_id: Some("U-1".to_string()),
                unit_name: Some("Lufkin 228".to_string()),
                api_designation: Some("C-228D-213-86".to_string()),
            },
        ])),
        manufacturers: Arc::new(InMemoryPumpingUnitManufacturerStore::with_records(vec![
            PumpingUnitManufacturerRecord {
                node_id: "Well1".to_string(),
                manufacturer: Some("Lufkin".to_string()),
                abbreviation: Some("LUF".to_string()),
            },
        ])),
        exceptions: Arc::new(InMemoryExceptionStore::with_records(vec![
            exception("Well1", "Low Fillage", 50),
            exception("Well1", "Pump Off", 150),
            exception("Well2", "Idle", 20),
        ])),
        host_alarms: Arc::new(InMemoryHostAlarmStore::with_records(vec![
            host_alarm("Well1", "Tubing Pressure", Some(1)),
            host_alarm("Well2", "Casing Pressure", Some(115)),
        ])),
        poc_types: Arc::new(InMemoryPocTypeStore::with_records(vec![
            PocTypeRecord {
                poc_type: 8,
                description: "SAM Well Manager".to_string(),
            },
            PocTypeRecord {
                poc_type: 17,
                description: "Lufkin LWM".to_string(),
            },
        ])),
        phrases: Arc::new(InMemoryLocalePhraseStore::with_phrases(phrases)),
        common: Arc::new(InMemoryCommonStore::new()),
    }
}
