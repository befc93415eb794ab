//! 快照文件：一次刷新的资产行、列定义与查找数据。

use api_contract::{DataRowDto, GroupStatusColumnDto};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;
use wms_storage::{
    ExceptionRecord, HostAlarmRecord, InMemoryCommonStore, InMemoryExceptionStore,
    InMemoryHostAlarmStore, InMemoryLocalePhraseStore, InMemoryPocTypeStore,
    InMemoryPumpingUnitManufacturerStore, InMemoryPumpingUnitStore, InMemoryRodStore,
    LookupStores, PocTypeRecord, PumpingUnitManufacturerRecord, PumpingUnitRecord, RodRecord,
};

/// 快照根结构。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub columns: Vec<GroupStatusColumnDto>,
    #[serde(default)]
    pub rows: Vec<DataRowDto>,
    #[serde(default)]
    pub lookups: LookupTables,
    /// 短语 ID -> 本地化文本。
    #[serde(default)]
    pub phrases: HashMap<i32, String>,
    #[serde(default)]
    pub system_parameters: HashMap<String, String>,
}

/// 查找表（按节点 ID 的扁平记录）。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupTables {
    #[serde(default)]
    pub rods: Vec<RodRecord>,
    #[serde(default)]
    pub pumping_units: Vec<PumpingUnitRecord>,
    #[serde(default)]
    pub manufacturers: Vec<PumpingUnitManufacturerRecord>,
    #[serde(default)]
    pub exceptions: Vec<ExceptionRecord>,
    #[serde(default)]
    pub host_alarms: Vec<HostAlarmRecord>,
    #[serde(default)]
    pub poc_types: Vec<PocTypeRecord>,
}

impl Snapshot {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// 以快照内容构造内存查找存储。
    pub fn stores(&self, default_significant_digits: u32) -> LookupStores {
        let lookups = &self.lookups;
        LookupStores {
            rods: Arc::new(InMemoryRodStore::with_records(lookups.rods.clone())),
            pumping_units: Arc::new(InMemoryPumpingUnitStore::with_records(
                lookups.pumping_units.clone(),
            )),
            manufacturers: Arc::new(InMemoryPumpingUnitManufacturerStore::with_records(
                lookups.manufacturers.clone(),
            )),
            exceptions: Arc::new(InMemoryExceptionStore::with_records(
                lookups.exceptions.clone(),
            )),
            host_alarms: Arc::new(InMemoryHostAlarmStore::with_records(
                lookups.host_alarms.clone(),
            )),
            poc_types: Arc::new(InMemoryPocTypeStore::with_records(lookups.poc_types.clone())),
            phrases: Arc::new(InMemoryLocalePhraseStore::with_phrases(self.phrases.clone())),
            common: Arc::new(
                InMemoryCommonStore::with_parameters(self.system_parameters.clone())
                    .with_default_significant_digits(default_significant_digits),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Snapshot;

    #[test]
    fn parses_camel_case_snapshot() {
        let snapshot = Snapshot::from_json(
            r#"{
                "columns": [{"fieldHeading": "Rod Grade", "sourceTypeId": 1}],
                "rows": [{"Well": "Well1"}],
                "lookups": {
                    "rods": [{"nodeId": "Well1", "rodNum": 1, "rodGradeName": "D"}],
                    "pocTypes": [{"pocType": 8, "description": "SAM"}]
                },
                "phrases": {"4001": "Camera Alarm"},
                "systemParameters": {"NextGenSignificantDigits": "4"}
            }"#,
        )
        .expect("parse");
        assert_eq!(snapshot.columns.len(), 1);
        assert_eq!(snapshot.rows.len(), 1);
        assert_eq!(snapshot.lookups.rods.len(), 1);
        assert_eq!(snapshot.lookups.poc_types[0].poc_type, 8);
        assert_eq!(snapshot.phrases.get(&4001).map(String::as_str), Some("Camera Alarm"));
        assert!(snapshot.lookups.host_alarms.is_empty());
    }

    #[test]
    fn empty_object_is_valid() {
        let snapshot = Snapshot::from_json("{}").expect("parse");
        assert!(snapshot.columns.is_empty());
        assert!(snapshot.rows.is_empty());
    }
}
