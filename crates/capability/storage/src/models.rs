//! 数据模型
//!
//! 定义查找存储返回的扁平记录（按节点 ID 批量返回）：
//! - 抽油杆：RodRecord
//! - 抽油机：PumpingUnitRecord, PumpingUnitManufacturerRecord
//! - 异常：ExceptionRecord
//! - 主机报警：HostAlarmRecord
//! - 控制器类型：PocTypeRecord
//! - 批量结果：ColumnData（列数据缓存服务的返回值）

use serde::{Deserialize, Serialize};

/// 抽油杆记录（每段一条）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RodRecord {
    pub node_id: String,
    pub rod_num: i32,
    #[serde(default)]
    pub rod_grade_id: Option<i32>,
    #[serde(default)]
    pub rod_grade_name: Option<String>,
    #[serde(default)]
    pub diameter: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
}

/// 抽油机型号记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PumpingUnitRecord {
    pub node_id: String,
    #[serde(default)]
    pub unit_id: Option<String>,
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default, alias = "APIDesignation")]
    pub api_designation: Option<String>,
}

/// 抽油机制造商记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PumpingUnitManufacturerRecord {
    pub node_id: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// 异常记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRecord {
    pub node_id: String,
    #[serde(default)]
    pub exception_group_name: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// 主机报警记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostAlarmRecord {
    pub node_id: String,
    #[serde(default)]
    pub address: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alarm_state: Option<i32>,
    #[serde(default)]
    pub alarm_type: Option<i32>,
    #[serde(default)]
    pub percent_change: Option<f64>,
    #[serde(default)]
    pub min_to_max_limit: Option<f64>,
}

/// 控制器（POC）类型记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PocTypeRecord {
    pub poc_type: i32,
    pub description: String,
}

/// 列数据缓存服务可分派的查找种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupKind {
    RodGrade,
    PumpingUnit,
    PumpingUnitManufacturer,
    ExceptionGroupName,
    HostAlarms,
    PocType,
}

impl LookupKind {
    /// 按逻辑列名解析（忽略大小写与首尾空白）。
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "ROD GRADE" => Some(LookupKind::RodGrade),
            "PUMPING UNIT" => Some(LookupKind::PumpingUnit),
            "PUMPING UNIT MANUFACTURER" => Some(LookupKind::PumpingUnitManufacturer),
            "EXCEPTIONGROUPNAME" => Some(LookupKind::ExceptionGroupName),
            "HOSTALARMS" => Some(LookupKind::HostAlarms),
            "CONTROLLER" | "POCTYPE" | "POC TYPE" => Some(LookupKind::PocType),
            _ => None,
        }
    }

    /// 规范逻辑列名。
    pub fn name(self) -> &'static str {
        match self {
            LookupKind::RodGrade => "ROD GRADE",
            LookupKind::PumpingUnit => "PUMPING UNIT",
            LookupKind::PumpingUnitManufacturer => "PUMPING UNIT MANUFACTURER",
            LookupKind::ExceptionGroupName => "EXCEPTIONGROUPNAME",
            LookupKind::HostAlarms => "HOSTALARMS",
            LookupKind::PocType => "POCTYPE",
        }
    }
}

/// 一次批量查找的原始结果。
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Rods(Vec<RodRecord>),
    PumpingUnits(Vec<PumpingUnitRecord>),
    Manufacturers(Vec<PumpingUnitManufacturerRecord>),
    Exceptions(Vec<ExceptionRecord>),
    HostAlarms(Vec<HostAlarmRecord>),
    PocTypes(Vec<PocTypeRecord>),
}

impl ColumnData {
    pub fn kind(&self) -> LookupKind {
        match self {
            ColumnData::Rods(_) => LookupKind::RodGrade,
            ColumnData::PumpingUnits(_) => LookupKind::PumpingUnit,
            ColumnData::Manufacturers(_) => LookupKind::PumpingUnitManufacturer,
            ColumnData::Exceptions(_) => LookupKind::ExceptionGroupName,
            ColumnData::HostAlarms(_) => LookupKind::HostAlarms,
            ColumnData::PocTypes(_) => LookupKind::PocType,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Rods(items) => items.len(),
            ColumnData::PumpingUnits(items) => items.len(),
            ColumnData::Manufacturers(items) => items.len(),
            ColumnData::Exceptions(items) => items.len(),
            ColumnData::HostAlarms(items) => items.len(),
            ColumnData::PocTypes(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
