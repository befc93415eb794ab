//! 列格式化器工厂
//!
//! 按 (来源类型, 列名) 选择格式化器：
//! - 列名忽略大小写与首尾空白，在固定分派表中匹配
//! - 来源类型作为第二判别条件（如 "FACILITY" 只在 Facility 下解析）
//! - 列上配置了条件格式规则时，一律返回条件格式化器（包装可解析的基础格式化器）
//!
//! 工厂持有的格式化器跨请求共享（参考数据缓存随实例存活），`create` 返回共享实例。

use crate::formatter::{ColumnFormatter, FormatterKind};
use crate::formatters::{
    AlarmFormatter, CameraAlarmsFormatter, CommFormatter, ConditionalFormatter, EnabledFormatter,
    ExceptionFormatter, FacilityTagAlarmsFormatter, FormulaFormatter, HostAlarmFormatter,
    ParameterFormatter, PercentCommFormatter, PercentFillFormatter, PercentRuntimeFormatter,
    PocTypeFormatter, PumpingUnitFormatter, PumpingUnitManufacturerFormatter, RodGradeFormatter,
    RunStatusFormatter, TimeInServiceFormatter,
};
use domain::{ConditionalFormat, SourceType};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use wms_storage::reference_cache;

pub use wms_storage::LookupStores;

struct Route {
    names: &'static [&'static str],
    kind: FormatterKind,
    sources: &'static [SourceType],
}

const COMMON: &[SourceType] = &[SourceType::Common];
const COMMON_OR_FACILITY: &[SourceType] = &[SourceType::Common, SourceType::Facility];
const ANY_SOURCE: &[SourceType] = &[
    SourceType::Common,
    SourceType::Facility,
    SourceType::Parameter,
    SourceType::ParamStandard,
    SourceType::Formula,
    SourceType::Conditional,
];

const ROUTES: &[Route] = &[
    Route {
        names: &["ALARMS", "ALARM"],
        kind: FormatterKind::Alarm,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["COMM STATUS", "COMM"],
        kind: FormatterKind::Comm,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["%COMM", "PERCENT COMM"],
        kind: FormatterKind::PercentComm,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["%FILL", "PERCENT FILL"],
        kind: FormatterKind::PercentFill,
        sources: COMMON,
    },
    Route {
        names: &["%RT", "%RTY", "PERCENT RTY", "RUNTIME"],
        kind: FormatterKind::PercentRuntime,
        sources: COMMON,
    },
    Route {
        names: &["CONTROLLER", "POCTYPE", "POC TYPE"],
        kind: FormatterKind::PocType,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["PUMPING UNIT"],
        kind: FormatterKind::PumpingUnit,
        sources: COMMON,
    },
    Route {
        names: &["PUMPING UNIT MANUFACTURER"],
        kind: FormatterKind::PumpingUnitManufacturer,
        sources: COMMON,
    },
    Route {
        names: &["ROD GRADE"],
        kind: FormatterKind::RodGrade,
        sources: COMMON,
    },
    Route {
        names: &["EXCEPTIONGROUPNAME", "EXCEPTION GROUP"],
        kind: FormatterKind::Exception,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["HOSTALARMS", "HOST ALARMS"],
        kind: FormatterKind::HostAlarm,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["FACILITY"],
        kind: FormatterKind::FacilityTagAlarms,
        sources: &[SourceType::Facility],
    },
    Route {
        names: &["CAMERA ALARMS"],
        kind: FormatterKind::CameraAlarms,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["RUN STATUS"],
        kind: FormatterKind::RunStatus,
        sources: COMMON,
    },
    Route {
        names: &["TIME IN STATE", "TIS", "TIME IN SERVICE"],
        kind: FormatterKind::TimeInService,
        sources: COMMON,
    },
    Route {
        names: &["ENABLED"],
        kind: FormatterKind::Enabled,
        sources: COMMON_OR_FACILITY,
    },
    Route {
        names: &["CONDITIONAL"],
        kind: FormatterKind::Conditional,
        sources: ANY_SOURCE,
    },
    Route {
        names: &["PARAMETER"],
        kind: FormatterKind::Parameter,
        sources: &[SourceType::Parameter],
    },
    Route {
        names: &["PARAMSTANDARD", "PARAM STANDARD"],
        kind: FormatterKind::ParamStandard,
        sources: &[SourceType::ParamStandard],
    },
    Route {
        names: &["FORMULA"],
        kind: FormatterKind::Formula,
        sources: &[SourceType::Formula],
    },
];

/// 在分派表中解析格式化器种类；未知来源或列名返回 None。
pub fn resolve_kind(source_type_id: i32, column_name: &str) -> Option<FormatterKind> {
    let source = SourceType::from_id(source_type_id)?;
    let name = column_name.trim().to_ascii_uppercase();
    ROUTES
        .iter()
        .find(|route| route.names.contains(&name.as_str()) && route.sources.contains(&source))
        .map(|route| route.kind)
}

/// 列格式化器工厂。
pub struct ColumnFormatterFactory {
    formatters: HashMap<FormatterKind, Arc<dyn ColumnFormatter>>,
}

impl ColumnFormatterFactory {
    /// 以给定的格式化器集合构造（同种类后者覆盖前者）。
    pub fn new(formatters: Vec<Arc<dyn ColumnFormatter>>) -> Self {
        let formatters = formatters
            .into_iter()
            .map(|formatter| (formatter.kind(), formatter))
            .collect();
        Self { formatters }
    }

    /// 构造全部 20 种格式化器。
    ///
    /// `reference_ttl_seconds` 为参考数据缓存时长（0 表示不过期）。
    pub fn from_stores(stores: &LookupStores, reference_ttl_seconds: u64) -> Self {
        let poc_cache = reference_cache(reference_ttl_seconds);
        Self::new(vec![
            Arc::new(AlarmFormatter),
            Arc::new(CommFormatter),
            Arc::new(PercentCommFormatter),
            Arc::new(PercentFillFormatter),
            Arc::new(PercentRuntimeFormatter::new(
                stores.common.clone(),
                reference_ttl_seconds,
            )),
            Arc::new(PocTypeFormatter::new(stores.poc_types.clone()).with_cache(poc_cache)),
            Arc::new(PumpingUnitFormatter::new(stores.pumping_units.clone())),
            Arc::new(PumpingUnitManufacturerFormatter::new(
                stores.manufacturers.clone(),
            )),
            Arc::new(RodGradeFormatter::new(stores.rods.clone())),
            Arc::new(ExceptionFormatter::new(stores.exceptions.clone())),
            Arc::new(HostAlarmFormatter::new(stores.host_alarms.clone())),
            Arc::new(FacilityTagAlarmsFormatter),
            Arc::new(CameraAlarmsFormatter::new(
                stores.phrases.clone(),
                reference_ttl_seconds,
            )),
            Arc::new(RunStatusFormatter),
            Arc::new(TimeInServiceFormatter),
            Arc::new(EnabledFormatter),
            Arc::new(ConditionalFormatter::new(None)),
            Arc::new(ParameterFormatter::parameter(
                stores.common.clone(),
                reference_ttl_seconds,
            )),
            Arc::new(ParameterFormatter::param_standard(
                stores.common.clone(),
                reference_ttl_seconds,
            )),
            Arc::new(FormulaFormatter::new(
                stores.common.clone(),
                reference_ttl_seconds,
            )),
        ])
    }

    /// 已注册的格式化器数量。
    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }

    /// 按种类取已注册的格式化器。
    pub fn get(&self, kind: FormatterKind) -> Option<Arc<dyn ColumnFormatter>> {
        self.formatters.get(&kind).cloned()
    }

    /// 为一列选择格式化器。
    ///
    /// 规则非空时返回条件格式化器；否则按分派表解析，未知来源或列名返回 None。
    pub fn create(
        &self,
        source_type_id: i32,
        column_name: &str,
        conditional_formats: &[ConditionalFormat],
    ) -> Option<Arc<dyn ColumnFormatter>> {
        let kind = resolve_kind(source_type_id, column_name);
        if !conditional_formats.is_empty() {
            let base = kind
                .filter(|kind| *kind != FormatterKind::Conditional)
                .and_then(|kind| self.get(kind));
            debug!(
                target: "wms.formatting",
                source_type_id,
                column_name,
                base = ?base.as_ref().map(|base| base.kind()),
                rules = conditional_formats.len(),
                "conditional_formatter_created"
            );
            return Some(Arc::new(ConditionalFormatter::new(base)));
        }
        let Some(kind) = kind else {
            debug!(
                target: "wms.formatting",
                source_type_id,
                column_name,
                "formatter_not_found"
            );
            return None;
        };
        let formatter = self.get(kind);
        if formatter.is_none() {
            debug!(
                target: "wms.formatting",
                source_type_id,
                column_name,
                kind = ?kind,
                "formatter_not_registered"
            );
        }
        formatter
    }
}
