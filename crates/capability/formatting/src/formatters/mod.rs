//! 列格式化器实现。

mod alarm;
mod camera;
mod comm;
mod conditional;
mod enabled;
mod exception;
mod facility;
mod formula;
mod host_alarm;
mod manufacturer;
mod parameter;
mod percent_comm;
mod percent_fill;
mod percent_runtime;
mod poc_type;
mod pumping_unit;
mod rod_grade;
mod run_status;
mod time_in_state;

pub use alarm::AlarmFormatter;
pub use camera::{ALARM_PHRASE_ID, CameraAlarmsFormatter, OK_PHRASE_ID};
pub use comm::CommFormatter;
pub use conditional::ConditionalFormatter;
pub use enabled::{DISABLED_TEXT, ENABLED_TEXT, EnabledFormatter};
pub use exception::{ExceptionFormatter, highest_priority};
pub use facility::FacilityTagAlarmsFormatter;
pub use formula::FormulaFormatter;
pub use host_alarm::{HostAlarmFormatter, select_alarm, state_suffix};
pub use manufacturer::PumpingUnitManufacturerFormatter;
pub use parameter::{ParameterFormatter, SignificantDigits, embedded_colors};
pub use percent_comm::{LOW_COMM_PERCENT, PercentCommFormatter};
pub use percent_fill::PercentFillFormatter;
pub use percent_runtime::{DEFAULT_GAUGE_OFF_HOURS, PercentRuntimeFormatter};
pub use poc_type::{POC_TYPES_CACHE_KEY, PocTypeFormatter};
pub use pumping_unit::PumpingUnitFormatter;
pub use rod_grade::{RodGradeFormatter, join_rod_grades};
pub use run_status::RunStatusFormatter;
pub use time_in_state::{TimeInServiceFormatter, format_duration_minutes};

/// 节点 ID 比较忽略大小写与首尾空白。
pub(crate) fn same_node(left: &str, right: &str) -> bool {
    left.trim().eq_ignore_ascii_case(right.trim())
}
