//! DataRow 中格式化器读取的字段名。

pub const HIGH_PRI_ALARM: &str = "tblNodeMaster.HighPriAlarm";
pub const COMM_STATUS: &str = "tblNodeMaster.CommStatus";
pub const COMM_SUCCESS: &str = "tblNodeMaster.CommSuccess";
pub const COMM_ATTEMPT: &str = "tblNodeMaster.CommAttempt";
pub const PUMP_FILLAGE: &str = "tblNodeMaster.PumpFillage";
pub const FILLAGE_SETPOINT: &str = "tblNodeMaster.FillageSetpoint";
pub const RUNTIME_YESTERDAY: &str = "tblNodeMaster.RunTimeYesterday";
pub const RUNTIME_ALARM_STATE: &str = "tblNodeMaster.RunTimeAlarmState";
pub const POC_TYPE: &str = "tblNodeMaster.POCTYPE";
pub const RUN_STATUS: &str = "tblNodeMaster.RunStatus";
pub const TIME_IN_STATE: &str = "tblNodeMaster.TimeInState";

pub const ENABLED: &str = domain::data::ENABLED_KEY;
pub const ENBLD: &str = "Enbld";
pub const DISABLE_CODE: &str = "DisableCode";

pub const FACILITY_TAG_ALARMS: &str = "FacilityTagAlarms";
pub const CAMERA_ALARM_COUNT: &str = "CameraAlarmCount";

/// 描述列使用不带前缀的颜色字段。
pub const DESCRIPTION: &str = "Description";
pub const BACK_COLOR: &str = "BackColor";
pub const FORE_COLOR: &str = "ForeColor";

/// 系统参数：生产日（计产周期）小时数。
pub const GAUGE_OFF_HOURS_PARAMETER: &str = "GaugeOffHours";
