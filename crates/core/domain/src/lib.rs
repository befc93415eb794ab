pub mod cell;
pub mod column;
pub mod data;

pub use cell::{CellColors, Color, RowColumnModel};
pub use column::{ConditionalFormat, ConditionalOperator, GroupStatusColumn, SourceType};
pub use data::{DataRow, FieldValue, format_number};

/// 请求上下文：贯穿一次分组状态刷新的所有调用。
///
/// `correlation_id` 仅用于日志关联，不参与任何控制流。
/// 默认值为空上下文（仅用于测试或占位）。
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub correlation_id: String,
}

impl RequestContext {
    /// 构造携带关联 ID 的请求上下文。
    pub fn new(correlation_id: impl Into<String>) -> Self {
        Self {
            correlation_id: correlation_id.into(),
        }
    }
}
