//! 列格式化器能力接口。
//!
//! 每个格式化器提供两个操作：
//! - `calculate_value`：由行数据（必要时查找存储）计算 `cell.value`
//! - `perform_format`：按阈值或规则决定背景/前景色（成对设置或都不设置）
//!
//! 行或单元格缺失属于宿主集成错误，由 [`calculate_cell`] / [`format_cell`]
//! 在任何计算之前返回 `FormatError::InvalidArgument`。

use crate::error::FormatError;
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RequestContext, RowColumnModel};
use tracing::warn;
use wms_storage::{ColumnData, LookupKind};

/// 格式化器种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    Alarm,
    Comm,
    PercentComm,
    PercentFill,
    PercentRuntime,
    PocType,
    PumpingUnit,
    PumpingUnitManufacturer,
    RodGrade,
    Exception,
    HostAlarm,
    FacilityTagAlarms,
    CameraAlarms,
    RunStatus,
    TimeInService,
    Enabled,
    Conditional,
    Parameter,
    ParamStandard,
    Formula,
}

/// 一次格式化调用的上下文。
///
/// `bulk` 为列数据缓存服务按列批量取回的数据；种类匹配时格式化器从中按节点过滤，
/// 不再逐行调用查找存储。
#[derive(Debug, Clone, Copy)]
pub struct FormatContext<'a> {
    pub request: &'a RequestContext,
    pub bulk: Option<&'a ColumnData>,
}

impl<'a> FormatContext<'a> {
    pub fn new(request: &'a RequestContext) -> Self {
        Self {
            request,
            bulk: None,
        }
    }

    pub fn with_bulk(mut self, bulk: Option<&'a ColumnData>) -> Self {
        self.bulk = bulk;
        self
    }

    pub fn correlation_id(&self) -> &str {
        &self.request.correlation_id
    }
}

/// 列格式化器。
///
/// 实现不持有每次调用的可变状态，可跨请求、跨线程共享。
#[async_trait]
pub trait ColumnFormatter: Send + Sync {
    fn kind(&self) -> FormatterKind;

    /// 该格式化器消费的批量查找种类（供宿主按列预取）。
    fn lookup(&self) -> Option<LookupKind> {
        None
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError>;

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError>;
}

/// 宿主入口：校验参数后计算单元格值。
pub async fn calculate_cell(
    formatter: &dyn ColumnFormatter,
    row: Option<&DataRow>,
    cell: Option<&mut RowColumnModel>,
    column: Option<&GroupStatusColumn>,
    ctx: &FormatContext<'_>,
) -> Result<(), FormatError> {
    let (row, cell) = require_row_and_cell(formatter, row, cell, ctx)?;
    formatter.calculate_value(row, cell, column, ctx).await
}

/// 宿主入口：校验参数后计算单元格颜色。
pub async fn format_cell(
    formatter: &dyn ColumnFormatter,
    row: Option<&DataRow>,
    cell: Option<&mut RowColumnModel>,
    column: Option<&GroupStatusColumn>,
    ctx: &FormatContext<'_>,
) -> Result<(), FormatError> {
    let (row, cell) = require_row_and_cell(formatter, row, cell, ctx)?;
    formatter.perform_format(row, cell, column, ctx).await
}

fn require_row_and_cell<'r, 'c>(
    formatter: &dyn ColumnFormatter,
    row: Option<&'r DataRow>,
    cell: Option<&'c mut RowColumnModel>,
    ctx: &FormatContext<'_>,
) -> Result<(&'r DataRow, &'c mut RowColumnModel), FormatError> {
    let Some(row) = row else {
        return Err(invalid_argument(formatter, "row", ctx));
    };
    let Some(cell) = cell else {
        return Err(invalid_argument(formatter, "cell", ctx));
    };
    Ok((row, cell))
}

fn invalid_argument(
    formatter: &dyn ColumnFormatter,
    argument: &'static str,
    ctx: &FormatContext<'_>,
) -> FormatError {
    wms_telemetry::record_invalid_argument();
    warn!(
        target: "wms.formatting",
        correlation_id = %ctx.correlation_id(),
        formatter = ?formatter.kind(),
        argument,
        "formatter_invalid_argument"
    );
    FormatError::InvalidArgument(argument)
}

/// 需要列定义的格式化器使用。
pub(crate) fn require_column(
    column: Option<&GroupStatusColumn>,
) -> Result<&GroupStatusColumn, FormatError> {
    column.ok_or(FormatError::InvalidArgument("column"))
}
