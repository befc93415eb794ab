//! 参数 / 标准参数列。

use crate::colors::parse_color;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind, require_column};
use crate::numeric::format_significant;
use async_trait::async_trait;
use domain::{CellColors, DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::{CommonStore, ReferenceCache, reference_cache};

const SIGNIFICANT_DIGITS_CACHE_KEY: &str = "significant-digits";

/// 系统有效数字位数，跨请求缓存。
pub struct SignificantDigits {
    common: Arc<dyn CommonStore>,
    cache: ReferenceCache<u32>,
}

impl SignificantDigits {
    pub fn new(common: Arc<dyn CommonStore>, ttl_seconds: u64) -> Self {
        Self {
            common,
            cache: reference_cache(ttl_seconds),
        }
    }

    pub async fn get(&self, ctx: &FormatContext<'_>) -> Result<u32, FormatError> {
        let digits = self
            .cache
            .try_get_with(
                SIGNIFICANT_DIGITS_CACHE_KEY.to_string(),
                self.common.get_significant_digits(ctx.request),
            )
            .await?;
        Ok(digits)
    }

    /// 数值字段按有效数字取整，非数值原样显示，缺失为空。
    pub async fn field_text(
        &self,
        row: &DataRow,
        field: &str,
        ctx: &FormatContext<'_>,
    ) -> Result<String, FormatError> {
        match row.number(field) {
            Some(number) => Ok(format_significant(number, self.get(ctx).await?)),
            None => Ok(row.text(field).unwrap_or_default()),
        }
    }
}

/// `Parameter` 与 `ParamStandard` 共用：值按有效数字显示，颜色来自行内嵌的颜色字段。
pub struct ParameterFormatter {
    kind: FormatterKind,
    digits: SignificantDigits,
}

impl ParameterFormatter {
    pub fn parameter(common: Arc<dyn CommonStore>, ttl_seconds: u64) -> Self {
        Self {
            kind: FormatterKind::Parameter,
            digits: SignificantDigits::new(common, ttl_seconds),
        }
    }

    pub fn param_standard(common: Arc<dyn CommonStore>, ttl_seconds: u64) -> Self {
        Self {
            kind: FormatterKind::ParamStandard,
            digits: SignificantDigits::new(common, ttl_seconds),
        }
    }
}

/// 行内嵌颜色字段名；`Description` 列使用不带前缀的字段。
pub fn color_fields(field_heading: &str) -> (String, String) {
    if field_heading.eq_ignore_ascii_case(fields::DESCRIPTION) {
        (fields::BACK_COLOR.to_string(), fields::FORE_COLOR.to_string())
    } else {
        (
            format!("{}.{}", field_heading, fields::BACK_COLOR),
            format!("{}.{}", field_heading, fields::FORE_COLOR),
        )
    }
}

/// 两个颜色字段都能解析时才返回颜色。
pub fn embedded_colors(row: &DataRow, field_heading: &str) -> Option<CellColors> {
    let (back_field, fore_field) = color_fields(field_heading);
    let back = row.non_empty_text(&back_field).and_then(|text| parse_color(&text))?;
    let fore = row.non_empty_text(&fore_field).and_then(|text| parse_color(&text))?;
    Some(CellColors::new(back, fore))
}

#[async_trait]
impl ColumnFormatter for ParameterFormatter {
    fn kind(&self) -> FormatterKind {
        self.kind
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let column = require_column(column)?;
        let value = self.digits.field_text(row, &column.field_heading, ctx).await?;
        cell.set_value(value);
        Ok(())
    }

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let column = require_column(column)?;
        if let Some(pair) = embedded_colors(row, &column.field_heading) {
            cell.set_colors(pair);
        }
        Ok(())
    }
}
