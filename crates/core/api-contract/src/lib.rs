//! 稳定的 DTO 与 API 响应契约。

use domain::{
    Color, ConditionalFormat, ConditionalOperator, DataRow, FieldValue,
    GroupStatusColumn, RowColumnModel,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 标准 API 响应封装。
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

/// 失败响应的错误体。
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.into(),
                message: message.into(),
            }),
        }
    }
}

/// DTO 到领域模型的转换错误。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ContractError {
    #[error("unknown conditional operator: {0}")]
    UnknownOperator(String),
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

/// 单元格输出：颜色只在这里格式化为 `#RRGGBB`。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowColumnDto {
    pub value: Option<String>,
    pub back_color: Option<String>,
    pub fore_color: Option<String>,
}

impl From<&RowColumnModel> for RowColumnDto {
    fn from(cell: &RowColumnModel) -> Self {
        Self {
            value: cell.value().map(str::to_string),
            back_color: cell.back_color().map(|color| color.to_string()),
            fore_color: cell.fore_color().map(|color| color.to_string()),
        }
    }
}

/// 运算符既可写名称（"GreaterThan"）也可写数值 ID。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OperatorRef {
    Id(i32),
    Name(String),
}

impl OperatorRef {
    pub fn resolve(&self) -> Result<ConditionalOperator, ContractError> {
        match self {
            OperatorRef::Id(id) => ConditionalOperator::from_id(*id)
                .ok_or_else(|| ContractError::UnknownOperator(id.to_string())),
            OperatorRef::Name(name) => ConditionalOperator::from_name(name)
                .ok_or_else(|| ContractError::UnknownOperator(name.clone())),
        }
    }
}

/// 颜色既可写整数颜色码也可写十六进制文本。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorRef {
    Code(i64),
    Hex(String),
}

impl ColorRef {
    pub fn code(&self) -> Result<i64, ContractError> {
        match self {
            ColorRef::Code(code) => Ok(*code),
            ColorRef::Hex(text) => Color::from_hex(text)
                .map(|color| i64::from(color.code()))
                .ok_or_else(|| ContractError::InvalidColor(text.clone())),
        }
    }
}

/// 条件格式规则请求体。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionalFormatDto {
    pub operator: OperatorRef,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub min_value: Option<f64>,
    #[serde(default)]
    pub max_value: Option<f64>,
    #[serde(default)]
    pub string_value: Option<String>,
    pub back_color: ColorRef,
    pub fore_color: ColorRef,
}

impl TryFrom<ConditionalFormatDto> for ConditionalFormat {
    type Error = ContractError;

    fn try_from(dto: ConditionalFormatDto) -> Result<Self, Self::Error> {
        Ok(ConditionalFormat {
            operator: dto.operator.resolve()?,
            value: dto.value,
            min_value: dto.min_value,
            max_value: dto.max_value,
            string_value: dto.string_value,
            back_color: dto.back_color.code()?,
            fore_color: dto.fore_color.code()?,
        })
    }
}

/// 列定义请求体。
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatusColumnDto {
    pub field_heading: String,
    /// 缺省时与列标题相同。
    #[serde(default)]
    pub formatter_name: Option<String>,
    pub source_type_id: i32,
    #[serde(default)]
    pub conditional_formats: Vec<ConditionalFormatDto>,
}

impl TryFrom<GroupStatusColumnDto> for GroupStatusColumn {
    type Error = ContractError;

    fn try_from(dto: GroupStatusColumnDto) -> Result<Self, Self::Error> {
        let conditional_formats = dto
            .conditional_formats
            .into_iter()
            .map(ConditionalFormat::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let formatter_name = dto
            .formatter_name
            .unwrap_or_else(|| dto.field_heading.clone());
        Ok(GroupStatusColumn {
            field_heading: dto.field_heading,
            formatter_name,
            source_type_id: dto.source_type_id,
            conditional_formats,
        })
    }
}

/// 一行资产数据（JSON 对象原样承载）。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct DataRowDto(pub Map<String, Value>);

impl From<DataRowDto> for DataRow {
    fn from(dto: DataRowDto) -> Self {
        let mut row = DataRow::new();
        for (key, value) in dto.0 {
            row.insert(key, field_value(value));
        }
        row
    }
}

fn field_value(value: Value) -> FieldValue {
    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(flag) => FieldValue::Bool(flag),
        Value::Number(number) => match number.as_i64() {
            Some(int) => FieldValue::Int(int),
            None => number
                .as_f64()
                .map(FieldValue::Float)
                .unwrap_or(FieldValue::Null),
        },
        Value::String(text) => FieldValue::Text(text),
        other => FieldValue::Text(other.to_string()),
    }
}

/// 表格一行的输出。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRowDto {
    pub node_id: Option<String>,
    pub cells: Vec<RowColumnDto>,
}

impl GridRowDto {
    pub fn new(node_id: Option<String>, cells: &[RowColumnModel]) -> Self {
        Self {
            node_id,
            cells: cells.iter().map(RowColumnDto::from).collect(),
        }
    }
}

/// 分组状态表格返回结构。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupStatusGridDto {
    pub columns: Vec<String>,
    pub rows: Vec<GridRowDto>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

