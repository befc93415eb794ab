//! 资产行数据：一次刷新中某口井/设施的联合记录。

use std::collections::HashMap;

/// 资产 ID 所在的字段。
pub const NODE_ID_KEY: &str = "Well";

/// 启用状态字段。
pub const ENABLED_KEY: &str = "Enabled";

/// 行内字段值（无类型标量）。
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// 显示文本；Null 返回 None。
    pub fn as_text(&self) -> Option<String> {
        match self {
            FieldValue::Null => None,
            FieldValue::Bool(true) => Some("True".to_string()),
            FieldValue::Bool(false) => Some("False".to_string()),
            FieldValue::Int(v) => Some(v.to_string()),
            FieldValue::Float(v) => Some(format_number(*v)),
            FieldValue::Text(v) => Some(v.clone()),
        }
    }

    /// 数值解释；文本按去空白后的浮点数解析，失败返回 None。
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) if v.is_finite() => Some(*v),
            FieldValue::Text(v) => v.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// 一行资产数据：字段名 -> 值。
///
/// 每次刷新重建，格式化器只读。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataRow {
    fields: HashMap<String, FieldValue>,
}

impl DataRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式写入字段（构造测试数据与 DTO 转换使用）。
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// 字段显示文本；缺失或 Null 返回 None。
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(FieldValue::as_text)
    }

    /// 字段显示文本；缺失、Null 或空白返回 None。
    pub fn non_empty_text(&self, key: &str) -> Option<String> {
        self.text(key).filter(|value| !value.trim().is_empty())
    }

    /// 字段数值；无法解析返回 None。
    pub fn number(&self, key: &str) -> Option<f64> {
        self.fields.get(key).and_then(FieldValue::as_f64)
    }

    /// 资产（节点）ID。
    pub fn node_id(&self) -> Option<String> {
        self.non_empty_text(NODE_ID_KEY)
    }

    /// `Enabled` 字段是否为真。
    pub fn is_enabled(&self) -> bool {
        self.text(ENABLED_KEY)
            .map(|value| {
                let value = value.trim();
                value.eq_ignore_ascii_case("true") || value == "1"
            })
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// 数值显示：整数值不带小数点，其余使用最短十进制表示。
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
