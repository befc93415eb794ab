//! 列（视图配置）与条件格式规则。

use crate::cell::Color;

/// 列的来源类型。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    Common,
    Facility,
    Parameter,
    ParamStandard,
    Formula,
    Conditional,
}

impl SourceType {
    /// 由配置中的数值 ID 解析；未知 ID 返回 None。
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            1 => Some(SourceType::Common),
            2 => Some(SourceType::Facility),
            3 => Some(SourceType::Parameter),
            4 => Some(SourceType::ParamStandard),
            5 => Some(SourceType::Formula),
            6 => Some(SourceType::Conditional),
            _ => None,
        }
    }

    pub fn id(self) -> i32 {
        match self {
            SourceType::Common => 1,
            SourceType::Facility => 2,
            SourceType::Parameter => 3,
            SourceType::ParamStandard => 4,
            SourceType::Formula => 5,
            SourceType::Conditional => 6,
        }
    }
}

/// 条件格式比较运算符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionalOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Between,
    NotBetween,
    StringEqual,
    DoesNotEqual,
    Contains,
    DoesNotContain,
    StartsWith,
    DoesNotStartWith,
    EndsWith,
    DoesNotEndWith,
}

impl ConditionalOperator {
    pub const ALL: [ConditionalOperator; 16] = [
        ConditionalOperator::Equal,
        ConditionalOperator::NotEqual,
        ConditionalOperator::GreaterThan,
        ConditionalOperator::GreaterThanOrEqual,
        ConditionalOperator::LessThan,
        ConditionalOperator::LessThanOrEqual,
        ConditionalOperator::Between,
        ConditionalOperator::NotBetween,
        ConditionalOperator::StringEqual,
        ConditionalOperator::DoesNotEqual,
        ConditionalOperator::Contains,
        ConditionalOperator::DoesNotContain,
        ConditionalOperator::StartsWith,
        ConditionalOperator::DoesNotStartWith,
        ConditionalOperator::EndsWith,
        ConditionalOperator::DoesNotEndWith,
    ];

    /// 数值 ID（1 起，按声明顺序）。
    pub fn from_id(id: i32) -> Option<Self> {
        usize::try_from(id)
            .ok()
            .and_then(|id| id.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn id(self) -> i32 {
        Self::ALL
            .iter()
            .position(|op| *op == self)
            .map(|index| index as i32 + 1)
            .unwrap_or(0)
    }

    /// 按名称解析（忽略大小写）。
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(self) -> &'static str {
        match self {
            ConditionalOperator::Equal => "Equal",
            ConditionalOperator::NotEqual => "NotEqual",
            ConditionalOperator::GreaterThan => "GreaterThan",
            ConditionalOperator::GreaterThanOrEqual => "GreaterThanOrEqual",
            ConditionalOperator::LessThan => "LessThan",
            ConditionalOperator::LessThanOrEqual => "LessThanOrEqual",
            ConditionalOperator::Between => "Between",
            ConditionalOperator::NotBetween => "NotBetween",
            ConditionalOperator::StringEqual => "StringEqual",
            ConditionalOperator::DoesNotEqual => "DoesNotEqual",
            ConditionalOperator::Contains => "Contains",
            ConditionalOperator::DoesNotContain => "DoesNotContain",
            ConditionalOperator::StartsWith => "StartsWith",
            ConditionalOperator::DoesNotStartWith => "DoesNotStartWith",
            ConditionalOperator::EndsWith => "EndsWith",
            ConditionalOperator::DoesNotEndWith => "DoesNotEndWith",
        }
    }

    /// 是否属于数值运算符族（解析失败时回退为字符串语义）。
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ConditionalOperator::Equal
                | ConditionalOperator::NotEqual
                | ConditionalOperator::GreaterThan
                | ConditionalOperator::GreaterThanOrEqual
                | ConditionalOperator::LessThan
                | ConditionalOperator::LessThanOrEqual
                | ConditionalOperator::Between
                | ConditionalOperator::NotBetween
        )
    }
}

/// 一条条件格式规则。
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormat {
    pub operator: ConditionalOperator,
    pub value: Option<f64>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub string_value: Option<String>,
    pub back_color: i64,
    pub fore_color: i64,
}

impl ConditionalFormat {
    /// 单操作数数值规则。
    pub fn numeric(
        operator: ConditionalOperator,
        value: f64,
        back_color: i64,
        fore_color: i64,
    ) -> Self {
        Self {
            operator,
            value: Some(value),
            min_value: None,
            max_value: None,
            string_value: None,
            back_color,
            fore_color,
        }
    }

    /// 区间规则（Between / NotBetween）。
    pub fn range(
        operator: ConditionalOperator,
        min_value: f64,
        max_value: f64,
        back_color: i64,
        fore_color: i64,
    ) -> Self {
        Self {
            operator,
            value: None,
            min_value: Some(min_value),
            max_value: Some(max_value),
            string_value: None,
            back_color,
            fore_color,
        }
    }

    /// 字符串规则。
    pub fn text(
        operator: ConditionalOperator,
        string_value: impl Into<String>,
        back_color: i64,
        fore_color: i64,
    ) -> Self {
        Self {
            operator,
            value: None,
            min_value: None,
            max_value: None,
            string_value: Some(string_value.into()),
            back_color,
            fore_color,
        }
    }

    pub fn back(&self) -> Color {
        Color::from_code(self.back_color)
    }

    pub fn fore(&self) -> Color {
        Color::from_code(self.fore_color)
    }
}

/// 视图中的一列定义（每次请求不可变）。
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStatusColumn {
    /// 在 DataRow 中查找值的逻辑列名。
    pub field_heading: String,
    /// 交给工厂选择格式化器的列名（如 "ALARMS"、"PARAMETER"）。
    pub formatter_name: String,
    pub source_type_id: i32,
    pub conditional_formats: Vec<ConditionalFormat>,
}

impl GroupStatusColumn {
    pub fn new(
        field_heading: impl Into<String>,
        formatter_name: impl Into<String>,
        source_type: SourceType,
    ) -> Self {
        Self {
            field_heading: field_heading.into(),
            formatter_name: formatter_name.into(),
            source_type_id: source_type.id(),
            conditional_formats: Vec::new(),
        }
    }

    pub fn with_conditional_formats(mut self, formats: Vec<ConditionalFormat>) -> Self {
        self.conditional_formats = formats;
        self
    }

    pub fn source_type(&self) -> Option<SourceType> {
        SourceType::from_id(self.source_type_id)
    }
}
