//! 条件格式规则求值
//!
//! 数值运算符先把实际值解析为浮点数；解析失败时同一运算符退化为字符串语义
//! （Equal 等价于 StringEqual，比较运算按序数比较 `string_value`，区间运算不匹配）。
//! 任何输入都不会报错，缺少操作数时视为不匹配。

use domain::{ConditionalFormat, ConditionalOperator};
use std::cmp::Ordering;

/// 对单条规则求值。`actual` 为 None 时按空字符串处理。
pub fn evaluate(
    operator: ConditionalOperator,
    actual: Option<&str>,
    rule: &ConditionalFormat,
) -> bool {
    let actual = actual.unwrap_or("");
    if operator.is_numeric() {
        match parse_number(actual) {
            Some(number) => evaluate_numeric(operator, number, rule),
            None => evaluate_numeric_fallback(operator, actual, rule),
        }
    } else {
        evaluate_string(operator, actual, rule)
    }
}

/// 返回第一条匹配的规则。
pub fn first_match<'a>(
    rules: &'a [ConditionalFormat],
    actual: Option<&str>,
) -> Option<&'a ConditionalFormat> {
    rules
        .iter()
        .find(|rule| evaluate(rule.operator, actual, rule))
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

fn evaluate_numeric(operator: ConditionalOperator, actual: f64, rule: &ConditionalFormat) -> bool {
    use ConditionalOperator::*;
    match operator {
        Between | NotBetween => {
            let (Some(min), Some(max)) = (rule.min_value, rule.max_value) else {
                return false;
            };
            let inside = actual >= min && actual <= max;
            if operator == Between { inside } else { !inside }
        }
        _ => {
            let Some(expected) = rule.value else {
                return false;
            };
            match operator {
                Equal => actual == expected,
                NotEqual => actual != expected,
                GreaterThan => actual > expected,
                GreaterThanOrEqual => actual >= expected,
                LessThan => actual < expected,
                LessThanOrEqual => actual <= expected,
                _ => false,
            }
        }
    }
}

fn evaluate_numeric_fallback(
    operator: ConditionalOperator,
    actual: &str,
    rule: &ConditionalFormat,
) -> bool {
    use ConditionalOperator::*;
    let Some(expected) = rule.string_value.as_deref() else {
        return false;
    };
    let ordering = actual.cmp(expected);
    match operator {
        Equal => ordering == Ordering::Equal,
        NotEqual => ordering != Ordering::Equal,
        GreaterThan => ordering == Ordering::Greater,
        GreaterThanOrEqual => ordering != Ordering::Less,
        LessThan => ordering == Ordering::Less,
        LessThanOrEqual => ordering != Ordering::Greater,
        _ => false,
    }
}

fn evaluate_string(operator: ConditionalOperator, actual: &str, rule: &ConditionalFormat) -> bool {
    use ConditionalOperator::*;
    let Some(expected) = rule.string_value.as_deref() else {
        return false;
    };
    match operator {
        StringEqual => actual == expected,
        DoesNotEqual => actual != expected,
        Contains => actual.contains(expected),
        DoesNotContain => !actual.contains(expected),
        StartsWith => actual.starts_with(expected),
        DoesNotStartWith => !actual.starts_with(expected),
        EndsWith => actual.ends_with(expected),
        DoesNotEndWith => !actual.ends_with(expected),
        _ => false,
    }
}
