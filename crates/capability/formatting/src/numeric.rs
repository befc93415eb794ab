//! 数值显示辅助。

use domain::data::format_number;

/// 按有效数字位数四舍五入。
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() || digits == 0 {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = digits as i32 - 1 - magnitude;
    if decimals >= 0 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-decimals);
        (value / factor).round() * factor
    }
}

/// 按有效数字位数格式化。
pub fn format_significant(value: f64, digits: u32) -> String {
    format_number(round_significant(value, digits))
}

/// 百分比取整后的文本；非有限值返回 None。
pub fn percent_text(numerator: f64, denominator: f64) -> Option<String> {
    let percent = numerator / denominator * 100.0;
    if !percent.is_finite() {
        return None;
    }
    Some(format!("{}", percent.round() as i64))
}
