//! 分组状态表格的单元格输出模型与颜色表示。

use std::fmt;

/// 24 位 RGB 颜色（内部统一表示，只在序列化边界格式化为 `#RRGGBB`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// 从整数颜色码构造，只保留低 24 位（兼容带符号 ARGB 码）。
    pub const fn from_code(code: i64) -> Self {
        Self((code & 0x00FF_FFFF) as u32)
    }

    /// 解析 `#RRGGBB` / `RRGGBB` 十六进制文本。
    pub fn from_hex(text: &str) -> Option<Self> {
        let digits = text.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    pub const fn code(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// 单元格背景色与前景色（成对出现）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColors {
    pub back: Color,
    pub fore: Color,
}

impl CellColors {
    pub const fn new(back: Color, fore: Color) -> Self {
        Self { back, fore }
    }
}

/// 单元格输出。
///
/// 先由 `calculate_value` 填充 `value`，再由 `perform_format` 决定颜色；
/// `colors` 为 None 表示不覆盖默认样式。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowColumnModel {
    pub value: Option<String>,
    colors: Option<CellColors>,
}

impl RowColumnModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    pub fn clear_value(&mut self) {
        self.value = None;
    }

    pub fn colors(&self) -> Option<CellColors> {
        self.colors
    }

    pub fn back_color(&self) -> Option<Color> {
        self.colors.map(|colors| colors.back)
    }

    pub fn fore_color(&self) -> Option<Color> {
        self.colors.map(|colors| colors.fore)
    }

    pub fn set_colors(&mut self, colors: CellColors) {
        self.colors = Some(colors);
    }

    pub fn clear_colors(&mut self) {
        self.colors = None;
    }
}
