//! 颜色规则表
//!
//! 各格式化器共用的固定阈值与颜色。颜色统一为 `Color`（24 位 RGB），
//! 只在 API 契约层格式化为 `#RRGGBB`。

use domain::{CellColors, Color};

pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
pub const YELLOW: Color = Color::rgb(0xFF, 0xFF, 0x00);
pub const PINK: Color = Color::rgb(0xFF, 0xC0, 0xCB);
pub const CYAN: Color = Color::rgb(0x00, 0xFF, 0xFF);
pub const MEDIUM_SPRING_GREEN: Color = Color::rgb(0x00, 0xFA, 0x9A);

/// 报警：红底白字。
pub const ALARM: CellColors = CellColors::new(RED, WHITE);
/// 警告：黄底黑字。
pub const WARNING: CellColors = CellColors::new(YELLOW, BLACK);
/// 启用状态：中春绿底黑字。
pub const ENABLED: CellColors = CellColors::new(MEDIUM_SPRING_GREEN, BLACK);

/// 数值区间（闭区间）到颜色的映射。
#[derive(Debug, Clone, Copy)]
pub struct ColorBand {
    pub min: i64,
    pub max: i64,
    pub colors: CellColors,
}

impl ColorBand {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// 主机报警状态色带；表外的非零状态使用 `HOST_ALARM_FALLBACK`。
pub const HOST_ALARM_BANDS: [ColorBand; 4] = [
    ColorBand {
        min: 1,
        max: 99,
        colors: CellColors::new(PINK, BLACK),
    },
    ColorBand {
        min: 100,
        max: 199,
        colors: ALARM,
    },
    ColorBand {
        min: 200,
        max: 299,
        colors: WARNING,
    },
    ColorBand {
        min: 300,
        max: 349,
        colors: CellColors::new(CYAN, BLACK),
    },
];

pub const HOST_ALARM_FALLBACK: CellColors = ALARM;

/// 主机报警状态对应的颜色；None 或 0 表示不着色。
pub fn host_alarm_colors(alarm_state: Option<i64>) -> Option<CellColors> {
    let state = alarm_state.filter(|state| *state != 0)?;
    Some(
        HOST_ALARM_BANDS
            .iter()
            .find(|band| band.contains(state))
            .map(|band| band.colors)
            .unwrap_or(HOST_ALARM_FALLBACK),
    )
}

/// 异常优先级阈值：大于该值为红色，(0, 阈值] 为黄色。
pub const EXCEPTION_HIGH_PRIORITY: i64 = 100;

pub fn exception_colors(priority: Option<i64>) -> Option<CellColors> {
    match priority? {
        p if p > EXCEPTION_HIGH_PRIORITY => Some(ALARM),
        p if p > 0 => Some(WARNING),
        _ => None,
    }
}

/// 颜色名称表（忽略大小写）。
const NAMED_COLORS: &[(&str, Color)] = &[
    ("Red", RED),
    ("White", WHITE),
    ("Black", BLACK),
    ("Yellow", YELLOW),
    ("Pink", PINK),
    ("Cyan", CYAN),
    ("Aqua", CYAN),
    ("MediumSpringGreen", MEDIUM_SPRING_GREEN),
    ("Green", Color::rgb(0x00, 0x80, 0x00)),
    ("Lime", Color::rgb(0x00, 0xFF, 0x00)),
    ("LightGreen", Color::rgb(0x90, 0xEE, 0x90)),
    ("Blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("LightBlue", Color::rgb(0xAD, 0xD8, 0xE6)),
    ("Orange", Color::rgb(0xFF, 0xA5, 0x00)),
    ("Magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("Fuchsia", Color::rgb(0xFF, 0x00, 0xFF)),
    ("Purple", Color::rgb(0x80, 0x00, 0x80)),
    ("Gray", Color::rgb(0x80, 0x80, 0x80)),
    ("Grey", Color::rgb(0x80, 0x80, 0x80)),
    ("Silver", Color::rgb(0xC0, 0xC0, 0xC0)),
    ("Brown", Color::rgb(0xA5, 0x2A, 0x2A)),
];

/// 解析行内嵌颜色：颜色名、`#RRGGBB` 或整数颜色码。
pub fn parse_color(text: &str) -> Option<Color> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some((_, color)) = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
    {
        return Some(*color);
    }
    if text.starts_with('#') {
        return Color::from_hex(text);
    }
    text.parse::<i64>().ok().map(Color::from_code)
}
