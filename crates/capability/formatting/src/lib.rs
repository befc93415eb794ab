//! # WMS 分组状态列格式化引擎
//!
//! 计算分组状态表格中每个单元格的显示值与颜色：
//!
//! - [`comparison`]：条件格式规则求值（数值运算符解析失败时回退为字符串语义）
//! - [`colors`]：按格式化器类型固定的阈值/颜色表
//! - [`formatter`]：`ColumnFormatter` 能力接口与宿主侧参数校验入口
//! - [`formatters`]：20 种列格式化器实现
//! - [`factory`]：按 (来源类型, 列名) 选择格式化器
//!
//! 格式化器构造后不可变，可在并发请求间共享；查找存储通过 `Arc<dyn ...>` 注入。

pub mod colors;
pub mod comparison;
pub mod error;
pub mod factory;
pub mod fields;
pub mod formatter;
pub mod formatters;
pub mod numeric;

pub use comparison::{evaluate, first_match};
pub use error::FormatError;
pub use factory::{ColumnFormatterFactory, LookupStores};
pub use formatter::{ColumnFormatter, FormatContext, FormatterKind, calculate_cell, format_cell};
