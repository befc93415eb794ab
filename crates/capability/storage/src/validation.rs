//! 验证辅助函数
//!
//! - normalize_node_ids：批量查询前整理节点 ID 列表
//!
//! 使用场景：
//! - 列数据缓存服务组装批量查询参数
//! - 内存存储过滤批量结果

use std::collections::HashSet;

/// 整理节点 ID：去除首尾空白、丢弃空值、去重并保持首次出现的顺序。
pub fn normalize_node_ids<S: AsRef<str>>(node_ids: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    node_ids
        .iter()
        .map(|id| id.as_ref().trim())
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(id.to_string()))
        .map(str::to_string)
        .collect()
}
