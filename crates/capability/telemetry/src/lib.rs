//! 追踪初始化、关联 ID 生成与格式化计数器。

use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::{EnvFilter, fmt};

/// 指标快照。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub cells_formatted: u64,
    pub columns_unresolved: u64,
    pub lookup_batches: u64,
    pub lookup_failures: u64,
    pub invalid_arguments: u64,
}

impl MetricsSnapshot {
    /// 两次快照之间的增量（进程内计数器只增不减）。
    pub fn since(&self, earlier: &MetricsSnapshot) -> MetricsSnapshot {
        MetricsSnapshot {
            cells_formatted: self.cells_formatted.saturating_sub(earlier.cells_formatted),
            columns_unresolved: self
                .columns_unresolved
                .saturating_sub(earlier.columns_unresolved),
            lookup_batches: self.lookup_batches.saturating_sub(earlier.lookup_batches),
            lookup_failures: self.lookup_failures.saturating_sub(earlier.lookup_failures),
            invalid_arguments: self
                .invalid_arguments
                .saturating_sub(earlier.invalid_arguments),
        }
    }
}

/// 进程级格式化计数器。
pub struct TelemetryMetrics {
    cells_formatted: AtomicU64,
    columns_unresolved: AtomicU64,
    lookup_batches: AtomicU64,
    lookup_failures: AtomicU64,
    invalid_arguments: AtomicU64,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self {
            cells_formatted: AtomicU64::new(0),
            columns_unresolved: AtomicU64::new(0),
            lookup_batches: AtomicU64::new(0),
            lookup_failures: AtomicU64::new(0),
            invalid_arguments: AtomicU64::new(0),
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            cells_formatted: self.cells_formatted.load(Ordering::Relaxed),
            columns_unresolved: self.columns_unresolved.load(Ordering::Relaxed),
            lookup_batches: self.lookup_batches.load(Ordering::Relaxed),
            lookup_failures: self.lookup_failures.load(Ordering::Relaxed),
            invalid_arguments: self.invalid_arguments.load(Ordering::Relaxed),
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

static METRICS: OnceLock<TelemetryMetrics> = OnceLock::new();

/// 获取全局指标实例。
pub fn metrics() -> &'static TelemetryMetrics {
    METRICS.get_or_init(TelemetryMetrics::new)
}

/// 初始化 tracing（`RUST_LOG`，默认 info，输出到 stderr）。重复调用无效果。
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 生成新的关联 ID（UUID v4）。
pub fn new_correlation_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// 记录完成计算的单元格数。
pub fn record_cells_formatted(count: u64) {
    metrics()
        .cells_formatted
        .fetch_add(count, Ordering::Relaxed);
}

/// 记录无法解析格式化器的列。
pub fn record_column_unresolved() {
    metrics()
        .columns_unresolved
        .fetch_add(1, Ordering::Relaxed);
}

/// 记录批量查找次数。
pub fn record_lookup_batch() {
    metrics().lookup_batches.fetch_add(1, Ordering::Relaxed);
}

/// 记录批量查找失败次数。
pub fn record_lookup_failure() {
    metrics().lookup_failures.fetch_add(1, Ordering::Relaxed);
}

/// 记录宿主传入空行/空单元格的次数。
pub fn record_invalid_argument() {
    metrics()
        .invalid_arguments
        .fetch_add(1, Ordering::Relaxed);
}
