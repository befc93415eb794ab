//! # WMS Storage 模块
//!
//! 分组状态格式化引擎消费的查找存储抽象层。
//!
//! ## 架构设计
//!
//! 1. **接口抽象层** (`traits.rs`)：抽油杆、抽油机、制造商、异常、主机报警、
//!    控制器类型、本地化短语、系统参数的异步 Trait 接口
//! 2. **数据模型层** (`models.rs`)：查找记录与批量结果 `ColumnData`
//! 3. **错误处理层** (`error.rs`)：统一的存储错误类型
//! 4. **验证辅助层** (`validation.rs`)：批量查询的节点 ID 整理
//! 5. **参考数据缓存** (`cache.rs`)：基于 moka 的进程内缓存，可选 TTL，并发未命中合并加载
//! 6. **实现层** (`in_memory/`)：内存实现（快照渲染与测试）
//!
//! ## 核心约束
//!
//! - **批量查询**：批量接口一次接收全部节点 ID，避免 N+1 查询
//! - **未找到不是错误**：返回空列表或 None
//! - **显式上下文**：所有接口接收 `RequestContext`（携带关联 ID）
//! - **线程安全**：内存实现使用 `RwLock`，可在并发单元格计算中共享
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use domain::RequestContext;
//! use wms_storage::{InMemoryRodStore, RodRecord, RodStore};
//!
//! let store = InMemoryRodStore::with_records(vec![RodRecord { /* ... */ }]);
//! let ctx = RequestContext::new("corr-1");
//! let rods = store
//!     .get_rod_for_group_status(&ctx, &["Node1".to_string()])
//!     .await?;
//! ```

pub mod cache;
pub mod error;
pub mod in_memory;
pub mod models;
pub mod traits;
pub mod validation;

pub use cache::{REFERENCE_CACHE_CAPACITY, ReferenceCache, reference_cache};
pub use error::*;
pub use models::*;
pub use traits::*;
pub use validation::*;

pub use in_memory::{
    DEFAULT_SIGNIFICANT_DIGITS, InMemoryCommonStore, InMemoryExceptionStore,
    InMemoryHostAlarmStore, InMemoryLocalePhraseStore, InMemoryPocTypeStore,
    InMemoryPumpingUnitManufacturerStore, InMemoryPumpingUnitStore, InMemoryRodStore,
    SIGNIFICANT_DIGITS_PARAMETER,
};
