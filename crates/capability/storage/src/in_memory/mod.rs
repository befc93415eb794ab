//! 内存存储实现模块
//!
//! 用于本地快照渲染和测试。
//!
//! 包含以下实现：
//! - RodStore: InMemoryRodStore
//! - PumpingUnitStore: InMemoryPumpingUnitStore
//! - PumpingUnitManufacturerStore: InMemoryPumpingUnitManufacturerStore
//! - ExceptionStore: InMemoryExceptionStore
//! - HostAlarmStore: InMemoryHostAlarmStore
//! - PocTypeStore: InMemoryPocTypeStore
//! - LocalePhraseStore: InMemoryLocalePhraseStore
//! - CommonStore: InMemoryCommonStore

pub mod common;
pub mod exception;
pub mod host_alarm;
mod lookup;
pub mod manufacturer;
pub mod phrase;
pub mod poc_type;
pub mod pumping_unit;
pub mod rod;

pub use common::*;
pub use exception::*;
pub use host_alarm::*;
pub use manufacturer::*;
pub use phrase::*;
pub use poc_type::*;
pub use pumping_unit::*;
pub use rod::*;
