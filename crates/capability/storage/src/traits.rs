//! 查找存储 Trait 定义
//!
//! 分组状态格式化引擎依赖的窄接口：
//! - RodStore：抽油杆等级
//! - PumpingUnitStore：抽油机型号
//! - PumpingUnitManufacturerStore：抽油机制造商
//! - ExceptionStore：异常
//! - HostAlarmStore：主机报警
//! - PocTypeStore：控制器类型
//! - LocalePhraseStore：本地化短语
//! - CommonStore：系统参数
//!
//! 设计原则：
//! - 所有接口显式接收 RequestContext
//! - 批量接口一次接收全部节点 ID，不按节点循环查询
//! - 未找到返回空列表或 None，只有传输失败返回 StorageError
//! - 使用 async_trait 支持动态分发

use crate::error::StorageError;
use crate::models::{
    ExceptionRecord, HostAlarmRecord, PocTypeRecord, PumpingUnitManufacturerRecord,
    PumpingUnitRecord, RodRecord,
};
use async_trait::async_trait;
use domain::RequestContext;
use std::sync::Arc;

/// 抽油杆存储接口
#[async_trait]
pub trait RodStore: Send + Sync {
    /// 批量获取节点的抽油杆记录
    async fn get_rod_for_group_status(
        &self,
        ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<RodRecord>, StorageError>;
}

/// 抽油机型号存储接口
#[async_trait]
pub trait PumpingUnitStore: Send + Sync {
    /// 批量获取节点的抽油机型号
    async fn get_unit_names(
        &self,
        ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<PumpingUnitRecord>, StorageError>;
}

/// 抽油机制造商存储接口
#[async_trait]
pub trait PumpingUnitManufacturerStore: Send + Sync {
    /// 批量获取节点的抽油机制造商
    async fn get_manufacturers(
        &self,
        ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<PumpingUnitManufacturerRecord>, StorageError>;
}

/// 异常存储接口
#[async_trait]
pub trait ExceptionStore: Send + Sync {
    /// 批量获取节点的异常
    async fn get_exceptions(
        &self,
        ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<ExceptionRecord>, StorageError>;
}

/// 主机报警存储接口
#[async_trait]
pub trait HostAlarmStore: Send + Sync {
    /// 批量获取节点的全部主机报警
    async fn get_all_group_status_host_alarms(
        &self,
        ctx: &RequestContext,
        node_ids: &[String],
    ) -> Result<Vec<HostAlarmRecord>, StorageError>;
}

/// 控制器类型存储接口
#[async_trait]
pub trait PocTypeStore: Send + Sync {
    /// 查找单个控制器类型
    async fn get(
        &self,
        ctx: &RequestContext,
        poc_type: i32,
    ) -> Result<Option<PocTypeRecord>, StorageError>;

    /// 列出全部控制器类型
    async fn get_all(&self, ctx: &RequestContext) -> Result<Vec<PocTypeRecord>, StorageError>;
}

/// 本地化短语存储接口
#[async_trait]
pub trait LocalePhraseStore: Send + Sync {
    /// 按短语 ID 获取当前语言文本
    async fn get(
        &self,
        ctx: &RequestContext,
        phrase_id: i32,
    ) -> Result<Option<String>, StorageError>;
}

/// 公共服务接口（系统参数）
#[async_trait]
pub trait CommonStore: Send + Sync {
    /// 读取系统参数，不存在时返回 `default`
    async fn get_system_parameter(
        &self,
        ctx: &RequestContext,
        name: &str,
        default: &str,
    ) -> Result<String, StorageError>;

    /// 数值显示使用的有效数字位数
    async fn get_significant_digits(&self, ctx: &RequestContext) -> Result<u32, StorageError>;
}

/// 格式化引擎依赖的全部查找存储。
#[derive(Clone)]
pub struct LookupStores {
    pub rods: Arc<dyn RodStore>,
    pub pumping_units: Arc<dyn PumpingUnitStore>,
    pub manufacturers: Arc<dyn PumpingUnitManufacturerStore>,
    pub exceptions: Arc<dyn ExceptionStore>,
    pub host_alarms: Arc<dyn HostAlarmStore>,
    pub poc_types: Arc<dyn PocTypeStore>,
    pub phrases: Arc<dyn LocalePhraseStore>,
    pub common: Arc<dyn CommonStore>,
}
