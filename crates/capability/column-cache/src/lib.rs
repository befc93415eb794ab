//! # 列数据缓存服务
//!
//! 按逻辑列名把一批节点的查找请求分派给对应的查找存储，一次调用取回整列数据，
//! 供该列所有单元格的格式化器共享，避免逐行查询。
//!
//! 这里的“缓存”指批量取数的角色，不做跨调用的结果缓存；同样的参数调用两次
//! 会对存储发起两次同样的批量查询，结果相等。

use domain::RequestContext;
use tracing::{debug, warn};
use wms_storage::{ColumnData, LookupKind, LookupStores, StorageError, normalize_node_ids};

/// 列数据缓存服务。
#[derive(Clone)]
pub struct ColumnDataCacheService {
    stores: LookupStores,
}

impl ColumnDataCacheService {
    pub fn new(stores: LookupStores) -> Self {
        Self { stores }
    }

    /// 按逻辑列名取整列数据。
    ///
    /// 列名为空、节点列表缺失或列名无法识别时返回 `Ok(None)`；
    /// 存储失败原样返回。
    pub async fn get_data(
        &self,
        ctx: &RequestContext,
        logical_name: &str,
        node_ids: Option<&[String]>,
    ) -> Result<Option<ColumnData>, StorageError> {
        if logical_name.trim().is_empty() {
            debug!(
                target: "wms.cache",
                correlation_id = %ctx.correlation_id,
                "column_data_skipped_empty_name"
            );
            return Ok(None);
        }
        let Some(node_ids) = node_ids else {
            debug!(
                target: "wms.cache",
                correlation_id = %ctx.correlation_id,
                logical_name,
                "column_data_skipped_no_nodes"
            );
            return Ok(None);
        };
        let Some(kind) = LookupKind::from_name(logical_name) else {
            warn!(
                target: "wms.cache",
                correlation_id = %ctx.correlation_id,
                logical_name,
                "column_data_unknown_name"
            );
            return Ok(None);
        };
        self.get_data_for_kind(ctx, kind, node_ids).await.map(Some)
    }

    /// 按查找种类取整列数据（恰好一次批量存储调用）。
    pub async fn get_data_for_kind(
        &self,
        ctx: &RequestContext,
        kind: LookupKind,
        node_ids: &[String],
    ) -> Result<ColumnData, StorageError> {
        let node_ids = normalize_node_ids(node_ids);
        wms_telemetry::record_lookup_batch();
        let result = self.fetch(ctx, kind, &node_ids).await;
        match &result {
            Ok(data) => debug!(
                target: "wms.cache",
                correlation_id = %ctx.correlation_id,
                lookup = kind.name(),
                nodes = node_ids.len(),
                records = data.len(),
                "column_data_loaded"
            ),
            Err(err) => {
                wms_telemetry::record_lookup_failure();
                warn!(
                    target: "wms.cache",
                    correlation_id = %ctx.correlation_id,
                    lookup = kind.name(),
                    nodes = node_ids.len(),
                    error = %err,
                    "column_data_failed"
                );
            }
        }
        result
    }

    async fn fetch(
        &self,
        ctx: &RequestContext,
        kind: LookupKind,
        node_ids: &[String],
    ) -> Result<ColumnData, StorageError> {
        let stores = &self.stores;
        let data = match kind {
            LookupKind::RodGrade => {
                ColumnData::Rods(stores.rods.get_rod_for_group_status(ctx, node_ids).await?)
            }
            LookupKind::PumpingUnit => {
                ColumnData::PumpingUnits(stores.pumping_units.get_unit_names(ctx, node_ids).await?)
            }
            LookupKind::PumpingUnitManufacturer => ColumnData::Manufacturers(
                stores.manufacturers.get_manufacturers(ctx, node_ids).await?,
            ),
            LookupKind::ExceptionGroupName => {
                ColumnData::Exceptions(stores.exceptions.get_exceptions(ctx, node_ids).await?)
            }
            LookupKind::HostAlarms => ColumnData::HostAlarms(
                stores
                    .host_alarms
                    .get_all_group_status_host_alarms(ctx, node_ids)
                    .await?,
            ),
            // 控制器类型与节点无关，取全表
            LookupKind::PocType => ColumnData::PocTypes(stores.poc_types.get_all(ctx).await?),
        };
        Ok(data)
    }
}
