//! 抽油机型号列。

use super::same_node;
use crate::error::FormatError;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::{ColumnData, LookupKind, PumpingUnitRecord, PumpingUnitStore};

/// 显示节点抽油机的 API 型号。
pub struct PumpingUnitFormatter {
    store: Arc<dyn PumpingUnitStore>,
}

impl PumpingUnitFormatter {
    pub fn new(store: Arc<dyn PumpingUnitStore>) -> Self {
        Self { store }
    }

    async fn find(
        &self,
        node_id: &str,
        ctx: &FormatContext<'_>,
    ) -> Result<Option<PumpingUnitRecord>, FormatError> {
        if let Some(ColumnData::PumpingUnits(records)) = ctx.bulk {
            return Ok(records
                .iter()
                .find(|record| same_node(&record.node_id, node_id))
                .cloned());
        }
        let records = self
            .store
            .get_unit_names(ctx.request, &[node_id.to_string()])
            .await?;
        Ok(records
            .into_iter()
            .find(|record| same_node(&record.node_id, node_id)))
    }
}

#[async_trait]
impl ColumnFormatter for PumpingUnitFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::PumpingUnit
    }

    fn lookup(&self) -> Option<LookupKind> {
        Some(LookupKind::PumpingUnit)
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let Some(node_id) = row.node_id() else {
            cell.set_value("");
            return Ok(());
        };
        let value = self
            .find(&node_id, ctx)
            .await?
            .and_then(|record| record.api_designation)
            .unwrap_or_default();
        cell.set_value(value);
        Ok(())
    }

    async fn perform_format(
        &self,
        _row: &DataRow,
        _cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        Ok(())
    }
}
