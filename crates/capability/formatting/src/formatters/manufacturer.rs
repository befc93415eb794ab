//! 抽油机制造商列。

use super::same_node;
use crate::error::FormatError;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::{
    ColumnData, LookupKind, PumpingUnitManufacturerRecord, PumpingUnitManufacturerStore,
};

pub struct PumpingUnitManufacturerFormatter {
    store: Arc<dyn PumpingUnitManufacturerStore>,
}

impl PumpingUnitManufacturerFormatter {
    pub fn new(store: Arc<dyn PumpingUnitManufacturerStore>) -> Self {
        Self { store }
    }

    async fn find(
        &self,
        node_id: &str,
        ctx: &FormatContext<'_>,
    ) -> Result<Option<PumpingUnitManufacturerRecord>, FormatError> {
        if let Some(ColumnData::Manufacturers(records)) = ctx.bulk {
            return Ok(records
                .iter()
                .find(|record| same_node(&record.node_id, node_id))
                .cloned());
        }
        let records = self
            .store
            .get_manufacturers(ctx.request, &[node_id.to_string()])
            .await?;
        Ok(records
            .into_iter()
            .find(|record| same_node(&record.node_id, node_id)))
    }
}

#[async_trait]
impl ColumnFormatter for PumpingUnitManufacturerFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::PumpingUnitManufacturer
    }

    fn lookup(&self) -> Option<LookupKind> {
        Some(LookupKind::PumpingUnitManufacturer)
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
            .and_then(|record| record.manufacturer)
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
