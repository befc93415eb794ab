//! 抽油杆等级列。

use super::same_node;
use crate::error::FormatError;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::{ColumnData, LookupKind, RodRecord, RodStore};

/// 按杆序列出节点各段抽油杆的等级（去重，逗号分隔）。
pub struct RodGradeFormatter {
    store: Arc<dyn RodStore>,
}

impl RodGradeFormatter {
    pub fn new(store: Arc<dyn RodStore>) -> Self {
        Self { store }
    }

    async fn rods(
        &self,
        node_id: &str,
        ctx: &FormatContext<'_>,
    ) -> Result<Vec<RodRecord>, FormatError> {
        if let Some(ColumnData::Rods(records)) = ctx.bulk {
            return Ok(records
                .iter()
                .filter(|record| same_node(&record.node_id, node_id))
                .cloned()
                .collect());
        }
        let records = self
            .store
            .get_rod_for_group_status(ctx.request, &[node_id.to_string()])
            .await?;
        Ok(records
            .into_iter()
            .filter(|record| same_node(&record.node_id, node_id))
            .collect())
    }
}

/// 杆序升序，保留每个等级首次出现的位置。
pub fn join_rod_grades(mut rods: Vec<RodRecord>) -> String {
    rods.sort_by_key(|rod| rod.rod_num);
    let mut grades: Vec<String> = Vec::new();
    for rod in rods {
        let Some(grade) = rod.rod_grade_name else {
            continue;
        };
        let grade = grade.trim();
        if grade.is_empty() || grades.iter().any(|existing| existing == grade) {
            continue;
        }
        grades.push(grade.to_string());
    }
    grades.join(", ")
}

#[async_trait]
impl ColumnFormatter for RodGradeFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::RodGrade
    }

    fn lookup(&self) -> Option<LookupKind> {
        Some(LookupKind::RodGrade)
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
        let rods = self.rods(&node_id, ctx).await?;
        cell.set_value(join_rod_grades(rods));
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
