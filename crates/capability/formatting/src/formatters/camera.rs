//! 摄像头报警列。

use crate::colors;
use crate::error::FormatError;
use crate::fields;
use crate::formatter::{ColumnFormatter, FormatContext, FormatterKind};
use async_trait::async_trait;
use domain::{DataRow, GroupStatusColumn, RowColumnModel};
use std::sync::Arc;
use wms_storage::{LocalePhraseStore, ReferenceCache, StorageError, reference_cache};

/// 短语 "Alarm"。
pub const ALARM_PHRASE_ID: i32 = 4001;
/// 短语 "OK"。
pub const OK_PHRASE_ID: i32 = 4002;

/// 按 `CameraAlarmCount` 显示本地化的 "Alarm" / "OK"。
///
/// 短语文本按短语 ID 跨请求缓存（缓存的是应用回退后的文本）。
pub struct CameraAlarmsFormatter {
    phrases: Arc<dyn LocalePhraseStore>,
    cache: ReferenceCache<String>,
}

impl CameraAlarmsFormatter {
    pub fn new(phrases: Arc<dyn LocalePhraseStore>, ttl_seconds: u64) -> Self {
        Self {
            phrases,
            cache: reference_cache(ttl_seconds),
        }
    }

    async fn phrase(
        &self,
        ctx: &FormatContext<'_>,
        phrase_id: i32,
        fallback: &str,
    ) -> Result<String, FormatError> {
        let load = async {
            let text = self.phrases.get(ctx.request, phrase_id).await?;
            Ok::<_, StorageError>(
                text.filter(|text| !text.is_empty())
                    .unwrap_or_else(|| fallback.to_string()),
            )
        };
        Ok(self.cache.try_get_with(phrase_id.to_string(), load).await?)
    }
}

#[async_trait]
impl ColumnFormatter for CameraAlarmsFormatter {
    fn kind(&self) -> FormatterKind {
        FormatterKind::CameraAlarms
    }

    async fn calculate_value(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        let value = match row.number(fields::CAMERA_ALARM_COUNT) {
            Some(count) if count > 0.0 => self.phrase(ctx, ALARM_PHRASE_ID, "Alarm").await?,
            Some(_) => self.phrase(ctx, OK_PHRASE_ID, "OK").await?,
            None => String::new(),
        };
        cell.set_value(value);
        Ok(())
    }

    async fn perform_format(
        &self,
        row: &DataRow,
        cell: &mut RowColumnModel,
        _column: Option<&GroupStatusColumn>,
        _ctx: &FormatContext<'_>,
    ) -> Result<(), FormatError> {
        if matches!(row.number(fields::CAMERA_ALARM_COUNT), Some(count) if count > 0.0) {
            cell.set_colors(colors::ALARM);
        }
        Ok(())
    }
}
