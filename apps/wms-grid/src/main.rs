//! 分组状态表格渲染：读取快照，按列格式化，输出 JSON。

mod snapshot;

use api_contract::{ApiResponse, ContractError, GridRowDto, GroupStatusGridDto};
use domain::{DataRow, GroupStatusColumn, RequestContext};
use snapshot::Snapshot;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use wms_column_cache::ColumnDataCacheService;
use wms_config::AppConfig;
use wms_formatting::ColumnFormatterFactory;
use wms_grid::{GridError, GroupStatusGridBuilder};
use wms_telemetry::{init_tracing, metrics, new_correlation_id};

/// 渲染失败原因（映射为响应错误码）。
#[derive(Debug, thiserror::Error)]
enum RenderError {
    #[error("read snapshot failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid json: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("invalid column definition: {0}")]
    Contract(#[from] ContractError),
    #[error("grid build failed: {0}")]
    Grid(#[from] GridError),
}

impl RenderError {
    fn code(&self) -> &'static str {
        match self {
            RenderError::Io(_) => "GRID.SNAPSHOT_UNREADABLE",
            RenderError::Snapshot(_) => "GRID.SNAPSHOT_INVALID",
            RenderError::Contract(_) => "GRID.COLUMN_INVALID",
            RenderError::Grid(_) => "GRID.BUILD_FAILED",
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 加载本地 .env（如存在），便于直接 cargo run 启动
    dotenvy::dotenv().ok();
    // 初始化结构化日志（stderr，stdout 只输出结果）
    init_tracing();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(target: "wms.app", error = %err, "config_invalid");
            return emit::<GroupStatusGridDto>(
                &ApiResponse::error("GRID.CONFIG_INVALID", err.to_string()),
                false,
            );
        }
    };

    let ctx = RequestContext::new(new_correlation_id());
    let span = info_span!("render", correlation_id = %ctx.correlation_id);
    let result = run(&config, &ctx).instrument(span).await;

    match result {
        Ok(grid) => {
            let counters = metrics().snapshot();
            info!(
                target: "wms.app",
                correlation_id = %ctx.correlation_id,
                rows = grid.rows.len(),
                cells = counters.cells_formatted,
                lookup_batches = counters.lookup_batches,
                unresolved = grid.unresolved.len(),
                "grid_rendered"
            );
            emit(&ApiResponse::success(grid), config.pretty_output)
        }
        Err(err) => {
            error!(
                target: "wms.app",
                correlation_id = %ctx.correlation_id,
                error = %err,
                "grid_render_failed"
            );
            emit::<GroupStatusGridDto>(
                &ApiResponse::error(err.code(), err.to_string()),
                config.pretty_output,
            )
        }
    }
}

async fn run(config: &AppConfig, ctx: &RequestContext) -> Result<GroupStatusGridDto, RenderError> {
    let text = tokio::fs::read_to_string(&config.snapshot_path).await?;
    render(config, ctx, &text).await
}

/// 解析快照并组装表格。
async fn render(
    config: &AppConfig,
    ctx: &RequestContext,
    text: &str,
) -> Result<GroupStatusGridDto, RenderError> {
    let snapshot = Snapshot::from_json(text)?;
    let stores = snapshot.stores(config.default_significant_digits);
    let factory = Arc::new(ColumnFormatterFactory::from_stores(
        &stores,
        config.poc_type_cache_ttl_seconds,
    ));
    let builder = GroupStatusGridBuilder::new(factory, ColumnDataCacheService::new(stores));

    let columns = snapshot
        .columns
        .into_iter()
        .map(GroupStatusColumn::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    let rows: Vec<DataRow> = snapshot.rows.into_iter().map(DataRow::from).collect();

    let grid = builder.build(ctx, &columns, &rows).await?;
    Ok(GroupStatusGridDto {
        columns: grid
            .columns
            .iter()
            .map(|column| column.field_heading.clone())
            .collect(),
        rows: grid
            .rows
            .iter()
            .map(|row| GridRowDto::new(row.node_id.clone(), &row.cells))
            .collect(),
        unresolved: grid.unresolved,
    })
}

fn emit<T: serde::Serialize>(response: &ApiResponse<T>, pretty: bool) -> ExitCode {
    let json = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!(target: "wms.app", error = %err, "response_serialize_failed");
            return ExitCode::FAILURE;
        }
    }
    if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
