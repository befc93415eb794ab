//! 应用运行配置加载。

use std::env;

/// 配置加载错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env: {0}")]
    Missing(String),
    #[error("invalid value for {0}: {1}")]
    Invalid(String, String),
}

pub const DEFAULT_POC_TYPE_CACHE_TTL_SECONDS: u64 = 300;
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 3;

/// 应用运行配置。
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub snapshot_path: String,
    /// 参考数据缓存（控制器类型、有效数字、计产周期、短语）的 TTL；0 表示不过期。
    pub poc_type_cache_ttl_seconds: u64,
    pub default_significant_digits: u32,
    pub pretty_output: bool,
}

impl AppConfig {
    /// 从环境变量读取配置。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 从任意键值来源读取配置（环境变量之外便于测试）。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let snapshot_path = read_optional(&lookup, "WMS_SNAPSHOT_PATH")
            .ok_or_else(|| ConfigError::Missing("WMS_SNAPSHOT_PATH".to_string()))?;
        let poc_type_cache_ttl_seconds = read_u64_with_default(
            &lookup,
            "WMS_POC_TYPE_CACHE_TTL_SECONDS",
            DEFAULT_POC_TYPE_CACHE_TTL_SECONDS,
        )?;
        let default_significant_digits = read_digits_with_default(
            &lookup,
            "WMS_DEFAULT_SIGNIFICANT_DIGITS",
            DEFAULT_SIGNIFICANT_DIGITS,
        )?;
        let pretty_output = read_bool_with_default(&lookup, "WMS_PRETTY_OUTPUT", false);

        Ok(Self {
            snapshot_path,
            poc_type_cache_ttl_seconds,
            default_significant_digits,
            pretty_output,
        })
    }
}

fn read_optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}

fn read_u64_with_default<F>(lookup: &F, key: &str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = read_optional(lookup, key) else {
        return Ok(default);
    };
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::Invalid(key.to_string(), value))
}

/// 有效数字必须为正数。
fn read_digits_with_default<F>(lookup: &F, key: &str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = read_optional(lookup, key) else {
        return Ok(default);
    };
    match value.trim().parse::<u32>() {
        Ok(digits) if digits > 0 => Ok(digits),
        _ => Err(ConfigError::Invalid(key.to_string(), value)),
    }
}

fn read_bool_with_default<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "on"
        ),
        None => default,
    }
}
