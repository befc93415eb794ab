//! 系统参数内存存储实现

use crate::error::StorageError;
use crate::traits::CommonStore;
use domain::RequestContext;
use std::collections::HashMap;
use std::sync::RwLock;

/// 有效数字位数的系统参数名
pub const SIGNIFICANT_DIGITS_PARAMETER: &str = "NextGenSignificantDigits";

/// 未配置时的有效数字位数
pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 3;

/// 系统参数内存存储
pub struct InMemoryCommonStore {
    parameters: RwLock<HashMap<String, String>>,
    default_significant_digits: u32,
}

impl InMemoryCommonStore {
    pub fn new() -> Self {
        Self::with_parameters(HashMap::new())
    }

    pub fn with_parameters(parameters: HashMap<String, String>) -> Self {
        Self {
            parameters: RwLock::new(parameters),
            default_significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }

    /// 覆盖有效数字的默认值（参数缺失或非法时使用）
    pub fn with_default_significant_digits(mut self, digits: u32) -> Self {
        self.default_significant_digits = digits;
        self
    }

    pub fn set(
        &self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), StorageError> {
        let mut map = self
            .parameters
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.insert(name.into(), value.into());
        Ok(())
    }
}

impl Default for InMemoryCommonStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl CommonStore for InMemoryCommonStore {
    async fn get_system_parameter(
        &self,
        _ctx: &RequestContext,
        name: &str,
        default: &str,
    ) -> Result<String, StorageError> {
        let map = self
            .parameters
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.to_string()))
    }

    async fn get_significant_digits(&self, ctx: &RequestContext) -> Result<u32, StorageError> {
        let default = self.default_significant_digits.to_string();
        let value = self
            .get_system_parameter(ctx, SIGNIFICANT_DIGITS_PARAMETER, &default)
            .await?;
        Ok(value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|digits| *digits > 0)
            .unwrap_or(self.default_significant_digits))
    }
}
