//! 本地化短语内存存储实现

use crate::error::StorageError;
use crate::traits::LocalePhraseStore;
use domain::RequestContext;
use std::collections::HashMap;
use std::sync::RwLock;

/// 本地化短语内存存储（单一语言）
pub struct InMemoryLocalePhraseStore {
    phrases: RwLock<HashMap<i32, String>>,
}

impl InMemoryLocalePhraseStore {
    pub fn new() -> Self {
        Self::with_phrases(HashMap::new())
    }

    pub fn with_phrases(phrases: HashMap<i32, String>) -> Self {
        Self {
            phrases: RwLock::new(phrases),
        }
    }

    pub fn insert(&self, phrase_id: i32, text: impl Into<String>) -> Result<(), StorageError> {
        let mut map = self
            .phrases
            .write()
            .map_err(|_| StorageError::new("lock failed"))?;
        map.insert(phrase_id, text.into());
        Ok(())
    }
}

impl Default for InMemoryLocalePhraseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl LocalePhraseStore for InMemoryLocalePhraseStore {
    async fn get(
        &self,
        _ctx: &RequestContext,
        phrase_id: i32,
    ) -> Result<Option<String>, StorageError> {
        let map = self
            .phrases
            .read()
            .map_err(|_| StorageError::new("lock failed"))?;
        Ok(map.get(&phrase_id).cloned())
    }
}
