//! 进程内参考数据缓存
//!
//! 用于跨请求复用变化很少的参考数据（控制器类型列表、系统参数、本地化短语）。
//! 与列数据缓存服务的批量查询无关：这里是真正的键值缓存，可选 TTL。
//! 同一键的并发未命中只执行一次加载（`try_get_with`）。

use moka::future::Cache;
use std::time::Duration;

/// 参考数据缓存容量上限（条目数）。
pub const REFERENCE_CACHE_CAPACITY: u64 = 1_024;

/// 以字符串为键的参考数据缓存。
pub type ReferenceCache<V> = Cache<String, V>;

/// 构造参考数据缓存；`ttl_seconds == 0` 表示不过期。
pub fn reference_cache<V>(ttl_seconds: u64) -> ReferenceCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    let builder = Cache::<String, V>::builder().max_capacity(REFERENCE_CACHE_CAPACITY);
    match ttl_seconds {
        0 => builder.build(),
        seconds => builder.time_to_live(Duration::from_secs(seconds)).build(),
    }
}

#[cfg(test)]
mod tests {
    use super::reference_cache;
    use crate::error::StorageError;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn loader_runs_once_until_invalidated() {
        let cache = reference_cache::<Vec<i32>>(0);
        let calls = AtomicUsize::new(0);
        let first = cache
            .try_get_with("k".to_string(), async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, StorageError>(vec![1, 2])
            })
            .await;
        assert_eq!(first.ok(), Some(vec![1, 2]));

        let second = cache
            .try_get_with("k".to_string(), async { Ok::<_, StorageError>(vec![9]) })
            .await;
        assert_eq!(second.ok(), Some(vec![1, 2]));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        cache.invalidate("k").await;
        assert!(cache.get("k").await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_misses_share_one_load() {
        let cache = reference_cache::<Vec<i32>>(300);
        let calls = Arc::new(AtomicUsize::new(0));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            handles.push(tokio::spawn(async move {
                cache
                    .try_get_with("poc-types".to_string(), async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::task::yield_now().await;
                        Ok::<_, StorageError>(vec![8, 17])
                    })
                    .await
                    .ok()
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.expect("join"), Some(vec![8, 17]));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_loader_inserts_nothing() {
        let cache = reference_cache::<i32>(0);
        let result = cache
            .try_get_with("k".to_string(), async {
                Err::<i32, _>(StorageError::new("down"))
            })
            .await;
        assert_eq!(result.map_err(|err| err.message().to_string()), Err("down".to_string()));
        assert!(cache.get("k").await.is_none());
    }

    #[tokio::test]
    async fn zero_ttl_never_expires() {
        let cache = reference_cache::<i32>(0);
        cache.insert("k".to_string(), 5).await;
        assert_eq!(cache.get("k").await, Some(5));
    }
}
