//! Redis 자격 증명 저장소
//!
//! 세 개의 키를 `{namespace}:token`, `{namespace}:email`, `{namespace}:user`
//! 형태로 저장합니다. 같은 네임스페이스를 쓰는 클라이언트끼리 로그인 상태를 공유합니다.

use std::collections::HashMap;
use async_trait::async_trait;
use crate::caching::redis::RedisClient;
use crate::domain::Credentials;
use crate::errors::AppResult;
use super::{from_entries, to_entries, CredentialStore, CREDENTIAL_KEYS};

pub struct RedisCredentialStore {
    redis: RedisClient,
    namespace: String,
}

impl RedisCredentialStore {
    /// Redis에 연결하여 저장소를 생성합니다.
    pub async fn connect(redis_url: &str, namespace: &str) -> AppResult<Self> {
        let redis = RedisClient::new(redis_url).await?;
        Ok(Self::with_client(redis, namespace))
    }

    pub fn with_client(redis: RedisClient, namespace: &str) -> Self {
        Self {
            redis,
            namespace: namespace.to_string(),
        }
    }

    fn namespaced(&self, key: &str) -> String {
        namespaced_key(&self.namespace, key)
    }

    fn all_keys(&self) -> Vec<String> {
        CREDENTIAL_KEYS.iter().map(|k| self.namespaced(k)).collect()
    }
}

pub(crate) fn namespaced_key(namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", namespace, key)
    }
}

#[async_trait]
impl CredentialStore for RedisCredentialStore {
    async fn get(&self) -> AppResult<Credentials> {
        let mut entries = HashMap::new();

        for key in CREDENTIAL_KEYS {
            if let Some(value) = self.redis.get(&self.namespaced(key)).await? {
                entries.insert(key.to_string(), value);
            }
        }

        Ok(from_entries(&entries))
    }

    async fn set(&self, credentials: &Credentials) -> AppResult<()> {
        let entries = to_entries(credentials)?;

        // 전체 교체: 새 값에 없는 키는 먼저 지운다
        let stale: Vec<String> = CREDENTIAL_KEYS
            .iter()
            .filter(|k| !entries.contains_key(**k))
            .map(|k| self.namespaced(k))
            .collect();
        self.redis.del_multiple(&stale).await?;

        for (key, value) in &entries {
            self.redis.set(&self.namespaced(key), value).await?;
        }

        log::debug!("Redis 자격 증명 저장: namespace={}", self.namespace);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        self.redis.del_multiple(&self.all_keys()).await?;
        log::debug!("Redis 자격 증명 삭제: namespace={}", self.namespace);
        Ok(())
    }
}
