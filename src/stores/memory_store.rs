//! 프로세스 메모리 자격 증명 저장소

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use crate::domain::Credentials;
use crate::errors::{AppError, AppResult};
use super::{from_entries, to_entries, CredentialStore};

/// 메모리 기반 자격 증명 저장소
///
/// 테스트와 `CREDENTIAL_BACKEND=memory` 실행에서 사용합니다.
/// 내부 `RwLock`은 메모리 안전성을 위한 것이며 쓰기 순서를 조율하지 않습니다.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 초기 자격 증명을 가진 저장소를 생성합니다.
    pub fn with_credentials(credentials: &Credentials) -> AppResult<Self> {
        Ok(Self {
            entries: RwLock::new(to_entries(credentials)?),
        })
    }

    /// 현재 저장된 키 목록 (정렬됨)
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .read()
            .map(|entries| entries.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }
}

fn poisoned() -> AppError {
    AppError::StorageError("메모리 저장소 잠금이 손상되었습니다".to_string())
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> AppResult<Credentials> {
        let entries = self.entries.read().map_err(|_| poisoned())?;
        Ok(from_entries(&entries))
    }

    async fn set(&self, credentials: &Credentials) -> AppResult<()> {
        let next = to_entries(credentials)?;
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        *entries = next;
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let mut entries = self.entries.write().map_err(|_| poisoned())?;
        entries.clear();
        Ok(())
    }
}
