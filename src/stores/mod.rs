//! # Credential Store Module
//!
//! 로그인 자격 증명(`token`, `email`, `user`)을 프로세스 재시작 후에도 유지하는
//! 키-값 저장소 계층입니다. 브라우저의 localStorage가 하던 역할을 trait로 추상화하여
//! 세션 가드, 로그아웃 시퀀서 등에 주입합니다.
//!
//! ## 구현체
//!
//! | 구현체 | 보존 범위 |
//! |--------|-----------|
//! | [`FileCredentialStore`] | 같은 머신, 같은 파일 경로 (기본값) |
//! | [`RedisCredentialStore`] | 같은 Redis 네임스페이스 |
//! | [`MemoryCredentialStore`] | 프로세스 수명 (테스트용) |
//!
//! ## 저장 형식
//!
//! 세 개의 키 모두 문자열로 저장하며, `user`는 JSON 문자열로 직렬화합니다.
//! 암호화나 만료 시간은 없습니다. 토큰 수명은 서버의 수락/거부로만 결정됩니다.
//! 잠금도 없으므로 여러 클라이언트가 같은 저장소를 쓰면 마지막 쓰기가 이깁니다.

pub mod file_store;
pub mod memory_store;
pub mod redis_store;

pub use file_store::FileCredentialStore;
pub use memory_store::MemoryCredentialStore;
pub use redis_store::RedisCredentialStore;

use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use serde_json::Value;
use crate::config::{StorageBackend, StorageConfig};
use crate::domain::Credentials;
use crate::errors::AppResult;

/// Bearer 토큰 키
pub const TOKEN_KEY: &str = "token";
/// 로그인 이메일 키
pub const EMAIL_KEY: &str = "email";
/// 사용자 원본 정보 키 (JSON 문자열)
pub const USER_KEY: &str = "user";

/// 저장소가 관리하는 전체 키 목록
pub const CREDENTIAL_KEYS: [&str; 3] = [TOKEN_KEY, EMAIL_KEY, USER_KEY];

/// 자격 증명 저장소 인터페이스
///
/// `set`은 전체 교체입니다. 전달된 자격 증명에 없는 키는 삭제됩니다.
/// 저장소는 요청 클라이언트가 직접 변경하지 않으며,
/// 세션 가드/로그인/로그아웃 같은 호출자만 변경합니다.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// 저장된 자격 증명을 읽습니다. 저장된 것이 없으면 빈 값을 반환합니다.
    async fn get(&self) -> AppResult<Credentials>;

    /// 자격 증명을 저장합니다.
    async fn set(&self, credentials: &Credentials) -> AppResult<()>;

    /// 세 개의 키를 모두 삭제합니다.
    async fn clear(&self) -> AppResult<()>;
}

/// 자격 증명을 문자열 키-값 쌍으로 변환합니다.
pub(crate) fn to_entries(credentials: &Credentials) -> AppResult<HashMap<String, String>> {
    let mut entries = HashMap::new();

    if let Some(token) = &credentials.token {
        entries.insert(TOKEN_KEY.to_string(), token.clone());
    }
    if let Some(email) = &credentials.email {
        entries.insert(EMAIL_KEY.to_string(), email.clone());
    }
    if let Some(user) = &credentials.user {
        entries.insert(USER_KEY.to_string(), serde_json::to_string(user)?);
    }

    Ok(entries)
}

/// 문자열 키-값 쌍에서 자격 증명을 복원합니다.
///
/// `user` 값이 JSON이 아니면 경고를 남기고 무시합니다.
pub(crate) fn from_entries(entries: &HashMap<String, String>) -> Credentials {
    let user = entries.get(USER_KEY).and_then(|raw| {
        serde_json::from_str::<Value>(raw)
            .map_err(|e| log::warn!("저장된 user 값을 해석할 수 없습니다: {}", e))
            .ok()
    });

    Credentials {
        token: entries.get(TOKEN_KEY).cloned(),
        email: entries.get(EMAIL_KEY).cloned(),
        user,
    }
}

/// 설정에 맞는 자격 증명 저장소를 엽니다.
///
/// # Errors
///
/// * `AppError::StorageError` - Redis 연결 실패
pub async fn open_store(config: &StorageConfig) -> AppResult<Arc<dyn CredentialStore>> {
    let store: Arc<dyn CredentialStore> = match config.backend {
        StorageBackend::File => {
            log::info!("파일 자격 증명 저장소 사용: {}", config.credential_file.display());
            Arc::new(FileCredentialStore::new(config.credential_file.clone()))
        }
        StorageBackend::Redis => {
            log::info!("Redis 자격 증명 저장소 사용: namespace={}", config.redis_namespace);
            Arc::new(RedisCredentialStore::connect(&config.redis_url, &config.redis_namespace).await?)
        }
        StorageBackend::Memory => {
            log::warn!("메모리 자격 증명 저장소 사용: 프로세스 종료 시 로그인 정보가 사라집니다");
            Arc::new(MemoryCredentialStore::new())
        }
    };

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_round_trip_with_user() {
        let creds = Credentials::new("abc", "x@y.com").with_user(json!({"name": "Kim"}));
        let entries = to_entries(&creds).unwrap();

        assert_eq!(entries.get(USER_KEY).unwrap(), r#"{"name":"Kim"}"#);
        assert_eq!(from_entries(&entries), creds);
    }

    #[test]
    fn test_absent_keys_not_written() {
        let creds = Credentials {
            token: Some("abc".to_string()),
            ..Default::default()
        };
        let entries = to_entries(&creds).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(!entries.contains_key(EMAIL_KEY));
    }

    #[test]
    fn test_corrupt_user_value_ignored() {
        let mut entries = HashMap::new();
        entries.insert(TOKEN_KEY.to_string(), "abc".to_string());
        entries.insert(USER_KEY.to_string(), "{not json".to_string());

        let creds = from_entries(&entries);
        assert_eq!(creds.token.as_deref(), Some("abc"));
        assert!(creds.user.is_none());
    }
}
