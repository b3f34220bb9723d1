//! # Redis 클라이언트 래퍼
//!
//! 자격 증명 저장소의 Redis 백엔드가 사용하는 얇은 문자열 키-값 클라이언트입니다.
//! 모든 명령은 멀티플렉싱된 비동기 연결 위에서 실행됩니다.
//!
//! 값은 이미 문자열로 직렬화된 상태로 전달받으므로 이 계층에서는
//! 추가 JSON 변환을 하지 않습니다. 만료 시간도 두지 않습니다.

use redis::{AsyncCommands, Client};

/// Redis 클라이언트 래퍼
///
/// ```rust,ignore
/// use crate::caching::redis::RedisClient;
///
/// let redis = RedisClient::new("redis://localhost:6379").await?;
/// redis.set("jikgumate:token", "abc").await?;
/// let token: Option<String> = redis.get("jikgumate:token").await?;
/// redis.del_multiple(&["jikgumate:token".to_string()]).await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트를 생성하고 PING으로 연결을 확인합니다.
    ///
    /// ## 에러 케이스
    ///
    /// - 잘못된 URL 형식
    /// - Redis 서버에 연결할 수 없는 경우
    /// - 인증 실패
    pub async fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 문자열 값을 조회합니다. 키가 없으면 `None`을 반환합니다.
    pub async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.get(key).await
    }

    /// 문자열 값을 저장합니다.
    pub async fn set(&self, key: &str, value: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set(key, value).await
    }

    /// 여러 키를 한 번에 삭제합니다.
    ///
    /// 빈 목록이면 서버에 명령을 보내지 않습니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }
}
