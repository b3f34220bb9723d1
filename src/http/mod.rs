//! # HTTP Transport Module
//!
//! 요청 클라이언트와 실제 네트워크 사이의 경계입니다.
//! 요청 클라이언트는 이 trait만 알고 있으므로 테스트에서는 스크립트된 가짜 전송 계층을,
//! 실행 바이너리에서는 [`ReqwestTransport`]를 주입합니다.
//!
//! 이 계층은 상태 코드를 해석하지 않습니다. 2xx가 아닌 응답도 `Ok`로 돌려주며,
//! `Err`는 DNS 실패, 연결 거부처럼 응답 자체를 받지 못한 경우에만 반환합니다.

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use crate::errors::AppResult;

/// 전송할 요청
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: Method,
    /// 쿼리 문자열까지 포함된 전체 URL
    pub url: String,
    /// `Authorization: Bearer <token>` 헤더에 실을 토큰
    pub bearer_token: Option<String>,
    /// JSON 본문
    pub json_body: Option<Value>,
}

/// 수신한 응답
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl TransportResponse {
    /// JSON 응답을 생성합니다.
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            content_type: Some("application/json".to_string()),
            body: body.to_string(),
        }
    }

    /// 일반 텍스트 응답을 생성합니다.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            content_type: Some("text/plain; charset=utf-8".to_string()),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Content-Type이 JSON 계열인지 확인합니다. (`application/problem+json` 포함)
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("json"))
            .unwrap_or(false)
    }
}

/// HTTP 전송 계층
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// 요청을 전송합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NetworkFailure` - 응답을 받지 못한 경우 (원본 에러 내용 포함)
    async fn send(&self, request: TransportRequest) -> AppResult<TransportResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_type_detection() {
        assert!(TransportResponse::json(400, &json!({})).is_json());
        assert!(!TransportResponse::text(500, "oops").is_json());

        let problem = TransportResponse {
            status: 422,
            content_type: Some("Application/Problem+JSON".to_string()),
            body: String::new(),
        };
        assert!(problem.is_json());
        assert!(!TransportResponse::default().is_json());
    }

    #[test]
    fn test_success_range() {
        assert!(TransportResponse::text(204, "").is_success());
        assert!(!TransportResponse::text(301, "").is_success());
        assert!(!TransportResponse::text(401, "").is_success());
    }
}
