//! `reqwest` 기반 전송 계층

use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use crate::errors::{AppError, AppResult};
use super::{HttpTransport, TransportRequest, TransportResponse};

/// 프로세스 전역에서 공유하는 HTTP 클라이언트 (연결 풀 재사용)
static HTTP_CLIENT: Lazy<Client> = Lazy::new(Client::new);

/// 운영 환경용 전송 계층
///
/// 타임아웃은 설정하지 않습니다. 요청은 서버가 응답하거나 연결이 끊길 때까지 대기합니다.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> AppResult<TransportResponse> {
        let mut builder = HTTP_CLIENT.request(request.method.clone(), &request.url);

        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.json_body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            AppError::NetworkFailure(format!("{} {} 요청 실패: {}", request.method, request.url, e))
        })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await.map_err(|e| {
            AppError::NetworkFailure(format!("{} 응답 본문 수신 실패: {}", request.url, e))
        })?;

        Ok(TransportResponse {
            status,
            content_type,
            body,
        })
    }
}
