//! # Logout Sequencer
//!
//! 1. 저장된 토큰을 읽어 둡니다.
//! 2. 저장소를 비웁니다.
//! 3. 토큰이 있었으면 `POST /auth/logout`을 시도합니다.
//!    `SessionPolicy::logout_timeout`을 넘기거나 실패하면 로그만 남깁니다.
//! 4. 로그인 페이지로 이동합니다.
//!
//! 저장소 삭제는 원격 호출보다 먼저 끝나므로, 원격 호출이 멈추거나
//! 호출자가 `logout()`을 중간에 취소해도 자격 증명은 남지 않습니다.

use tokio::time::timeout;
use crate::domain::RequestOutcome;
use super::api_client::ApiRequest;
use super::SessionContext;

pub struct LogoutSequencer {
    context: SessionContext,
}

impl LogoutSequencer {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    /// 로그아웃을 실행합니다.
    pub async fn logout(&self) {
        let token = match self.context.store.get().await {
            Ok(credentials) => credentials.token().map(str::to_string),
            Err(e) => {
                log::warn!("자격 증명 읽기 실패, 원격 로그아웃 생략: {}", e);
                None
            }
        };

        if let Err(e) = self.context.store.clear().await {
            log::error!("자격 증명 삭제 실패: {}", e);
        }

        if let Some(token) = token {
            self.revoke_remote(&token).await;
        }

        self.context.navigator.navigate(&self.context.policy.login_path);
        log::info!("👋 로그아웃 완료");
    }

    async fn revoke_remote(&self, token: &str) {
        let request = ApiRequest::post("/auth/logout").authorized(Some(token));
        let limit = self.context.policy.logout_timeout;

        match timeout(limit, self.context.client.call(request)).await {
            Ok(RequestOutcome::Success(_)) => log::info!("원격 로그아웃 완료"),
            Ok(RequestOutcome::Unauthorized) => log::info!("이미 만료된 세션"),
            Ok(RequestOutcome::ClientOrServerError { status, message }) => {
                log::warn!("원격 로그아웃 실패 (status={}): {}", status, message)
            }
            Ok(RequestOutcome::NetworkFailure(message)) => {
                log::warn!("원격 로그아웃 실패: {}", message)
            }
            Err(_) => log::warn!("원격 로그아웃 응답 없음 ({:?} 초과)", limit),
        }
    }
}
