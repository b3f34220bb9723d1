//! 로그인 서비스
//!
//! 아이디/비밀번호를 검증하고 `POST /auth/login`을 호출한 뒤,
//! 성공하면 자격 증명을 저장하고 홈 경로로 이동합니다.
//!
//! 로그인 단계에는 아직 세션이 없으므로 401도 일반 실패로 취급하며,
//! 서버의 `message`를 그대로 보여줄 뿐 저장소 삭제나 리다이렉트를 하지 않습니다.

use crate::domain::{Credentials, LoginRequest, LoginResponse, RequestOutcome};
use crate::errors::{AppError, AppResult};
use super::api_client::ApiRequest;
use super::SessionContext;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "아이디 또는 비밀번호가 올바르지 않습니다.";
pub const LOGIN_NETWORK_MESSAGE: &str = "로그인 중 오류가 발생했습니다. 네트워크 연결을 확인해주세요.";
const MISSING_TOKEN_MESSAGE: &str = "로그인 응답에 인증 토큰이 없습니다.";

pub struct AuthService {
    context: SessionContext,
}

impl AuthService {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    /// 로그인합니다.
    ///
    /// 저장되는 이메일은 응답 `user.email`, 없으면 입력한 아이디입니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 아이디/비밀번호 누락 (네트워크 호출 없음)
    /// * `AppError::RemoteError` - 서버 거부 또는 토큰 없는 성공 응답
    /// * `AppError::NetworkFailure` - 서버와 통신 실패
    /// * `AppError::StorageError` - 자격 증명 저장 실패
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Credentials> {
        let request = LoginRequest::new(username, password)?;

        let api_request = ApiRequest::post("/auth/login")
            .json(serde_json::to_value(&request)?)
            .fallback_message(INVALID_CREDENTIALS_MESSAGE)
            .network_message(LOGIN_NETWORK_MESSAGE);

        let response = match self.context.client.call_as::<LoginResponse>(api_request).await {
            RequestOutcome::Success(response) => response,
            RequestOutcome::Unauthorized => {
                log::warn!("로그인 거부: {}", request.username.trim());
                return Err(AppError::RemoteError {
                    status: 401,
                    message: INVALID_CREDENTIALS_MESSAGE.to_string(),
                });
            }
            RequestOutcome::ClientOrServerError { status, message } => {
                log::warn!("로그인 실패 (status={}): {}", status, message);
                return Err(AppError::RemoteError { status, message });
            }
            RequestOutcome::NetworkFailure(message) => {
                return Err(AppError::NetworkFailure(message));
            }
        };

        let token = response.token.clone().ok_or_else(|| AppError::RemoteError {
            status: 200,
            message: response
                .message
                .clone()
                .unwrap_or_else(|| MISSING_TOKEN_MESSAGE.to_string()),
        })?;

        let email = response
            .user_email()
            .map(str::to_string)
            .unwrap_or_else(|| request.username.clone());

        let mut credentials = Credentials::new(token, email);
        credentials.user = response.user;

        self.context.store.set(&credentials).await?;
        log::info!("✅ 로그인 성공: {}", credentials.email().unwrap_or_default());

        self.context.navigator.navigate(&self.context.policy.home_path);
        Ok(credentials)
    }
}
