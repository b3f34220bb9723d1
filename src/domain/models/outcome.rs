//! 인증 요청 결과 모델
//!
//! 요청 클라이언트의 모든 호출은 서버가 어떻게 응답하든 아래 네 가지 중 하나로 귀결됩니다.

use crate::errors::{AppError, AppResult};

/// 요청 결과
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome<T> {
    /// 2xx 응답과 해석된 본문
    Success(T),
    /// 401 응답 또는 토큰 없이 시도된 인증 요청
    Unauthorized,
    /// 401 이외의 실패 응답, 사용자에게 보여줄 메시지 포함
    ClientOrServerError { status: u16, message: String },
    /// 전송 계층 실패, 사용자에게 보여줄 일반 메시지 포함
    NetworkFailure(String),
}

impl<T> RequestOutcome<T> {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, RequestOutcome::Unauthorized)
    }

    /// `AppResult`로 변환합니다.
    ///
    /// `unauthorized_message`는 401을 사용자에게 설명할 문구입니다.
    pub fn into_result(self, unauthorized_message: &str) -> AppResult<T> {
        match self {
            RequestOutcome::Success(v) => Ok(v),
            RequestOutcome::Unauthorized => {
                Err(AppError::Unauthorized(unauthorized_message.to_string()))
            }
            RequestOutcome::ClientOrServerError { status, message } => {
                Err(AppError::RemoteError { status, message })
            }
            RequestOutcome::NetworkFailure(msg) => Err(AppError::NetworkFailure(msg)),
        }
    }
}
