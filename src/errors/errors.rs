//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 세션 게이트 요청 파이프라인을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`를 사용하여 타입 안전하고 일관된 에러 처리를 제공하며,
//! 모든 에러는 화면에 보여줄 짧은 한국어 메시지로 귀결됩니다.
//!
//! ## 에러 처리 정책
//!
//! | AppError | 처리 방식 |
//! |----------|-----------|
//! | `ValidationError` | 네트워크 호출 전 차단, 입력 폼에 인라인 표시 |
//! | `ConfigurationError` | API 주소 누락, 인라인 표시 |
//! | `Unauthorized` | 자격 증명 삭제 + 로그인 페이지로 이동 |
//! | `RemoteError` | 세션 상태 변경 없이 인라인 표시 |
//! | `NetworkFailure` | 세션 상태 변경 없이 인라인 표시 |
//! | `StorageError` | 저장소 입출력 실패, 로그 후 비로그인으로 취급 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn check_link(link: &str) -> Result<(), AppError> {
//!     if link.trim().is_empty() {
//!         return Err(AppError::ValidationError("상품 링크를 입력해주세요.".to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트에서 발생할 수 있는 모든 종류의 실패를 포괄하는 열거형입니다.
/// 각 변형은 사용자에게 보여줄 메시지를 그대로 담고 있으며,
/// 원본 전송 계층 에러는 로그로만 남기고 이곳에 싣지 않습니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    /// 입력값 검증 에러 (네트워크 호출 이전)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 토큰 누락 또는 서버의 401 응답
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// 401 이외의 2xx가 아닌 응답
    #[error("Remote error ({status}): {message}")]
    RemoteError { status: u16, message: String },

    /// DNS, 연결 거부 등 전송 계층 실패
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// API 서버 주소 미설정
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 자격 증명 저장소 입출력 실패
    #[error("Storage error: {0}")]
    StorageError(String),

    /// 내부 에러 (직렬화 실패 등)
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 화면에 그대로 표시할 한국어 메시지를 반환합니다.
    ///
    /// 저장소/내부 에러는 상세 내용을 숨기고 일반 메시지로 대체합니다.
    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::Unauthorized(msg)
            | AppError::NetworkFailure(msg)
            | AppError::ConfigurationError(msg) => msg.clone(),
            AppError::RemoteError { message, .. } => message.clone(),
            AppError::StorageError(_) | AppError::InternalError(_) => {
                "요청 처리 중 오류가 발생했습니다.".to_string()
            }
        }
    }

    /// 자격 증명 삭제와 리다이렉트가 필요한 에러인지 확인합니다.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::InternalError(format!("JSON 처리 실패: {}", e))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        AppError::StorageError(format!("Redis 오류: {}", e))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::StorageError(format!("파일 입출력 오류: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_message() {
        let error = AppError::ValidationError("아이디를 입력해주세요.".to_string());
        assert_eq!(error.user_message(), "아이디를 입력해주세요.");
        assert!(!error.requires_reauthentication());
    }

    #[test]
    fn test_remote_error_message() {
        let error = AppError::RemoteError {
            status: 500,
            message: "서버 점검 중입니다".to_string(),
        };
        assert_eq!(error.user_message(), "서버 점검 중입니다");
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn test_unauthorized_requires_reauthentication() {
        let error = AppError::Unauthorized("인증이 필요합니다. 다시 로그인해주세요.".to_string());
        assert!(error.requires_reauthentication());
    }

    #[test]
    fn test_storage_error_hides_details() {
        let error = AppError::StorageError("permission denied: /var/lib/creds.json".to_string());
        assert!(!error.user_message().contains("/var/lib"));
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
