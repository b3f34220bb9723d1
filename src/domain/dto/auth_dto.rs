//! 로그인 요청/응답 DTO

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_optional_string, is_valid_string};

/// `POST /auth/login` 요청 본문
///
/// 공백 검사는 trim 기준으로 하지만 서버에는 입력값을 그대로 전송합니다.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// 입력값을 검증하여 로그인 요청을 생성합니다.
    ///
    /// 아이디를 먼저 검사하고, 그다음 비밀번호를 검사합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 아이디 또는 비밀번호가 비어 있는 경우
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> AppResult<Self> {
        let username = username.into();
        let password = password.into();

        if !is_valid_string(&username) {
            return Err(AppError::ValidationError("아이디를 입력해주세요.".to_string()));
        }
        if !is_valid_string(&password) {
            return Err(AppError::ValidationError("비밀번호를 입력해주세요.".to_string()));
        }

        Ok(Self { username, password })
    }
}

/// `POST /auth/login` 응답 본문
///
/// 서버가 토큰이나 사용자 정보를 생략할 수 있으므로 모든 필드가 선택입니다.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub token: Option<String>,
    pub user: Option<Value>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// 사용자 정보에 포함된 이메일을 반환합니다.
    pub fn user_email(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.get("email"))
            .and_then(Value::as_str)
            .filter(|e| !e.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_request_validation_order() {
        assert_eq!(
            LoginRequest::new("  ", "").unwrap_err(),
            AppError::ValidationError("아이디를 입력해주세요.".to_string())
        );
        assert_eq!(
            LoginRequest::new("kim@example.com", "   ").unwrap_err(),
            AppError::ValidationError("비밀번호를 입력해주세요.".to_string())
        );
    }

    #[test]
    fn test_login_request_keeps_raw_values() {
        let req = LoginRequest::new(" kim ", " pw ").unwrap();
        assert_eq!(req.username, " kim ");
        assert_eq!(req.password, " pw ");
    }

    #[test]
    fn test_login_response_partial_body() {
        let res: LoginResponse = serde_json::from_value(json!({"token": "abc"})).unwrap();
        assert_eq!(res.token.as_deref(), Some("abc"));
        assert!(res.user.is_none());
        assert!(res.user_email().is_none());

        let res: LoginResponse =
            serde_json::from_value(json!({"user": {"email": "kim@example.com"}})).unwrap();
        assert_eq!(res.user_email(), Some("kim@example.com"));
    }
}
