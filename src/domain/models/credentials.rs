//! 로그인 자격 증명 모델
//!
//! 로그인 성공 시 기록되고, 보호된 페이지 진입과 인증 요청 직전에 읽히며,
//! 로그아웃이나 401 응답 시 삭제되는 세 개의 키(`token`, `email`, `user`)를 표현합니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 저장소에 보관되는 자격 증명
///
/// `token`과 `email`이 모두 있을 때만 인증된 상태로 간주합니다.
/// 둘 중 하나만 있는 경우는 비로그인 상태와 동일하게 취급됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    /// Bearer 토큰
    pub token: Option<String>,

    /// 로그인 사용자 이메일 (프로필 조회 키)
    pub email: Option<String>,

    /// 로그인 응답에 포함된 사용자 원본 정보
    pub user: Option<Value>,
}

impl Credentials {
    /// 토큰과 이메일로 자격 증명을 생성합니다.
    pub fn new(token: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            email: Some(email.into()),
            user: None,
        }
    }

    /// 사용자 원본 정보를 덧붙입니다.
    pub fn with_user(mut self, user: Value) -> Self {
        self.user = Some(user);
        self
    }

    /// 비어 있지 않은 토큰을 반환합니다.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// 비어 있지 않은 이메일을 반환합니다.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.is_empty())
    }

    /// 토큰과 이메일이 모두 존재하는지 확인합니다.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.email().is_some()
    }

    /// 세 개의 키가 모두 비어 있는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.email.is_none() && self.user.is_none()
    }
}
