//! # API & Session Configuration Module
//!
//! 백엔드 API 주소와 세션 가드 정책을 관리하는 모듈입니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # API 서버 주소 (필수, 없으면 fallback 사용)
//! export API_BASE_URL="https://api.jikgumate.example/api"
//!
//! # API_BASE_URL이 없을 때 사용할 대체 주소 (선택)
//! export API_FALLBACK_ORIGIN="https://staging.jikgumate.example"
//!
//! # 세션 정책
//! export SESSION_FAIL_OPEN="true"   # 일시적 오류 시 로그인 상태 유지
//! export LOGIN_PATH="/login"
//! export HOME_PATH="/mypage"
//! export LOGOUT_TIMEOUT_SECS="5"    # 원격 로그아웃 대기 상한
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ApiConfig, SessionPolicy};
//!
//! let api = ApiConfig::from_env();
//! let origin = api.resolve_origin()?;
//! let policy = SessionPolicy::from_env();
//! ```

use std::env;
use std::time::Duration;
use crate::errors::{AppError, AppResult};

/// API 서버 주소 설정
///
/// 설정값은 원본 그대로 보관하고, 정규화(`/api` 제거 등)는
/// 요청 클라이언트가 매 호출마다 수행합니다.
#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    /// `API_BASE_URL`
    pub api_origin: Option<String>,
    /// `API_FALLBACK_ORIGIN`
    pub fallback_origin: Option<String>,
}

impl ApiConfig {
    /// 지정된 주소로 설정을 생성합니다.
    pub fn new(api_origin: impl Into<String>) -> Self {
        Self {
            api_origin: Some(api_origin.into()),
            fallback_origin: None,
        }
    }

    /// 프로세스 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수에서 설정을 읽어옵니다.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_origin: lookup("API_BASE_URL").filter(|s| !s.trim().is_empty()),
            fallback_origin: lookup("API_FALLBACK_ORIGIN").filter(|s| !s.trim().is_empty()),
        }
    }

    /// 대체 주소를 지정합니다.
    pub fn with_fallback(mut self, fallback_origin: impl Into<String>) -> Self {
        self.fallback_origin = Some(fallback_origin.into());
        self
    }

    /// 사용할 API 주소를 결정합니다. (정규화 이전 원본)
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - 주소와 대체 주소가 모두 없는 경우
    pub fn resolve_origin(&self) -> AppResult<&str> {
        self.api_origin
            .as_deref()
            .or(self.fallback_origin.as_deref())
            .ok_or_else(|| {
                AppError::ConfigurationError("API 서버 URL이 설정되지 않았습니다.".to_string())
            })
    }
}

/// 세션 가드 정책
#[derive(Debug, Clone, PartialEq)]
pub struct SessionPolicy {
    /// 프로필 조회가 401 이외의 이유로 실패했을 때 로그인 상태로 간주할지 여부
    ///
    /// `true`이면 토큰이 존재하는 한 일시적 서버/네트워크 오류에도 페이지를 보여줍니다.
    pub fail_open_on_transient_error: bool,
    /// 로그인 페이지 경로
    pub login_path: String,
    /// 로그인 성공 후 이동할 경로
    pub home_path: String,
    /// 원격 로그아웃 호출을 기다리는 최대 시간
    pub logout_timeout: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            fail_open_on_transient_error: true,
            login_path: "/login".to_string(),
            home_path: "/mypage".to_string(),
            logout_timeout: Duration::from_secs(5),
        }
    }
}

impl SessionPolicy {
    /// 프로세스 환경 변수에서 정책을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수에서 정책을 읽어옵니다.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let fail_open = match lookup("SESSION_FAIL_OPEN") {
            Some(raw) => match raw.trim().to_lowercase().as_str() {
                "false" | "0" | "no" | "off" => false,
                "true" | "1" | "yes" | "on" => true,
                other => {
                    log::warn!("SESSION_FAIL_OPEN 파싱 실패: {}. 기본값 true 사용", other);
                    true
                }
            },
            None => defaults.fail_open_on_transient_error,
        };

        let logout_timeout = match lookup("LOGOUT_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Duration::from_secs(secs),
                Err(e) => {
                    log::warn!("LOGOUT_TIMEOUT_SECS 파싱 실패: {}. 기본값 사용", e);
                    defaults.logout_timeout
                }
            },
            None => defaults.logout_timeout,
        };

        Self {
            fail_open_on_transient_error: fail_open,
            login_path: lookup("LOGIN_PATH").unwrap_or(defaults.login_path),
            home_path: lookup("HOME_PATH").unwrap_or(defaults.home_path),
            logout_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_missing_origin_is_configuration_error() {
        let config = ApiConfig::from_source(|_| None);
        assert!(matches!(
            config.resolve_origin(),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_fallback_origin_used_when_primary_absent() {
        let config = ApiConfig::from_source(source(&[("API_FALLBACK_ORIGIN", "https://fallback.example")]));
        assert_eq!(config.resolve_origin().unwrap(), "https://fallback.example");
    }

    #[test]
    fn test_primary_origin_wins() {
        let config = ApiConfig::new("https://api.example/api").with_fallback("https://fallback.example");
        assert_eq!(config.resolve_origin().unwrap(), "https://api.example/api");
    }

    #[test]
    fn test_blank_origin_treated_as_absent() {
        let config = ApiConfig::from_source(source(&[("API_BASE_URL", "   ")]));
        assert!(config.resolve_origin().is_err());
    }

    #[test]
    fn test_session_policy_defaults() {
        let policy = SessionPolicy::from_source(|_| None);
        assert!(policy.fail_open_on_transient_error);
        assert_eq!(policy.login_path, "/login");
        assert_eq!(policy.home_path, "/mypage");
        assert_eq!(policy.logout_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_logout_timeout_override() {
        let policy = SessionPolicy::from_source(source(&[("LOGOUT_TIMEOUT_SECS", "2")]));
        assert_eq!(policy.logout_timeout, Duration::from_secs(2));

        let policy = SessionPolicy::from_source(source(&[("LOGOUT_TIMEOUT_SECS", "soon")]));
        assert_eq!(policy.logout_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_session_policy_fail_closed() {
        let policy = SessionPolicy::from_source(source(&[("SESSION_FAIL_OPEN", "false")]));
        assert!(!policy.fail_open_on_transient_error);
    }
}
