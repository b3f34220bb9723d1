//! # Session Guard
//!
//! 보호된 페이지에 진입할 때마다 실행되는 상태 기계입니다.
//!
//! ```text
//! Init ──(token 또는 email 없음)──▶ Unauthenticated ─▶ 안내 + /login 이동
//!   │
//!   └──▶ Verifying ── GET /users/{email}
//!            ├─ Success              ─▶ Authenticated (프로필 갱신)
//!            ├─ Unauthorized         ─▶ 저장소 삭제 ─▶ Unauthenticated ─▶ /login 이동
//!            └─ 서버/네트워크 오류   ─▶ fail-open이면 Authenticated (프로필 유지)
//!                                        fail-closed면 Unauthenticated ─▶ /login 이동
//! ```
//!
//! 자격 증명 확인은 항상 프로필 조회보다 먼저 끝납니다.
//! 응답이 도착했을 때 이미 페이지를 떠났다면 상태를 반영하지 않고 이동도 하지 않습니다.
//! 단, 401 응답이었다면 저장소는 그래도 비웁니다.

use crate::domain::{Credentials, Profile, RequestOutcome};
use crate::navigation::PageScope;
use super::api_client::ApiRequest;
use super::profile_sync::sync_profile;
use super::SessionContext;

/// 로그인 정보가 없을 때 보여줄 안내 문구
pub const LOGIN_REQUIRED_MESSAGE: &str = "로그인이 필요합니다.";

/// 서버가 토큰을 거부했을 때 보여줄 안내 문구
pub const SESSION_EXPIRED_MESSAGE: &str = "인증이 필요합니다. 다시 로그인해주세요.";

const PROFILE_FETCH_FAILED_MESSAGE: &str = "사용자 정보를 불러오지 못했습니다.";

/// 세션 가드 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Init,
    Verifying,
    Authenticated,
    Unauthenticated,
}

/// 서버가 세션을 거부했을 때의 정리 절차
///
/// 저장소는 항상 비우고, 페이지가 아직 살아 있을 때만 로그인 페이지로 이동합니다.
/// 저장소 삭제 실패는 로그만 남기며 이동은 계속 진행합니다.
pub async fn expire_session(context: &SessionContext, scope: &PageScope) {
    if let Err(e) = context.store.clear().await {
        log::error!("자격 증명 삭제 실패: {}", e);
    }

    if scope.is_alive() {
        context.navigator.navigate(&context.policy.login_path);
    } else {
        log::debug!("페이지를 떠난 뒤 도착한 401, 이동 생략");
    }
}

/// 보호된 페이지의 세션 가드
///
/// 페이지 하나당 하나씩 만들고, 진입할 때마다 [`SessionGuard::mount`]를 호출합니다.
/// 프로필은 이전 진입에서 받은 값을 유지하다가 조회에 성공했을 때만 통째로 교체됩니다.
pub struct SessionGuard {
    context: SessionContext,
    state: SessionState,
    profile: Profile,
    credentials: Credentials,
    notice_shown: bool,
}

impl SessionGuard {
    pub fn new(context: SessionContext) -> Self {
        Self {
            context,
            state: SessionState::Init,
            profile: Profile::default(),
            credentials: Credentials::default(),
            notice_shown: false,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// 마지막 진입에서 읽은 자격 증명
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// 페이지 진입 시 상태 기계를 처음부터 실행합니다.
    pub async fn mount(&mut self, scope: &PageScope) -> SessionState {
        self.state = SessionState::Init;
        self.notice_shown = false;

        self.credentials = match self.context.store.get().await {
            Ok(credentials) => credentials,
            Err(e) => {
                log::error!("자격 증명 읽기 실패, 비로그인으로 처리: {}", e);
                Credentials::default()
            }
        };

        let token = self.credentials.token().map(str::to_string);
        let email = self.credentials.email().map(str::to_string);
        let (Some(token), Some(email)) = (token, email) else {
            log::info!("자격 증명 없음, 로그인 페이지로 이동");
            self.state = SessionState::Unauthenticated;
            self.show_notice_once(LOGIN_REQUIRED_MESSAGE);
            if scope.is_alive() {
                self.context.navigator.navigate(&self.context.policy.login_path);
            }
            return self.state;
        };

        self.state = SessionState::Verifying;

        let request = ApiRequest::get(format!("/users/{}", email))
            .authorized(Some(&token))
            .fallback_message(PROFILE_FETCH_FAILED_MESSAGE);
        let outcome = self.context.client.call(request).await;

        if !scope.is_alive() {
            if outcome.is_unauthorized() {
                expire_session(&self.context, scope).await;
            }
            log::debug!("페이지를 떠난 뒤 도착한 프로필 응답 무시");
            return self.state;
        }

        match outcome {
            RequestOutcome::Success(user) => {
                self.profile = sync_profile(&user).with_fallback_email(&email);
                self.state = SessionState::Authenticated;
                log::info!("✅ 세션 확인 완료: {}", email);
            }
            RequestOutcome::Unauthorized => {
                log::warn!("세션 만료: {}", email);
                self.state = SessionState::Unauthenticated;
                self.credentials = Credentials::default();
                self.show_notice_once(SESSION_EXPIRED_MESSAGE);
                expire_session(&self.context, scope).await;
            }
            RequestOutcome::ClientOrServerError { message, .. }
            | RequestOutcome::NetworkFailure(message) => {
                if self.context.policy.fail_open_on_transient_error {
                    log::warn!("프로필 조회 실패, 로그인 상태 유지: {}", message);
                    self.state = SessionState::Authenticated;
                } else {
                    log::warn!("프로필 조회 실패, 로그인 페이지로 이동: {}", message);
                    self.state = SessionState::Unauthenticated;
                    self.show_notice_once(&message);
                    self.context.navigator.navigate(&self.context.policy.login_path);
                }
            }
        }

        self.state
    }

    fn show_notice_once(&mut self, message: &str) {
        if self.notice_shown {
            return;
        }
        self.notice_shown = true;
        self.context.notifier.notify(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionPolicy;
    use crate::errors::AppError;
    use crate::navigation::{RecordingNavigator, RecordingNotifier};
    use crate::services::api_client::tests::{client_with, ScriptedTransport};
    use crate::stores::{CredentialStore, MemoryCredentialStore};
    use serde_json::json;
    use std::sync::Arc;

    struct Fixture {
        transport: Arc<ScriptedTransport>,
        store: Arc<MemoryCredentialStore>,
        navigator: Arc<RecordingNavigator>,
        notifier: Arc<RecordingNotifier>,
        guard: SessionGuard,
    }

    fn fixture(credentials: Credentials, policy: SessionPolicy) -> Fixture {
        let transport = ScriptedTransport::new();
        let store = Arc::new(MemoryCredentialStore::with_credentials(&credentials).unwrap());
        let navigator = Arc::new(RecordingNavigator::new());
        let notifier = Arc::new(RecordingNotifier::new());

        let context = SessionContext {
            store: store.clone(),
            client: Arc::new(client_with(transport.clone())),
            navigator: navigator.clone(),
            notifier: notifier.clone(),
            policy,
        };

        Fixture {
            transport,
            store,
            navigator,
            notifier,
            guard: SessionGuard::new(context),
        }
    }

    fn logged_in() -> Credentials {
        Credentials::new("abc", "x@y.com")
    }

    #[tokio::test]
    async fn test_no_token_redirects_without_fetch() {
        let mut f = fixture(Credentials::default(), SessionPolicy::default());

        let state = f.guard.mount(&PageScope::new()).await;

        assert_eq!(state, SessionState::Unauthenticated);
        assert!(f.transport.requests().is_empty());
        assert_eq!(f.navigator.paths(), vec!["/login"]);
        assert_eq!(f.notifier.messages(), vec![LOGIN_REQUIRED_MESSAGE]);
    }

    #[tokio::test]
    async fn test_token_without_email_is_unauthenticated() {
        let creds = Credentials {
            token: Some("abc".to_string()),
            ..Default::default()
        };
        let mut f = fixture(creds, SessionPolicy::default());

        assert_eq!(f.guard.mount(&PageScope::new()).await, SessionState::Unauthenticated);
        assert!(f.transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_success_populates_profile_with_fallback_email() {
        let mut f = fixture(logged_in(), SessionPolicy::default());
        f.transport.push_json(200, json!({"name": "Kim", "address": "Seoul"}));

        let state = f.guard.mount(&PageScope::new()).await;

        assert_eq!(state, SessionState::Authenticated);
        assert_eq!(
            f.guard.profile(),
            &Profile {
                nickname: "Kim".to_string(),
                email: "x@y.com".to_string(),
                address: "Seoul".to_string(),
                profile_image: String::new(),
            }
        );

        let sent = f.transport.requests();
        assert_eq!(sent[0].url, "https://shop.example/users/x@y.com");
        assert_eq!(sent[0].bearer_token.as_deref(), Some("abc"));
        assert!(f.navigator.paths().is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_clears_store_and_redirects() {
        let mut f = fixture(logged_in().with_user(json!({"id": 1})), SessionPolicy::default());
        f.transport.push_json(401, json!({"message": "expired"}));

        let state = f.guard.mount(&PageScope::new()).await;

        assert_eq!(state, SessionState::Unauthenticated);
        assert!(f.store.get().await.unwrap().is_empty());
        assert_eq!(f.navigator.paths(), vec!["/login"]);
        assert_eq!(f.notifier.messages(), vec![SESSION_EXPIRED_MESSAGE]);
    }

    #[tokio::test]
    async fn test_transient_failure_fails_open_and_keeps_profile() {
        let mut f = fixture(logged_in(), SessionPolicy::default());
        f.transport.push_json(200, json!({"name": "Kim"}));
        f.transport.push_json(500, json!({"message": "boom"}));
        f.transport
            .push(Err(AppError::NetworkFailure("connection refused".to_string())));

        let scope = PageScope::new();
        f.guard.mount(&scope).await;
        assert_eq!(f.guard.mount(&scope).await, SessionState::Authenticated);
        assert_eq!(f.guard.profile().nickname, "Kim");
        assert_eq!(f.guard.mount(&scope).await, SessionState::Authenticated);
        assert_eq!(f.guard.profile().nickname, "Kim");

        assert!(f.store.get().await.unwrap().is_authenticated());
        assert!(f.navigator.paths().is_empty());
    }

    #[tokio::test]
    async fn test_fail_closed_redirects_but_keeps_credentials() {
        let policy = SessionPolicy {
            fail_open_on_transient_error: false,
            ..Default::default()
        };
        let mut f = fixture(logged_in(), policy);
        f.transport.push_json(503, json!({"error": "maintenance"}));

        assert_eq!(f.guard.mount(&PageScope::new()).await, SessionState::Unauthenticated);
        assert_eq!(f.navigator.paths(), vec!["/login"]);
        assert_eq!(f.notifier.messages(), vec!["maintenance"]);
        assert!(f.store.get().await.unwrap().is_authenticated());
    }

    #[tokio::test]
    async fn test_response_after_leaving_page_is_ignored() {
        let mut f = fixture(logged_in(), SessionPolicy::default());
        f.transport.push_json(200, json!({"name": "Kim"}));

        let scope = PageScope::new();
        scope.leave();

        assert_eq!(f.guard.mount(&scope).await, SessionState::Verifying);
        assert_eq!(f.guard.profile(), &Profile::default());
    }

    #[tokio::test]
    async fn test_unauthorized_after_leaving_page_clears_without_redirect() {
        let mut f = fixture(logged_in(), SessionPolicy::default());
        f.transport.push_json(401, json!({}));

        let scope = PageScope::new();
        scope.leave();
        f.guard.mount(&scope).await;

        assert!(f.store.get().await.unwrap().is_empty());
        assert!(f.navigator.paths().is_empty());
    }

    #[tokio::test]
    async fn test_notice_flag_resets_on_each_mount() {
        let mut f = fixture(Credentials::default(), SessionPolicy::default());

        f.guard.mount(&PageScope::new()).await;
        f.guard.mount(&PageScope::new()).await;

        assert_eq!(f.notifier.messages().len(), 2);
        assert_eq!(f.navigator.paths(), vec!["/login", "/login"]);
    }
}
