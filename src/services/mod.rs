//! # Services Module
//!
//! 세션 게이트 요청 파이프라인의 비즈니스 로직 계층입니다.
//!
//! | 서비스 | 역할 |
//! |--------|------|
//! | [`api_client`] | 주소 정규화, Bearer 토큰 부착, 응답 해석 |
//! | [`profile_sync`] | 서버 사용자 정보 → 화면용 프로필 |
//! | [`session_guard`] | 보호된 페이지 진입 시 세션 확인 |
//! | [`logout`] | 원격 로그아웃 시도 후 로컬 정리 |
//! | [`auth_service`] | 로그인 |
//! | [`product_service`] | 구매 요청 상품 분석 |
//! | [`profile_editor`] | 프로필 로컬 편집 |
//!
//! 모든 서비스는 [`SessionContext`] 하나를 공유합니다. 구성 요소는 trait 객체로 주입되므로
//! 테스트에서는 메모리 저장소, 스크립트된 전송 계층, 기록용 Navigator로 바꿔 끼웁니다.

pub mod api_client;
pub mod auth_service;
pub mod logout;
pub mod product_service;
pub mod profile_editor;
pub mod profile_sync;
pub mod session_guard;

pub use api_client::{normalize_origin, ApiClient, ApiRequest};
pub use auth_service::AuthService;
pub use logout::LogoutSequencer;
pub use product_service::ProductService;
pub use profile_editor::ProfileDraft;
pub use profile_sync::sync_profile;
pub use session_guard::{expire_session, SessionGuard, SessionState};

use std::sync::Arc;
use crate::config::SessionPolicy;
use crate::navigation::{Navigator, Notifier};
use crate::stores::CredentialStore;

/// 서비스들이 공유하는 협력 객체 묶음
#[derive(Clone)]
pub struct SessionContext {
    pub store: Arc<dyn CredentialStore>,
    pub client: Arc<ApiClient>,
    pub navigator: Arc<dyn Navigator>,
    pub notifier: Arc<dyn Notifier>,
    pub policy: SessionPolicy,
}
