//! 직구메이트 클라이언트
//!
//! 해외 직구 대행 스토어프론트의 세션 게이트 요청 파이프라인입니다.
//! 로그인으로 얻은 Bearer 토큰과 사용자 정보를 저장하고, 보호된 페이지에 진입할 때마다
//! 세션을 확인하며, 서버가 토큰을 거부하면 로컬 자격 증명을 정리하고 로그인으로 돌려보냅니다.
//!
//! # Features
//!
//! - **자격 증명 저장소**: 파일, Redis, 메모리 백엔드
//! - **세션 가드**: 페이지 진입 시 자격 증명 확인과 일회성 원격 검증 (fail-open 정책)
//! - **인증 요청 클라이언트**: 주소 정규화, Bearer 토큰 부착, 일관된 응답 해석
//! - **프로필 동기화**: 필드 이름이 유동적인 서버 사용자 정보 → 화면용 프로필
//! - **로그아웃**: 원격 무효화 시도 후 항상 로컬 정리
//! - **구매 요청**: 해외 상품 링크 분석
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   CLI (main)    │ ← login / mypage / analyze / logout
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 세션 가드, 로그인, 상품 분석, 로그아웃
//! └─────────────────┘
//!     │         │
//!     ▼         ▼
//! ┌────────┐ ┌──────────────┐
//! │ Stores │ │ HTTP (reqwest)│ ← 자격 증명 저장 / 백엔드 통신
//! └────────┘ └──────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use jikgumate_client::config::{ApiConfig, SessionPolicy, StorageConfig};
//! use jikgumate_client::http::ReqwestTransport;
//! use jikgumate_client::navigation::{LogNavigator, PageScope, TerminalNotifier};
//! use jikgumate_client::services::{ApiClient, SessionContext, SessionGuard};
//! use jikgumate_client::stores::open_store;
//!
//! let context = SessionContext {
//!     store: open_store(&StorageConfig::from_env()).await?,
//!     client: Arc::new(ApiClient::new(&ApiConfig::from_env(), Arc::new(ReqwestTransport::new()))?),
//!     navigator: Arc::new(LogNavigator::new()),
//!     notifier: Arc::new(TerminalNotifier),
//!     policy: SessionPolicy::from_env(),
//! };
//!
//! let mut guard = SessionGuard::new(context);
//! guard.mount(&PageScope::new()).await;
//! ```

pub mod config;
pub mod caching;
pub mod domain;
pub mod errors;
pub mod http;
pub mod navigation;
pub mod services;
pub mod stores;
pub mod utils;
