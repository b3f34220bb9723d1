//! # Configuration Module
//!
//! 클라이언트의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, .env 로딩, 자격 증명 저장소 설정
//! - [`api_config`] - API 서버 주소, 세션 가드 정책
//!
//! ## 설계 원칙
//!
//! - 모든 설정 구조체는 `from_env()`와 `from_source(lookup)`을 제공합니다.
//!   테스트에서는 프로세스 환경을 건드리지 않고 `from_source`로 값을 주입합니다.
//! - API 주소가 없으면 기본값을 추측하지 않고 `ConfigurationError`를 반환합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export PROFILE="dev"                       # .env.dev 로드
//! export API_BASE_URL="https://api.example.com/api"
//! export CREDENTIAL_BACKEND="file"
//! export RUST_LOG="info,jikgumate_client=debug"
//! ```

pub mod data_config;
pub mod api_config;

pub use data_config::*;
pub use api_config::*;
