//! # Domain Models Module
//!
//! 세션 파이프라인이 주고받는 값 객체들을 정의합니다.
//!
//! - [`credentials`] - 저장소에 보관되는 `token`/`email`/`user`
//! - [`profile`] - 서버 사용자 정보에서 파생된 화면용 프로필
//! - [`outcome`] - 모든 인증 요청이 귀결되는 네 가지 결과

pub mod credentials;
pub mod profile;
pub mod outcome;

pub use credentials::*;
pub use profile::*;
pub use outcome::*;
