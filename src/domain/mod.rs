//! # Domain Module
//!
//! 세션 게이트 요청 파이프라인의 도메인 계층입니다.
//!
//! ```text
//! domain/
//! ├── models/   ← 자격 증명, 프로필, 요청 결과 (값 객체)
//! └── dto/      ← 백엔드 요청/응답 본문
//! ```

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
