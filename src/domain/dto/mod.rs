//! # Data Transfer Objects (DTO) Module
//!
//! 백엔드와 주고받는 요청/응답 본문을 정의합니다.
//!
//! | 엔드포인트 | 요청 | 응답 |
//! |------------|------|------|
//! | `POST /auth/login` | [`LoginRequest`] | [`LoginResponse`] |
//! | `GET /products/analyze` | [`ProductLinkRequest`] | [`ProductInfo`] |
//!
//! `GET /users/{email}`의 응답은 필드 이름이 고정되어 있지 않아 DTO 없이
//! `serde_json::Value`로 받고, 프로필 동기화기가 해석합니다.

pub mod auth_dto;
pub mod product_dto;

pub use auth_dto::*;
pub use product_dto::*;
