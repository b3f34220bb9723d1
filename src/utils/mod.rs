//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 토큰 마스킹
//! - [`display_terminal`] - CLI 화면 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{is_valid_string, mask_token};
//! use crate::utils::display_terminal::print_profile;
//!
//! assert!(is_valid_string("  https://shop.example/1  "));
//! log::debug!("token={}", mask_token(&token));
//! print_profile(&profile);
//! ```

pub mod string_utils;
pub mod display_terminal;
