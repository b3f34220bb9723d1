//! 에러 모듈
//!
//! [`errors::AppError`]와 결과 타입 별칭을 재export 합니다.

#[allow(clippy::module_inception)]
pub mod errors;

pub use errors::*;
