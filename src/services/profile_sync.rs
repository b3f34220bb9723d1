//! # Profile Synchronizer
//!
//! 필드 이름이 고정되지 않은 서버 사용자 정보를 화면용 [`Profile`]로 변환합니다.
//! 대상 필드마다 후보 키 목록을 순서대로 확인하여, 처음으로 문자열 값을 가진 키를 사용합니다.
//! 어떤 후보에도 문자열이 없으면 빈 문자열이 됩니다.
//!
//! | 필드 | 후보 키 (우선순위 순) |
//! |------|------------------------|
//! | `nickname` | `name`, `nickname` |
//! | `email` | `email` |
//! | `address` | `address`, `defaultAddress` |
//! | `profileImage` | `profileImage`, `profile_image`, `profileImageUrl`, `profile_image_url` |
//!
//! `null`이나 숫자처럼 문자열이 아닌 값은 키가 없는 것과 같이 취급합니다.

use serde_json::Value;
use crate::domain::Profile;

pub const NICKNAME_KEYS: &[&str] = &["name", "nickname"];
pub const EMAIL_KEYS: &[&str] = &["email"];
pub const ADDRESS_KEYS: &[&str] = &["address", "defaultAddress"];
pub const PROFILE_IMAGE_KEYS: &[&str] = &[
    "profileImage",
    "profile_image",
    "profileImageUrl",
    "profile_image_url",
];

/// 서버 사용자 정보를 프로필로 변환합니다.
///
/// 객체가 아닌 값(`null`, 배열 등)은 모든 필드가 빈 프로필이 됩니다.
pub fn sync_profile(user: &Value) -> Profile {
    Profile {
        nickname: first_string(user, NICKNAME_KEYS),
        email: first_string(user, EMAIL_KEYS),
        address: first_string(user, ADDRESS_KEYS),
        profile_image: first_string(user, PROFILE_IMAGE_KEYS),
    }
}

fn first_string(user: &Value, candidates: &[&str]) -> String {
    candidates
        .iter()
        .find_map(|key| user.get(key).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}
