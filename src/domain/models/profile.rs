//! 화면 표시용 프로필 모델

use serde::{Deserialize, Serialize};

/// 마이페이지에 표시되는 사용자 프로필
///
/// 서버의 사용자 정보로부터 매번 새로 만들어지는 파생 데이터이며,
/// 이전 값과 부분 병합하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub nickname: String,
    pub email: String,
    pub address: String,
    /// 이미지 URI 또는 data URI, 없으면 빈 문자열
    pub profile_image: String,
}

impl Profile {
    /// 이메일이 비어 있으면 주어진 값으로 채운 프로필을 반환합니다.
    pub fn with_fallback_email(mut self, email: &str) -> Self {
        if self.email.is_empty() {
            self.email = email.to_string();
        }
        self
    }

    /// 프로필 이미지가 설정되어 있는지 확인합니다.
    pub fn has_image(&self) -> bool {
        !self.profile_image.is_empty()
    }
}
