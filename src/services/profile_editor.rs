//! 프로필 편집
//!
//! 서버에 저장하는 엔드포인트가 없으므로 화면 상태만 바꿉니다.
//! 편집은 현재 프로필의 복사본([`ProfileDraft`])에서 이루어지고,
//! [`ProfileDraft::commit`]이 성공해야 새 프로필이 됩니다. 이메일은 편집할 수 없습니다.

use std::path::Path;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use crate::domain::Profile;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::is_valid_string;

pub const NICKNAME_REQUIRED_MESSAGE: &str = "닉네임을 입력해주세요.";

/// 편집 중인 프로필
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    nickname: String,
    address: String,
    profile_image: String,
    email: String,
}

impl ProfileDraft {
    /// 현재 프로필에서 편집을 시작합니다.
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            nickname: profile.nickname.clone(),
            address: profile.address.clone(),
            profile_image: profile.profile_image.clone(),
            email: profile.email.clone(),
        }
    }

    pub fn set_nickname(&mut self, nickname: impl Into<String>) -> &mut Self {
        self.nickname = nickname.into();
        self
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> &mut Self {
        self.address = address.into();
        self
    }

    /// 이미지 바이트를 `data:<mime>;base64,...` URI로 바꿔 프로필 사진으로 지정합니다.
    pub fn set_image_bytes(&mut self, mime: &str, bytes: &[u8]) -> &mut Self {
        self.profile_image = format!("data:{};base64,{}", mime, STANDARD.encode(bytes));
        self
    }

    /// 이미지 파일을 읽어 프로필 사진으로 지정합니다. MIME은 확장자로 추정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::StorageError` - 파일을 읽을 수 없는 경우
    pub async fn set_image_file(&mut self, path: &Path) -> AppResult<&mut Self> {
        let bytes = tokio::fs::read(path).await?;
        let mime = mime_from_extension(path);
        log::debug!("프로필 이미지 로드: {} ({} bytes, {})", path.display(), bytes.len(), mime);
        Ok(self.set_image_bytes(mime, &bytes))
    }

    pub fn preview_image(&self) -> &str {
        &self.profile_image
    }

    /// 편집을 확정하여 새 프로필을 만듭니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 닉네임이 비어 있는 경우
    pub fn commit(&self) -> AppResult<Profile> {
        if !is_valid_string(&self.nickname) {
            return Err(AppError::ValidationError(NICKNAME_REQUIRED_MESSAGE.to_string()));
        }

        Ok(Profile {
            nickname: self.nickname.trim().to_string(),
            email: self.email.clone(),
            address: self.address.trim().to_string(),
            profile_image: self.profile_image.clone(),
        })
    }
}

fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> Profile {
        Profile {
            nickname: "Kim".to_string(),
            email: "x@y.com".to_string(),
            address: "Seoul".to_string(),
            profile_image: String::new(),
        }
    }

    #[test]
    fn test_commit_applies_edits_and_keeps_email() {
        let mut draft = ProfileDraft::from_profile(&current());
        draft.set_nickname(" Lee ").set_address("Busan");

        let updated = draft.commit().unwrap();
        assert_eq!(updated.nickname, "Lee");
        assert_eq!(updated.address, "Busan");
        assert_eq!(updated.email, "x@y.com");
    }

    #[test]
    fn test_blank_nickname_rejected() {
        let mut draft = ProfileDraft::from_profile(&current());
        draft.set_nickname("   ");

        assert_eq!(
            draft.commit().unwrap_err(),
            AppError::ValidationError(NICKNAME_REQUIRED_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_image_bytes_become_data_uri() {
        let mut draft = ProfileDraft::from_profile(&current());
        draft.set_image_bytes("image/png", b"hello");

        assert_eq!(draft.preview_image(), "data:image/png;base64,aGVsbG8=");
        assert!(draft.commit().unwrap().has_image());
    }

    #[tokio::test]
    async fn test_image_file_mime_guess() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.JPG");
        std::fs::write(&path, [0xffu8, 0xd8]).unwrap();

        let mut draft = ProfileDraft::from_profile(&current());
        draft.set_image_file(&path).await.unwrap();
        assert_eq!(draft.preview_image(), "data:image/jpeg;base64,/9g=");
    }

    #[tokio::test]
    async fn test_missing_image_file_is_error() {
        let mut draft = ProfileDraft::from_profile(&current());
        let result = draft.set_image_file(Path::new("/nonexistent/avatar.png")).await;
        assert!(matches!(result, Err(AppError::StorageError(_))));
    }
}
