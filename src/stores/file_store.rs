//! 파일 기반 자격 증명 저장소
//!
//! 세 개의 키를 하나의 JSON 객체 파일로 저장합니다.
//!
//! ```json
//! { "token": "eyJ...", "email": "kim@example.com", "user": "{\"name\":\"Kim\"}" }
//! ```
//!
//! 쓰기는 임시 파일에 기록한 뒤 rename하여 반쯤 쓰인 파일이 남지 않도록 합니다.
//! 파일이 없으면 비로그인 상태, 손상된 파일도 경고 후 비로그인 상태로 취급합니다.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use tokio::fs;
use crate::domain::Credentials;
use crate::errors::{AppResult, ErrorContext};
use super::{from_entries, to_entries, CredentialStore};

#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "credentials.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_entries(&self) -> AppResult<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<HashMap<String, String>>(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                log::warn!(
                    "자격 증명 파일이 손상되어 무시합니다 ({}): {}",
                    self.path.display(),
                    e
                );
                Ok(HashMap::new())
            }
        }
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> AppResult<Credentials> {
        let entries = self.read_entries().await?;
        Ok(from_entries(&entries))
    }

    async fn set(&self, credentials: &Credentials) -> AppResult<()> {
        let entries = to_entries(credentials)?;
        let body = serde_json::to_string_pretty(&entries).context("자격 증명 직렬화 실패")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let temp = self.temp_path();
        fs::write(&temp, body).await?;
        fs::rename(&temp, &self.path).await?;

        log::debug!("자격 증명 파일 저장: {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                log::debug!("자격 증명 파일 삭제: {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
