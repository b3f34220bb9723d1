//! 실행 환경 및 자격 증명 저장소 설정 관리 모듈
//!
//! 실행 프로파일(.env 파일) 로딩과 자격 증명이 저장될 위치를 관리합니다.

use std::env;
use std::path::PathBuf;
use log::{error, info};

/// 애플리케이션 실행 환경
///
/// 기본 로그 레벨을 결정합니다. `RUST_LOG`가 있으면 그 값이 우선입니다.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다. 알 수 없는 값은 `Production`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            _ => Environment::Production,
        }
    }

    /// `RUST_LOG`가 없을 때 사용할 로그 필터
    pub fn default_log_filter(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Production => "info",
        }
    }
}

/// 환경별 설정 파일을 로드합니다
///
/// `PROFILE` 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
pub fn load_env_file() {
    let profile = env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv::dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 자격 증명 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    /// JSON 파일 (기본값) - 프로세스 재시작 후에도 유지
    File,
    /// Redis 키 - 같은 네임스페이스를 공유하는 클라이언트끼리 유지
    Redis,
    /// 프로세스 메모리 - 종료 시 사라짐
    Memory,
}

impl StorageBackend {
    /// 문자열에서 저장소 종류를 생성합니다. 알 수 없는 값은 `File`입니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "redis" => StorageBackend::Redis,
            "memory" | "mem" => StorageBackend::Memory,
            _ => StorageBackend::File,
        }
    }
}

/// 자격 증명 저장소 설정
///
/// ```bash
/// export CREDENTIAL_BACKEND="file"            # file, redis, memory
/// export CREDENTIAL_FILE=".jikgumate/credentials.json"
/// export REDIS_URL="redis://localhost:6379"
/// export REDIS_NAMESPACE="jikgumate"
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub credential_file: PathBuf,
    pub redis_url: String,
    pub redis_namespace: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            credential_file: PathBuf::from(".jikgumate/credentials.json"),
            redis_url: "redis://localhost:6379".to_string(),
            redis_namespace: "jikgumate".to_string(),
        }
    }
}

impl StorageConfig {
    /// 프로세스 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::from_source(|key| env::var(key).ok())
    }

    /// 임의의 키-값 조회 함수에서 설정을 읽어옵니다.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            backend: lookup("CREDENTIAL_BACKEND")
                .map(|s| StorageBackend::from_str(&s))
                .unwrap_or(defaults.backend),
            credential_file: lookup("CREDENTIAL_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.credential_file),
            redis_url: lookup("REDIS_URL").unwrap_or(defaults.redis_url),
            redis_namespace: lookup("REDIS_NAMESPACE").unwrap_or(defaults.redis_namespace),
        }
    }
}
