//! 외부 키-값 저장소 연결 모듈
//!
//! Redis 자격 증명 저장소가 사용하는 문자열 키-값 클라이언트를 제공합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! CREDENTIAL_BACKEND=redis
//! REDIS_URL=redis://localhost:6379  # 기본값
//! REDIS_NAMESPACE=jikgumate         # 키 접두사
//! ```

pub mod redis;
