//! # Authorized Request Client
//!
//! 모든 백엔드 호출이 지나가는 단일 관문입니다.
//!
//! 1. 설정된 API 주소를 매 호출마다 [`normalize_origin`]으로 정규화합니다.
//! 2. 토큰이 있으면 `Authorization: Bearer <token>` 헤더를 붙입니다.
//!    인증이 필요한 요청에 토큰이 없으면 네트워크 호출 없이 `Unauthorized`를 반환합니다.
//! 3. 응답을 [`RequestOutcome`] 네 가지 중 하나로 해석합니다.
//!
//! 이 클라이언트는 자격 증명 저장소를 읽지도, 변경하지도 않습니다.
//! 토큰은 호출자가 [`ApiRequest::authorized`]로 넘겨줍니다.
//!
//! ## 응답 해석 규칙
//!
//! | 응답 | 결과 |
//! |------|------|
//! | 2xx | `Success(JSON)`, 빈 본문은 `null` |
//! | 401 (인증 요청) | `Unauthorized` |
//! | 401 (비인증 요청) | 아래 실패 응답 규칙과 동일 |
//! | 기타 + JSON | `message` → `error` → 기본 메시지 |
//! | 기타 + 텍스트 | 비어 있지 않은 본문 → 기본 메시지 |
//! | 전송 실패 | `NetworkFailure(일반 안내 문구)` |

use std::sync::Arc;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::config::ApiConfig;
use crate::domain::RequestOutcome;
use crate::errors::AppResult;
use crate::http::{HttpTransport, TransportRequest, TransportResponse};
use crate::utils::string_utils::mask_token;

/// 응답에서 메시지를 찾지 못했을 때 보여줄 기본 문구
pub const GENERIC_ERROR_MESSAGE: &str = "요청 처리 중 오류가 발생했습니다.";

/// 전송 계층 실패 시 보여줄 기본 문구
pub const NETWORK_ERROR_MESSAGE: &str = "서버와 통신 중 오류가 발생했습니다. 네트워크 연결을 확인해주세요.";

/// 설정된 API 주소를 정규화합니다.
///
/// - `/api`로 끝나면 마지막 4글자를 제거합니다.
/// - 그렇지 않고 `/api/`를 포함하면 첫 번째 `/api`를 제거합니다.
/// - 마지막으로 끝의 `/` 하나를 제거합니다.
///
/// ```rust,ignore
/// assert_eq!(normalize_origin("https://h.example/api"), "https://h.example");
/// assert_eq!(normalize_origin("https://h.example/api/v1/"), "https://h.example/v1");
/// ```
pub fn normalize_origin(raw: &str) -> String {
    let mut origin = if let Some(stripped) = raw.strip_suffix("/api") {
        stripped.to_string()
    } else if raw.contains("/api/") {
        raw.replacen("/api", "", 1)
    } else {
        raw.to_string()
    };

    if origin.ends_with('/') {
        origin.pop();
    }

    origin
}

/// 백엔드 요청 빌더
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
    token: Option<String>,
    require_auth: bool,
    fallback_message: String,
    network_message: String,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            token: None,
            require_auth: false,
            fallback_message: GENERIC_ERROR_MESSAGE.to_string(),
            network_message: NETWORK_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// 쿼리 파라미터를 추가합니다. 값은 URL 인코딩됩니다.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// JSON 본문을 지정합니다.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// 인증이 필요한 요청으로 표시하고 토큰을 지정합니다.
    ///
    /// 토큰이 `None`이거나 빈 문자열이면 요청은 전송되지 않습니다.
    pub fn authorized(mut self, token: Option<&str>) -> Self {
        self.token = token.filter(|t| !t.is_empty()).map(str::to_string);
        self.require_auth = true;
        self
    }

    /// 응답에 메시지가 없을 때 사용할 문구를 지정합니다.
    pub fn fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// 전송 계층 실패 시 사용할 문구를 지정합니다.
    pub fn network_message(mut self, message: impl Into<String>) -> Self {
        self.network_message = message.into();
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// 경로와 쿼리 문자열을 합칩니다.
    fn path_and_query(&self) -> String {
        let path = if self.path.starts_with('/') {
            self.path.clone()
        } else {
            format!("/{}", self.path)
        };

        if self.query.is_empty() {
            return path;
        }

        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", path, query)
    }
}

/// 인증 요청 클라이언트
pub struct ApiClient {
    /// 정규화 이전의 원본 주소
    origin: String,
    transport: Arc<dyn HttpTransport>,
}

impl ApiClient {
    /// 클라이언트를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConfigurationError` - API 주소와 대체 주소가 모두 없는 경우
    pub fn new(config: &ApiConfig, transport: Arc<dyn HttpTransport>) -> AppResult<Self> {
        let origin = config.resolve_origin()?.to_string();
        log::debug!("API 클라이언트 생성: origin={}", origin);

        Ok(Self { origin, transport })
    }

    /// 정규화된 API 주소
    pub fn base_url(&self) -> String {
        normalize_origin(&self.origin)
    }

    /// 요청의 전체 URL
    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url(), request.path_and_query())
    }

    /// 요청을 보내고 응답을 JSON 결과로 해석합니다.
    pub async fn call(&self, request: ApiRequest) -> RequestOutcome<Value> {
        if request.require_auth && request.token.is_none() {
            log::debug!("토큰 없이 인증 요청 시도: {} {}", request.method, request.path);
            return RequestOutcome::Unauthorized;
        }

        let url = self.url_for(&request);
        match &request.token {
            Some(token) => log::debug!("{} {} (token={})", request.method, url, mask_token(token)),
            None => log::debug!("{} {}", request.method, url),
        }

        let transport_request = TransportRequest {
            method: request.method.clone(),
            url,
            bearer_token: request.token.clone(),
            json_body: request.body.clone(),
        };

        match self.transport.send(transport_request).await {
            // 세션이 없는 요청(로그인 등)의 401은 서버 메시지를 그대로 보여줌
            Ok(response) if response.status == 401 && !request.require_auth => {
                failure_outcome(&response, &request.fallback_message)
            }
            Ok(response) => interpret_response(&response, &request.fallback_message),
            Err(e) => {
                log::error!("전송 실패: {}", e);
                RequestOutcome::NetworkFailure(request.network_message)
            }
        }
    }

    /// 요청을 보내고 성공 본문을 지정한 타입으로 역직렬화합니다.
    ///
    /// 역직렬화에 실패하면 기본 메시지를 가진 `ClientOrServerError`가 됩니다.
    pub async fn call_as<T: DeserializeOwned>(&self, request: ApiRequest) -> RequestOutcome<T> {
        let fallback = request.fallback_message.clone();

        match self.call(request).await {
            RequestOutcome::Success(value) => match serde_json::from_value::<T>(value) {
                Ok(parsed) => RequestOutcome::Success(parsed),
                Err(e) => {
                    log::warn!("응답 본문 형식 오류: {}", e);
                    RequestOutcome::ClientOrServerError {
                        status: 200,
                        message: fallback,
                    }
                }
            },
            RequestOutcome::Unauthorized => RequestOutcome::Unauthorized,
            RequestOutcome::ClientOrServerError { status, message } => {
                RequestOutcome::ClientOrServerError { status, message }
            }
            RequestOutcome::NetworkFailure(message) => RequestOutcome::NetworkFailure(message),
        }
    }
}

/// 전송 계층 응답을 요청 결과로 해석합니다.
pub fn interpret_response(response: &TransportResponse, fallback_message: &str) -> RequestOutcome<Value> {
    let status = response.status;

    if response.is_success() {
        if response.body.trim().is_empty() {
            return RequestOutcome::Success(Value::Null);
        }
        return match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => RequestOutcome::Success(value),
            Err(e) => {
                log::warn!("성공 응답 파싱 실패 (status={}): {}", status, e);
                RequestOutcome::ClientOrServerError {
                    status,
                    message: fallback_message.to_string(),
                }
            }
        };
    }

    if status == 401 {
        log::warn!("401 Unauthorized 응답");
        return RequestOutcome::Unauthorized;
    }

    failure_outcome(response, fallback_message)
}

/// 실패 응답 본문에서 사용자 메시지를 꺼내 `ClientOrServerError`로 만듭니다.
fn failure_outcome(response: &TransportResponse, fallback_message: &str) -> RequestOutcome<Value> {
    let status = response.status;
    let extracted = if response.is_json() {
        serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| extract_error_message(&body))
    } else {
        Some(response.body.trim())
            .filter(|text| !text.is_empty())
            .map(str::to_string)
    };
    let message = extracted.unwrap_or_else(|| fallback_message.to_string());

    log::warn!("요청 실패 (status={}): {}", status, message);
    RequestOutcome::ClientOrServerError { status, message }
}

/// 에러 본문에서 `message`, 없으면 `error` 문자열을 꺼냅니다.
fn extract_error_message(body: &Value) -> Option<String> {
    ["message", "error"].iter().find_map(|key| {
        body.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
    })
}
