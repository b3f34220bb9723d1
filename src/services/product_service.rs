//! 구매 요청(상품 분석) 서비스
//!
//! 해외 상품 링크를 `GET /products/analyze?url=...`로 보내고 분석 결과를 받습니다.
//! 세션에 묶인 호출이므로 401을 받으면 저장소를 비우고 로그인 페이지로 이동합니다.

use crate::domain::{ProductInfo, ProductLinkRequest, RequestOutcome};
use crate::errors::{AppError, AppResult};
use crate::navigation::PageScope;
use crate::utils::string_utils::mask_token;
use super::api_client::ApiRequest;
use super::session_guard::{expire_session, SESSION_EXPIRED_MESSAGE};
use super::SessionContext;

pub const LOGIN_FIRST_MESSAGE: &str = "로그인이 필요합니다. 먼저 로그인해주세요.";
pub const ANALYZE_FAILED_MESSAGE: &str = "상품 정보를 가져오는데 실패했습니다.";
pub const ANALYZE_NETWORK_MESSAGE: &str = "상품 정보를 가져오는 중 오류가 발생했습니다.";

pub struct ProductService {
    context: SessionContext,
}

impl ProductService {
    pub fn new(context: SessionContext) -> Self {
        Self { context }
    }

    /// 상품 링크를 분석합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 링크가 비었거나 URL이 아닌 경우
    /// * `AppError::Unauthorized` - 토큰 없음(호출 없음) 또는 서버의 401
    /// * `AppError::RemoteError` - 그 밖의 실패 응답
    /// * `AppError::NetworkFailure` - 서버와 통신 실패
    pub async fn analyze(&self, link: &str, scope: &PageScope) -> AppResult<ProductInfo> {
        let request = ProductLinkRequest::new(link)?;

        let credentials = self.context.store.get().await.unwrap_or_else(|e| {
            log::error!("자격 증명 읽기 실패: {}", e);
            Default::default()
        });
        let Some(token) = credentials.token() else {
            return Err(AppError::Unauthorized(LOGIN_FIRST_MESSAGE.to_string()));
        };

        log::debug!("상품 분석 요청: {} (token={})", request.url, mask_token(token));

        let api_request = ApiRequest::get("/products/analyze")
            .query("url", request.url.as_str())
            .authorized(Some(token))
            .fallback_message(ANALYZE_FAILED_MESSAGE)
            .network_message(ANALYZE_NETWORK_MESSAGE);

        match self.context.client.call_as::<ProductInfo>(api_request).await {
            RequestOutcome::Success(product) => {
                log::info!("✅ 상품 분석 완료: {}", product.title);
                Ok(product)
            }
            RequestOutcome::Unauthorized => {
                expire_session(&self.context, scope).await;
                Err(AppError::Unauthorized(SESSION_EXPIRED_MESSAGE.to_string()))
            }
            outcome => outcome.into_result(SESSION_EXPIRED_MESSAGE),
        }
    }
}
