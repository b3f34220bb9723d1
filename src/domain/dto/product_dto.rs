//! 구매 요청(상품 분석) DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::{deserialize_null_default, is_valid_string};

/// 상품 분석 요청 (해외 상품 링크)
#[derive(Debug, Clone, Validate)]
pub struct ProductLinkRequest {
    #[validate(url(message = "올바른 상품 링크를 입력해주세요."))]
    pub url: String,
}

impl ProductLinkRequest {
    /// 링크를 검증하여 요청을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 링크가 비어 있거나 URL 형식이 아닌 경우
    pub fn new(link: &str) -> AppResult<Self> {
        if !is_valid_string(link) {
            return Err(AppError::ValidationError("상품 링크를 입력해주세요.".to_string()));
        }

        let request = Self {
            url: link.trim().to_string(),
        };
        request.validate().map_err(|e| {
            let message = e
                .field_errors()
                .values()
                .flat_map(|errors| errors.iter())
                .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "올바른 상품 링크를 입력해주세요.".to_string());
            AppError::ValidationError(message)
        })?;

        Ok(request)
    }
}

/// `GET /products/analyze` 응답 본문
///
/// 키가 없거나 값이 `null`인 필드는 기본값으로 채웁니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductInfo {
    #[serde(deserialize_with = "deserialize_null_default")]
    pub title: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub image: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub price: f64,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub desc: String,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub url: String,
}

impl ProductInfo {
    /// 원화 가격을 천 단위 구분 기호와 함께 표시합니다.
    pub fn formatted_price(&self) -> String {
        let rounded = self.price.round() as i64;
        let digits = rounded.unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        if rounded < 0 {
            format!("-{}원", grouped)
        } else {
            format!("{}원", grouped)
        }
    }
}
