//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 로그 출력용 토큰 미리보기
///
/// 앞 20자만 남기고 `...`을 붙입니다. 토큰 전체는 절대 로그에 남기지 않습니다.
///
/// ```rust,ignore
/// assert_eq!(mask_token("abc"), "abc...");
/// ```
pub fn mask_token(token: &str) -> String {
    let preview: String = token.chars().take(20).collect();
    format!("{}...", preview)
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// `#[serde(deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// `null`을 기본값으로 바꾸는 serde deserializer
///
/// `#[serde(default)]`는 키가 없을 때만 적용되므로, 값이 `null`인 필드에
/// `#[serde(deserialize_with = "deserialize_null_default")]`를 함께 지정합니다.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Hello"));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("\t\n"));
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abc"), "abc...");
        let long = "eyJhbGciOiJIUzI1NiJ9.payload.signature";
        let masked = mask_token(long);
        assert_eq!(masked, "eyJhbGciOiJIUzI1NiJ9...");
        assert!(!masked.contains("signature"));
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            optional_field: Option<String>,
        }

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": "  토큰  "}"#).unwrap();
        assert_eq!(result.optional_field, Some("토큰".to_string()));

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": ""}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{"optional_field": null}"#).unwrap();
        assert_eq!(result.optional_field, None);

        let result: TestStruct = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(result.optional_field, None);
    }

    #[test]
    fn test_deserialize_null_default() {
        #[derive(Deserialize)]
        struct TestStruct {
            #[serde(default, deserialize_with = "deserialize_null_default")]
            text: String,
            #[serde(default, deserialize_with = "deserialize_null_default")]
            amount: f64,
        }

        let result: TestStruct = serde_json::from_str(r#"{"text": null, "amount": null}"#).unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.amount, 0.0);

        let result: TestStruct = serde_json::from_str(r#"{"text": "상품", "amount": 3.5}"#).unwrap();
        assert_eq!(result.text, "상품");
        assert_eq!(result.amount, 3.5);
    }
}
