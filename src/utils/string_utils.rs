//! # 문자열 유틸리티
//!
//! 부분 수정 요청에서 사용하는 선택적 문자열 정리 함수들입니다.
//! 빈 문자열이나 공백만 있는 값은 "값 없음"으로 취급합니다.

use serde::Deserialize;

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Hello  ".to_string())), Some("Hello".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
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

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 사용합니다.
///
/// - `{"nickname": "  Alice  "}` → `Some("Alice")`
/// - `{"nickname": ""}` → `None`
/// - `{"nickname": null}` → `None`
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 이메일 정규화 (공백 제거 + 소문자)
///
/// 저장소 조회와 중복 확인은 항상 정규화된 이메일로 수행합니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
