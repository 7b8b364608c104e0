//! 사용자 정보 수정 요청 DTO
//!
//! 모든 필드가 선택사항입니다. `name`, `fullname`, `email`의 빈 문자열이나
//! 공백만 있는 값은 역직렬화 시 `None`으로 정리되므로, 서비스 계층은 값이 있는
//! 필드만 덮어씁니다. `password`는 손대지 않고 받은 그대로 전달됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 부분 수정 요청 (`PATCH /api/v1/users/{id}`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 50, message = "표시 이름은 50자를 넘을 수 없습니다"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "전체 이름은 100자를 넘을 수 없습니다"))]
    pub fullname: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 새 비밀번호. 형식 검증과 해싱은 서비스 계층에서 수행합니다.
    #[serde(default)]
    pub password: Option<String>,
}
