//! # 사용자 생성 요청 DTO
//!
//! 회원가입(`POST /api/v1/auth/signup`) 요청 본문을 정의합니다.
//! Spring Boot의 `@Valid @RequestBody` 패턴을 Rust로 구현한 것으로,
//! 형식 검증은 여기서, 이메일 중복 확인은 서비스 계층에서 수행합니다.
//!
//! ## 검증 규칙
//!
//! ### 이메일 (`email`)
//! - RFC 5322 표준 이메일 형식 준수
//!
//! ### 사용자명 (`username`)
//! - 길이: 3-30자
//! - 허용 문자: 영문, 숫자, 언더스코어(_)
//!
//! ### 표시 이름 (`name`) / 전체 이름 (`fullname`)
//! - 길이: 1-50자 / 1-100자, 유니코드 지원
//!
//! ### 비밀번호 (`password`)
//! - 최소 길이: 8자
//! - 필수 포함: 대문자, 소문자, 숫자
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "email": "user@example.com",
//!   "username": "john_doe",
//!   "name": "John",
//!   "fullname": "John Doe",
//!   "password": "SecurePass123"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::User;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (로그인 ID)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 사용자명 (영문, 숫자, 언더스코어만 허용)
    #[validate(length(
        min = 3,
        max = 30,
        message = "사용자명은 3-30자 사이여야 합니다"
    ))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    /// 표시 이름
    #[validate(length(
        min = 1,
        max = 50,
        message = "표시 이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 전체 이름
    #[validate(length(
        min = 1,
        max = 100,
        message = "전체 이름은 1-100자 사이여야 합니다"
    ))]
    pub fullname: String,

    /// 계정 비밀번호
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,
}

/// 사용자명 형식 검증 (영문, 숫자, 언더스코어만 허용)
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("사용자명은 알파벳, 숫자, 언더스코어만 사용 가능합니다".into()));
    }
    Ok(())
}

/// 비밀번호 보안 강도 검증 (엔티티의 형식 규칙을 그대로 적용)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    User::validate_password_format(password).map_err(|e| {
        ValidationError::new("weak_password").with_message(e.to_string().into())
    })
}
