//! 로그인, 토큰 갱신, 역할 부여 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /api/v1/auth/refresh` 본문
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// `POST /api/v1/auth/login` 본문
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 72, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// `POST /api/v1/users/{id}/roles` 본문
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct AssignRoleRequest {
    #[validate(length(min = 1, max = 50, message = "역할 이름이 필요합니다"))]
    pub role: String,
}
