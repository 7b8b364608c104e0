//! JWT 인증 토큰 클레임 및 토큰 쌍
//!
//! RFC 7519 표준 클레임에 사용자 역할과 토큰 용도(`token_type`)를 더했습니다.
use serde::{Deserialize, Serialize};

/// 토큰 용도
///
/// 리프레시 토큰으로 API에 접근하거나 액세스 토큰으로 갱신하는 것을 막기 위해
/// 클레임에 용도를 기록합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `roles`: 사용자 권한 목록
/// - `token_type`: `access` 또는 `refresh`
/// - `iat` / `exp`: 발급/만료 시간 (Unix timestamp)
/// - `email`: 사용자 이메일 (선택사항)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub roles: Vec<String>,
    pub token_type: TokenType,
    pub iat: i64,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// JWT 토큰 쌍 구조체
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
}
