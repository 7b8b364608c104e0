//! 인증 관련 설정
//!
//! 토큰 서명 비밀키와 만료 시간을 환경 변수에서 읽어옵니다.

use std::env;
use crate::config::Environment;
use crate::errors::AppError;

const DEVELOPMENT_SECRET: &str = "your-secret-key";

/// JWT 서명 설정
///
/// 계정 모듈이 토큰 서비스를 구성할 때 사용하는 서명 비밀키와 만료 정책입니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명 비밀키 (`JWT_SECRET`)
    ///
    /// 운영 환경에서 비어 있으면 에러를 반환하고 서버는 시작하지 않습니다.
    pub fn secret() -> Result<String, AppError> {
        Self::secret_for(&Environment::current(), env::var("JWT_SECRET").ok())
    }

    /// 운영 환경이 아니면 개발용 기본 비밀키로 대체합니다.
    pub fn secret_for(environment: &Environment, value: Option<String>) -> Result<String, AppError> {
        match value.filter(|secret| !secret.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if *environment == Environment::Production => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Ok(DEVELOPMENT_SECRET.to_string())
            }
        }
    }

    /// 액세스 토큰 만료 시간 (시간 단위, 기본값 24)
    pub fn expiration_hours() -> i64 {
        Self::parse_positive("JWT_EXPIRATION_HOURS", 24)
    }

    /// 리프레시 토큰 만료 기간 (일 단위, 기본값 7)
    pub fn refresh_expiration_days() -> i64 {
        Self::parse_positive("JWT_REFRESH_EXPIRATION_DAYS", 7)
    }

    fn parse_positive(key: &str, default: i64) -> i64 {
        env::var(key)
            .ok()
            .and_then(|value| value.parse::<i64>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(default)
    }
}
