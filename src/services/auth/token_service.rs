//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증을 담당합니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use crate::{
    config::JwtConfig,
    domain::entities::users::User,
    domain::models::token::{TokenClaims, TokenPair, TokenType},
    errors::AppError,
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 JWT 토큰을 생성하고 검증합니다.
/// 서명 키와 만료 기간은 생성 시점에 고정되며, 애플리케이션 전체가
/// 하나의 인스턴스를 `web::Data<TokenService>`로 공유합니다.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// 서명 키와 만료 기간으로 서비스 생성
    pub fn new(secret: &str, access_hours: i64, refresh_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl: Duration::hours(access_hours),
            refresh_ttl: Duration::days(refresh_days),
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_HOURS`, `JWT_REFRESH_EXPIRATION_DAYS`로 생성
    pub fn from_config() -> Result<Self, AppError> {
        Ok(Self::new(
            &JwtConfig::secret()?,
            JwtConfig::expiration_hours(),
            JwtConfig::refresh_expiration_days(),
        ))
    }

    /// 액세스 토큰 만료까지의 초
    pub fn access_expires_in(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    fn issue(&self, user: &User, token_type: TokenType, ttl: Duration) -> Result<String, AppError> {
        let now = Utc::now();

        let claims = TokenClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            roles: user.roles.clone(),
            token_type,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            email: Some(user.email.clone()),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> Result<String, AppError> {
        self.issue(user, TokenType::Access, self.access_ttl)
    }

    /// 사용자를 위한 리프레시 토큰 생성
    pub fn generate_refresh_token(&self, user: &User) -> Result<String, AppError> {
        self.issue(user, TokenType::Refresh, self.refresh_ttl)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    ///
    /// ```rust,ignore
    /// let token_pair = token_service.generate_token_pair(&user)?;
    /// println!("Expires in: {} seconds", token_pair.expires_in);
    /// ```
    pub fn generate_token_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.generate_access_token(user)?,
            refresh_token: self.generate_refresh_token(user)?,
            expires_in: self.access_expires_in(),
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명, 만료 시간을 검증합니다. 토큰 용도는 확인하지 않으므로
    /// 호출자가 [`verify_access_token`](Self::verify_access_token) 또는
    /// [`verify_refresh_token`](Self::verify_refresh_token)을 사용해야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError(format!("유효하지 않은 토큰입니다: {}", e)),
            })
    }

    fn verify_kind(&self, token: &str, expected: TokenType) -> Result<TokenClaims, AppError> {
        let claims = self.verify_token(token)?;
        if claims.token_type != expected {
            return Err(AppError::AuthenticationError(
                "토큰 용도가 올바르지 않습니다".to_string(),
            ));
        }
        Ok(claims)
    }

    /// 액세스 토큰 검증 (리프레시 토큰은 거부)
    pub fn verify_access_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify_kind(token, TokenType::Access)
    }

    /// 리프레시 토큰 검증 (액세스 토큰은 거부)
    pub fn verify_refresh_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        self.verify_kind(token, TokenType::Refresh)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())),
        }
    }
}
